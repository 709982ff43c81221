use alloc::vec::Vec;
use core::fmt::Debug;

use zeroize::Zeroize;

use super::*;
use crate::{try_alloc_copy, try_alloc_vec, try_pull_u32_be, ChunkError};

/// An owned PNG chunk: a type code and its data.
///
/// The length field of the frame is always the length of the data, so it's
/// not stored separately. The data is limited to [`MAX_CHUNK_LENGTH`] bytes,
/// and the type is always valid (unless the chunk has been
/// [`clear`](Chunk::clear)ed, in which case the type is all zeroes).
///
/// When a chunk is dropped the data bytes are zeroed before the memory is
/// released.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Chunk {
  ty: ChunkType,
  data: Vec<u8>,
}
impl Debug for Chunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Chunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .finish()
  }
}
impl Drop for Chunk {
  #[inline]
  fn drop(&mut self) {
    self.data.zeroize();
  }
}
impl Chunk {
  /// Makes a chunk holding a copy of the data.
  ///
  /// The copy is allocated through [`try_alloc_copy`], so data over
  /// [`MAX_ALLOCATION`](crate::MAX_ALLOCATION) bytes can't be copied this way.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if the type is invalid or the data is
  ///   longer than [`MAX_CHUNK_LENGTH`].
  /// * [`ChunkError::OutOfMemory`] if the copy can't be allocated.
  #[inline]
  pub fn new(ty: ChunkType, data: &[u8]) -> Result<Self, ChunkError> {
    check_parts(ty, data.len())?;
    Ok(Self { ty, data: try_alloc_copy(data)? })
  }

  /// Makes a chunk that takes ownership of the data.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if the type is invalid or the data is
  ///   longer than [`MAX_CHUNK_LENGTH`].
  #[inline]
  pub fn from_vec(ty: ChunkType, data: Vec<u8>) -> Result<Self, ChunkError> {
    let length = u32::try_from(data.len())?;
    Self::from_parts(ty, Some(data), length)
  }

  /// Makes a chunk from a type, an optional data buffer, and a declared
  /// length.
  ///
  /// A `None` buffer is allowed only with a length of 0.
  ///
  /// ## Failure
  /// * [`ChunkError::NullArgument`] if `data` is `None` but `length` isn't 0.
  /// * [`ChunkError::IllegalArgument`] if `length` doesn't match the buffer,
  ///   is over [`MAX_CHUNK_LENGTH`], or the type is invalid.
  pub fn from_parts(
    ty: ChunkType, data: Option<Vec<u8>>, length: u32,
  ) -> Result<Self, ChunkError> {
    let data = match data {
      Some(data) => data,
      None if length != 0 => return Err(ChunkError::NullArgument),
      None => Vec::new(),
    };
    if data.len() != length as usize {
      return Err(ChunkError::IllegalArgument);
    }
    check_parts(ty, data.len())?;
    Ok(Self { ty, data })
  }

  /// The chunk type.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkType {
    self.ty
  }

  /// The chunk data.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }

  /// The value of the frame's length field.
  #[inline]
  #[must_use]
  pub fn length(&self) -> u32 {
    // can't truncate, the constructors check against MAX_CHUNK_LENGTH
    self.data.len() as u32
  }

  /// The CRC value for this chunk's frame, see [`chunk_crc`].
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    chunk_crc(self.ty, &self.data)
  }

  /// Total bytes of the serialized frame (data length plus 12).
  #[inline]
  #[must_use]
  pub fn serialized_len(&self) -> usize {
    self.data.len() + CHUNK_OVERHEAD
  }

  /// Writes the full frame (length, type, data, CRC) to the front of `out`.
  ///
  /// Returns the number of bytes written.
  ///
  /// ## Failure
  /// * [`ChunkError::CapacityExceeded`] if `out` is shorter than
  ///   [`serialized_len`](Chunk::serialized_len). Nothing is written in this
  ///   case, so you can probe with an empty slice.
  pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize, ChunkError> {
    let required = self.serialized_len();
    let out = match out.get_mut(..required) {
      Some(out) => out,
      None => return Err(ChunkError::CapacityExceeded { required }),
    };
    let (length_field, rest) = out.split_at_mut(4);
    let (type_field, rest) = rest.split_at_mut(4);
    let (data_field, crc_field) = rest.split_at_mut(self.data.len());
    length_field.copy_from_slice(&self.length().to_be_bytes());
    type_field.copy_from_slice(&self.ty.0);
    data_field.copy_from_slice(&self.data);
    crc_field.copy_from_slice(&self.crc().to_be_bytes());
    Ok(required)
  }

  /// Serializes the frame into a freshly allocated vec.
  ///
  /// ## Failure
  /// * [`ChunkError::OutOfMemory`] if the frame is over
  ///   [`MAX_ALLOCATION`](crate::MAX_ALLOCATION) bytes.
  pub fn to_bytes(&self) -> Result<Vec<u8>, ChunkError> {
    let required = match self.serialize_into(&mut []) {
      Err(ChunkError::CapacityExceeded { required }) => required,
      other => other?,
    };
    let mut out = try_alloc_vec::<u8>(required)?;
    let written = self.serialize_into(&mut out)?;
    debug_assert_eq!(written, out.len());
    Ok(out)
  }

  /// Reads one frame from the front of the bytes.
  ///
  /// Returns the chunk and how many bytes the frame used.
  ///
  /// ## Failure
  /// * [`ChunkError::MalformedData`] if the length field is over
  ///   [`MAX_CHUNK_LENGTH`] (no amount of extra input can fix that), or if
  ///   the frame is intact but the type code isn't valid.
  /// * [`ChunkError::IncompleteData`] if there's fewer bytes than the frame
  ///   says it needs.
  /// * [`ChunkError::OutOfMemory`] if the data can't be allocated.
  /// * [`ChunkError::ChecksumMismatch`] if the CRC doesn't match.
  pub fn deserialize(bytes: &[u8]) -> Result<(Self, usize), ChunkError> {
    let (length, rest) = try_pull_u32_be(bytes).ok_or(ChunkError::IncompleteData)?;
    if length > MAX_CHUNK_LENGTH {
      log::debug!("chunk length field {length} is over the limit");
      return Err(ChunkError::MalformedData);
    }
    let data_len = length as usize;
    let frame_len = data_len + CHUNK_OVERHEAD;
    if bytes.len() < frame_len {
      return Err(ChunkError::IncompleteData);
    }
    let (type_field, rest) = rest.split_at(4);
    let (data_field, rest) = rest.split_at(data_len);
    let ty = ChunkType([type_field[0], type_field[1], type_field[2], type_field[3]]);
    let (declared, _) = try_pull_u32_be(rest).ok_or(ChunkError::IncompleteData)?;

    let data = try_alloc_copy(data_field)?;
    let chunk = Self { ty, data };
    let actual = chunk.crc();
    if declared != actual {
      log::debug!("{ty:?} chunk CRC mismatch: declared {declared:#010X}, actual {actual:#010X}");
      return Err(ChunkError::ChecksumMismatch { declared, actual });
    }
    if !ty.is_valid() {
      log::debug!("chunk type {:?} is not ASCII letters", ty.0);
      return Err(ChunkError::MalformedData);
    }
    log::trace!("decoded {ty:?} chunk, {length} data bytes");
    Ok((chunk, frame_len))
  }

  /// Resets this chunk to the empty state and hands back the data buffer.
  ///
  /// The buffer is *not* zeroed, you own it now.
  #[inline]
  pub fn clear(&mut self) -> Vec<u8> {
    self.ty = ChunkType::default();
    core::mem::take(&mut self.data)
  }

  /// Zeroes the data, releases it, and resets this chunk to the empty state.
  #[inline]
  pub fn free(&mut self) {
    self.data.zeroize();
    drop(self.clear());
  }

  /// Exchanges the full contents of two chunks.
  #[inline]
  pub fn swap(&mut self, other: &mut Self) {
    core::mem::swap(self, other);
  }

  /// If this is an `IDAT` chunk. Any length is allowed.
  #[inline]
  #[must_use]
  pub fn is_idat(&self) -> bool {
    self.ty == ChunkType::IDAT
  }

  /// If this is an `IEND` chunk with no data.
  #[inline]
  #[must_use]
  pub fn is_iend(&self) -> bool {
    self.ty == ChunkType::IEND && self.data.is_empty()
  }
}

#[inline]
fn check_parts(ty: ChunkType, data_len: usize) -> Result<(), ChunkError> {
  if data_len > MAX_CHUNK_LENGTH as usize || !ty.is_valid() {
    Err(ChunkError::IllegalArgument)
  } else {
    Ok(())
  }
}
