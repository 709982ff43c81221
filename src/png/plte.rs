use alloc::vec::Vec;
use core::fmt::Debug;

use pixel_formats::r8g8b8_Srgb;
use zeroize::Zeroize;

use super::*;
use crate::{try_alloc_copy, try_alloc_vec, ChunkError};

/// Most entries a palette can have.
pub const MAX_PALETTE_ENTRIES: usize = 255;

/// Most bytes of data a `PLTE` chunk can have.
pub const MAX_PALETTE_LEN: usize = MAX_PALETTE_ENTRIES * 3;

/// If a data length is a whole number of entries, and not too many of them.
#[inline]
#[must_use]
const fn palette_len_is_valid(len: usize) -> bool {
  len % 3 == 0 && len <= MAX_PALETTE_LEN
}

/// Palette data
///
/// Palette entries are always RGB, 8 bits per channel. On the wire each entry
/// is 3 bytes (red, green, blue), so entry `i` starts at byte `3 * i`.
///
/// If you want to have a paletted image with transparency then the transparency
/// info goes in a separate transparency chunk.
#[derive(Clone, Default)]
pub struct PLTE {
  entries: Vec<r8g8b8_Srgb>,
}
impl Debug for PLTE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // currently prints no more than 4 palette entries
    f.debug_tuple("PLTE")
      .field(&&self.entries[..self.entries.len().min(4)])
      .field(&self.entries.len())
      .finish()
  }
}
impl PLTE {
  /// Makes a palette holding a copy of the entries.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if there's more than 255 entries.
  /// * [`ChunkError::OutOfMemory`] if the copy can't be allocated.
  #[inline]
  pub fn new(entries: &[r8g8b8_Srgb]) -> Result<Self, ChunkError> {
    if entries.len() > MAX_PALETTE_ENTRIES {
      return Err(ChunkError::IllegalArgument);
    }
    Ok(Self { entries: try_alloc_copy(entries)? })
  }

  /// Makes a palette that takes ownership of the entries.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if there's more than 255 entries.
  #[inline]
  pub fn from_vec(entries: Vec<r8g8b8_Srgb>) -> Result<Self, ChunkError> {
    let size = u8::try_from(entries.len())?;
    Self::from_parts(Some(entries), size)
  }

  /// Makes a palette from an optional entry buffer and a declared size.
  ///
  /// A `None` buffer is allowed only with a size of 0.
  ///
  /// ## Failure
  /// * [`ChunkError::NullArgument`] if `entries` is `None` but `size` isn't 0.
  /// * [`ChunkError::IllegalArgument`] if `size` doesn't match the buffer.
  pub fn from_parts(entries: Option<Vec<r8g8b8_Srgb>>, size: u8) -> Result<Self, ChunkError> {
    let entries = match entries {
      Some(entries) => entries,
      None if size != 0 => return Err(ChunkError::NullArgument),
      None => Vec::new(),
    };
    if entries.len() != usize::from(size) {
      return Err(ChunkError::IllegalArgument);
    }
    Ok(Self { entries })
  }

  /// If the entry count fits in the 8-bit size.
  #[inline]
  #[must_use]
  pub fn is_valid(&self) -> bool {
    self.entries.len() <= MAX_PALETTE_ENTRIES
  }

  /// Gets the entries as a slice.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[r8g8b8_Srgb] {
    &self.entries
  }

  /// Number of entries.
  #[inline]
  #[must_use]
  pub fn size(&self) -> u8 {
    // can't truncate, the constructors check against MAX_PALETTE_ENTRIES
    self.entries.len() as u8
  }

  /// The color at the given index.
  ///
  /// ## Failure
  /// * [`ChunkError::NotFound`] if the index is past the end of the palette.
  #[inline]
  pub fn get_color(&self, index: u8) -> Result<r8g8b8_Srgb, ChunkError> {
    self.entries.get(usize::from(index)).copied().ok_or(ChunkError::NotFound)
  }

  /// Bytes of serialized data (3 per entry).
  #[inline]
  #[must_use]
  pub fn serialized_len(&self) -> usize {
    self.entries.len() * 3
  }

  /// Writes the entries to the front of `out` as RGB triples.
  ///
  /// Returns the number of bytes written. An empty palette writes 0 bytes.
  ///
  /// ## Failure
  /// * [`ChunkError::CapacityExceeded`] if `out` is too short. Nothing is
  ///   written in this case.
  pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize, ChunkError> {
    let required = self.serialized_len();
    let out = match out.get_mut(..required) {
      Some(out) => out,
      None => return Err(ChunkError::CapacityExceeded { required }),
    };
    let triples: &mut [[u8; 3]] = bytemuck::cast_slice_mut(out);
    for (triple, c) in triples.iter_mut().zip(self.entries.iter()) {
      *triple = [c.r, c.g, c.b];
    }
    Ok(required)
  }

  /// Serializes the entries into a freshly allocated vec.
  #[inline]
  pub fn to_bytes(&self) -> Result<Vec<u8>, ChunkError> {
    let mut out = try_alloc_vec::<u8>(self.serialized_len())?;
    self.serialize_into(&mut out)?;
    Ok(out)
  }

  /// Reads a palette from the bytes, all of which are used.
  ///
  /// Returns the palette and the number of bytes used.
  ///
  /// ## Failure
  /// * [`ChunkError::IncompleteData`] if the length isn't a multiple of 3.
  /// * [`ChunkError::MalformedData`] if there'd be more than 255 entries.
  /// * [`ChunkError::OutOfMemory`] if the entries can't be allocated.
  pub fn deserialize(bytes: &[u8]) -> Result<(Self, usize), ChunkError> {
    let triples: &[[u8; 3]] = match bytemuck::try_cast_slice(bytes) {
      Ok(triples) => triples,
      Err(_) => return Err(ChunkError::IncompleteData),
    };
    if triples.len() > MAX_PALETTE_ENTRIES {
      return Err(ChunkError::MalformedData);
    }
    let mut entries = try_alloc_vec::<r8g8b8_Srgb>(triples.len())?;
    for (entry, [r, g, b]) in entries.iter_mut().zip(triples.iter().copied()) {
      *entry = r8g8b8_Srgb { r, g, b };
    }
    Ok((Self { entries }, bytes.len()))
  }

  /// Makes a `PLTE` chunk holding this palette.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if the palette isn't valid.
  /// * [`ChunkError::OutOfMemory`] if the data can't be allocated.
  pub fn to_chunk(&self) -> Result<Chunk, ChunkError> {
    if !self.is_valid() {
      return Err(ChunkError::IllegalArgument);
    }
    Chunk::from_vec(ChunkType::PLTE, self.to_bytes()?)
  }

  /// Reads the palette out of a `PLTE` chunk.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if [`Chunk::is_plte`] is false.
  /// * [`ChunkError::OutOfMemory`] if the entries can't be allocated.
  pub fn from_chunk(chunk: &Chunk) -> Result<Self, ChunkError> {
    if !chunk.is_plte() {
      return Err(ChunkError::IllegalArgument);
    }
    Self::deserialize(chunk.data()).map(|(plte, _)| plte)
  }

  /// Resets this palette to empty and hands back the entry buffer.
  #[inline]
  pub fn clear(&mut self) -> Vec<r8g8b8_Srgb> {
    core::mem::take(&mut self.entries)
  }

  /// Zeroes the entries, releases them, and resets this palette to empty.
  pub fn free(&mut self) {
    for c in self.entries.iter_mut() {
      c.r.zeroize();
      c.g.zeroize();
      c.b.zeroize();
    }
    drop(self.clear());
  }
}
impl TryFrom<&[u8]> for PLTE {
  type Error = ChunkError;
  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    Self::deserialize(bytes).map(|(plte, _)| plte)
  }
}

impl Chunk {
  /// If this is a `PLTE` chunk with a whole number of entries, 255 at most.
  #[inline]
  #[must_use]
  pub fn is_plte(&self) -> bool {
    self.ty() == ChunkType::PLTE && palette_len_is_valid(self.data().len())
  }
}
