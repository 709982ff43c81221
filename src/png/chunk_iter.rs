use super::*;
use crate::ChunkError;

/// An iterator that decodes successive chunk frames from bytes.
///
/// Each frame is fully checked (length limit, CRC, type) as it's decoded. After
/// the first error the iterator gives that error and then stops, since
/// there's no way to know where the next frame would start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkIter<'b> {
  spare: &'b [u8],
}
impl<'b> ChunkIter<'b> {
  /// Iterates frames starting at the first byte.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { spare: bytes }
  }

  /// Checks for [`PNG_SIGNATURE`] and iterates the frames after it.
  ///
  /// ## Failure
  /// * [`ChunkError::IncompleteData`] if there's less than 8 bytes.
  /// * [`ChunkError::MalformedData`] if the signature is wrong.
  #[inline]
  pub fn from_png_bytes(bytes: &'b [u8]) -> Result<Self, ChunkError> {
    if bytes.len() < PNG_SIGNATURE.len() {
      return Err(ChunkError::IncompleteData);
    }
    let (sig, rest) = bytes.split_at(PNG_SIGNATURE.len());
    if sig != PNG_SIGNATURE {
      return Err(ChunkError::MalformedData);
    }
    Ok(Self::new(rest))
  }

  /// The bytes that haven't been decoded yet.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> &'b [u8] {
    self.spare
  }
}
impl Iterator for ChunkIter<'_> {
  type Item = Result<Chunk, ChunkError>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.spare.is_empty() {
      return None;
    }
    match Chunk::deserialize(self.spare) {
      Ok((chunk, used)) => {
        self.spare = &self.spare[used..];
        Some(Ok(chunk))
      }
      Err(e) => {
        self.spare = &[];
        Some(Err(e))
      }
    }
  }
}
impl core::iter::FusedIterator for ChunkIter<'_> {}
