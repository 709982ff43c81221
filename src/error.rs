use core::num::TryFromIntError;

/// An error from the chunk codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkError {
  /// A required value was absent (eg: no data buffer for a non-zero length).
  NullArgument,

  /// A value violates a precondition.
  ///
  /// Length/data mismatches, invalid chunk type codes, palettes over the
  /// entry limit, and passing the wrong chunk type to a payload decoder all
  /// end up here.
  IllegalArgument,

  /// The allocation was denied.
  ///
  /// This includes requests larger than [`MAX_ALLOCATION`](crate::MAX_ALLOCATION).
  OutOfMemory,

  /// More bytes are needed before the structure can be decoded.
  ///
  /// This is not corruption, it's safe to try again once more data arrives.
  IncompleteData,

  /// A declared size can never be satisfied.
  MalformedData,

  /// The data arrived complete, but the CRC didn't match.
  ChecksumMismatch {
    /// The CRC stored in the frame.
    declared: u32,
    /// The CRC computed over the frame's type and data.
    actual: u32,
  },

  /// The output buffer is too small, nothing was written.
  ///
  /// Retry with a buffer of at least `required` bytes.
  CapacityExceeded {
    /// Bytes needed for the write to succeed.
    required: usize,
  },

  /// The requested entry doesn't exist.
  NotFound,
}
impl ChunkError {
  /// Short, stable name of this error kind.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::NullArgument => "NULL_ARGUMENT",
      Self::IllegalArgument => "ILLEGAL_ARGUMENT",
      Self::OutOfMemory => "OUT_OF_MEMORY",
      Self::IncompleteData => "INCOMPLETE_PACKET",
      Self::MalformedData => "BAD_PACKET",
      Self::ChecksumMismatch { .. } => "BAD_CRC",
      Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
      Self::NotFound => "NOT_FOUND",
    }
  }
}
impl core::fmt::Display for ChunkError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::ChecksumMismatch { declared, actual } => {
        write!(f, "{}: declared {declared:#010X}, actual {actual:#010X}", self.name())
      }
      Self::CapacityExceeded { required } => {
        write!(f, "{}: {required} bytes required", self.name())
      }
      other => f.write_str(other.name()),
    }
  }
}
#[cfg(feature = "std")]
impl std::error::Error for ChunkError {}

#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for ChunkError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::OutOfMemory
  }
}
impl From<TryFromIntError> for ChunkError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::IllegalArgument
  }
}

#[test]
fn test_display_names() {
  use std::string::ToString;
  assert_eq!(ChunkError::IncompleteData.to_string(), "INCOMPLETE_PACKET");
  assert_eq!(
    ChunkError::CapacityExceeded { required: 22 }.to_string(),
    "CAPACITY_EXCEEDED: 22 bytes required"
  );
  assert_eq!(
    ChunkError::ChecksumMismatch { declared: 1, actual: 0xABCD }.to_string(),
    "BAD_CRC: declared 0x00000001, actual 0x0000ABCD"
  );
}
