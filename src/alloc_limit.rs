//! The one place this crate allocates buffers whose size came from outside.
//!
//! Chunk length fields are untrusted, and a declared length of 2GB is
//! perfectly legal as far as the frame format goes. Every buffer sized from
//! such a field is obtained here, and requests over [`MAX_ALLOCATION`] bytes
//! are refused instead of being passed on to the global allocator.

use alloc::vec::Vec;

use crate::ChunkError;

/// The largest single allocation this crate will ask for, in bytes (4 MiB).
pub const MAX_ALLOCATION: usize = 4 * 1024 * 1024;

/// Allocates a vec of `count` default elements, subject to [`MAX_ALLOCATION`].
///
/// The limit applies to the byte size (`count * size_of::<T>()`).
///
/// ## Failure
/// * [`ChunkError::OutOfMemory`] if the request is over the limit or the
///   global allocator can't provide the space.
pub fn try_alloc_vec<T: Clone + Default>(count: usize) -> Result<Vec<T>, ChunkError> {
  let bytes = count.checked_mul(core::mem::size_of::<T>()).ok_or(ChunkError::OutOfMemory)?;
  if bytes > MAX_ALLOCATION {
    log::debug!("refusing allocation of {bytes} bytes (limit {MAX_ALLOCATION})");
    return Err(ChunkError::OutOfMemory);
  }
  let mut v: Vec<T> = Vec::new();
  v.try_reserve_exact(count)?;
  v.resize(count, T::default());
  Ok(v)
}

/// Allocates a copy of the slice, subject to [`MAX_ALLOCATION`].
///
/// ## Failure
/// * [`ChunkError::OutOfMemory`] as with [`try_alloc_vec`].
pub fn try_alloc_copy<T: Copy + Default>(src: &[T]) -> Result<Vec<T>, ChunkError> {
  let mut v = try_alloc_vec::<T>(src.len())?;
  v.copy_from_slice(src);
  Ok(v)
}

#[test]
fn test_try_alloc_vec_limit() {
  assert_eq!(try_alloc_vec::<u8>(0).unwrap().len(), 0);
  assert_eq!(try_alloc_vec::<u8>(MAX_ALLOCATION).unwrap().len(), MAX_ALLOCATION);
  assert_eq!(try_alloc_vec::<u8>(MAX_ALLOCATION + 1), Err(ChunkError::OutOfMemory));
  // the limit is in bytes, not elements
  assert_eq!(try_alloc_vec::<[u8; 3]>(MAX_ALLOCATION / 2), Err(ChunkError::OutOfMemory));
  assert_eq!(try_alloc_vec::<u32>(usize::MAX), Err(ChunkError::OutOfMemory));
}

#[test]
fn test_try_alloc_copy() {
  let v = try_alloc_copy(b"PLTE").unwrap();
  assert_eq!(v.as_slice(), b"PLTE");
}
