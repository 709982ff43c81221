use bytemuck::{Pod, Zeroable};

/// A `u32` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u32` it has an
/// alignment of 1, which lets it sit inside packed wire layouts.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
  /// The bytes, in the order they appear on the wire.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<u32> for U32BE {
  #[inline]
  #[must_use]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}
impl From<U32BE> for u32 {
  #[inline]
  #[must_use]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}

/// Splits a big-endian `u32` off the front of the bytes.
#[inline]
pub(crate) fn try_pull_u32_be(bytes: &[u8]) -> Option<(u32, &[u8])> {
  match bytes {
    [a, b, c, d, rest @ ..] => Some((u32::from_be_bytes([*a, *b, *c, *d]), rest)),
    _ => None,
  }
}

#[test]
fn test_u32be_byte_order() {
  let x = U32BE::from_u32(0x4948_4452);
  assert_eq!(x.to_bytes(), *b"IHDR");
  assert_eq!(u32::from(x), 0x4948_4452);
  assert_eq!(bytemuck::bytes_of(&x), b"IHDR");
  assert_eq!(try_pull_u32_be(&[0, 0, 1, 0, 9]), Some((256, &[9_u8][..])));
  assert_eq!(try_pull_u32_be(&[0, 0, 1]), None);
}
