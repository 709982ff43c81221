use core::fmt::{Debug, Write};

/// A four byte chunk type code.
///
/// The bytes are stored in wire order, so `ChunkType(*b"IHDR")` is the header
/// type. The "host order" `u32` of a type is the big-endian reading of these
/// bytes (`IHDR` is `0x4948_4452`).
///
/// A type is only *valid* if all four bytes are ASCII letters. Bit 5 of each
/// byte (the lowercase bit) carries one property flag:
///
/// | byte | set (lowercase) | clear (uppercase) |
/// |:-:|:-|:-|
/// | 0 | ancillary | critical |
/// | 1 | private | public |
/// | 2 | reserved | (must be clear) |
/// | 3 | safe to copy | unsafe to copy |
///
/// The flag checks work on any bit pattern, but for an invalid type the
/// answer doesn't mean anything.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkType {
  /// Image header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Palette
  pub const PLTE: Self = Self(*b"PLTE");
  /// Image data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image end
  pub const IEND: Self = Self(*b"IEND");
}
impl ChunkType {
  const ANCILLARY_BIT: u32 = 0x2000_0000;
  const PRIVATE_BIT: u32 = 0x0020_0000;
  const RESERVED_BIT: u32 = 0x0000_2000;
  const SAFE_TO_COPY_BIT: u32 = 0x0000_0020;

  /// Makes a type from its host order `u32` value.
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }

  /// The host order `u32` value of this type.
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }

  /// If all four bytes are ASCII `A-Z` or `a-z`.
  #[inline]
  #[must_use]
  pub const fn is_valid(self) -> bool {
    let [a, b, c, d] = self.0;
    a.is_ascii_alphabetic()
      && b.is_ascii_alphabetic()
      && c.is_ascii_alphabetic()
      && d.is_ascii_alphabetic()
  }

  /// Critical chunks must be understood to display the image.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.to_u32() & Self::ANCILLARY_BIT) == 0
  }

  /// Private chunks aren't part of the public list of chunk types.
  #[inline]
  #[must_use]
  pub const fn is_private(self) -> bool {
    (self.to_u32() & Self::PRIVATE_BIT) != 0
  }

  /// The reserved bit, which all current types leave clear.
  #[inline]
  #[must_use]
  pub const fn is_reserved(self) -> bool {
    (self.to_u32() & Self::RESERVED_BIT) != 0
  }

  /// Editors that don't understand this chunk can still copy it when they
  /// modify the image.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.to_u32() & Self::SAFE_TO_COPY_BIT) != 0
  }

  /// The type as a `&str`, if the type is valid.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> Option<&str> {
    if self.is_valid() {
      core::str::from_utf8(&self.0).ok()
    } else {
      None
    }
  }

  /// Writes the type's four bytes into `out`, then zeroes the rest of `out`.
  ///
  /// The buffer needs at least 5 bytes so that there's always a terminating
  /// zero after the name.
  ///
  /// Returns `false` (and writes nothing) if `out` is too short or the type
  /// is invalid.
  #[inline]
  pub fn write_name_into(self, out: &mut [u8]) -> bool {
    if out.len() <= self.0.len() || !self.is_valid() {
      return false;
    }
    let (name, rest) = out.split_at_mut(self.0.len());
    name.copy_from_slice(&self.0);
    rest.fill(0);
    true
  }
}
impl Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char(self.0[0] as char)?;
    f.write_char(self.0[1] as char)?;
    f.write_char(self.0[2] as char)?;
    f.write_char(self.0[3] as char)?;
    Ok(())
  }
}
impl core::fmt::Display for ChunkType {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(self, f)
  }
}
impl From<[u8; 4]> for ChunkType {
  #[inline]
  #[must_use]
  fn from(bytes: [u8; 4]) -> Self {
    Self(bytes)
  }
}
impl From<u32> for ChunkType {
  #[inline]
  #[must_use]
  fn from(u: u32) -> Self {
    Self::from_u32(u)
  }
}
