use bytemuck::{Pod, Zeroable};

use super::*;
use crate::{ChunkError, U32BE};

/// Bytes of data in an `IHDR` chunk.
pub const IHDR_LEN: usize = 13;

/// Largest width or height a header may declare (`2^31 - 1`).
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// The color types that PNG supports.
///
/// The value is a bitmask: `1` means palette, `2` means color (as opposed to
/// greyscale), `4` means there's an alpha channel. Only five of the
/// combinations are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  ///
  /// The palette will have RGB8 data.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }

  /// If the given bit depth is allowed with this color type.
  #[inline]
  #[must_use]
  pub const fn allows_bit_depth(self, bit_depth: u8) -> bool {
    match self {
      Self::Y => matches!(bit_depth, 1 | 2 | 4 | 8 | 16),
      Self::Index => matches!(bit_depth, 1 | 2 | 4 | 8),
      Self::RGB | Self::YA | Self::RGBA => matches!(bit_depth, 8 | 16),
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = ChunkError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(ChunkError::IllegalArgument),
    })
  }
}

/// If a raw color type value is plain greyscale (no bits set).
#[inline]
#[must_use]
pub const fn is_greyscale(color_type: u8) -> bool {
  color_type == 0
}
/// If a raw color type value has the palette bit.
#[inline]
#[must_use]
pub const fn is_palette(color_type: u8) -> bool {
  (color_type & 1) != 0
}
/// If a raw color type value has the color (RGB) bit.
#[inline]
#[must_use]
pub const fn is_realcolor(color_type: u8) -> bool {
  (color_type & 2) != 0
}
/// If a raw color type value has the alpha channel bit.
#[inline]
#[must_use]
pub const fn has_alpha_channel(color_type: u8) -> bool {
  (color_type & 4) != 0
}

/// Image Header
///
/// The fields are kept as their raw wire values, so that any 13 bytes can be
/// decoded. Decoding does *not* check the values, call
/// [`is_valid`](IHDR::is_valid) for that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel (or per index, for indexed color)
  pub bit_depth: u8,
  /// pixel color type, see [`PngColorType`]
  pub color_type: u8,
  /// must be 0 (deflate)
  pub compression_method: u8,
  /// must be 0 (adaptive filtering)
  pub filter_method: u8,
  /// 0 (none) or 1 (Adam7)
  pub interlace_method: u8,
}

/// The wire layout of the header data.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct IhdrWire {
  width: U32BE,
  height: U32BE,
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
}
const _: () = assert!(core::mem::size_of::<IhdrWire>() == IHDR_LEN);

impl IhdrWire {
  #[inline]
  const fn from_ihdr(h: &IHDR) -> Self {
    Self {
      width: U32BE::from_u32(h.width),
      height: U32BE::from_u32(h.height),
      bit_depth: h.bit_depth,
      color_type: h.color_type,
      compression_method: h.compression_method,
      filter_method: h.filter_method,
      interlace_method: h.interlace_method,
    }
  }
  #[inline]
  const fn to_ihdr(self) -> IHDR {
    IHDR {
      width: self.width.to_u32(),
      height: self.height.to_u32(),
      bit_depth: self.bit_depth,
      color_type: self.color_type,
      compression_method: self.compression_method,
      filter_method: self.filter_method,
      interlace_method: self.interlace_method,
    }
  }
}

impl IHDR {
  /// Checks all the header rules.
  ///
  /// * Width and height must be in `1..=2^31-1`.
  /// * The color type must be known and allow the bit depth.
  /// * Compression and filter method must both be 0.
  /// * Interlace method must be 0 or 1.
  #[inline]
  #[must_use]
  pub fn is_valid(&self) -> bool {
    let dims_ok = (1..=MAX_DIMENSION).contains(&self.width)
      && (1..=MAX_DIMENSION).contains(&self.height);
    let depth_ok = match PngColorType::try_from(self.color_type) {
      Ok(color_type) => color_type.allows_bit_depth(self.bit_depth),
      Err(_) => false,
    };
    dims_ok
      && depth_ok
      && self.compression_method == 0
      && self.filter_method == 0
      && matches!(self.interlace_method, 0 | 1)
  }

  /// The color type as an enum.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if the color type isn't a known value.
  #[inline]
  pub fn png_color_type(&self) -> Result<PngColorType, ChunkError> {
    PngColorType::try_from(self.color_type)
  }

  /// If the image data is stored interlaced.
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method == 1
  }

  /// Bits per sample.
  ///
  /// Indexed color always gives 8, because palette entries are 8 bits per
  /// channel no matter what the index bit depth is. Otherwise this is just
  /// the bit depth.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if the color type isn't a known value.
  #[inline]
  pub fn sample_depth(&self) -> Result<u32, ChunkError> {
    Ok(match self.png_color_type()? {
      PngColorType::Index => 8,
      _ => u32::from(self.bit_depth),
    })
  }

  /// Writes the 13 data bytes of this header.
  ///
  /// This does not check [`is_valid`](IHDR::is_valid) first.
  ///
  /// ## Failure
  /// * [`ChunkError::CapacityExceeded`] if `out` is shorter than
  ///   [`IHDR_LEN`], and nothing is written.
  #[inline]
  pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize, ChunkError> {
    let out = match out.get_mut(..IHDR_LEN) {
      Some(out) => out,
      None => return Err(ChunkError::CapacityExceeded { required: IHDR_LEN }),
    };
    out.copy_from_slice(bytemuck::bytes_of(&IhdrWire::from_ihdr(self)));
    Ok(IHDR_LEN)
  }

  /// The 13 data bytes of this header as an array.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> [u8; IHDR_LEN] {
    bytemuck::cast(IhdrWire::from_ihdr(self))
  }

  /// Reads a header from the front of the bytes.
  ///
  /// Returns the header and the number of bytes used (always 13). The values
  /// are *not* checked, a header can decode fine and still be invalid.
  ///
  /// ## Failure
  /// * [`ChunkError::IncompleteData`] if there's fewer than 13 bytes.
  #[inline]
  pub fn deserialize(bytes: &[u8]) -> Result<(Self, usize), ChunkError> {
    match bytes.get(..IHDR_LEN) {
      Some(head) => Ok((bytemuck::pod_read_unaligned::<IhdrWire>(head).to_ihdr(), IHDR_LEN)),
      None => Err(ChunkError::IncompleteData),
    }
  }

  /// Makes an `IHDR` chunk holding this header.
  ///
  /// ## Failure
  /// * As with [`Chunk::new`].
  #[cfg(feature = "alloc")]
  #[inline]
  pub fn to_chunk(&self) -> Result<Chunk, ChunkError> {
    Chunk::new(ChunkType::IHDR, &self.to_bytes())
  }

  /// Reads the header out of an `IHDR` chunk.
  ///
  /// The values are *not* checked.
  ///
  /// ## Failure
  /// * [`ChunkError::IllegalArgument`] if [`Chunk::is_ihdr`] is false.
  #[cfg(feature = "alloc")]
  #[inline]
  pub fn from_chunk(chunk: &Chunk) -> Result<Self, ChunkError> {
    if !chunk.is_ihdr() {
      return Err(ChunkError::IllegalArgument);
    }
    Self::deserialize(chunk.data()).map(|(ihdr, _)| ihdr)
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = ChunkError;
  /// Decodes *exactly* 13 bytes, then requires the result to be valid.
  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    if bytes.len() > IHDR_LEN {
      return Err(ChunkError::MalformedData);
    }
    let (ihdr, _) = Self::deserialize(bytes)?;
    if ihdr.is_valid() {
      Ok(ihdr)
    } else {
      Err(ChunkError::IllegalArgument)
    }
  }
}

#[cfg(feature = "alloc")]
impl Chunk {
  /// If this is an `IHDR` chunk with exactly 13 bytes of data.
  ///
  /// The header values themselves aren't checked.
  #[inline]
  #[must_use]
  pub fn is_ihdr(&self) -> bool {
    self.ty() == ChunkType::IHDR && self.data().len() == IHDR_LEN
  }
}
