//! Holds all the tools for working with PNG chunks.
//!
//! The general format of a PNG is that the information is stored in "chunks".
//! Each chunk on the wire looks like this (all integers big-endian):
//!
//! ```text
//! +-------------+-----------+-----------------+-------------+
//! | length (4B) | type (4B) | data (length B) | CRC-32 (4B) |
//! +-------------+-----------+-----------------+-------------+
//! ```
//!
//! There's four "critical" chunk types that this module knows about:
//! * **Header** ([`IHDR`]) - The image's dimensions, pixel format, and if the
//!   image is interlaced or not. Always exactly 13 bytes of data.
//! * **Palette** ([`PLTE`]) - If an image uses indexed color it will have a
//!   palette of what index values map to what RGB values.
//! * **Image Data** - One or more chunks of compressed data. This module
//!   only frames them, it doesn't decompress them.
//! * **End** - The last chunk, it has no data at all.
//!
//! ## Writing A Chunk
//!
//! ```
//! use png_chunk_codec::png::*;
//! let ihdr = IHDR {
//!   width: 16,
//!   height: 16,
//!   bit_depth: 8,
//!   color_type: 6,
//!   compression_method: 0,
//!   filter_method: 0,
//!   interlace_method: 0,
//! };
//! assert!(ihdr.is_valid());
//! let chunk = ihdr.to_chunk().unwrap();
//! let bytes = chunk.to_bytes().unwrap();
//! assert_eq!(bytes.len(), 13 + CHUNK_OVERHEAD);
//! ```
//!
//! ## Reading Chunks
//!
//! ```
//! # use png_chunk_codec::png::*;
//! # let bytes = Chunk::new(ChunkType::IEND, &[]).unwrap().to_bytes().unwrap();
//! let (chunk, used) = Chunk::deserialize(&bytes).unwrap();
//! assert!(chunk.is_iend());
//! assert_eq!(used, bytes.len());
//! ```
//!
//! ## CRC Note
//! The CRC stored in each frame is the CRC-32 register *without* the final
//! complement step. Frames written by this module round trip through this
//! module, but other PNG tools will see a CRC that is the bitwise NOT of
//! what they expect. See [`chunk_crc`].

mod chunk_type;
pub use chunk_type::*;

mod crc32;
pub use crc32::*;

mod ihdr;
pub use ihdr::*;

#[cfg(feature = "alloc")]
mod chunk;
#[cfg(feature = "alloc")]
pub use chunk::*;

#[cfg(feature = "alloc")]
mod chunk_iter;
#[cfg(feature = "alloc")]
pub use chunk_iter::*;

#[cfg(feature = "alloc")]
mod plte;
#[cfg(feature = "alloc")]
pub use plte::*;

#[cfg(all(test, feature = "alloc"))]
mod tests;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// The largest data length a chunk may declare (`2^31 - 1`).
pub const MAX_CHUNK_LENGTH: u32 = i32::MAX as u32;

/// Bytes in a chunk frame other than the data: length, type, and CRC.
pub const CHUNK_OVERHEAD: usize = 12;
