#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for the chunk layer of PNG data.
//!
//! PNG data is a series of "chunks". Each chunk is a length-prefixed,
//! type-tagged, CRC-protected record. This crate handles:
//! * Reading and writing the chunk frame itself (see [`png::Chunk`]).
//! * The chunk type property bits (see [`png::ChunkType`]).
//! * The image header payload (see [`png::IHDR`]).
//! * The palette payload (see [`png::PLTE`]).
//!
//! Decompression of the image data, unfiltering, and de-interlacing are *not*
//! handled here.
//!
//! ## Buffer Size Negotiation
//! Every `serialize_into` style function writes into a caller provided slice.
//! If the slice is too small nothing is written and you get back
//! [`ChunkError::CapacityExceeded`] with the number of bytes required, so you
//! can probe with an empty slice and then retry with one that fits.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod int_endian;
pub use int_endian::*;

#[cfg(feature = "alloc")]
mod alloc_limit;
#[cfg(feature = "alloc")]
pub use alloc_limit::*;

pub mod png;
