use super::*;
use crate::{ChunkError, MAX_ALLOCATION};
use alloc::vec::Vec;
use std::vec;

#[test]
fn test_chunk_constructors() {
  let chunk = Chunk::new(ChunkType::IDAT, b"hello").unwrap();
  assert_eq!(chunk.ty(), ChunkType::IDAT);
  assert_eq!(chunk.data(), b"hello");
  assert_eq!(chunk.length(), 5);

  let owned = Chunk::from_vec(ChunkType::IDAT, b"hello".to_vec()).unwrap();
  assert_eq!(owned, chunk);

  assert_eq!(Chunk::new(ChunkType(*b"ID4T"), b"x"), Err(ChunkError::IllegalArgument));
  assert_eq!(Chunk::from_vec(ChunkType([0; 4]), Vec::new()), Err(ChunkError::IllegalArgument));

  let empty = Chunk::new(ChunkType::IEND, &[]).unwrap();
  assert_eq!(empty.length(), 0);
  assert!(empty.data().is_empty());
}

#[test]
fn test_chunk_from_parts() {
  assert_eq!(Chunk::from_parts(ChunkType::IDAT, None, 3), Err(ChunkError::NullArgument));
  assert_eq!(
    Chunk::from_parts(ChunkType::IDAT, Some(vec![1, 2]), 3),
    Err(ChunkError::IllegalArgument)
  );
  let empty = Chunk::from_parts(ChunkType::IEND, None, 0).unwrap();
  assert!(empty.is_iend());
  let c = Chunk::from_parts(ChunkType::IDAT, Some(vec![1, 2, 3]), 3).unwrap();
  assert_eq!(c.data(), &[1, 2, 3]);
}

#[test]
fn test_copy_constructor_uses_capped_allocator() {
  let big = vec![0_u8; MAX_ALLOCATION + 1];
  assert_eq!(Chunk::new(ChunkType::IDAT, &big), Err(ChunkError::OutOfMemory));
  // taking ownership doesn't allocate, so the cap doesn't apply.
  let owned = Chunk::from_vec(ChunkType::IDAT, big).unwrap();
  assert_eq!(owned.serialized_len(), MAX_ALLOCATION + 1 + CHUNK_OVERHEAD);
  assert_eq!(owned.to_bytes(), Err(ChunkError::OutOfMemory));
}

#[test]
fn test_capacity_negotiation() {
  let chunk = Chunk::new(ChunkType::IDAT, &[7; 10]).unwrap();
  let mut nothing: [u8; 0] = [];
  assert_eq!(chunk.serialize_into(&mut nothing), Err(ChunkError::CapacityExceeded { required: 22 }));

  let mut short = [0xAA_u8; 21];
  assert_eq!(chunk.serialize_into(&mut short), Err(ChunkError::CapacityExceeded { required: 22 }));
  assert_eq!(short, [0xAA; 21]);

  let mut exact = [0_u8; 22];
  assert_eq!(chunk.serialize_into(&mut exact), Ok(22));
  assert_eq!(&exact[..4], &[0, 0, 0, 10]);
  assert_eq!(&exact[4..8], b"IDAT");
  assert_eq!(&exact[8..18], &[7; 10]);
  assert_eq!(&exact[18..], &chunk.crc().to_be_bytes());
}

#[test]
fn test_iend_wire_bytes() {
  let bytes = Chunk::new(ChunkType::IEND, &[]).unwrap().to_bytes().unwrap();
  // the standard IEND frame ends with AE 42 60 82, this CRC is its complement.
  assert_eq!(bytes, [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0x51, 0xBD, 0x9F, 0x7D]);
}

#[test]
fn test_round_trip() {
  let chunk = Chunk::new(ChunkType(*b"ruSt"), b"some bytes of data").unwrap();
  let mut bytes = chunk.to_bytes().unwrap();
  bytes.extend_from_slice(b"trailing");
  let (back, used) = Chunk::deserialize(&bytes).unwrap();
  assert_eq!(back, chunk);
  assert_eq!(used, chunk.serialized_len());
}

#[test]
fn test_tampering_is_detected() {
  let chunk = Chunk::new(ChunkType::IDAT, b"0123456789").unwrap();
  let bytes = chunk.to_bytes().unwrap();
  // every data byte and every CRC byte
  for i in 8..bytes.len() {
    let mut bad = bytes.clone();
    bad[i] ^= 0x01;
    assert!(
      matches!(Chunk::deserialize(&bad), Err(ChunkError::ChecksumMismatch { .. })),
      "byte {i}"
    );
  }
  // the type bytes are covered too
  let mut bad = bytes.clone();
  bad[4] = b'J';
  assert!(matches!(Chunk::deserialize(&bad), Err(ChunkError::ChecksumMismatch { .. })));
}

#[test]
fn test_checksum_mismatch_reports_both_values() {
  let chunk = Chunk::new(ChunkType::IDAT, b"abc").unwrap();
  let mut bytes = chunk.to_bytes().unwrap();
  let n = bytes.len();
  bytes[n - 4..].copy_from_slice(&[0, 0, 0, 1]);
  assert_eq!(
    Chunk::deserialize(&bytes),
    Err(ChunkError::ChecksumMismatch { declared: 1, actual: chunk.crc() })
  );
}

#[test]
fn test_incomplete_vs_malformed() {
  let bytes = Chunk::new(ChunkType::IDAT, &[1; 10]).unwrap().to_bytes().unwrap();
  for cut in 0..bytes.len() {
    assert_eq!(Chunk::deserialize(&bytes[..cut]), Err(ChunkError::IncompleteData), "cut {cut}");
  }

  // a length of 2^31 can never be satisfied, even if lots of bytes follow.
  let mut huge = vec![0_u8; 64];
  huge[..4].copy_from_slice(&0x8000_0000_u32.to_be_bytes());
  huge[4..8].copy_from_slice(b"IDAT");
  assert_eq!(Chunk::deserialize(&huge), Err(ChunkError::MalformedData));
  huge[..4].copy_from_slice(&u32::MAX.to_be_bytes());
  assert_eq!(Chunk::deserialize(&huge), Err(ChunkError::MalformedData));

  // 2^31-1 is allowed, it's just not all here yet.
  huge[..4].copy_from_slice(&MAX_CHUNK_LENGTH.to_be_bytes());
  assert_eq!(Chunk::deserialize(&huge), Err(ChunkError::IncompleteData));
}

#[test]
fn test_deserialize_rejects_invalid_type() {
  let ty = ChunkType(*b"12AB");
  let crc = chunk_crc(ty, &[]);
  let mut bytes = vec![0, 0, 0, 0];
  bytes.extend_from_slice(&ty.0);
  bytes.extend_from_slice(&crc.to_be_bytes());
  assert_eq!(Chunk::deserialize(&bytes), Err(ChunkError::MalformedData));
}

#[test]
fn test_clear_free_swap() {
  let mut a = Chunk::new(ChunkType::IDAT, b"aaaa").unwrap();
  let mut b = Chunk::new(ChunkType::IEND, &[]).unwrap();
  a.swap(&mut b);
  assert!(a.is_iend());
  assert!(b.is_idat());
  assert_eq!(b.data(), b"aaaa");

  let data = b.clear();
  assert_eq!(data, b"aaaa");
  assert_eq!(b, Chunk::default());
  assert_eq!(b.ty(), ChunkType([0; 4]));
  assert_eq!(b.length(), 0);

  let mut c = Chunk::new(ChunkType::IDAT, b"secret").unwrap();
  c.free();
  assert_eq!(c, Chunk::default());
}

#[test]
fn test_chunk_predicates() {
  assert!(Chunk::new(ChunkType::IDAT, &[]).unwrap().is_idat());
  assert!(Chunk::new(ChunkType::IDAT, &[0; 100]).unwrap().is_idat());
  assert!(Chunk::new(ChunkType::IEND, &[]).unwrap().is_iend());
  assert!(!Chunk::new(ChunkType::IEND, &[0]).unwrap().is_iend());
  assert!(!Chunk::new(ChunkType::IDAT, &[]).unwrap().is_iend());
  assert!(Chunk::new(ChunkType::IHDR, &[0; 13]).unwrap().is_ihdr());
  assert!(!Chunk::new(ChunkType::IHDR, &[0; 14]).unwrap().is_ihdr());
}

#[test]
fn test_chunk_iter() {
  let ihdr = IHDR {
    width: 2,
    height: 2,
    bit_depth: 4,
    color_type: 3,
    compression_method: 0,
    filter_method: 0,
    interlace_method: 0,
  };
  let mut png: Vec<u8> = PNG_SIGNATURE.to_vec();
  for chunk in [
    ihdr.to_chunk().unwrap(),
    Chunk::new(ChunkType::PLTE, &[0, 0, 0, 255, 255, 255]).unwrap(),
    Chunk::new(ChunkType::IDAT, &[1, 2, 3]).unwrap(),
    Chunk::new(ChunkType::IEND, &[]).unwrap(),
  ] {
    png.extend_from_slice(&chunk.to_bytes().unwrap());
  }

  let chunks: Vec<Chunk> =
    ChunkIter::from_png_bytes(&png).unwrap().collect::<Result<_, _>>().unwrap();
  assert_eq!(chunks.len(), 4);
  assert_eq!(IHDR::from_chunk(&chunks[0]), Ok(ihdr));
  assert_eq!(PLTE::from_chunk(&chunks[1]).unwrap().size(), 2);
  assert!(chunks[2].is_idat());
  assert!(chunks[3].is_iend());

  // corrupt the IDAT data, the iterator reports it and then stops.
  let idat_data_at = 8 + (13 + 12) + (6 + 12) + 8;
  png[idat_data_at] ^= 0xFF;
  let mut it = ChunkIter::from_png_bytes(&png).unwrap();
  assert!(it.next().unwrap().unwrap().is_ihdr());
  assert!(it.next().unwrap().unwrap().is_plte());
  assert!(matches!(it.next(), Some(Err(ChunkError::ChecksumMismatch { .. }))));
  assert!(it.next().is_none());
  assert!(it.remaining().is_empty());

  assert_eq!(ChunkIter::from_png_bytes(&png[..7]).unwrap_err(), ChunkError::IncompleteData);
  assert_eq!(ChunkIter::from_png_bytes(&png[1..]).unwrap_err(), ChunkError::MalformedData);
  assert_eq!(ChunkIter::new(&[]).next(), None);
}
