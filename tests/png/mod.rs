use png_chunk_codec::{png::*, ChunkError};
use proptest::prelude::*;
use walkdir::WalkDir;

#[test]
fn test_ChunkIter_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    for _ in ChunkIter::new(&v) {
      //
    }
    if let Ok(it) = ChunkIter::from_png_bytes(&v) {
      for _ in it {
        //
      }
    }
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in ChunkIter::new(&v) {
      //
    }
  }
}

#[test]
fn test_payload_decoders_no_panics() {
  for _ in 0..100 {
    let v = super::rand_bytes(32);
    for len in 0..v.len() {
      if let Ok((ihdr, _)) = IHDR::deserialize(&v[..len]) {
        let _ = ihdr.is_valid();
        let _ = ihdr.sample_depth();
      }
      if let Ok((plte, _)) = PLTE::deserialize(&v[..len]) {
        let _ = plte.get_color(v[0]);
      }
    }
  }
}

#[test]
fn test_full_stream_round_trip() {
  let ihdr = IHDR {
    width: 3,
    height: 1,
    bit_depth: 8,
    color_type: 3,
    compression_method: 0,
    filter_method: 0,
    interlace_method: 1,
  };
  let plte = PLTE::try_from(&[255_u8, 0, 0, 0, 255, 0, 0, 0, 255][..]).unwrap();

  let mut png = PNG_SIGNATURE.to_vec();
  for chunk in [
    ihdr.to_chunk().unwrap(),
    plte.to_chunk().unwrap(),
    Chunk::new(ChunkType::IDAT, &[0x78, 0x9C, 0x03, 0x00]).unwrap(),
    Chunk::new(ChunkType(*b"prVt"), b"private ancillary data").unwrap(),
    Chunk::new(ChunkType::IEND, &[]).unwrap(),
  ] {
    // probe, then fill
    let required = match chunk.serialize_into(&mut []) {
      Err(ChunkError::CapacityExceeded { required }) => required,
      other => panic!("{other:?}"),
    };
    let start = png.len();
    png.resize(start + required, 0);
    assert_eq!(chunk.serialize_into(&mut png[start..]), Ok(required));
  }

  let chunks: Vec<Chunk> =
    ChunkIter::from_png_bytes(&png).unwrap().collect::<Result<_, _>>().unwrap();
  let types: Vec<ChunkType> = chunks.iter().map(Chunk::ty).collect();
  assert_eq!(
    types,
    [ChunkType::IHDR, ChunkType::PLTE, ChunkType::IDAT, ChunkType(*b"prVt"), ChunkType::IEND]
  );
  let back = IHDR::from_chunk(&chunks[0]).unwrap();
  assert!(back.is_valid());
  assert!(back.is_interlaced());
  assert_eq!(back.sample_depth(), Ok(8));
  let palette = PLTE::from_chunk(&chunks[1]).unwrap();
  let green = palette.get_color(1).unwrap();
  assert_eq!([green.r, green.g, green.b], [0, 255, 0]);
  assert_eq!(palette.get_color(3).unwrap_err(), ChunkError::NotFound);

  let private = chunks[3].ty();
  assert!(!private.is_critical());
  assert!(private.is_private());
  assert!(!private.is_reserved());
  assert!(private.is_safe_to_copy());
}

fn chunk_type() -> impl Strategy<Value = ChunkType> {
  prop::array::uniform4(prop_oneof![b'A'..=b'Z', b'a'..=b'z']).prop_map(ChunkType)
}

proptest! {
  #[test]
  fn prop_chunk_round_trip(ty in chunk_type(), data in prop::collection::vec(any::<u8>(), 0..512)) {
    let chunk = Chunk::new(ty, &data).unwrap();
    let bytes = chunk.to_bytes().unwrap();
    prop_assert_eq!(bytes.len(), data.len() + CHUNK_OVERHEAD);
    let (back, used) = Chunk::deserialize(&bytes).unwrap();
    prop_assert_eq!(used, bytes.len());
    prop_assert_eq!(back.ty(), ty);
    prop_assert_eq!(back.data(), &data[..]);
  }

  #[test]
  fn prop_crc_is_deterministic(ty in chunk_type(), data in prop::collection::vec(any::<u8>(), 0..256)) {
    prop_assert_eq!(chunk_crc(ty, &data), chunk_crc(ty, &data));
  }

  #[test]
  fn prop_tampering_fails_checksum(
    ty in chunk_type(),
    data in prop::collection::vec(any::<u8>(), 1..256),
    pick in any::<prop::sample::Index>(),
    flip in 1..=255_u8,
  ) {
    let mut bytes = Chunk::new(ty, &data).unwrap().to_bytes().unwrap();
    // anywhere in the data or the trailing CRC
    let i = 8 + pick.index(bytes.len() - 8);
    bytes[i] ^= flip;
    let is_checksum_mismatch = matches!(Chunk::deserialize(&bytes), Err(ChunkError::ChecksumMismatch { .. }));
    prop_assert!(is_checksum_mismatch);
  }

  #[test]
  fn prop_header_bytes_round_trip(
    width in any::<u32>(), height in any::<u32>(), fields in any::<[u8; 5]>(),
  ) {
    let ihdr = IHDR {
      width,
      height,
      bit_depth: fields[0],
      color_type: fields[1],
      compression_method: fields[2],
      filter_method: fields[3],
      interlace_method: fields[4],
    };
    let mut buf = [0_u8; IHDR_LEN];
    prop_assert_eq!(ihdr.serialize_into(&mut buf), Ok(IHDR_LEN));
    prop_assert_eq!(IHDR::deserialize(&buf), Ok((ihdr, IHDR_LEN)));
  }
}
