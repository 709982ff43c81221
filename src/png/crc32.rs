use super::ChunkType;

/// Lookup table for the reflected CRC-32 polynomial `0xEDB8_8320`.
///
/// Built at compile time, so there's no first-use initialization to race on.
pub(crate) const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Runs the CRC register over more bytes.
#[inline]
#[must_use]
pub fn update_crc(mut crc: u32, bytes: &[u8]) -> u32 {
  for byte in bytes.iter().copied() {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc
}

/// The CRC value stored in a chunk frame.
///
/// The register starts at all ones and runs over the type (in wire order) and
/// then the data.
///
/// **The final complement is not applied.** This is what every frame written
/// by this crate carries, and what frames read by this crate are checked
/// against. The standard CRC-32 of the same bytes is `!chunk_crc(ty, data)`.
#[inline]
#[must_use]
pub fn chunk_crc(ty: ChunkType, data: &[u8]) -> u32 {
  update_crc(update_crc(u32::MAX, &ty.0), data)
}
