//! One-shot functions.
//!
//! Each is digest construction + a single write + one query. The `_str`
//! variants hash the UTF-8 bytes of the text; the `_utf16` variants hash its
//! UTF-16 code units in little-endian order, which is how text is laid out in
//! runtimes with UTF-16 strings.

use traits::StreamingHash;

use crate::{Digest32, Digest64, Digest128, UInt128};

/// MurmurHash3 x86_32 of `data`, seed 0.
///
/// ```
/// assert_eq!(murmur::sum32(b"hello world"), 1_586_663_183);
/// ```
#[inline]
#[must_use]
pub fn sum32(data: &[u8]) -> u32 {
  seed_sum32(0, data)
}

/// MurmurHash3 x86_32 of `data` with `seed`.
#[inline]
#[must_use]
pub fn seed_sum32(seed: u32, data: &[u8]) -> u32 {
  Digest32::digest_with_seed(seed, data)
}

/// MurmurHash3 x64_64 of `data`, seed 0.
#[inline]
#[must_use]
pub fn sum64(data: &[u8]) -> u64 {
  seed_sum64(0, data)
}

/// MurmurHash3 x64_64 of `data`, both lanes seeded with `seed`.
#[inline]
#[must_use]
pub fn seed_sum64(seed: u64, data: &[u8]) -> u64 {
  Digest64::digest_with_seed(seed, data)
}

/// MurmurHash3 x64_128 of `data`, seed 0.
#[inline]
#[must_use]
pub fn sum128(data: &[u8]) -> UInt128 {
  seed_sum128(0, 0, data)
}

/// MurmurHash3 x64_128 of `data` with independent lane seeds.
#[inline]
#[must_use]
pub fn seed_sum128(seed1: u64, seed2: u64, data: &[u8]) -> UInt128 {
  Digest128::digest_with_seed([seed1, seed2], data)
}

/// MurmurHash3 x86_32 of the UTF-8 bytes of `text`, seed 0.
#[inline]
#[must_use]
pub fn sum32_str(text: &str) -> u32 {
  sum32(text.as_bytes())
}

/// MurmurHash3 x86_32 of the UTF-8 bytes of `text` with `seed`.
#[inline]
#[must_use]
pub fn seed_sum32_str(seed: u32, text: &str) -> u32 {
  seed_sum32(seed, text.as_bytes())
}

/// MurmurHash3 x64_64 of the UTF-8 bytes of `text`, seed 0.
#[inline]
#[must_use]
pub fn sum64_str(text: &str) -> u64 {
  sum64(text.as_bytes())
}

/// MurmurHash3 x64_64 of the UTF-8 bytes of `text` with `seed`.
#[inline]
#[must_use]
pub fn seed_sum64_str(seed: u64, text: &str) -> u64 {
  seed_sum64(seed, text.as_bytes())
}

/// MurmurHash3 x64_128 of the UTF-8 bytes of `text`, seed 0.
#[inline]
#[must_use]
pub fn sum128_str(text: &str) -> UInt128 {
  sum128(text.as_bytes())
}

/// MurmurHash3 x64_128 of the UTF-8 bytes of `text` with independent lane seeds.
#[inline]
#[must_use]
pub fn seed_sum128_str(seed1: u64, seed2: u64, text: &str) -> UInt128 {
  seed_sum128(seed1, seed2, text.as_bytes())
}

const UTF16_BATCH: usize = 64;

/// Stream the little-endian UTF-16 encoding of `text` into `h` without
/// allocating.
pub fn write_utf16<H: StreamingHash>(h: &mut H, text: &str) -> usize {
  let mut units = text.encode_utf16().peekable();
  let mut batch = [0u8; UTF16_BATCH];
  let mut written = 0;
  while units.peek().is_some() {
    let mut filled = 0;
    for (slot, unit) in batch.chunks_exact_mut(2).zip(units.by_ref()) {
      slot.copy_from_slice(&unit.to_le_bytes());
      filled += 2;
    }
    if let Some(bytes) = batch.get(..filled) {
      written += h.write(bytes);
    }
  }
  written
}

fn digest_utf16<H: StreamingHash>(seed: H::Seed, text: &str) -> H::Output {
  let mut h = H::with_seed(seed);
  write_utf16(&mut h, text);
  h.sum()
}

/// MurmurHash3 x86_32 of the UTF-16LE encoding of `text`, seed 0.
///
/// ```
/// assert_eq!(murmur::sum32_utf16("Hello, World!"), 1_777_475_617);
/// ```
#[inline]
#[must_use]
pub fn sum32_utf16(text: &str) -> u32 {
  seed_sum32_utf16(0, text)
}

/// MurmurHash3 x86_32 of the UTF-16LE encoding of `text` with `seed`.
#[inline]
#[must_use]
pub fn seed_sum32_utf16(seed: u32, text: &str) -> u32 {
  digest_utf16::<Digest32>(seed, text)
}

/// MurmurHash3 x64_64 of the UTF-16LE encoding of `text`, seed 0.
#[inline]
#[must_use]
pub fn sum64_utf16(text: &str) -> u64 {
  seed_sum64_utf16(0, text)
}

/// MurmurHash3 x64_64 of the UTF-16LE encoding of `text` with `seed`.
#[inline]
#[must_use]
pub fn seed_sum64_utf16(seed: u64, text: &str) -> u64 {
  digest_utf16::<Digest64>(seed, text)
}

/// MurmurHash3 x64_128 of the UTF-16LE encoding of `text`, seed 0.
#[inline]
#[must_use]
pub fn sum128_utf16(text: &str) -> UInt128 {
  seed_sum128_utf16(0, 0, text)
}

/// MurmurHash3 x64_128 of the UTF-16LE encoding of `text` with independent lane seeds.
#[inline]
#[must_use]
pub fn seed_sum128_utf16(seed1: u64, seed2: u64, text: &str) -> UInt128 {
  digest_utf16::<Digest128>([seed1, seed2], text)
}
