//! MurmurHash3 x86_32 (**NOT CRYPTO**).
//!
//! One 32-bit accumulator, 4-byte blocks, 0-3 byte tail.

use traits::{FastHash, StreamingHash};

use crate::block::{BlockBuffer, fold_tail_u32, read_u32_le};

const BLOCK_LEN: usize = 4;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

#[inline(always)]
const fn mix_k1(k1: u32) -> u32 {
  k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline(always)]
const fn mix_block(h1: u32, k1: u32) -> u32 {
  let h1 = h1 ^ mix_k1(k1);
  h1.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64)
}

#[inline(always)]
const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// Fold the tail into a copy of `h1` and avalanche it.
///
/// The tail only gets the one-step `k1` mix, never the rotate/multiply/add
/// round applied to full blocks. The length is folded in modulo 2^32.
#[inline]
#[must_use]
fn finish(mut h1: u32, tail: &[u8], total_len: u64) -> u32 {
  debug_assert!(tail.len() < BLOCK_LEN);
  if !tail.is_empty() {
    h1 ^= mix_k1(fold_tail_u32(tail));
  }
  h1 ^= total_len as u32;
  fmix32(h1)
}

/// Streaming MurmurHash3 x86_32.
///
/// # Example
///
/// ```
/// use murmur::{Digest32, StreamingHash};
///
/// let mut d = Digest32::with_seed(42);
/// d.write(b"hello ");
/// d.write(b"world");
/// assert_eq!(d.sum32(), Digest32::digest_with_seed(42, b"hello world"));
/// ```
#[derive(Clone, Debug)]
pub struct Digest32 {
  h1: u32,
  seed: u32,
  buffer: BlockBuffer<BLOCK_LEN>,
  total_len: u64,
}

impl Digest32 {
  /// The seed this digest was created with (and resets to).
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u32 {
    self.seed
  }

  /// Total number of bytes written since construction or the last reset.
  #[inline]
  #[must_use]
  pub const fn total_len(&self) -> u64 {
    self.total_len
  }

  /// Hash of everything written so far. Does not modify the digest.
  #[inline]
  #[must_use]
  pub fn sum32(&self) -> u32 {
    finish(self.h1, self.buffer.pending(), self.total_len)
  }
}

impl Default for Digest32 {
  #[inline]
  fn default() -> Self {
    <Self as StreamingHash>::new()
  }
}

impl StreamingHash for Digest32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn with_seed(seed: u32) -> Self {
    Self {
      h1: seed,
      seed,
      buffer: BlockBuffer::new(),
      total_len: 0,
    }
  }

  #[inline]
  fn write(&mut self, data: &[u8]) -> usize {
    let h1 = &mut self.h1;
    self.buffer.absorb(data, |block| *h1 = mix_block(*h1, read_u32_le(block, 0)));
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    data.len()
  }

  #[inline]
  fn sum(&self) -> u32 {
    self.sum32()
  }

  #[inline]
  fn reset(&mut self) {
    self.h1 = self.seed;
    self.buffer.clear();
    self.total_len = 0;
  }
}

/// One-shot MurmurHash3 x86_32.
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3_32;

impl FastHash for Murmur3_32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    Digest32::digest_with_seed(seed, data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_is_bare_finalization() {
    assert_eq!(Murmur3_32::hash(b""), fmix32(0));
    assert_eq!(Murmur3_32::hash(b""), 0);
    assert_eq!(Murmur3_32::hash_with_seed(1, b""), 0x514e_28b7);
    assert_eq!(Murmur3_32::hash_with_seed(0xffff_ffff, b""), 0x81f1_6f39);
  }

  #[test]
  fn canonical_vectors() {
    assert_eq!(Murmur3_32::hash(b"hello world"), 1_586_663_183);
    assert_eq!(Murmur3_32::hash(b"The quick brown fox jumps over the lazy dog"), 776_992_547);
    assert_eq!(Murmur3_32::hash_with_seed(0x9747_b28c, b"aaaa"), 0x5a97_808a);
    assert_eq!(Murmur3_32::hash_with_seed(0x9747_b28c, b"Hello, world!"), 0x2488_4cba);
  }

  #[test]
  fn every_tail_length() {
    // Vectors from the reference implementation, seed 0x9747b28c.
    assert_eq!(Murmur3_32::hash_with_seed(0x9747_b28c, b"a"), 0x7fa0_9ea6);
    assert_eq!(Murmur3_32::hash_with_seed(0x9747_b28c, b"aa"), 0x5d21_1726);
    assert_eq!(Murmur3_32::hash_with_seed(0x9747_b28c, b"aaa"), 0x283e_0130);
  }

  #[test]
  fn sum_does_not_consume_state() {
    let mut d = Digest32::new();
    d.write(b"abcde");
    let first = d.sum();
    assert_eq!(d.sum(), first);
    d.write(b"fg");
    assert_eq!(d.sum(), Murmur3_32::hash(b"abcdefg"));
  }

  #[test]
  fn reset_returns_to_seed() {
    let mut d = Digest32::with_seed(7);
    d.write(b"garbage in");
    d.reset();
    assert_eq!(d.total_len(), 0);
    d.write(b"abc");
    assert_eq!(d.sum(), Murmur3_32::hash_with_seed(7, b"abc"));
    assert_eq!(d.seed(), 7);
  }

  #[test]
  fn size_is_four_bytes() {
    assert_eq!(Digest32::default().size(), 4);
  }
}
