//! MurmurHash3 x64_128 (**NOT CRYPTO**).
//!
//! Two 64-bit accumulators, 16-byte blocks, 0-15 byte tail. Unlike the
//! reference algorithm, each lane takes its own seed; seeding both lanes with
//! the same value reproduces the reference output.

use traits::{FastHash, StreamingHash};

use crate::{
  UInt128,
  block::{BlockBuffer, fold_tail_u64, read_u64_le},
};

const BLOCK_LEN: usize = 16;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

#[inline(always)]
const fn mix_k1(k1: u64) -> u64 {
  k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline(always)]
const fn mix_k2(k2: u64) -> u64 {
  k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

#[inline(always)]
const fn mix_block(mut h1: u64, mut h2: u64, k1: u64, k2: u64) -> (u64, u64) {
  h1 ^= mix_k1(k1);
  h1 = h1.rotate_left(27).wrapping_add(h2);
  h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

  h2 ^= mix_k2(k2);
  h2 = h2.rotate_left(31).wrapping_add(h1);
  h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);

  (h1, h2)
}

#[inline(always)]
pub(crate) const fn fmix64(mut k: u64) -> u64 {
  k ^= k >> 33;
  k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
  k ^= k >> 33;
  k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
  k ^= k >> 33;
  k
}

/// Fold the tail into copies of the lanes and avalanche them.
///
/// Tail bytes 0-7 feed `k1`, bytes 8-14 feed `k2`; each non-empty half gets
/// only the one-step mix before being xored into its lane.
#[inline]
#[must_use]
fn finish(mut h1: u64, mut h2: u64, tail: &[u8], total_len: u64) -> UInt128 {
  debug_assert!(tail.len() < BLOCK_LEN);
  let (low, high) = tail.split_at(tail.len().min(8));
  if !high.is_empty() {
    h2 ^= mix_k2(fold_tail_u64(high));
  }
  if !low.is_empty() {
    h1 ^= mix_k1(fold_tail_u64(low));
  }

  h1 ^= total_len;
  h2 ^= total_len;

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  h1 = fmix64(h1);
  h2 = fmix64(h2);

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  UInt128 { hi: h1, lo: h2 }
}

/// Streaming MurmurHash3 x64_128.
///
/// # Example
///
/// ```
/// use murmur::{Digest128, StreamingHash, UInt128};
///
/// let mut d = Digest128::with_seeds(1, 2);
/// d.write(b"hello ");
/// d.write(b"world");
/// let out: UInt128 = d.sum128();
/// assert_eq!(out, murmur::seed_sum128(1, 2, b"hello world"));
/// ```
#[derive(Clone, Debug)]
pub struct Digest128 {
  h1: u64,
  h2: u64,
  seed1: u64,
  seed2: u64,
  buffer: BlockBuffer<BLOCK_LEN>,
  total_len: u64,
}

impl Digest128 {
  /// Create a digest with independent seeds for lanes `h1` and `h2`.
  #[inline]
  #[must_use]
  pub const fn with_seeds(seed1: u64, seed2: u64) -> Self {
    Self {
      h1: seed1,
      h2: seed2,
      seed1,
      seed2,
      buffer: BlockBuffer::new(),
      total_len: 0,
    }
  }

  /// Create a digest seeding both lanes with `seed`, as the reference
  /// algorithm does.
  #[inline]
  #[must_use]
  pub const fn from_seed(seed: u64) -> Self {
    Self::with_seeds(seed, seed)
  }

  /// The `(seed1, seed2)` pair this digest resets to.
  #[inline]
  #[must_use]
  pub const fn seeds(&self) -> (u64, u64) {
    (self.seed1, self.seed2)
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
  pub fn sum128(&self) -> UInt128 {
    finish(self.h1, self.h2, self.buffer.pending(), self.total_len)
  }
}

impl Default for Digest128 {
  #[inline]
  fn default() -> Self {
    Self::with_seeds(0, 0)
  }
}

impl StreamingHash for Digest128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = UInt128;
  type Seed = [u64; 2];

  #[inline]
  fn with_seed([seed1, seed2]: [u64; 2]) -> Self {
    Self::with_seeds(seed1, seed2)
  }

  #[inline]
  fn write(&mut self, data: &[u8]) -> usize {
    let (h1, h2) = (&mut self.h1, &mut self.h2);
    self.buffer.absorb(data, |block| {
      (*h1, *h2) = mix_block(*h1, *h2, read_u64_le(block, 0), read_u64_le(block, 8));
    });
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    data.len()
  }

  #[inline]
  fn sum(&self) -> UInt128 {
    self.sum128()
  }

  #[inline]
  fn reset(&mut self) {
    self.h1 = self.seed1;
    self.h2 = self.seed2;
    self.buffer.clear();
    self.total_len = 0;
  }
}

/// One-shot MurmurHash3 x64_128 with per-lane seeds `[seed1, seed2]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3_128;

impl FastHash for Murmur3_128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = UInt128;
  type Seed = [u64; 2];

  #[inline]
  fn hash_with_seed(seed: [u64; 2], data: &[u8]) -> UInt128 {
    Digest128::digest_with_seed(seed, data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_with_zero_seed_is_zero() {
    assert_eq!(Murmur3_128::hash(b""), UInt128::new(0, 0));
    assert_eq!(fmix64(0), 0);
  }

  #[test]
  fn canonical_vectors() {
    assert_eq!(
      Murmur3_128::hash(b"hello world"),
      UInt128::new(5_998_619_086_395_760_910, 12_364_428_806_279_881_649)
    );
    assert_eq!(
      Murmur3_128::hash(b"The quick brown fox jumps over the lazy dog"),
      UInt128::new(16_378_391_709_484_522_348, 8_809_951_995_912_426_311)
    );
  }

  #[test]
  fn lanes_take_independent_seeds() {
    let shared = Murmur3_128::hash_with_seed([42, 42], b"abc");
    let mut d = Digest128::from_seed(42);
    d.write(b"abc");
    assert_eq!(d.sum128(), shared);
    assert_ne!(Murmur3_128::hash_with_seed([42, 43], b"abc"), shared);
  }

  #[test]
  fn sum_is_idempotent_and_non_consuming() {
    let mut d = Digest128::new();
    d.write(b"0123456789abcdefXYZ");
    let a = d.sum();
    assert_eq!(d.sum(), a);
    d.write(b"!");
    assert_eq!(d.sum(), Murmur3_128::hash(b"0123456789abcdefXYZ!"));
  }

  #[test]
  fn reset_restores_both_seeds() {
    let mut d = Digest128::with_seeds(5, 6);
    d.write(&[0xa5; 40]);
    d.reset();
    assert_eq!(d.seeds(), (5, 6));
    assert_eq!(d.total_len(), 0);
    assert_eq!(d.sum(), Digest128::with_seeds(5, 6).sum());
  }

  #[test]
  fn size_is_sixteen_bytes() {
    assert_eq!(Digest128::default().size(), 16);
  }
}
