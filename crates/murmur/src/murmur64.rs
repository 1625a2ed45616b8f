//! MurmurHash3 x64_64 (**NOT CRYPTO**).
//!
//! Not a separate algorithm: the `h1` lane of x64_128 with both lanes seeded
//! from one `u64`.

use traits::{FastHash, StreamingHash};

use crate::murmur128::Digest128;

/// Streaming MurmurHash3 x64_64, a view over [`Digest128`].
///
/// ```
/// use murmur::{Digest64, Digest128, StreamingHash};
///
/// let mut d64 = Digest64::with_seed(9);
/// let mut d128 = Digest128::from_seed(9);
/// d64.write(b"shard-key");
/// d128.write(b"shard-key");
/// assert_eq!(d64.sum64(), d128.sum128().hi);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Digest64 {
  inner: Digest128,
}

impl Digest64 {
  /// The seed both lanes were initialized with.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
    self.inner.seeds().0
  }

  /// The underlying 128-bit state.
  #[inline]
  #[must_use]
  pub const fn as_digest128(&self) -> &Digest128 {
    &self.inner
  }

  /// Hash of everything written so far. Does not modify the digest.
  #[inline]
  #[must_use]
  pub fn sum64(&self) -> u64 {
    self.inner.sum128().hi
  }
}

impl From<Digest64> for Digest128 {
  #[inline]
  fn from(d: Digest64) -> Self {
    d.inner
  }
}

impl StreamingHash for Digest64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn with_seed(seed: u64) -> Self {
    Self {
      inner: Digest128::from_seed(seed),
    }
  }

  #[inline]
  fn write(&mut self, data: &[u8]) -> usize {
    self.inner.write(data)
  }

  #[inline]
  fn sum(&self) -> u64 {
    self.sum64()
  }

  #[inline]
  fn reset(&mut self) {
    self.inner.reset();
  }
}

/// One-shot MurmurHash3 x64_64.
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3_64;

impl FastHash for Murmur3_64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    Digest64::digest_with_seed(seed, data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::murmur128::Murmur3_128;

  #[test]
  fn projects_h1_of_the_128_bit_hash() {
    for len in 0..40u8 {
      let data: [u8; 40] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
      let data = &data[..usize::from(len)];
      for seed in [0u64, 1, u64::MAX] {
        assert_eq!(Murmur3_64::hash_with_seed(seed, data), Murmur3_128::hash_with_seed([seed, seed], data).hi);
      }
    }
  }

  #[test]
  fn seed_and_reset() {
    let mut d = Digest64::with_seed(3);
    assert_eq!(d.seed(), 3);
    d.write(b"abc");
    d.reset();
    assert_eq!(d.as_digest128().total_len(), 0);
    assert_eq!(d.sum(), Digest64::with_seed(3).sum());
  }

  #[test]
  fn converts_back_to_128() {
    let mut d = Digest64::new();
    d.write(b"xyz");
    let wide: Digest128 = d.clone().into();
    assert_eq!(wide.sum128().hi, d.sum64());
  }

  #[test]
  fn size_is_eight_bytes() {
    assert_eq!(Digest64::default().size(), 8);
  }
}
