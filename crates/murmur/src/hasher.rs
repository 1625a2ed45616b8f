//! `core::hash` integration.

use core::hash::{BuildHasher, Hasher};

use traits::StreamingHash;

use crate::Digest128;

/// [`Hasher`] backed by MurmurHash3 x64_128; `finish` yields the x64_64 value.
///
/// Integer writes go through the default `Hasher` methods, which hash their
/// native-endian bytes; only [`write`](Hasher::write) of byte slices is
/// portable across hosts.
#[derive(Clone, Debug, Default)]
pub struct Murmur3Hasher {
  digest: Digest128,
}

impl Murmur3Hasher {
  /// Create a hasher seeding both x64_128 lanes with `seed`.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self {
      digest: Digest128::from_seed(seed),
    }
  }
}

impl Hasher for Murmur3Hasher {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.digest.write(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.digest.sum128().hi
  }
}

/// [`BuildHasher`] producing seeded [`Murmur3Hasher`]s.
///
/// ```
/// use std::collections::HashMap;
///
/// use murmur::BuildMurmur3Hasher;
///
/// let mut map = HashMap::with_hasher(BuildMurmur3Hasher::with_seed(7));
/// map.insert("shard-3", 3);
/// assert_eq!(map.get("shard-3"), Some(&3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildMurmur3Hasher {
  seed: u64,
}

impl BuildMurmur3Hasher {
  /// Create a builder whose hashers all start from `seed`.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self { seed }
  }

  /// The seed handed to every built hasher.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
    self.seed
  }
}

impl BuildHasher for BuildMurmur3Hasher {
  type Hasher = Murmur3Hasher;

  #[inline]
  fn build_hasher(&self) -> Murmur3Hasher {
    Murmur3Hasher::with_seed(self.seed)
  }
}
