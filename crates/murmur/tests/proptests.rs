//! Property-based tests for the streaming digests.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use murmur::{Digest32, Digest64, Digest128, StreamingHash};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 4KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..4096)
}

/// Generate sorted cut points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(|mut splits| {
    splits.sort_unstable();
    splits
  })
}

// Generic Property Tests

/// Write `data` cut at every point in `splits` and return the final sum.
fn chunked_sum<H: StreamingHash>(seed: H::Seed, data: &[u8], splits: &[usize]) -> H::Output {
  let mut h = H::with_seed(seed);
  let mut prev = 0;
  for &split in splits {
    let split = split.clamp(prev, data.len());
    assert_eq!(h.write(&data[prev..split]), split - prev);
    prev = split;
  }
  h.write(&data[prev..]);
  h.sum()
}

/// Any chunking produces the one-shot result.
fn prop_chunked_equals_oneshot<H: StreamingHash>(seed: H::Seed, data: &[u8], splits: &[usize]) -> bool {
  chunked_sum::<H>(seed, data, splits) == H::digest_with_seed(seed, data)
}

/// Byte-at-a-time writes produce the one-shot result.
fn prop_bytewise_equals_oneshot<H: StreamingHash>(seed: H::Seed, data: &[u8]) -> bool {
  let mut h = H::with_seed(seed);
  for b in data {
    h.write(core::slice::from_ref(b));
  }
  h.sum() == H::digest_with_seed(seed, data)
}

/// Queries are pure, and later writes continue as if the query never happened.
fn prop_query_is_idempotent<H: StreamingHash>(seed: H::Seed, data: &[u8], split: usize) -> bool {
  let (a, b) = data.split_at(split.min(data.len()));
  let mut h = H::with_seed(seed);
  h.write(a);
  let first = h.sum();
  let second = h.sum();
  h.write(b);
  first == second && first == H::digest_with_seed(seed, a) && h.sum() == H::digest_with_seed(seed, data)
}

/// Reset followed by X equals a fresh digest fed X.
fn prop_reset_equals_fresh<H: StreamingHash>(seed: H::Seed, junk: &[u8], data: &[u8]) -> bool {
  let mut h = H::with_seed(seed);
  h.write(junk);
  h.reset();
  h.write(data);
  h.sum() == H::digest_with_seed(seed, data)
}

// Digest32 Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  #[test]
  fn digest32_chunked(seed in any::<u32>(), data in arb_data(), splits in arb_splits(4096, 6)) {
    prop_assert!(prop_chunked_equals_oneshot::<Digest32>(seed, &data, &splits));
  }

  #[test]
  fn digest32_bytewise(seed in any::<u32>(), data in prop::collection::vec(any::<u8>(), 0..64)) {
    prop_assert!(prop_bytewise_equals_oneshot::<Digest32>(seed, &data));
  }

  #[test]
  fn digest32_query(seed in any::<u32>(), data in arb_data(), split in 0..4096usize) {
    prop_assert!(prop_query_is_idempotent::<Digest32>(seed, &data, split));
  }

  #[test]
  fn digest32_reset(seed in any::<u32>(), junk in arb_data(), data in arb_data()) {
    prop_assert!(prop_reset_equals_fresh::<Digest32>(seed, &junk, &data));
  }

  #[test]
  fn digest32_deterministic(seed in any::<u32>(), data in arb_data()) {
    prop_assert_eq!(murmur::seed_sum32(seed, &data), murmur::seed_sum32(seed, &data));
  }
}

// Digest64 Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  #[test]
  fn digest64_chunked(seed in any::<u64>(), data in arb_data(), splits in arb_splits(4096, 6)) {
    prop_assert!(prop_chunked_equals_oneshot::<Digest64>(seed, &data, &splits));
  }

  #[test]
  fn digest64_bytewise(seed in any::<u64>(), data in prop::collection::vec(any::<u8>(), 0..96)) {
    prop_assert!(prop_bytewise_equals_oneshot::<Digest64>(seed, &data));
  }

  #[test]
  fn digest64_query(seed in any::<u64>(), data in arb_data(), split in 0..4096usize) {
    prop_assert!(prop_query_is_idempotent::<Digest64>(seed, &data, split));
  }

  #[test]
  fn digest64_reset(seed in any::<u64>(), junk in arb_data(), data in arb_data()) {
    prop_assert!(prop_reset_equals_fresh::<Digest64>(seed, &junk, &data));
  }

  #[test]
  fn sum64_is_hi_lane_of_sum128(seed in any::<u64>(), data in arb_data()) {
    prop_assert_eq!(murmur::seed_sum64(seed, &data), murmur::seed_sum128(seed, seed, &data).hi);
  }
}

// Digest128 Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  #[test]
  fn digest128_chunked(seeds in any::<[u64; 2]>(), data in arb_data(), splits in arb_splits(4096, 6)) {
    prop_assert!(prop_chunked_equals_oneshot::<Digest128>(seeds, &data, &splits));
  }

  #[test]
  fn digest128_bytewise(seeds in any::<[u64; 2]>(), data in prop::collection::vec(any::<u8>(), 0..96)) {
    prop_assert!(prop_bytewise_equals_oneshot::<Digest128>(seeds, &data));
  }

  #[test]
  fn digest128_query(seeds in any::<[u64; 2]>(), data in arb_data(), split in 0..4096usize) {
    prop_assert!(prop_query_is_idempotent::<Digest128>(seeds, &data, split));
  }

  #[test]
  fn digest128_reset(seeds in any::<[u64; 2]>(), junk in arb_data(), data in arb_data()) {
    prop_assert!(prop_reset_equals_fresh::<Digest128>(seeds, &junk, &data));
  }

  #[test]
  fn write_vectored_equals_concatenation(seeds in any::<[u64; 2]>(), a in arb_data(), b in arb_data()) {
    let mut h = Digest128::with_seed(seeds);
    prop_assert_eq!(h.write_vectored(&[a.as_slice(), b.as_slice()]), a.len() + b.len());
    let joined: Vec<u8> = a.iter().chain(&b).copied().collect();
    prop_assert_eq!(h.sum(), Digest128::digest_with_seed(seeds, &joined));
  }
}
