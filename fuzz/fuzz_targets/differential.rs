//! Differential fuzz target: murmur vs the `murmur3` crate.
//!
//! Any mismatch on any input with any seed is a bug.

#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let seed = input.seed;

  let theirs = murmur3::murmur3_32(&mut Cursor::new(data), seed).expect("in-memory read");
  assert_eq!(murmur::seed_sum32(seed, data), theirs, "x86_32 mismatch");

  // The reference packs h2 into the high half; our `hi` is h1.
  let packed = murmur3::murmur3_x64_128(&mut Cursor::new(data), seed).expect("in-memory read");
  let ours = murmur::seed_sum128(u64::from(seed), u64::from(seed), data);
  assert_eq!(ours.hi, packed as u64, "x64_128 h1 mismatch");
  assert_eq!(ours.lo, (packed >> 64) as u64, "x64_128 h2 mismatch");
  assert_eq!(murmur::seed_sum64(u64::from(seed), data), ours.hi, "x64_64 mismatch");
});
