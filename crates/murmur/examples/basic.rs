//! Basic MurmurHash3 usage: one-shot and streaming APIs.
//!
//! Run with: `cargo run --example basic -p murmur`

use murmur::{Digest32, Digest64, Digest128, StreamingHash};

fn main() {
  println!("=== MurmurHash3 Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  reuse_example();
}

/// One-shot computation: the whole input is in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"hello world";

  let h32 = murmur::sum32(data);
  println!("x86_32:         0x{h32:08x}");
  assert_eq!(h32, 0x5e92_8f0f);

  let h64 = murmur::sum64(data);
  println!("x64_64:         0x{h64:016x}");

  let h128 = murmur::sum128(data);
  println!("x64_128:        0x{h128:x}");
  assert_eq!(h64, h128.hi);

  // Text as a UTF-16 runtime would lay it out.
  let utf16 = murmur::sum32_utf16("Hello, World!");
  println!("x86_32 (utf16): {utf16}");
  assert_eq!(utf16, 1_777_475_617);

  println!();
}

/// Streaming computation: bytes arrive in arbitrary pieces.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let data = b"The quick brown fox jumps over the lazy dog";
  let (a, rest) = data.split_at(5);
  let (b, c) = rest.split_at(17);

  let mut d32 = Digest32::with_seed(42);
  let mut d64 = Digest64::with_seed(42);
  let mut d128 = Digest128::with_seeds(42, 43);
  for chunk in [a, b, c] {
    d32.write(chunk);
    d64.write(chunk);
    d128.write(chunk);
  }

  println!("x86_32  seed=42:      0x{:08x}", d32.sum());
  println!("x64_64  seed=42:      0x{:016x}", d64.sum());
  println!("x64_128 seeds=42,43:  0x{:x}", d128.sum());
  assert_eq!(d32.sum(), murmur::seed_sum32(42, data));
  assert_eq!(d64.sum(), murmur::seed_sum64(42, data));
  assert_eq!(d128.sum(), murmur::seed_sum128(42, 43, data));

  println!();
}

/// Queries are pure; reset returns to the seeded state.
fn reuse_example() {
  println!("--- Query and Reset ---\n");

  let mut d = Digest128::new();
  d.write(b"prefix");
  let partial = d.sum();
  d.write(b"-suffix");
  println!("after 'prefix':        {partial}");
  println!("after 'prefix-suffix': {}", d.sum());
  assert_eq!(partial, murmur::sum128(b"prefix"));

  d.reset();
  d.write(b"prefix");
  assert_eq!(d.sum(), partial);
  println!("size: {} bytes", d.size());
}
