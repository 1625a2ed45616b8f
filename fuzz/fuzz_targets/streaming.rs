//! Fuzz target for the streaming digests.
//!
//! Arbitrary write sequences, interleaved queries and resets must agree with
//! the one-shot functions.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use murmur::{Digest32, Digest64, Digest128, StreamingHash};

#[derive(Arbitrary, Debug)]
struct Input {
  seeds: [u64; 2],
  data: Vec<u8>,
  /// Chunk sizes for streaming writes
  chunk_sizes: Vec<u8>,
  /// Byte offset at which to reset, if any
  reset_at: Option<u16>,
}

fuzz_target!(|input: Input| {
  check::<Digest32>(input.seeds[0] as u32, &input, murmur::seed_sum32(input.seeds[0] as u32, tail(&input)));
  check::<Digest64>(input.seeds[0], &input, murmur::seed_sum64(input.seeds[0], tail(&input)));
  check::<Digest128>(input.seeds, &input, murmur::seed_sum128(input.seeds[0], input.seeds[1], tail(&input)));
});

/// The bytes that count after the optional reset.
fn tail(input: &Input) -> &[u8] {
  match input.reset_at {
    Some(at) => &input.data[usize::from(at).min(input.data.len())..],
    None => &input.data,
  }
}

fn check<H: StreamingHash>(seed: H::Seed, input: &Input, expected: H::Output) {
  let data = &input.data;
  let reset_at = input.reset_at.map(|at| usize::from(at).min(data.len()));

  let mut hasher = H::with_seed(seed);
  if reset_at == Some(0) {
    hasher.write(b"discarded");
    hasher.reset();
  }
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      usize::from(input.chunk_sizes[chunk_idx % input.chunk_sizes.len()]).max(1)
    };

    let mut end = (offset + chunk_size).min(data.len());
    if let Some(at) = reset_at
      && offset < at
      && end > at
    {
      end = at;
    }
    assert_eq!(hasher.write(&data[offset..end]), end - offset);
    offset = end;
    chunk_idx += 1;

    if reset_at == Some(offset) {
      hasher.reset();
    }
    // Queries must not disturb the stream.
    let _ = hasher.sum();
  }

  assert_eq!(hasher.sum(), expected, "streaming mismatch");
}
