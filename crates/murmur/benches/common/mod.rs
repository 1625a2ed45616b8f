use core::hint::black_box;

/// SplitMix64 step.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
  *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
  let mut z = *state;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}

/// `len` reproducible bytes, filled eight at a time.
pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed;
  let mut out = Vec::with_capacity(len);
  while out.len() < len {
    let word = splitmix64(&mut state).to_le_bytes();
    let take = (len - out.len()).min(word.len());
    out.extend_from_slice(&word[..take]);
  }
  black_box(&out);
  out
}

/// Lengths straddling the 4-byte (x86_32) and 16-byte (x64_128) block
/// boundaries, then a throughput ladder.
pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  let around_blocks = [0usize, 3, 4, 5, 15, 16, 17, 31, 32, 33];
  let ladder = [256usize, 4 * 1024, 64 * 1024, 1024 * 1024];
  around_blocks
    .into_iter()
    .chain(ladder)
    .map(|len| (len, pseudo_random_bytes(len, 0x6D75_726D_7572_3300 ^ len as u64)))
    .collect()
}

pub fn set_throughput(group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>, len: usize) {
  if len == 0 {
    group.throughput(criterion::Throughput::Elements(1));
  } else {
    group.throughput(criterion::Throughput::Bytes(len as u64));
  }
}
