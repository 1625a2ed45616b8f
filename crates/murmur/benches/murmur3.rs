//! MurmurHash3 benchmarks against the `murmur3` crate.

use core::{hint::black_box, time::Duration};
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, SamplingMode, Throughput, criterion_group, criterion_main};
use murmur::{Digest32, Digest128, StreamingHash as _};

mod common;

// ─────────────────────────────────────────────────────────────────────────────
// One-shot Comparison Benchmarks
// ─────────────────────────────────────────────────────────────────────────────

fn oneshot_32(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("murmur3_32/oneshot");
  group.warm_up_time(Duration::from_secs(1));
  group.measurement_time(Duration::from_secs(3));
  group.sampling_mode(SamplingMode::Flat);

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("murmur", len), data, |b, d| {
      b.iter(|| black_box(murmur::sum32(black_box(d))))
    });

    group.bench_with_input(BenchmarkId::new("murmur3-crate", len), data, |b, d| {
      b.iter(|| black_box(murmur3::murmur3_32(&mut Cursor::new(black_box(d)), 0).ok()))
    });
  }

  group.finish();
}

fn oneshot_128(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("murmur3_128/oneshot");
  group.warm_up_time(Duration::from_secs(1));
  group.measurement_time(Duration::from_secs(3));
  group.sampling_mode(SamplingMode::Flat);

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("murmur", len), data, |b, d| {
      b.iter(|| black_box(murmur::sum128(black_box(d))))
    });

    group.bench_with_input(BenchmarkId::new("murmur3-crate", len), data, |b, d| {
      b.iter(|| black_box(murmur3::murmur3_x64_128(&mut Cursor::new(black_box(d)), 0).ok()))
    });
  }

  group.finish();
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming Benchmarks
// ─────────────────────────────────────────────────────────────────────────────

fn streaming(c: &mut Criterion) {
  let data = black_box(common::pseudo_random_bytes(1024 * 1024, 0x3A11_0C8E_D00D_0001));

  let mut group = c.benchmark_group("murmur3/streaming");
  group.sample_size(30);
  group.sampling_mode(SamplingMode::Flat);
  group.throughput(Throughput::Bytes(data.len() as u64));

  // Odd chunk sizes keep the partial-block path busy.
  for chunk_size in [7, 64, 1000, 4096, 65536] {
    group.bench_function(format!("digest32/{chunk_size}B-chunks"), |b| {
      b.iter(|| {
        let mut h = Digest32::new();
        for chunk in data.chunks(chunk_size) {
          h.write(chunk);
        }
        black_box(h.sum())
      })
    });

    group.bench_function(format!("digest128/{chunk_size}B-chunks"), |b| {
      b.iter(|| {
        let mut h = Digest128::new();
        for chunk in data.chunks(chunk_size) {
          h.write(chunk);
        }
        black_box(h.sum())
      })
    });
  }

  group.finish();
}

criterion_group!(benches, oneshot_32, oneshot_128, streaming);
criterion_main!(benches);
