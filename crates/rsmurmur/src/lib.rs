//! MurmurHash3 for Rust: x86_32, x64_64 and x64_128, one-shot and streaming.
//!
//! `rsmurmur` is the facade over the workspace crates. MurmurHash3 is a fast
//! non-cryptographic hash for hash tables, sharding and deduplication; it
//! offers no resistance to deliberate collisions.
//!
//! # Quick Start
//!
//! ```
//! use rsmurmur::{Digest128, StreamingHash};
//!
//! // One-shot computation
//! let h = rsmurmur::sum128(b"hello world");
//! assert_eq!(rsmurmur::sum64(b"hello world"), h.hi);
//!
//! // Streaming computation
//! let mut d = Digest128::new();
//! d.write(b"hello ");
//! d.write(b"world");
//! assert_eq!(d.sum(), h);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables the [`io`] reader/writer adapters (implied by `cli`) |
//! | `cli` | Yes | Builds the `murmur3sum` binary |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rsmurmur = { version = "0.1", default-features = false }
//! ```
#![no_std]

// =============================================================================
// Hashes
// =============================================================================

pub use murmur::{
  // Hash-table integration
  BuildMurmur3Hasher,
  // Streaming digests
  Digest32,
  Digest64,
  Digest128,
  // Traits
  FastHash,
  // Errors
  LengthError,
  // One-shot markers
  Murmur3_32,
  Murmur3_64,
  Murmur3_128,
  Murmur3Hasher,
  StreamingHash,
  // Output
  UInt128,
};
pub use murmur::{
  seed_sum32, seed_sum32_str, seed_sum32_utf16, seed_sum64, seed_sum64_str, seed_sum64_utf16, seed_sum128,
  seed_sum128_str, seed_sum128_utf16, sum32, sum32_str, sum32_utf16, sum64, sum64_str, sum64_utf16, sum128, sum128_str,
  sum128_utf16, write_utf16,
};

// =============================================================================
// I/O
// =============================================================================

#[cfg(feature = "std")]
pub use murmur::io;
