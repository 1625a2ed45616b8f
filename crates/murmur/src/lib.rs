//! MurmurHash3 (**NOT CRYPTO**): x86_32, x64_64 and x64_128.
//!
//! Every variant comes as a one-shot function, a [`FastHash`] marker type, and
//! a [`StreamingHash`] digest that accepts input in arbitrary chunks and can be
//! queried at any point without disturbing its state.
//!
//! Output is identical on every host byte order.
//!
//! | Variant | One-shot | Digest | Output | Seed |
//! |---------|----------|--------|--------|------|
//! | x86_32 | [`sum32`], [`seed_sum32`] | [`Digest32`] | `u32` | `u32` |
//! | x64_64 | [`sum64`], [`seed_sum64`] | [`Digest64`] | `u64` | `u64` |
//! | x64_128 | [`sum128`], [`seed_sum128`] | [`Digest128`] | [`UInt128`] | `u64` per lane |
//!
//! x64_64 is the `h1` lane of x64_128, so `sum64(b) == sum128(b).hi`.
//!
//! # Example
//!
//! ```rust
//! use murmur::{Digest32, StreamingHash};
//!
//! let oneshot = murmur::seed_sum32(42, b"hello world");
//!
//! let mut d = Digest32::with_seed(42);
//! d.write(b"hello");
//! d.write(b" world");
//! assert_eq!(d.sum(), oneshot);
//! assert_eq!(d.sum(), oneshot); // queries are pure
//!
//! d.reset();
//! d.write(b"hello world");
//! assert_eq!(d.sum(), oneshot);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables the [`io`] reader/writer adapters |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod block;
mod error;
mod hasher;
#[cfg(feature = "std")]
pub mod io;
mod murmur128;
mod murmur32;
mod murmur64;
mod oneshot;
mod uint128;

pub use error::LengthError;
pub use hasher::{BuildMurmur3Hasher, Murmur3Hasher};
pub use murmur32::{Digest32, Murmur3_32};
pub use murmur64::{Digest64, Murmur3_64};
pub use murmur128::{Digest128, Murmur3_128};
pub use oneshot::{
  seed_sum32, seed_sum32_str, seed_sum32_utf16, seed_sum64, seed_sum64_str, seed_sum64_utf16, seed_sum128,
  seed_sum128_str, seed_sum128_utf16, sum32, sum32_str, sum32_utf16, sum64, sum64_str, sum64_utf16, sum128, sum128_str,
  sum128_utf16, write_utf16,
};
pub use traits::{FastHash, StreamingHash};
pub use uint128::UInt128;
