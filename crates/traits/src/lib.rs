//! Core hashing traits for rsmurmur.
//!
//! This crate provides the foundational traits that all rsmurmur hashes
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot non-cryptographic hashing | `Murmur3_32`, `Murmur3_128` |
//! | [`StreamingHash`] | Incremental hashing with idempotent queries | `Digest32`, `Digest128` |
//!
//! With the `std` feature, every [`StreamingHash`] can also be driven through
//! the [`io`] adapters.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fast_hash;
pub mod io;
mod streaming;

pub use fast_hash::FastHash;
pub use streaming::StreamingHash;
