//! Incremental (streaming) hash traits.
//!
//! - **Chunking-agnostic**: any partition of the input yields the same result
//! - **Idempotent queries**: [`sum`](StreamingHash::sum) never consumes state
//! - **Reusable**: [`reset`](StreamingHash::reset) returns to the seeded state

use core::fmt::Debug;

/// Non-cryptographic hash computed over data that arrives in pieces.
///
/// # Usage
///
/// ```rust,ignore
/// use murmur::{Digest32, StreamingHash};
///
/// // One-shot
/// let h = Digest32::digest(b"hello world");
///
/// // Streaming
/// let mut d = Digest32::new();
/// d.write(b"hello ");
/// d.write(b"world");
/// assert_eq!(d.sum(), h);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()` and as
///   `with_seed(Self::Seed::default())`
/// - `write()` must consume its whole input and return its length
/// - `sum()` must be idempotent and must not mutate the hasher
/// - `reset()` must restore the state produced by the original seed
pub trait StreamingHash: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type accepted by [`with_seed`](Self::with_seed).
  type Seed: Copy + Debug + Default;

  /// Create a new hasher with the default seed.
  #[inline]
  #[must_use]
  fn new() -> Self {
    Self::with_seed(Self::Seed::default())
  }

  /// Create a new hasher with `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Feed `data` into the hasher, returning the number of bytes consumed.
  ///
  /// Writes never partially fail: the return value is always `data.len()`.
  fn write(&mut self, data: &[u8]) -> usize;

  /// Feed multiple non-contiguous buffers, in order.
  ///
  /// Semantics are identical to calling [`write`](Self::write) on each buffer.
  #[inline]
  fn write_vectored(&mut self, bufs: &[&[u8]]) -> usize {
    bufs.iter().map(|buf| self.write(buf)).sum()
  }

  /// Feed `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn write_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) -> usize {
    bufs.iter().map(|buf| self.write(buf)).sum()
  }

  /// Return the hash of everything written so far.
  ///
  /// This does not consume or modify the hasher; further writes continue as if
  /// the query never happened.
  #[must_use]
  fn sum(&self) -> Self::Output;

  /// Reset the hasher to its seeded initial state.
  fn reset(&mut self);

  /// Output width in bytes. Static, never data-dependent.
  #[inline]
  #[must_use]
  fn size(&self) -> usize {
    Self::OUTPUT_SIZE
  }

  /// Compute the hash of `data` in one shot with the default seed.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    Self::digest_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` in one shot with `seed`.
  #[inline]
  #[must_use]
  fn digest_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let mut h = Self::with_seed(seed);
    h.write(data);
    h.sum()
  }

  /// Wrap a reader to hash everything read through it.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use murmur::{Digest128, StreamingHash};
  /// use std::fs::File;
  ///
  /// let mut reader = Digest128::reader(File::open("data.bin")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("{:x}", reader.sum());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer to hash everything written through it.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}

// Sealed trait implementations for I/O support
impl<T: StreamingHash> crate::io::SealedMarker for T {}

impl<T: StreamingHash> crate::io::Hashable for T {
  type Output = T::Output;
  type Seed = T::Seed;

  #[inline(always)]
  fn new_hasher(seed: Self::Seed) -> Self {
    T::with_seed(seed)
  }

  #[inline(always)]
  fn feed(&mut self, data: &[u8]) {
    T::write(self, data);
  }

  #[inline(always)]
  fn current(&self) -> Self::Output {
    T::sum(self)
  }
}
