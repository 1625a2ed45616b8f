//! I/O adapter support for streaming hashes.
//!
//! This module provides [`HashReader`] and [`HashWriter`], which wrap
//! [`std::io::Read`] and [`std::io::Write`] implementations and feed every
//! byte actually transferred into a [`StreamingHash`](crate::StreamingHash).
//!
//! # Design
//!
//! The adapters are generic over the sealed [`Hashable`] trait, which is
//! implemented automatically for every `StreamingHash` and cannot be
//! implemented directly.
//!
//! # Example
//!
//! ```rust
//! # use traits::StreamingHash;
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl StreamingHash for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   type Seed = u32;
//! #   fn with_seed(seed: u32) -> Self { Self(seed) }
//! #   fn write(&mut self, data: &[u8]) -> usize {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #     data.len()
//! #   }
//! #   fn sum(&self) -> u32 { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.sum(), u32::from(b'a') + u32::from(b'b') + u32::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

/// Sealed trait marker - not implementable outside rsmurmur.
mod private {
  /// Sealed trait marker.
  pub trait Sealed {}
}

// Internal re-export for the blanket impl in `streaming`.
#[doc(hidden)]
pub use private::Sealed as SealedMarker;

/// Trait for types that can be used with I/O adapters.
///
/// This is implemented automatically for all
/// [`StreamingHash`](crate::StreamingHash) types. It cannot be implemented
/// manually.
///
/// # Stability
///
/// This trait is sealed - new methods may be added in minor versions.
pub trait Hashable: private::Sealed {
  /// The output type (`u32`, `u64`, or a 128-bit pair).
  type Output: Copy + core::fmt::Debug;

  /// The seed type.
  type Seed: Copy + core::fmt::Debug + Default;

  /// Create a new hasher seeded with `seed`.
  fn new_hasher(seed: Self::Seed) -> Self;

  /// Feed data into the hasher.
  fn feed(&mut self, data: &[u8]);

  /// Query the current hash without consuming state.
  fn current(&self) -> Self::Output;
}

#[cfg(feature = "std")]
#[inline]
fn read_and_feed<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn read_vectored_and_feed<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      continue;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

/// Forwards to the inner writer first, then hashes only the accepted prefix.
#[cfg(feature = "std")]
#[inline]
fn write_and_feed<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn write_vectored_and_feed<W>(
  inner: &mut W,
  bufs: &[std::io::IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      continue;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`](std::io::Read) and hashes the bytes read through it.
///
/// All reads pass through to the inner reader while the hasher is fed the
/// bytes actually returned (short reads are handled).
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The hash type (e.g., `Digest128`)
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct HashReader<R, H: Hashable> {
  inner: R,
  hasher: H,
}

#[cfg(feature = "std")]
impl<R, H: Hashable> HashReader<R, H> {
  /// Create a new reader wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self::with_seed(inner, H::Seed::default())
  }

  /// Create a new reader wrapper seeded with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: H::Seed) -> Self {
    Self {
      inner,
      hasher: H::new_hasher(seed),
    }
  }

  /// Get the hash of everything read so far.
  ///
  /// This does not consume the reader - further reads keep updating the hash.
  #[inline]
  #[must_use]
  pub fn sum(&self) -> H::Output {
    self.hasher.current()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap this `HashReader`, returning the inner reader and the hash.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    let out = self.hasher.current();
    (self.inner, out)
  }

  /// Unwrap this `HashReader`, returning the inner reader and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<R: std::io::Read, H: Hashable> std::io::Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_feed(&mut self.inner, buf, |data| self.hasher.feed(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_feed(&mut self.inner, bufs, |data| self.hasher.feed(data))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`](std::io::Write) and hashes the bytes written through it.
///
/// Only the bytes the inner writer accepts are hashed, so `write_all` retries
/// after a short write produce the same hash as a single full write.
///
/// # Type Parameters
///
/// - `W`: The inner writer type
/// - `H`: The hash type (e.g., `Digest32`)
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct HashWriter<W, H: Hashable> {
  inner: W,
  hasher: H,
}

#[cfg(feature = "std")]
impl<W, H: Hashable> HashWriter<W, H> {
  /// Create a new writer wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self::with_seed(inner, H::Seed::default())
  }

  /// Create a new writer wrapper seeded with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: H::Seed) -> Self {
    Self {
      inner,
      hasher: H::new_hasher(seed),
    }
  }

  /// Get the hash of everything written so far.
  #[inline]
  #[must_use]
  pub fn sum(&self) -> H::Output {
    self.hasher.current()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap this `HashWriter`, returning the inner writer and the hash.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    let out = self.hasher.current();
    (self.inner, out)
  }

  /// Unwrap this `HashWriter`, returning the inner writer and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<W: std::io::Write, H: Hashable> std::io::Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_feed(&mut self.inner, buf, |data| self.hasher.feed(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    write_vectored_and_feed(&mut self.inner, bufs, |data| self.hasher.feed(data))
  }
}
