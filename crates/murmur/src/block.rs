//! Little-endian block decoding and partial-block buffering.
//!
//! Words are composed byte by byte with shifts, so the result is identical on
//! every host byte order and no alignment is ever assumed.

#![allow(clippy::indexing_slicing)] // Fixed-width block decoding; out-of-range reads must panic

/// Decode the little-endian `u32` at `bytes[offset..offset + 4]`.
///
/// # Panics
///
/// Panics if fewer than four bytes remain at `offset`.
#[inline(always)]
#[must_use]
pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
  debug_assert!(offset + 4 <= bytes.len());
  u32::from(bytes[offset])
    | (u32::from(bytes[offset + 1]) << 8)
    | (u32::from(bytes[offset + 2]) << 16)
    | (u32::from(bytes[offset + 3]) << 24)
}

/// Decode the little-endian `u64` at `bytes[offset..offset + 8]`.
///
/// # Panics
///
/// Panics if fewer than eight bytes remain at `offset`.
#[inline(always)]
#[must_use]
pub(crate) fn read_u64_le(bytes: &[u8], offset: usize) -> u64 {
  debug_assert!(offset + 8 <= bytes.len());
  u64::from(read_u32_le(bytes, offset)) | (u64::from(read_u32_le(bytes, offset + 4)) << 32)
}

/// Assemble up to four tail bytes into a word, zero-filling the high bytes.
#[inline(always)]
#[must_use]
pub(crate) fn fold_tail_u32(tail: &[u8]) -> u32 {
  assert!(tail.len() <= 4, "tail of {} bytes does not fit a u32", tail.len());
  tail.iter().rev().fold(0, |k, &b| (k << 8) | u32::from(b))
}

/// Assemble up to eight tail bytes into a word, zero-filling the high bytes.
#[inline(always)]
#[must_use]
pub(crate) fn fold_tail_u64(tail: &[u8]) -> u64 {
  assert!(tail.len() <= 8, "tail of {} bytes does not fit a u64", tail.len());
  tail.iter().rev().fold(0, |k, &b| (k << 8) | u64::from(b))
}

/// Holds the bytes of an incomplete block between writes.
///
/// Invariant: `len < N` whenever control is outside [`absorb`](Self::absorb).
#[derive(Clone, Copy, Debug)]
pub(crate) struct BlockBuffer<const N: usize> {
  buf: [u8; N],
  len: usize,
}

impl<const N: usize> BlockBuffer<N> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self { buf: [0; N], len: 0 }
  }

  /// Append `data`, handing every block it completes to `on_block` in order.
  ///
  /// Whole blocks are taken straight from `data`; only the leading fill-up and
  /// the trailing remainder are copied.
  #[inline]
  pub(crate) fn absorb(&mut self, mut data: &[u8], mut on_block: impl FnMut(&[u8; N])) {
    if self.len > 0 {
      let take = (N - self.len).min(data.len());
      self.buf[self.len..self.len + take].copy_from_slice(&data[..take]);
      self.len += take;
      data = &data[take..];
      if self.len < N {
        return;
      }
      on_block(&self.buf);
      self.len = 0;
    }

    let (blocks, tail) = data.as_chunks::<N>();
    for block in blocks {
      on_block(block);
    }
    self.buf[..tail.len()].copy_from_slice(tail);
    self.len = tail.len();
  }

  /// The buffered tail, always shorter than one block.
  #[inline]
  #[must_use]
  pub(crate) fn pending(&self) -> &[u8] {
    &self.buf[..self.len]
  }

  #[inline]
  pub(crate) fn clear(&mut self) {
    self.len = 0;
  }
}
