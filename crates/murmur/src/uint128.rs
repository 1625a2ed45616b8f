//! 128-bit digest value.

use core::fmt;

use crate::{block::read_u64_le, error::LengthError};

/// The two finalized 64-bit lanes of a 128-bit MurmurHash3 digest.
///
/// `hi` holds lane `h1` and `lo` holds lane `h2`. The 64-bit variant of the
/// hash is exactly `hi`.
///
/// ```
/// use murmur::{UInt128, sum64, sum128};
///
/// let d: UInt128 = sum128(b"hello world");
/// assert_eq!(d.hi, sum64(b"hello world"));
/// assert_eq!(UInt128::from_bytes(d.to_bytes()), d);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UInt128 {
  /// Lane `h1`.
  pub hi: u64,
  /// Lane `h2`.
  pub lo: u64,
}

impl UInt128 {
  /// Byte width of the digest.
  pub const BYTES: usize = 16;

  #[inline]
  #[must_use]
  pub const fn new(hi: u64, lo: u64) -> Self {
    Self { hi, lo }
  }

  /// Fuse the lanes into one integer with `hi` in the upper 64 bits.
  #[inline]
  #[must_use]
  pub const fn as_u128(self) -> u128 {
    ((self.hi as u128) << 64) | self.lo as u128
  }

  /// Canonical MurmurHash3 byte layout: `h1` then `h2`, each little-endian.
  #[must_use]
  pub fn to_bytes(self) -> [u8; 16] {
    let mut out = [0u8; 16];
    let (h1, h2) = out.split_at_mut(8);
    h1.copy_from_slice(&self.hi.to_le_bytes());
    h2.copy_from_slice(&self.lo.to_le_bytes());
    out
  }

  /// Inverse of [`to_bytes`](Self::to_bytes).
  #[must_use]
  pub fn from_bytes(bytes: [u8; 16]) -> Self {
    Self {
      hi: read_u64_le(&bytes, 0),
      lo: read_u64_le(&bytes, 8),
    }
  }
}

impl From<UInt128> for u128 {
  #[inline]
  fn from(v: UInt128) -> Self {
    v.as_u128()
  }
}

impl From<(u64, u64)> for UInt128 {
  #[inline]
  fn from((hi, lo): (u64, u64)) -> Self {
    Self { hi, lo }
  }
}

impl TryFrom<&[u8]> for UInt128 {
  type Error = LengthError;

  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    let bytes: [u8; 16] = bytes.try_into().map_err(|_| LengthError::new(Self::BYTES, bytes.len()))?;
    Ok(Self::from_bytes(bytes))
  }
}

impl fmt::LowerHex for UInt128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:016x}{:016x}", self.hi, self.lo)
  }
}

impl fmt::Display for UInt128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(self, f)
  }
}
