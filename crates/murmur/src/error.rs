//! Error types.
//!
//! Hashing itself never fails. The only fallible operation is rebuilding a
//! digest value from raw bytes.

use core::fmt;

/// A byte slice had the wrong length for the value being decoded.
///
/// # Examples
///
/// ```
/// use murmur::{LengthError, UInt128};
///
/// let err = UInt128::try_from(&[0u8; 15][..]).unwrap_err();
/// assert_eq!(err, LengthError::new(16, 15));
/// assert_eq!(err.to_string(), "expected 16 bytes, got 15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthError {
  expected: usize,
  actual: usize,
}

impl LengthError {
  /// Create a new length error.
  #[inline]
  #[must_use]
  pub const fn new(expected: usize, actual: usize) -> Self {
    Self { expected, actual }
  }

  /// The required length in bytes.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> usize {
    self.expected
  }

  /// The length that was supplied.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> usize {
    self.actual
  }
}

impl fmt::Display for LengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "expected {} bytes, got {}", self.expected, self.actual)
  }
}

impl core::error::Error for LengthError {}
