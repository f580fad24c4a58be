// MIT/Apache2 License

use crate::error::{ErrorKind, Result};
use num_traits::clamp;
use ordered_float::NotNan;
use std::fmt;

/// A popular concept in chartpaint is a range that goes from zero to one, defining the alpha of a color or the
/// stop of a color in a gradient. This type is essentially a wrapper around an `f64`, but with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f64>,
}

impl Intensity {
    pub const ZERO: Intensity = unsafe { Intensity::new_unchecked(0.0) };
    pub const ONE: Intensity = unsafe { Intensity::new_unchecked(1.0) };

    /// Create a new `Intensity`, without checking the inner value.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if `inner` is not a number, or outside of the range [0, 1].
    #[inline]
    pub const unsafe fn new_unchecked(inner: f64) -> Self {
        Self {
            inner: NotNan::new_unchecked(inner),
        }
    }

    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f64) -> Option<Self> {
        if inner.is_nan() || inner < 0.0 || inner > 1.0 {
            None
        } else {
            // adding positive zero turns -0.0 into 0.0
            Some(Self {
                inner: unsafe { NotNan::new_unchecked(inner + 0.0) },
            })
        }
    }

    /// Create an `Intensity` used as an alpha value.
    #[inline]
    pub fn alpha(inner: f64) -> Result<Self> {
        Self::new(inner).ok_or_else(|| ErrorKind::AlphaOutOfBounds(inner).into())
    }

    /// Create an `Intensity` used as a gradient offset.
    #[inline]
    pub fn offset(inner: f64) -> Result<Self> {
        Self::new(inner).ok_or_else(|| ErrorKind::OffsetOutOfBounds(inner).into())
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f64 {
        self.inner.into_inner()
    }

    /// Scale to a `u8`, rounding to the nearest step.
    #[inline]
    pub fn round_u8(self) -> u8 {
        clamp((self.into_inner() * 255.0).round(), 0.0, 255.0) as u8
    }
}

impl From<Intensity> for f64 {
    #[inline]
    fn from(i: Intensity) -> f64 {
        i.into_inner()
    }
}

impl fmt::Display for Intensity {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.into_inner(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Intensity::new(0.0).is_some());
        assert!(Intensity::new(1.0).is_some());
        assert!(Intensity::new(-0.01).is_none());
        assert!(Intensity::new(1.01).is_none());
        assert!(Intensity::new(f64::NAN).is_none());

        let err = Intensity::alpha(2.0).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::AlphaOutOfBounds(2.0));
        let err = Intensity::offset(-1.0).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::OffsetOutOfBounds(-1.0));
    }

    #[test]
    fn test_negative_zero() {
        let zero = Intensity::new(-0.0).unwrap();
        assert_eq!(zero, Intensity::ZERO);
        assert!(zero.into_inner().is_sign_positive());
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn test_round_u8() {
        assert_eq!(Intensity::ONE.round_u8(), 255);
        assert_eq!(Intensity::ZERO.round_u8(), 0);
        assert_eq!(Intensity::new(0.5).unwrap().round_u8(), 128);
    }
}
