
use std::error::Error;
use std::fmt;

/// Raised when a pair of bounds cannot be sampled from.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// The lower bound is greater than the upper bound
    Inverted { lo: f64, hi: f64 },
    /// At least one of the bounds is NaN or infinite
    NotFinite { lo: f64, hi: f64 },
    /// The bounds for the named axis were invalid
    Axis { axis: char, source: Box<BoundsError> }
}

impl BoundsError {
    pub(crate) fn on_axis(self, axis: char) -> BoundsError {
        BoundsError::Axis { axis, source: Box::new(self) }
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BoundsError::Inverted { lo, hi } =>
                write!(f, "lower bound {} is greater than upper bound {}", lo, hi),
            BoundsError::NotFinite { lo, hi } =>
                write!(f, "bounds ({}, {}) must both be finite", lo, hi),
            BoundsError::Axis { axis, ref source } =>
                write!(f, "invalid {} bounds: {}", axis, source)
        }
    }
}

impl Error for BoundsError {
    fn source(&self) -> Option<&(Error + 'static)> {
        match *self {
            BoundsError::Axis { ref source, .. } => Some(&**source),
            _ => None
        }
    }
}
