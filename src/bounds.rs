
use ::error::BoundsError;

use ::rand::Rng;

/// A closed interval `[lo, hi]` that darts are thrown into along one axis.
///
/// Bounds are checked when created, so any `Bounds` value can be sampled from.
/// Degenerate bounds with `lo == hi` are allowed and always yield `lo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lo: f64,
    hi: f64
}

impl Bounds {
    /// Creates bounds spanning from `lo` to `hi`, inclusive.
    ///
    /// Fails if `lo` is greater than `hi` or if either of them is NaN or infinite.
    pub fn new(lo: f64, hi: f64) -> Result<Bounds, BoundsError> {
        if !lo.is_finite() || !hi.is_finite() {
            warn!("Rejecting non-finite bounds ({}, {})", lo, hi);
            return Err(BoundsError::NotFinite { lo, hi });
        }

        if lo > hi {
            warn!("Rejecting inverted bounds ({}, {})", lo, hi);
            return Err(BoundsError::Inverted { lo, hi });
        }

        Ok(Bounds { lo, hi })
    }

    /// The interval `[-1, 1]`.
    pub fn unit() -> Bounds {
        Bounds { lo: -1.0, hi: 1.0 }
    }

    /// Lower end of the interval
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper end of the interval
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Checks whether `value` lies in the interval, with both ends included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// Draws a value uniformly distributed between the bounds.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let u = rng.next_f64();
        // Interpolating without hi - lo keeps bounds near f64::MAX from overflowing
        let value = self.lo * (1.0 - u) + self.hi * u;
        // Rounding can leave the interval by an ulp
        if value > self.hi {
            self.hi
        } else if value < self.lo {
            self.lo
        } else {
            value
        }
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds::unit()
    }
}

/// Bounds for both axes of a throw.
///
/// Defaults to `[-1, 1]` on both axes.
///
/// # Examples
///
/// ```
/// use darts::{Bounds, ThrowBounds};
///
/// let bounds = ThrowBounds::new()
///     .x(Bounds::new(0.0, 2.0).unwrap())
///     .y(Bounds::new(-0.5, 0.5).unwrap());
///
/// assert_eq!(bounds.x_bounds().hi(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThrowBounds {
    x: Bounds,
    y: Bounds
}

impl ThrowBounds {
    pub fn new() -> ThrowBounds {
        ThrowBounds::default()
    }

    /// Resolves optional bounds, using `[-1, 1]` for absent ones.
    pub fn from_options(x: Option<Bounds>, y: Option<Bounds>) -> ThrowBounds {
        ThrowBounds {
            x: x.unwrap_or_default(),
            y: y.unwrap_or_default()
        }
    }

    /// Checks and resolves optional raw `(lo, hi)` pairs, using `[-1, 1]` for absent ones.
    ///
    /// The error names the axis that had invalid bounds.
    pub fn from_pairs(x: Option<(f64, f64)>, y: Option<(f64, f64)>) -> Result<ThrowBounds, BoundsError> {
        let x = match x {
            Some((lo, hi)) => Some(Bounds::new(lo, hi).map_err(|e| e.on_axis('x'))?),
            None => None
        };
        let y = match y {
            Some((lo, hi)) => Some(Bounds::new(lo, hi).map_err(|e| e.on_axis('y'))?),
            None => None
        };

        Ok(ThrowBounds::from_options(x, y))
    }

    pub fn x(mut self, x: Bounds) -> ThrowBounds {
        self.x = x;
        self
    }

    pub fn y(mut self, y: Bounds) -> ThrowBounds {
        self.y = y;
        self
    }

    pub fn x_bounds(&self) -> Bounds {
        self.x
    }

    pub fn y_bounds(&self) -> Bounds {
        self.y
    }
}
