
use ::bounds::{Bounds, ThrowBounds};

use ::rand::{self, Rng};

/// A single dart that landed at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dart {
    pub x: f64,
    pub y: f64
}

impl Dart {
    pub fn new(x: f64, y: f64) -> Dart {
        Dart { x, y }
    }

    /// Euclidean distance between the dart and `(0, 0)`.
    ///
    /// NaN and infinite coordinates propagate into the result.
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Throws a dart using the thread-local random number generator.
    ///
    /// Bounds that are `None` default to `[-1, 1]`.
    pub fn throw(x_bounds: Option<Bounds>, y_bounds: Option<Bounds>) -> Dart {
        let mut rng = rand::thread_rng();
        Dart::throw_with(&ThrowBounds::from_options(x_bounds, y_bounds), &mut rng)
    }

    /// Throws a dart with x and y drawn independently and uniformly from the
    /// given bounds, x first.
    pub fn throw_with<R: Rng>(bounds: &ThrowBounds, rng: &mut R) -> Dart {
        let x = bounds.x_bounds().sample(rng);
        let y = bounds.y_bounds().sample(rng);

        Dart { x, y }
    }
}

impl From<(f64, f64)> for Dart {
    fn from((x, y): (f64, f64)) -> Dart {
        Dart { x, y }
    }
}
