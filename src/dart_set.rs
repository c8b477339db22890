
use ::bounds::{Bounds, ThrowBounds};
use ::dart::Dart;

use ::rand::{self, Rng};

use std::iter::FromIterator;
use std::ops::Index;
use std::slice;
use std::vec;

/// An ordered set of darts, kept in the order they were thrown.
///
/// The x, y and distance views are computed anew on every call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DartSet {
    darts: Vec<Dart>
}

impl DartSet {
    pub fn new(darts: Vec<Dart>) -> DartSet {
        DartSet { darts }
    }

    /// Throws `n` darts using the thread-local random number generator.
    ///
    /// Bounds that are `None` default to `[-1, 1]`, like in `Dart::throw`.
    pub fn throw_all(n: usize, x_bounds: Option<Bounds>, y_bounds: Option<Bounds>) -> DartSet {
        let mut rng = rand::thread_rng();
        DartSet::throw_all_with(n, &ThrowBounds::from_options(x_bounds, y_bounds), &mut rng)
    }

    /// Throws `n` darts one after another, each drawn from `rng`.
    pub fn throw_all_with<R: Rng>(n: usize, bounds: &ThrowBounds, rng: &mut R) -> DartSet {
        debug!(
            "Throwing {} darts into x in [{}, {}], y in [{}, {}]...",
            n,
            bounds.x_bounds().lo(), bounds.x_bounds().hi(),
            bounds.y_bounds().lo(), bounds.y_bounds().hi()
        );

        let darts : Vec<_> = (0..n)
            .map(|_| Dart::throw_with(bounds, rng))
            .collect();

        trace!("Ok, threw {} darts", darts.len());

        DartSet { darts }
    }

    pub fn len(&self) -> usize {
        self.darts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }

    pub fn iter(&self) -> slice::Iter<Dart> {
        self.darts.iter()
    }

    pub fn into_darts(self) -> Vec<Dart> {
        self.darts
    }

    pub fn x_values(&self) -> Vec<f64> {
        self.darts.iter().map(|d| d.x).collect()
    }

    pub fn y_values(&self) -> Vec<f64> {
        self.darts.iter().map(|d| d.y).collect()
    }

    pub fn distances_from_origin(&self) -> Vec<f64> {
        self.darts.iter()
            .map(Dart::distance_from_origin)
            .collect()
    }
}

impl From<Vec<Dart>> for DartSet {
    fn from(darts: Vec<Dart>) -> DartSet {
        DartSet::new(darts)
    }
}

impl FromIterator<Dart> for DartSet {
    fn from_iter<I: IntoIterator<Item = Dart>>(iter: I) -> DartSet {
        DartSet::new(iter.into_iter().collect())
    }
}

impl Index<usize> for DartSet {
    type Output = Dart;

    fn index(&self, idx: usize) -> &Dart {
        &self.darts[idx]
    }
}

impl IntoIterator for DartSet {
    type Item = Dart;
    type IntoIter = vec::IntoIter<Dart>;

    fn into_iter(self) -> Self::IntoIter {
        self.darts.into_iter()
    }
}

impl<'a> IntoIterator for &'a DartSet {
    type Item = &'a Dart;
    type IntoIter = slice::Iter<'a, Dart>;

    fn into_iter(self) -> Self::IntoIter {
        self.darts.iter()
    }
}
