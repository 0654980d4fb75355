use crate::error::ConstructionError;
use crate::math::{zip_max, zip_min};
use crate::universe::Universe;

/// Triangular membership function with breakpoints `a <= b <= c`: degree
/// rises linearly from 0 at `a` to 1 at `b`, then falls to 0 at `c`.
///
/// Shoulders are legal: `a == b` pins the left edge at full membership and
/// `b == c` the right. Both skip the divided edge entirely rather than
/// dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ConstructionError> {
        if !(a <= b && b <= c) {
            return Err(ConstructionError::InvalidTriangle { a, b, c });
        }

        Ok(Triangle { a, b, c })
    }

    /// Membership degree of `x`, always in `[0, 1]`.
    ///
    /// `max(min(rising, falling), 0)`: the minimum keeps membership from
    /// exceeding 1 inside the support, the maximum clamps the overshoot
    /// outside it to 0.
    pub fn degree(&self, x: f64) -> f64 {
        // a == b == c collapses to a singleton at b
        if self.a == self.c {
            return if x == self.b { 1. } else { 0. };
        }

        let rising = if self.a == self.b {
            1.
        } else {
            (x - self.a) / (self.b - self.a)
        };
        let falling = if self.b == self.c {
            1.
        } else {
            (self.c - x) / (self.c - self.b)
        };

        rising.min(falling).max(0.)
    }

    /// Evaluates the full shape over a universe.
    pub fn sample(&self, universe: &Universe) -> FuzzySet {
        FuzzySet(universe.points().iter().map(|&x| self.degree(x)).collect())
    }

    /// Whether either edge is a shoulder (`a == b` or `b == c`).
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b || self.b == self.c
    }
}

/// Membership degrees aligned index-for-index with a [`Universe`].
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet(Vec<f64>);

impl FuzzySet {
    pub fn degrees(&self) -> &[f64] {
        &self.0
    }

    /// Mamdani min-implication: the shape truncated at a firing strength.
    pub fn clip(&self, strength: f64) -> FuzzySet {
        FuzzySet(zip_min(self.0.iter().copied(), std::iter::repeat(strength)).collect())
    }

    /// Mamdani max-aggregation with another set over the same universe.
    pub fn union(&self, other: &FuzzySet) -> FuzzySet {
        FuzzySet(zip_max(self.0.iter().copied(), other.0.iter().copied()).collect())
    }

    pub(crate) fn union_in_place(&mut self, other: &FuzzySet) {
        for (mu, other) in self.0.iter_mut().zip(other.0.iter()) {
            *mu = mu.max(*other);
        }
    }
}
