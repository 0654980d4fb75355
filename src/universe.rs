use crate::error::ConstructionError;
use crate::linspace::Linspace;

/// Discretized x-axis a variable's membership functions are defined over,
/// and the sample grid defuzzification integrates on.
///
/// Strictly increasing, at least two points, fixed once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Universe(Vec<f64>);

impl Universe {
    /// Evenly spaced universe of `resolution` points across `[lo, hi]`.
    pub fn new(lo: f64, hi: f64, resolution: usize) -> Result<Self, ConstructionError> {
        if !(lo < hi) {
            return Err(ConstructionError::EmptyUniverseRange { lo, hi });
        }
        if resolution < 2 {
            return Err(ConstructionError::UniverseTooSmall { len: resolution });
        }

        Ok(Universe(Linspace::new(lo, hi, resolution).collect()))
    }

    /// Arbitrarily spaced universe from explicit points.
    pub fn from_points(points: Vec<f64>) -> Result<Self, ConstructionError> {
        if points.len() < 2 {
            return Err(ConstructionError::UniverseTooSmall { len: points.len() });
        }
        for (i, pair) in points.windows(2).enumerate() {
            // Also rejects NaN, which is incomparable
            if !(pair[0] < pair[1]) {
                return Err(ConstructionError::UniverseNotIncreasing {
                    index: i + 1,
                    value: pair[1],
                });
            }
        }

        Ok(Universe(points))
    }

    pub fn points(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
