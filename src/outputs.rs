use std::collections::HashMap;

use crate::error::DefuzzificationError;
use crate::math::centroid;
use crate::membership::FuzzySet;
use crate::universe::Universe;

/// Everything one inference call produced: per-rule firing strengths and
/// the aggregated fuzzy set per output variable.
///
/// Crisp values are computed from the aggregate on demand, so diagnostics
/// stay readable even when an output has no mass to defuzzify.
#[derive(Debug)]
pub struct InferenceResult {
    firing_strengths: Vec<f64>,
    aggregated: HashMap<String, (Universe, FuzzySet)>,
}

impl InferenceResult {
    pub(crate) fn new(
        firing_strengths: Vec<f64>,
        aggregated: HashMap<String, (Universe, FuzzySet)>,
    ) -> Self {
        Self {
            firing_strengths,
            aggregated,
        }
    }

    /// Firing strength of every rule, in rule-base order.
    pub fn firing_strengths(&self) -> &[f64] {
        &self.firing_strengths
    }

    /// Aggregated fuzzy set for an output variable, for plotting and
    /// inspection collaborators.
    pub fn aggregated_set(&self, variable: &str) -> Option<&FuzzySet> {
        self.aggregated.get(variable).map(|(_, set)| set)
    }

    /// Crisp value for an output variable via centroid defuzzification.
    pub fn output(&self, variable: &str) -> Result<f64, DefuzzificationError> {
        let (universe, set) = self
            .aggregated
            .get(variable)
            .ok_or_else(|| DefuzzificationError::UnknownOutput {
                variable: variable.to_owned(),
            })?;

        centroid(
            universe.points().iter().copied(),
            set.degrees().iter().copied(),
        )
        .ok_or_else(|| DefuzzificationError::ZeroMass {
            variable: variable.to_owned(),
        })
    }
}
