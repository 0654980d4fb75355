//! Error types for configuration and inference.

use thiserror::Error;

/// Rejected while building universes, variables, terms, or rules.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConstructionError {
    #[error("triangle breakpoints ({a}, {b}, {c}) must be non-decreasing")]
    InvalidTriangle { a: f64, b: f64, c: f64 },
    #[error("universe needs at least 2 points, got {len}")]
    UniverseTooSmall { len: usize },
    #[error("universe points must be strictly increasing at index {index} ({value})")]
    UniverseNotIncreasing { index: usize, value: f64 },
    #[error("universe range [{lo}, {hi}] is empty")]
    EmptyUniverseRange { lo: f64, hi: f64 },
    #[error("variable {name} is already defined")]
    DuplicateVariable { name: String },
    #[error("variable {variable} already has a term named {term}")]
    DuplicateTerm { variable: String, term: String },
    #[error("variable {variable} has no term named {term}")]
    UnknownTerm { variable: String, term: String },
    #[error("rule has no antecedent clauses")]
    EmptyAntecedent,
    #[error("rule weight {weight} is outside (0, 1]")]
    InvalidWeight { weight: f64 },
    #[error("variable handle does not belong to this registry")]
    UnknownVariable,
}

/// Rejected while running an inference call.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InferenceError {
    #[error("no crisp input for variable {variable}")]
    MissingInput { variable: String },
    #[error("rule references a variable missing from this registry")]
    UnknownVariable,
}

/// An aggregated fuzzy set could not be collapsed to a crisp value.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DefuzzificationError {
    /// Every rule writing to this variable fired at zero, so the centroid
    /// denominator is zero. Raised instead of returning NaN.
    #[error("aggregated membership for {variable} has zero mass")]
    ZeroMass { variable: String },
    #[error("no rule produced output for variable {variable}")]
    UnknownOutput { variable: String },
}
