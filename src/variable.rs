use std::collections::HashMap;

use log::warn;
use slotmap::{new_key_type, SlotMap};

use crate::error::ConstructionError;
use crate::membership::Triangle;
use crate::universe::Universe;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Copyable handle to a variable in a [`Variables`] registry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Variable(pub(crate) VariableKey);

/// Registry of linguistic variables. Built once, then read-only for every
/// inference call.
#[derive(Default)]
pub struct Variables(SlotMap<VariableKey, VariableData>);

pub(crate) struct VariableData {
    pub(crate) name: String,
    pub(crate) universe: Universe,
    pub(crate) terms: HashMap<String, Triangle>,
}

impl VariableData {
    pub(crate) fn fuzzify(&self, x: f64) -> HashMap<String, f64> {
        self.terms
            .iter()
            .map(|(term, shape)| (term.clone(), shape.degree(x)))
            .collect()
    }
}

impl Variables {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    /// Defines a named variable over its universe.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        universe: Universe,
    ) -> Result<Variable, ConstructionError> {
        let name = name.into();

        if self.0.values().any(|data| data.name == name) {
            return Err(ConstructionError::DuplicateVariable { name });
        }

        let key = self.0.insert(VariableData {
            name,
            universe,
            terms: HashMap::new(),
        });

        Ok(Variable(key))
    }

    /// Attaches a triangular term to a variable. Term names are unique per
    /// variable.
    pub fn add_term(
        &mut self,
        var: Variable,
        term: impl Into<String>,
        a: f64,
        b: f64,
        c: f64,
    ) -> Result<(), ConstructionError> {
        let shape = Triangle::new(a, b, c)?;
        let data = self.0.get_mut(var.0).ok_or(ConstructionError::UnknownVariable)?;
        let term = term.into();

        if data.terms.contains_key(&term) {
            return Err(ConstructionError::DuplicateTerm {
                variable: data.name.clone(),
                term,
            });
        }
        if shape.is_degenerate() {
            warn!(
                "term '{term}' on variable '{}' has a shoulder edge ({a}, {b}, {c})",
                data.name
            );
        }
        data.terms.insert(term, shape);

        Ok(())
    }

    /// Degree of every term of `var` at the crisp value `x`. Zero-degree
    /// terms are included; callers may ignore them.
    pub fn fuzzify(&self, var: Variable, x: f64) -> Result<HashMap<String, f64>, ConstructionError> {
        self.0
            .get(var.0)
            .map(|data| data.fuzzify(x))
            .ok_or(ConstructionError::UnknownVariable)
    }

    /// Looks a variable up by its name.
    pub fn by_name(&self, name: &str) -> Option<Variable> {
        self.0
            .iter()
            .find(|(_, data)| data.name == name)
            .map(|(key, _)| Variable(key))
    }

    pub fn universe(&self, var: Variable) -> Option<&Universe> {
        self.0.get(var.0).map(|data| &data.universe)
    }

    pub(crate) fn get(&self, key: VariableKey) -> Option<&VariableData> {
        self.0.get(key)
    }
}
