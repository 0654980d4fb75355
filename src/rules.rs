use crate::error::ConstructionError;
use crate::variable::{Variable, Variables};

/// One proposition: `variable is term`.
#[derive(Clone, Debug)]
pub struct Clause {
    pub(crate) var: Variable,
    pub(crate) term: String,
}

impl Variable {
    /// Clause sugar: `temp.is("high")`.
    pub fn is(self, term: impl Into<String>) -> Clause {
        Clause {
            var: self,
            term: term.into(),
        }
    }
}

/// How a rule's antecedent degrees reduce to one firing strength. One
/// connective per rule; mixed chains are not representable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connective {
    /// Conjunction via minimum
    And,
    /// Disjunction via maximum
    Or,
}

impl Connective {
    pub(crate) fn combine(self, degrees: impl IntoIterator<Item = f64>) -> f64 {
        let reduce = match self {
            Self::And => f64::min,
            Self::Or => f64::max,
        };

        // A single clause passes through untouched; empty antecedents are
        // rejected at rule construction
        degrees.into_iter().reduce(reduce).unwrap_or(0.)
    }
}

pub(crate) struct Rule {
    pub(crate) antecedents: Vec<Clause>,
    pub(crate) connective: Connective,
    pub(crate) consequent: Clause,
    pub(crate) weight: f64,
}

/// Ordered rule base. Order is kept for diagnostics; it never changes the
/// aggregated result, since max-aggregation is commutative.
#[derive(Default)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds a rule with the default weight of 1.
    ///
    /// Clauses are validated against `vars` up front; an unknown term is a
    /// [`ConstructionError`] here, not a failure mid-inference.
    pub fn add(
        &mut self,
        vars: &Variables,
        antecedents: Vec<Clause>,
        connective: Connective,
        consequent: Clause,
    ) -> Result<(), ConstructionError> {
        self.add_weighted(vars, antecedents, connective, consequent, 1.)
    }

    /// Adds a rule whose firing strength is scaled by `weight` in `(0, 1]`.
    pub fn add_weighted(
        &mut self,
        vars: &Variables,
        antecedents: Vec<Clause>,
        connective: Connective,
        consequent: Clause,
        weight: f64,
    ) -> Result<(), ConstructionError> {
        if antecedents.is_empty() {
            return Err(ConstructionError::EmptyAntecedent);
        }
        if !(weight > 0. && weight <= 1.) {
            return Err(ConstructionError::InvalidWeight { weight });
        }
        for clause in antecedents.iter().chain(Some(&consequent)) {
            check_clause(vars, clause)?;
        }

        self.0.push(Rule {
            antecedents,
            connective,
            consequent,
            weight,
        });

        Ok(())
    }
}

fn check_clause(vars: &Variables, clause: &Clause) -> Result<(), ConstructionError> {
    let data = vars.get(clause.var.0).ok_or(ConstructionError::UnknownVariable)?;

    if !data.terms.contains_key(&clause.term) {
        return Err(ConstructionError::UnknownTerm {
            variable: data.name.clone(),
            term: clause.term.clone(),
        });
    }

    Ok(())
}
