use std::collections::HashMap;

use crate::variable::{Variable, VariableKey};

/// Crisp input values, one per variable the rule base reads.
#[derive(Default)]
pub struct Inputs(pub(crate) HashMap<VariableKey, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    pub fn add(&mut self, var: Variable, value: f64) {
        self.0.insert(var.0, value);
    }
}
