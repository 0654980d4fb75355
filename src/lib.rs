//! Mamdani fuzzy inference.
//!
//! Crisp inputs are fuzzified against triangular membership functions, a
//! rule base reduces the degrees to per-rule firing strengths (AND = min,
//! OR = max), each rule clips its consequent shape at its strength
//! (min-implication), clipped sets are merged per output variable
//! (max-aggregation), and the merged set collapses to a crisp number as
//! its centroid.
//!
//! Configuration ([`Universe`], [`Variables`], [`Rules`]) is built once and
//! is read-only afterwards; every [`Mamdani::infer`] call is a pure
//! function of it and the [`Inputs`].
//!
//! ```
//! use mamdani::{Connective, Inputs, Mamdani, Rules, Universe, Variables};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut vars = Variables::new();
//! let temp = vars.add("temperature", Universe::new(0., 30., 31)?)?;
//! vars.add_term(temp, "cold", 0., 0., 15.)?;
//! vars.add_term(temp, "hot", 10., 30., 30.)?;
//!
//! let fan = vars.add("fan", Universe::new(0., 10., 101)?)?;
//! vars.add_term(fan, "slow", 0., 0., 5.)?;
//! vars.add_term(fan, "fast", 5., 10., 10.)?;
//!
//! let mut rules = Rules::new();
//! rules.add(&vars, vec![temp.is("cold")], Connective::And, fan.is("slow"))?;
//! rules.add(&vars, vec![temp.is("hot")], Connective::And, fan.is("fast"))?;
//!
//! let mut inputs = Inputs::new();
//! inputs.add(temp, 28.);
//!
//! let result = Mamdani::new().infer(&vars, &rules, &inputs)?;
//! assert!(result.output("fan")? > 5.);
//! # Ok(())
//! # }
//! ```

mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
mod outputs;
mod rules;
mod universe;
mod variable;

pub use error::{ConstructionError, DefuzzificationError, InferenceError};
pub use inference::Mamdani;
pub use inputs::Inputs;
pub use membership::{FuzzySet, Triangle};
pub use outputs::InferenceResult;
pub use rules::{Clause, Connective, Rules};
pub use universe::Universe;
pub use variable::{Variable, VariableKey, Variables};
