use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;

use crate::error::InferenceError;
use crate::inputs::Inputs;
use crate::membership::FuzzySet;
use crate::outputs::InferenceResult;
use crate::rules::Rules;
use crate::universe::Universe;
use crate::variable::{VariableKey, Variables};

/// Mamdani inference engine: min-implication, max-aggregation, centroid
/// defuzzification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mamdani;

impl Mamdani {
    pub fn new() -> Self {
        Mamdani
    }

    /// Runs one inference call: fuzzify the crisp inputs, reduce each
    /// rule's antecedent degrees to a firing strength, clip its consequent
    /// shape, and merge clipped sets per output variable.
    ///
    /// The configuration is read-only; every call allocates its own
    /// working state, so repeated calls are independent.
    pub fn infer(
        &self,
        vars: &Variables,
        rules: &Rules,
        inputs: &Inputs,
    ) -> Result<InferenceResult, InferenceError> {
        // Fuzzify each referenced input variable once; every rule reads
        // its clause degrees from here.
        let mut fuzzified: HashMap<VariableKey, HashMap<String, f64>> = HashMap::new();

        for rule in &rules.0 {
            for clause in &rule.antecedents {
                let key = clause.var.0;

                if fuzzified.contains_key(&key) {
                    continue;
                }

                let data = vars.get(key).ok_or(InferenceError::UnknownVariable)?;
                let x = *inputs
                    .0
                    .get(&key)
                    .ok_or_else(|| InferenceError::MissingInput {
                        variable: data.name.clone(),
                    })?;

                fuzzified.insert(key, data.fuzzify(x));
            }
        }

        let mut firing_strengths = Vec::with_capacity(rules.0.len());
        let mut aggregated: HashMap<String, (Universe, FuzzySet)> = HashMap::new();

        for (i, rule) in rules.0.iter().enumerate() {
            // Clause lookups cannot miss: Rules::add validated every term
            // against this registry
            let degrees = rule
                .antecedents
                .iter()
                .map(|clause| fuzzified[&clause.var.0][&clause.term]);
            let strength = rule.weight * rule.connective.combine(degrees);

            debug!("rule {i} fired at {strength}");

            let data = vars
                .get(rule.consequent.var.0)
                .ok_or(InferenceError::UnknownVariable)?;
            let clipped = data.terms[&rule.consequent.term]
                .sample(&data.universe)
                .clip(strength);

            match aggregated.entry(data.name.clone()) {
                Entry::Occupied(mut entry) => entry.get_mut().1.union_in_place(&clipped),
                Entry::Vacant(entry) => {
                    entry.insert((data.universe.clone(), clipped));
                }
            }

            firing_strengths.push(strength);
        }

        Ok(InferenceResult::new(firing_strengths, aggregated))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::DefuzzificationError;
    use crate::rules::Connective::{And, Or};
    use crate::variable::Variable;

    /// The two-input smart AC controller: 3 temperature terms times
    /// 5 humidity terms, 15 rules onto one output variable.
    fn smart_ac() -> (Variables, Rules, Variable, Variable) {
        let mut vars = Variables::new();
        let temperatur = vars
            .add("temperatur", Universe::new(0., 30., 31).unwrap())
            .unwrap();
        let kelembapan = vars
            .add("kelembapan", Universe::new(0., 100., 101).unwrap())
            .unwrap();
        let smart_ac = vars
            .add("smart_ac", Universe::new(0., 30., 31).unwrap())
            .unwrap();

        vars.add_term(temperatur, "dingin", 15., 18., 21.).unwrap();
        vars.add_term(temperatur, "sedang", 19., 23., 27.).unwrap();
        vars.add_term(temperatur, "panas", 25., 28., 30.).unwrap();

        vars.add_term(kelembapan, "sangat_kering", 0., 0., 25.).unwrap();
        vars.add_term(kelembapan, "kering", 23., 27., 32.).unwrap();
        vars.add_term(kelembapan, "ideal", 30., 45., 60.).unwrap();
        vars.add_term(kelembapan, "lembab", 58., 65., 72.).unwrap();
        vars.add_term(kelembapan, "sangat_lembab", 70., 100., 100.).unwrap();

        vars.add_term(smart_ac, "rendah", 15., 15., 20.).unwrap();
        vars.add_term(smart_ac, "sedang", 19., 22.5, 26.).unwrap();
        vars.add_term(smart_ac, "tinggi", 25., 30., 30.).unwrap();

        let mut rules = Rules::with_capacity(15);
        let table = [
            ("dingin", "sangat_kering", "rendah"),
            ("dingin", "kering", "rendah"),
            ("dingin", "ideal", "rendah"),
            ("dingin", "lembab", "sedang"),
            ("dingin", "sangat_lembab", "sedang"),
            ("sedang", "sangat_kering", "sedang"),
            ("sedang", "kering", "sedang"),
            ("sedang", "ideal", "sedang"),
            ("sedang", "lembab", "tinggi"),
            ("sedang", "sangat_lembab", "tinggi"),
            ("panas", "sangat_kering", "tinggi"),
            ("panas", "kering", "tinggi"),
            ("panas", "ideal", "tinggi"),
            ("panas", "lembab", "tinggi"),
            ("panas", "sangat_lembab", "tinggi"),
        ];

        for (t, k, ac) in table {
            rules
                .add(
                    &vars,
                    vec![temperatur.is(t), kelembapan.is(k)],
                    And,
                    smart_ac.is(ac),
                )
                .unwrap();
        }

        (vars, rules, temperatur, kelembapan)
    }

    #[test]
    fn test_smart_ac() {
        let (vars, rules, temperatur, kelembapan) = smart_ac();
        let mut inputs = Inputs::new();

        inputs.add(temperatur, 27.);
        inputs.add(kelembapan, 80.);

        let result = Mamdani::new().infer(&vars, &rules, &inputs).unwrap();
        let strengths = result.firing_strengths();

        assert_eq!(strengths.len(), 15);
        // Only "panas and sangat_lembab" fires: min(2/3, 1/3)
        assert_abs_diff_eq!(strengths[14], 1. / 3., epsilon = 1e-12);
        for (i, strength) in strengths.iter().enumerate().take(14) {
            assert_eq!(*strength, 0., "rule {i}");
        }

        // "tinggi" (25, 30, 30) clipped at 1/3 over the integer grid:
        // centroid = (26 * 0.2 + (27 + 28 + 29 + 30) / 3) / (0.2 + 4 / 3)
        let out = result.output("smart_ac").unwrap();

        assert_abs_diff_eq!(out, 648. / 23., epsilon = 1e-9);
        assert_eq!(result.aggregated_set("smart_ac").unwrap().degrees().len(), 31);
    }

    /// The single-variable temperature pipeline: three identity rules so
    /// the input's term degrees clip the same shapes on the output side.
    #[test]
    fn test_single_variable_correction() {
        let mut vars = Variables::new();
        let temp = vars
            .add("temperatur", Universe::new(15., 40., 500).unwrap())
            .unwrap();
        let correction = vars
            .add("koreksi", Universe::new(15., 40., 500).unwrap())
            .unwrap();

        for var in [temp, correction] {
            vars.add_term(var, "low", 15., 17.5, 20.).unwrap();
            vars.add_term(var, "medium", 18., 21.5, 25.).unwrap();
            vars.add_term(var, "high", 23., 26.5, 30.).unwrap();
        }

        let mut rules = Rules::new();

        for term in ["low", "medium", "high"] {
            rules
                .add(&vars, vec![temp.is(term)], And, correction.is(term))
                .unwrap();
        }

        let mut inputs = Inputs::new();

        inputs.add(temp, 27.);

        let result = Mamdani::new().infer(&vars, &rules, &inputs).unwrap();

        assert_eq!(result.firing_strengths()[0], 0.);
        assert_eq!(result.firing_strengths()[1], 0.);
        assert_abs_diff_eq!(result.firing_strengths()[2], 3. / 3.5, epsilon = 1e-12);

        // Only the symmetric "high" triangle contributes, so the centroid
        // lands on its peak up to discretization error
        let out = result.output("koreksi").unwrap();

        assert_abs_diff_eq!(out, 26.5, epsilon = 0.1);
    }

    #[test]
    fn test_or_disjunction_and_weight() {
        let (vars, _rules, temperatur, kelembapan) = smart_ac();
        let smart_ac = vars.by_name("smart_ac").unwrap();
        let mut rules = Rules::new();

        rules
            .add(
                &vars,
                vec![temperatur.is("panas"), kelembapan.is("sangat_lembab")],
                Or,
                smart_ac.is("tinggi"),
            )
            .unwrap();
        rules
            .add_weighted(
                &vars,
                vec![temperatur.is("panas"), kelembapan.is("sangat_lembab")],
                And,
                smart_ac.is("tinggi"),
                0.5,
            )
            .unwrap();

        let mut inputs = Inputs::new();

        inputs.add(temperatur, 27.);
        inputs.add(kelembapan, 80.);

        let result = Mamdani::new().infer(&vars, &rules, &inputs).unwrap();

        // Disjunction takes the larger degree: max(2/3, 1/3)
        assert_abs_diff_eq!(result.firing_strengths()[0], 2. / 3., epsilon = 1e-12);
        // Weight scales the conjunction: 0.5 * min(2/3, 1/3)
        assert_abs_diff_eq!(result.firing_strengths()[1], 0.5 / 3., epsilon = 1e-12);
    }

    #[test]
    fn test_zero_mass_output_is_an_error() {
        let (vars, rules, temperatur, kelembapan) = smart_ac();
        let mut inputs = Inputs::new();

        // 5 degrees is below every temperature term, so no rule fires
        inputs.add(temperatur, 5.);
        inputs.add(kelembapan, 45.);

        let result = Mamdani::new().infer(&vars, &rules, &inputs).unwrap();

        assert!(result.firing_strengths().iter().all(|s| *s == 0.));
        assert_eq!(
            result.output("smart_ac"),
            Err(DefuzzificationError::ZeroMass {
                variable: "smart_ac".into(),
            })
        );
        // The aggregated set still exists for inspection
        assert!(result
            .aggregated_set("smart_ac")
            .unwrap()
            .degrees()
            .iter()
            .all(|mu| *mu == 0.));
    }

    #[test]
    fn test_missing_input() {
        let (vars, rules, temperatur, _kelembapan) = smart_ac();
        let mut inputs = Inputs::new();

        inputs.add(temperatur, 27.);

        let result = Mamdani::new().infer(&vars, &rules, &inputs);

        assert_eq!(
            result.err(),
            Some(InferenceError::MissingInput {
                variable: "kelembapan".into(),
            })
        );
    }

    #[test]
    fn test_unknown_output_variable() {
        let (vars, rules, temperatur, kelembapan) = smart_ac();
        let mut inputs = Inputs::new();

        inputs.add(temperatur, 27.);
        inputs.add(kelembapan, 80.);

        let result = Mamdani::new().infer(&vars, &rules, &inputs).unwrap();

        assert_eq!(
            result.output("kipas"),
            Err(DefuzzificationError::UnknownOutput {
                variable: "kipas".into(),
            })
        );
        assert!(result.aggregated_set("kipas").is_none());
    }
}
