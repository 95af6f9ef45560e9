use super::Literal;
use super::PropositionalVariable;

/// A complete assignment to the variables of a [`crate::SatSolver`], taken when the solver
/// reported satisfiability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    truth_values: Vec<bool>,
}

impl Solution {
    pub(crate) fn new(truth_values: Vec<bool>) -> Solution {
        Solution { truth_values }
    }

    pub fn num_propositional_variables(&self) -> usize {
        self.truth_values.len()
    }

    pub fn variable_value(&self, variable: PropositionalVariable) -> bool {
        self.truth_values[variable]
    }

    pub fn literal_value(&self, literal: Literal) -> bool {
        self.variable_value(literal.get_propositional_variable()) == literal.is_positive()
    }
}
