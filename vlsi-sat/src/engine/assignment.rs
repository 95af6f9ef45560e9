use vlsi_sat_core::Literal;
use vlsi_sat_core::PropositionalVariable;

/// A truth value for every variable of a formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    truth_values: Vec<bool>,
}

impl Assignment {
    pub fn new(truth_values: Vec<bool>) -> Assignment {
        Assignment { truth_values }
    }

    pub fn num_variables(&self) -> usize {
        self.truth_values.len()
    }

    /// Variables the engine never saw are unconstrained and read as false.
    pub fn variable_value(&self, variable: PropositionalVariable) -> bool {
        self.truth_values
            .get(variable.index() as usize)
            .copied()
            .unwrap_or(false)
    }

    pub fn literal_value(&self, literal: Literal) -> bool {
        self.variable_value(literal.get_propositional_variable()) == literal.is_positive()
    }
}
