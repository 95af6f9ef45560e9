use crate::basic_types::PropositionalVariable;

/// Phase saving: a variable is decided on with the value it last had.
#[derive(Clone, Debug, Default)]
pub(crate) struct PropositionalValueSelector {
    truth_values: Vec<bool>,
}

impl PropositionalValueSelector {
    pub(crate) fn grow(&mut self) {
        self.truth_values.push(false);
    }

    pub(crate) fn select_value(&self, variable: PropositionalVariable) -> bool {
        self.truth_values[variable]
    }

    pub(crate) fn update(&mut self, variable: PropositionalVariable, new_truth_value: bool) {
        self.truth_values[variable] = new_truth_value;
    }
}
