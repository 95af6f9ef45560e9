use super::AssignmentsPropositional;
use crate::basic_types::KeyValueHeap;
use crate::basic_types::PropositionalVariable;

/// VSIDS: variables are bumped when they take part in conflict analysis and the variable with
/// the highest activity is decided on next.
#[derive(Clone, Debug)]
pub(crate) struct PropositionalVariableSelector {
    heap: KeyValueHeap,
    increment: f64,
    max_threshold: f64,
    decay_factor: f64,
}

impl Default for PropositionalVariableSelector {
    fn default() -> Self {
        PropositionalVariableSelector {
            heap: KeyValueHeap::default(),
            increment: 1.0,
            max_threshold: 1e100,
            decay_factor: 0.95,
        }
    }
}

impl PropositionalVariableSelector {
    pub(crate) fn reset(&mut self, random_seed: Option<u64>) {
        self.heap.reset(random_seed);
        self.increment = 1.0;
    }

    pub(crate) fn bump_activity(&mut self, variable: PropositionalVariable) {
        let activity = self.heap.get_value(variable.index());
        if activity + self.increment >= self.max_threshold {
            self.heap.divide_values(self.max_threshold);
            self.increment /= self.max_threshold;
        }
        self.heap.increment(variable.index(), self.increment);
    }

    pub(crate) fn restore(&mut self, variable: PropositionalVariable) {
        self.heap.restore_key(variable.index());
    }

    /// Decaying is implemented by growing the increment, which makes future bumps weigh more.
    pub(crate) fn decay_activities(&mut self) {
        self.increment *= 1.0 / self.decay_factor;
    }

    pub(crate) fn grow(&mut self) {
        self.heap.grow(0.0);
    }

    pub(crate) fn peek_next_variable(
        &mut self,
        assignments: &AssignmentsPropositional,
    ) -> Option<PropositionalVariable> {
        // assigned variables are removed lazily
        while let Some(candidate_variable) = self.heap.peek_max().map(PropositionalVariable::new)
        {
            if assignments.is_variable_assigned(candidate_variable) {
                let _ = self.heap.pop_max();
            } else {
                return Some(candidate_variable);
            }
        }
        None
    }
}
