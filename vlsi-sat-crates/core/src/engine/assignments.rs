use crate::basic_types::Literal;
use crate::basic_types::PropositionalVariable;
use crate::vlsi_assert_moderate;
use crate::vlsi_assert_ne_simple;
use crate::vlsi_assert_simple;

/// The reason code of decisions and root-level unit clauses; clause references start at one.
pub(crate) const NO_REASON: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PropositionalAssignmentInfo {
    Assigned {
        truth_value: bool,
        decision_level: u32,
        reason_code: u32,
    },
    Unassigned,
}

/// The current partial assignment together with the trail of assigned literals.
#[derive(Clone, Debug, Default)]
pub(crate) struct AssignmentsPropositional {
    assignment_info: Vec<PropositionalAssignmentInfo>,
    current_decision_level: u32,
    pub(crate) trail: Vec<Literal>,
    /// `[i]` is the position on the trail where decision level `i + 1` starts. The current
    /// decision level has no entry once it has been synchronised.
    pub(crate) trail_delimiter: Vec<u32>,
}

impl AssignmentsPropositional {
    pub(crate) fn increase_decision_level(&mut self) {
        self.current_decision_level += 1;
        self.trail_delimiter.push(self.trail.len() as u32);
    }

    pub(crate) fn get_decision_level(&self) -> u32 {
        self.current_decision_level
    }

    pub(crate) fn is_at_the_root_level(&self) -> bool {
        self.current_decision_level == 0
    }

    pub(crate) fn grow(&mut self) {
        self.assignment_info
            .push(PropositionalAssignmentInfo::Unassigned);
    }

    pub(crate) fn num_propositional_variables(&self) -> u32 {
        self.assignment_info.len() as u32
    }

    pub(crate) fn num_assigned_propositional_variables(&self) -> u32 {
        self.trail.len() as u32
    }

    pub(crate) fn is_variable_assigned_true(&self, variable: PropositionalVariable) -> bool {
        matches!(
            self.assignment_info[variable],
            PropositionalAssignmentInfo::Assigned {
                truth_value: true,
                ..
            }
        )
    }

    pub(crate) fn is_variable_assigned(&self, variable: PropositionalVariable) -> bool {
        self.assignment_info[variable] != PropositionalAssignmentInfo::Unassigned
    }

    pub(crate) fn is_literal_assigned_true(&self, literal: Literal) -> bool {
        match self.assignment_info[literal.get_propositional_variable()] {
            PropositionalAssignmentInfo::Assigned { truth_value, .. } => {
                truth_value == literal.is_positive()
            }
            PropositionalAssignmentInfo::Unassigned => false,
        }
    }

    pub(crate) fn is_literal_assigned_false(&self, literal: Literal) -> bool {
        self.is_literal_assigned_true(!literal)
    }

    pub(crate) fn is_literal_assigned(&self, literal: Literal) -> bool {
        self.is_variable_assigned(literal.get_propositional_variable())
    }

    pub(crate) fn is_literal_unassigned(&self, literal: Literal) -> bool {
        !self.is_literal_assigned(literal)
    }

    pub(crate) fn is_literal_root_assignment(&self, literal: Literal) -> bool {
        match self.assignment_info[literal.get_propositional_variable()] {
            PropositionalAssignmentInfo::Assigned { decision_level, .. } => decision_level == 0,
            PropositionalAssignmentInfo::Unassigned => false,
        }
    }

    /// The level at which the variable of `literal` was assigned, or `None` if it is unassigned.
    pub(crate) fn get_literal_assignment_level(&self, literal: Literal) -> Option<u32> {
        match self.assignment_info[literal.get_propositional_variable()] {
            PropositionalAssignmentInfo::Assigned { decision_level, .. } => Some(decision_level),
            PropositionalAssignmentInfo::Unassigned => None,
        }
    }

    pub(crate) fn get_literal_reason_code(&self, literal: Literal) -> Option<u32> {
        match self.assignment_info[literal.get_propositional_variable()] {
            PropositionalAssignmentInfo::Assigned { reason_code, .. } => Some(reason_code),
            PropositionalAssignmentInfo::Unassigned => None,
        }
    }

    pub(crate) fn enqueue_decision_literal(&mut self, decision_literal: Literal) {
        self.make_assignment(decision_literal, NO_REASON);
    }

    pub(crate) fn enqueue_propagated_literal(&mut self, propagated_literal: Literal, reason_code: u32) {
        vlsi_assert_ne_simple!(reason_code, NO_REASON);
        self.make_assignment(propagated_literal, reason_code);
    }

    fn make_assignment(&mut self, true_literal: Literal, reason_code: u32) {
        vlsi_assert_simple!(self.is_literal_unassigned(true_literal));

        self.assignment_info[true_literal.get_propositional_variable()] =
            PropositionalAssignmentInfo::Assigned {
                truth_value: true_literal.is_positive(),
                decision_level: self.current_decision_level,
                reason_code,
            };

        self.trail.push(true_literal);
    }

    /// Removes the most recent assignment from the trail and unassigns it.
    pub(crate) fn pop_trail(&mut self) -> Option<Literal> {
        let last_literal = self.trail.pop()?;
        vlsi_assert_moderate!(self.is_literal_assigned(last_literal));
        self.assignment_info[last_literal.get_propositional_variable()] =
            PropositionalAssignmentInfo::Unassigned;
        Some(last_literal)
    }

    /// Sets the decision level after the trail has been popped back to `new_decision_level`.
    pub(crate) fn synchronise(&mut self, new_decision_level: u32) {
        vlsi_assert_simple!(new_decision_level < self.current_decision_level);
        vlsi_assert_simple!(
            self.trail.len() == self.trail_delimiter[new_decision_level as usize] as usize,
            "The trail is expected to be popped before synchronising."
        );

        self.current_decision_level = new_decision_level;
        self.trail_delimiter.truncate(new_decision_level as usize);
    }
}
