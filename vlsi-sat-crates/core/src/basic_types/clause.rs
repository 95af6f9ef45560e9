use super::Literal;
use crate::vlsi_assert_advanced;
use crate::vlsi_assert_moderate;
use crate::vlsi_assert_simple;

/// Identifies a clause stored in the [`crate::engine::ClauseAllocator`]. The id zero is never
/// handed out, so it can be used as the reason code of decisions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ClauseReference {
    pub(crate) id: u32,
}

#[derive(Clone, Debug)]
pub(crate) struct Clause {
    literals: Vec<Literal>,
    is_learned: bool,
    is_deleted: bool,
    is_protected_against_deletion: bool,
    lbd: u32,
    activity: f32,
}

impl Clause {
    pub(crate) fn new(literals: Vec<Literal>, is_learned: bool) -> Clause {
        vlsi_assert_simple!(literals.len() >= 2);

        let num_literals = literals.len() as u32;
        Clause {
            literals,
            is_learned,
            is_deleted: false,
            is_protected_against_deletion: false,
            lbd: num_literals, // pessimistic lbd
            activity: 0.0,
        }
    }

    pub(crate) fn len(&self) -> u32 {
        self.literals.len() as u32
    }

    pub(crate) fn is_learned(&self) -> bool {
        self.is_learned
    }

    pub(crate) fn is_protected_against_deletion(&self) -> bool {
        self.is_protected_against_deletion
    }

    pub(crate) fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub(crate) fn get_literal_slice(&self) -> &[Literal] {
        &self.literals
    }

    pub(crate) fn get_lbd(&self) -> u32 {
        self.lbd
    }

    pub(crate) fn get_activity(&self) -> f32 {
        vlsi_assert_advanced!(!self.activity.is_nan() && !self.activity.is_infinite());
        self.activity
    }

    /// Only marks the clause, the [`crate::engine::ClauseAllocator`] owns the actual deletion.
    pub(crate) fn mark_deleted(&mut self) {
        vlsi_assert_moderate!(!self.is_deleted);
        self.is_deleted = true;
    }

    pub(crate) fn mark_protection_against_deletion(&mut self) {
        self.is_protected_against_deletion = true;
    }

    pub(crate) fn clear_protection_against_deletion(&mut self) {
        vlsi_assert_moderate!(self.is_protected_against_deletion);
        self.is_protected_against_deletion = false;
    }

    pub(crate) fn update_lbd(&mut self, new_lbd: u32) {
        vlsi_assert_moderate!(new_lbd < self.lbd);
        self.lbd = new_lbd;
    }

    pub(crate) fn increase_activity(&mut self, increment: f32) {
        self.activity += increment;
    }

    pub(crate) fn divide_activity(&mut self, division_factor: f32) {
        self.activity /= division_factor;
    }
}

impl std::ops::Index<u32> for Clause {
    type Output = Literal;
    fn index(&self, index: u32) -> &Literal {
        &self.literals[index as usize]
    }
}

impl std::ops::IndexMut<u32> for Clause {
    fn index_mut(&mut self, index: u32) -> &mut Literal {
        &mut self.literals[index as usize]
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self
            .literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "({literals})[learned:{}, deleted:{}]",
            self.is_learned, self.is_deleted
        )
    }
}
