use crate::basic_types::Clause;
use crate::basic_types::ClauseReference;
use crate::basic_types::Literal;
use crate::vlsi_assert_advanced;
use crate::vlsi_assert_moderate;
use crate::vlsi_assert_ne_moderate;
use crate::vlsi_assert_ne_simple;

/// Owns every clause of the solver. Ids of deleted clauses are handed out again.
#[derive(Clone, Debug, Default)]
pub(crate) struct ClauseAllocator {
    allocated_clauses: Vec<Clause>,
    deleted_clause_ids: Vec<ClauseReference>,
}

impl ClauseAllocator {
    pub(crate) fn create_clause(
        &mut self,
        literals: Vec<Literal>,
        is_learned: bool,
    ) -> ClauseReference {
        vlsi_assert_ne_simple!(literals.len(), 0);

        if let Some(clause_reference) = self.deleted_clause_ids.pop() {
            self.allocated_clauses[clause_reference.id as usize - 1] =
                Clause::new(literals, is_learned);
            clause_reference
        } else {
            self.allocated_clauses
                .push(Clause::new(literals, is_learned));
            // id zero is the null reference, see `NO_REASON`
            ClauseReference {
                id: self.allocated_clauses.len() as u32,
            }
        }
    }

    pub(crate) fn get_mutable_clause(&mut self, clause_reference: ClauseReference) -> &mut Clause {
        vlsi_assert_ne_moderate!(clause_reference.id, 0);
        &mut self.allocated_clauses[clause_reference.id as usize - 1]
    }

    pub(crate) fn get_clause(&self, clause_reference: ClauseReference) -> &Clause {
        vlsi_assert_ne_moderate!(clause_reference.id, 0);
        &self.allocated_clauses[clause_reference.id as usize - 1]
    }

    pub(crate) fn delete_clause(&mut self, clause_reference: ClauseReference) {
        vlsi_assert_moderate!(
            !self.get_clause(clause_reference).is_deleted(),
            "Cannot delete an already deleted clause."
        );
        vlsi_assert_advanced!(!self.deleted_clause_ids.contains(&clause_reference));

        self.get_mutable_clause(clause_reference).mark_deleted();
        self.deleted_clause_ids.push(clause_reference);
    }

    pub(crate) fn num_clauses(&self) -> usize {
        self.allocated_clauses.len() - self.deleted_clause_ids.len()
    }
}

impl std::ops::Index<ClauseReference> for ClauseAllocator {
    type Output = Clause;
    fn index(&self, clause_reference: ClauseReference) -> &Clause {
        self.get_clause(clause_reference)
    }
}

impl std::ops::IndexMut<ClauseReference> for ClauseAllocator {
    fn index_mut(&mut self, clause_reference: ClauseReference) -> &mut Clause {
        self.get_mutable_clause(clause_reference)
    }
}

impl std::fmt::Display for ClauseAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Num clauses: {}", self.num_clauses())?;
        for clause in self.allocated_clauses.iter().filter(|clause| !clause.is_deleted()) {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}
