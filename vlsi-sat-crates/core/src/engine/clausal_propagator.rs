use fnv::FnvHashMap;

use super::AssignmentsPropositional;
use super::ClauseAllocator;
use crate::basic_types::Clause;
use crate::basic_types::ClauseReference;
use crate::basic_types::Literal;
use crate::vlsi_assert_simple;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PropagationStatusClausal {
    NoConflictDetected,
    ConflictDetected { conflict_reference: ClauseReference },
}

#[derive(Clone, Copy, Debug)]
struct ClauseWatcher {
    /// Some other literal of the clause; if it is true the clause need not be inspected.
    cached_literal: Literal,
    clause_reference: ClauseReference,
}

/// Unit propagation over two watched literals per clause.
///
/// A clause is watched by its literals at positions zero and one; the watch list of a literal
/// holds the clauses that need inspection when the literal becomes false.
#[derive(Clone, Debug, Default)]
pub(crate) struct ClausalPropagator {
    watch_lists: Vec<Vec<ClauseWatcher>>,
    next_position_on_trail_to_propagate: usize,
}

impl ClausalPropagator {
    pub(crate) fn grow(&mut self) {
        // one watch list per polarity
        self.watch_lists.push(vec![]);
        self.watch_lists.push(vec![]);
    }

    pub(crate) fn start_watching_clause_unchecked(
        &mut self,
        clause: &Clause,
        clause_reference: ClauseReference,
    ) {
        vlsi_assert_simple!(clause.len() >= 2);

        self.watch_lists[clause[0]].push(ClauseWatcher {
            cached_literal: clause[1],
            clause_reference,
        });

        self.watch_lists[clause[1]].push(ClauseWatcher {
            cached_literal: clause[0],
            clause_reference,
        });
    }

    // hot loop
    pub(crate) fn propagate(
        &mut self,
        assignments: &mut AssignmentsPropositional,
        clause_allocator: &mut ClauseAllocator,
    ) -> PropagationStatusClausal {
        while self.next_position_on_trail_to_propagate < assignments.trail.len() {
            let true_literal = assignments.trail[self.next_position_on_trail_to_propagate];
            let false_literal = !true_literal;

            if self.watch_lists[false_literal].is_empty() {
                self.next_position_on_trail_to_propagate += 1;
                continue;
            }

            // The watch list is compacted in place: watchers that stay are copied to `end_index`,
            // watchers that move to another literal are skipped.
            let mut end_index: usize = 0;
            let mut current_index: usize = 0;
            while current_index < self.watch_lists[false_literal].len() {
                let cached_literal = self.watch_lists[false_literal][current_index].cached_literal;
                if assignments.is_literal_assigned_true(cached_literal) {
                    self.watch_lists[false_literal][end_index] =
                        self.watch_lists[false_literal][current_index];
                    current_index += 1;
                    end_index += 1;
                    continue;
                }

                let watched_clause_reference =
                    self.watch_lists[false_literal][current_index].clause_reference;
                let watched_clause = clause_allocator.get_mutable_clause(watched_clause_reference);

                // keep the falsified watcher at position one
                if watched_clause[0] == false_literal {
                    watched_clause[0] = watched_clause[1];
                    watched_clause[1] = false_literal;
                }

                if assignments.is_literal_assigned_true(watched_clause[0]) {
                    self.watch_lists[false_literal][current_index].cached_literal =
                        watched_clause[0];
                    self.watch_lists[false_literal][end_index] =
                        self.watch_lists[false_literal][current_index];
                    current_index += 1;
                    end_index += 1;
                    continue;
                }

                let mut found_new_watch = false;
                for i in 2..watched_clause.len() {
                    if !assignments.is_literal_assigned_false(watched_clause[i]) {
                        watched_clause[1] = watched_clause[i];
                        watched_clause[i] = false_literal;

                        self.watch_lists[watched_clause[1]].push(ClauseWatcher {
                            cached_literal: watched_clause[0],
                            clause_reference: watched_clause_reference,
                        });

                        found_new_watch = true;
                        break;
                    }
                }

                if found_new_watch {
                    current_index += 1;
                    continue;
                }

                self.watch_lists[false_literal][end_index] =
                    self.watch_lists[false_literal][current_index];
                end_index += 1;
                current_index += 1;

                // every literal but the one at position zero is false
                if assignments.is_literal_unassigned(watched_clause[0]) {
                    assignments
                        .enqueue_propagated_literal(watched_clause[0], watched_clause_reference.id);
                } else {
                    while current_index < self.watch_lists[false_literal].len() {
                        self.watch_lists[false_literal][end_index] =
                            self.watch_lists[false_literal][current_index];
                        current_index += 1;
                        end_index += 1;
                    }
                    self.watch_lists[false_literal].truncate(end_index);
                    return PropagationStatusClausal::ConflictDetected {
                        conflict_reference: watched_clause_reference,
                    };
                }
            }
            self.watch_lists[false_literal].truncate(end_index);
            self.next_position_on_trail_to_propagate += 1;
        }
        PropagationStatusClausal::NoConflictDetected
    }

    pub(crate) fn synchronise(&mut self, trail_size: usize) {
        vlsi_assert_simple!(self.next_position_on_trail_to_propagate >= trail_size);
        self.next_position_on_trail_to_propagate = trail_size;
    }

    pub(crate) fn is_propagation_complete(&self, trail_size: usize) -> bool {
        self.next_position_on_trail_to_propagate == trail_size
    }

    pub(crate) fn remove_clause_consideration(
        &mut self,
        clause: &Clause,
        clause_reference: ClauseReference,
    ) {
        for watched_literal in [clause[0], clause[1]] {
            let watchers = &mut self.watch_lists[watched_literal];
            if let Some(index) = watchers
                .iter()
                .position(|watcher| watcher.clause_reference == clause_reference)
            {
                let _ = watchers.swap_remove(index);
            }
        }
    }

    /// Checks that every watched clause is watched exactly twice by its first two literals and
    /// that no clause is falsified or unit without having propagated.
    pub(crate) fn debug_check_state(
        &self,
        assignments: &AssignmentsPropositional,
        clause_allocator: &ClauseAllocator,
    ) -> bool {
        let mut watch_counts: FnvHashMap<ClauseReference, usize> = FnvHashMap::default();
        for watcher in self.watch_lists.iter().flatten() {
            *watch_counts.entry(watcher.clause_reference).or_insert(0) += 1;
        }

        for (literal_code, watchers) in self.watch_lists.iter().enumerate() {
            let literal = Literal::u32_to_literal(literal_code as u32);
            for watcher in watchers {
                let clause = clause_allocator.get_clause(watcher.clause_reference);
                assert!(
                    clause[0] == literal || clause[1] == literal,
                    "A clause is in the watch list of a literal which does not watch it."
                );
            }
        }

        for (clause_reference, count) in watch_counts {
            assert_eq!(count, 2, "A clause is not watched exactly twice.");

            let clause = clause_allocator.get_clause(clause_reference);
            let num_falsified_literals = clause
                .get_literal_slice()
                .iter()
                .filter(|literal| assignments.is_literal_assigned_false(**literal))
                .count();
            assert!(
                num_falsified_literals < clause.len() as usize,
                "The clausal propagator missed a falsified clause."
            );
            if num_falsified_literals + 1 == clause.len() as usize {
                assert!(
                    clause
                        .get_literal_slice()
                        .iter()
                        .any(|literal| assignments.is_literal_assigned_true(*literal)),
                    "The clausal propagator missed a propagation."
                );
            }
        }
        true
    }
}
