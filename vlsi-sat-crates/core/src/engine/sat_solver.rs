use std::time::Instant;

use log::debug;

use super::assignments::NO_REASON;
use super::termination::TerminationCondition;
use super::AssignmentsPropositional;
use super::ClausalPropagator;
use super::ClauseAllocator;
use super::PropagationStatusClausal;
use super::PropositionalValueSelector;
use super::PropositionalVariableSelector;
use super::SatOptions;
use super::SolverStatistics;
use crate::basic_types::sequence_generators::SequenceGenerator;
use crate::basic_types::ClauseReference;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Literal;
use crate::basic_types::PropositionalVariable;
use crate::basic_types::Solution;
use crate::vlsi_assert_extreme;
use crate::vlsi_assert_moderate;
use crate::vlsi_assert_ne_simple;
use crate::vlsi_assert_simple;

const MAX_CLAUSE_ACTIVITY: f32 = 1e20;
const CLAUSE_ACTIVITY_DECAY_FACTOR: f32 = 0.99;

/// The outcome of [`SatSolver::solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// The clauses are satisfied by the provided assignment.
    Satisfiable(Solution),
    /// No assignment satisfies the clauses.
    Unsatisfiable,
    /// The termination condition triggered before a conclusion was reached.
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SolverState {
    Ready,
    Infeasible,
}

#[derive(Debug)]
struct ConflictAnalysisResult {
    /// The asserting literal is at index zero, the literal with the highest decision level among
    /// the others is at index one.
    learned_literals: Vec<Literal>,
    backjump_level: u32,
}

/// A conflict-driven clause-learning SAT solver.
///
/// Clauses can only be added while the solver is at the root, which is always the case between
/// calls to [`SatSolver::solve`]; this makes the solver usable incrementally.
#[derive(Debug)]
pub struct SatSolver {
    state: SolverState,
    assignments: AssignmentsPropositional,
    variable_selector: PropositionalVariableSelector,
    value_selector: PropositionalValueSelector,
    clausal_propagator: ClausalPropagator,
    clause_allocator: ClauseAllocator,
    learned_clauses: Vec<ClauseReference>,
    /// Marks the variables encountered during conflict analysis.
    seen: Vec<bool>,
    restart_sequence: Box<dyn SequenceGenerator>,
    num_conflicts_until_restart: i64,
    clause_bump_increment: f32,
    is_variable_order_initialised: bool,
    options: SatOptions,
    statistics: SolverStatistics,
}

impl Default for SatSolver {
    fn default() -> Self {
        SatSolver::new(SatOptions::default())
    }
}

impl SatSolver {
    pub fn new(options: SatOptions) -> SatSolver {
        let mut restart_sequence = options
            .restart_sequence_generator_type
            .create(options.restart_base, options.restart_geometric_coef);
        let num_conflicts_until_restart = restart_sequence.next();

        SatSolver {
            state: SolverState::Ready,
            assignments: AssignmentsPropositional::default(),
            variable_selector: PropositionalVariableSelector::default(),
            value_selector: PropositionalValueSelector::default(),
            clausal_propagator: ClausalPropagator::default(),
            clause_allocator: ClauseAllocator::default(),
            learned_clauses: vec![],
            seen: vec![],
            restart_sequence,
            num_conflicts_until_restart,
            clause_bump_increment: 1.0,
            is_variable_order_initialised: false,
            options,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn new_propositional_variable(&mut self) -> PropositionalVariable {
        let variable = PropositionalVariable::new(self.assignments.num_propositional_variables());

        self.assignments.grow();
        self.variable_selector.grow();
        self.value_selector.grow();
        self.clausal_propagator.grow();
        self.seen.push(false);

        variable
    }

    /// Creates a fresh variable and returns its positive literal.
    pub fn new_literal(&mut self) -> Literal {
        Literal::new(self.new_propositional_variable(), true)
    }

    pub fn num_propositional_variables(&self) -> u32 {
        self.assignments.num_propositional_variables()
    }

    /// The number of clauses with at least two literals currently stored, learned clauses
    /// included. Unit clauses are stored as root assignments and are not counted.
    pub fn num_clauses(&self) -> usize {
        self.clause_allocator.num_clauses()
    }

    /// Whether the solver has proven that its clauses are unsatisfiable.
    pub fn is_infeasible(&self) -> bool {
        self.state == SolverState::Infeasible
    }

    pub fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    /// Adds a clause to the formula.
    ///
    /// The clause is simplified against the root assignment first. An error is returned if the
    /// clause is falsified at the root (e.g. the empty clause), after which the solver is
    /// infeasible and rejects every further clause.
    pub fn add_clause(&mut self, literals: Vec<Literal>) -> Result<(), ConstraintOperationError> {
        if self.state == SolverState::Infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        vlsi_assert_simple!(self.assignments.is_at_the_root_level());
        vlsi_assert_simple!(
            literals.iter().all(|literal| {
                literal.get_propositional_variable().index()
                    < self.assignments.num_propositional_variables()
            }),
            "Clauses may only contain literals created by this solver."
        );

        let Some(literals) = self.preprocess_clause(literals) else {
            // satisfied at the root
            return Ok(());
        };

        match literals.len() {
            0 => {
                self.state = SolverState::Infeasible;
                Err(ConstraintOperationError::InfeasibleClause)
            }
            1 => {
                self.assignments.enqueue_decision_literal(literals[0]);
                match self.propagate() {
                    PropagationStatusClausal::NoConflictDetected => Ok(()),
                    PropagationStatusClausal::ConflictDetected { .. } => {
                        self.state = SolverState::Infeasible;
                        Err(ConstraintOperationError::InfeasibleClause)
                    }
                }
            }
            _ => {
                let _ = self.add_clause_unchecked(literals, false);
                Ok(())
            }
        }
    }

    /// Searches for an assignment satisfying all clauses, polling `termination` throughout.
    ///
    /// The solver is back at the root when this returns, so more clauses can be added
    /// afterwards.
    pub fn solve(&mut self, termination: &mut impl TerminationCondition) -> SatisfactionResult {
        let started_at = Instant::now();

        let result = self.solve_internal(termination);
        if !self.assignments.is_at_the_root_level() {
            self.backtrack(0);
        }

        self.statistics.time_spent_in_solver_ms += started_at.elapsed().as_millis() as u64;
        debug!(
            "Solver call finished after {} conflicts and {} decisions in total",
            self.statistics.num_conflicts, self.statistics.num_decisions
        );

        result
    }

    fn solve_internal(&mut self, termination: &mut impl TerminationCondition) -> SatisfactionResult {
        if self.state == SolverState::Infeasible {
            return SatisfactionResult::Unsatisfiable;
        }

        if !self.is_variable_order_initialised {
            if let Some(seed) = self.options.random_seed {
                self.variable_selector.reset(Some(seed));
            }
            self.is_variable_order_initialised = true;
        }

        loop {
            if termination.should_stop() {
                return SatisfactionResult::Unknown;
            }

            match self.propagate() {
                PropagationStatusClausal::NoConflictDetected => {
                    if self.should_restart() {
                        self.perform_restart();
                    }

                    let Some(variable) = self.variable_selector.peek_next_variable(&self.assignments)
                    else {
                        vlsi_assert_extreme!(self
                            .clausal_propagator
                            .debug_check_state(&self.assignments, &self.clause_allocator));
                        return SatisfactionResult::Satisfiable(self.extract_solution());
                    };

                    let decision_literal =
                        Literal::new(variable, self.value_selector.select_value(variable));

                    self.assignments.increase_decision_level();
                    self.assignments.enqueue_decision_literal(decision_literal);
                    self.statistics.num_decisions += 1;
                    termination.decision_has_been_made();
                }
                PropagationStatusClausal::ConflictDetected { conflict_reference } => {
                    self.statistics.num_conflicts += 1;
                    self.num_conflicts_until_restart -= 1;

                    if self.assignments.is_at_the_root_level() {
                        self.state = SolverState::Infeasible;
                        return SatisfactionResult::Unsatisfiable;
                    }

                    let analysis_result = self.analyse_conflict(conflict_reference);
                    self.process_conflict_analysis_result(analysis_result);

                    self.decay_clause_activities();
                    self.variable_selector.decay_activities();
                }
            }
        }
    }

    fn extract_solution(&self) -> Solution {
        Solution::new(
            (0..self.assignments.num_propositional_variables())
                .map(|index| {
                    self.assignments
                        .is_variable_assigned_true(PropositionalVariable::new(index))
                })
                .collect(),
        )
    }

    fn propagate(&mut self) -> PropagationStatusClausal {
        let num_assigned_before = self.assignments.num_assigned_propositional_variables();
        let status = self
            .clausal_propagator
            .propagate(&mut self.assignments, &mut self.clause_allocator);
        self.statistics.num_propagations +=
            (self.assignments.num_assigned_propositional_variables() - num_assigned_before) as u64;
        status
    }

    fn should_restart(&self) -> bool {
        self.num_conflicts_until_restart <= 0
    }

    fn perform_restart(&mut self) {
        if !self.assignments.is_at_the_root_level() {
            self.backtrack(0);
        }

        self.shrink_learned_clause_database_if_needed();

        self.num_conflicts_until_restart = self.restart_sequence.next();
        self.statistics.num_restarts += 1;
    }

    fn backtrack(&mut self, backtrack_level: u32) {
        vlsi_assert_simple!(backtrack_level < self.assignments.get_decision_level());

        let trail_target = self.assignments.trail_delimiter[backtrack_level as usize] as usize;
        for _ in trail_target..self.assignments.trail.len() {
            let Some(last_literal) = self.assignments.pop_trail() else {
                break;
            };
            let variable = last_literal.get_propositional_variable();
            self.variable_selector.restore(variable);
            self.value_selector
                .update(variable, last_literal.is_positive());
        }

        self.assignments.synchronise(backtrack_level);
        self.clausal_propagator
            .synchronise(self.assignments.trail.len());
    }

    /// Derives the first unique implication point clause of the conflict.
    fn analyse_conflict(&mut self, conflict_reference: ClauseReference) -> ConflictAnalysisResult {
        let current_decision_level = self.assignments.get_decision_level();

        // index zero is reserved for the asserting literal
        let mut learned_literals = vec![Literal::default()];
        let mut backjump_level = 0;

        let mut num_current_decision_level_literals = 0;
        let mut next_trail_index = self.assignments.trail.len() - 1;
        let mut reason_reference = conflict_reference;
        // The literal at index zero of a reason clause is the propagated literal itself.
        let mut first_reason_index = 0;

        let unique_implication_point = loop {
            self.update_clause_lbd_and_bump_activity(reason_reference);

            for index in first_reason_index..self.clause_allocator[reason_reference].len() {
                let reason_literal = self.clause_allocator[reason_reference][index];
                let variable = reason_literal.get_propositional_variable();

                if self.seen[variable] || self.assignments.is_literal_root_assignment(reason_literal)
                {
                    continue;
                }
                let Some(literal_decision_level) =
                    self.assignments.get_literal_assignment_level(reason_literal)
                else {
                    continue;
                };

                self.seen[variable] = true;
                self.variable_selector.bump_activity(variable);

                if literal_decision_level == current_decision_level {
                    num_current_decision_level_literals += 1;
                } else {
                    learned_literals.push(reason_literal);
                    if literal_decision_level > backjump_level {
                        backjump_level = literal_decision_level;
                        let last_index = learned_literals.len() - 1;
                        learned_literals.swap(1, last_index);
                    }
                }
            }

            // Only seen literals matter, and each literal is on the trail at most once.
            while !self.seen[self.assignments.trail[next_trail_index].get_propositional_variable()] {
                next_trail_index -= 1;
            }

            let next_literal = self.assignments.trail[next_trail_index];
            self.seen[next_literal.get_propositional_variable()] = false;
            num_current_decision_level_literals -= 1;

            if num_current_decision_level_literals == 0 {
                break next_literal;
            }

            next_trail_index -= 1;
            let reason_code = self
                .assignments
                .get_literal_reason_code(next_literal)
                .unwrap_or(NO_REASON);
            vlsi_assert_ne_simple!(
                reason_code,
                NO_REASON,
                "Only the decision can be without a reason, and it is always the last literal."
            );
            reason_reference = ClauseReference { id: reason_code };
            first_reason_index = 1;
        };

        learned_literals[0] = !unique_implication_point;
        for literal in &learned_literals {
            self.seen[literal.get_propositional_variable()] = false;
        }

        ConflictAnalysisResult {
            learned_literals,
            backjump_level,
        }
    }

    /// Backjumps, adds the learned clause and enqueues its asserting literal. Propagation is
    /// left to the main loop.
    fn process_conflict_analysis_result(&mut self, analysis_result: ConflictAnalysisResult) {
        let ConflictAnalysisResult {
            learned_literals,
            backjump_level,
        } = analysis_result;

        if learned_literals.len() == 1 {
            // unit clauses become root assignments
            self.backtrack(0);
            let unit_literal = learned_literals[0];
            vlsi_assert_simple!(self.assignments.is_literal_unassigned(unit_literal));

            self.assignments.enqueue_decision_literal(unit_literal);
            self.statistics.num_unit_clauses_learned += 1;
        } else {
            let lbd = self.compute_lbd_for_literals(&learned_literals);
            let num_literals = learned_literals.len() as u32;

            self.backtrack(backjump_level);

            let asserting_literal = learned_literals[0];
            let learned_clause_reference = self.add_clause_unchecked(learned_literals, true);
            if lbd < num_literals {
                self.clause_allocator[learned_clause_reference].update_lbd(lbd);
            }

            self.assignments
                .enqueue_propagated_literal(asserting_literal, learned_clause_reference.id);
        }
    }

    fn add_clause_unchecked(&mut self, literals: Vec<Literal>, is_learned: bool) -> ClauseReference {
        vlsi_assert_moderate!(
            self.clausal_propagator
                .is_propagation_complete(self.assignments.trail.len())
                || is_learned,
            "Input clauses can only be added once propagation is at a fixed point."
        );

        let clause_reference = self.clause_allocator.create_clause(literals, is_learned);
        self.clausal_propagator.start_watching_clause_unchecked(
            &self.clause_allocator[clause_reference],
            clause_reference,
        );

        if is_learned {
            self.learned_clauses.push(clause_reference);
        }

        clause_reference
    }

    /// Removes falsified and duplicate literals. Returns `None` if the clause is satisfied at the
    /// root or contains both polarities of a variable.
    fn preprocess_clause(&self, mut literals: Vec<Literal>) -> Option<Vec<Literal>> {
        if literals
            .iter()
            .any(|literal| self.assignments.is_literal_assigned_true(*literal))
        {
            return None;
        }

        literals.retain(|literal| self.assignments.is_literal_unassigned(*literal));

        // Sorting by code places both polarities of a variable next to each other.
        literals.sort_unstable();
        literals.dedup();
        if literals.windows(2).any(|pair| {
            pair[0].get_propositional_variable() == pair[1].get_propositional_variable()
        }) {
            return None;
        }

        Some(literals)
    }

    /// Keeps the `learned_clause_limit` best learned clauses, ordered by LBD and then activity.
    /// Clauses whose LBD improved since the last reduction survive one more round.
    fn shrink_learned_clause_database_if_needed(&mut self) {
        vlsi_assert_moderate!(
            self.assignments.is_at_the_root_level(),
            "Learned clauses can only be removed at the root level."
        );

        if self.learned_clauses.len() <= self.options.learned_clause_limit {
            return;
        }

        let clause_allocator = &self.clause_allocator;
        self.learned_clauses.sort_unstable_by(|reference1, reference2| {
            let clause1 = &clause_allocator[*reference1];
            let clause2 = &clause_allocator[*reference2];
            clause1
                .get_lbd()
                .cmp(&clause2.get_lbd())
                .then_with(|| clause2.get_activity().total_cmp(&clause1.get_activity()))
        });

        let mut num_clauses_to_remove = self.learned_clauses.len() - self.options.learned_clause_limit;
        let mut kept_clauses = Vec::with_capacity(self.options.learned_clause_limit);

        // the worst clauses are at the back
        while let Some(clause_reference) = self.learned_clauses.pop() {
            if num_clauses_to_remove == 0 {
                kept_clauses.push(clause_reference);
                continue;
            }

            if self.clause_allocator[clause_reference].is_protected_against_deletion() {
                self.clause_allocator[clause_reference].clear_protection_against_deletion();
                kept_clauses.push(clause_reference);
                continue;
            }

            self.clausal_propagator.remove_clause_consideration(
                &self.clause_allocator[clause_reference],
                clause_reference,
            );
            self.clause_allocator.delete_clause(clause_reference);
            self.statistics.num_learned_clauses_deleted += 1;
            num_clauses_to_remove -= 1;
        }

        kept_clauses.reverse();
        self.learned_clauses = kept_clauses;

        vlsi_assert_extreme!(self
            .clausal_propagator
            .debug_check_state(&self.assignments, &self.clause_allocator));
    }

    fn update_clause_lbd_and_bump_activity(&mut self, clause_reference: ClauseReference) {
        let clause = &self.clause_allocator[clause_reference];
        if clause.is_learned() && clause.get_lbd() > 2 {
            self.bump_clause_activity(clause_reference);

            let new_lbd =
                self.compute_lbd_for_literals(self.clause_allocator[clause_reference].get_literal_slice());
            if new_lbd < self.clause_allocator[clause_reference].get_lbd() {
                self.clause_allocator[clause_reference].update_lbd(new_lbd);
                self.clause_allocator[clause_reference].mark_protection_against_deletion();
            }
        }
    }

    /// The number of distinct decision levels among the literals.
    fn compute_lbd_for_literals(&self, literals: &[Literal]) -> u32 {
        let mut levels = literals
            .iter()
            .filter_map(|literal| self.assignments.get_literal_assignment_level(*literal))
            .collect::<Vec<_>>();
        levels.sort_unstable();
        levels.dedup();
        levels.len() as u32
    }

    fn bump_clause_activity(&mut self, clause_reference: ClauseReference) {
        if self.clause_allocator[clause_reference].get_activity() + self.clause_bump_increment
            > MAX_CLAUSE_ACTIVITY
        {
            self.rescale_clause_activities();
        }
        let increment = self.clause_bump_increment;
        self.clause_allocator[clause_reference].increase_activity(increment);
    }

    fn rescale_clause_activities(&mut self) {
        for clause_reference in &self.learned_clauses {
            self.clause_allocator[*clause_reference].divide_activity(MAX_CLAUSE_ACTIVITY);
        }
        self.clause_bump_increment /= MAX_CLAUSE_ACTIVITY;
    }

    fn decay_clause_activities(&mut self) {
        self.clause_bump_increment /= CLAUSE_ACTIVITY_DECAY_FACTOR;
    }
}
