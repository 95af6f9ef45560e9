use std::time::Duration;
use std::time::Instant;

use log::debug;
use vlsi_sat_core::results::SatisfactionResult;
use vlsi_sat_core::termination::Combinator;
use vlsi_sat_core::termination::Indefinite;
use vlsi_sat_core::termination::TerminationCondition;
use vlsi_sat_core::termination::TimeBudget;
use vlsi_sat_core::Literal;
use vlsi_sat_core::PropositionalVariable;
use vlsi_sat_core::SatOptions;
use vlsi_sat_core::SatSolver;

use super::Assignment;
use super::EngineOutcome;
use super::EngineStatistics;
use super::SatEngine;
use super::UnknownReason;

/// A [`SatEngine`] backed by the in-tree CDCL solver.
///
/// Besides the per-call timeout, the engine polls `interrupt`, which lets a caller stop the
/// search from the outside (see the `OsSignal` termination of the binary).
#[derive(Debug)]
pub struct BundledEngine<Interrupt> {
    solver: SatSolver,
    interrupt: Interrupt,
    num_clauses: u64,
    last_solve_time: Duration,
}

impl BundledEngine<Indefinite> {
    pub fn new(options: SatOptions) -> BundledEngine<Indefinite> {
        BundledEngine::with_interrupt(options, Indefinite)
    }
}

impl<Interrupt: TerminationCondition> BundledEngine<Interrupt> {
    pub fn with_interrupt(options: SatOptions, interrupt: Interrupt) -> BundledEngine<Interrupt> {
        BundledEngine {
            solver: SatSolver::new(options),
            interrupt,
            num_clauses: 0,
            last_solve_time: Duration::ZERO,
        }
    }

    /// Variables are created lazily so that the literals of the formula map onto solver
    /// variables with the same index.
    fn ensure_variable_exists(&mut self, variable: PropositionalVariable) {
        while self.solver.num_propositional_variables() <= variable.index() {
            let _ = self.solver.new_propositional_variable();
        }
    }

    fn to_assignment(&self, solution: &vlsi_sat_core::Solution) -> Assignment {
        Assignment::new(
            (0..self.solver.num_propositional_variables())
                .map(|index| solution.variable_value(PropositionalVariable::new(index)))
                .collect(),
        )
    }
}

impl<Interrupt: TerminationCondition> SatEngine for BundledEngine<Interrupt> {
    fn add_clause(&mut self, literals: &[Literal]) {
        for literal in literals {
            self.ensure_variable_exists(literal.get_propositional_variable());
        }

        self.num_clauses += 1;
        if self.solver.add_clause(literals.to_vec()).is_err() {
            // the solver remembers it is infeasible and answers accordingly
            debug!("Clause {} made the formula infeasible at the root", self.num_clauses);
        }
    }

    fn solve(&mut self, timeout: Option<Duration>) -> EngineOutcome {
        let started_at = Instant::now();
        let mut termination = Combinator::new(
            timeout.map(TimeBudget::starting_now),
            &mut self.interrupt,
        );

        let result = self.solver.solve(&mut termination);
        self.last_solve_time = started_at.elapsed();

        match result {
            SatisfactionResult::Satisfiable(solution) => {
                EngineOutcome::Sat(self.to_assignment(&solution))
            }
            SatisfactionResult::Unsatisfiable => EngineOutcome::Unsat,
            SatisfactionResult::Unknown => {
                let is_timed_out = timeout.is_some_and(|timeout| self.last_solve_time >= timeout);
                if is_timed_out {
                    EngineOutcome::Unknown(UnknownReason::Timeout)
                } else {
                    EngineOutcome::Unknown(UnknownReason::Interrupted)
                }
            }
        }
    }

    fn statistics(&self) -> EngineStatistics {
        let solver_statistics = self.solver.statistics();
        EngineStatistics {
            num_variables: self.solver.num_propositional_variables() as u64,
            num_clauses: self.num_clauses,
            num_decisions: solver_statistics.num_decisions,
            num_conflicts: solver_statistics.num_conflicts,
            num_propagations: solver_statistics.num_propagations,
            num_restarts: solver_statistics.num_restarts,
            solve_time_ms: self.last_solve_time.as_millis() as u64,
        }
    }
}
