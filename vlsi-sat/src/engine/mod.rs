//! The boundary between the packing encoder and whatever decides satisfiability.
//!
//! The encoder only produces clauses over [`Literal`]s; a [`SatEngine`] accepts them and reports
//! whether they can be satisfied within a time limit. [`BundledEngine`] is the implementation
//! backed by [`vlsi_sat_core::SatSolver`].
mod assignment;
mod bundled_engine;

use std::fmt::Display;
use std::time::Duration;

pub use assignment::Assignment;
pub use bundled_engine::BundledEngine;
use vlsi_sat_core::create_statistics_struct;
use vlsi_sat_core::Literal;

/// A satisfiability engine for one formula.
///
/// The literals passed to an engine are opaque: the engine must accept any literal over
/// variables `0..n` and report an [`Assignment`] covering all of them.
pub trait SatEngine {
    /// Adds a clause. A clause that makes the formula infeasible is not an error; the next call
    /// to [`SatEngine::solve`] reports [`EngineOutcome::Unsat`].
    fn add_clause(&mut self, literals: &[Literal]);

    /// Decides the formula, giving up once `timeout` has passed (or never if it is `None`).
    fn solve(&mut self, timeout: Option<Duration>) -> EngineOutcome;

    fn statistics(&self) -> EngineStatistics;
}

/// The answer of a [`SatEngine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineOutcome {
    Sat(Assignment),
    Unsat,
    Unknown(UnknownReason),
}

/// Why no answer could be given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownReason {
    /// The time budget ran out.
    Timeout,
    /// The search was interrupted from the outside, e.g. by a signal.
    Interrupted,
    /// The engine claimed satisfiability but its assignment does not decode to a packing.
    InvalidModel,
}

impl Display for UnknownReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnknownReason::Timeout => write!(f, "timeout"),
            UnknownReason::Interrupted => write!(f, "interrupted"),
            UnknownReason::InvalidModel => write!(f, "invalid model"),
        }
    }
}

create_statistics_struct!(
    /// What an engine reports about the formula it was given and its work on it.
    EngineStatistics {
        num_variables: u64,
        num_clauses: u64,
        num_decisions: u64,
        num_conflicts: u64,
        num_propagations: u64,
        num_restarts: u64,
        solve_time_ms: u64,
    }
);

impl EngineStatistics {
    /// Adds the counters of `other` to these ones.
    pub fn accumulate(&mut self, other: &EngineStatistics) {
        self.num_variables += other.num_variables;
        self.num_clauses += other.num_clauses;
        self.num_decisions += other.num_decisions;
        self.num_conflicts += other.num_conflicts;
        self.num_propagations += other.num_propagations;
        self.num_restarts += other.num_restarts;
        self.solve_time_ms += other.solve_time_ms;
    }
}
