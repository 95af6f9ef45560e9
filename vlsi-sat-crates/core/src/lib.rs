//! The boolean satisfiability engine used by the `vlsi-sat` packing solver.
//!
//! The engine is a conflict-driven clause-learning solver working on clauses over
//! [`Literal`]s. Clauses are added with [`SatSolver::add_clause`] and the formula is solved with
//! [`SatSolver::solve`], which polls a [`termination::TerminationCondition`] so that callers can
//! bound the time spent in a single call.
//!
//! ```rust
//! # use vlsi_sat_core::SatSolver;
//! # use vlsi_sat_core::results::SatisfactionResult;
//! # use vlsi_sat_core::termination::Indefinite;
//! let mut solver = SatSolver::default();
//! let a = solver.new_literal();
//! let b = solver.new_literal();
//!
//! solver.add_clause(vec![a, b]).expect("the clause is not infeasible at the root");
//! solver.add_clause(vec![!a]).expect("the clause is not infeasible at the root");
//!
//! match solver.solve(&mut Indefinite) {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         assert!(!solution.literal_value(a));
//!         assert!(solution.literal_value(b));
//!     }
//!     _ => panic!("the formula is satisfiable"),
//! }
//! ```
pub mod asserts;
pub(crate) mod basic_types;
pub(crate) mod engine;
pub mod statistics;

pub use basic_types::sequence_generators::SequenceGeneratorType;
pub use basic_types::ConstraintOperationError;
pub use basic_types::Literal;
pub use basic_types::PropositionalVariable;
pub use basic_types::Solution;
pub use convert_case;
pub use engine::SatOptions;
pub use engine::SatSolver;
pub use engine::SolverStatistics;
pub use rand;

pub mod termination {
    //! Conditions which are polled by [`crate::SatSolver::solve`] to decide whether to give up.
    pub use crate::engine::termination::*;
}

pub mod results {
    //! The outcomes of [`crate::SatSolver::solve`].
    pub use crate::engine::SatisfactionResult;
}
