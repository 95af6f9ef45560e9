use crate::create_statistics_struct;

create_statistics_struct!(
    /// The counters of a [`crate::SatSolver`], accumulated over all of its calls to `solve`.
    SolverStatistics {
        num_decisions: u64,
        num_conflicts: u64,
        num_propagations: u64,
        num_restarts: u64,
        num_unit_clauses_learned: u64,
        num_learned_clauses_deleted: u64,
        time_spent_in_solver_ms: u64,
    }
);
