use crate::basic_types::sequence_generators::SequenceGeneratorType;

/// Options of the [`crate::SatSolver`].
#[derive(Clone, Copy, Debug)]
pub struct SatOptions {
    /// The sequence from which the number of conflicts between restarts is taken.
    pub restart_sequence_generator_type: SequenceGeneratorType,
    /// The first value of the restart sequence (or the scaling of the Luby sequence).
    pub restart_base: i64,
    /// The multiplication factor of the geometric restart sequence.
    pub restart_geometric_coef: f64,
    /// The number of learned clauses kept after a reduction of the clause database.
    pub learned_clause_limit: usize,
    /// When set, the initial order of the variables is shuffled with this seed.
    pub random_seed: Option<u64>,
}

impl Default for SatOptions {
    fn default() -> Self {
        SatOptions {
            restart_sequence_generator_type: SequenceGeneratorType::Luby,
            restart_base: 100,
            restart_geometric_coef: 1.5,
            learned_clause_limit: 4000,
            random_seed: None,
        }
    }
}
