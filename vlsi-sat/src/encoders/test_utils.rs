//! Helpers for checking small formulas exhaustively or with the bundled engine.
use std::collections::HashSet;

use vlsi_sat_core::Literal;
use vlsi_sat_core::SatOptions;

use super::Clause;
use super::CnfFormula;
use crate::engine::Assignment;
use crate::engine::BundledEngine;
use crate::engine::EngineOutcome;
use crate::engine::SatEngine;

pub(crate) fn is_satisfied(clauses: &[Clause], assignment: &Assignment) -> bool {
    clauses
        .iter()
        .all(|clause| clause.iter().any(|literal| assignment.literal_value(*literal)))
}

/// Every assignment to `num_variables` variables which satisfies `clauses`.
pub(crate) fn all_models(num_variables: u32, clauses: &[Clause]) -> Vec<Assignment> {
    assert!(num_variables <= 20, "too many variables to enumerate");

    (0..1_u32 << num_variables)
        .map(|mask| Assignment::new((0..num_variables).map(|i| mask & (1 << i) != 0).collect()))
        .filter(|assignment| is_satisfied(clauses, assignment))
        .collect()
}

/// The number of distinct values the `projection` literals take over all models.
pub(crate) fn count_models_projected(
    num_variables: u32,
    clauses: &[Clause],
    projection: &[Literal],
) -> usize {
    all_models(num_variables, clauses)
        .iter()
        .map(|assignment| {
            projection
                .iter()
                .map(|literal| assignment.literal_value(*literal))
                .collect::<Vec<_>>()
        })
        .collect::<HashSet<_>>()
        .len()
}

pub(crate) fn solve(formula: &CnfFormula) -> Option<Assignment> {
    let mut engine = BundledEngine::new(SatOptions::default());
    formula.load_into(&mut engine);

    match engine.solve(None) {
        EngineOutcome::Sat(assignment) => Some(assignment),
        EngineOutcome::Unsat => None,
        EngineOutcome::Unknown(reason) => panic!("no time limit was given, yet got {reason}"),
    }
}
