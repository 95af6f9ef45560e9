//! The order encoding of a coordinate.
//!
//! A coordinate with domain `0..=bound` is represented by the literals `P[0..=bound]`, where
//! `P[i]` means "the coordinate is at most `i`". The monotonicity clauses `P[i] -> P[i + 1]`
//! make the true literals a suffix of the ladder, and the coordinate is the first index at which
//! the ladder is true.
use clap::ValueEnum;
use vlsi_sat_core::Literal;

use super::cardinality::at_least_one;
use super::Clause;
use super::LiteralArena;
use crate::engine::Assignment;

/// How a ladder is forced to contain a coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OriginMode {
    /// The top literal `P[bound]` is asserted, so every ladder decodes through its first true
    /// literal.
    #[default]
    ForceTop,
    /// At least one ladder literal is true; with monotonicity this also makes the top literal
    /// true.
    AtLeastOne,
}

/// The order encoding of the coordinate of one rectangle along one axis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionLadder {
    literals: Vec<Literal>,
}

impl PositionLadder {
    /// The largest coordinate, or `-1` for a ladder without literals (the rectangle does not
    /// fit on this axis).
    pub fn bound(&self) -> i32 {
        self.literals.len() as i32 - 1
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The literal "coordinate <= index", or `None` when `index` is outside `0..=bound`.
    pub fn literal(&self, index: i32) -> Option<Literal> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.literals.get(index).copied())
    }

    pub fn top(&self) -> Option<Literal> {
        self.literals.last().copied()
    }

    /// The coordinate in `assignment`: the smallest index whose literal is true.
    pub fn decode(&self, assignment: &Assignment) -> Option<i32> {
        self.literals
            .iter()
            .position(|literal| assignment.literal_value(*literal))
            .map(|index| index as i32)
    }
}

/// Creates the ladder for a coordinate in `0..=bound` along with its monotonicity clauses and
/// the clause requiring a coordinate.
///
/// When `guard` is given, the coordinate is only required when the guard holds; this is how the
/// orientations of a rotatable rectangle share one rectangle. A negative `bound` gives an empty
/// ladder and a clause stating that the guard cannot hold (the empty clause if there is no
/// guard).
pub fn generate_ladder(
    bound: i32,
    origin_mode: OriginMode,
    guard: Option<Literal>,
    arena: &mut LiteralArena,
) -> (PositionLadder, Vec<Clause>) {
    let num_literals = match usize::try_from(bound + 1) {
        Ok(num_literals) if num_literals > 0 => num_literals,
        _ => return (PositionLadder::default(), vec![guard_prefix(guard)]),
    };

    let ladder = PositionLadder {
        literals: arena.new_literals(num_literals),
    };

    let mut clauses = ladder
        .literals
        .windows(2)
        .map(|pair| vec![!pair[0], pair[1]])
        .collect::<Vec<_>>();
    clauses.push(origin_clause(&ladder, origin_mode, guard));

    (ladder, clauses)
}

fn origin_clause(ladder: &PositionLadder, origin_mode: OriginMode, guard: Option<Literal>) -> Clause {
    let mut clause = guard_prefix(guard);
    match origin_mode {
        OriginMode::ForceTop => clause.extend(ladder.top()),
        OriginMode::AtLeastOne => clause.extend(at_least_one(ladder.literals())),
    }
    clause
}

fn guard_prefix(guard: Option<Literal>) -> Clause {
    guard.map(|guard| vec![!guard]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::generate_ladder;
    use super::OriginMode;
    use crate::encoders::test_utils::all_models;
    use crate::encoders::LiteralArena;

    #[test]
    fn every_model_is_monotone_and_decodes_to_its_first_true_literal() {
        for origin_mode in [OriginMode::ForceTop, OriginMode::AtLeastOne] {
            let mut arena = LiteralArena::default();
            let (ladder, clauses) = generate_ladder(4, origin_mode, None, &mut arena);

            let models = all_models(arena.num_variables(), &clauses);
            // one model per coordinate
            assert_eq!(models.len(), 5);

            for model in &models {
                let values = ladder
                    .literals()
                    .iter()
                    .map(|literal| model.literal_value(*literal))
                    .collect::<Vec<_>>();
                assert!(values.windows(2).all(|pair| !pair[0] || pair[1]));

                let coordinate = ladder.decode(model).expect("a coordinate exists");
                assert!(values[coordinate as usize..].iter().all(|value| *value));
                assert!(values[..coordinate as usize].iter().all(|value| !*value));
            }
        }
    }

    #[test]
    fn both_origin_modes_admit_the_same_coordinates() {
        let decoded = |origin_mode| {
            let mut arena = LiteralArena::default();
            let (ladder, clauses) = generate_ladder(3, origin_mode, None, &mut arena);
            let mut coordinates = all_models(arena.num_variables(), &clauses)
                .iter()
                .filter_map(|model| ladder.decode(model))
                .collect::<Vec<_>>();
            coordinates.sort_unstable();
            coordinates
        };

        assert_eq!(decoded(OriginMode::ForceTop), vec![0, 1, 2, 3]);
        assert_eq!(decoded(OriginMode::AtLeastOne), vec![0, 1, 2, 3]);
    }

    #[test]
    fn zero_bound_pins_the_coordinate() {
        let mut arena = LiteralArena::default();
        let (ladder, clauses) = generate_ladder(0, OriginMode::ForceTop, None, &mut arena);

        assert_eq!(ladder.bound(), 0);
        assert_eq!(clauses, vec![vec![ladder.literals()[0]]]);
    }

    #[test]
    fn negative_bound_gives_the_empty_clause() {
        let mut arena = LiteralArena::default();
        let (ladder, clauses) = generate_ladder(-2, OriginMode::AtLeastOne, None, &mut arena);

        assert!(ladder.is_empty());
        assert_eq!(ladder.bound(), -1);
        assert_eq!(clauses, vec![vec![]]);
        assert_eq!(arena.num_variables(), 0);
    }

    #[test]
    fn negative_bound_with_a_guard_rules_out_the_guard() {
        let mut arena = LiteralArena::default();
        let guard = arena.new_literal();
        let (_, clauses) = generate_ladder(-1, OriginMode::ForceTop, Some(guard), &mut arena);

        assert_eq!(clauses, vec![vec![!guard]]);
    }

    #[test]
    fn guarded_ladders_need_no_coordinate_when_the_guard_is_false() {
        let mut arena = LiteralArena::default();
        let guard = arena.new_literal();
        let (ladder, clauses) = generate_ladder(2, OriginMode::ForceTop, Some(guard), &mut arena);

        let models = all_models(arena.num_variables(), &clauses);
        assert!(models
            .iter()
            .any(|model| !model.literal_value(guard) && ladder.decode(model).is_none()));
        assert!(models
            .iter()
            .filter(|model| model.literal_value(guard))
            .all(|model| ladder.decode(model).is_some()));
    }

    #[test]
    fn out_of_range_indices_have_no_literal() {
        let mut arena = LiteralArena::default();
        let (ladder, _) = generate_ladder(2, OriginMode::ForceTop, None, &mut arena);

        assert_eq!(ladder.literal(-1), None);
        assert_eq!(ladder.literal(3), None);
        assert_eq!(ladder.literal(2), ladder.top());
    }
}
