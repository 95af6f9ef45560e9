//! Clauses keeping two slots apart.
//!
//! Two rectangles do not overlap when one of them lies entirely to the left of, or entirely
//! below, the other. Each of these four relations gets a literal, at least one of which must
//! hold, and each relation literal is tied to the ladders by clauses of the form
//! `left_of(a, b) ∧ x_b <= i + w_a -> x_a <= i`.
use vlsi_sat_core::Literal;

use super::Clause;
use super::LiteralArena;
use super::Slot;

/// The relation literals of a pair of slots `(first, second)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelativeOrder {
    /// `first` lies to the left of `second`.
    pub left_of: Literal,
    /// `second` lies to the left of `first`.
    pub right_of: Literal,
    /// `first` lies below `second`.
    pub below: Literal,
    /// `second` lies below `first`.
    pub above: Literal,
}

impl RelativeOrder {
    pub fn new(arena: &mut LiteralArena) -> RelativeOrder {
        RelativeOrder {
            left_of: arena.new_literal(),
            right_of: arena.new_literal(),
            below: arena.new_literal(),
            above: arena.new_literal(),
        }
    }

    pub fn literals(&self) -> [Literal; 4] {
        [self.left_of, self.right_of, self.below, self.above]
    }
}

/// Generates the clauses which keep `first` and `second` from overlapping in a strip of
/// `plate_width` by `height`.
///
/// If the slots carry selectors, the pair only has to be separated when both are selected.
pub fn generate_pair_overlap(
    first: &Slot,
    second: &Slot,
    plate_width: i32,
    height: i32,
    arena: &mut LiteralArena,
) -> (RelativeOrder, Vec<Clause>) {
    let order = RelativeOrder::new(arena);

    let mut some_relation = [first.selector, second.selector]
        .into_iter()
        .flatten()
        .map(|selector| !selector)
        .collect::<Clause>();
    some_relation.extend(order.literals());

    let mut clauses = vec![some_relation];

    for (is_horizontal, outer_dimension, before, after) in [
        (true, plate_width, order.left_of, order.right_of),
        (false, height, order.below, order.above),
    ] {
        let combined_size =
            first.dimensions.size_on(is_horizontal) + second.dimensions.size_on(is_horizontal);
        if combined_size > outer_dimension {
            // the two cannot be next to each other along this axis
            clauses.push(vec![!before]);
            clauses.push(vec![!after]);
            continue;
        }

        clauses.extend(ordering_clauses(
            before,
            first,
            second,
            is_horizontal,
            outer_dimension,
        ));
        clauses.extend(ordering_clauses(
            after,
            second,
            first,
            is_horizontal,
            outer_dimension,
        ));
    }

    (order, clauses)
}

/// `relation -> lower + size_lower <= upper` along one axis, one clause per offset `i`:
/// `¬relation ∨ P_lower[i] ∨ ¬P_upper[i + size_lower]`.
///
/// Outside the offset window every clause is either empty of ladder literals or implied by
/// the ladders themselves, so none is generated there.
fn ordering_clauses(
    relation: Literal,
    lower: &Slot,
    upper: &Slot,
    is_horizontal: bool,
    outer_dimension: i32,
) -> Vec<Clause> {
    let lower_size = lower.dimensions.size_on(is_horizontal);
    let upper_size = upper.dimensions.size_on(is_horizontal);
    let lower_ladder = lower.ladder(is_horizontal);
    let upper_ladder = upper.ladder(is_horizontal);

    (-lower_size.max(upper_size)..outer_dimension - lower_size.min(upper_size))
        .filter_map(|offset| {
            let mut clause = vec![!relation];
            clause.extend(lower_ladder.literal(offset));
            clause.extend(
                upper_ladder
                    .literal(offset + lower_size)
                    .map(|literal| !literal),
            );

            (clause.len() > 1).then_some(clause)
        })
        .collect()
}
