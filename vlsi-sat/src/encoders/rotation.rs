//! Slots for rectangles which may be turned by 90 degrees.
//!
//! Every rectangle `k` of an instance with `n` rectangles gets two slots: slot `k` for its
//! upright orientation and slot `n + k` for the turned one. Each slot has a selector literal and
//! exactly one selector of a rectangle holds; the ladders of a slot only need a coordinate when
//! its selector holds.
use super::cardinality::exactly_one;
use super::generate_slot;
use super::Clause;
use super::LiteralArena;
use super::OriginMode;
use super::Slot;
use crate::model::Instance;

/// Creates the `2n` slots of `instance` for a strip of the given height.
///
/// The turned slot of a square is pinned: its selector and all of its ladder literals are
/// false, since it would only duplicate the upright slot.
pub fn generate_rotatable_slots(
    instance: &Instance,
    height: i32,
    origin_mode: OriginMode,
    arena: &mut LiteralArena,
) -> (Vec<Slot>, Vec<Clause>) {
    let num_rectangles = instance.num_rectangles();
    let selectors = arena.new_literals(2 * num_rectangles);

    let mut slots = Vec::with_capacity(2 * num_rectangles);
    let mut clauses = vec![];

    for is_rotated in [false, true] {
        for (rectangle_index, rectangle) in instance.rectangles().iter().enumerate() {
            let slot_index = if is_rotated {
                num_rectangles + rectangle_index
            } else {
                rectangle_index
            };
            let selector = selectors[slot_index];
            let dimensions = if is_rotated {
                rectangle.rotated()
            } else {
                *rectangle
            };

            let (mut slot, slot_clauses) = generate_slot(
                rectangle_index,
                dimensions,
                is_rotated,
                Some(selector),
                instance.plate_width(),
                height,
                origin_mode,
                arena,
            );
            clauses.extend(slot_clauses);

            if is_rotated && rectangle.is_square() {
                slot.is_pinned = true;
                clauses.push(vec![!selector]);
                clauses.extend(
                    slot.x
                        .literals()
                        .iter()
                        .chain(slot.y.literals())
                        .map(|literal| vec![!*literal]),
                );
            }

            slots.push(slot);
        }
    }

    for rectangle_index in 0..num_rectangles {
        clauses.extend(exactly_one(
            &[
                selectors[rectangle_index],
                selectors[num_rectangles + rectangle_index],
            ],
            arena,
        ));
    }

    (slots, clauses)
}
