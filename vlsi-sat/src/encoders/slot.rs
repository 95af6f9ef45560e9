use vlsi_sat_core::Literal;

use super::generate_ladder;
use super::Clause;
use super::LiteralArena;
use super::OriginMode;
use super::PositionLadder;
use crate::model::Rectangle;

/// One orientation of one rectangle, with the ladders of its lower-left corner.
///
/// Without rotation there is one slot per rectangle. With rotation, slot `k` and slot `n + k`
/// are the upright and the turned orientation of rectangle `k`; `selector` tells which one is
/// used.
#[derive(Clone, Debug)]
pub struct Slot {
    pub rectangle_index: usize,
    /// The dimensions in this orientation.
    pub dimensions: Rectangle,
    pub is_rotated: bool,
    pub x: PositionLadder,
    pub y: PositionLadder,
    pub selector: Option<Literal>,
    /// A turned square duplicates its upright slot; its ladders are fixed to false.
    pub is_pinned: bool,
}

impl Slot {
    pub(crate) fn ladder(&self, is_horizontal: bool) -> &PositionLadder {
        if is_horizontal {
            &self.x
        } else {
            &self.y
        }
    }
}

/// Creates the ladders of a slot for a strip of `plate_width` by `height`.
#[allow(clippy::too_many_arguments, reason = "mirrors the fields of a slot")]
pub(crate) fn generate_slot(
    rectangle_index: usize,
    dimensions: Rectangle,
    is_rotated: bool,
    selector: Option<Literal>,
    plate_width: i32,
    height: i32,
    origin_mode: OriginMode,
    arena: &mut LiteralArena,
) -> (Slot, Vec<Clause>) {
    let (x, mut clauses) = generate_ladder(
        plate_width - dimensions.width,
        origin_mode,
        selector,
        arena,
    );
    let (y, y_clauses) = generate_ladder(height - dimensions.height, origin_mode, selector, arena);
    clauses.extend(y_clauses);

    let slot = Slot {
        rectangle_index,
        dimensions,
        is_rotated,
        x,
        y,
        selector,
        is_pinned: false,
    };
    (slot, clauses)
}
