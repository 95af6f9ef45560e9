use itertools::Itertools;
use log::debug;
use thiserror::Error;

use super::generate_pair_overlap;
use super::generate_rotatable_slots;
use super::generate_slot;
use super::generate_symmetry_breaking;
use super::CnfFormula;
use super::OriginMode;
use super::Slot;
use super::SymmetryBreaking;
use crate::engine::Assignment;
use crate::model::Instance;
use crate::model::PackingSolution;
use crate::model::Placement;

/// The choices made when turning an instance into a formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodingOptions {
    pub origin_mode: OriginMode,
    pub symmetry_breaking: SymmetryBreaking,
    pub allow_rotation: bool,
}

/// The formula stating that an instance can be packed into a strip of a fixed height, together
/// with what is needed to read a packing back from a model.
#[derive(Clone, Debug)]
pub struct PackingEncoding {
    formula: CnfFormula,
    slots: Vec<Slot>,
    num_rectangles: usize,
    plate_width: i32,
    height: i32,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no orientation of rectangle {rectangle} is selected")]
    NoActiveOrientation { rectangle: usize },
    #[error("rectangle {rectangle} has no coordinate")]
    MissingCoordinate { rectangle: usize },
}

/// Encodes whether `instance` fits a strip of `height`.
///
/// The instance should be validated beforehand. A height below some rectangle gives an
/// unsatisfiable formula rather than an error.
pub fn encode_packing(instance: &Instance, height: i32, options: &EncodingOptions) -> PackingEncoding {
    let mut formula = CnfFormula::default();
    let plate_width = instance.plate_width();

    let (slots, slot_clauses) = if options.allow_rotation {
        generate_rotatable_slots(instance, height, options.origin_mode, formula.arena())
    } else {
        let mut clauses = vec![];
        let slots = instance
            .rectangles()
            .iter()
            .enumerate()
            .map(|(rectangle_index, rectangle)| {
                let (slot, slot_clauses) = generate_slot(
                    rectangle_index,
                    *rectangle,
                    false,
                    None,
                    plate_width,
                    height,
                    options.origin_mode,
                    formula.arena(),
                );
                clauses.extend(slot_clauses);
                slot
            })
            .collect();
        (slots, clauses)
    };
    formula.add_clauses(slot_clauses);
    let num_ladder_clauses = formula.num_clauses();

    // the two orientations of one rectangle are never both in use
    for (first, second) in slots
        .iter()
        .tuple_combinations()
        .filter(|(first, second)| first.rectangle_index != second.rectangle_index)
    {
        let (_, clauses) =
            generate_pair_overlap(first, second, plate_width, height, formula.arena());
        formula.add_clauses(clauses);
    }
    let num_non_overlap_clauses = formula.num_clauses() - num_ladder_clauses;

    let symmetry_clauses =
        generate_symmetry_breaking(&slots, options.symmetry_breaking, formula.arena());
    let num_symmetry_clauses = symmetry_clauses.len();
    formula.add_clauses(symmetry_clauses);

    debug!(
        "Encoded height {height}: {} variables, {num_ladder_clauses} ladder clauses, {num_non_overlap_clauses} non-overlap clauses, {num_symmetry_clauses} symmetry clauses",
        formula.num_variables()
    );

    PackingEncoding {
        formula,
        slots,
        num_rectangles: instance.num_rectangles(),
        plate_width,
        height,
    }
}

impl PackingEncoding {
    pub fn formula(&self) -> &CnfFormula {
        &self.formula
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reads the packing from a model of the formula.
    pub fn decode(&self, assignment: &Assignment) -> Result<PackingSolution, DecodeError> {
        let placements = (0..self.num_rectangles)
            .map(|rectangle| {
                let slot = self
                    .slots
                    .iter()
                    .filter(|slot| slot.rectangle_index == rectangle)
                    .find(|slot| {
                        slot.selector
                            .map_or(true, |selector| assignment.literal_value(selector))
                    })
                    .ok_or(DecodeError::NoActiveOrientation { rectangle })?;

                let (Some(x), Some(y)) = (slot.x.decode(assignment), slot.y.decode(assignment))
                else {
                    return Err(DecodeError::MissingCoordinate { rectangle });
                };

                Ok(Placement {
                    x,
                    y,
                    width: slot.dimensions.width,
                    height: slot.dimensions.height,
                    is_rotated: slot.is_rotated,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PackingSolution {
            plate_width: self.plate_width,
            height: self.height,
            placements,
        })
    }
}
