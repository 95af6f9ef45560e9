//! Turning a packing instance and a candidate height into clauses.
//!
//! Every coordinate is order encoded by a [`PositionLadder`], pairs of rectangles are kept apart
//! by the clauses of [`generate_pair_overlap`], and [`generate_symmetry_breaking`] removes
//! (part of) the mirror symmetry. [`encode_packing`] puts these together for one height.
pub mod cardinality;
mod formula;
mod ladder;
mod non_overlap;
mod packing_encoder;
mod rotation;
mod slot;
mod symmetry;
#[cfg(test)]
pub(crate) mod test_utils;

pub use formula::Clause;
pub use formula::CnfFormula;
pub use formula::LiteralArena;
pub use ladder::generate_ladder;
pub use ladder::OriginMode;
pub use ladder::PositionLadder;
pub use non_overlap::generate_pair_overlap;
pub use non_overlap::RelativeOrder;
pub use packing_encoder::encode_packing;
pub use packing_encoder::DecodeError;
pub use packing_encoder::EncodingOptions;
pub use packing_encoder::PackingEncoding;
pub use rotation::generate_rotatable_slots;
pub(crate) use slot::generate_slot;
pub use slot::Slot;
pub use symmetry::generate_symmetry_breaking;
pub use symmetry::lex_geq;
pub use symmetry::mirror;
pub use symmetry::smallest_in_corner;
pub use symmetry::InvalidSymmetryBreaking;
pub use symmetry::SymmetryBreaking;
