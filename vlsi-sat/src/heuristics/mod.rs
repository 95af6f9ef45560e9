//! Heuristic packings which bound the optimal height.
mod first_fit;

pub use first_fit::first_fit;
