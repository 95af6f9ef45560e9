//! The packing problem: rectangles, the instance they belong to, and placements of them.
mod instance;
mod instance_error;
mod packing_solution;
mod rectangle;

pub use instance::Instance;
pub use instance_error::InstanceError;
pub use packing_solution::PackingSolution;
pub use packing_solution::Placement;
pub use packing_solution::SolutionError;
pub use rectangle::Rectangle;
