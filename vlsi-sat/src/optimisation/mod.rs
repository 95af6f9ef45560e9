//! Searching for the lowest feasible strip height.
//!
//! Feasibility is monotone in the height, so the search only needs to find the boundary between
//! infeasible and feasible heights. [`optimise`] does so linearly upwards from the lower bound or
//! by bisection against the first-fit packing, see [`SearchStrategy`].
mod height_optimiser;
mod optimisation_result;
mod optimiser_options;
mod search_state;
mod search_strategy;

pub use height_optimiser::optimise;
pub use optimisation_result::OptimisationReport;
pub use optimisation_result::OptimisationResult;
pub use optimisation_result::SearchStatistics;
pub use optimisation_result::SearchStatus;
pub use optimisation_result::SolveOutcome;
pub use optimiser_options::OptimiserOptions;
pub use search_state::SearchState;
pub use search_strategy::SearchStrategy;
