mod assignments;
mod clausal_propagator;
mod clause_allocator;
mod sat_options;
mod sat_solver;
mod solver_statistics;
pub(crate) mod termination;
mod value_selector;
mod variable_selector;

pub(crate) use assignments::AssignmentsPropositional;
pub(crate) use clausal_propagator::ClausalPropagator;
pub(crate) use clausal_propagator::PropagationStatusClausal;
pub(crate) use clause_allocator::ClauseAllocator;
pub use sat_options::SatOptions;
pub use sat_solver::SatSolver;
pub use sat_solver::SatisfactionResult;
pub use solver_statistics::SolverStatistics;
pub(crate) use value_selector::PropositionalValueSelector;
pub(crate) use variable_selector::PropositionalVariableSelector;
