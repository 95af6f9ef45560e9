mod clause;
mod constraint_operation_error;
mod key_value_heap;
mod literal;
mod propositional_variable;
pub(crate) mod sequence_generators;
mod solution;

pub(crate) use clause::Clause;
pub(crate) use clause::ClauseReference;
pub use constraint_operation_error::ConstraintOperationError;
pub(crate) use key_value_heap::KeyValueHeap;
pub use literal::Literal;
pub use propositional_variable::PropositionalVariable;
pub use solution::Solution;
