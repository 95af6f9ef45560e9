use std::fmt::Debug;

/// Produces the number of conflicts to allow before the next restart.
pub(crate) trait SequenceGenerator: Debug {
    fn next(&mut self) -> i64;
}
