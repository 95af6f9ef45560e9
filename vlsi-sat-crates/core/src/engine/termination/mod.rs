//! A [`TerminationCondition`] is polled by the solver during search and tells it to give up
//! before a definitive answer is reached. The packing driver bounds every solver call with a
//! [`TimeBudget`] carved out of the overall time limit.
mod combinator;
#[cfg(test)]
mod decision_budget;
mod indefinite;
mod time_budget;

pub use combinator::Combinator;
#[cfg(test)]
pub(crate) use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// Determines when the solver should give up searching.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called by the solver after every decision.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn decision_has_been_made(&mut self) {
        (**self).decision_has_been_made()
    }
}
