use std::time::Duration;
use std::time::Instant;

use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the wall-clock budget has been used up.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    started_at: Instant,
    budget: Duration,
}

impl TimeBudget {
    /// Give the solver a time budget, starting now.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget {
            started_at: Instant::now(),
            budget,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.started_at.elapsed())
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        self.started_at.elapsed() >= self.budget
    }
}
