use std::time::Duration;

/// The bookkeeping of one height search.
///
/// Every height below `lower_bound` is infeasible and `upper_bound` is known to be feasible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub lower_bound: i32,
    pub upper_bound: i32,
    pub trial_height: i32,
    pub elapsed_build_time: Duration,
    pub elapsed_solve_time: Duration,
    /// `None` when the search is not limited in time.
    pub remaining_timeout: Option<Duration>,
}

impl SearchState {
    pub fn new(lower_bound: i32, upper_bound: i32, time_limit: Option<Duration>) -> SearchState {
        SearchState {
            lower_bound,
            upper_bound,
            trial_height: lower_bound,
            elapsed_build_time: Duration::ZERO,
            elapsed_solve_time: Duration::ZERO,
            remaining_timeout: time_limit,
        }
    }

    pub fn is_budget_exhausted(&self) -> bool {
        self.remaining_timeout
            .is_some_and(|remaining| remaining.is_zero())
    }

    /// Charges the time spent on one probe to the budget.
    pub fn record_probe(&mut self, build_time: Duration, solve_time: Duration) {
        self.elapsed_build_time += build_time;
        self.elapsed_solve_time += solve_time;
        self.remaining_timeout = self
            .remaining_timeout
            .map(|remaining| remaining.saturating_sub(build_time + solve_time));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::SearchState;

    #[test]
    fn probes_are_charged_to_the_budget() {
        let mut state = SearchState::new(3, 7, Some(Duration::from_millis(100)));

        state.record_probe(Duration::from_millis(10), Duration::from_millis(30));

        assert_eq!(state.remaining_timeout, Some(Duration::from_millis(60)));
        assert_eq!(state.elapsed_build_time, Duration::from_millis(10));
        assert_eq!(state.elapsed_solve_time, Duration::from_millis(30));
        assert!(!state.is_budget_exhausted());
    }

    #[test]
    fn the_budget_saturates_at_zero() {
        let mut state = SearchState::new(3, 7, Some(Duration::from_millis(100)));

        state.record_probe(Duration::from_millis(60), Duration::from_millis(60));

        assert_eq!(state.remaining_timeout, Some(Duration::ZERO));
        assert!(state.is_budget_exhausted());
    }

    #[test]
    fn unlimited_searches_never_run_out() {
        let mut state = SearchState::new(3, 7, None);

        state.record_probe(Duration::from_secs(1000), Duration::from_secs(1000));

        assert!(!state.is_budget_exhausted());
    }
}
