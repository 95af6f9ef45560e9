use std::fmt::Display;

use vlsi_sat_core::create_statistics_struct;
use vlsi_sat_core::statistics::log_statistic_postfix;
use vlsi_sat_core::statistics::should_log_statistics;
use vlsi_sat_core::statistics::Statistic;
use vlsi_sat_core::statistics::StatisticLogger;

use crate::engine::EngineStatistics;
use crate::engine::UnknownReason;
use crate::model::PackingSolution;

/// The result of [`crate::optimisation::optimise`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptimisationResult {
    /// No packing is lower than this one.
    Optimal(PackingSolution),
    /// The search stopped before proving optimality, but this packing was found on the way.
    Satisfiable(PackingSolution),
    /// The search stopped before any packing was found.
    Unknown(UnknownReason),
}

impl OptimisationResult {
    pub fn solution(&self) -> Option<&PackingSolution> {
        match self {
            OptimisationResult::Optimal(solution) | OptimisationResult::Satisfiable(solution) => {
                Some(solution)
            }
            OptimisationResult::Unknown(_) => None,
        }
    }

    pub fn status(&self) -> SearchStatus {
        match self {
            OptimisationResult::Optimal(_) => SearchStatus::Optimal,
            OptimisationResult::Satisfiable(_) => SearchStatus::Satisfiable,
            OptimisationResult::Unknown(_) => SearchStatus::Unknown,
        }
    }
}

/// The outcome of a single probe of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The instance fits the probed height; the packing shows how.
    Sat(PackingSolution),
    Unsat,
    Unknown(UnknownReason),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    Optimal,
    Satisfiable,
    #[default]
    Unknown,
}

impl Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Optimal => write!(f, "OPTIMAL"),
            SearchStatus::Satisfiable => write!(f, "SATISFIABLE"),
            SearchStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

create_statistics_struct!(
    /// Totals over all probes of one search.
    SearchStatistics {
        status: SearchStatus,
        lower_bound: i32,
        upper_bound: i32,
        num_probes: u64,
        build_time_s: f64,
        solve_time_s: f64,
        engine: EngineStatistics,
    }
);

/// A result together with the statistics of the search which produced it.
#[derive(Clone, Debug)]
pub struct OptimisationReport {
    pub result: OptimisationResult,
    pub statistics: SearchStatistics,
}

impl OptimisationReport {
    /// Writes the statistics under the `search` prefix if statistic logging is configured.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new("search"));
            log_statistic_postfix();
        }
    }
}
