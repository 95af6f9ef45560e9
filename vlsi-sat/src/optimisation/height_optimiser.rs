use std::time::Instant;

use log::debug;
use log::error;
use log::info;
use log::warn;
use vlsi_sat_core::vlsi_assert_moderate;

use super::OptimisationReport;
use super::OptimisationResult;
use super::OptimiserOptions;
use super::SearchState;
use super::SearchStatistics;
use super::SearchStrategy;
use super::SolveOutcome;
use crate::encoders::encode_packing;
use crate::engine::EngineOutcome;
use crate::engine::SatEngine;
use crate::engine::UnknownReason;
use crate::heuristics::first_fit;
use crate::model::Instance;
use crate::model::InstanceError;
use crate::model::PackingSolution;

/// Finds the lowest strip into which `instance` can be packed.
///
/// Every probed height is encoded from scratch and handed to a fresh engine obtained from
/// `create_engine`. All probes draw from the single time budget of `options`; once it runs out
/// the search reports the best it has, see [`OptimisationResult`].
///
/// An invalid instance is rejected before anything is encoded.
pub fn optimise<Engine: SatEngine>(
    instance: &Instance,
    options: &OptimiserOptions,
    create_engine: impl FnMut() -> Engine,
) -> Result<OptimisationReport, InstanceError> {
    let allow_rotation = options.encoding.allow_rotation;
    instance.validate(allow_rotation)?;

    let lower_bound = instance.lower_bound(allow_rotation);
    let first_fit_solution = first_fit(instance, allow_rotation);
    let upper_bound = first_fit_solution
        .as_ref()
        .map(|solution| solution.height)
        .unwrap_or_else(|| {
            (0..instance.num_rectangles())
                .map(|index| instance.min_feasible_height(index, allow_rotation))
                .fold(0_i32, i32::saturating_add)
        })
        .max(lower_bound);
    info!(
        "Searching heights in [{lower_bound}, {upper_bound}] with {} search",
        options.strategy
    );

    let mut optimiser = HeightOptimiser {
        instance,
        options,
        create_engine,
        state: SearchState::new(lower_bound, upper_bound, options.time_limit),
        statistics: SearchStatistics::default(),
    };

    let result = match options.strategy {
        SearchStrategy::Linear => optimiser.linear_search(lower_bound),
        SearchStrategy::Binary => optimiser.binary_search(first_fit_solution),
    };

    let mut statistics = optimiser.statistics;
    statistics.status = result.status();
    statistics.lower_bound = optimiser.state.lower_bound;
    statistics.upper_bound = optimiser.state.upper_bound;
    statistics.build_time_s = optimiser.state.elapsed_build_time.as_secs_f64();
    statistics.solve_time_s = optimiser.state.elapsed_solve_time.as_secs_f64();

    match &result {
        OptimisationResult::Optimal(solution) => {
            info!("Optimal height {} after {} probes", solution.height, statistics.num_probes)
        }
        OptimisationResult::Satisfiable(solution) => warn!(
            "Stopped with height {} unproven, the optimum lies in [{}, {}]",
            solution.height, statistics.lower_bound, statistics.upper_bound
        ),
        OptimisationResult::Unknown(reason) => {
            warn!("Stopped without a packing ({reason})")
        }
    }

    Ok(OptimisationReport { result, statistics })
}

struct HeightOptimiser<'a, CreateEngine> {
    instance: &'a Instance,
    options: &'a OptimiserOptions,
    create_engine: CreateEngine,
    state: SearchState,
    statistics: SearchStatistics,
}

impl<Engine, CreateEngine> HeightOptimiser<'_, CreateEngine>
where
    Engine: SatEngine,
    CreateEngine: FnMut() -> Engine,
{
    /// Probes `start`, `start + 1`, ... until a height is feasible.
    ///
    /// Nothing is returned on an unknown probe: the heights probed so far were all infeasible.
    fn linear_search(&mut self, start: i32) -> OptimisationResult {
        let mut height = start;

        loop {
            vlsi_assert_moderate!(
                height <= self.state.upper_bound,
                "the upper bound is feasible so the search stops there at the latest"
            );

            match self.probe(height) {
                SolveOutcome::Sat(solution) => {
                    self.state.upper_bound = height;
                    return OptimisationResult::Optimal(solution);
                }
                SolveOutcome::Unsat => {
                    self.state.lower_bound = height + 1;
                    height += 1;
                }
                SolveOutcome::Unknown(reason) => return OptimisationResult::Unknown(reason),
            }
        }
    }

    /// Bisects the bounds, starting from the packing which gave the upper bound (if any).
    fn binary_search(&mut self, initial_solution: Option<PackingSolution>) -> OptimisationResult {
        let mut best_solution = initial_solution;

        while self.state.lower_bound < self.state.upper_bound {
            let lower_bound = self.state.lower_bound;
            let midpoint = lower_bound + (self.state.upper_bound - lower_bound) / 2;

            match self.probe(midpoint) {
                SolveOutcome::Sat(solution) => {
                    self.state.upper_bound = midpoint;
                    best_solution = Some(solution);
                }
                SolveOutcome::Unsat => self.state.lower_bound = midpoint + 1,
                SolveOutcome::Unknown(reason) => {
                    // taller strips stay feasible, so a retained packing is still valid
                    return match best_solution {
                        Some(solution) => OptimisationResult::Satisfiable(solution),
                        None => OptimisationResult::Unknown(reason),
                    };
                }
            }
        }

        match best_solution {
            Some(solution) => OptimisationResult::Optimal(solution),
            // no packing of the upper bound is known yet
            None => self.linear_search(self.state.lower_bound),
        }
    }

    fn probe(&mut self, height: i32) -> SolveOutcome {
        if self.state.is_budget_exhausted() {
            warn!("The time budget ran out before height {height} could be probed");
            return SolveOutcome::Unknown(UnknownReason::Timeout);
        }

        self.state.trial_height = height;
        info!(
            "Probing height {height} (bounds [{}, {}])",
            self.state.lower_bound, self.state.upper_bound
        );

        let build_started = Instant::now();
        let encoding = encode_packing(self.instance, height, &self.options.encoding);
        let mut engine = (self.create_engine)();
        encoding.formula().load_into(&mut engine);
        let build_time = build_started.elapsed();

        let timeout = self
            .state
            .remaining_timeout
            .map(|remaining| remaining.saturating_sub(build_time));
        let solve_started = Instant::now();
        let outcome = engine.solve(timeout);
        let solve_time = solve_started.elapsed();

        self.state.record_probe(build_time, solve_time);
        self.statistics.num_probes += 1;
        let engine_statistics = engine.statistics();
        self.statistics.engine.accumulate(&engine_statistics);
        debug!(
            "Height {height}: built in {} ms, solved in {} ms, {} conflicts, {} decisions",
            build_time.as_millis(),
            solve_time.as_millis(),
            engine_statistics.num_conflicts,
            engine_statistics.num_decisions
        );

        match outcome {
            EngineOutcome::Sat(assignment) => {
                let solution = match encoding.decode(&assignment) {
                    Ok(solution) => solution,
                    Err(decode_error) => {
                        error!("The model for height {height} does not decode: {decode_error}");
                        return SolveOutcome::Unknown(UnknownReason::InvalidModel);
                    }
                };

                if let Err(verify_error) = solution.verify(self.instance) {
                    error!("The packing for height {height} is invalid: {verify_error}");
                    return SolveOutcome::Unknown(UnknownReason::InvalidModel);
                }

                info!("Height {height} is feasible");
                SolveOutcome::Sat(solution)
            }
            EngineOutcome::Unsat => {
                info!("Height {height} is infeasible");
                SolveOutcome::Unsat
            }
            EngineOutcome::Unknown(reason) => {
                warn!("Gave up on height {height}: {reason}");
                SolveOutcome::Unknown(reason)
            }
        }
    }
}
