//! Optimal end of the working day: when the target net work would be reached
//! if presence continued uninterrupted from now on.

use crate::core::calculator::gaps::analyze_gaps;
use crate::core::calculator::simulation::{Simulator, TargetSearch};
use crate::models::day_report::{OptimalEnd, WorkStats};
use crate::models::interval::MINUTES_PER_DAY;
use crate::models::work_day::WorkDay;
use tracing::debug;

/// Project the clock time at which `target` minutes of net work are reached.
///
/// `real` are the statistics of the recorded presence so far; when they
/// already cover the target no projection is made. `forecast` is the same
/// day with open entries extended by a full day.
pub fn project_optimal_end(
    simulator: &Simulator,
    real: &WorkStats,
    forecast: &WorkDay,
    target: u32,
) -> OptimalEnd {
    if real.net_work >= target {
        return OptimalEnd::AlreadyMet;
    }

    let gaps = analyze_gaps(forecast);
    match simulator.simulate_until(forecast, &gaps, target) {
        // Met before anything was simulated: nothing left to project.
        TargetSearch::Reached { minute } if minute == forecast.day_start() => OptimalEnd::AlreadyMet,
        TargetSearch::Reached { minute } => {
            debug!(minute, target, "projected optimal end");
            OptimalEnd::At {
                minute: minute % MINUTES_PER_DAY,
            }
        }
        TargetSearch::NotReached => OptimalEnd::NotReached,
    }
}
