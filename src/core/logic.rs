use crate::core::calculator::rules::AbsenceRule;
use crate::core::calculator::{forecast, gaps, normalize, simulation::Simulator, surplus};
use crate::errors::AppResult;
use crate::models::day_report::{DayOutcome, DayReport, WorkStats};
use crate::models::entry::RawEntry;

pub struct Core;

impl Core {
    /// Raw entries -> result record.
    ///
    /// `target` is in minutes, `now` is the current minute-of-day used to
    /// close open entries. Pure: identical inputs give identical outcomes.
    pub fn build_day_report(
        entries: &[RawEntry],
        target: u32,
        now: u32,
        rule: AbsenceRule,
    ) -> AppResult<DayOutcome> {
        let normalized = normalize::normalize(entries, now)?;

        let Some(forecast_day) = normalized.forecast else {
            return Ok(DayOutcome::NoData);
        };

        let simulator = Simulator::new(rule);

        // An entry opened this very minute has no real presence yet.
        let stats = match &normalized.real {
            Some(day) => simulator.simulate(day, &gaps::analyze_gaps(day)),
            None => WorkStats::default(),
        };

        let saldo = surplus::calculate_saldo(&stats, target);
        let optimal_end = forecast::project_optimal_end(&simulator, &stats, &forecast_day, target);

        Ok(DayOutcome::Computed(DayReport {
            stats,
            target_minutes: target,
            saldo,
            optimal_end,
        }))
    }
}
