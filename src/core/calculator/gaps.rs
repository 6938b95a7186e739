//! Module responsible for analyzing gaps between consecutive presence
//! intervals and determining which of them count as a recognized break.

use crate::models::work_day::WorkDay;
use serde::Serialize;
use tracing::debug;

/// A gap shorter than this is not a break.
pub const MIN_BREAK_GAP_MINUTES: u32 = 15;

/// Absence between two presence intervals long enough to count as a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakGap {
    pub start: u32,
    pub end: u32,
}

impl BreakGap {
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }
}

/// Qualifying gaps between adjacent intervals, in order.
///
/// Overlapping neighbours produce no gap.
pub fn analyze_gaps(day: &WorkDay) -> Vec<BreakGap> {
    let gaps: Vec<BreakGap> = day
        .blocks()
        .windows(2)
        .filter_map(|w| {
            let start = w[0].end();
            let end = w[1].start();
            (end >= start + MIN_BREAK_GAP_MINUTES).then_some(BreakGap { start, end })
        })
        .collect();

    debug!(count = gaps.len(), "analyzed break gaps");
    gaps
}
