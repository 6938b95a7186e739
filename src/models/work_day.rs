use crate::models::interval::TimeInterval;
use serde::Serialize;

/// The presence record of one simulated day.
///
/// Always holds at least one interval, sorted ascending by start. Overlapping
/// intervals are kept as given: a minute counts as present when any interval
/// contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkDay {
    blocks: Vec<TimeInterval>,
}

impl WorkDay {
    /// Sort the intervals by start. Returns `None` when there is nothing to simulate.
    pub fn new(mut blocks: Vec<TimeInterval>) -> Option<Self> {
        if blocks.is_empty() {
            return None;
        }
        blocks.sort_by_key(|b| b.start());
        Some(Self { blocks })
    }

    pub fn blocks(&self) -> &[TimeInterval] {
        &self.blocks
    }

    /// First simulated minute.
    pub fn day_start(&self) -> u32 {
        self.blocks[0].start()
    }

    /// End of the simulated window (exclusive): the end of the last interval
    /// by start order, not necessarily the latest end.
    pub fn day_end(&self) -> u32 {
        self.blocks[self.blocks.len() - 1].end()
    }

    pub fn is_present(&self, minute: u32) -> bool {
        self.blocks.iter().any(|b| b.contains(minute))
    }
}
