use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Minutes in one clock day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Upper bound (exclusive) for any interval end: one wraparound past midnight.
pub const MAX_SPAN_END: u32 = 2 * MINUTES_PER_DAY;

/// One continuous span of presence, in minutes-of-day.
///
/// `end` may exceed 1440 when the span crosses midnight. Half-open: the
/// minute `end` itself is not part of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeInterval {
    start: u32,
    end: u32,
}

impl TimeInterval {
    /// Build an interval, enforcing `start < end < 2880`.
    pub fn new(start: u32, end: u32) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::InvalidInterval {
                start,
                end,
                reason: "end must be after start",
            });
        }
        if start >= MINUTES_PER_DAY || end >= MAX_SPAN_END {
            return Err(AppError::InvalidInterval {
                start,
                end,
                reason: "span leaves the supported two-day window",
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }
}
