//! Turns raw `HH:MM` entries into the two interval sets the simulator works on.

use crate::errors::AppResult;
use crate::models::entry::RawEntry;
use crate::models::interval::{MINUTES_PER_DAY, TimeInterval};
use crate::models::work_day::WorkDay;
use crate::utils::time::{parse_minute_of_day, parse_optional_minute};
use tracing::{debug, warn};

/// Normalized presence for one computation.
///
/// `real` ends open entries at the current clock minute; `forecast` extends
/// them by a full day so the projector can look ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub real: Option<WorkDay>,
    pub forecast: Option<WorkDay>,
}

/// Next-day wraparound: an end earlier than its start belongs to tomorrow.
fn wrap_end(start: u32, end: u32) -> u32 {
    if end < start { end + MINUTES_PER_DAY } else { end }
}

/// Build both interval sets from raw entries.
///
/// Entries without a start (missing or blank) are dropped. A malformed time
/// fails the whole call. `now` is the current minute-of-day and is only read for open entries.
pub fn normalize(entries: &[RawEntry], now: u32) -> AppResult<Normalized> {
    let mut real = Vec::with_capacity(entries.len());
    let mut forecast = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(start) = parse_optional_minute(entry.start())? else {
            continue;
        };

        match entry.end() {
            Some(end) => {
                let end = wrap_end(start, parse_minute_of_day(end)?);
                if end == start {
                    warn!(start, "dropping zero-length entry");
                    continue;
                }
                let block = TimeInterval::new(start, end)?;
                real.push(block);
                forecast.push(block);
            }
            None => {
                let end = wrap_end(start, now % MINUTES_PER_DAY);
                if end > start {
                    real.push(TimeInterval::new(start, end)?);
                } else {
                    debug!(start, "open entry starts now, nothing worked yet");
                }
                forecast.push(TimeInterval::new(start, start + MINUTES_PER_DAY)?);
            }
        }
    }

    let normalized = Normalized {
        real: WorkDay::new(real),
        forecast: WorkDay::new(forecast),
    };
    debug!(
        real = normalized.real.as_ref().map_or(0, |d| d.blocks().len()),
        forecast = normalized.forecast.as_ref().map_or(0, |d| d.blocks().len()),
        "normalized entries"
    );
    Ok(normalized)
}
