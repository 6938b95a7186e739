//! Time utilities: parsing HH:MM, minute-of-day conversions, hour targets.

use crate::errors::{AppError, AppResult};
use crate::models::interval::MINUTES_PER_DAY;
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// `"HH:MM"` -> minutes since midnight, failing fast on anything else.
pub fn parse_minute_of_day(t: &str) -> AppResult<u32> {
    parse_time(t)
        .map(minute_of_day)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_minute(input: Option<&str>) -> AppResult<Option<u32>> {
    input.map(parse_minute_of_day).transpose()
}

/// Minute index (possibly past midnight) -> wall clock.
pub fn clock_of(minute: u32) -> NaiveTime {
    let m = minute % MINUTES_PER_DAY;
    NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or_default()
}

/// Hours as typed by the user, rounded to whole minutes.
pub fn hours_to_minutes(hours: f64) -> AppResult<u32> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(AppError::InvalidTarget(hours.to_string()));
    }
    let minutes = (hours * 60.0).round();
    if minutes > u32::MAX as f64 {
        return Err(AppError::InvalidTarget(hours.to_string()));
    }
    Ok(minutes as u32)
}

pub fn parse_target_hours(s: &str) -> AppResult<u32> {
    let hours: f64 = s
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| AppError::InvalidTarget(s.to_string()))?;
    hours_to_minutes(hours)
}
