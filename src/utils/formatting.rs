//! Formatting utilities used for CLI output.

use crate::utils::time::clock_of;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Signed `h:mm h`, optionally followed by decimal hours.
///
/// e.g. `7:30 h (7.50)` or `-0:45 h (-0.75)`
pub fn format_duration(mins: i64, show_decimal: bool) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if show_decimal {
        let decimal = mins as f64 / 60.0;
        format!("{}{}:{:02} h ({:.2})", sign, hours, minutes, decimal)
    } else {
        format!("{}{}:{:02} h", sign, hours, minutes)
    }
}

pub fn format_break_minutes(mins: u32) -> String {
    format!("{} min", mins)
}

/// Minute index -> `HH:MM`, wrapping past midnight.
pub fn format_clock(minute: u32) -> String {
    clock_of(minute).format("%H:%M").to_string()
}
