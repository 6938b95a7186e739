//! Status lines printed by the CLI handlers.
//!
//! Results go to stdout; warnings and errors go to stderr so `calc --json`
//! output stays parseable.

use crate::utils::colors::{GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";
const BLUE: &str = "\x1b[34m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => BLUE,
            Tone::Success => GREEN,
            Tone::Warning => YELLOW,
            Tone::Error => RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Warning | Tone::Error)
    }
}

fn render(tone: Tone, msg: &dyn fmt::Display) -> String {
    format!("{}{}{} {}{}", tone.color(), BOLD, tone.icon(), RESET, msg)
}

fn emit(tone: Tone, msg: &dyn fmt::Display) {
    let line = render(tone, msg);
    if tone.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Tone::Error, &msg);
}

/// Title line above the `calc` summary.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}=== {msg} ==={RESET}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_resets_color_before_message() {
        let line = render(Tone::Warning, &"config missing");
        assert!(line.starts_with(YELLOW));
        assert!(line.ends_with(&format!("⚠️ {RESET}config missing")));
    }

    #[test]
    fn test_only_warnings_and_errors_go_to_stderr() {
        assert!(!Tone::Info.to_stderr());
        assert!(!Tone::Success.to_stderr());
        assert!(Tone::Warning.to_stderr());
        assert!(Tone::Error.to_stderr());
    }
}
