use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::day_report::{DayOutcome, DayReport, OptimalEnd};
use crate::models::entry::RawEntry;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_deduction, color_for_saldo, colorize_optional, paint};
use crate::utils::formatting::{bold, format_break_minutes, format_clock, format_duration, pad_right};
use crate::utils::path::expand_tilde;
use crate::utils::time::{hours_to_minutes, minute_of_day, parse_minute_of_day, parse_target_hours};
use chrono::Local;
use std::fs;

const LABEL_WIDTH: usize = 18;

/// Handle the `calc` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        entries,
        file,
        target,
        now,
        json,
    } = cmd
    {
        let mut all = match file {
            Some(path) => load_entries(path)?,
            None => Vec::new(),
        };
        all.extend(entries.iter().cloned());

        let target = match target {
            Some(t) => parse_target_hours(t)?,
            None => hours_to_minutes(cfg.target_hours)?,
        };
        let now = match now {
            Some(n) => parse_minute_of_day(n)?,
            None => minute_of_day(Local::now().time()),
        };

        let outcome = Core::build_day_report(&all, target, now, cfg.absence_rule)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print_outcome(&outcome, target, cfg.show_decimal);
        }
    }
    Ok(())
}

fn load_entries(path: &str) -> AppResult<Vec<RawEntry>> {
    let content = fs::read_to_string(expand_tilde(path))?;
    // YAML is a superset of JSON, one parser covers both.
    Ok(serde_yaml::from_str(&content)?)
}

fn row(label: &str, value: &str) {
    println!("{} {}", pad_right(label, LABEL_WIDTH), value);
}

fn print_outcome(outcome: &DayOutcome, target: u32, show_decimal: bool) {
    header("Working time");
    row("Target:", &format_duration(i64::from(target), false));

    match outcome {
        DayOutcome::NoData => {
            row("Gross presence:", &colorize_optional("-"));
            row("Recognized break:", &colorize_optional("-"));
            row("Deduction:", &paint(&format_break_minutes(0), color_for_deduction(0)));
            row("Net work:", &colorize_optional("-"));
            row("Saldo:", &colorize_optional("-"));
            row("Optimal end:", &colorize_optional("--:--"));
        }
        DayOutcome::Computed(report) => print_report(report, show_decimal),
    }
}

fn print_report(report: &DayReport, show_decimal: bool) {
    let s = &report.stats;

    row(
        "Gross presence:",
        &format_duration(i64::from(s.gross_presence), show_decimal),
    );
    row("Recognized break:", &format_break_minutes(s.break_accumulator));
    row(
        "Deduction:",
        &paint(&format_break_minutes(s.deduction), color_for_deduction(s.deduction)),
    );
    row("Net work:", &format_duration(i64::from(s.net_work), show_decimal));

    let saldo = format_duration(report.saldo, show_decimal);
    let saldo = if report.saldo != 0 { bold(&saldo) } else { saldo };
    row("Saldo:", &paint(&saldo, color_for_saldo(report.saldo)));

    let end = match report.optimal_end {
        OptimalEnd::AlreadyMet => "target already met".to_string(),
        OptimalEnd::At { minute } => format_clock(minute),
        OptimalEnd::NotReached => colorize_optional("--:--"),
    };
    row("Optimal end:", &end);
}
