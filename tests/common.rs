#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworktime::core::calculator::gaps::analyze_gaps;
use rworktime::core::calculator::rules::AbsenceRule;
use rworktime::core::calculator::simulation::Simulator;
use rworktime::models::day_report::WorkStats;
use rworktime::models::entry::RawEntry;
use rworktime::models::interval::TimeInterval;
use rworktime::models::work_day::WorkDay;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktime")
}

/// `"09:00"` -> 540
pub fn hm(s: &str) -> u32 {
    rworktime::utils::time::parse_minute_of_day(s).expect("valid HH:MM")
}

/// Closed intervals from `(start, end)` clock pairs, wrapping past midnight.
pub fn day(spans: &[(&str, &str)]) -> WorkDay {
    let blocks = spans
        .iter()
        .map(|(s, e)| {
            let (s, mut e) = (hm(s), hm(e));
            if e < s {
                e += 1440;
            }
            TimeInterval::new(s, e).expect("valid interval")
        })
        .collect();
    WorkDay::new(blocks).expect("non-empty day")
}

pub fn stats_for(spans: &[(&str, &str)], rule: AbsenceRule) -> WorkStats {
    let d = day(spans);
    Simulator::new(rule).simulate(&d, &analyze_gaps(&d))
}

pub fn entries(specs: &[&str]) -> Vec<RawEntry> {
    specs
        .iter()
        .map(|s| s.parse().expect("valid entry shape"))
        .collect()
}

/// Path of a config file inside `dir` that does not exist yet.
pub fn missing_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path: PathBuf = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path.to_string_lossy().to_string()
}
