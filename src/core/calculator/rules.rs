//! Statutory break thresholds.
//!
//! After 6 hours of net work a break of 30 minutes is required, after 9 hours
//! 45 minutes. The tiers are fixed.

use serde::{Deserialize, Serialize};

/// `(net work threshold, required break)`, ascending.
pub const BREAK_TIERS: [(u32, u32); 2] = [(360, 30), (540, 45)];

/// Break required once `net_work` minutes have been worked.
pub fn required_break(net_work: u32) -> u32 {
    BREAK_TIERS
        .iter()
        .rev()
        .find(|(threshold, _)| net_work >= *threshold)
        .map_or(0, |(_, required)| *required)
}

/// Smallest tier threshold strictly above `net_work`, if any.
pub fn next_threshold(net_work: u32) -> Option<u32> {
    BREAK_TIERS
        .iter()
        .map(|(threshold, _)| *threshold)
        .find(|threshold| *threshold > net_work)
}

/// How an absence outside a qualifying gap is treated while a break is owed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsenceRule {
    /// Only absence inside a gap of at least 15 minutes pays off the break.
    #[default]
    Strict,
    /// Every absent minute pays off the owed break.
    Lenient,
}
