use crate::models::day_report::WorkStats;

/// Saldo: signed difference between net work and target.
pub fn calculate_saldo(stats: &WorkStats, target: u32) -> i64 {
    i64::from(stats.net_work) - i64::from(target)
}
