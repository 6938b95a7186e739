use rworktime::core::calculator::gaps::analyze_gaps;
use rworktime::core::calculator::rules::{AbsenceRule, next_threshold, required_break};
use rworktime::core::calculator::simulation::{Simulator, TargetSearch};
use rworktime::models::day_report::WorkStats;

mod common;
use common::{day, hm, stats_for};

#[test]
fn test_required_break_tiers() {
    assert_eq!(required_break(0), 0);
    assert_eq!(required_break(359), 0);
    assert_eq!(required_break(360), 30);
    assert_eq!(required_break(539), 30);
    assert_eq!(required_break(540), 45);
    assert_eq!(required_break(900), 45);

    assert_eq!(next_threshold(0), Some(360));
    assert_eq!(next_threshold(360), Some(540));
    assert_eq!(next_threshold(540), None);
}

#[test]
fn test_single_block_crossing_six_hours() {
    let stats = stats_for(&[("09:00", "17:00")], AbsenceRule::Strict);

    assert_eq!(
        stats,
        WorkStats {
            gross_presence: 480,
            net_work: 450,
            break_accumulator: 30,
            deduction: 30,
        }
    );
}

#[test]
fn test_early_break_credit_covers_later_threshold() {
    let stats = stats_for(&[("09:00", "12:00"), ("12:30", "17:30")], AbsenceRule::Strict);

    assert_eq!(stats.break_accumulator, 30);
    assert_eq!(stats.deduction, 0);
    assert_eq!(stats.net_work, 480);
    assert_eq!(stats.gross_presence, 480);
}

#[test]
fn test_short_gap_does_not_pay_off_forced_break() {
    let stats = stats_for(&[("09:00", "15:00"), ("15:10", "18:00")], AbsenceRule::Strict);

    assert_eq!(stats.deduction, 30);
    assert_eq!(stats.gross_presence, 530);
    assert_eq!(stats.net_work, 500);
    assert_eq!(stats.break_accumulator, 30);
}

#[test]
fn test_lenient_rule_counts_short_gap_while_break_is_owed() {
    let stats = stats_for(&[("09:00", "15:00"), ("15:10", "18:00")], AbsenceRule::Lenient);

    // The 10 minute gap pays off a third of the owed break.
    assert_eq!(stats.break_accumulator, 30);
    assert_eq!(stats.deduction, 20);
    assert_eq!(stats.net_work, 510);
    assert_eq!(stats.gross_presence, 530);
}

#[test]
fn test_long_day_crosses_both_tiers() {
    let stats = stats_for(&[("07:00", "18:00")], AbsenceRule::Strict);

    assert_eq!(stats.gross_presence, 660);
    assert_eq!(stats.deduction, 45);
    assert_eq!(stats.break_accumulator, 45);
    assert_eq!(stats.net_work, 615);
}

#[test]
fn test_partial_break_is_topped_up_at_nine_hours() {
    // 30 minutes taken at noon; 15 more are owed once net work hits 9h.
    let stats = stats_for(&[("07:00", "12:00"), ("12:30", "18:00")], AbsenceRule::Strict);

    assert_eq!(stats.gross_presence, 630);
    assert_eq!(stats.deduction, 15);
    assert_eq!(stats.break_accumulator, 45);
    assert_eq!(stats.net_work, 615);
}

#[test]
fn test_short_gap_in_normal_mode_banks_nothing() {
    let stats = stats_for(&[("09:00", "10:00"), ("10:10", "11:00")], AbsenceRule::Strict);

    assert_eq!(stats.break_accumulator, 0);
    assert_eq!(stats.net_work, 110);
    assert_eq!(stats.deduction, 0);
}

#[test]
fn test_overnight_block() {
    let stats = stats_for(&[("22:00", "06:00")], AbsenceRule::Strict);

    assert_eq!(stats.gross_presence, 480);
    assert_eq!(stats.net_work, 450);
    assert_eq!(stats.deduction, 30);
}

#[test]
fn test_overlapping_blocks_count_presence_once() {
    let stats = stats_for(&[("09:00", "11:40"), ("10:00", "13:20")], AbsenceRule::Strict);

    assert_eq!(stats.gross_presence, 260);
    assert_eq!(stats.net_work, 260);
}

#[test]
fn test_simulated_window_ends_with_last_block_by_start() {
    // The nested block starts last, so the window closes at 11:00.
    let stats = stats_for(&[("09:00", "17:00"), ("10:00", "11:00")], AbsenceRule::Strict);

    assert_eq!(stats.gross_presence, 120);
    assert_eq!(stats.net_work, 120);
}

#[test]
fn test_simulation_is_idempotent() {
    let d = day(&[("08:15", "12:05"), ("12:40", "16:00"), ("16:05", "19:30")]);
    let gaps = analyze_gaps(&d);
    let sim = Simulator::default();

    assert_eq!(sim.simulate(&d, &gaps), sim.simulate(&d, &gaps));
}

#[test]
fn test_gap_analysis_keeps_only_qualifying_gaps() {
    let d = day(&[("08:00", "10:00"), ("10:14", "12:00"), ("12:15", "13:00"), ("14:00", "15:00")]);
    let gaps = analyze_gaps(&d);

    assert_eq!(gaps.len(), 2);
    assert_eq!((gaps[0].start, gaps[0].end), (hm("12:00"), hm("12:15")));
    assert_eq!(gaps[1].duration(), 60);
}

#[test]
fn test_gap_analysis_single_block_is_empty() {
    assert!(analyze_gaps(&day(&[("08:00", "16:00")])).is_empty());
}

#[test]
fn test_stop_at_target_reports_first_minute_met() {
    let d = day(&[("09:00", "17:00")]);
    let gaps = analyze_gaps(&d);
    let sim = Simulator::default();

    // 6h net at 15:00, 30 forced minutes, then 30 more minutes of work.
    assert_eq!(
        sim.simulate_until(&d, &gaps, 390),
        TargetSearch::Reached { minute: hm("16:00") }
    );
    assert_eq!(
        sim.simulate_until(&d, &gaps, 60),
        TargetSearch::Reached { minute: hm("10:00") }
    );
    assert_eq!(sim.simulate_until(&d, &gaps, 0), TargetSearch::Reached { minute: hm("09:00") });
}

#[test]
fn test_stop_at_target_not_reached() {
    let d = day(&[("09:00", "17:00")]);
    let gaps = analyze_gaps(&d);

    assert_eq!(Simulator::default().simulate_until(&d, &gaps, 451), TargetSearch::NotReached);
    // Met only after the last simulated minute: the check never fires.
    assert_eq!(Simulator::default().simulate_until(&d, &gaps, 450), TargetSearch::NotReached);
}
