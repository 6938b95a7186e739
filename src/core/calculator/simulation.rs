//! Break-rule engine.
//!
//! The day is evaluated minute by minute from the first start to the end of
//! the last interval. Each minute, in this order:
//!
//! 1. with a target set, stop as soon as net work has reached it;
//! 2. presence is tested (any interval contains the minute);
//! 3. the required break is looked up from net work so far;
//! 4. if the accumulated break is below the requirement the net clock is
//!    frozen: presence is deducted and counted as break, absence only counts
//!    inside a qualifying gap; otherwise presence adds net work and absence
//!    inside a qualifying gap banks break credit.
//!
//! [`SimulationState::tick`] is that rule for a single minute. [`Simulator`]
//! produces the same result by scanning the sorted interval and gap
//! boundaries and advancing whole runs of minutes whose outcome is identical.

use crate::core::calculator::gaps::BreakGap;
use crate::core::calculator::rules::{AbsenceRule, next_threshold, required_break};
use crate::models::day_report::WorkStats;
use crate::models::work_day::WorkDay;
use tracing::{debug, trace};

/// Counters of one simulation run. Owned by a single run, never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationState {
    pub net_work: u32,
    pub break_accumulator: u32,
    pub deduction: u32,
    pub gross_presence: u32,
}

impl SimulationState {
    pub fn stats(&self) -> WorkStats {
        WorkStats {
            gross_presence: self.gross_presence,
            net_work: self.net_work,
            break_accumulator: self.break_accumulator,
            deduction: self.deduction,
        }
    }

    /// Whether net work is frozen at the current counters.
    pub fn in_forced_break(&self) -> bool {
        self.break_accumulator < required_break(self.net_work)
    }

    /// Apply the rules to one minute.
    pub fn tick(&mut self, present: bool, in_gap: bool, rule: AbsenceRule) {
        if present {
            self.gross_presence += 1;
        }

        if self.in_forced_break() {
            if present {
                self.deduction += 1;
                self.break_accumulator += 1;
            } else if in_gap || rule == AbsenceRule::Lenient {
                self.break_accumulator += 1;
            }
        } else if present {
            self.net_work += 1;
        } else if in_gap {
            self.break_accumulator += 1;
        }
    }

    /// Advance over `[span.from, span.to)`, where presence and gap membership
    /// do not change. Returns the minute at which `stop` was found reached.
    fn advance(&mut self, span: &Span, rule: AbsenceRule, stop: Option<u32>) -> Option<u32> {
        let mut at = span.from;

        while at < span.to {
            if let Some(target) = stop
                && self.net_work >= target
            {
                return Some(at);
            }

            let left = span.to - at;
            let owed = required_break(self.net_work).saturating_sub(self.break_accumulator);

            let step = match (span.present, owed > 0) {
                (true, true) => {
                    debug!(minute = at, net_work = self.net_work, owed, "forced break while present");
                    let k = left.min(owed);
                    self.gross_presence += k;
                    self.deduction += k;
                    self.break_accumulator += k;
                    k
                }
                (true, false) => {
                    // Net work may not run past the next tier or the target.
                    let mut k = left;
                    if let Some(threshold) = next_threshold(self.net_work) {
                        k = k.min(threshold - self.net_work);
                    }
                    if let Some(target) = stop {
                        k = k.min(target - self.net_work);
                    }
                    self.gross_presence += k;
                    self.net_work += k;
                    k
                }
                (false, _) if span.in_gap => {
                    self.break_accumulator += left;
                    left
                }
                (false, true) if rule == AbsenceRule::Lenient => {
                    let k = left.min(owed);
                    self.break_accumulator += k;
                    k
                }
                (false, _) => left,
            };

            trace!(minute = at, step, state = ?self, "advanced");
            at += step;
        }

        None
    }
}

/// Minutes `[from, to)` with constant presence and gap membership.
#[derive(Debug, Clone, Copy)]
struct Span {
    from: u32,
    to: u32,
    present: bool,
    in_gap: bool,
}

/// Boundary of an interval or a gap; deltas are +1 on open, -1 on close.
#[derive(Debug, Clone, Copy)]
struct Edge {
    at: u32,
    presence: i32,
    gap: i32,
}

fn collect_edges(day: &WorkDay, gaps: &[BreakGap]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(2 * (day.blocks().len() + gaps.len()));
    for b in day.blocks() {
        edges.push(Edge { at: b.start(), presence: 1, gap: 0 });
        edges.push(Edge { at: b.end(), presence: -1, gap: 0 });
    }
    for g in gaps {
        edges.push(Edge { at: g.start, presence: 0, gap: 1 });
        edges.push(Edge { at: g.end, presence: 0, gap: -1 });
    }
    edges.sort_by_key(|e| e.at);
    edges
}

/// Outcome of a target-stopping run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSearch {
    /// First minute at whose start net work already met the target.
    Reached { minute: u32 },
    /// The simulated span ended first.
    NotReached,
}

/// Stateless entry point; every call starts from zeroed counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    rule: AbsenceRule,
}

impl Simulator {
    pub fn new(rule: AbsenceRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> AbsenceRule {
        self.rule
    }

    /// Full statistics for the whole simulated span.
    pub fn simulate(&self, day: &WorkDay, gaps: &[BreakGap]) -> WorkStats {
        let (state, _) = self.run(day, gaps, None);
        state.stats()
    }

    /// First minute at which net work reaches `target`.
    pub fn simulate_until(&self, day: &WorkDay, gaps: &[BreakGap], target: u32) -> TargetSearch {
        match self.run(day, gaps, Some(target)) {
            (_, Some(minute)) => TargetSearch::Reached { minute },
            (_, None) => TargetSearch::NotReached,
        }
    }

    fn run(&self, day: &WorkDay, gaps: &[BreakGap], stop: Option<u32>) -> (SimulationState, Option<u32>) {
        let day_end = day.day_end();
        let edges = collect_edges(day, gaps);
        let mut pending = edges.iter().peekable();

        let mut state = SimulationState::default();
        let (mut presence, mut in_gaps) = (0i32, 0i32);
        let mut cursor = day.day_start();

        while cursor < day_end {
            while let Some(edge) = pending.next_if(|e| e.at <= cursor) {
                presence += edge.presence;
                in_gaps += edge.gap;
            }
            let to = pending.peek().map_or(day_end, |e| e.at.min(day_end));

            let span = Span {
                from: cursor,
                to,
                present: presence > 0,
                in_gap: in_gaps > 0,
            };
            if let Some(minute) = state.advance(&span, self.rule, stop) {
                debug!(minute, "target reached");
                return (state, Some(minute));
            }
            cursor = to;
        }

        debug!(?state, "simulation finished");
        (state, None)
    }
}
