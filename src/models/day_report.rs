use serde::Serialize;

/// Terminal counters of a full simulation run, all in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkStats {
    pub gross_presence: u32,
    pub net_work: u32,
    pub break_accumulator: u32,
    pub deduction: u32,
}

/// When the target net work will be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimalEnd {
    /// Today's recorded presence already covers the target.
    AlreadyMet,
    /// Clock time (minute-of-day, 0..1440) at which the target is first met.
    At { minute: u32 },
    /// The simulated span ends before the target is reached.
    NotReached,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub stats: WorkStats,
    pub target_minutes: u32,
    /// `net_work - target_minutes`
    pub saldo: i64,
    pub optimal_end: OptimalEnd,
}

/// What the presentation layer receives for one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayOutcome {
    /// No usable interval after normalization. Distinct from a zero result.
    NoData,
    Computed(DayReport),
}

impl DayOutcome {
    pub fn report(&self) -> Option<&DayReport> {
        match self {
            DayOutcome::NoData => None,
            DayOutcome::Computed(r) => Some(r),
        }
    }
}
