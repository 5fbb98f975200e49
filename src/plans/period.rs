use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days in the calendar month containing `(year, month)`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .unwrap_or(first);
    (next - first).num_days().max(0) as u32
}

/// The tracking period a plan record covers: the whole month or one of its
/// three decades (day ranges 1-10, 11-20, 21-end).
///
/// The period is positional: slot 0 of a plan board is the whole-month plan,
/// slots 1-3 are the decades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanPeriod {
    FullMonth,
    Decade1,
    Decade2,
    Decade3,
}

impl PlanPeriod {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlanPeriod::FullMonth),
            1 => Some(PlanPeriod::Decade1),
            2 => Some(PlanPeriod::Decade2),
            3 => Some(PlanPeriod::Decade3),
            _ => None,
        }
    }

    /// Inclusive first/last day of this period within the reference month.
    pub fn bounds(&self, reference: NaiveDate) -> (u32, u32) {
        let last = days_in_month(reference.year(), reference.month());
        match self {
            PlanPeriod::FullMonth => (1, last),
            PlanPeriod::Decade1 => (1, 10),
            PlanPeriod::Decade2 => (11, 20),
            PlanPeriod::Decade3 => (21, last),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanPeriod::FullMonth => "month",
            PlanPeriod::Decade1 => "days 1-10",
            PlanPeriod::Decade2 => "days 11-20",
            PlanPeriod::Decade3 => "days 21-end",
        }
    }
}

/// Elapsed/total/remaining day counts of a period relative to a reference
/// date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodWindow {
    pub days_passed: u32,
    pub days_in_period: u32,
    pub days_remaining: u32,
}

/// Resolve the window of `period` as of `reference`.
///
/// Tri-state on the reference day: a period entirely in the future reports
/// zero elapsed days, a period entirely in the past reports fully elapsed.
/// Both extremes keep the daily-rate math defined (a zero `days_remaining`
/// yields a daily rate of 0 downstream, never a division by zero).
pub fn resolve_window(period: PlanPeriod, reference: NaiveDate) -> PeriodWindow {
    let (start, end) = period.bounds(reference);
    let days_in_period = end - start + 1;
    let day = reference.day();

    if day < start {
        PeriodWindow {
            days_passed: 0,
            days_in_period,
            days_remaining: days_in_period,
        }
    } else if day > end {
        PeriodWindow {
            days_passed: days_in_period,
            days_in_period,
            days_remaining: 0,
        }
    } else {
        PeriodWindow {
            days_passed: day - start + 1,
            days_in_period,
            days_remaining: end - day,
        }
    }
}
