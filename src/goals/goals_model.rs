use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monthly quota-style goal owned by a [`MonthRecord`].
///
/// Status is never stored; it is derived from `(progress, target)` on every
/// read via [`Goal::status`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    /// Display name; also the multiplier lookup key (see [`GoalKind`])
    pub name: String,
    /// Units achieved so far this month
    pub progress: u32,
    /// Units required for completion ("end value")
    pub target: u32,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            progress: 0,
            target,
        }
    }

    /// Current status, recomputed from `(progress, target)`.
    ///
    /// A goal that regresses below target transitions back to `InProgress`;
    /// completion is not sticky.
    pub fn status(&self) -> GoalStatus {
        GoalStatus::derive(self.progress, self.target)
    }

    pub fn kind(&self) -> GoalKind {
        GoalKind::from_name(&self.name)
    }
}

/// Lifecycle status of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    /// Terminal reporting state: the month closed with an unmet target.
    /// Only produced by month-closure evaluation, never by live derivation.
    NotCompleted,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "NOT_STARTED",
            GoalStatus::InProgress => "IN_PROGRESS",
            GoalStatus::Completed => "COMPLETED",
            GoalStatus::NotCompleted => "NOT_COMPLETED",
        }
    }

    /// Live status derivation: `Completed` iff `target > 0` and
    /// `progress >= target`, else `InProgress` iff `progress > 0`,
    /// else `NotStarted`.
    pub fn derive(progress: u32, target: u32) -> Self {
        if target > 0 && progress >= target {
            GoalStatus::Completed
        } else if progress > 0 {
            GoalStatus::InProgress
        } else {
            GoalStatus::NotStarted
        }
    }
}

/// The fixed goal vocabulary with per-unit salary multipliers.
///
/// Unrecognized names map to [`GoalKind::Other`], which carries a zero
/// multiplier. Lookups are case-insensitive on the trimmed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalKind {
    Within5Minutes,
    NewConnections,
    Accessories,
    Insurance,
    TradeIn,
    Other,
}

impl GoalKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "within 5 minutes" => GoalKind::Within5Minutes,
            "new connections" => GoalKind::NewConnections,
            "accessories" => GoalKind::Accessories,
            "insurance" => GoalKind::Insurance,
            "trade-in" => GoalKind::TradeIn,
            _ => GoalKind::Other,
        }
    }

    /// Per-unit monetary contribution to gross salary.
    pub fn multiplier(&self) -> f64 {
        match self {
            GoalKind::Within5Minutes => 20000.0,
            GoalKind::NewConnections => 15000.0,
            GoalKind::Accessories => 10000.0,
            GoalKind::Insurance => 12000.0,
            GoalKind::TradeIn => 8000.0,
            GoalKind::Other => 0.0,
        }
    }

    /// Canonical display name for the known kinds.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalKind::Within5Minutes => "Within 5 minutes",
            GoalKind::NewConnections => "New connections",
            GoalKind::Accessories => "Accessories",
            GoalKind::Insurance => "Insurance",
            GoalKind::TradeIn => "Trade-in",
            GoalKind::Other => "Other",
        }
    }

    /// The standard goal set a fresh month starts with.
    pub fn standard_set() -> [GoalKind; 5] {
        [
            GoalKind::Within5Minutes,
            GoalKind::NewConnections,
            GoalKind::Accessories,
            GoalKind::Insurance,
            GoalKind::TradeIn,
        ]
    }
}

/// One tracked month: a display anchor date plus the goals it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    pub id: String,
    /// Display name, e.g. "July 2026"
    pub name: String,
    /// Display anchor; its day-of-month is the default "as of" day
    pub date: NaiveDate,
    pub goals: Vec<Goal>,
}

impl MonthRecord {
    /// Whether this record covers the given calendar month.
    pub fn covers(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

/// Creation request for a month record; the user picks year + month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMonthRecord {
    pub year: i32,
    pub month: u32,
    /// Optional display name; defaults to "<Month> <year>"
    pub name: Option<String>,
}
