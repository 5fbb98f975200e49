use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::goals::goals_model::GoalStatus;
use crate::payroll::SalaryBreakdown;

/// Evaluation of one goal as of a given day within its month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvaluation {
    /// Raw completion percentage (unclamped; may exceed 100)
    pub percentage: f64,
    /// Linear day-based projection of progress to month end
    pub projected_total: f64,
    /// Projected total as a percentage of target (unclamped)
    pub projected_percentage: f64,
    pub status: GoalStatus,
}

impl GoalEvaluation {
    /// Presentation percentage, clamped to `[0, 100]` for ring/arc display.
    pub fn display_percentage(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    /// Presentation projection percentage, clamped to `[0, 100]`.
    pub fn display_projected_percentage(&self) -> f64 {
        self.projected_percentage.clamp(0.0, 100.0)
    }
}

/// One row of a month report: a goal plus its evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressRow {
    pub goal_id: String,
    pub goal_name: String,
    pub progress: u32,
    pub target: u32,
    pub evaluation: GoalEvaluation,
}

/// Full evaluation of a month on a specific date: per-goal rows plus the
/// derived salary figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthProgressReport {
    pub month_id: String,
    pub month_name: String,
    pub as_of: NaiveDate,
    /// Day-of-month used for projection
    pub as_of_day: u32,
    pub days_in_month: u32,
    pub rows: Vec<GoalProgressRow>,
    pub salary: SalaryBreakdown,
}
