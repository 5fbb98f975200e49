use serde::{Deserialize, Serialize};

/// Flat deduction applied to every gross sum.
pub const TAX_RATE: f64 = 0.12;

/// Net fraction kept after the flat deduction.
pub const NET_RATE: f64 = 1.0 - TAX_RATE;

/// One goal's contribution to the month's gross salary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryLine {
    pub goal_id: String,
    pub goal_name: String,
    pub progress: u32,
    /// Per-unit contribution looked up from the goal vocabulary
    pub multiplier: f64,
    /// progress * multiplier
    pub gross_amount: f64,
}

/// Derived salary figures for a month: per-goal lines plus totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBreakdown {
    pub lines: Vec<SalaryLine>,
    pub gross_total: f64,
    /// gross_total after the flat deduction
    pub net_total: f64,
}
