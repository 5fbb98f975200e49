use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plans::period::{PeriodWindow, PlanPeriod};

/// A branch/store plan: a 100% monetary target and the cumulative sum
/// achieved so far.
///
/// Which period the plan covers is decided by its position on the plan
/// board (slot 0 = whole month, slots 1-3 = decades), not by a stored field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    pub id: String,
    pub name: String,
    /// The 100% target value
    pub plan100: f64,
    /// Actual-to-date cumulative sum
    pub actual_sum: f64,
}

impl PlanRecord {
    pub fn new(name: impl Into<String>, plan100: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            plan100,
            actual_sum: 0.0,
        }
    }
}

/// One of the three target thresholds a plan is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetTier {
    Full,
    Ninety,
    Eighty,
}

impl TargetTier {
    pub fn all() -> [TargetTier; 3] {
        [TargetTier::Full, TargetTier::Ninety, TargetTier::Eighty]
    }

    /// Fraction of the 100% target this tier represents.
    pub fn factor(&self) -> f64 {
        match self {
            TargetTier::Full => 1.0,
            TargetTier::Ninety => 0.9,
            TargetTier::Eighty => 0.8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TargetTier::Full => "100%",
            TargetTier::Ninety => "90%",
            TargetTier::Eighty => "80%",
        }
    }
}

/// Evaluation of one plan tier against a period window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierEvaluation {
    pub tier: TargetTier,
    /// Target value at this tier (plan100 scaled by the tier factor)
    pub target: f64,
    /// Raw completion percentage against the tier target
    pub actual_percent: f64,
    /// Pace-normalized percentage; above 100 means ahead of pace
    pub temp_percent: f64,
    /// Target minus actual; negative when overachieved
    pub remainder: f64,
    /// Daily sum required to close a positive remainder by period end
    pub daily_rate: f64,
}

/// Three-tier evaluation of one plan record on a reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub plan_id: String,
    pub plan_name: String,
    pub period: PlanPeriod,
    pub reference_date: NaiveDate,
    pub window: PeriodWindow,
    pub tiers: Vec<TierEvaluation>,
}
