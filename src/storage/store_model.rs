use serde::{Deserialize, Serialize};

use crate::goals::goals_model::{Goal, GoalKind, MonthRecord};
use crate::plans::plans_model::PlanRecord;

/// Snapshot format version; bumped on breaking shape changes.
pub const DATA_VERSION: u32 = 1;

/// The persisted root document: full record arrays in one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub version: u32,
    pub months: Vec<MonthRecord>,
    pub plans: Vec<PlanRecord>,
}

/// The built-in dataset the store falls back to when the snapshot is
/// missing or unreadable: one sample month with the standard goal set and
/// the canonical four-slot plan board.
pub fn seed_data() -> DashboardData {
    let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    DashboardData {
        version: DATA_VERSION,
        months: vec![MonthRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: "January 2026".to_string(),
            date,
            goals: GoalKind::standard_set()
                .iter()
                .map(|kind| Goal::new(kind.display_name(), 0))
                .collect(),
        }],
        plans: vec![
            PlanRecord::new("Branch plan", 1_000_000.0),
            PlanRecord::new("Decade 1", 350_000.0),
            PlanRecord::new("Decade 2", 350_000.0),
            PlanRecord::new("Decade 3", 300_000.0),
        ],
    }
}
