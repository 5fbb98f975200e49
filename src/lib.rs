//! Personal finance & goal-tracking dashboard core.
//!
//! Pure period-relative progress and projection calculators (goal
//! completion, linear day-based projection, decade plan remainder and
//! daily-rate math, flat-tax salary figures) plus the record store and CSV
//! report writers that surround them. The calculators never touch storage;
//! callers feed them records and a reference date and render the results.

pub mod errors;
pub mod export;
pub mod goals;
pub mod payroll;
pub mod plans;
pub mod storage;

pub use goals::{evaluate_goal, Goal, GoalKind, GoalStatus, MonthRecord, MonthService};
pub use payroll::{multiplier_for, net_of, salary_breakdown};
pub use plans::{evaluate_tier, resolve_window, PlanPeriod, PlanRecord, PlanService};
pub use storage::LocalStore;
