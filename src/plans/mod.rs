pub mod period;
pub mod plans_model;
pub mod plans_service;
pub mod plans_traits;

pub use period::{days_in_month, resolve_window, PeriodWindow, PlanPeriod};
pub use plans_model::{PlanRecord, PlanReport, TargetTier, TierEvaluation};
pub use plans_service::{evaluate_tier, PlanService};
pub use plans_traits::PlanRepositoryTrait;
