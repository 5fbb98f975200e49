pub mod goal_progress_model;
pub mod goals_model;
pub mod goals_service;
pub mod goals_traits;

pub use goal_progress_model::{GoalEvaluation, GoalProgressRow, MonthProgressReport};
pub use goals_model::{Goal, GoalKind, GoalStatus, MonthRecord, NewMonthRecord};
pub use goals_service::{evaluate_goal, MonthService};
pub use goals_traits::MonthRepositoryTrait;
