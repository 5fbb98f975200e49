use crate::errors::{Result, ValidationError};
use crate::goals::goal_progress_model::{GoalEvaluation, GoalProgressRow, MonthProgressReport};
use crate::goals::goals_model::{Goal, GoalKind, GoalStatus, MonthRecord, NewMonthRecord};
use crate::goals::goals_traits::MonthRepositoryTrait;
use crate::payroll::salary_breakdown;
use crate::plans::period::days_in_month;
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;

/// Evaluate one goal as of a given day within its month.
///
/// Every division guards its denominator: a zero target or a zero as-of day
/// yields 0, never NaN or infinity. The returned percentage is raw and
/// unclamped; presentation clamping lives on [`GoalEvaluation`].
pub fn evaluate_goal(
    progress: u32,
    target: u32,
    as_of_day: u32,
    days_in_month: u32,
) -> GoalEvaluation {
    let percentage = if target > 0 {
        progress as f64 * 100.0 / target as f64
    } else {
        0.0
    };

    // Multiply before dividing so that projecting on the month's last day
    // returns the actual progress exactly.
    let projected_total = if as_of_day > 0 {
        progress as f64 * days_in_month as f64 / as_of_day as f64
    } else {
        0.0
    };

    let projected_percentage = if target > 0 && projected_total > 0.0 {
        projected_total * 100.0 / target as f64
    } else {
        0.0
    };

    GoalEvaluation {
        percentage,
        projected_total,
        projected_percentage,
        status: GoalStatus::derive(progress, target),
    }
}

pub struct MonthService<R: MonthRepositoryTrait> {
    month_repo: Arc<R>,
}

impl<R: MonthRepositoryTrait> MonthService<R> {
    pub fn new(month_repo: Arc<R>) -> Self {
        MonthService { month_repo }
    }

    pub fn get_months(&self) -> Result<Vec<MonthRecord>> {
        self.month_repo.load_months()
    }

    /// Create a month record for the picked year + month, seeded with the
    /// standard goal set at zero progress.
    ///
    /// Exactly one record may exist per calendar month; the check runs here,
    /// at creation time only.
    pub fn create_month(&self, new_month: NewMonthRecord) -> Result<MonthRecord> {
        if !(1..=12).contains(&new_month.month) {
            return Err(ValidationError::InvalidInput(format!(
                "Month {} is out of range 1-12",
                new_month.month
            ))
            .into());
        }

        let date = NaiveDate::from_ymd_opt(new_month.year, new_month.month, 1).ok_or_else(
            || {
                ValidationError::InvalidInput(format!(
                    "Invalid calendar month {}-{:02}",
                    new_month.year, new_month.month
                ))
            },
        )?;

        let mut months = self.month_repo.load_months()?;
        if months
            .iter()
            .any(|m| m.covers(new_month.year, new_month.month))
        {
            return Err(ValidationError::InvalidInput(format!(
                "A record for {}-{:02} already exists",
                new_month.year, new_month.month
            ))
            .into());
        }

        let record = MonthRecord {
            id: Uuid::new_v4().to_string(),
            name: new_month
                .name
                .unwrap_or_else(|| date.format("%B %Y").to_string()),
            date,
            goals: GoalKind::standard_set()
                .iter()
                .map(|kind| Goal::new(kind.display_name(), 0))
                .collect(),
        };

        log::debug!("creating month record {} ({})", record.name, record.id);
        months.push(record.clone());
        self.month_repo.save_months(&months)?;
        Ok(record)
    }

    pub fn rename_month(&self, month_id: &str, name: &str) -> Result<MonthRecord> {
        self.update_month(month_id, |m| {
            m.name = name.to_string();
            Ok(())
        })
    }

    /// Move the month's anchor date. The date doubles as the default "as of"
    /// day for projections. Calendar-month uniqueness is not re-checked here.
    pub fn redate_month(&self, month_id: &str, date: NaiveDate) -> Result<MonthRecord> {
        self.update_month(month_id, |m| {
            m.date = date;
            Ok(())
        })
    }

    /// Delete a month record together with the goals it owns.
    pub fn delete_month(&self, month_id: &str) -> Result<usize> {
        let mut months = self.month_repo.load_months()?;
        let before = months.len();
        months.retain(|m| m.id != month_id);
        if months.len() == before {
            return Err(ValidationError::NotFound(format!(
                "Month '{}' not found",
                month_id
            ))
            .into());
        }
        self.month_repo.save_months(&months)?;
        Ok(before - months.len())
    }

    pub fn set_goal_progress(
        &self,
        month_id: &str,
        goal_id: &str,
        progress: u32,
    ) -> Result<MonthRecord> {
        self.update_goal(month_id, goal_id, |g| g.progress = progress)
    }

    pub fn set_goal_target(
        &self,
        month_id: &str,
        goal_id: &str,
        target: u32,
    ) -> Result<MonthRecord> {
        self.update_goal(month_id, goal_id, |g| g.target = target)
    }

    /// Evaluate a month on a specific date.
    ///
    /// Uses `as_of.day()` as the elapsed-day count and the month's own
    /// calendar length for projection. When the as-of day is the month's
    /// final day, goals with an unmet positive target report the terminal
    /// `NotCompleted` status.
    pub fn month_report(&self, month: &MonthRecord, as_of: NaiveDate) -> MonthProgressReport {
        let total_days = days_in_month(month.date.year(), month.date.month());
        let as_of_day = as_of.day().min(total_days);
        let month_closed = as_of_day >= total_days;

        let rows = month
            .goals
            .iter()
            .map(|goal| {
                let mut evaluation =
                    evaluate_goal(goal.progress, goal.target, as_of_day, total_days);
                if month_closed && goal.target > 0 && goal.progress < goal.target {
                    evaluation.status = GoalStatus::NotCompleted;
                }
                GoalProgressRow {
                    goal_id: goal.id.clone(),
                    goal_name: goal.name.clone(),
                    progress: goal.progress,
                    target: goal.target,
                    evaluation,
                }
            })
            .collect();

        MonthProgressReport {
            month_id: month.id.clone(),
            month_name: month.name.clone(),
            as_of,
            as_of_day,
            days_in_month: total_days,
            rows,
            salary: salary_breakdown(&month.goals),
        }
    }

    fn update_month(
        &self,
        month_id: &str,
        mutate: impl FnOnce(&mut MonthRecord) -> Result<()>,
    ) -> Result<MonthRecord> {
        let mut months = self.month_repo.load_months()?;
        let month = months
            .iter_mut()
            .find(|m| m.id == month_id)
            .ok_or_else(|| {
                ValidationError::NotFound(format!("Month '{}' not found", month_id))
            })?;
        mutate(month)?;
        let updated = month.clone();
        self.month_repo.save_months(&months)?;
        Ok(updated)
    }

    fn update_goal(
        &self,
        month_id: &str,
        goal_id: &str,
        mutate: impl FnOnce(&mut Goal),
    ) -> Result<MonthRecord> {
        self.update_month(month_id, |m| {
            let goal = m.goals.iter_mut().find(|g| g.id == goal_id).ok_or_else(|| {
                ValidationError::NotFound(format!(
                    "Goal '{}' not found in month '{}'",
                    goal_id, month_id
                ))
            })?;
            mutate(goal);
            Ok(())
        })
    }
}
