use crate::errors::{Result, ValidationError};
use crate::plans::period::{resolve_window, PeriodWindow, PlanPeriod};
use crate::plans::plans_model::{PlanRecord, PlanReport, TargetTier, TierEvaluation};
use crate::plans::plans_traits::PlanRepositoryTrait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Evaluate one plan tier against a period window.
///
/// Same division policy as the goal calculator: every denominator is
/// guarded, so a zero target, an unstarted period or an elapsed period all
/// produce 0 rather than NaN or infinity. A negative remainder (target
/// already met) floors the daily rate at 0.
pub fn evaluate_tier(tier: TargetTier, plan100: f64, actual_sum: f64, window: &PeriodWindow) -> TierEvaluation {
    let target = plan100 * tier.factor();

    let actual_percent = if target > 0.0 {
        actual_sum / target * 100.0
    } else {
        0.0
    };

    // "If you continued at this pace for the whole period, what percentage
    // would you land on": actual% scaled by period/elapsed.
    let temp_percent = if window.days_passed > 0 && window.days_in_period > 0 {
        actual_percent * window.days_in_period as f64 / window.days_passed as f64
    } else {
        0.0
    };

    let remainder = target - actual_sum;

    let daily_rate = if window.days_remaining > 0 {
        remainder.max(0.0) / window.days_remaining as f64
    } else {
        0.0
    };

    TierEvaluation {
        tier,
        target,
        actual_percent,
        temp_percent,
        remainder,
        daily_rate,
    }
}

pub struct PlanService<R: PlanRepositoryTrait> {
    plan_repo: Arc<R>,
}

impl<R: PlanRepositoryTrait> PlanService<R> {
    pub fn new(plan_repo: Arc<R>) -> Self {
        PlanService { plan_repo }
    }

    pub fn get_plans(&self) -> Result<Vec<PlanRecord>> {
        self.plan_repo.load_plans()
    }

    pub fn create_plan(&self, name: &str, plan100: f64) -> Result<PlanRecord> {
        if !plan100.is_finite() || plan100 < 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "Plan target must be a non-negative number, got {}",
                plan100
            ))
            .into());
        }
        let plan = PlanRecord::new(name, plan100);
        let mut plans = self.plan_repo.load_plans()?;
        log::debug!("creating plan {} ({})", plan.name, plan.id);
        plans.push(plan.clone());
        self.plan_repo.save_plans(&plans)?;
        Ok(plan)
    }

    pub fn set_plan_target(&self, plan_id: &str, plan100: f64) -> Result<PlanRecord> {
        if !plan100.is_finite() || plan100 < 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "Plan target must be a non-negative number, got {}",
                plan100
            ))
            .into());
        }
        self.update_plan(plan_id, |p| p.plan100 = plan100)
    }

    pub fn set_actual_sum(&self, plan_id: &str, actual_sum: f64) -> Result<PlanRecord> {
        if !actual_sum.is_finite() || actual_sum < 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "Actual sum must be a non-negative number, got {}",
                actual_sum
            ))
            .into());
        }
        self.update_plan(plan_id, |p| p.actual_sum = actual_sum)
    }

    pub fn delete_plan(&self, plan_id: &str) -> Result<usize> {
        let mut plans = self.plan_repo.load_plans()?;
        let before = plans.len();
        plans.retain(|p| p.id != plan_id);
        if plans.len() == before {
            return Err(
                ValidationError::NotFound(format!("Plan '{}' not found", plan_id)).into(),
            );
        }
        self.plan_repo.save_plans(&plans)?;
        Ok(before - plans.len())
    }

    /// Evaluate one plan for a given period on a reference date, across all
    /// three target tiers.
    pub fn plan_report(
        &self,
        plan: &PlanRecord,
        period: PlanPeriod,
        reference: NaiveDate,
    ) -> PlanReport {
        let window = resolve_window(period, reference);
        let tiers = TargetTier::all()
            .iter()
            .map(|tier| evaluate_tier(*tier, plan.plan100, plan.actual_sum, &window))
            .collect();

        PlanReport {
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            period,
            reference_date: reference,
            window,
            tiers,
        }
    }

    /// Evaluate a plan board: slot 0 is the whole-month plan, slots 1-3 the
    /// decades. Records beyond the four known slots are skipped.
    pub fn board_report(&self, plans: &[PlanRecord], reference: NaiveDate) -> Vec<PlanReport> {
        plans
            .iter()
            .enumerate()
            .filter_map(|(index, plan)| {
                let period = PlanPeriod::from_index(index)?;
                Some(self.plan_report(plan, period, reference))
            })
            .collect()
    }

    fn update_plan(
        &self,
        plan_id: &str,
        mutate: impl FnOnce(&mut PlanRecord),
    ) -> Result<PlanRecord> {
        let mut plans = self.plan_repo.load_plans()?;
        let plan = plans.iter_mut().find(|p| p.id == plan_id).ok_or_else(|| {
            ValidationError::NotFound(format!("Plan '{}' not found", plan_id))
        })?;
        mutate(plan);
        let updated = plan.clone();
        self.plan_repo.save_plans(&plans)?;
        Ok(updated)
    }
}
