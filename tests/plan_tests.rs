/// Tests for period window resolution and the three-tier plan remainder
/// calculations.

#[cfg(test)]
mod period_window_tests {
    use goalfolio_core::plans::{resolve_window, PlanPeriod};

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decade_two_tri_state_in_a_thirty_day_month() {
        // Before the period: nothing elapsed
        let before = resolve_window(PlanPeriod::Decade2, date(2026, 6, 5));
        assert_eq!(before.days_passed, 0);
        assert_eq!(before.days_in_period, 10);
        assert_eq!(before.days_remaining, 10);

        // Inside the period: day 15 is the fifth day of days 11-20
        let inside = resolve_window(PlanPeriod::Decade2, date(2026, 6, 15));
        assert_eq!(inside.days_passed, 5);
        assert_eq!(inside.days_in_period, 10);
        assert_eq!(inside.days_remaining, 5);

        // After the period: fully elapsed
        let after = resolve_window(PlanPeriod::Decade2, date(2026, 6, 25));
        assert_eq!(after.days_passed, 10);
        assert_eq!(after.days_in_period, 10);
        assert_eq!(after.days_remaining, 0);
    }

    #[test]
    fn test_full_month_window() {
        let w = resolve_window(PlanPeriod::FullMonth, date(2026, 6, 15));
        assert_eq!(w.days_passed, 15);
        assert_eq!(w.days_in_period, 30);
        assert_eq!(w.days_remaining, 15);

        let last = resolve_window(PlanPeriod::FullMonth, date(2026, 2, 28));
        assert_eq!(last.days_remaining, 0);
    }
}

#[cfg(test)]
mod tier_evaluation_tests {
    use goalfolio_core::plans::{evaluate_tier, PeriodWindow, TargetTier};

    fn window(days_passed: u32, days_in_period: u32, days_remaining: u32) -> PeriodWindow {
        PeriodWindow {
            days_passed,
            days_in_period,
            days_remaining,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_met_target_needs_no_daily_rate() {
        // Target already reached: remainder 0, daily rate 0 in every
        // window, including one with nothing remaining.
        for w in [window(5, 10, 5), window(10, 10, 0), window(0, 10, 10)] {
            let eval = evaluate_tier(TargetTier::Full, 1000.0, 1000.0, &w);
            assert_eq!(eval.remainder, 0.0);
            assert_eq!(eval.daily_rate, 0.0, "never negative, never NaN");
            assert!(eval.daily_rate.is_finite());
        }
    }

    #[test]
    fn test_overachieved_target_floors_daily_rate_at_zero() {
        let eval = evaluate_tier(TargetTier::Full, 1000.0, 1200.0, &window(5, 10, 5));
        assert_eq!(eval.remainder, -200.0, "remainder may go negative");
        assert_eq!(eval.daily_rate, 0.0, "negative remainder floors to 0");
    }

    #[test]
    fn test_zero_target_yields_zero_percentages() {
        let eval = evaluate_tier(TargetTier::Full, 0.0, 500.0, &window(5, 10, 5));
        assert_eq!(eval.actual_percent, 0.0);
        assert_eq!(eval.temp_percent, 0.0);
        assert!(eval.actual_percent.is_finite());
    }

    #[test]
    fn test_pace_normalized_percent() {
        // 500 of 1000 at the midpoint of the period: on pace for exactly 100%
        let on_pace = evaluate_tier(TargetTier::Full, 1000.0, 500.0, &window(5, 10, 5));
        assert!(approx(on_pace.actual_percent, 50.0));
        assert!(approx(on_pace.temp_percent, 100.0));

        // Same sum earlier in the period: ahead of pace, above 100
        let ahead = evaluate_tier(TargetTier::Full, 1000.0, 500.0, &window(2, 10, 8));
        assert!(approx(ahead.temp_percent, 250.0));

        // Nothing elapsed yet: pace is undefined, reported as 0
        let future = evaluate_tier(TargetTier::Full, 1000.0, 500.0, &window(0, 10, 10));
        assert_eq!(future.temp_percent, 0.0);
    }

    #[test]
    fn test_daily_rate_closes_the_remainder() {
        let eval = evaluate_tier(TargetTier::Full, 1000.0, 400.0, &window(5, 10, 5));
        assert!(approx(eval.remainder, 600.0));
        assert!(approx(eval.daily_rate, 120.0), "600 left over 5 days");
    }

    #[test]
    fn test_tier_targets_scale_from_plan100() {
        let w = window(5, 10, 5);
        let full = evaluate_tier(TargetTier::Full, 1000.0, 450.0, &w);
        let ninety = evaluate_tier(TargetTier::Ninety, 1000.0, 450.0, &w);
        let eighty = evaluate_tier(TargetTier::Eighty, 1000.0, 450.0, &w);

        assert_eq!(full.target, 1000.0);
        assert_eq!(ninety.target, 900.0);
        assert_eq!(eighty.target, 800.0);
        assert!(approx(full.actual_percent, 45.0));
        assert!(approx(ninety.actual_percent, 50.0));
        assert!(approx(eighty.actual_percent, 56.25));
    }
}

#[cfg(test)]
mod plan_service_tests {
    use goalfolio_core::errors::Result;
    use goalfolio_core::plans::{
        PlanPeriod, PlanRecord, PlanRepositoryTrait, PlanService, TargetTier,
    };
    use std::sync::{Arc, Mutex};

    struct InMemoryRepo {
        plans: Mutex<Vec<PlanRecord>>,
    }

    impl InMemoryRepo {
        fn new() -> Self {
            Self {
                plans: Mutex::new(Vec::new()),
            }
        }
    }

    impl PlanRepositoryTrait for InMemoryRepo {
        fn load_plans(&self) -> Result<Vec<PlanRecord>> {
            Ok(self.plans.lock().unwrap().clone())
        }

        fn save_plans(&self, plans: &[PlanRecord]) -> Result<()> {
            *self.plans.lock().unwrap() = plans.to_vec();
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plan_report_carries_three_tiers() {
        let service = PlanService::new(Arc::new(InMemoryRepo::new()));
        let mut plan = PlanRecord::new("Branch plan", 900000.0);
        plan.actual_sum = 450000.0;

        let report = service.plan_report(&plan, PlanPeriod::FullMonth, date(2026, 6, 15));
        assert_eq!(report.tiers.len(), 3);
        assert_eq!(report.tiers[0].tier, TargetTier::Full);
        assert_eq!(report.tiers[1].tier, TargetTier::Ninety);
        assert_eq!(report.tiers[2].tier, TargetTier::Eighty);
        assert_eq!(report.window.days_passed, 15);
    }

    #[test]
    fn test_board_maps_slot_index_to_period() {
        let service = PlanService::new(Arc::new(InMemoryRepo::new()));
        let board = vec![
            PlanRecord::new("Branch plan", 1000000.0),
            PlanRecord::new("Decade 1", 350000.0),
            PlanRecord::new("Decade 2", 350000.0),
            PlanRecord::new("Decade 3", 300000.0),
        ];

        let reports = service.board_report(&board, date(2026, 6, 15));
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].period, PlanPeriod::FullMonth);
        assert_eq!(reports[1].period, PlanPeriod::Decade1);
        assert_eq!(reports[2].period, PlanPeriod::Decade2);
        assert_eq!(reports[3].period, PlanPeriod::Decade3);

        // Decade 1 already elapsed on the 15th, decade 3 not begun
        assert_eq!(reports[1].window.days_remaining, 0);
        assert_eq!(reports[3].window.days_passed, 0);
    }

    #[test]
    fn test_plan_edits_validate_and_persist() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = PlanService::new(repo.clone());

        let plan = service.create_plan("Branch plan", 1000000.0).unwrap();
        service.set_actual_sum(&plan.id, 250000.0).unwrap();
        let updated = service.set_plan_target(&plan.id, 1200000.0).unwrap();
        assert_eq!(updated.plan100, 1200000.0);
        assert_eq!(updated.actual_sum, 250000.0);

        assert!(service.set_actual_sum(&plan.id, -1.0).is_err());
        assert!(service.set_plan_target(&plan.id, f64::NAN).is_err());
        assert!(service.set_actual_sum("no-such-plan", 1.0).is_err());

        assert_eq!(service.delete_plan(&plan.id).unwrap(), 1);
        assert!(service.get_plans().unwrap().is_empty());
    }
}
