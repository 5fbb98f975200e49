use crate::goals::goals_model::{Goal, GoalKind};
use crate::payroll::payroll_model::{SalaryBreakdown, SalaryLine, NET_RATE};

/// Per-unit salary multiplier for a goal name.
///
/// Total over all strings: unrecognized names yield 0 rather than an error.
pub fn multiplier_for(goal_name: &str) -> f64 {
    GoalKind::from_name(goal_name).multiplier()
}

/// Net sum after the flat deduction.
pub fn net_of(gross: f64) -> f64 {
    gross * NET_RATE
}

/// Derive the salary figures for a set of goals: one line per goal, summed
/// to a gross total, with the flat deduction applied for the net.
pub fn salary_breakdown(goals: &[Goal]) -> SalaryBreakdown {
    let mut gross_total = 0.0;
    let mut lines = Vec::with_capacity(goals.len());

    for goal in goals {
        let multiplier = multiplier_for(&goal.name);
        let gross_amount = goal.progress as f64 * multiplier;
        gross_total += gross_amount;

        lines.push(SalaryLine {
            goal_id: goal.id.clone(),
            goal_name: goal.name.clone(),
            progress: goal.progress,
            multiplier,
            gross_amount,
        });
    }

    SalaryBreakdown {
        lines,
        gross_total,
        net_total: net_of(gross_total),
    }
}
