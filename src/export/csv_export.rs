use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::{Result, StorageError};
use crate::goals::goal_progress_model::MonthProgressReport;
use crate::plans::plans_model::PlanReport;

/// Write one month report as CSV: one row per goal, then gross/net totals.
///
/// Percent and amount columns are formatted at two decimals; the values are
/// the calculator outputs unchanged.
pub fn write_month_report_csv<W: Write>(writer: W, report: &MonthProgressReport) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);

    w.write_record([
        "month",
        "goal",
        "progress",
        "target",
        "percent",
        "projectedTotal",
        "projectedPercent",
        "status",
        "grossAmount",
    ])
    .map_err(StorageError::Csv)?;

    for row in &report.rows {
        let gross = report
            .salary
            .lines
            .iter()
            .find(|line| line.goal_id == row.goal_id)
            .map(|line| line.gross_amount)
            .unwrap_or(0.0);

        w.write_record([
            report.month_name.clone(),
            row.goal_name.clone(),
            row.progress.to_string(),
            row.target.to_string(),
            format!("{:.2}", row.evaluation.percentage),
            format!("{:.2}", row.evaluation.projected_total),
            format!("{:.2}", row.evaluation.projected_percentage),
            row.evaluation.status.as_str().to_string(),
            format!("{:.2}", gross),
        ])
        .map_err(StorageError::Csv)?;
    }

    w.write_record([
        report.month_name.clone(),
        "GROSS TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", report.salary.gross_total),
    ])
    .map_err(StorageError::Csv)?;
    w.write_record([
        report.month_name.clone(),
        "NET TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", report.salary.net_total),
    ])
    .map_err(StorageError::Csv)?;

    w.flush().map_err(StorageError::Io)?;
    Ok(())
}

/// Write plan reports as CSV: one row per plan tier.
pub fn write_plan_reports_csv<W: Write>(writer: W, reports: &[PlanReport]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);

    w.write_record([
        "plan",
        "period",
        "tier",
        "target",
        "actualPercent",
        "tempPercent",
        "remainder",
        "dailyRate",
    ])
    .map_err(StorageError::Csv)?;

    for report in reports {
        for tier in &report.tiers {
            w.write_record([
                report.plan_name.clone(),
                report.period.label().to_string(),
                tier.tier.label().to_string(),
                format!("{:.2}", tier.target),
                format!("{:.2}", tier.actual_percent),
                format!("{:.2}", tier.temp_percent),
                format!("{:.2}", tier.remainder),
                format!("{:.2}", tier.daily_rate),
            ])
            .map_err(StorageError::Csv)?;
        }
    }

    w.flush().map_err(StorageError::Io)?;
    Ok(())
}

/// Export month and plan reports as `months.csv` / `plans.csv` in `out_dir`.
pub fn export_reports_to_dir(
    out_dir: &Path,
    month_reports: &[MonthProgressReport],
    plan_reports: &[PlanReport],
) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(StorageError::Io)?;

    let mut months_buf = Vec::new();
    for (i, report) in month_reports.iter().enumerate() {
        let mut body = Vec::new();
        write_month_report_csv(&mut body, report)?;
        if i == 0 {
            months_buf.extend_from_slice(&body);
        } else if let Some(pos) = body.iter().position(|b| *b == b'\n') {
            // Keep a single header line across months.
            months_buf.extend_from_slice(&body[pos + 1..]);
        }
    }
    fs::write(out_dir.join("months.csv"), months_buf).map_err(StorageError::Io)?;

    let plans_file = fs::File::create(out_dir.join("plans.csv")).map_err(StorageError::Io)?;
    write_plan_reports_csv(plans_file, plan_reports)?;

    Ok(())
}
