pub mod csv_export;

pub use csv_export::{export_reports_to_dir, write_month_report_csv, write_plan_reports_csv};
