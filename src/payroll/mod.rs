pub mod payroll_model;
pub mod payroll_service;

pub use payroll_model::{SalaryBreakdown, SalaryLine, NET_RATE, TAX_RATE};
pub use payroll_service::{multiplier_for, net_of, salary_breakdown};
