//! # Analytics Data Transfer Objects
//!
//! Response types for the derivation endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Project count for one subtype
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTypeCount {
    /// Project subtype
    pub project_type: String,
    /// Number of projects of that subtype
    pub count:        u64,
}

/// Computed salary for one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryInfo {
    /// Employee id
    pub employee_id:  i32,
    /// Employee name
    pub name:         String,
    /// Derived total salary
    pub total_salary: Decimal,
}

/// Query parameters for the highest-paid ranking
#[derive(Debug, Clone, Deserialize)]
pub struct HighestPaidQuery {
    /// Maximum number of entries to return (default: 5)
    pub limit: Option<u64>,
}

impl HighestPaidQuery {
    /// Entries to return (default: 5, clamped to 1..=100)
    pub fn limit(&self) -> usize { self.limit.unwrap_or(5).clamp(1, 100) as usize }
}
