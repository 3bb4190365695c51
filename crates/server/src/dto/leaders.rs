//! # Leader Data Transfer Objects
//!
//! Request and response types for leader endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::employees::{EmployeeData, EmployeeResponse};

/// Request to create a leader together with its employee record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateLeaderRequest {
    /// Base employee fields; the role is forced to `leader`
    #[validate(nested)]
    pub employee_data: EmployeeData,

    /// Years of leadership experience
    #[validate(range(min = 1, message = "Years of experience must be at least 1"))]
    pub years_experience: i32,

    /// Number of projects led so far
    #[validate(range(min = 0, message = "Projects led must not be negative"))]
    pub projects_led: i32,
}

/// Request to partially update a leader
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateLeaderRequest {
    /// New years of experience
    #[validate(range(min = 1, message = "Years of experience must be at least 1"))]
    pub years_experience: Option<i32>,

    /// New projects-led count
    #[validate(range(min = 0, message = "Projects led must not be negative"))]
    pub projects_led: Option<i32>,
}

/// Response for a single leader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderResponse {
    /// Base employee fields
    pub employee:         EmployeeResponse,
    /// Years of leadership experience
    pub years_experience: i32,
    /// Number of projects led
    pub projects_led:     i32,
}
