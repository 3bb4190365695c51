//! # Data Transfer Objects
//!
//! Request and response types for the Crewdesk API, validated with
//! `validator` derives at the edge.

pub mod analytics;
pub mod auth;
pub mod employees;
pub mod leaders;
pub mod programmers;
pub mod projects;
pub mod teams;

use serde::Deserialize;

/// Query parameters for offset/limit list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Number of records to skip (default: 0)
    pub offset: Option<u64>,
    /// Maximum number of records to return (default: 100, max: 500)
    pub limit:  Option<u64>,
}

impl ListQuery {
    /// Records to skip (default: 0)
    pub fn offset(&self) -> u64 { self.offset.unwrap_or(0) }

    /// Records to return (default: 100, clamped to 1..=500)
    pub fn limit(&self) -> u64 { self.limit.unwrap_or(100).clamp(1, 500) }
}
