//! # Programmer Data Transfer Objects
//!
//! Request and response types for programmer endpoints.

use entity::programmers::ProgrammerCategory;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::employees::{EmployeeData, EmployeeResponse};

/// Request to create a programmer together with its employee record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateProgrammerRequest {
    /// Base employee fields; the role is forced to `programmer`
    #[validate(nested)]
    pub employee_data: EmployeeData,

    /// Seniority category (A, B, or C)
    pub category: ProgrammerCategory,

    /// Languages the programmer masters; duplicates are ignored
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Request to partially update a programmer
///
/// A provided language list (even an empty one) replaces the entire set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateProgrammerRequest {
    /// New seniority category
    pub category: Option<ProgrammerCategory>,

    /// Replacement language set
    pub languages: Option<Vec<String>>,
}

/// Request to add a single language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct AddLanguageRequest {
    /// Language name
    #[validate(length(
        min = 1,
        max = 50,
        message = "Language must be between 1 and 50 characters"
    ))]
    pub language: String,
}

/// Response for a single programmer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgrammerResponse {
    /// Base employee fields
    pub employee:  EmployeeResponse,
    /// Seniority category
    pub category:  String,
    /// Mastered languages
    pub languages: Vec<String>,
}

/// Response for a programmer's language set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguagesResponse {
    /// Programmer employee id
    pub programmer_id: i32,
    /// Mastered languages
    pub languages:     Vec<String>,
}
