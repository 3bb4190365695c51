//! # Employee Data Transfer Objects
//!
//! Request and response types for the base employee endpoints. The same
//! `EmployeeData` payload is embedded in programmer and leader creation.

use entity::employees::EmployeeRole;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee fields shared by direct creation and role creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct EmployeeData {
    /// National identity card, unique and alphanumeric
    #[validate(length(
        min = 1,
        max = 20,
        message = "Identity card must be between 1 and 20 characters"
    ))]
    pub identity_card: String,

    /// Full name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    /// Age in years
    #[validate(range(min = 18, max = 70, message = "Age must be between 18 and 70"))]
    pub age: i32,

    /// Sex
    #[validate(length(min = 1, max = 10, message = "Sex must be between 1 and 10 characters"))]
    pub sex: String,

    /// Monthly base salary, must be positive
    pub base_salary: Decimal,
}

/// Request to create a standalone employee
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// Employee fields
    #[validate(nested)]
    #[serde(flatten)]
    pub data: EmployeeData,

    /// Role discriminator (programmer or leader)
    pub role: EmployeeRole,
}

/// Request to partially update an employee
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    /// New identity card
    #[validate(length(
        min = 1,
        max = 20,
        message = "Identity card must be between 1 and 20 characters"
    ))]
    pub identity_card: Option<String>,

    /// New name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    /// New age
    #[validate(range(min = 18, max = 70, message = "Age must be between 18 and 70"))]
    pub age: Option<i32>,

    /// New sex
    #[validate(length(min = 1, max = 10, message = "Sex must be between 1 and 10 characters"))]
    pub sex: Option<String>,

    /// New base salary, must be positive
    pub base_salary: Option<Decimal>,
}

/// Response for a single employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeResponse {
    /// Unique identifier
    pub id:            i32,
    /// Identity card
    pub identity_card: String,
    /// Full name
    pub name:          String,
    /// Age in years
    pub age:           i32,
    /// Sex
    pub sex:           String,
    /// Monthly base salary
    pub base_salary:   Decimal,
    /// Role discriminator (programmer or leader)
    pub role:          String,
}

impl EmployeeResponse {
    /// Convert an employee entity model to a response DTO
    pub fn from_model(employee: &entity::employees::Model) -> Self {
        Self {
            id:            employee.id,
            identity_card: employee.identity_card.clone(),
            name:          employee.name.clone(),
            age:           employee.age,
            sex:           employee.sex.clone(),
            base_salary:   employee.base_salary,
            role:          employee.role.to_string(),
        }
    }
}
