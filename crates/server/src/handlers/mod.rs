//! # Request Handlers
//!
//! Business operations behind the HTTP surface. Each handler validates its
//! input, checks the cross-entity invariants, mutates inside a transaction
//! when more than one step is involved, and maps entities to response DTOs.

pub mod analytics;
pub mod auth;
pub mod employees;
pub mod leaders;
pub mod programmers;
pub mod projects;
pub mod teams;

use error::{AppError, Result};
use rust_decimal::Decimal;

/// Reject identity cards that are empty or carry non-alphanumeric
/// characters. Length bounds are covered by the DTO validators.
pub(crate) fn ensure_identity_card_format(identity_card: &str) -> Result<()> {
    if identity_card.is_empty() || !identity_card.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation(
            "Identity card must be non-empty and alphanumeric",
        ));
    }
    Ok(())
}

/// Reject non-positive monetary amounts.
pub(crate) fn ensure_positive(field: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(AppError::validation(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(())
}

/// Drop duplicate entries while keeping first-occurrence order.
pub(crate) fn dedup_preserving_order(values: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}
