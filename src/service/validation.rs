//! Field-level validation rules shared by the create and update schemas.

use crate::error::AppError;
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 130;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

/// Text field must contain something other than whitespace.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    if !email_regex().is_match(value) {
        return Err(AppError::Validation(format!("{} must be a valid email", field)));
    }
    Ok(())
}

pub fn validate_age(field: &str, value: i32) -> Result<(), AppError> {
    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {}",
            field, MIN_AGE, MAX_AGE
        )));
    }
    Ok(())
}
