//! Validation utilities.

use crate::NorthwindError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the record and returns a [`NorthwindError::Validation`] on failure.
    fn validate_record(&self) -> Result<(), NorthwindError> {
        self.validate().map_err(validation_errors_to_northwind_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `NorthwindError`.
///
/// Messages are sorted by field so the text is stable across runs.
#[must_use]
pub fn validation_errors_to_northwind_error(errors: ValidationErrors) -> NorthwindError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{field}: {message}")
            })
        })
        .collect();
    messages.sort();

    NorthwindError::Validation(messages.join("; "))
}

/// Common validation rules.
pub mod rules {
    use chrono::{NaiveDateTime, Timelike};
    use rust_decimal::Decimal;
    use std::borrow::Cow;
    use validator::ValidationError;

    /// Largest number of fractional digits a `DECIMAL(19,4)` column keeps.
    pub const MONEY_SCALE: u32 = 4;

    /// Exclusive upper bound of a `DECIMAL(19,4)` column.
    pub const MONEY_LIMIT: i64 = 1_000_000_000_000_000;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that an amount fits a non-negative `DECIMAL(19,4)` column
    /// without rounding.
    pub fn money(amount: &Decimal) -> Result<(), ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::new("money_negative")
                .with_message(Cow::Borrowed("must not be negative")));
        }
        if amount.normalize().scale() > MONEY_SCALE {
            return Err(ValidationError::new("money_scale")
                .with_message(Cow::Borrowed("must have at most 4 fractional digits")));
        }
        if amount.abs() >= Decimal::from(MONEY_LIMIT) {
            return Err(ValidationError::new("money_range")
                .with_message(Cow::Borrowed("exceeds the currency column range")));
        }
        Ok(())
    }

    /// Prefixes a rule failure with the column it was raised for.
    #[must_use]
    pub fn labelled(error: ValidationError, field: &'static str) -> ValidationError {
        let detail = error
            .message
            .as_ref()
            .map_or_else(|| error.code.to_string(), ToString::to_string);
        let message = format!("{field} {detail}");
        error.with_message(Cow::Owned(message))
    }

    /// Validates that a timestamp fits a `DATETIME` column, which keeps whole
    /// seconds only.
    pub fn whole_seconds(value: &NaiveDateTime) -> Result<(), ValidationError> {
        if value.nanosecond() != 0 {
            return Err(ValidationError::new("whole_seconds")
                .with_message(Cow::Borrowed("must not carry fractional seconds")));
        }
        Ok(())
    }

    /// Validates that a small-integer quantity is not negative.
    pub fn non_negative(value: i16) -> Result<(), ValidationError> {
        if value < 0 {
            return Err(ValidationError::new("non_negative")
                .with_message(Cow::Borrowed("must not be negative")));
        }
        Ok(())
    }
}
