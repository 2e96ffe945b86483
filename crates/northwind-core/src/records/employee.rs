//! Employee transfer record.

use crate::validation::rules;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A row of the `Employees` table.
///
/// Only the identity and the two name columns are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_employee_columns"))]
pub struct EmployeeRecord {
    /// Store-assigned identity; `None` before insert.
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 20))]
    pub last_name: String,

    #[validate(length(min = 1, max = 10))]
    pub first_name: String,

    #[validate(length(max = 30))]
    pub title: Option<String>,

    #[validate(length(max = 25))]
    pub title_of_courtesy: Option<String>,

    pub birth_date: Option<NaiveDateTime>,

    pub hire_date: Option<NaiveDateTime>,

    #[validate(length(max = 60))]
    pub address: Option<String>,

    #[validate(length(max = 15))]
    pub city: Option<String>,

    #[validate(length(max = 15))]
    pub region: Option<String>,

    #[validate(length(max = 10))]
    pub postal_code: Option<String>,

    #[validate(length(max = 15))]
    pub country: Option<String>,

    #[validate(length(max = 24))]
    pub home_phone: Option<String>,

    #[validate(length(max = 4))]
    pub extension: Option<String>,

    /// Photo blob. `None` is a NULL column; `Some(vec![])` is a stored empty blob.
    pub photo: Option<Vec<u8>>,

    pub notes: Option<String>,

    /// Manager this employee reports to.
    pub reports_to: Option<i32>,

    #[validate(length(max = 255))]
    pub photo_path: Option<String>,
}

impl EmployeeRecord {
    /// Creates an unsaved employee with only the required columns set.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            last_name: last_name.into(),
            first_name: first_name.into(),
            title: None,
            title_of_courtesy: None,
            birth_date: None,
            hire_date: None,
            address: None,
            city: None,
            region: None,
            postal_code: None,
            country: None,
            home_phone: None,
            extension: None,
            photo: None,
            notes: None,
            reports_to: None,
            photo_path: None,
        }
    }
}

fn validate_employee_columns(employee: &EmployeeRecord) -> Result<(), ValidationError> {
    rules::not_blank(&employee.last_name).map_err(|e| rules::labelled(e, "last_name"))?;
    rules::not_blank(&employee.first_name).map_err(|e| rules::labelled(e, "first_name"))?;
    if let Some(birth_date) = &employee.birth_date {
        rules::whole_seconds(birth_date).map_err(|e| rules::labelled(e, "birth_date"))?;
    }
    if let Some(hire_date) = &employee.hire_date {
        rules::whole_seconds(hire_date).map_err(|e| rules::labelled(e, "hire_date"))?;
    }
    Ok(())
}
