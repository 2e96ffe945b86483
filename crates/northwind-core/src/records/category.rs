//! Product category transfer record.

use crate::validation::rules;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A row of the `Categories` table, without its picture.
///
/// The picture column has its own lifecycle and is reached through the
/// category picture DAO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_category_columns"))]
pub struct ProductCategoryRecord {
    /// Store-assigned identity; `None` before insert.
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 15))]
    pub name: String,

    pub description: Option<String>,
}

impl ProductCategoryRecord {
    /// Creates an unsaved category with only the required columns set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
        }
    }
}

fn validate_category_columns(category: &ProductCategoryRecord) -> Result<(), ValidationError> {
    rules::not_blank(&category.name).map_err(|e| rules::labelled(e, "name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidateExt;

    #[test]
    fn test_new_category() {
        let category = ProductCategoryRecord::new("Beverages");
        assert_eq!(category.id, None);
        assert_eq!(category.description, None);
        assert!(category.validate_record().is_ok());
    }

    #[test]
    fn test_name_width_is_enforced() {
        let err = ProductCategoryRecord::new("Seafood and Shellfish")
            .validate_record()
            .unwrap_err();
        assert!(err.to_string().contains("name"));
    }
}
