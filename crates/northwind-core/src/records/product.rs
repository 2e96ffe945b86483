//! Product transfer record.

use crate::validation::rules;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A row of the `Products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_product_columns"))]
pub struct ProductRecord {
    /// Store-assigned identity; `None` before insert.
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 40))]
    pub name: String,

    pub supplier_id: Option<i32>,

    pub category_id: Option<i32>,

    #[validate(length(max = 20))]
    pub quantity_per_unit: Option<String>,

    /// Price in a `DECIMAL(19,4)` column.
    pub unit_price: Option<Decimal>,

    pub units_in_stock: Option<i16>,

    pub units_on_order: Option<i16>,

    pub reorder_level: Option<i16>,

    pub discontinued: bool,
}

impl ProductRecord {
    /// Creates an unsaved product with only the required columns set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            supplier_id: None,
            category_id: None,
            quantity_per_unit: None,
            unit_price: None,
            units_in_stock: None,
            units_on_order: None,
            reorder_level: None,
            discontinued: false,
        }
    }
}

fn validate_product_columns(product: &ProductRecord) -> Result<(), ValidationError> {
    rules::not_blank(&product.name).map_err(|e| rules::labelled(e, "name"))?;

    if let Some(price) = &product.unit_price {
        rules::money(price).map_err(|e| rules::labelled(e, "unit_price"))?;
    }

    let quantities = [
        ("units_in_stock", product.units_in_stock),
        ("units_on_order", product.units_on_order),
        ("reorder_level", product.reorder_level),
    ];
    for (field, value) in quantities {
        if let Some(value) = value {
            rules::non_negative(value).map_err(|e| rules::labelled(e, field))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidateExt;
    use std::str::FromStr;

    #[test]
    fn test_new_product_has_no_identity_and_no_optional_columns() {
        let product = ProductRecord::new("Chai");
        assert_eq!(product.id, None);
        assert_eq!(product.name, "Chai");
        assert_eq!(product.unit_price, None);
        assert_eq!(product.units_in_stock, None);
        assert!(!product.discontinued);
        assert!(product.validate_record().is_ok());
    }

    #[test]
    fn test_name_width_is_enforced() {
        let product = ProductRecord::new("x".repeat(41));
        let err = product.validate_record().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("name"));

        assert!(ProductRecord::new("x".repeat(40)).validate_record().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(ProductRecord::new("   ").validate_record().is_err());
        assert!(ProductRecord::new("").validate_record().is_err());
    }

    #[test]
    fn test_quantity_per_unit_width_is_enforced() {
        let product = ProductRecord {
            quantity_per_unit: Some("10 boxes x 20 bags, 1 kg".to_string()),
            ..ProductRecord::new("Chai")
        };
        let err = product.validate_record().unwrap_err();
        assert!(err.to_string().contains("quantity_per_unit"));
    }

    #[test]
    fn test_unit_price_precision_is_enforced() {
        let product = ProductRecord {
            unit_price: Some(Decimal::from_str("18.00005").unwrap()),
            ..ProductRecord::new("Chai")
        };
        let err = product.validate_record().unwrap_err();
        assert!(err.to_string().contains("unit_price"));
    }

    #[test]
    fn test_negative_stock_rejected() {
        let product = ProductRecord {
            units_in_stock: Some(-1),
            ..ProductRecord::new("Chai")
        };
        let err = product.validate_record().unwrap_err();
        assert!(err.to_string().contains("units_in_stock must not be negative"));
    }

    #[test]
    fn test_serde_keeps_absent_columns_absent() {
        let product = ProductRecord {
            unit_price: Some(Decimal::from_str("18.00").unwrap()),
            ..ProductRecord::new("Chai")
        };
        let json = serde_json::to_string(&product).unwrap();
        let back: ProductRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
        assert_eq!(back.supplier_id, None);
    }
}
