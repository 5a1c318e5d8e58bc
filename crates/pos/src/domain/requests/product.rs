use super::null_as_default;
use crate::middleware::validate::FieldOrder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Mutable product fields, used for both create and full-replace update.
/// Missing fields decode to zero values so validation reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ProductRequest {
    #[serde(deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Nasi Goreng")]
    pub name: String,

    #[schema(example = "Fried rice with egg")]
    pub description: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "positive_price"))]
    #[schema(value_type = f64, example = 15000)]
    pub price: Decimal,

    #[serde(deserialize_with = "null_as_default")]
    #[validate(range(min = 1, message = "Product stock must be greater than 0"))]
    #[schema(example = 10)]
    pub stock: i32,

    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "category_present"))]
    #[schema(example = 1)]
    pub category_id: i32,
}

const PRICE_SCALE: u32 = 2;

impl FieldOrder for ProductRequest {
    const FIELDS: &'static [&'static str] = &["name", "category_id", "price", "stock"];
}

/// Prices are stored with two decimal places; anything that rounds to
/// zero there is rejected.
fn positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.round_dp(PRICE_SCALE) > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("range")
            .with_message(Cow::Borrowed("Product price must be greater than 0")))
    }
}

fn category_present(category_id: i32) -> Result<(), ValidationError> {
    if category_id != 0 {
        Ok(())
    } else {
        Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Category ID is required")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductRequest {
        ProductRequest {
            name: "Nasi Goreng".into(),
            description: None,
            price: Decimal::new(15000, 0),
            stock: 10,
            category_id: 1,
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_numbers() {
        let req = ProductRequest {
            price: Decimal::ZERO,
            stock: 0,
            ..valid()
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("stock"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let req: ProductRequest = serde_json::from_str(r#"{"name":"Es Teh"}"#).unwrap();
        assert_eq!(req.category_id, 0);
        assert_eq!(req.price, Decimal::ZERO);
        assert!(req.validate().is_err());
    }

    #[test]
    fn price_below_a_cent_is_rejected() {
        let req = ProductRequest {
            price: Decimal::new(4, 3),
            ..valid()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));

        let req = ProductRequest {
            price: Decimal::new(1, 2),
            ..valid()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn explicit_nulls_decode_to_zero_values() {
        let req: ProductRequest = serde_json::from_str(
            r#"{"name":null,"description":null,"price":null,"stock":null,"category_id":null}"#,
        )
        .unwrap();
        assert_eq!(req, ProductRequest::default());
        assert!(req.validate().is_err());
    }

    #[test]
    fn category_id_zero_is_missing() {
        let req = ProductRequest {
            category_id: 0,
            ..valid()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category_id"));
    }

    #[test]
    fn price_accepts_integers_and_fractions() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"name":"Risol","price":2500.5,"stock":1,"category_id":2}"#)
                .unwrap();
        assert_eq!(req.price, Decimal::new(25005, 1));
    }
}
