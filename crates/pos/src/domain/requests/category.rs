use super::null_as_default;
use crate::middleware::validate::FieldOrder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CategoryRequest {
    #[serde(deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "Category name is required"))]
    #[schema(example = "Snack")]
    pub name: String,

    #[schema(example = "Light bites")]
    pub description: Option<String>,
}

impl FieldOrder for CategoryRequest {
    const FIELDS: &'static [&'static str] = &["name"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_name_reaches_validation() {
        let req: CategoryRequest = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(req.name, "");
        assert!(req.validate().unwrap_err().field_errors().contains_key("name"));
    }
}
