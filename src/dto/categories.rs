use serde::Serialize;

use crate::domain::category::Category;

/// One entry of the fixed category catalogue.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryDto {
    pub value: String,
    pub label: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            value: value.as_str().to_string(),
            label: value.display_label().to_string(),
        }
    }
}
