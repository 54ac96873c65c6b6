//! Module containing category model.
use validator::Validate;

use crate::models::validation_rules::*;

newtype_id!(CategoryId);

/// Category as stored in the categories table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

/// Payload for creating category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(custom = "validate_non_blank")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Payload for updating category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(custom = "validate_non_blank")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}
