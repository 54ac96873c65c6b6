//! Module containing attribute definition model.
use std::fmt;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use validator::Validate;

use crate::models::validation_rules::*;
use crate::models::CategoryId;

newtype_id!(AttributeDefId);

/// Value type declared by an attribute definition.
///
/// Selects the storage column an attribute value is written to and read
/// from. Rows written under one type are misread after the type changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Integer,
    Float,
    Boolean,
    String,
    Json,
}

impl DataType {
    /// Normalizes loose external names, anything unrecognized is a string.
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "integer" | "int" => DataType::Integer,
            "float" | "double" => DataType::Float,
            "boolean" | "bool" => DataType::Boolean,
            "json" => DataType::Json,
            _ => DataType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Boolean => "boolean",
            DataType::String => "string",
            DataType::Json => "json",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for DataType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for DataType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(DataType::from_input)
    }
}

/// Attribute definition as stored in the attribute_definitions table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: AttributeDefId,
    pub category_id: CategoryId,
    pub name: String,
    pub slug: String,
    pub data_type: DataType,
    pub is_required: bool,
}

/// Payload for creating attribute definition.
///
/// `data_type` comes in as raw text and is normalized once at creation,
/// the canonical name is what persists. Slug uniqueness inside a category
/// is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewAttributeDefinition {
    pub category_id: CategoryId,
    #[validate(custom = "validate_non_blank")]
    pub name: String,
    #[validate(custom = "validate_non_blank")]
    pub slug: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub is_required: bool,
}
