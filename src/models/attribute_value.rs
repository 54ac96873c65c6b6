//! Module containing product attribute value model and its codec.
//!
//! Every product carries one row per attribute definition of its category,
//! populated or not. Exactly one value column is filled per row, chosen by
//! the definition's data type at write time and chosen again at read time,
//! so a definition whose type changed after rows were written will misread
//! them.

use failure::Error as FailureError;
use serde_json;

use crate::errors::Error;
use crate::models::{AttributeDefId, AttributeDefinition, DataType, ProductId};

newtype_id!(ProdAttrValueId);

/// Row of the product_attribute_values table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProdAttrValue {
    pub id: ProdAttrValueId,
    pub product_id: ProductId,
    pub attribute_def_id: AttributeDefId,
    pub int_value: Option<i64>,
    pub float_value: Option<f64>,
    pub bool_value: Option<bool>,
    pub string_value: Option<String>,
    pub json_value: Option<String>,
}

/// Insertable row built by `encode`.
///
/// `json_value` is not written by the current encode path: json typed input
/// lands in `string_value` verbatim. The column stays readable for rows
/// written by older tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProdAttrValue {
    pub product_id: ProductId,
    pub attribute_def_id: AttributeDefId,
    pub int_value: Option<i64>,
    pub float_value: Option<f64>,
    pub bool_value: Option<bool>,
    pub string_value: Option<String>,
}

/// Decoded attribute value as presented to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Json(serde_json::Value),
}

/// Textual truthy set for boolean attributes. Input is not trimmed.
pub fn parse_truthy(raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        _ => false,
    }
}

impl NewProdAttrValue {
    /// Builds the storage row for one submitted value.
    ///
    /// Absent or empty input produces a row with no value column populated.
    /// Unparsable integer or float input fails the write.
    pub fn encode(product_id: ProductId, definition: &AttributeDefinition, raw: Option<&str>) -> Result<Self, FailureError> {
        let mut row = NewProdAttrValue {
            product_id,
            attribute_def_id: definition.id,
            int_value: None,
            float_value: None,
            bool_value: None,
            string_value: None,
        };

        let raw = match raw {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(row),
        };

        match definition.data_type {
            DataType::Integer => {
                let parsed = raw.trim().parse::<i64>().map_err(|_| {
                    Error::Parse(format!("Invalid integer value '{}' for attribute '{}'", raw, definition.slug))
                })?;
                row.int_value = Some(parsed);
            }
            DataType::Float => {
                let parsed = raw.trim().parse::<f64>().map_err(|_| {
                    Error::Parse(format!("Invalid float value '{}' for attribute '{}'", raw, definition.slug))
                })?;
                row.float_value = Some(parsed);
            }
            DataType::Boolean => {
                row.bool_value = Some(parse_truthy(raw));
            }
            DataType::String | DataType::Json => {
                row.string_value = Some(raw.to_string());
            }
        }

        Ok(row)
    }
}

impl ProdAttrValue {
    /// Reads back the value column selected by the definition's data type.
    ///
    /// Typed columns are read as is. Everything else prefers `string_value`,
    /// then a json parse of `json_value` falling back to its raw text.
    pub fn decode(&self, data_type: DataType) -> Option<AttributeValue> {
        match data_type {
            DataType::Integer => self.int_value.map(AttributeValue::Int),
            DataType::Float => self.float_value.map(AttributeValue::Float),
            DataType::Boolean => self.bool_value.map(AttributeValue::Bool),
            DataType::String | DataType::Json => {
                if let Some(text) = &self.string_value {
                    Some(AttributeValue::Str(text.clone()))
                } else if let Some(raw) = &self.json_value {
                    match serde_json::from_str(raw) {
                        Ok(value) => Some(AttributeValue::Json(value)),
                        Err(_) => Some(AttributeValue::Str(raw.clone())),
                    }
                } else {
                    None
                }
            }
        }
    }
}
