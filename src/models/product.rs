//! Module containing product model for query, insert and assembled views.
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::{AttributeValue, CategoryId, DataType};

newtype_id!(ProductId);

/// Product row as stored in the products table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable product row, `is_active` and `created_at` are stamped on insert
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub category_id: CategoryId,
    pub name: String,
    pub sku: String,
    pub price: f64,
}

/// Externally submitted product payload.
///
/// `attributes` maps attribute slugs to raw text, an absent slug counts the
/// same as an empty value. `price` is raw text too, anything unparsable is
/// recorded as 0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductPayload {
    pub category_id: CategoryId,
    pub name: String,
    pub sku: String,
    pub price: Option<String>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// One decoded attribute of an assembled product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    pub value: Option<AttributeValue>,
}

/// Fully assembled product with decoded attributes and image paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub category_name: String,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub attributes: Vec<ProductAttribute>,
    pub images: Vec<String>,
}

/// Listing row without attribute detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub category_name: String,
    pub images: Vec<String>,
}
