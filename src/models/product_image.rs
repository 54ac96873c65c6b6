//! Module containing product image model.
use crate::models::ProductId;

newtype_id!(ProductImageId);

/// Image reference as stored in the product_images table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: ProductImageId,
    pub product_id: ProductId,
    pub storage_path: String,
}

/// Insertable image row
#[derive(Debug, Clone)]
pub struct NewProductImage {
    pub product_id: ProductId,
    pub storage_path: String,
}

/// Uploaded file as received from the outer layer.
///
/// Uploads with an empty filename are skipped during product creation.
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    pub filename: String,
    pub content: Vec<u8>,
}
