//! ProductImages repo, presents operations with the product_images table
use failure::Error as FailureError;
use rusqlite::{params, Connection, Row};

use crate::models::{NewProductImage, ProductId, ProductImage, ProductImageId};

use super::types::RepoResult;

pub trait ProductImagesRepo {
    /// Returns the product's image rows in insertion order
    fn find_all_images(&self, product_id_arg: ProductId) -> RepoResult<Vec<ProductImage>>;

    /// Creates new image row
    fn create(&self, payload: NewProductImage) -> RepoResult<ProductImage>;
}

/// ProductImages repository, responsible for handling image rows
pub struct ProductImagesRepoImpl<'a> {
    pub db_conn: &'a Connection,
}

impl<'a> ProductImagesRepoImpl<'a> {
    pub fn new(db_conn: &'a Connection) -> Self {
        Self { db_conn }
    }
}

fn image_from_row(row: &Row) -> rusqlite::Result<ProductImage> {
    Ok(ProductImage {
        id: row.get("id")?,
        product_id: row.get("product_id")?,
        storage_path: row.get("storage_path")?,
    })
}

impl<'a> ProductImagesRepo for ProductImagesRepoImpl<'a> {
    fn find_all_images(&self, product_id_arg: ProductId) -> RepoResult<Vec<ProductImage>> {
        debug!("Find all images of product id {}.", product_id_arg);
        let mut stmt = self.db_conn.prepare(
            "SELECT id, product_id, storage_path FROM product_images WHERE product_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![product_id_arg], image_from_row)?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(From::from)
            .map_err(|e: FailureError| {
                e.context(format!("Find all images of product {} error occurred", product_id_arg))
                    .into()
            })
    }

    fn create(&self, payload: NewProductImage) -> RepoResult<ProductImage> {
        debug!("Create product image {:?}.", payload);
        self.db_conn
            .execute(
                "INSERT INTO product_images (product_id, storage_path) VALUES (?1, ?2)",
                params![payload.product_id, payload.storage_path],
            )
            .map_err(From::from)
            .map_err(|e: FailureError| e.context(format!("Create product image {:?} error occurred", payload)).into())
            .map(|_| ProductImage {
                id: ProductImageId(self.db_conn.last_insert_rowid()),
                product_id: payload.product_id,
                storage_path: payload.storage_path,
            })
    }
}
