//! Products repo, presents operations with the products table
use chrono::Utc;
use failure::Error as FailureError;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::{NewProduct, ProductId, RawProduct};

use super::types::RepoResult;

pub trait ProductsRepo {
    /// Creates new product row, stamping `is_active` and `created_at`
    fn create(&self, payload: NewProduct) -> RepoResult<RawProduct>;

    /// Finds specific product joined with its category name. A product
    /// whose category is gone reads as absent.
    fn find(&self, product_id_arg: ProductId) -> RepoResult<Option<(RawProduct, String)>>;

    /// Returns products joined with category names, newest first
    fn list_with_categories(&self) -> RepoResult<Vec<(RawProduct, String)>>;
}

/// Products repository, responsible for handling the products table
pub struct ProductsRepoImpl<'a> {
    pub db_conn: &'a Connection,
}

impl<'a> ProductsRepoImpl<'a> {
    pub fn new(db_conn: &'a Connection) -> Self {
        Self { db_conn }
    }
}

fn product_with_category_from_row(row: &Row) -> rusqlite::Result<(RawProduct, String)> {
    Ok((
        RawProduct {
            id: row.get("id")?,
            category_id: row.get("category_id")?,
            name: row.get("name")?,
            sku: row.get("sku")?,
            price: row.get("price")?,
            is_active: row.get("is_active")?,
            created_at: row.get("created_at")?,
        },
        row.get("category_name")?,
    ))
}

impl<'a> ProductsRepo for ProductsRepoImpl<'a> {
    fn create(&self, payload: NewProduct) -> RepoResult<RawProduct> {
        debug!("Create product {:?}.", payload);
        let created_at = Utc::now().naive_utc();
        self.db_conn
            .execute(
                "INSERT INTO products (category_id, name, sku, price, is_active, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![payload.category_id, payload.name, payload.sku, payload.price, true, created_at],
            )
            .map_err(From::from)
            .map_err(|e: FailureError| e.context(format!("Create new product {:?} error occurred", payload)).into())
            .map(|_| RawProduct {
                id: ProductId(self.db_conn.last_insert_rowid()),
                category_id: payload.category_id,
                name: payload.name,
                sku: payload.sku,
                price: payload.price,
                is_active: true,
                created_at,
            })
    }

    fn find(&self, product_id_arg: ProductId) -> RepoResult<Option<(RawProduct, String)>> {
        debug!("Find in products with id {}.", product_id_arg);
        let product = self
            .db_conn
            .query_row(
                "SELECT p.id, p.category_id, p.name, p.sku, p.price, p.is_active, p.created_at,
                        c.name AS category_name
                 FROM products p
                 JOIN categories c ON c.id = p.category_id
                 WHERE p.id = ?1",
                params![product_id_arg],
                product_with_category_from_row,
            )
            .optional()?;
        Ok(product)
    }

    fn list_with_categories(&self) -> RepoResult<Vec<(RawProduct, String)>> {
        debug!("Find all products.");
        let mut stmt = self.db_conn.prepare(
            "SELECT p.id, p.category_id, p.name, p.sku, p.price, p.is_active, p.created_at,
                    c.name AS category_name
             FROM products p
             JOIN categories c ON c.id = p.category_id
             ORDER BY p.created_at DESC",
        )?;
        let rows = stmt.query_map([], product_with_category_from_row)?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(From::from)
            .map_err(|e: FailureError| e.context("List products error occurred").into())
    }
}
