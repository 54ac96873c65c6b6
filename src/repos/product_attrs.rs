//! ProductAttrs repo, presents operations with the product_attribute_values table
use failure::Error as FailureError;
use rusqlite::{params, Connection, Row};

use crate::models::{AttributeDefinition, NewProdAttrValue, ProdAttrValue, ProductId};

use super::types::RepoResult;

pub trait ProductAttrsRepo {
    /// Returns the product's value rows paired with their definitions,
    /// in row id order
    fn find_all_attributes(&self, product_id_arg: ProductId) -> RepoResult<Vec<(AttributeDefinition, ProdAttrValue)>>;

    /// Creates new product attribute value row
    fn create(&self, payload: NewProdAttrValue) -> RepoResult<()>;
}

/// ProductAttrs repository, responsible for handling value rows
pub struct ProductAttrsRepoImpl<'a> {
    pub db_conn: &'a Connection,
}

impl<'a> ProductAttrsRepoImpl<'a> {
    pub fn new(db_conn: &'a Connection) -> Self {
        Self { db_conn }
    }
}

fn definition_with_value_from_row(row: &Row) -> rusqlite::Result<(AttributeDefinition, ProdAttrValue)> {
    Ok((
        AttributeDefinition {
            id: row.get("def_id")?,
            category_id: row.get("category_id")?,
            name: row.get("name")?,
            slug: row.get("slug")?,
            data_type: row.get("data_type")?,
            is_required: row.get("is_required")?,
        },
        ProdAttrValue {
            id: row.get("value_id")?,
            product_id: row.get("product_id")?,
            attribute_def_id: row.get("attribute_def_id")?,
            int_value: row.get("int_value")?,
            float_value: row.get("float_value")?,
            bool_value: row.get("bool_value")?,
            string_value: row.get("string_value")?,
            json_value: row.get("json_value")?,
        },
    ))
}

impl<'a> ProductAttrsRepo for ProductAttrsRepoImpl<'a> {
    fn find_all_attributes(&self, product_id_arg: ProductId) -> RepoResult<Vec<(AttributeDefinition, ProdAttrValue)>> {
        debug!("Find all attributes of product id {}.", product_id_arg);
        let mut stmt = self.db_conn.prepare(
            "SELECT d.id AS def_id, d.category_id, d.name, d.slug, d.data_type, d.is_required,
                    v.id AS value_id, v.product_id, v.attribute_def_id,
                    v.int_value, v.float_value, v.bool_value, v.string_value, v.json_value
             FROM product_attribute_values v
             JOIN attribute_definitions d ON d.id = v.attribute_def_id
             WHERE v.product_id = ?1
             ORDER BY v.id",
        )?;
        let rows = stmt.query_map(params![product_id_arg], definition_with_value_from_row)?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(From::from)
            .map_err(|e: FailureError| {
                e.context(format!("Find all attributes of product {} error occurred", product_id_arg))
                    .into()
            })
    }

    fn create(&self, payload: NewProdAttrValue) -> RepoResult<()> {
        debug!("Create product attribute value {:?}.", payload);
        self.db_conn
            .execute(
                "INSERT INTO product_attribute_values
                     (product_id, attribute_def_id, int_value, float_value, bool_value, string_value)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    payload.product_id,
                    payload.attribute_def_id,
                    payload.int_value,
                    payload.float_value,
                    payload.bool_value,
                    payload.string_value
                ],
            )
            .map(|_| ())
            .map_err(From::from)
            .map_err(|e: FailureError| {
                e.context(format!("Create product attribute value {:?} error occurred", payload))
                    .into()
            })
    }
}
