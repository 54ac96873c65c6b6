//! Attributes repo, presents operations with the attribute_definitions table
use failure::Error as FailureError;
use rusqlite::{params, Connection, Row};

use crate::models::{AttributeDefId, AttributeDefinition, CategoryId, DataType, NewAttributeDefinition};

use super::types::RepoResult;

pub trait AttributesRepo {
    /// Returns the category's attribute definitions in insertion order
    fn list_for_category(&self, category_id_arg: CategoryId) -> RepoResult<Vec<AttributeDefinition>>;

    /// Creates new attribute definition
    fn create(&self, payload: NewAttributeDefinition) -> RepoResult<AttributeDefinition>;
}

/// Attributes repository, responsible for handling attribute definitions
pub struct AttributesRepoImpl<'a> {
    pub db_conn: &'a Connection,
}

impl<'a> AttributesRepoImpl<'a> {
    pub fn new(db_conn: &'a Connection) -> Self {
        Self { db_conn }
    }
}

fn definition_from_row(row: &Row) -> rusqlite::Result<AttributeDefinition> {
    Ok(AttributeDefinition {
        id: row.get("id")?,
        category_id: row.get("category_id")?,
        name: row.get("name")?,
        slug: row.get("slug")?,
        data_type: row.get("data_type")?,
        is_required: row.get("is_required")?,
    })
}

impl<'a> AttributesRepo for AttributesRepoImpl<'a> {
    fn list_for_category(&self, category_id_arg: CategoryId) -> RepoResult<Vec<AttributeDefinition>> {
        debug!("Find all attribute definitions for category {}.", category_id_arg);
        let mut stmt = self.db_conn.prepare(
            "SELECT id, category_id, name, slug, data_type, is_required
             FROM attribute_definitions WHERE category_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![category_id_arg], definition_from_row)?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(From::from)
            .map_err(|e: FailureError| {
                e.context(format!("List attribute definitions for category {} error occurred", category_id_arg))
                    .into()
            })
    }

    fn create(&self, payload: NewAttributeDefinition) -> RepoResult<AttributeDefinition> {
        debug!("Create attribute definition {:?}.", payload);
        let data_type = DataType::from_input(&payload.data_type);
        self.db_conn
            .execute(
                "INSERT INTO attribute_definitions (category_id, name, slug, data_type, is_required)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![payload.category_id, payload.name, payload.slug, data_type, payload.is_required],
            )
            .map_err(From::from)
            .map_err(|e: FailureError| {
                e.context(format!("Create new attribute definition {:?} error occurred", payload))
                    .into()
            })
            .map(|_| AttributeDefinition {
                id: AttributeDefId(self.db_conn.last_insert_rowid()),
                category_id: payload.category_id,
                name: payload.name,
                slug: payload.slug,
                data_type,
                is_required: payload.is_required,
            })
    }
}
