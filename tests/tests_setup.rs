extern crate catalog_lib;
extern crate env_logger;
extern crate futures;
extern crate futures_cpupool;
extern crate r2d2;
extern crate r2d2_sqlite;
extern crate rusqlite;
extern crate tempfile;

use std::collections::HashMap;
use std::sync::Arc;

use futures::Future;
use futures_cpupool::CpuPool;
use r2d2_sqlite::SqliteConnectionManager;
use tempfile::TempDir;

use catalog_lib::models::*;
use catalog_lib::repos::types::DbPool;
use catalog_lib::repos::ReposFactoryImpl;
use catalog_lib::schema::create_tables;
use catalog_lib::services::*;
use catalog_lib::storage::LocalStorage;

pub struct TestContext {
    pub service: Service<ReposFactoryImpl>,
    pub upload_dir: TempDir,
}

/// Service wired to a fresh in-memory database and a temp upload root.
///
/// The pool is capped at a single connection so every call in a test sees
/// the same in-memory database.
pub fn create_catalog_service() -> TestContext {
    let _ = env_logger::try_init();

    let manager = SqliteConnectionManager::memory();
    let db_pool: DbPool = r2d2::Pool::builder().max_size(1).build(manager).unwrap();
    {
        let conn = db_pool.get().unwrap();
        create_tables(&conn).unwrap();
    }

    let cpu_pool = CpuPool::new(1);

    let upload_dir = tempfile::tempdir().unwrap();
    let blob_storage = LocalStorage::new(upload_dir.path().join("uploads"), "uploads").unwrap();

    TestContext {
        service: Service::new(db_pool, cpu_pool, Arc::new(blob_storage), ReposFactoryImpl),
        upload_dir,
    }
}

pub fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        description: format!("{} description", name),
    }
}

pub fn new_attribute(category_id: CategoryId, name: &str, slug: &str, data_type: &str) -> NewAttributeDefinition {
    NewAttributeDefinition {
        category_id,
        name: name.to_string(),
        slug: slug.to_string(),
        data_type: data_type.to_string(),
        is_required: false,
    }
}

pub fn required(mut definition: NewAttributeDefinition) -> NewAttributeDefinition {
    definition.is_required = true;
    definition
}

pub fn new_product_payload(category_id: CategoryId, name: &str, sku: &str, price: Option<&str>) -> NewProductPayload {
    NewProductPayload {
        category_id,
        name: name.to_string(),
        sku: sku.to_string(),
        price: price.map(|p| p.to_string()),
        attributes: HashMap::new(),
    }
}

pub fn with_attributes(mut payload: NewProductPayload, attributes: Vec<(&str, &str)>) -> NewProductPayload {
    payload.attributes = attributes
        .into_iter()
        .map(|(slug, value)| (slug.to_string(), value.to_string()))
        .collect();
    payload
}

pub fn image(filename: &str, content: &[u8]) -> ImageUpload {
    ImageUpload {
        filename: filename.to_string(),
        content: content.to_vec(),
    }
}
