//! Catalog is a backend responsible for managing categories, per category
//! attribute schemas and products with dynamic attribute values and image
//! uploads.
//!
//! The layered structure of the app is
//!
//! `Service -> Repo + BlobStorage`
//!
//! Each layer can throw Error with context or cover occurred error with
//! Error in the context.

extern crate chrono;
#[macro_use]
extern crate failure;
extern crate futures;
extern crate futures_cpupool;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate r2d2;
extern crate r2d2_sqlite;
extern crate regex;
extern crate rusqlite;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate validator;
#[macro_use]
extern crate validator_derive;

#[macro_use]
pub mod macros;
pub mod config;
pub mod errors;
pub mod models;
pub mod repos;
pub mod schema;
pub mod services;
pub mod storage;

use std::sync::Arc;

use failure::Error as FailureError;
use futures_cpupool::CpuPool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::Config;
use crate::repos::repo_factory::ReposFactoryImpl;
use crate::services::Service;
use crate::storage::LocalStorage;

/// Builds the service stack from the provided `Config`: db pool with the
/// tables bootstrapped, cpu pool and local blob storage.
pub fn create_service(config: Config) -> Result<Service<ReposFactoryImpl>, FailureError> {
    let db_manager = SqliteConnectionManager::file(&config.database.url);
    let db_pool = r2d2::Pool::builder().build(db_manager)?;

    {
        let conn = db_pool.get()?;
        schema::create_tables(&conn)?;
    }

    let cpu_pool = CpuPool::new(config.thread_count);

    let blob_storage = Arc::new(LocalStorage::new(&config.uploads.path, config.uploads.prefix.clone())?);

    Ok(Service::new(db_pool, cpu_pool, blob_storage, ReposFactoryImpl))
}
