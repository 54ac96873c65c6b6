//! Services is a core layer for the app business logic like
//! validation and transaction scope.

pub mod attributes;
pub mod categories;
pub mod products;
pub mod types;

use std::sync::Arc;

use failure::Error as FailureError;
use futures_cpupool::CpuPool;

use crate::errors::Error;
use crate::repos::repo_factory::ReposFactory;
use crate::repos::types::{DbConnection, DbPool};
use crate::services::types::ServiceFuture;
use crate::storage::BlobStorage;

pub use self::attributes::AttributesService;
pub use self::categories::CategoriesService;
pub use self::products::ProductsService;

/// Service context shared by all operations
pub struct Service<F: ReposFactory> {
    pub db_pool: DbPool,
    pub cpu_pool: CpuPool,
    pub blob_storage: Arc<dyn BlobStorage>,
    pub repo_factory: F,
}

impl<F: ReposFactory> Clone for Service<F> {
    fn clone(&self) -> Self {
        Self {
            db_pool: self.db_pool.clone(),
            cpu_pool: self.cpu_pool.clone(),
            blob_storage: self.blob_storage.clone(),
            repo_factory: self.repo_factory.clone(),
        }
    }
}

impl<F: ReposFactory> Service<F> {
    pub fn new(db_pool: DbPool, cpu_pool: CpuPool, blob_storage: Arc<dyn BlobStorage>, repo_factory: F) -> Self {
        Self {
            db_pool,
            cpu_pool,
            blob_storage,
            repo_factory,
        }
    }

    /// Runs the closure on the cpu pool with a connection taken from the
    /// db pool, releasing it on every exit path.
    pub fn spawn_on_pool<T, Func>(&self, f: Func) -> ServiceFuture<T>
    where
        T: Send + 'static,
        Func: FnOnce(DbConnection) -> Result<T, FailureError> + Send + 'static,
    {
        let db_pool = self.db_pool.clone();
        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| {
                    error!("Could not get connection to db from pool! {}", e);
                    FailureError::from(e)
                        .context(Error::Database("Could not get connection to db from pool".to_string()))
                        .into()
                })
                .and_then(f)
        }))
    }
}
