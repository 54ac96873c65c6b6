//! Categories Services, presents CRUD operations with categories
use validator::Validate;

use crate::errors::Error;
use crate::models::{Category, CategoryId, NewCategory, UpdateCategory};
use crate::repos::repo_factory::ReposFactory;
use crate::services::types::ServiceFuture;
use crate::services::Service;

pub trait CategoriesService {
    /// Returns all categories ordered by name
    fn list_categories(&self) -> ServiceFuture<Vec<Category>>;
    /// Creates new category
    fn create_category(&self, payload: NewCategory) -> ServiceFuture<Category>;
    /// Returns category by ID
    fn get_category(&self, category_id: CategoryId) -> ServiceFuture<Option<Category>>;
    /// Updates specific category
    fn update_category(&self, category_id: CategoryId, payload: UpdateCategory) -> ServiceFuture<()>;
    /// Deletes specific category. Attribute definitions and products
    /// referencing it stay behind, that is the caller's concern.
    fn delete_category(&self, category_id: CategoryId) -> ServiceFuture<()>;
}

impl<F: ReposFactory> CategoriesService for Service<F> {
    fn list_categories(&self) -> ServiceFuture<Vec<Category>> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let categories_repo = repo_factory.create_categories_repo(&*conn);
            categories_repo
                .list()
                .map_err(|e| e.context("CategoriesService, list_categories error occurred.").into())
        })
    }

    fn create_category(&self, payload: NewCategory) -> ServiceFuture<Category> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            if let Err(errors) = payload.validate() {
                return Err(Error::Validate(errors).into());
            }
            let categories_repo = repo_factory.create_categories_repo(&*conn);
            categories_repo
                .create(payload)
                .map_err(|e| e.context("CategoriesService, create_category error occurred.").into())
        })
    }

    fn get_category(&self, category_id: CategoryId) -> ServiceFuture<Option<Category>> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let categories_repo = repo_factory.create_categories_repo(&*conn);
            categories_repo
                .find(category_id)
                .map_err(|e| e.context("CategoriesService, get_category error occurred.").into())
        })
    }

    fn update_category(&self, category_id: CategoryId, payload: UpdateCategory) -> ServiceFuture<()> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            if let Err(errors) = payload.validate() {
                return Err(Error::Validate(errors).into());
            }
            let categories_repo = repo_factory.create_categories_repo(&*conn);
            categories_repo
                .update(category_id, payload)
                .map_err(|e| e.context("CategoriesService, update_category error occurred.").into())
        })
    }

    fn delete_category(&self, category_id: CategoryId) -> ServiceFuture<()> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let categories_repo = repo_factory.create_categories_repo(&*conn);
            categories_repo
                .delete(category_id)
                .map_err(|e| e.context("CategoriesService, delete_category error occurred.").into())
        })
    }
}
