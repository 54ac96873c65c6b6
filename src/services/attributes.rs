//! Attributes Services, presents operations with attribute definitions
use validator::Validate;

use crate::errors::Error;
use crate::models::{AttributeDefinition, CategoryId, NewAttributeDefinition};
use crate::repos::repo_factory::ReposFactory;
use crate::services::types::ServiceFuture;
use crate::services::Service;

pub trait AttributesService {
    /// Returns the category's attribute definitions in insertion order
    fn list_attributes(&self, category_id: CategoryId) -> ServiceFuture<Vec<AttributeDefinition>>;
    /// Creates new attribute definition in a category
    fn create_attribute(&self, payload: NewAttributeDefinition) -> ServiceFuture<AttributeDefinition>;
}

impl<F: ReposFactory> AttributesService for Service<F> {
    fn list_attributes(&self, category_id: CategoryId) -> ServiceFuture<Vec<AttributeDefinition>> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let attributes_repo = repo_factory.create_attributes_repo(&*conn);
            attributes_repo
                .list_for_category(category_id)
                .map_err(|e| e.context("AttributesService, list_attributes error occurred.").into())
        })
    }

    fn create_attribute(&self, payload: NewAttributeDefinition) -> ServiceFuture<AttributeDefinition> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            if let Err(errors) = payload.validate() {
                return Err(Error::Validate(errors).into());
            }
            let attributes_repo = repo_factory.create_attributes_repo(&*conn);
            attributes_repo
                .create(payload)
                .map_err(|e| e.context("AttributesService, create_attribute error occurred.").into())
        })
    }
}
