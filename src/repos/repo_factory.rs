//! Repo factory, hands out repos bound to a borrowed connection so that
//! several repos can share one transaction.
use rusqlite::Connection;

use crate::repos::attributes::{AttributesRepo, AttributesRepoImpl};
use crate::repos::categories::{CategoriesRepo, CategoriesRepoImpl};
use crate::repos::product_attrs::{ProductAttrsRepo, ProductAttrsRepoImpl};
use crate::repos::product_images::{ProductImagesRepo, ProductImagesRepoImpl};
use crate::repos::products::{ProductsRepo, ProductsRepoImpl};

pub trait ReposFactory: Clone + Send + 'static {
    fn create_categories_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn CategoriesRepo + 'a>;
    fn create_attributes_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn AttributesRepo + 'a>;
    fn create_products_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn ProductsRepo + 'a>;
    fn create_product_attrs_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn ProductAttrsRepo + 'a>;
    fn create_product_images_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn ProductImagesRepo + 'a>;
}

#[derive(Debug, Default, Copy, Clone)]
pub struct ReposFactoryImpl;

impl ReposFactory for ReposFactoryImpl {
    fn create_categories_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn CategoriesRepo + 'a> {
        Box::new(CategoriesRepoImpl::new(db_conn))
    }
    fn create_attributes_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn AttributesRepo + 'a> {
        Box::new(AttributesRepoImpl::new(db_conn))
    }
    fn create_products_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn ProductsRepo + 'a> {
        Box::new(ProductsRepoImpl::new(db_conn))
    }
    fn create_product_attrs_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn ProductAttrsRepo + 'a> {
        Box::new(ProductAttrsRepoImpl::new(db_conn))
    }
    fn create_product_images_repo<'a>(&self, db_conn: &'a Connection) -> Box<dyn ProductImagesRepo + 'a> {
        Box::new(ProductImagesRepoImpl::new(db_conn))
    }
}
