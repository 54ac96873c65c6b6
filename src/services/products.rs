//! Products Services, presents operations with products and their relations
use chrono::Utc;
use failure::Error as FailureError;
use regex::Regex;

use crate::models::{
    ImageUpload, NewProdAttrValue, NewProduct, NewProductImage, NewProductPayload, Product, ProductAttribute, ProductId,
    ProductSummary,
};
use crate::repos::repo_factory::ReposFactory;
use crate::repos::types::{DbConnection, RepoResult};
use crate::services::types::ServiceFuture;
use crate::services::Service;
use crate::storage::BlobStorage;

pub trait ProductsService {
    /// Creates product with its attribute value rows and images in one
    /// transaction
    fn create_product(&self, payload: NewProductPayload, images: Vec<ImageUpload>) -> ServiceFuture<ProductId>;
    /// Returns fully assembled product by ID
    fn get_product(&self, product_id: ProductId) -> ServiceFuture<Option<Product>>;
    /// Returns product summaries, newest first
    fn list_products(&self) -> ServiceFuture<Vec<ProductSummary>>;
}

impl<F: ReposFactory> ProductsService for Service<F> {
    fn create_product(&self, payload: NewProductPayload, images: Vec<ImageUpload>) -> ServiceFuture<ProductId> {
        let repo_factory = self.repo_factory.clone();
        let blob_storage = self.blob_storage.clone();

        self.spawn_on_pool(move |mut conn| {
            create_product_with_relations(&mut conn, &repo_factory, &*blob_storage, payload, images)
                .map_err(|e| e.context("ProductsService, create_product error occurred.").into())
        })
    }

    fn get_product(&self, product_id: ProductId) -> ServiceFuture<Option<Product>> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let products_repo = repo_factory.create_products_repo(&*conn);
            let product_attrs_repo = repo_factory.create_product_attrs_repo(&*conn);
            let product_images_repo = repo_factory.create_product_images_repo(&*conn);

            products_repo
                .find(product_id)
                .and_then(|found| match found {
                    None => Ok(None),
                    Some((product, category_name)) => {
                        let attributes = product_attrs_repo
                            .find_all_attributes(product_id)?
                            .into_iter()
                            .map(|(definition, value_row)| {
                                let value = value_row.decode(definition.data_type);
                                ProductAttribute {
                                    name: definition.name,
                                    data_type: definition.data_type,
                                    value,
                                }
                            })
                            .collect();

                        let images = product_images_repo
                            .find_all_images(product_id)?
                            .into_iter()
                            .map(|image| image.storage_path)
                            .collect();

                        Ok(Some(Product {
                            id: product.id,
                            category_id: product.category_id,
                            category_name,
                            name: product.name,
                            sku: product.sku,
                            price: product.price,
                            is_active: product.is_active,
                            created_at: product.created_at,
                            attributes,
                            images,
                        }))
                    }
                })
                .map_err(|e| e.context("ProductsService, get_product error occurred.").into())
        })
    }

    fn list_products(&self) -> ServiceFuture<Vec<ProductSummary>> {
        let repo_factory = self.repo_factory.clone();

        self.spawn_on_pool(move |conn| {
            let products_repo = repo_factory.create_products_repo(&*conn);
            let product_images_repo = repo_factory.create_product_images_repo(&*conn);

            products_repo
                .list_with_categories()
                .and_then(|rows| {
                    rows.into_iter()
                        .map(|(product, category_name)| {
                            let images = product_images_repo
                                .find_all_images(product.id)?
                                .into_iter()
                                .map(|image| image.storage_path)
                                .collect();
                            Ok(ProductSummary {
                                id: product.id,
                                name: product.name,
                                sku: product.sku,
                                price: product.price,
                                category_name,
                                images,
                            })
                        })
                        .collect::<RepoResult<Vec<_>>>()
                })
                .map_err(|e| e.context("ProductsService, list_products error occurred.").into())
        })
    }
}

/// Inserts the product row, one value row per attribute definition of the
/// category and the image rows, committing all of it atomically. Blobs are
/// written before commit so a committed product never points at a missing
/// file.
fn create_product_with_relations<F: ReposFactory>(
    conn: &mut DbConnection,
    repo_factory: &F,
    blob_storage: &dyn BlobStorage,
    payload: NewProductPayload,
    images: Vec<ImageUpload>,
) -> Result<ProductId, FailureError> {
    let price = normalize_price(payload.price.as_deref());

    let tx = conn.transaction()?;
    let product_id = {
        let products_repo = repo_factory.create_products_repo(&tx);
        let attributes_repo = repo_factory.create_attributes_repo(&tx);
        let product_attrs_repo = repo_factory.create_product_attrs_repo(&tx);
        let product_images_repo = repo_factory.create_product_images_repo(&tx);

        let product = products_repo.create(NewProduct {
            category_id: payload.category_id,
            name: payload.name,
            sku: payload.sku,
            price,
        })?;

        // One row per definition, populated or not.
        let definitions = attributes_repo.list_for_category(payload.category_id)?;
        for definition in &definitions {
            let raw = payload.attributes.get(&definition.slug).map(|s| s.as_str());
            let value_row = NewProdAttrValue::encode(product.id, definition, raw)?;
            product_attrs_repo.create(value_row)?;
        }

        for image in &images {
            if image.filename.is_empty() {
                continue;
            }
            let filename = format!("{}_{}", Utc::now().format("%Y%m%d%H%M%S%6f"), sanitize_filename(&image.filename));
            let storage_path = blob_storage.store(&filename, &image.content)?;
            product_images_repo.create(NewProductImage {
                product_id: product.id,
                storage_path,
            })?;
        }

        product.id
    };
    tx.commit()?;

    Ok(product_id)
}

/// Lenient price parsing, unparsable or missing input is recorded as 0.0.
fn normalize_price(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok()).unwrap_or(0.0)
}

/// Reduces an upload filename to a safe name: runs of anything outside
/// [A-Za-z0-9_.-] collapse to one underscore, which also flattens path
/// separators, then leading and trailing dots and underscores are stripped.
fn sanitize_filename(filename: &str) -> String {
    lazy_static! {
        static ref FILENAME_FORBIDDEN_RE: Regex = Regex::new(r"[^A-Za-z0-9_.-]+").unwrap();
    }

    let cleaned = FILENAME_FORBIDDEN_RE.replace_all(filename, "_");
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}
