//! Repos is a module responsible for interacting with the sqlite db
pub mod attributes;
pub mod categories;
pub mod product_attrs;
pub mod product_images;
pub mod products;
pub mod repo_factory;
pub mod types;

pub use self::attributes::*;
pub use self::categories::*;
pub use self::product_attrs::*;
pub use self::product_images::*;
pub use self::products::*;
pub use self::repo_factory::*;
pub use self::types::*;
