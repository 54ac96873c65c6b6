//! Models contains all structures that are used in different
//! modules of the app

pub mod attribute;
pub mod attribute_value;
pub mod category;
pub mod product;
pub mod product_image;
pub mod validation_rules;

pub use self::attribute::*;
pub use self::attribute_value::*;
pub use self::category::*;
pub use self::product::*;
pub use self::product_image::*;
pub use self::validation_rules::*;
