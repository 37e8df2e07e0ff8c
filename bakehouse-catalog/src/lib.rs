pub mod product;
pub mod seed;

pub use product::{Cake, Catalog, CatalogError};
pub use seed::default_catalog;
