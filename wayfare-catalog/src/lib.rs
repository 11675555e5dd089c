pub mod product;
pub mod provider;

pub use product::{Flight, Hotel, Offering};
pub use provider::{CatalogProvider, StaticCatalog};
