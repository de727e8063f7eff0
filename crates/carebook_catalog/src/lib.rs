// --- File: crates/carebook_catalog/src/lib.rs ---
pub mod logic;
pub mod models;

pub use logic::{select_provider, Catalog, CatalogError, PROVIDERS};
pub use models::{Provider, ProviderCard};
