use super::errors::CatalogError;
use super::model::Catalog;

/// Source of the fixed menu, read once at start-up.
pub trait CatalogProvider: Send + Sync {
    fn load(&self) -> Result<Catalog, CatalogError>;
}
