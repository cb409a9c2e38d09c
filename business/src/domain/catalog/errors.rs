use crate::domain::shared::value_objects::ItemId;

/// Catalog errors. Code-style identifiers for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.empty")]
    Empty,
    #[error("catalog.duplicate_id")]
    DuplicateId(ItemId),
    #[error("catalog.name_empty")]
    NameEmpty(ItemId),
    #[error("catalog.unreadable")]
    Unreadable(String),
    #[error("catalog.malformed")]
    Malformed(String),
}
