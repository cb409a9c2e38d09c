use poem_openapi::Object;

use business::domain::catalog::model::CatalogItem;

#[derive(Debug, Clone, Object)]
pub struct CatalogItemResponse {
    /// Catalog item identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Unit price in minor currency units
    pub price: u64,
    /// Unit price as displayed, e.g. "20000 сум"
    pub price_label: String,
}

impl From<CatalogItem> for CatalogItemResponse {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id.value(),
            price_label: item.price.to_string(),
            price: item.price.amount(),
            name: item.name,
        }
    }
}
