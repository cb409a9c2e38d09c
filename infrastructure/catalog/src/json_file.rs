use std::path::PathBuf;

use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{Catalog, CatalogItem};
use business::domain::catalog::provider::CatalogProvider;
use business::domain::shared::value_objects::{ItemId, Price};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogItemEntity {
    pub id: u32,
    pub name: String,
    pub price: u64,
}

impl CatalogItemEntity {
    pub fn into_domain(self) -> Result<CatalogItem, CatalogError> {
        CatalogItem::new(ItemId::new(self.id), self.name, Price::new(self.price))
    }
}

/// Reads the menu from a JSON array of `{ "id", "name", "price" }` records.
pub struct JsonFileCatalogProvider {
    path: PathBuf,
}

impl JsonFileCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(raw: &str) -> Result<Catalog, CatalogError> {
        let entities: Vec<CatalogItemEntity> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let items = entities
            .into_iter()
            .map(CatalogItemEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::new(items)
    }
}

impl CatalogProvider for JsonFileCatalogProvider {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::Unreadable(format!("{}: {}", self.path.display(), e)))?;

        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn should_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":7,"name":"Лаваш","price":25000}},{{"id":8,"name":"Чай","price":3000}}]"#
        )
        .unwrap();

        let catalog = JsonFileCatalogProvider::new(file.path()).load().unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ItemId::new(7)).unwrap().name, "Лаваш");
        assert_eq!(catalog.get(ItemId::new(8)).unwrap().price, Price::new(3000));
    }

    #[test]
    fn should_report_unreadable_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let provider = JsonFileCatalogProvider::new(dir.path().join("missing.json"));

        assert!(matches!(provider.load().unwrap_err(), CatalogError::Unreadable(_)));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = JsonFileCatalogProvider::parse(r#"[{"id": 1, "name": "Кола", "price": -5}]"#);

        assert!(matches!(result.unwrap_err(), CatalogError::Malformed(_)));
    }

    #[test]
    fn should_reject_unknown_fields() {
        let result = JsonFileCatalogProvider::parse(
            r#"[{"id": 1, "name": "Кола", "price": 8000, "stock": 4}]"#,
        );

        assert!(matches!(result.unwrap_err(), CatalogError::Malformed(_)));
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let result = JsonFileCatalogProvider::parse(
            r#"[{"id":1,"name":"Кола","price":8000},{"id":1,"name":"Чай","price":3000}]"#,
        );

        assert!(matches!(result.unwrap_err(), CatalogError::DuplicateId(_)));
    }

    #[test]
    fn should_reject_blank_names() {
        let result = JsonFileCatalogProvider::parse(r#"[{"id": 1, "name": " ", "price": 8000}]"#);

        assert!(matches!(result.unwrap_err(), CatalogError::NameEmpty(_)));
    }

    #[test]
    fn should_reject_empty_array() {
        let result = JsonFileCatalogProvider::parse("[]");

        assert!(matches!(result.unwrap_err(), CatalogError::Empty));
    }
}
