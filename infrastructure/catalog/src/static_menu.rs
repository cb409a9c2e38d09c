use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{Catalog, CatalogItem};
use business::domain::catalog::provider::CatalogProvider;
use business::domain::shared::value_objects::{ItemId, Price};

const MENU: [(u32, &str, u64); 3] = [
    (1, "Гамбургер", 20000),
    (2, "Хот-дог", 15000),
    (3, "Кола", 8000),
];

/// The built-in menu, used when no catalog file is configured.
pub struct StaticCatalogProvider;

impl CatalogProvider for StaticCatalogProvider {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let items = MENU
            .iter()
            .map(|(id, name, price)| {
                CatalogItem::new(ItemId::new(*id), name.to_string(), Price::new(*price))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_load_three_item_menu() {
        let catalog = StaticCatalogProvider.load().unwrap();

        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Гамбургер", "Хот-дог", "Кола"]);
    }

    #[test]
    fn should_price_items_in_minor_units() {
        let catalog = StaticCatalogProvider.load().unwrap();

        assert_eq!(catalog.get(ItemId::new(1)).unwrap().price, Price::new(20000));
        assert_eq!(catalog.get(ItemId::new(2)).unwrap().price, Price::new(15000));
        assert_eq!(catalog.get(ItemId::new(3)).unwrap().price, Price::new(8000));
    }
}
