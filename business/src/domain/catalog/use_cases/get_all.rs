use crate::domain::catalog::model::CatalogItem;

pub trait GetCatalogUseCase: Send + Sync {
    fn execute(&self) -> Vec<CatalogItem>;
}
