use std::sync::Arc;

use crate::domain::catalog::model::{Catalog, CatalogItem};
use crate::domain::catalog::use_cases::get_all::GetCatalogUseCase;
use crate::domain::logger::Logger;

pub struct GetCatalogUseCaseImpl {
    pub catalog: Arc<Catalog>,
    pub logger: Arc<dyn Logger>,
}

impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    fn execute(&self) -> Vec<CatalogItem> {
        self.logger.debug("Getting catalog");
        self.catalog.items().to_vec()
    }
}
