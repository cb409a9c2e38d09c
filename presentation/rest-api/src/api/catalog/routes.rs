use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::get_all::GetCatalogUseCase;

use crate::api::catalog::dto::CatalogItemResponse;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
}

impl CatalogApi {
    pub fn new(get_catalog_use_case: Arc<dyn GetCatalogUseCase>) -> Self {
        Self {
            get_catalog_use_case,
        }
    }
}

/// Menu API
#[OpenApi]
impl CatalogApi {
    /// List the menu
    ///
    /// Returns every item on the fixed menu in display order.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(&self) -> Json<Vec<CatalogItemResponse>> {
        let items = self.get_catalog_use_case.execute();
        Json(items.into_iter().map(|i| i.into()).collect())
    }
}
