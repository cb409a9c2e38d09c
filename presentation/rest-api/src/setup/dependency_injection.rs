use std::sync::Arc;

use anyhow::Context;

use catalog::{JsonFileCatalogProvider, StaticCatalogProvider};
use logger::TracingLogger;
use order_backend::{HttpOrderSubmitter, NoopOrderSubmitter, OrderBackendClient};

use business::application::cart::decrement::DecrementItemUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::increment::IncrementItemUseCaseImpl;
use business::application::catalog::get_all::GetCatalogUseCaseImpl;
use business::application::order::submit::SubmitOrderUseCaseImpl;
use business::domain::cart::session::CartSession;
use business::domain::catalog::model::Catalog;
use business::domain::catalog::provider::CatalogProvider;
use business::domain::logger::Logger;
use business::domain::order::services::OrderSubmitter;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub order_api: crate::api::order::routes::OrderApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Catalog is read once; the session lives as long as the process.
        let catalog = Arc::new(Self::load_catalog(config, logger.as_ref())?);
        let session = Arc::new(CartSession::new(catalog.clone()));

        let submitter: Arc<dyn OrderSubmitter> = match &config.order_backend.url {
            Some(url) => {
                logger.info(&format!("Orders are forwarded to {}", url));
                let client = OrderBackendClient::new(url.clone(), config.order_backend.timeout);
                Arc::new(HttpOrderSubmitter::new(client))
            }
            None => {
                logger.warn("ORDER_BACKEND_URL not set, orders will only be acknowledged");
                Arc::new(NoopOrderSubmitter)
            }
        };

        // Catalog use cases
        let get_catalog_use_case = Arc::new(GetCatalogUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let increment_use_case = Arc::new(IncrementItemUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let decrement_use_case = Arc::new(DecrementItemUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let submit_order_use_case = Arc::new(SubmitOrderUseCaseImpl {
            session,
            submitter,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(get_catalog_use_case);
        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            increment_use_case,
            decrement_use_case,
        );
        let order_api = crate::api::order::routes::OrderApi::new(submit_order_use_case);

        Ok(Self {
            health_api,
            catalog_api,
            cart_api,
            order_api,
        })
    }

    fn load_catalog(config: &AppConfig, logger: &dyn Logger) -> anyhow::Result<Catalog> {
        let catalog = match &config.catalog.path {
            Some(path) => JsonFileCatalogProvider::new(path)
                .load()
                .with_context(|| format!("failed to load catalog from {}", path.display()))?,
            None => StaticCatalogProvider
                .load()
                .context("failed to load built-in menu")?,
        };

        logger.info(&format!("Catalog loaded with {} items", catalog.len()));
        Ok(catalog)
    }
}
