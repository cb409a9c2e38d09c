use super::{
    catalog_config::CatalogConfig, cors_config, order_config::OrderBackendConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub order_backend: OrderBackendConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env(),
            order_backend: OrderBackendConfig::from_env()?,
        })
    }
}
