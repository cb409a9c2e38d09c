use std::env;
use std::path::PathBuf;

/// Where the menu comes from
///
/// Environment variables:
/// - CATALOG_PATH: JSON catalog file (default: unset, built-in menu)
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var("CATALOG_PATH").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let path = value
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Self { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_built_in_menu_when_unset_or_blank() {
        assert!(CatalogConfig::from_value(None).path.is_none());
        assert!(CatalogConfig::from_value(Some("  ".to_string())).path.is_none());
    }

    #[test]
    fn should_read_catalog_path() {
        let config = CatalogConfig::from_value(Some("/etc/menu.json".to_string()));

        assert_eq!(config.path, Some(PathBuf::from("/etc/menu.json")));
    }
}
