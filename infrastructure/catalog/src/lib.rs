pub mod json_file;
pub mod static_menu;

pub use json_file::JsonFileCatalogProvider;
pub use static_menu::StaticCatalogProvider;
