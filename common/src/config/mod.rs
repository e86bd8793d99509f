mod config_manager;
mod content_provider;
mod serializer;
mod validate;

pub use config_manager::ConfigManager;
pub use content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
