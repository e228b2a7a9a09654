pub mod app_config;
pub mod config;
pub mod criteria;
pub mod deal;
pub mod error;
pub mod providers;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::{load_profile, FilterCriteria};
pub use deal::Deal;
pub use error::ConfigError;
pub use providers::{load_providers, ProviderConfig, ProvidersFile, SelectorSet};
