mod app_config;
mod config;
pub mod storefront;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use storefront::{load_storefront, FilterConfig, PriceRange, StorefrontFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read storefront file {path}: {source}")]
    StorefrontFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse storefront file: {0}")]
    StorefrontFileParse(#[from] serde_yaml::Error),

    #[error("storefront validation failed: {0}")]
    Validation(String),
}
