//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CacheConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig,
};
