mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, ClientConfig, LogFormat, LoggingConfig, ServerConfig,
};
