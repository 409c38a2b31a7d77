//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, DisplayConfig, LogFormat, LoggingConfig, WikipediaConfig, MAX_SEARCH_RESULTS,
};
