use std::time::Duration;

use serde::Deserialize;

use crate::domain::DomainError;

/// Upper bound MediaWiki accepts for `srlimit` on anonymous requests
pub const MAX_SEARCH_RESULTS: u32 = 500;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub wikipedia: WikipediaConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WikipediaConfig {
    /// Wikipedia language edition, fixed for the whole session
    pub language: String,
    /// Full `api.php` URL; derived from `language` when unset
    pub api_url: Option<String>,
    /// Maximum number of titles requested per search
    pub results: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Column width excerpts are wrapped to
    pub wrap_width: usize,
    /// Number of articles visible at once in the selection list
    pub page_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            language: "cs".to_string(),
            api_url: None,
            results: 10,
            timeout_secs: 10,
            user_agent: format!(
                "{}/{} ({})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION")
            ),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            wrap_width: 90,
            page_size: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl WikipediaConfig {
    pub fn api_url(&self) -> String {
        match &self.api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.wikipedia.org/w/api.php", self.language),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("WIKI_PHRASE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the session cannot work with
    pub fn validate(&self) -> Result<(), DomainError> {
        let language = &self.wikipedia.language;
        if language.is_empty()
            || !language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(DomainError::configuration(format!(
                "Invalid Wikipedia language code '{}'",
                language
            )));
        }

        if self.wikipedia.results == 0 || self.wikipedia.results > MAX_SEARCH_RESULTS {
            return Err(DomainError::configuration(format!(
                "Search results must be between 1 and {}, got {}",
                MAX_SEARCH_RESULTS, self.wikipedia.results
            )));
        }

        if self.wikipedia.timeout_secs == 0 {
            return Err(DomainError::configuration("Timeout must be at least one second"));
        }

        if self.display.wrap_width == 0 {
            return Err(DomainError::configuration("Wrap width must be greater than zero"));
        }

        Ok(())
    }
}
