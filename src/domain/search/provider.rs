//! Search provider trait

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Remote encyclopedia lookup (Wikipedia and friends)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Article titles matching the phrase, in provider ranking order
    async fn search(&self, phrase: &str) -> Result<Vec<String>, DomainError>;

    /// Full plain-text summary of an article
    async fn summary(&self, title: &str) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
