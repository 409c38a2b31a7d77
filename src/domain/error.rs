use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Cancelled by user")]
    Cancelled,

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the session can report this error and keep going.
    ///
    /// Remote lookups that fail are shown to the user instead of ending the
    /// session; terminal and configuration failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Provider { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Article 'Praha' not found");
        assert_eq!(error.to_string(), "Not found: Article 'Praha' not found");
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("wikipedia", "HTTP 503");
        assert_eq!(error.to_string(), "Provider error: wikipedia - HTTP 503");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Phrase must not be empty");
        assert_eq!(error.to_string(), "Validation error: Phrase must not be empty");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(DomainError::provider("wikipedia", "timeout").is_recoverable());
        assert!(DomainError::not_found("missing").is_recoverable());
        assert!(!DomainError::Cancelled.is_recoverable());
        assert!(!DomainError::terminal("stdin closed").is_recoverable());
        assert!(!DomainError::configuration("bad").is_recoverable());
    }
}
