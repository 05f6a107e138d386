//! Error handling for name-forge

use thiserror::Error;

/// Main error type for name-forge
///
/// The naming engine itself never fails; every variant here originates from the
/// AI collaborator, configuration, or the command line.
#[derive(Error, Debug, Clone)]
pub enum NameForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("LLM provider error ({provider}): {message}")]
    Provider {
        provider: crate::types::ProviderKind,
        message: String,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Authentication error: {message}")]
    Authentication { message: String },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl NameForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an LLM provider error
    pub fn provider(provider: crate::types::ProviderKind, message: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a rate limit error
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether the failure came from talking to the generation service
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::Provider { .. }
                | Self::Network { .. }
                | Self::Authentication { .. }
                | Self::RateLimit { .. }
                | Self::Timeout { .. }
                | Self::Parse { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or environment", message)
            }
            Self::Provider { provider, message } => {
                format!("❌ LLM provider ({}) error: {}\n💡 Check your API key and model name", provider, message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::Authentication { message } => {
                format!("❌ Authentication failed: {}\n💡 Verify your API keys are correct", message)
            }
            Self::RateLimit { message, retry_after } => {
                let retry = retry_after.map_or(String::new(), |s| format!(" Retry in {}s.", s));
                format!("⏱️  Rate limit exceeded: {}{}\n💡 Wait a moment or switch provider with --provider", message, retry)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("⏱️  Operation '{}' timed out after {}s\n💡 The AI service may be overloaded, try again", operation, timeout_secs)
            }
            Self::Parse { message, .. } => {
                format!("❌ Could not understand the AI response: {}\n💡 Try again or use a different model", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

impl From<reqwest::Error> for NameForgeError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", crate::llm::providers::REQUEST_TIMEOUT_SECS)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for NameForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for NameForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NameForgeError>;

/// Build a CLI error with `format!` arguments
#[macro_export]
macro_rules! cli_error {
    ($msg:expr) => {
        $crate::error::NameForgeError::cli($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NameForgeError::cli(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderKind;

    #[test]
    fn test_display_includes_message() {
        let error = NameForgeError::config("missing key");
        assert!(error.to_string().contains("missing key"));

        let error = NameForgeError::provider(ProviderKind::Anthropic, "bad model");
        assert_eq!(error.to_string(), "LLM provider error (anthropic): bad model");
    }

    #[test]
    fn test_collaborator_failure_classification() {
        assert!(NameForgeError::rate_limit("slow down", Some(5)).is_collaborator_failure());
        assert!(NameForgeError::parse("not json", None).is_collaborator_failure());
        assert!(!NameForgeError::cli("bad flag").is_collaborator_failure());
        assert!(!NameForgeError::io("gone", None).is_collaborator_failure());
    }

    #[test]
    fn test_user_message_hints() {
        let message = NameForgeError::rate_limit("quota", Some(30)).user_message();
        assert!(message.contains("Retry in 30s."));

        let message = NameForgeError::io("denied", Some("words.txt".to_string())).user_message();
        assert!(message.contains("(words.txt)"));
    }

    #[test]
    fn test_cli_error_macro() {
        let error = cli_error!("unknown flag {}", "--nope");
        assert!(matches!(error, NameForgeError::Cli { ref message } if message == "unknown flag --nope"));
    }
}
