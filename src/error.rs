use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Feed fetch error: {0}")]
    #[diagnostic(code(calview::fetch))]
    Fetch(String),

    #[error("Calendar parse error: {0}")]
    #[diagnostic(code(calview::parse))]
    Parse(String),

    #[error("Render error: {0}")]
    #[diagnostic(code(calview::render))]
    Render(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(calview::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(calview::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(calview::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(calview::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(calview::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Fetch(format!("request timed out: {}", err))
        } else {
            Error::Fetch(err.to_string())
        }
    }
}

#[cfg(feature = "web-interface")]
impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Error::Render(err.to_string())
    }
}

impl Error {
    /// Whether the failure came from the remote feed rather than from us
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Fetch(_) | Error::Parse(_))
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create feed fetch errors
pub fn fetch_error(message: &str) -> Error {
    Error::Fetch(message.to_string())
}

/// Helper to create calendar parse errors
pub fn parse_error(message: &str) -> Error {
    Error::Parse(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_classification() {
        assert!(fetch_error("down").is_upstream());
        assert!(parse_error("garbage").is_upstream());
        assert!(!config_error("bad port").is_upstream());
        assert!(!Error::Render("template".to_string()).is_upstream());
    }

    #[test]
    fn test_env_error_names_variable() {
        let err = env_error("FEED_URL");
        assert_eq!(
            err.to_string(),
            "Environment error: Missing environment variable: FEED_URL"
        );
    }
}
