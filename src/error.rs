use std::fmt;

/// Custom error type for Sentry API operations
#[derive(Debug)]
pub enum SentryError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// No organization slug given and no default configured
    MissingOrganization,
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for SentryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentryError::Http(e) => write!(f, "HTTP request failed: {}", e),
            SentryError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            SentryError::TokenNotFound(msg) => write!(f, "{}", msg),
            SentryError::MissingOrganization => write!(
                f,
                "Organization is required: pass --org, set SENTRY_ORG, or configure a context org"
            ),
            SentryError::Json(msg) => write!(f, "JSON error: {}", msg),
            SentryError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SentryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SentryError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SentryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SentryError::Json(err.to_string());
        }
        SentryError::Http(err)
    }
}

impl From<serde_json::Error> for SentryError {
    fn from(err: serde_json::Error) -> Self {
        SentryError::Json(err.to_string())
    }
}

impl From<std::io::Error> for SentryError {
    fn from(err: std::io::Error) -> Self {
        SentryError::Config(err.to_string())
    }
}

impl From<dialoguer::Error> for SentryError {
    fn from(err: dialoguer::Error) -> Self {
        SentryError::Config(format!("Interactive prompt failed: {}", err))
    }
}

/// Result type alias for Sentry operations
pub type Result<T> = std::result::Result<T, SentryError>;
