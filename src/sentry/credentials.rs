//! Sentry auth token resolution from multiple sources

use log::debug;

use crate::config::credentials;
use crate::error::{Result, SentryError};

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (SENTRY_AUTH_TOKEN, SENTRY_TOKEN - in order)
    /// 3. Active context token
    pub fn resolve(&self, cli_token: Option<&str>, context_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        if let Some(token) = context_token.filter(|t| !t.is_empty()) {
            debug!("Using token from active context");
            return Ok(token.to_string());
        }

        debug!(
            "No token found in CLI, environment variables {:?} or context",
            credentials::TOKEN_ENV_VARS
        );
        Err(SentryError::TokenNotFound(self.token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      sentryctl --token <TOKEN>\n\
             2. Environment var:   export SENTRY_AUTH_TOKEN=<TOKEN>  (also: SENTRY_TOKEN)\n\
             3. Context:           sentryctl config set-context <NAME> --host {} --token <TOKEN>\n\
             \n\
             Checked: env vars [{}]",
            self.host, self.host, env_vars
        )
    }
}
