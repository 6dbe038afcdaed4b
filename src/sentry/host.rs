//! Host resolution from multiple sources

use log::debug;

use crate::config::{defaults, host as host_config};

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (SENTRY_URL)
    /// 3. Active context host
    /// 4. sentry.io
    pub fn resolve(cli_host: Option<&str>, context_host: Option<&str>) -> String {
        if let Some(host) = cli_host.filter(|h| !h.is_empty()) {
            debug!("Using host from CLI argument: {}", host);
            return host.to_string();
        }

        if let Ok(host) = std::env::var(host_config::ENV_VAR) {
            if !host.is_empty() {
                debug!(
                    "Using host from {} environment variable: {}",
                    host_config::ENV_VAR,
                    host
                );
                return host;
            }
        }

        if let Some(host) = context_host.filter(|h| !h.is_empty()) {
            debug!("Using host from active context: {}", host);
            return host.to_string();
        }

        debug!("No host configured, using default: {}", defaults::HOST);
        defaults::HOST.to_string()
    }
}
