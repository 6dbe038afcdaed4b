/// Configuration constants for the Sentry web API
pub mod api {
    /// Base path for Sentry API v0
    pub const BASE_PATH: &str = "/api/0";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Projects endpoint (nested under an organization)
    pub const PROJECTS: &str = "projects";

    /// Teams endpoint (nested under an organization)
    pub const TEAMS: &str = "teams";

    /// Stats endpoint (nested under an organization)
    pub const STATS: &str = "stats";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["SENTRY_AUTH_TOKEN", "SENTRY_TOKEN"];
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable holding the Sentry URL or hostname
    pub const ENV_VAR: &str = "SENTRY_URL";
}

/// Configuration constants for the default organization
pub mod org {
    /// Environment variable holding the default organization slug
    pub const ENV_VAR: &str = "SENTRY_ORG";
}

/// Configuration constants for named contexts
pub mod context {
    /// Directory under the home directory holding the config file
    pub const DIR_NAME: &str = ".sentryctl";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable selecting the active context
    pub const ENV_VAR: &str = "SENTRYCTL_CONTEXT";
}

/// Default values for CLI
pub mod defaults {
    /// Default Sentry host
    pub const HOST: &str = "sentry.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
