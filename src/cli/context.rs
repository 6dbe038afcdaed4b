//! `sentryctl config` arguments
//!
//! A context is a named Sentry connection: the host (`sentry.io` or a
//! self-hosted URL), an auth token and the organization slug used when a
//! command doesn't name one. Contexts live in `~/.sentryctl/config.json`.

use clap::{Parser, Subcommand};

/// Config subcommands for managing Sentry connection contexts
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create or update a Sentry context
    #[command(name = "set-context")]
    SetContext(SetContextArgs),

    /// Make a context the default for later commands
    #[command(name = "use-context")]
    UseContext(UseContextArgs),

    /// List contexts with their host and organization
    #[command(name = "get-contexts", visible_alias = "contexts")]
    GetContexts,

    /// Print the name of the active context
    #[command(name = "current-context")]
    CurrentContext,

    /// Remove a context
    #[command(name = "delete-context")]
    DeleteContext(DeleteContextArgs),

    /// Print the config file with auth tokens masked
    View,
}

/// Arguments for 'config set-context' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "Fields not given keep their stored value.\n\n\
    EXAMPLES:\n  \
        sentryctl config set-context saas --host sentry.io --org acme\n  \
        sentryctl config set-context onprem --host https://sentry.corp.com --token \"$SENTRY_AUTH_TOKEN\"\n  \
        sentryctl config set-context saas --org globex")]
pub struct SetContextArgs {
    /// Context name
    #[arg(value_parser = parse_context_name)]
    pub name: String,
    /// Sentry host, e.g. sentry.io, or a self-hosted URL such as https://sentry.corp.com
    #[arg(long)]
    pub host: Option<String>,
    /// Auth token, stored in the config file (same as SENTRY_AUTH_TOKEN)
    #[arg(long)]
    pub token: Option<String>,
    /// Organization slug used when a command names none (same as SENTRY_ORG)
    #[arg(long)]
    pub org: Option<String>,
}

/// Arguments for 'config use-context' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        sentryctl config use-context onprem\n  \
        sentryctl --context saas get org   # one-off override")]
pub struct UseContextArgs {
    /// Context name to activate
    pub name: String,
}

/// Arguments for 'config delete-context' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "Deleting the active context also clears current-context.\n\n\
    EXAMPLES:\n  \
        sentryctl config delete-context onprem")]
pub struct DeleteContextArgs {
    /// Context name to delete
    pub name: String,
}

/// Context names are stored as JSON keys and shown in tables; they must be a
/// single non-empty word
pub fn parse_context_name(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("context name must not be empty".to_string());
    }
    if s.chars().any(char::is_whitespace) {
        return Err(format!("context name '{}' must not contain whitespace", s));
    }
    Ok(s.to_string())
}
