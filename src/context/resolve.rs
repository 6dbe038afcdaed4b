//! Context resolution from multiple sources

use log::debug;

use crate::config::{context as context_config, org};
use crate::error::Result;

use super::models::Context;
use super::store::ContextStore;

/// Resolve the active context from the default store.
///
/// Order: `--context` flag, `SENTRYCTL_CONTEXT`, then `current-context`.
pub fn resolve_active_context(cli_context: Option<&str>) -> Result<Option<Context>> {
    let env_context = std::env::var(context_config::ENV_VAR).ok();
    resolve_from_store(&ContextStore::new(), cli_context, env_context.as_deref())
}

fn resolve_from_store(
    store: &ContextStore,
    cli_context: Option<&str>,
    env_context: Option<&str>,
) -> Result<Option<Context>> {
    let config = store.load()?;

    let requested = cli_context
        .filter(|n| !n.is_empty())
        .map(|n| (n, "--context flag"))
        .or_else(|| {
            env_context
                .filter(|n| !n.is_empty())
                .map(|n| (n, context_config::ENV_VAR))
        });

    if let Some((name, source)) = requested {
        debug!("Using context '{}' from {}", name, source);
        return match config.contexts.get(name) {
            Some(ctx) => Ok(Some(ctx.clone())),
            None => Err(config.unknown_context(name)),
        };
    }

    match config.current() {
        Some((name, ctx)) => {
            debug!("Using current context '{}' (host={})", name, ctx.host);
            Ok(Some(ctx.clone()))
        }
        None => {
            debug!("No active context");
            Ok(None)
        }
    }
}

/// Default organization slug: `SENTRY_ORG`, then the context's org, else empty
pub fn resolve_default_org(context: Option<&Context>) -> String {
    default_org_from(std::env::var(org::ENV_VAR).ok(), context)
}

fn default_org_from(env_org: Option<String>, context: Option<&Context>) -> String {
    if let Some(slug) = env_org.filter(|s| !s.is_empty()) {
        debug!("Default organization from {}: {}", org::ENV_VAR, slug);
        return slug;
    }

    match context.and_then(|c| c.org.as_deref()).filter(|s| !s.is_empty()) {
        Some(slug) => {
            debug!("Default organization from context: {}", slug);
            slug.to_string()
        }
        None => String::new(),
    }
}
