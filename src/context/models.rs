//! Context configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SentryError;

/// Contents of `~/.sentryctl/config.json`
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContextConfig {
    #[serde(rename = "current-context", skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
}

/// Connection parameters for one Sentry installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Host name (`sentry.io`) or full URL (`https://sentry.corp.com`)
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Organization slug used when a command gets none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
}

impl Context {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: None,
            org: None,
        }
    }
}

impl ContextConfig {
    /// The context named by `current-context`, if it exists
    pub fn current(&self) -> Option<(&str, &Context)> {
        let name = self.current_context.as_deref()?;
        self.contexts.get(name).map(|ctx| (name, ctx))
    }

    /// Error for a context name missing from the file
    pub fn unknown_context(&self, name: &str) -> SentryError {
        let available = if self.contexts.is_empty() {
            "<none>".to_string()
        } else {
            self.contexts.keys().cloned().collect::<Vec<_>>().join(", ")
        };
        SentryError::Config(format!(
            "Context '{}' not found. Available contexts: {}",
            name, available
        ))
    }
}
