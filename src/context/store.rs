//! Context configuration file I/O

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::context as context_config;
use crate::error::{Result, SentryError};

use super::models::ContextConfig;

/// Reads and writes the context configuration file
pub struct ContextStore {
    path: PathBuf,
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStore {
    /// Store at `~/.sentryctl/config.json`
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(
            home.join(context_config::DIR_NAME)
                .join(context_config::FILE_NAME),
        )
    }

    /// Store at an explicit path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file; a missing file is an empty configuration
    pub fn load(&self) -> Result<ContextConfig> {
        if !self.path.exists() {
            return Ok(ContextConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.error("Failed to read context config", e))?;

        serde_json::from_str(&content).map_err(|e| self.error("Failed to parse context config", e))
    }

    /// Write the file through a temporary sibling and a rename
    pub fn save(&self, config: &ContextConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                SentryError::Config(format!(
                    "Failed to create config directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.error("Failed to write context config", e))?;

        // Tokens live in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(|e| self.error("Failed to restrict permissions on", e))?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| self.error("Failed to replace context config", e))
    }

    fn error(&self, what: &str, err: impl std::fmt::Display) -> SentryError {
        SentryError::Config(format!("{} {}: {}", what, self.path.display(), err))
    }
}
