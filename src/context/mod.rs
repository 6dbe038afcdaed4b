//! Context management module
//!
//! Named contexts bundle connection parameters (host, token, default
//! organization) for switching between Sentry installations.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_context_command;
pub use models::{Context, ContextConfig};
pub use resolve::{resolve_active_context, resolve_default_org};
pub use store::ContextStore;
