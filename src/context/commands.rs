//! Context command handlers

use comfy_table::{presets::NOTHING, Table};

use crate::cli::{ConfigAction, SetContextArgs};
use crate::error::{Result, SentryError};

use super::models::Context;
use super::store::ContextStore;

const NOT_SET: &str = "<not set>";

/// Dispatch 'config' subcommands against the default store
pub fn run_context_command(action: &ConfigAction) -> Result<()> {
    run_with_store(&ContextStore::new(), action)
}

fn run_with_store(store: &ContextStore, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::SetContext(args) => set_context(store, args),
        ConfigAction::UseContext(args) => use_context(store, &args.name),
        ConfigAction::GetContexts => {
            println!("{}", contexts_table(store)?);
            Ok(())
        }
        ConfigAction::CurrentContext => {
            println!("{}", current_context(store)?);
            Ok(())
        }
        ConfigAction::DeleteContext(args) => delete_context(store, &args.name),
        ConfigAction::View => {
            let config = store.load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Create a context, or merge the given fields into an existing one
fn set_context(store: &ContextStore, args: &SetContextArgs) -> Result<()> {
    let mut config = store.load()?;

    let created = match config.contexts.get_mut(&args.name) {
        Some(ctx) => {
            if let Some(host) = &args.host {
                ctx.host = host.clone();
            }
            if args.token.is_some() {
                ctx.token = args.token.clone();
            }
            if args.org.is_some() {
                ctx.org = args.org.clone();
            }
            false
        }
        None => {
            let host = args.host.clone().ok_or_else(|| {
                SentryError::Config(format!(
                    "--host is required for a new context:\n  \
                     sentryctl config set-context {} --host <HOST> [--token <TOKEN>] [--org <ORG>]",
                    args.name
                ))
            })?;
            config.contexts.insert(
                args.name.clone(),
                Context {
                    host,
                    token: args.token.clone(),
                    org: args.org.clone(),
                },
            );
            if config.current_context.is_none() {
                config.current_context = Some(args.name.clone());
            }
            true
        }
    };

    store.save(&config)?;
    if created {
        println!("✓ Created context '{}'", args.name);
    } else {
        println!("✓ Updated context '{}'", args.name);
    }
    Ok(())
}

fn use_context(store: &ContextStore, name: &str) -> Result<()> {
    let mut config = store.load()?;
    if !config.contexts.contains_key(name) {
        return Err(config.unknown_context(name));
    }

    config.current_context = Some(name.to_string());
    store.save(&config)?;
    println!("✓ Switched to context '{}'", name);
    Ok(())
}

fn delete_context(store: &ContextStore, name: &str) -> Result<()> {
    let mut config = store.load()?;
    if config.contexts.remove(name).is_none() {
        return Err(config.unknown_context(name));
    }

    if config.current_context.as_deref() == Some(name) {
        config.current_context = None;
    }

    store.save(&config)?;
    println!("✓ Deleted context '{}'", name);
    Ok(())
}

fn contexts_table(store: &ContextStore) -> Result<String> {
    let config = store.load()?;
    if config.contexts.is_empty() {
        return Ok("No contexts configured.\n\n\
                   Use 'sentryctl config set-context <name> --host <host>' to create one."
            .to_string());
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["CURRENT", "NAME", "HOST", "ORG", "TOKEN"]);

    for (name, ctx) in &config.contexts {
        let marker = if config.current_context.as_ref() == Some(name) {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            marker.to_string(),
            name.clone(),
            ctx.host.clone(),
            ctx.org.clone().unwrap_or_else(|| NOT_SET.to_string()),
            mask_token(ctx.token.as_deref()),
        ]);
    }

    Ok(table.to_string())
}

fn current_context(store: &ContextStore) -> Result<String> {
    let config = store.load()?;
    let name = config.current_context.as_deref().ok_or_else(|| {
        SentryError::Config(
            "No current context set. Use 'sentryctl config use-context <name>' to set one."
                .to_string(),
        )
    })?;
    let ctx = config
        .contexts
        .get(name)
        .ok_or_else(|| config.unknown_context(name))?;

    Ok(format!(
        "Current context: {}\n  Host:  {}\n  Token: {}\n  Org:   {}",
        name,
        ctx.host,
        mask_token(ctx.token.as_deref()),
        ctx.org.as_deref().unwrap_or(NOT_SET)
    ))
}

/// Show only the last four characters of a token
fn mask_token(token: Option<&str>) -> String {
    match token {
        None => NOT_SET.to_string(),
        Some(t) => {
            let chars: Vec<char> = t.chars().collect();
            if chars.len() < 4 {
                "****".to_string()
            } else {
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("****{}", tail)
            }
        }
    }
}
