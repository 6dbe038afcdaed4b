//! User confirmation prompts for operations that are hard to undo

use dialoguer::Confirm;

use crate::error::{Result, SentryError};

/// Ask the user to confirm an action.
///
/// `assume_yes` short-circuits to `true`. In batch mode there is nobody to
/// ask, so the action is refused with an error pointing at `--yes`.
pub fn confirm_action(prompt: &str, batch: bool, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    if batch {
        return Err(SentryError::Config(format!(
            "{} Refusing to continue in batch mode without --yes",
            prompt
        )));
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    Ok(confirmed)
}
