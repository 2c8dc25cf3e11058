//! Shared helpers for command handlers.

use freightdesk_core::{FileSessionStore, SessionService};

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;

/// Open the session service over the persisted session document.
pub fn open_session(global: &GlobalOpts) -> SessionService {
    let path = config::resolve_session_path(global);
    SessionService::new(Box::new(FileSessionStore::new(path)))
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
