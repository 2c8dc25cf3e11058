//! CLI configuration — thin wrapper around `freightdesk_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--backend, --timeout, etc.).

use std::path::PathBuf;

use freightdesk_core::BackendConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use freightdesk_config::{
    BackendSettings, Config, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ─────────────────────────────────────────────

/// Resolve the runtime backend configuration.
///
/// Loads the config file, applies flag/env overrides on top, then hands
/// the merged settings to the shared validator. Flags always win.
pub fn resolve_backend(global: &GlobalOpts) -> Result<BackendConfig, CliError> {
    let mut cfg = load_config_or_default();

    if let Some(ref url) = global.backend {
        cfg.backend.url = Some(url.clone());
    }
    if let Some(timeout) = global.timeout {
        cfg.backend.timeout = timeout;
    }
    if global.insecure {
        cfg.backend.insecure = true;
    }

    Ok(freightdesk_config::backend_config(&cfg)?)
}

/// Where the persisted session document lives, honoring `--session-file`.
pub fn resolve_session_path(global: &GlobalOpts) -> PathBuf {
    if let Some(ref path) = global.session_file {
        return path.clone();
    }
    let cfg = load_config_or_default();
    freightdesk_config::session_store_path(&cfg)
}
