//! CLI error types with miette diagnostics.
//!
//! Maps library errors into user-facing diagnostics with actionable help
//! text and the exit codes scripts rely on.

use miette::Diagnostic;
use thiserror::Error;

use freightdesk_config::ConfigError;
use freightdesk_core::RouteError;

/// Stable exit codes for scripted callers.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────

    #[error("Login failed: {message}")]
    #[diagnostic(
        code(freightdesk::login_failed),
        help("Check the email and password, then try again.")
    )]
    LoginFailed { message: String },

    #[error("Not signed in")]
    #[diagnostic(
        code(freightdesk::not_signed_in),
        help("Sign in with: freightdesk login <EMAIL>")
    )]
    NotSignedIn,

    // ── Routing ──────────────────────────────────────────────────────

    #[error("Unknown route alias '{alias}'")]
    #[diagnostic(
        code(freightdesk::unknown_route),
        help("Run: freightdesk routes to list the registered aliases.")
    )]
    UnknownRoute { alias: String },

    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not set up a client for {url}")]
    #[diagnostic(
        code(freightdesk::connection_failed),
        help(
            "Check the backend URL and TLS settings.\n\
             Use --insecure (-k) if the backend runs behind a self-signed certificate."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Configuration ────────────────────────────────────────────────

    #[error("No backend URL configured")]
    #[diagnostic(
        code(freightdesk::no_backend),
        help(
            "Configure one with: freightdesk config init\n\
             Or pass --backend <URL> / set FREIGHTDESK_BACKEND_URL.\n\
             Expected config at: {path}"
        )
    )]
    NoBackend { path: String },

    #[error(transparent)]
    #[diagnostic(code(freightdesk::config))]
    Config(ConfigError),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(freightdesk::validation))]
    Validation { field: String, reason: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LoginFailed { .. } | Self::NotSignedIn => exit_code::AUTH,
            Self::UnknownRoute { .. } => exit_code::NOT_FOUND,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error → CliError mapping ─────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingBackendUrl => CliError::NoBackend {
                path: freightdesk_config::config_path().display().to_string(),
            },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}

impl From<RouteError> for CliError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::UnknownAlias(alias) => CliError::UnknownRoute { alias },
        }
    }
}
