//! Clap derive structures for the `freightdesk` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// freightdesk -- command-line client for the FreightDesk back office
#[derive(Debug, Parser)]
#[command(
    name = "freightdesk",
    version,
    about = "Work with the FreightDesk back office from the command line",
    long_about = "Client-side session and navigation tooling for the FreightDesk\n\
        logistics back office: sign in against the backend, inspect the\n\
        route registry, and trace where a navigation would land.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend base URL (overrides the config file)
    #[arg(long, short = 'b', env = "FREIGHTDESK_BACKEND_URL", global = true)]
    pub backend: Option<String>,

    /// Output format (defaults to the configured value, then `table`)
    #[arg(long, short = 'o', env = "FREIGHTDESK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, env = "FREIGHTDESK_COLOR", global = true)]
    pub color: Option<ColorMode>,

    /// Request timeout in seconds
    #[arg(long, env = "FREIGHTDESK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "FREIGHTDESK_INSECURE", global = true)]
    pub insecure: bool,

    /// Override the persisted session document path
    #[arg(long, env = "FREIGHTDESK_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

impl GlobalOpts {
    /// Output format after config-default resolution.
    pub fn output_format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    /// Color mode after config-default resolution.
    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl OutputFormat {
    /// Parse a config-file value (`table`, `json`, `json-compact`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

impl ColorMode {
    /// Parse a config-file value (`auto`, `always`, `never`).
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in against the backend and persist the session
    Login(LoginArgs),

    /// Clear the persisted session
    Logout,

    /// Show who is currently signed in
    Whoami,

    /// List the route registry
    #[command(alias = "ls")]
    Routes,

    /// Resolve a route alias into a concrete path
    Resolve(ResolveArgs),

    /// Trace where a navigation settles under the current session
    #[command(alias = "nav")]
    Navigate(NavigateArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── LOGIN ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email (prompted when omitted)
    pub email: Option<String>,
}

// ── RESOLVE ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Route alias (see `freightdesk routes`)
    pub alias: String,

    /// Positional template parameters, in placeholder order
    #[arg(value_name = "PARAMS")]
    pub params: Vec<String>,
}

// ── NAVIGATE ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NavigateArgs {
    /// Path to visit, with an optional query string
    pub path: String,

    /// Evaluate as a signed-out visitor, ignoring the persisted session
    #[arg(long)]
    pub anonymous: bool,
}

// ── CONFIG ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display the current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── COMPLETIONS ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
