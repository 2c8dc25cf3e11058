//! Config subcommand handlers.

use dialoguer::{Confirm, Input};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, BackendSettings, Config};
use crate::error::CliError;
use crate::output;

use super::util;

/// Render the config as the TOML that would be written to disk.
///
/// The config file carries no credentials (the session document lives
/// elsewhere), so nothing needs masking.
fn format_config(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).unwrap_or_else(|e| format!("<unrenderable config: {e}>"))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("✨ FreightDesk — configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            if config_path.exists()
                && !util::confirm("Config file already exists. Overwrite?", global.yes)?
            {
                return Ok(());
            }

            // 1. Backend URL
            let backend: String = Input::new()
                .with_prompt("Backend URL")
                .default("https://backoffice.example.com".into())
                .interact_text()
                .map_err(util::prompt_err)?;

            let _: url::Url = backend.parse().map_err(|_| CliError::Validation {
                field: "backend.url".into(),
                reason: format!("invalid URL: {backend}"),
            })?;

            // 2. TLS
            let insecure = Confirm::new()
                .with_prompt("Accept self-signed TLS certificates?")
                .default(false)
                .interact()
                .map_err(util::prompt_err)?;

            // 3. Build config and write it
            let cfg = Config {
                backend: BackendSettings {
                    url: Some(backend),
                    insecure,
                    ..BackendSettings::default()
                },
                ..Config::default()
            };
            config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("\n  Test it: freightdesk routes");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(&global.output_format(), &cfg, format_config, |_| {
                "config".into()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
    }
}
