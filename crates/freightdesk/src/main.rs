mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, ColorMode, Command, OutputFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr; stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Shell completions don't touch config or backend
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "freightdesk", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let mut global = cli.global;
            apply_config_defaults(&mut global);

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &global).await
        }
    }
}

/// Fill presentation options from the config file when neither a flag
/// nor an env var chose them.
fn apply_config_defaults(global: &mut cli::GlobalOpts) {
    if global.output.is_some() && global.color.is_some() {
        return;
    }
    let cfg = config::load_config_or_default();

    if global.output.is_none() {
        global.output = OutputFormat::from_name(&cfg.defaults.output);
        if global.output.is_none() {
            tracing::warn!(value = %cfg.defaults.output, "unknown output format in config");
        }
    }
    if global.color.is_none() {
        global.color = ColorMode::from_name(&cfg.defaults.color);
        if global.color.is_none() {
            tracing::warn!(value = %cfg.defaults.color, "unknown color mode in config");
        }
    }
}
