//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod auth;
pub mod config_cmd;
pub mod navigate;
pub mod routes;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => auth::login(args, global).await,
        Command::Logout => auth::logout(global),
        Command::Whoami => auth::whoami(global),
        Command::Routes => routes::list(global),
        Command::Resolve(args) => routes::resolve(args, global),
        Command::Navigate(args) => navigate::handle(args, global),
        Command::Config(args) => config_cmd::handle(args, global),
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
