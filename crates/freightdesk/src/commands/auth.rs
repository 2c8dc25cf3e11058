//! Session command handlers: login, logout, whoami.

use dialoguer::Input;
use secrecy::SecretString;

use freightdesk_core::{AuthUser, LoginOutcome};

use crate::cli::{GlobalOpts, LoginArgs};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util;

/// Environment variable consulted before prompting for the password.
const PASSWORD_ENV: &str = "FREIGHTDESK_PASSWORD";

// ── Detail view ──────────────────────────────────────────────────────

fn identity_detail(user: &AuthUser) -> String {
    [
        format!("Name:   {}", user.name),
        format!("Email:  {}", user.email),
        format!("Role:   {}", user.role),
        format!("ID:     {}", user.id),
    ]
    .join("\n")
}

// ── Handlers ─────────────────────────────────────────────────────────

pub async fn login(args: LoginArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let backend = config::resolve_backend(global)?;
    let client = backend.client().map_err(|e| CliError::ConnectionFailed {
        url: backend.url.to_string(),
        source: Box::new(e),
    })?;
    let service = util::open_session(global);

    let email = match args.email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(util::prompt_err)?,
    };

    let password = match std::env::var(PASSWORD_ENV) {
        Ok(pass) => pass,
        Err(_) => rpassword::prompt_password("Password: ").map_err(util::prompt_err)?,
    };

    if email.trim().is_empty() || password.is_empty() {
        return Err(CliError::Validation {
            field: "credentials".into(),
            reason: "email and password cannot be empty".into(),
        });
    }

    match service
        .login(&client, &email, &SecretString::from(password))
        .await
    {
        LoginOutcome::Success => {
            if let Some(user) = service.current().user {
                let out = output::render_single(
                    &global.output_format(),
                    &user,
                    identity_detail,
                    |u| u.email.clone(),
                );
                output::print_output(&out, global.quiet);
            }
            Ok(())
        }
        LoginOutcome::Failure { message } => Err(CliError::LoginFailed { message }),
    }
}

pub fn logout(global: &GlobalOpts) -> Result<(), CliError> {
    let service = util::open_session(global);
    service.logout();
    if !global.quiet {
        eprintln!("Signed out");
    }
    Ok(())
}

pub fn whoami(global: &GlobalOpts) -> Result<(), CliError> {
    let service = util::open_session(global);
    let session = service.current();
    if !session.is_authenticated {
        return Err(CliError::NotSignedIn);
    }
    let Some(user) = session.user else {
        return Err(CliError::NotSignedIn);
    };

    let out = output::render_single(&global.output_format(), &user, identity_detail, |u| {
        u.email.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
