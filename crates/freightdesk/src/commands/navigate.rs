//! Navigation trace handler: drives the guard from a starting path.

use owo_colors::OwoColorize;
use serde::Serialize;

use freightdesk_core::{AuthSession, guard};

use crate::cli::{GlobalOpts, NavigateArgs};
use crate::error::CliError;
use crate::output;

use super::util;

/// The full trace of one navigation as exposed to structured output.
#[derive(Serialize)]
struct NavigationTrace {
    start: String,
    authenticated: bool,
    hops: Vec<String>,
    destination: String,
}

fn trace_detail(trace: &NavigationTrace, use_color: bool) -> String {
    let session = if trace.authenticated {
        "signed in"
    } else {
        "signed out"
    };

    let mut lines = vec![format!("Start:       {}   ({session})", trace.start)];
    for hop in &trace.hops {
        let rendered = if use_color {
            format!("{}", hop.dimmed())
        } else {
            hop.clone()
        };
        lines.push(format!("Redirect:    -> {rendered}"));
    }
    let destination = if use_color {
        format!("{}", trace.destination.green())
    } else {
        trace.destination.clone()
    };
    lines.push(format!("Destination: {destination}"));
    lines.join("\n")
}

pub fn handle(args: NavigateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let session = if args.anonymous {
        AuthSession::default()
    } else {
        util::open_session(global).current()
    };

    let mut hops: Vec<String> = Vec::new();
    let destination = guard::settle(&args.path, &session, &mut hops);

    let trace = NavigationTrace {
        start: args.path,
        authenticated: session.is_authenticated,
        hops,
        destination,
    };

    let use_color = output::should_color(&global.color_mode());
    let out = output::render_single(
        &global.output_format(),
        &trace,
        |t| trace_detail(t, use_color),
        |t| t.destination.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
