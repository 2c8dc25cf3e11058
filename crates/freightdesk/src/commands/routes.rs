//! Route registry command handlers: routes, resolve.

use serde::Serialize;
use tabled::Tabled;

use freightdesk_core::{Route, routes};

use crate::cli::{GlobalOpts, ResolveArgs};
use crate::error::CliError;
use crate::output;

// ── Registry listing ─────────────────────────────────────────────────

/// One registry entry as exposed to structured output.
#[derive(Serialize)]
struct RouteInfo {
    alias: &'static str,
    template: &'static str,
    params: Vec<&'static str>,
    protected: bool,
}

impl From<Route> for RouteInfo {
    fn from(route: Route) -> Self {
        Self {
            alias: route.name(),
            template: route.template(),
            params: route
                .template()
                .split('/')
                .filter_map(|segment| segment.strip_prefix(':'))
                .collect(),
            protected: route.is_protected(),
        }
    }
}

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Alias")]
    alias: &'static str,
    #[tabled(rename = "Template")]
    template: &'static str,
    #[tabled(rename = "Params")]
    params: String,
    #[tabled(rename = "Access")]
    access: &'static str,
}

impl From<&RouteInfo> for RouteRow {
    fn from(info: &RouteInfo) -> Self {
        Self {
            alias: info.alias,
            template: info.template,
            params: info.params.join(", "),
            access: if info.protected {
                "protected"
            } else {
                "public"
            },
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────

pub fn list(global: &GlobalOpts) -> Result<(), CliError> {
    let registry: Vec<RouteInfo> = Route::ALL.into_iter().map(RouteInfo::from).collect();
    let out = output::render_list(
        &global.output_format(),
        &registry,
        |info| RouteRow::from(info),
        |info| info.alias.to_owned(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Resolution result as exposed to structured output.
#[derive(Serialize)]
struct Resolved {
    alias: String,
    path: String,
}

pub fn resolve(args: ResolveArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let params: Vec<&str> = args.params.iter().map(String::as_str).collect();
    let path = routes::resolve_name(&args.alias, &params)?;

    let resolved = Resolved {
        alias: args.alias,
        path,
    };
    let out = output::render_single(
        &global.output_format(),
        &resolved,
        |r| r.path.clone(),
        |r| r.path.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
