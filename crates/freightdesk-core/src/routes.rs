//! Route registry and URL template resolver.
//!
//! Every navigable screen of the back-office client is identified by a
//! [`Route`]. Each route carries a fixed URL template in which `/:name`
//! segments are positional placeholders. Using the enum keeps call sites
//! checked at compile time; callers that receive aliases as data (CLI
//! arguments, config) go through [`resolve_name`], which fails loudly on
//! an alias the registry does not know.

use std::fmt;

use thiserror::Error;
use tracing::warn;

/// Prefix under which every route requires an authenticated session.
pub const PROTECTED_PREFIX: &str = "/app";

/// Where an authenticated user lands when no better target is known.
pub const DEFAULT_LANDING: Route = Route::Operations;

/// Identifies each navigable screen of the back-office client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Operations,
    OperationNew,
    OperationDetails,
    OperationEdit,
    OperationDocument,
    Clients,
    ClientNew,
    ClientEdit,
    Carriers,
    CarrierNew,
    CarrierEdit,
    Agents,
    AgentNew,
    AgentEdit,
    Partners,
    PartnerNew,
    PartnerEdit,
}

impl Route {
    /// All routes in registry order.
    pub const ALL: [Route; 18] = [
        Self::Login,
        Self::Operations,
        Self::OperationNew,
        Self::OperationDetails,
        Self::OperationEdit,
        Self::OperationDocument,
        Self::Clients,
        Self::ClientNew,
        Self::ClientEdit,
        Self::Carriers,
        Self::CarrierNew,
        Self::CarrierEdit,
        Self::Agents,
        Self::AgentNew,
        Self::AgentEdit,
        Self::Partners,
        Self::PartnerNew,
        Self::PartnerEdit,
    ];

    /// The route's alias, as used by callers that address routes by name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Operations => "operations",
            Self::OperationNew => "operations-new",
            Self::OperationDetails => "operations-details",
            Self::OperationEdit => "operations-edit",
            Self::OperationDocument => "operations-document",
            Self::Clients => "clients",
            Self::ClientNew => "clients-new",
            Self::ClientEdit => "clients-edit",
            Self::Carriers => "carriers",
            Self::CarrierNew => "carriers-new",
            Self::CarrierEdit => "carriers-edit",
            Self::Agents => "agents",
            Self::AgentNew => "agents-new",
            Self::AgentEdit => "agents-edit",
            Self::Partners => "partners",
            Self::PartnerNew => "partners-new",
            Self::PartnerEdit => "partners-edit",
        }
    }

    /// The URL template. Segments starting with `:` are placeholders.
    pub fn template(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Operations => "/app/operations",
            Self::OperationNew => "/app/operations/new",
            Self::OperationDetails => "/app/operations/:id",
            Self::OperationEdit => "/app/operations/:id/edit",
            Self::OperationDocument => "/app/operations/:id/documents/:documentId",
            Self::Clients => "/app/clients",
            Self::ClientNew => "/app/clients/new",
            Self::ClientEdit => "/app/clients/:id/edit",
            Self::Carriers => "/app/carriers",
            Self::CarrierNew => "/app/carriers/new",
            Self::CarrierEdit => "/app/carriers/:id/edit",
            Self::Agents => "/app/agents",
            Self::AgentNew => "/app/agents/new",
            Self::AgentEdit => "/app/agents/:id/edit",
            Self::Partners => "/app/partners",
            Self::PartnerNew => "/app/partners/new",
            Self::PartnerEdit => "/app/partners/:id/edit",
        }
    }

    /// Number of placeholders in the template.
    pub fn arity(self) -> usize {
        self.template()
            .split('/')
            .filter(|segment| segment.starts_with(':'))
            .count()
    }

    /// Route from an alias. Returns None for aliases the registry
    /// does not know.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|route| route.name() == name)
    }

    /// Whether this route requires an authenticated session.
    pub fn is_protected(self) -> bool {
        is_protected(self.template())
    }

    /// Resolve the template with positional parameters.
    ///
    /// Parameters fill placeholders left to right. Missing parameters
    /// leave their placeholder in the output verbatim and log a warning;
    /// excess parameters are ignored. Parameter values are spliced in
    /// unmodified.
    pub fn resolve(self, params: &[&str]) -> String {
        let required = self.arity();
        if params.len() < required {
            warn!(
                route = self.name(),
                supplied = ?params,
                required,
                "resolving route with missing parameters"
            );
        }
        substitute(self.template(), params)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from the alias-addressed registry surface.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Alias not present in the registry. This is a wiring bug in the
    /// caller, never recoverable user input.
    #[error("unknown route alias '{0}'")]
    UnknownAlias(String),
}

/// Resolve a route addressed by alias.
pub fn resolve_name(name: &str, params: &[&str]) -> Result<String, RouteError> {
    let route = Route::from_name(name).ok_or_else(|| RouteError::UnknownAlias(name.to_owned()))?;
    Ok(route.resolve(params))
}

/// Segment-boundary test for the protected prefix: `/app` itself and
/// anything under `/app/` require authentication; `/application` does not.
pub fn is_protected(path: &str) -> bool {
    match path.strip_prefix(PROTECTED_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

/// Splice positional parameters into a template, segment by segment.
fn substitute(template: &str, params: &[&str]) -> String {
    let mut supplied = params.iter();
    let mut out = String::with_capacity(template.len());
    for segment in template.split('/').skip(1) {
        out.push('/');
        if segment.starts_with(':') {
            match supplied.next() {
                Some(value) => out.push_str(value),
                None => out.push_str(segment),
            }
        } else {
            out.push_str(segment);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_routes_resolve_to_their_template() {
        assert_eq!(Route::Login.resolve(&[]), "/auth/login");
        assert_eq!(Route::Operations.resolve(&[]), "/app/operations");
        assert_eq!(Route::CarrierNew.resolve(&[]), "/app/carriers/new");
    }

    #[test]
    fn parameters_substitute_positionally() {
        assert_eq!(Route::OperationEdit.resolve(&["55"]), "/app/operations/55/edit");
        assert_eq!(
            Route::OperationDocument.resolve(&["55", "9"]),
            "/app/operations/55/documents/9"
        );
    }

    #[test]
    fn missing_parameters_leave_placeholders_verbatim() {
        assert_eq!(
            Route::OperationDocument.resolve(&["55"]),
            "/app/operations/55/documents/:documentId"
        );
        assert_eq!(Route::OperationEdit.resolve(&[]), "/app/operations/:id/edit");
    }

    #[test]
    fn excess_parameters_are_ignored() {
        assert_eq!(Route::Operations.resolve(&["55"]), "/app/operations");
        assert_eq!(Route::OperationEdit.resolve(&["55", "extra"]), "/app/operations/55/edit");
    }

    #[test]
    fn empty_parameter_values_are_spliced_as_given() {
        assert_eq!(Route::OperationEdit.resolve(&[""]), "/app/operations//edit");
    }

    #[test]
    fn resolve_name_rejects_unknown_aliases() {
        assert_eq!(
            resolve_name("operations-archive", &[]),
            Err(RouteError::UnknownAlias("operations-archive".to_owned()))
        );
        assert_eq!(resolve_name("operations", &[]).as_deref(), Ok("/app/operations"));
    }

    #[test]
    fn aliases_round_trip_through_from_name() {
        for route in Route::ALL {
            assert_eq!(Route::from_name(route.name()), Some(route));
        }
        assert_eq!(Route::from_name("no-such-route"), None);
    }

    #[test]
    fn templates_are_rooted_and_arity_matches() {
        for route in Route::ALL {
            assert!(route.template().starts_with('/'), "{route} template not rooted");
        }
        assert_eq!(Route::Operations.arity(), 0);
        assert_eq!(Route::OperationEdit.arity(), 1);
        assert_eq!(Route::OperationDocument.arity(), 2);
    }

    #[test]
    fn protected_prefix_respects_segment_boundaries() {
        assert!(is_protected("/app"));
        assert!(is_protected("/app/operations"));
        assert!(is_protected("/app/operations?page=2"));
        assert!(!is_protected("/application"));
        assert!(!is_protected("/auth/login"));
        assert!(!is_protected("/"));
        assert!(!is_protected(""));
    }

    #[test]
    fn login_is_the_only_public_route() {
        for route in Route::ALL {
            assert_eq!(route.is_protected(), route != Route::Login, "{route}");
        }
    }
}
