//! Navigation guard: decides whether a visited URL renders or redirects.
//!
//! The decision is pure: a function of the parsed intent and the current
//! session snapshot, no I/O. Redirect targets are chosen so that
//! re-evaluating the target under the same session always renders, which
//! makes every navigation settle in at most one hop.

use tracing::{debug, error};
use url::form_urlencoded;

use crate::routes::{self, DEFAULT_LANDING, Route};
use crate::session::AuthSession;

/// Query parameter carrying the originally requested path through login.
pub const RETURN_URL_PARAM: &str = "url";

/// Hop limit for [`settle`]. The decision table settles in one hop;
/// reaching this cap means a regression in the table, not a real flow.
const MAX_HOPS: usize = 8;

/// A visited URL, split into the pieces the guard cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    path: String,
    return_url: Option<String>,
}

impl NavigationIntent {
    /// Parse a visited URL (path plus optional query string).
    ///
    /// The return URL is taken from the `url` query parameter of the URL
    /// actually visited, percent-decoded. An empty value counts as absent.
    pub fn from_location(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };
        let return_url = query
            .and_then(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .find(|(key, _)| key == RETURN_URL_PARAM)
                    .map(|(_, value)| value.into_owned())
            })
            .filter(|value| !value.is_empty());
        Self {
            path: path.to_owned(),
            return_url,
        }
    }

    /// The path component, without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The decoded `url` parameter, if present and non-empty.
    pub fn return_url(&self) -> Option<&str> {
        self.return_url.as_deref()
    }

    /// Whether the path requires an authenticated session.
    pub fn is_protected(&self) -> bool {
        routes::is_protected(&self.path)
    }
}

/// What the guard decided for a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the requested path render.
    Render,
    /// Navigate to this target instead.
    Redirect(String),
}

/// Evaluate one navigation against the session snapshot.
///
/// Checked in priority order, first match wins:
/// signed out on a protected path bounces to login carrying the requested
/// path; signed out on a public path renders; signed in on a public path
/// bounces into the app (honoring a protected return URL); signed in on
/// a protected path renders.
pub fn evaluate(intent: &NavigationIntent, session: &AuthSession) -> GuardDecision {
    let decision = match (session.is_authenticated, intent.is_protected()) {
        (false, true) => GuardDecision::Redirect(login_redirect(intent.path())),
        (false, false) => GuardDecision::Render,
        (true, false) => {
            let target = intent
                .return_url()
                .filter(|candidate| routes::is_protected(candidate))
                .map_or_else(|| DEFAULT_LANDING.resolve(&[]), str::to_owned);
            GuardDecision::Redirect(target)
        }
        (true, true) => GuardDecision::Render,
    };
    debug!(path = intent.path(), ?decision, "guard evaluated");
    decision
}

/// The login URL carrying `requested` in the return-URL parameter,
/// percent-encoded.
pub fn login_redirect(requested: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(RETURN_URL_PARAM, requested)
        .finish();
    format!("{}?{query}", Route::Login.resolve(&[]))
}

/// Something that can act on redirect targets (a browser shim, a trace
/// collector, a headless driver).
pub trait Navigator {
    fn navigate(&mut self, target: &str);
}

/// Collects visited targets; enough for traces and tests.
impl Navigator for Vec<String> {
    fn navigate(&mut self, target: &str) {
        self.push(target.to_owned());
    }
}

/// Drive [`evaluate`] to a fixed point from `start`, invoking the
/// navigator for every hop. Returns the URL that finally renders.
pub fn settle(start: &str, session: &AuthSession, navigator: &mut dyn Navigator) -> String {
    let mut current = start.to_owned();
    for _ in 0..MAX_HOPS {
        let intent = NavigationIntent::from_location(&current);
        match evaluate(&intent, session) {
            GuardDecision::Render => return current,
            GuardDecision::Redirect(target) => {
                debug!("redirecting {current} -> {target}");
                navigator.navigate(&target);
                current = target;
            }
        }
    }
    error!("navigation did not settle after {MAX_HOPS} hops, staying at {current}");
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AuthUser;

    fn signed_in() -> AuthSession {
        AuthSession::signed_in(AuthUser {
            id: 7,
            email: "ada@freight.example".to_owned(),
            name: "Ada Lovelace".to_owned(),
            role: "ops-manager".to_owned(),
        })
    }

    fn signed_out() -> AuthSession {
        AuthSession::default()
    }

    #[test]
    fn signed_out_protected_path_redirects_to_login_with_return_url() {
        let intent = NavigationIntent::from_location("/app/operations/55/edit");
        assert_eq!(
            evaluate(&intent, &signed_out()),
            GuardDecision::Redirect("/auth/login?url=%2Fapp%2Foperations%2F55%2Fedit".to_owned())
        );
    }

    #[test]
    fn signed_out_public_path_renders() {
        let intent = NavigationIntent::from_location("/auth/login");
        assert_eq!(evaluate(&intent, &signed_out()), GuardDecision::Render);
    }

    #[test]
    fn signed_in_public_path_redirects_to_default_landing() {
        let intent = NavigationIntent::from_location("/auth/login");
        assert_eq!(
            evaluate(&intent, &signed_in()),
            GuardDecision::Redirect("/app/operations".to_owned())
        );
    }

    #[test]
    fn signed_in_public_path_honors_protected_return_url() {
        let intent =
            NavigationIntent::from_location("/auth/login?url=%2Fapp%2Foperations%2F55%2Fedit");
        assert_eq!(
            evaluate(&intent, &signed_in()),
            GuardDecision::Redirect("/app/operations/55/edit".to_owned())
        );
    }

    #[test]
    fn signed_in_public_path_discards_unprotected_return_url() {
        for location in [
            "/auth/login?url=%2Fauth%2Flogin",
            "/auth/login?url=%2Fapplication",
            "/auth/login?url=",
            "/auth/login",
        ] {
            let intent = NavigationIntent::from_location(location);
            assert_eq!(
                evaluate(&intent, &signed_in()),
                GuardDecision::Redirect("/app/operations".to_owned()),
                "{location}"
            );
        }
    }

    #[test]
    fn signed_in_protected_path_renders() {
        let intent = NavigationIntent::from_location("/app/carriers/12/edit");
        assert_eq!(evaluate(&intent, &signed_in()), GuardDecision::Render);
    }

    #[test]
    fn prefix_lookalike_path_is_public() {
        let intent = NavigationIntent::from_location("/application");
        assert_eq!(evaluate(&intent, &signed_out()), GuardDecision::Render);
    }

    #[test]
    fn return_url_is_read_from_the_visited_query() {
        let intent = NavigationIntent::from_location("/auth/login?other=1&url=%2Fapp%2Fclients");
        assert_eq!(intent.path(), "/auth/login");
        assert_eq!(intent.return_url(), Some("/app/clients"));
    }

    #[test]
    fn every_redirect_settles_in_one_hop() {
        let cases = [
            ("/app/operations/55/edit", signed_out()),
            ("/auth/login", signed_in()),
            ("/auth/login?url=%2Fapp%2Fpartners", signed_in()),
        ];
        for (start, session) in cases {
            let mut hops: Vec<String> = Vec::new();
            let settled = settle(start, &session, &mut hops);
            assert_eq!(hops.len(), 1, "{start} took {hops:?}");
            assert_eq!(settled, hops[0]);
            let intent = NavigationIntent::from_location(&settled);
            assert_eq!(evaluate(&intent, &session), GuardDecision::Render, "{start}");
        }
    }

    #[test]
    fn rendering_paths_settle_without_hops() {
        let mut hops: Vec<String> = Vec::new();
        let settled = settle("/app/operations", &signed_in(), &mut hops);
        assert_eq!(settled, "/app/operations");
        assert!(hops.is_empty());
    }

    #[test]
    fn login_round_trip_preserves_the_requested_path() {
        let requested = "/app/operations/55/edit";

        // Signed out: bounced to login, requested path encoded in the query.
        let login_url = match evaluate(
            &NavigationIntent::from_location(requested),
            &signed_out(),
        ) {
            GuardDecision::Redirect(target) => target,
            GuardDecision::Render => panic!("expected redirect"),
        };
        assert_eq!(login_url, "/auth/login?url=%2Fapp%2Foperations%2F55%2Fedit");

        // After signing in on that same URL: bounced straight back.
        assert_eq!(
            evaluate(&NavigationIntent::from_location(&login_url), &signed_in()),
            GuardDecision::Redirect(requested.to_owned())
        );
    }
}
