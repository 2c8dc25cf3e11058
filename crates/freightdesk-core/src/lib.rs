// freightdesk-core: Session, routing, and navigation-policy layer between
// freightdesk-api and consumers (CLI).

pub mod config;
pub mod guard;
pub mod routes;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{BackendConfig, TlsVerification};
pub use guard::{GuardDecision, NavigationIntent, Navigator};
pub use routes::{Route, RouteError};
pub use session::persist::{FileSessionStore, MemorySessionStore, PersistError, SessionStore};
pub use session::service::SessionService;
pub use session::{AuthSession, AuthUser, LoginOutcome};
