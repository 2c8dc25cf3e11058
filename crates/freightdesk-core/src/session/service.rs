//! The session service: single writer over the observable session snapshot.

use freightdesk_api::{BackofficeClient, Error as ApiError};
use secrecy::SecretString;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::persist::SessionStore;
use super::{AuthSession, AuthUser, LoginOutcome};

/// Message shown when the backend rejects the supplied credentials.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Owns the session snapshot and its persistence.
///
/// The service is the only writer. Consumers read clones via
/// [`current`](Self::current) or [`subscribe`](Self::subscribe) for
/// change notification; both see each commit as one atomic replacement.
pub struct SessionService {
    store: Box<dyn SessionStore>,
    state: watch::Sender<AuthSession>,
}

impl SessionService {
    /// Create the service, hydrating from the store.
    ///
    /// Missing or unreadable stored state is not an error: the service
    /// starts signed out and logs what it ignored.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        let initial = match store.load() {
            Ok(Some(session)) => {
                debug!(authenticated = session.is_authenticated, "session restored");
                session
            }
            Ok(None) => AuthSession::default(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable session state, starting signed out");
                AuthSession::default()
            }
        };
        let (state, _) = watch::channel(initial);
        Self { store, state }
    }

    /// Current session snapshot.
    pub fn current(&self) -> AuthSession {
        self.state.borrow().clone()
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthSession> {
        self.state.subscribe()
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    /// Attempt to sign in against the backend.
    ///
    /// The email is normalized (trimmed, lowercased) before it goes over
    /// the wire. On success the new snapshot is committed and persisted;
    /// on any failure the existing snapshot stays untouched. Rejected
    /// credentials and transport failures share the failure shape and
    /// differ only in the message.
    pub async fn login(
        &self,
        client: &BackofficeClient,
        email: &str,
        password: &SecretString,
    ) -> LoginOutcome {
        let email = normalize_email(email);

        match client.login(&email, password).await {
            Ok(payload) => {
                self.commit(AuthSession::signed_in(AuthUser::from(payload)));
                debug!("signed in");
                LoginOutcome::Success
            }
            Err(ApiError::Unauthorized) => {
                debug!("login rejected");
                LoginOutcome::Failure {
                    message: INVALID_CREDENTIALS.to_owned(),
                }
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                LoginOutcome::Failure {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Sign out.
    ///
    /// Unconditional and idempotent: observers are notified and the
    /// signed-out state persisted even when nobody was signed in.
    pub fn logout(&self) {
        self.commit(AuthSession::default());
        debug!("signed out");
    }

    /// Replace the snapshot in one step, then persist it.
    ///
    /// A persist failure is logged and does not roll back the in-memory
    /// state; the next commit retries the write.
    fn commit(&self, session: AuthSession) {
        self.state.send_replace(session.clone());
        if let Err(e) = self.store.save(&session) {
            warn!(error = %e, "failed to persist session");
        }
    }
}

/// Canonical form of an email address for the login call.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::persist::MemorySessionStore;

    #[test]
    fn email_normalization_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ada@Freight.Example "), "ada@freight.example");
        assert_eq!(normalize_email("ops@freight.example"), "ops@freight.example");
    }

    #[test]
    fn hydrates_signed_out_from_an_empty_store() {
        let service = SessionService::new(Box::new(MemorySessionStore::new()));
        assert!(!service.is_authenticated());
        assert!(service.current().user.is_none());
    }

    #[test]
    fn hydrates_stored_session() {
        let store = MemorySessionStore::new();
        let stored = AuthSession::signed_in(AuthUser {
            id: 7,
            email: "ada@freight.example".to_owned(),
            name: "Ada Lovelace".to_owned(),
            role: "ops-manager".to_owned(),
        });
        store.save(&stored).expect("save");

        let service = SessionService::new(Box::new(store));
        assert_eq!(service.current(), stored);
    }

    #[test]
    fn logout_notifies_even_when_already_signed_out() {
        let service = SessionService::new(Box::new(MemorySessionStore::new()));
        let mut rx = service.subscribe();

        service.logout();
        assert!(rx.has_changed().expect("channel open"));
        rx.mark_unchanged();

        // Second logout on an already signed-out session still notifies.
        service.logout();
        assert!(rx.has_changed().expect("channel open"));
        assert!(!rx.borrow().is_authenticated);
    }
}
