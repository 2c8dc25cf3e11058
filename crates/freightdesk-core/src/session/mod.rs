//! Session state types and the persisted document schema.

pub mod persist;
pub mod service;

use serde::{Deserialize, Serialize};

/// Authenticated back-office user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<freightdesk_api::UserPayload> for AuthUser {
    fn from(payload: freightdesk_api::UserPayload) -> Self {
        Self {
            id: payload.id,
            email: payload.email,
            name: payload.name,
            role: payload.role,
        }
    }
}

/// The session snapshot: who is signed in, if anyone.
///
/// Serializes as `{"user": ..., "isAuthenticated": ...}`; the persisted
/// document schema is a contract with existing installs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: Option<AuthUser>,
    pub is_authenticated: bool,
}

impl AuthSession {
    /// Snapshot for a freshly authenticated user.
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }
}

/// Result of a login attempt as surfaced to callers.
///
/// Failures share one shape: rejected credentials and transport problems
/// differ only in the message, never in the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure { message: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
