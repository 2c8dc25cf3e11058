use thiserror::Error;

/// Top-level error type for the `freightdesk-api` crate.
///
/// Covers every failure mode of the back-office HTTP surface:
/// authentication, transport, and payload decoding. `freightdesk-core`
/// maps these into session outcomes and user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The backend rejected the supplied credentials (HTTP 401).
    #[error("Unauthorized (HTTP 401)")]
    Unauthorized,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Backend ─────────────────────────────────────────────────────
    /// Non-success response outside the distinguished 401 case.
    #[error("Backend error (HTTP {status}): {message}")]
    Backend { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the backend rejected the supplied credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Backend { status, .. } => matches!(status, 502 | 503 | 504),
            _ => false,
        }
    }
}
