// ── Runtime backend configuration ──
//
// Describes *how* to reach the back-office backend. Carries connection
// tuning but never touches disk: the CLI layers file/env/flag sources
// and hands the result in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use freightdesk_api::{BackofficeClient, Error as ApiError, TlsMode, TransportConfig};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). The default for a hosted backend.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (staging behind self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for talking to one backend deployment.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend root URL (e.g. `https://backoffice.example.com`).
    pub url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl BackendConfig {
    /// The transport layer's view of these settings.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }

    /// Build an API client for this backend.
    pub fn client(&self) -> Result<BackofficeClient, ApiError> {
        BackofficeClient::new(self.url.clone(), &self.transport())
    }
}
