// Back-office API HTTP client
//
// Wraps `reqwest::Client` with base-URL handling and the authentication
// endpoint. The backend owns all business data; this client covers only
// the surface the client-side session layer needs.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Authenticated user document as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// HTTP client for the back-office API.
pub struct BackofficeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackofficeClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the backend root (e.g. `https://backoffice.example.com`)
    /// and may carry a path prefix.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a full URL for an API path, preserving any base path prefix.
    fn api_url(&self, path: &str) -> Url {
        let full = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&full).expect("invalid API URL")
    }

    /// Authenticate with the backend using email/password.
    ///
    /// `POST /auth/login` with a JSON credential body. Three outcomes:
    /// - 2xx with a user document
    /// - 401: credentials rejected (`Error::Unauthorized`)
    /// - anything else: backend or transport failure
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<UserPayload, Error> {
        let url = self.api_url("/auth/login");

        debug!("logging in at {}", url);

        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });

        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Backend {
                status: status.as_u16(),
                message: excerpt(&body),
            });
        }

        let raw = resp.text().await.map_err(Error::Transport)?;
        let user: UserPayload =
            serde_json::from_str(&raw).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: excerpt(&raw),
            })?;

        debug!("login accepted for {}", user.email);
        Ok(user)
    }
}

/// First 200 characters of a response body, for error context.
fn excerpt(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_preserves_base_path_prefix() {
        let client = BackofficeClient::with_client(
            reqwest::Client::new(),
            Url::parse("https://backoffice.example.com/api/v2/").expect("url"),
        );
        assert_eq!(
            client.api_url("/auth/login").as_str(),
            "https://backoffice.example.com/api/v2/auth/login"
        );
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let body = "x".repeat(500);
        assert_eq!(excerpt(&body).len(), 200);
        assert_eq!(excerpt("short"), "short");
    }
}
