//! Configuration for FreightDesk clients.
//!
//! TOML file + `FREIGHTDESK_*` environment layering, platform paths,
//! and translation to `freightdesk_core::BackendConfig`. The CLI applies
//! its flag overrides on top before asking for the runtime config.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use freightdesk_core::{BackendConfig, TlsVerification};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No backend URL anywhere in the layered configuration. Nothing
    /// network-facing can start without one.
    #[error("no backend URL configured")]
    MissingBackendUrl,

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub backend: BackendSettings,

    /// Presentation defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Session persistence settings.
    #[serde(default)]
    pub session: SessionSettings,
}

/// `[backend]` — how to reach the back-office API.
#[derive(Debug, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Backend base URL (e.g. "https://backoffice.example.com").
    pub url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Skip TLS verification.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: None,
            timeout: default_timeout(),
            insecure: false,
            ca_cert: None,
        }
    }
}

/// `[defaults]` — presentation preferences.
#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

/// `[session]` — where the persisted session document lives.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Override for the session document path.
    pub path: Option<PathBuf>,
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Paths ───────────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "freightdesk", "freightdesk").map_or_else(
        || dirs_fallback(".config").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Where the persisted session document (`auth-storage`) lives.
pub fn session_store_path(cfg: &Config) -> PathBuf {
    if let Some(ref path) = cfg.session.path {
        return path.clone();
    }
    ProjectDirs::from("com", "freightdesk", "freightdesk").map_or_else(
        || dirs_fallback(".local/share").join("auth-storage.json"),
        |dirs| dirs.data_dir().join("auth-storage.json"),
    )
}

fn dirs_fallback(base: &str) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(base);
    p.push("freightdesk");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from defaults + file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("FREIGHTDESK_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, falling back to defaults when loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Runtime config ──────────────────────────────────────────────────

/// Build the runtime `BackendConfig`, validating as we go.
///
/// A missing backend URL is fatal to whatever needed it; callers
/// surface it as a setup problem rather than retrying.
pub fn backend_config(cfg: &Config) -> Result<BackendConfig, ConfigError> {
    let raw = cfg
        .backend
        .url
        .as_deref()
        .ok_or(ConfigError::MissingBackendUrl)?;
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "backend.url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;

    let tls = if cfg.backend.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = cfg.backend.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(BackendConfig {
        url,
        tls,
        timeout: Duration::from_secs(cfg.backend.timeout),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_config_requires_a_url() {
        let cfg = Config::default();
        assert!(matches!(
            backend_config(&cfg),
            Err(ConfigError::MissingBackendUrl)
        ));
    }

    #[test]
    fn backend_config_rejects_unparsable_urls() {
        let mut cfg = Config::default();
        cfg.backend.url = Some("not a url".into());
        assert!(matches!(
            backend_config(&cfg),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn insecure_takes_precedence_over_custom_ca() {
        let mut cfg = Config::default();
        cfg.backend.url = Some("https://backoffice.example.com".into());
        cfg.backend.insecure = true;
        cfg.backend.ca_cert = Some(PathBuf::from("/tmp/ca.pem"));

        let backend = backend_config(&cfg).expect("backend config");
        assert_eq!(backend.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(backend.timeout, Duration::from_secs(30));
    }

    #[test]
    fn file_layer_overrides_defaults() {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(
                "[backend]\nurl = \"https://ops.example.com\"\ntimeout = 5\n",
            ));
        let cfg: Config = figment.extract().expect("extract");

        assert_eq!(cfg.backend.url.as_deref(), Some("https://ops.example.com"));
        assert_eq!(cfg.backend.timeout, 5);
        assert_eq!(cfg.defaults.output, "table");
    }

    #[test]
    fn session_path_override_is_honored() {
        let mut cfg = Config::default();
        cfg.session.path = Some(PathBuf::from("/srv/freightdesk/session.json"));
        assert_eq!(
            session_store_path(&cfg),
            PathBuf::from("/srv/freightdesk/session.json")
        );

        let default_path = session_store_path(&Config::default());
        assert!(default_path.ends_with("auth-storage.json"));
    }

    #[test]
    fn env_layer_overrides_the_file() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
            jail.create_dir("freightdesk")?;
            jail.create_file(
                "freightdesk/config.toml",
                "[backend]\nurl = \"https://file.example.com\"\ntimeout = 5\n",
            )?;
            jail.set_env("FREIGHTDESK_BACKEND_URL", "https://env.example.com");

            let cfg = load_config().expect("load");
            assert_eq!(cfg.backend.url.as_deref(), Some("https://env.example.com"));
            // Untouched file settings still apply.
            assert_eq!(cfg.backend.timeout, 5);
            Ok(())
        });
    }

    #[test]
    fn save_then_load_round_trips() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());

            let mut cfg = Config::default();
            cfg.backend.url = Some("https://ops.example.com".into());
            cfg.backend.insecure = true;
            save_config(&cfg).expect("save");

            let loaded = load_config().expect("load");
            assert_eq!(loaded.backend.url.as_deref(), Some("https://ops.example.com"));
            assert!(loaded.backend.insecure);
            Ok(())
        });
    }
}
