//! Configuration management for Mailgate
//!
//! This module defines the `Config` struct and its sub-structs, responsible
//! for holding the email dispatch settings. It uses the `figment` crate to
//! load configuration from a `mailgate.toml` file and merge it with
//! environment variables.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Hard fallback when neither a front-end URL nor a domain list is configured.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// The main configuration struct for the dispatcher.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for the SMTP transport.
    pub smtp: SmtpConfig,
    /// Configuration for links embedded in outgoing emails.
    pub links: LinkConfig,
}

/// Configuration for the SMTP transport.
///
/// The dispatcher is configured if and only if `host`, `user`, and `password`
/// are all present. There is no partial-credential mode: anything less leaves
/// the dispatcher permanently unconfigured for the process lifetime.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmtpConfig {
    /// The SMTP server hostname.
    pub host: Option<String>,
    /// The SMTP server port. Port 465 selects implicit TLS, anything else
    /// uses STARTTLS.
    pub port: u16,
    /// The account username, also used as the from-address of every
    /// outgoing message.
    pub user: Option<String>,
    /// The account password.
    pub password: Option<String>,
    /// Budget for establishing the TCP connection, in milliseconds.
    pub connect_timeout_ms: u64,
    /// Budget for socket reads and writes, in milliseconds.
    pub socket_timeout_ms: u64,
    /// Budget for the server greeting, in milliseconds.
    pub greeting_timeout_ms: u64,
    /// Maximum time a caller waits for a send before it is reported as
    /// failed, in milliseconds.
    pub send_timeout_ms: u64,
}

impl SmtpConfig {
    /// Returns host, user, and password when all three are present.
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        match (&self.host, &self.user, &self.password) {
            (Some(host), Some(user), Some(password)) => {
                Some((host, user, password))
            }
            _ => None,
        }
    }

    /// Whether the transport credentials are fully present.
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// Implicit-TLS mode, derived from the conventional SMTPS port.
    pub fn secure(&self) -> bool {
        self.port == 465
    }
}

/// Configuration for links embedded in outgoing emails.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LinkConfig {
    /// Explicit base URL of the front-end application.
    pub frontend_url: Option<String>,
    /// Comma-separated list of fallback domains. The first entry is used
    /// when `frontend_url` is not set.
    pub domains: Option<String>,
}

impl LinkConfig {
    /// Resolves the front-end base URL for links in outgoing emails.
    ///
    /// Precedence: explicit `frontend_url`, then the first entry of
    /// `domains`, then [`DEFAULT_FRONTEND_URL`].
    pub fn frontend_base(&self) -> String {
        if let Some(url) = &self.frontend_url {
            if !url.trim().is_empty() {
                return url.trim().trim_end_matches('/').to_string();
            }
        }
        if let Some(domains) = &self.domains {
            if let Some(first) = domains.split(',').map(str::trim).find(|d| !d.is_empty()) {
                return first.trim_end_matches('/').to_string();
            }
        }
        DEFAULT_FRONTEND_URL.to_string()
    }
}

impl Config {
    /// Loads the configuration from the specified file.
    ///
    /// Sources are layered: built-in defaults, the TOML file, and finally
    /// environment variables prefixed with `MAILGATE_` (nested keys joined
    /// with `__`, e.g. `MAILGATE_SMTP__HOST`).
    pub fn load(config_path: &str) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("MAILGATE_").split("__"))
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            smtp: SmtpConfig::default(),
            links: LinkConfig::default(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: 587,
            user: None,
            password: None,
            connect_timeout_ms: 5_000,
            socket_timeout_ms: 5_000,
            greeting_timeout_ms: 5_000,
            send_timeout_ms: 5_000,
        }
    }
}
