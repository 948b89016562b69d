//! Server configuration read from the process environment.
//!
//! A `.env` file is loaded first when present. Only the SMTP port is validated;
//! missing credentials are tolerated at startup and surface when a contact
//! submission is sent.

use std::env;

use thiserror::Error;

use crate::contact::DEFAULT_RECIPIENT;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// SMTP account, also used as the sender address (`EMAIL_USER`).
    pub username: Option<String>,
    /// SMTP secret (`EMAIL_PASS`).
    pub password: Option<String>,
    /// Where every contact submission is delivered (`CONTACT_RECIPIENT`).
    pub recipient: String,
    pub smtp_host: String,
    /// Relay port (`SMTP_PORT`). Unset means implicit TLS on 465; `587` switches the
    /// connection to STARTTLS, any other value keeps implicit TLS on that port.
    pub smtp_port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub mail: MailConfig,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit JSON logs (`ENVIRONMENT=production`).
    pub json_logs: bool,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let smtp_port = match non_empty("SMTP_PORT") {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                ConfigError::InvalidValue {
                    var: "SMTP_PORT".to_string(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let mail = MailConfig {
            username: non_empty("EMAIL_USER"),
            password: non_empty("EMAIL_PASS"),
            recipient: non_empty("CONTACT_RECIPIENT")
                .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
            smtp_host: non_empty("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port,
        };

        Ok(Self {
            mail,
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            json_logs: non_empty("ENVIRONMENT").is_some_and(|e| e == "production"),
        })
    }
}
