use actix_web::cookie::Key;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_APP_NAME: &str = "Smart Scholarship Hub";
const DEFAULT_TOAST_TTL_SECS: u64 = 5;
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub app_name: String,
    pub session_key: Option<String>,
    pub toast_ttl: Duration,
    pub cookie_secure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            session_key: None,
            toast_ttl: Duration::from_secs(DEFAULT_TOAST_TTL_SECS),
            cookie_secure: false,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_ok() {
            log::info!("Loaded environment from .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.bind_addr);

        let app_name = lookup("APP_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.app_name);

        let toast_ttl = match lookup("TOAST_TTL_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!("Ignoring invalid TOAST_TTL_SECS={raw:?}, using {DEFAULT_TOAST_TTL_SECS}s");
                    defaults.toast_ttl
                }
            },
            None => defaults.toast_ttl,
        };

        let cookie_secure = lookup("COOKIE_SECURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(defaults.cookie_secure);

        Self {
            bind_addr,
            app_name,
            session_key: lookup("SESSION_KEY"),
            toast_ttl,
            cookie_secure,
        }
    }

    /// Session encryption key. Falls back to a random key (sessions lost on restart).
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
