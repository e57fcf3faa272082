use std::{collections::HashMap, fs};

use serde::{Deserialize, Serialize};
use shared::protocol::DEFAULT_EVENT_ID;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const SETTINGS_FILE: &str = "avang.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub backend_url: String,
    pub wallet_rpc_url: Option<String>,
    pub event_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            wallet_rpc_url: None,
            event_id: DEFAULT_EVENT_ID.into(),
        }
    }
}

impl Settings {
    pub fn with_backend_url(mut self, backend_url: &str) -> Self {
        self.backend_url = normalize_backend_url(backend_url);
        self
    }

    pub fn with_wallet_rpc_url(mut self, wallet_rpc_url: &str) -> Self {
        let trimmed = wallet_rpc_url.trim();
        self.wallet_rpc_url = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_http_url("backend_url", &self.backend_url)?;
        if let Some(rpc) = &self.wallet_rpc_url {
            check_http_url("wallet_rpc_url", rpc)?;
        }
        Ok(())
    }
}

/// Defaults, then `avang.toml` in the working directory, then the environment.
pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    resolve_settings(file.as_deref(), |name| std::env::var(name).ok())
}

pub fn resolve_settings<F>(file: Option<&str>, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("backend_url") {
                    settings = settings.with_backend_url(v);
                }
                if let Some(v) = file_cfg.get("wallet_rpc_url") {
                    settings = settings.with_wallet_rpc_url(v);
                }
                if let Some(v) = file_cfg.get("event_id").filter(|v| !v.trim().is_empty()) {
                    settings.event_id = v.trim().to_string();
                }
            }
            Err(err) => tracing::warn!("ignoring unreadable {SETTINGS_FILE}: {err}"),
        }
    }

    let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    for name in ["AVANG_BACKEND_URL", "APP__BACKEND_URL"] {
        if let Some(v) = non_empty(name) {
            settings = settings.with_backend_url(&v);
        }
    }
    for name in ["AVANG_WALLET_RPC_URL", "APP__WALLET_RPC_URL"] {
        if let Some(v) = non_empty(name) {
            settings = settings.with_wallet_rpc_url(&v);
        }
    }
    for name in ["AVANG_EVENT_ID", "APP__EVENT_ID"] {
        if let Some(v) = non_empty(name) {
            settings.event_id = v.trim().to_string();
        }
    }

    settings
}

pub fn normalize_backend_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_BACKEND_URL.to_string();
    }
    trimmed.to_string()
}

fn check_http_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::UnsupportedScheme {
            field,
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
