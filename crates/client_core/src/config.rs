//! Client settings: defaults, optional TOML file, then environment.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use shared::messages::{Locale, UnknownLocale};
use thiserror::Error;
use url::Url;

pub const SETTINGS_FILE: &str = "product_modal.toml";
pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub locale: Locale,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            locale: Locale::default(),
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn set_api_base_url(&mut self, raw: &str) -> Result<(), SettingsError> {
        self.api_base_url = normalize_base_url(raw)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid API base URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("invalid request timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error(transparent)]
    Locale(#[from] UnknownLocale),
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    locale: Option<String>,
}

/// Missing files are skipped. Later environment keys in each list win.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    let mut settings = ClientSettings::default();

    if let Some(file_cfg) = read_settings_file(path)? {
        if let Some(v) = file_cfg.api_base_url {
            settings.set_api_base_url(&v)?;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout_secs = parse_timeout(&v.to_string())?;
        }
        if let Some(v) = file_cfg.locale {
            settings.locale = v.parse()?;
        }
    }

    for key in ["PRODUCT_API_URL", "APP__API_BASE_URL"] {
        if let Some(v) = env(key) {
            settings.set_api_base_url(&v)?;
        }
    }
    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = parse_timeout(&v)?;
    }
    if let Some(v) = env("APP__LOCALE") {
        settings.locale = v.parse()?;
    }

    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Option<FileSettings>, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&raw)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_timeout(raw: &str) -> Result<u64, SettingsError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(SettingsError::InvalidTimeout(raw.to_string())),
    }
}

/// Validates an http(s) base URL and strips trailing slashes so that paths
/// can be appended with `format!("{base}/products")`.
pub fn normalize_base_url(raw: &str) -> Result<String, SettingsError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|err| SettingsError::InvalidUrl {
        value: trimmed.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SettingsError::InvalidUrl {
            value: trimmed.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
