//! Runtime configuration for the backend endpoints.
//!
//! The web build is usually served behind a reverse proxy that exposes both backends
//! under `/api/...`, so the defaults are relative paths. Relative bases are resolved
//! against `api_origin` before any request is made.

use std::collections::HashMap;
use std::env;

/// Endpoint defaults shipped with the binary, for packaged builds that have no `.env`.
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_NAVIGATION_BOT_URL: &str = "/api/navigation-bot";
pub const DEFAULT_LOST_AND_FOUND_URL: &str = "/api/lost-and-found";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:4200";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub navigation_bot_url: String,
    pub lost_and_found_url: String,
    pub api_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            navigation_bot_url: DEFAULT_NAVIGATION_BOT_URL.to_string(),
            lost_and_found_url: DEFAULT_LOST_AND_FOUND_URL.to_string(),
            api_origin: DEFAULT_API_ORIGIN.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the endpoint overrides from the environment, then from [`BUNDLED_CONFIG`].
    pub fn from_env() -> Self {
        let bundled = bundled_values(BUNDLED_CONFIG);
        Self::from_lookup(|key| {
            env::var(key)
                .ok()
                .or_else(|| bundled.get(key).cloned())
        })
    }

    /// Build the config from any key lookup. Empty values count as unset, so a blank
    /// line in a `.env` file keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value_or = |key: &str, fallback: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            navigation_bot_url: value_or("NAVIGATION_BOT_API_URL", DEFAULT_NAVIGATION_BOT_URL),
            lost_and_found_url: value_or("LOST_AND_FOUND_API_URL", DEFAULT_LOST_AND_FOUND_URL),
            api_origin: value_or("CAMPUS_API_ORIGIN", DEFAULT_API_ORIGIN),
        }
    }

    /// Absolute base URL of the navigation bot.
    pub fn navigation_base(&self) -> String {
        resolve_base(&self.api_origin, &self.navigation_bot_url)
    }

    /// Absolute base URL of the lost-and-found service.
    pub fn lost_and_found_base(&self) -> String {
        resolve_base(&self.api_origin, &self.lost_and_found_url)
    }
}

/// Parse `.env`-formatted text without touching the process environment.
pub fn bundled_values(contents: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for entry in dotenvy::from_read_iter(contents.as_bytes()) {
        match entry {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(err) => tracing::warn!("skipping bundled config entry: {err}"),
        }
    }
    values
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Resolve `base` against `origin` unless it is already absolute. Trailing slashes
/// are dropped so endpoint paths can be appended with a single `/`.
pub fn resolve_base(origin: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    if is_absolute(base) {
        return base.to_string();
    }
    let origin = origin.trim_end_matches('/');
    if base.is_empty() {
        origin.to_string()
    } else {
        format!("{}/{}", origin, base.trim_start_matches('/'))
    }
}

/// Join an endpoint or resource path onto a base URL with exactly one slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
