//! Client Configuration
//!
//! Settings persisted as JSON in `localStorage`, with defaults for every field.

use serde::{Deserialize, Serialize};

use crate::analytics::TimeRange;
use crate::error::ConfigError;

/// `localStorage` key holding the serialized config
pub const STORAGE_KEY: &str = "job_tracker_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every REST path ("" = same origin)
    pub api_base: String,
    /// Cookie that carries the CSRF token
    pub csrf_cookie: String,
    pub log_level: String,
    /// How often the dashboard calendar re-renders
    pub calendar_refresh_secs: u32,
    pub default_time_range: TimeRange,
    /// Post an "Application Notes" note after creating an application with notes
    pub mirror_application_notes: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            csrf_cookie: "csrftoken".to_string(),
            log_level: "info".to_string(),
            calendar_refresh_secs: 60,
            default_time_range: TimeRange::All,
            mirror_application_notes: false,
        }
    }
}

impl ClientConfig {
    /// Parse a stored config, falling back to defaults on malformed JSON
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<ClientConfig>(raw) {
            Ok(cfg) => cfg.normalized(),
            Err(e) => {
                log::warn!("[config] ignoring malformed stored config: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Level filter for the logger; unknown names mean `info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Join the API base with an absolute path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Trim the API base and restore defaults for unusable values
    pub fn normalized(mut self) -> Self {
        self.api_base = self.api_base.trim().trim_end_matches('/').to_string();
        if self.csrf_cookie.trim().is_empty() {
            self.csrf_cookie = Self::default().csrf_cookie;
        }
        if self.calendar_refresh_secs == 0 {
            self.calendar_refresh_secs = Self::default().calendar_refresh_secs;
        }
        self
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the config from local storage
pub fn load() -> ClientConfig {
    storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|raw| ClientConfig::from_json(&raw))
        .unwrap_or_default()
}

/// Persist the config to local storage
pub fn save(config: &ClientConfig) -> Result<(), ConfigError> {
    let storage = storage().ok_or(ConfigError::StorageUnavailable)?;
    storage
        .set_item(STORAGE_KEY, &config.to_json())
        .map_err(|e| ConfigError::Write(format!("{:?}", e)))
}

/// Drop any stored config and return the defaults
pub fn reset() -> ClientConfig {
    match storage() {
        Some(storage) => {
            if let Err(e) = storage.remove_item(STORAGE_KEY) {
                log::warn!("[config] could not clear stored config: {:?}", e);
            }
        }
        None => log::warn!("[config] {}", ConfigError::StorageUnavailable),
    }
    ClientConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg = ClientConfig::from_json(r#"{"api_base":"https://jobs.example.com/"}"#);

        assert_eq!(cfg.api_base, "https://jobs.example.com");
        assert_eq!(cfg.csrf_cookie, "csrftoken");
        assert_eq!(cfg.calendar_refresh_secs, 60);
        assert_eq!(cfg.default_time_range, TimeRange::All);
        assert!(!cfg.mirror_application_notes);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(ClientConfig::from_json("{not json"), ClientConfig::default());
    }

    #[test]
    fn test_out_of_range_stored_window_falls_back() {
        let cfg = ClientConfig::from_json(r#"{"default_time_range":"4000000000"}"#);
        assert_eq!(cfg.default_time_range, TimeRange::All);

        let cfg = ClientConfig::from_json(r#"{"default_time_range":"90"}"#);
        assert_eq!(cfg.default_time_range, TimeRange::LastDays(90));
    }

    #[test]
    fn test_zero_refresh_and_blank_cookie_are_replaced() {
        let cfg = ClientConfig::from_json(r#"{"csrf_cookie":"  ","calendar_refresh_secs":0}"#);
        assert_eq!(cfg.csrf_cookie, "csrftoken");
        assert_eq!(cfg.calendar_refresh_secs, 60);
    }

    #[test]
    fn test_level_filter_and_url() {
        let mut cfg = ClientConfig::default();
        cfg.log_level = "debug".into();
        assert_eq!(cfg.level_filter(), log::LevelFilter::Debug);
        cfg.log_level = "loud".into();
        assert_eq!(cfg.level_filter(), log::LevelFilter::Info);

        assert_eq!(cfg.url("/api/applications/"), "/api/applications/");
        cfg.api_base = "http://localhost:8000".into();
        assert_eq!(cfg.url("/api/applications/"), "http://localhost:8000/api/applications/");
    }

    #[test]
    fn test_round_trips_through_storage_format() {
        let mut cfg = ClientConfig::default();
        cfg.default_time_range = TimeRange::LastDays(30);
        cfg.mirror_application_notes = true;
        assert_eq!(ClientConfig::from_json(&cfg.to_json()), cfg);
    }
}
