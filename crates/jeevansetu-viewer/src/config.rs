//! Viewer configuration from the environment.
//!
//! - `JEEVANSETU_URL` -- server base URL (default `http://localhost:5000`)
//! - `JEEVANSETU_DISTRICT` -- initially selected district (default `Jaipur`)

use std::time::Duration;

use crate::district::District;
use crate::error::ViewerError;

/// Default server base URL.
pub const DEFAULT_URL: &str = "http://localhost:5000";

/// How long an alert banner stays visible.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

/// Runtime settings for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Server base URL, without a trailing slash.
    pub base_url: String,
    /// Initially selected district.
    pub district: District,
    /// Alert banner lifetime.
    pub alert_ttl: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_URL),
            district: District::default(),
            alert_ttl: ALERT_TTL,
        }
    }
}

impl ViewerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ViewerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through a key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ViewerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("JEEVANSETU_URL") {
            url.trim()
                .trim_end_matches('/')
                .clone_into(&mut config.base_url);
        }
        if let Some(district) = lookup("JEEVANSETU_DISTRICT") {
            config.district = district.parse()?;
        }
        config.ws_url()?;
        Ok(config)
    }

    /// Full URL for a REST path such as `/data`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Push channel URL derived from the base URL.
    pub fn ws_url(&self) -> Result<String, ViewerError> {
        self.base_url
            .strip_prefix("http://")
            .map(|rest| format!("ws://{rest}/ws"))
            .or_else(|| {
                self.base_url
                    .strip_prefix("https://")
                    .map(|rest| format!("wss://{rest}/ws"))
            })
            .ok_or_else(|| ViewerError::InvalidUrl(self.base_url.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn lookup(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_owned())
        }
    }

    #[test]
    fn defaults_point_at_local_server() {
        let config = ViewerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.district, District::Jaipur);
        assert_eq!(config.alert_ttl, Duration::from_secs(5));
        assert_eq!(config.endpoint("/data"), "http://localhost:5000/data");
        assert_eq!(config.ws_url().unwrap(), "ws://localhost:5000/ws");
    }

    #[test]
    fn overrides_apply_and_trailing_slash_is_dropped() {
        let config = ViewerConfig::from_lookup(lookup(&[
            ("JEEVANSETU_URL", "https://ops.example/"),
            ("JEEVANSETU_DISTRICT", "pune"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint("/reset"), "https://ops.example/reset");
        assert_eq!(config.ws_url().unwrap(), "wss://ops.example/ws");
        assert_eq!(config.district, District::Pune);
    }

    #[test]
    fn plain_http_url_with_surrounding_space_maps_to_ws() {
        let config =
            ViewerConfig::from_lookup(lookup(&[("JEEVANSETU_URL", " http://10.0.0.5:5000// ")]))
                .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.ws_url().unwrap(), "ws://10.0.0.5:5000/ws");
    }

    #[test]
    fn unusable_url_is_rejected() {
        let result = ViewerConfig::from_lookup(lookup(&[("JEEVANSETU_URL", "localhost:5000")]));
        assert!(matches!(result, Err(ViewerError::InvalidUrl(_))));
    }

    #[test]
    fn unknown_district_is_rejected() {
        let result = ViewerConfig::from_lookup(lookup(&[("JEEVANSETU_DISTRICT", "Mumbai")]));
        assert!(matches!(result, Err(ViewerError::Command(_))));
    }
}
