//! # Configuration State
//!
//! Storefront settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FLEXNESSE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::env;
use std::time::Duration;

use flexnesse_core::NOTIFICATION_DISMISS_MS;
use serde::{Deserialize, Serialize};

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Title shown in the header bar.
    pub store_name: String,

    /// Currency word appended to prices.
    pub currency_label: String,

    /// Text direction for the host layout.
    pub text_direction: TextDirection,

    /// How long a notification stays visible, in milliseconds.
    pub notification_dismiss_ms: u64,
}

/// Layout direction of the storefront text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Rtl,
    Ltr,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Store: "Flexnesse - متجر الملابس"
    /// - Currency: جنيه
    /// - Direction: right-to-left
    /// - Toast: 3000ms
    fn default() -> Self {
        StoreConfig {
            store_name: "Flexnesse - متجر الملابس".to_string(),
            currency_label: "جنيه".to_string(),
            text_direction: TextDirection::Rtl,
            notification_dismiss_ms: NOTIFICATION_DISMISS_MS,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FLEXNESSE_STORE_NAME`: Override store title
    /// - `FLEXNESSE_CURRENCY`: Override currency label
    /// - `FLEXNESSE_NOTIFICATION_MS`: Override toast duration
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from any variable lookup, `from_env` uses the process
    /// environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(store_name) = lookup("FLEXNESSE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(currency) = lookup("FLEXNESSE_CURRENCY") {
            config.currency_label = currency;
        }

        if let Some(ms) = lookup("FLEXNESSE_NOTIFICATION_MS") {
            config.notification_dismiss_ms = ms
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FLEXNESSE_NOTIFICATION_MS".to_string()))?;
        }

        Ok(config)
    }

    pub fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }

    /// Formats a text price with the currency label.
    ///
    /// ## Example
    /// ```rust
    /// use flexnesse_storefront::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_price("100"), "100 جنيه");
    /// ```
    pub fn format_price(&self, price: &str) -> String {
        format!("{} {}", price, self.currency_label)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.notification_delay(), Duration::from_millis(3000));
        assert_eq!(config.text_direction, TextDirection::Rtl);
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = StoreConfig::from_vars(vars(&[
            ("FLEXNESSE_STORE_NAME", "Test Store"),
            ("FLEXNESSE_CURRENCY", "EGP"),
            ("FLEXNESSE_NOTIFICATION_MS", "1500"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Test Store");
        assert_eq!(config.format_price("100"), "100 EGP");
        assert_eq!(config.notification_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_from_vars_empty_is_default() {
        let config = StoreConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.store_name, StoreConfig::default().store_name);
        assert_eq!(config.notification_dismiss_ms, 3000);
    }

    #[test]
    fn test_from_vars_rejects_bad_delay() {
        let err = StoreConfig::from_vars(vars(&[("FLEXNESSE_NOTIFICATION_MS", "soon")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "FLEXNESSE_NOTIFICATION_MS"));
        assert_eq!(err.to_string(), "Invalid value for FLEXNESSE_NOTIFICATION_MS");
    }

    #[test]
    fn test_format_price_keeps_text() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price("100"), "100 جنيه");
        assert_eq!(config.format_price("abc"), "abc جنيه");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(StoreConfig::default()).unwrap();
        assert_eq!(json["textDirection"], "rtl");
        assert_eq!(json["notificationDismissMs"], 3000);
    }
}
