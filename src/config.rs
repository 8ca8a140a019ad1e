//! Site Configuration
//!
//! Defaults are compiled in. A page may override any field with a JSON blob in
//! `<script id="site-config" type="application/json">`.

use serde::Deserialize;

/// Element id of the optional JSON override
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Shortest accepted ticker period
pub const MIN_INTERVAL_MS: u32 = 100;
/// Longest accepted offer countdown (one year)
pub const MAX_COUNTDOWN_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// PayPal checkout endpoint the purchase form posts to
    pub paypal_endpoint: String,
    pub paypal_business: String,
    pub item_name: String,
    /// Amount posted to PayPal, e.g. "99.00"
    pub amount: String,
    pub currency_code: String,
    /// Price shown on buttons, e.g. "$99"
    pub display_price: String,
    /// Offer countdown length from page load
    pub countdown_hours: i64,
    pub progress_total_days: u32,
    pub progress_interval_ms: u32,
    pub join_total_start: u64,
    pub join_weekly_start: u64,
    pub join_interval_ms: u32,
    /// Chance that a join tick also bumps the weekly count
    pub join_weekly_chance: f64,
    pub reflection_delay_ms: u32,
    pub support_email: String,
    pub whatsapp_url: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            paypal_endpoint: "https://www.paypal.com/cgi-bin/webscr".to_string(),
            paypal_business: "youremail@example.com".to_string(),
            item_name: "Masculine Energy Academy – 30-Day Protocol".to_string(),
            amount: "99.00".to_string(),
            currency_code: "USD".to_string(),
            display_price: "$99".to_string(),
            countdown_hours: 3,
            progress_total_days: 30,
            progress_interval_ms: 30_000,
            join_total_start: 7214,
            join_weekly_start: 102,
            join_interval_ms: 45_000,
            join_weekly_chance: 0.3,
            reflection_delay_ms: 45_000,
            support_email: "support@masculineenergy.com".to_string(),
            whatsapp_url: "https://wa.me/972504448105".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Read the override embedded in the page, if any.
    ///
    /// Returns the config plus one message per problem: a malformed blob
    /// (defaults are used) or an out-of-range field (that field's default is used).
    pub fn load() -> (Self, Vec<String>) {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => config.validated(),
                Err(e) => (Self::default(), vec![format!("malformed site config: {}", e)]),
            },
            _ => (Self::default(), Vec::new()),
        }
    }

    /// Replace out-of-range fields with their defaults
    pub fn validated(mut self) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut replaced = Vec::new();

        if !(0..=MAX_COUNTDOWN_HOURS).contains(&self.countdown_hours) {
            replaced.push(format!("countdown_hours {} out of range", self.countdown_hours));
            self.countdown_hours = defaults.countdown_hours;
        }
        if self.progress_total_days == 0 {
            replaced.push("progress_total_days must be at least 1".to_string());
            self.progress_total_days = defaults.progress_total_days;
        }
        for (name, value, default) in [
            ("progress_interval_ms", &mut self.progress_interval_ms, defaults.progress_interval_ms),
            ("join_interval_ms", &mut self.join_interval_ms, defaults.join_interval_ms),
            ("reflection_delay_ms", &mut self.reflection_delay_ms, defaults.reflection_delay_ms),
        ] {
            if *value < MIN_INTERVAL_MS {
                replaced.push(format!("{} {} below {} ms", name, value, MIN_INTERVAL_MS));
                *value = default;
            }
        }
        if !(0.0..=1.0).contains(&self.join_weekly_chance) {
            replaced.push(format!("join_weekly_chance {} outside 0..=1", self.join_weekly_chance));
            self.join_weekly_chance = defaults.join_weekly_chance;
        }
        (self, replaced)
    }

    /// Fields of the PayPal "Buy Now" form, in submission order
    pub fn checkout_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("cmd", "_xclick"),
            ("business", &self.paypal_business),
            ("item_name", &self.item_name),
            ("amount", &self.amount),
            ("currency_code", &self.currency_code),
        ]
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"amount": "79.00", "countdown_hours": 1}"#).unwrap();
        assert_eq!(config.amount, "79.00");
        assert_eq!(config.countdown_hours, 1);
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.progress_total_days, 30);
    }

    #[test]
    fn test_malformed_override_is_error() {
        assert!(SiteConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let json = r#"{
            "countdown_hours": 9223372036854775807,
            "progress_interval_ms": 0,
            "join_interval_ms": 0,
            "reflection_delay_ms": 5,
            "join_weekly_chance": 2.5,
            "progress_total_days": 0
        }"#;
        let (config, replaced) = SiteConfig::from_json(json).unwrap().validated();
        let defaults = SiteConfig::default();
        assert_eq!(config.countdown_hours, defaults.countdown_hours);
        assert_eq!(config.progress_interval_ms, defaults.progress_interval_ms);
        assert_eq!(config.join_interval_ms, defaults.join_interval_ms);
        assert_eq!(config.reflection_delay_ms, defaults.reflection_delay_ms);
        assert_eq!(config.join_weekly_chance, defaults.join_weekly_chance);
        assert_eq!(config.progress_total_days, defaults.progress_total_days);
        assert_eq!(replaced.len(), 6);
    }

    #[test]
    fn test_valid_values_kept() {
        let json = r#"{"countdown_hours": 0, "join_interval_ms": 100, "join_weekly_chance": 1.0}"#;
        let (config, replaced) = SiteConfig::from_json(json).unwrap().validated();
        assert!(replaced.is_empty());
        assert_eq!(config.countdown_hours, 0);
        assert_eq!(config.join_interval_ms, MIN_INTERVAL_MS);
        assert_eq!(config.join_weekly_chance, 1.0);
    }

    #[test]
    fn test_checkout_fields() {
        let config = SiteConfig::default();
        let fields = config.checkout_fields();
        assert_eq!(fields[0], ("cmd", "_xclick"));
        assert_eq!(fields[3], ("amount", "99.00"));
        assert_eq!(fields[4], ("currency_code", "USD"));
    }

    #[test]
    fn test_log_level_fallback() {
        let mut config = SiteConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
