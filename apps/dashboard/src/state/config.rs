//! # Configuration State
//!
//! Stores dashboard configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SCOOP_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use scoop_core::{Money, DEFAULT_ALERT_THRESHOLD, DEFAULT_LINE_COST_CENTS};

/// Amounts are stored in cents, so no more than two places can be shown.
pub const MAX_CURRENCY_DECIMALS: u8 = 2;

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Kitchen name shown in the dashboard header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places shown for amounts, at most [`MAX_CURRENCY_DECIMALS`].
    /// Amounts are always held in cents; fewer places round half up.
    pub currency_decimals: u8,

    /// Threshold given to new ingredients that arrive without one
    pub default_alert_threshold: f64,

    /// How long the "order placed" confirmation stays before the order resets
    pub order_reset_delay_ms: u64,

    /// Placeholder price per order line, in cents
    pub line_cost_cents: i64,

    /// Start the session with the demo kitchen
    pub seed_demo: bool,

    /// Alerts kept in the feed before the oldest are dropped
    pub max_alerts: usize,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Scoop Dev Kitchen"
    /// - Currency: USD ($)
    /// - Alert threshold: 20%
    /// - Order reset: 3 seconds
    /// - Line cost: $25.99
    /// - Demo data: enabled
    fn default() -> Self {
        ConfigState {
            store_name: "Scoop Dev Kitchen".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            default_alert_threshold: DEFAULT_ALERT_THRESHOLD,
            order_reset_delay_ms: 3000,
            line_cost_cents: DEFAULT_LINE_COST_CENTS,
            seed_demo: true,
            max_alerts: 50,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}

fn parse_decimals(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u8,
) -> Result<u8, ConfigError> {
    let decimals = parse_var(lookup, key, default)?;
    if decimals > MAX_CURRENCY_DECIMALS {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: decimals.to_string(),
        });
    }
    Ok(decimals)
}

impl ConfigState {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `SCOOP_STORE_NAME`: Override kitchen name
    /// - `SCOOP_DEFAULT_ALERT_THRESHOLD`: Percent, e.g. "25"
    /// - `SCOOP_ORDER_RESET_MS`: Confirmation delay in milliseconds
    /// - `SCOOP_LINE_COST_CENTS`: Estimated price per order line
    /// - `SCOOP_CURRENCY_DECIMALS`: Places shown, 0 to 2
    /// - `SCOOP_SEED_DEMO`: "true" / "false"
    /// - `SCOOP_MAX_ALERTS`: Alert feed length
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any key/value source over the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ConfigState::default();

        Ok(ConfigState {
            store_name: lookup("SCOOP_STORE_NAME").unwrap_or(defaults.store_name),
            currency_symbol: lookup("SCOOP_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            currency_decimals: parse_decimals(&lookup, "SCOOP_CURRENCY_DECIMALS", defaults.currency_decimals)?,
            default_alert_threshold: parse_var(
                &lookup,
                "SCOOP_DEFAULT_ALERT_THRESHOLD",
                defaults.default_alert_threshold,
            )?,
            order_reset_delay_ms: parse_var(&lookup, "SCOOP_ORDER_RESET_MS", defaults.order_reset_delay_ms)?,
            line_cost_cents: parse_var(&lookup, "SCOOP_LINE_COST_CENTS", defaults.line_cost_cents)?,
            seed_demo: parse_var(&lookup, "SCOOP_SEED_DEMO", defaults.seed_demo)?,
            max_alerts: parse_var(&lookup, "SCOOP_MAX_ALERTS", defaults.max_alerts)?,
        })
    }

    pub fn order_reset_delay(&self) -> Duration {
        Duration::from_millis(self.order_reset_delay_ms)
    }

    pub fn line_cost(&self) -> Money {
        Money::from_cents(self.line_cost_cents)
    }

    /// Renders an amount with the configured symbol and precision.
    ///
    /// ## Example
    /// ```rust
    /// use scoop_core::Money;
    /// use scoop_dashboard::state::ConfigState;
    ///
    /// let mut config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_cents(7797)), "$77.97");
    ///
    /// config.currency_decimals = 0;
    /// assert_eq!(config.format_money(Money::from_cents(7797)), "$78");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let decimals = u32::from(self.currency_decimals.min(MAX_CURRENCY_DECIMALS));
        let step = 10_u64.pow(u32::from(MAX_CURRENCY_DECIMALS) - decimals);
        let units = (amount.cents().unsigned_abs() + step / 2) / step;
        let sign = if amount.cents() < 0 && units != 0 { "-" } else { "" };

        if decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, units);
        }

        let scale = 10_u64.pow(decimals);
        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            units / scale,
            units % scale,
            width = decimals as usize
        )
    }
}
