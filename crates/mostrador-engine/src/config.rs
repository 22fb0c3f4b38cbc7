//! # Engine Configuration
//!
//! Store-level settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MOSTRADOR_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no mutex is needed.

use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Store name (displayed on receipts).
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,

    /// Label used on receipts for sales with no customer record.
    pub walk_in_label: String,
}

impl Default for EngineConfig {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        EngineConfig {
            store_name: "Mostrador POS".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            walk_in_label: "Mostrador".to_string(),
        }
    }
}

impl EngineConfig {
    /// Creates an EngineConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MOSTRADOR_STORE_NAME`: Override store name
    /// - `MOSTRADOR_CURRENCY_SYMBOL`: Override currency symbol
    /// - `MOSTRADOR_WALK_IN_LABEL`: Override the walk-in label
    pub fn from_env() -> Self {
        let mut config = EngineConfig::default();

        if let Ok(store_name) = std::env::var("MOSTRADOR_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("MOSTRADOR_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(label) = std::env::var("MOSTRADOR_WALK_IN_LABEL") {
            config.walk_in_label = label;
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use mostrador_engine::EngineConfig;
    ///
    /// let config = EngineConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = EngineConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = EngineConfig::default();
        assert_eq!(config.format_currency(-1100), "-$11.00");
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.walk_in_label, "Mostrador");
    }
}
