//! Money type for product prices.
//!
//! Backends report prices as decimal floats. We convert them to a
//! cents-based integer representation once, at the edge, so that discount
//! math and formatting never see floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    CNY,
    INR,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF",
            Currency::CNY => "\u{00a5}",
            Currency::INR => "\u{20b9}",
            Currency::MXN => "MX$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "CHF" => Some(Currency::CHF),
            "CNY" => Some(Currency::CNY),
            "INR" => Some(Currency::INR),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use turbo_catalog::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a Money value from a backend amount pair.
    ///
    /// Unknown currency codes fall back to the default currency.
    pub fn from_backend(value: f64, currency_code: Option<&str>) -> Self {
        let currency = currency_code
            .and_then(Currency::from_code)
            .unwrap_or_default();
        Self::from_decimal(value, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Percentage saved going from `self` (regular) to `sale`, rounded to
    /// the nearest whole percent.
    ///
    /// Never negative. A non-positive regular price or a currency mismatch
    /// yields 0.
    pub fn discount_percent(&self, sale: &Money) -> u32 {
        if !self.is_positive() || self.currency != sale.currency {
            return 0;
        }
        let saved = self.amount_cents - sale.amount_cents;
        if saved <= 0 {
            return 0;
        }
        ((saved as f64 / self.amount_cents as f64) * 100.0).round() as u32
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(100.0, Currency::JPY);
        assert_eq!(m.amount_cents, 100); // JPY has no decimals
    }

    #[test]
    fn test_money_from_backend_unknown_currency() {
        let m = Money::from_backend(12.5, Some("XYZ"));
        assert_eq!(m.currency, Currency::USD);
        assert_eq!(m.amount_cents, 1250);

        let m = Money::from_backend(12.5, Some("eur"));
        assert_eq!(m.currency, Currency::EUR);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(100, Currency::JPY);
        assert_eq!(m.display(), "\u{00a5}100");
    }

    #[test]
    fn test_discount_percent() {
        let regular = Money::new(10000, Currency::USD);
        assert_eq!(regular.discount_percent(&Money::new(7500, Currency::USD)), 25);
        assert_eq!(regular.discount_percent(&Money::new(6667, Currency::USD)), 33);
        assert_eq!(regular.discount_percent(&regular), 0);
    }

    #[test]
    fn test_discount_percent_never_negative() {
        let regular = Money::new(5000, Currency::USD);
        assert_eq!(regular.discount_percent(&Money::new(6000, Currency::USD)), 0);

        let free = Money::zero(Currency::USD);
        assert_eq!(free.discount_percent(&Money::new(0, Currency::USD)), 0);
    }

    #[test]
    fn test_discount_percent_currency_mismatch() {
        let regular = Money::new(5000, Currency::USD);
        assert_eq!(regular.discount_percent(&Money::new(1000, Currency::EUR)), 0);
    }
}
