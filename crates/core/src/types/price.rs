//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are kept in the currency's standard unit (dollars, not cents)
/// as a `Decimal` so no float rounding ever touches money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Price {
    /// Create a price from an amount and currency.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Create a price from an integer amount in the smallest currency unit.
    #[must_use]
    pub fn from_cents(cents: i64, currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency,
        }
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
}

impl CurrencyCode {
    /// The symbol used when formatting prices for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd | Self::Cad | Self::Aud => "$",
            Self::Eur => "\u{20ac}",
            Self::Gbp => "\u{a3}",
        }
    }

    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1999, CurrencyCode::Usd);
        assert_eq!(price.display(), "$19.99");
    }

    #[test]
    fn test_display_pads_fraction() {
        let price = Price::new(Decimal::new(24, 0), CurrencyCode::Usd);
        assert_eq!(price.display(), "$24.00");
    }

    #[test]
    fn test_non_dollar_symbols() {
        assert_eq!(Price::from_cents(500, CurrencyCode::Eur).display(), "\u{20ac}5.00");
        assert_eq!(Price::from_cents(500, CurrencyCode::Gbp).display(), "\u{a3}5.00");
    }

    #[test]
    fn test_serde_uses_uppercase_codes() {
        let price = Price::from_cents(2400, CurrencyCode::Usd);
        let json = serde_json::to_value(price).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["amount"], "24.00");
    }

    #[test]
    fn test_deserialize_from_document_shape() {
        let price: Price =
            serde_json::from_value(serde_json::json!({"amount": "12.50", "currency": "CAD"}))
                .unwrap();
        assert_eq!(price.display(), "$12.50");
        assert_eq!(price.currency.code(), "CAD");
    }
}
