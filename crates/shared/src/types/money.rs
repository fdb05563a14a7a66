//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// Amounts are kept unrounded; rounding happens only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units (e.g., yen, dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "JPY", "USD").
    #[serde(default)]
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Japanese Yen
    #[default]
    Jpy,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns a new amount in the same currency.
    #[must_use]
    pub const fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds the amount for display, half away from zero.
    #[must_use]
    pub fn rounded(&self, decimal_places: u32) -> Self {
        self.with_amount(
            self.amount
                .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jpy => write!(f, "JPY"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "JPY" => Ok(Self::Jpy),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let amount = dec!(1200000);
        let money = Money::new(amount, Currency::Jpy);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Jpy);
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::Usd);
        assert!(money.is_zero());
        assert_eq!(money.amount, Decimal::ZERO);
        assert_eq!(money.currency, Currency::Usd);
    }

    #[test]
    fn test_money_is_negative() {
        assert!(!Money::new(dec!(10), Currency::Jpy).is_negative());
        assert!(Money::new(dec!(-10), Currency::Jpy).is_negative());
        assert!(!Money::new(dec!(0), Currency::Jpy).is_negative());
        assert!(!Money::new(-Decimal::ZERO, Currency::Jpy).is_negative());
    }

    #[test]
    fn test_with_amount_keeps_currency() {
        let money = Money::new(dec!(5), Currency::Eur).with_amount(dec!(7.5));
        assert_eq!(money.amount, dec!(7.5));
        assert_eq!(money.currency, Currency::Eur);
    }

    #[test]
    fn test_rounded_half_away_from_zero() {
        let money = Money::new(dec!(333333.335), Currency::Jpy);
        assert_eq!(money.rounded(2).amount, dec!(333333.34));

        let money = Money::new(dec!(-2.5), Currency::Jpy);
        assert_eq!(money.rounded(0).amount, dec!(-3));

        let money = Money::new(dec!(120000), Currency::Jpy);
        assert_eq!(money.rounded(2).amount, dec!(120000));
    }

    #[test]
    fn test_money_display() {
        let money = Money::new(dec!(450000.00), Currency::Jpy);
        assert_eq!(money.to_string(), "450000.00 JPY");
    }

    #[test]
    fn test_currency_defaults_to_yen() {
        assert_eq!(Currency::default(), Currency::Jpy);
        let money: Money = serde_json::from_str(r#"{"amount":"900000"}"#).unwrap();
        assert_eq!(money.currency, Currency::Jpy);
        assert_eq!(money.amount, dec!(900000));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("JPY").unwrap(), Currency::Jpy);
        assert_eq!(Currency::from_str("jpy").unwrap(), Currency::Jpy);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("EUR").unwrap(), Currency::Eur);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }
}
