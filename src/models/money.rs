//! Monetary amount type.
//!
//! Balances and request amounts are fixed-point decimals backed by `rust_decimal`, so
//! arithmetic never goes through binary floating point.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Currency prefix used in every human-readable amount.
pub const CURRENCY_PREFIX: &str = "R$";

/// A monetary amount in reais.
///
/// # Formatting
///
/// `Display` renders the amount with the currency prefix and exactly two decimal places,
/// rounding half away from zero:
///
/// - `12.5` → `R$ 12.50`
/// - `0.125` → `R$ 0.13`
///
/// # JSON
///
/// Serialized as a plain JSON number (`"balance": 60.0`). Deserialization accepts either a
/// number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Zero reais.
    pub const ZERO: Self = Money(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Underlying decimal value.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns `true` for amounts strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Sum of two amounts, or `None` if it does not fit in a decimal.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Difference of two amounts, or `None` if it does not fit in a decimal.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// The amount rounded to cents, without the currency prefix (`12.50`).
    pub fn to_plain_string(&self) -> String {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", cents)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", CURRENCY_PREFIX, self.to_plain_string())
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Parsing the decimal text yields the nearest f64, unlike mantissa/scale division
        let value = self
            .0
            .to_string()
            .parse::<f64>()
            .ok()
            .or_else(|| self.0.to_f64())
            .unwrap_or_default();
        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer).map(Money)
    }
}
