//! Fixed-precision decimal types for money and size.
//!
//! `Price` and `Qty` wrap [`rust_decimal::Decimal`] (28-29 significant
//! digits, exact base-10 arithmetic — no floats anywhere in the matching
//! path, per design). Both are totally ordered and hashable so they can be
//! used directly as `BTreeMap`/`HashMap` keys.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative monetary price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(Decimal);

/// A strictly positive order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Qty(Decimal);

/// Error returned when constructing a [`Price`] or [`Qty`] from an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    /// A price or quantity was negative.
    #[error("value must not be negative: {0}")]
    Negative(Decimal),
    /// A quantity was zero or negative.
    #[error("quantity must be strictly positive: {0}")]
    NonPositiveQty(Decimal),
    /// The input string could not be parsed as a decimal.
    #[error("invalid decimal string: {0}")]
    Parse(String),
}

impl Price {
    /// Builds a `Price`, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, DecimalError> {
        if value.is_sign_negative() {
            return Err(DecimalError::Negative(value));
        }
        Ok(Self(value))
    }

    /// The zero price. Not a valid order price, but useful as a sentinel.
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Price) -> Option<Price> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Qty {
    /// Builds a `Qty`, rejecting values that are not strictly positive.
    pub fn new(value: Decimal) -> Result<Self, DecimalError> {
        if value.is_sign_negative() {
            return Err(DecimalError::Negative(value));
        }
        if value.is_zero() {
            return Err(DecimalError::NonPositiveQty(value));
        }
        Ok(Self(value))
    }

    /// Builds a `Qty` allowing zero, for internal bookkeeping (e.g. `filled`
    /// or `remaining`, which legitimately reach zero).
    pub(crate) fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, other: Qty) -> Option<Qty> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Qty) -> Option<Qty> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn min(self, other: Qty) -> Qty {
        Self(self.0.min(other.0))
    }
}

impl FromStr for Price {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|e| DecimalError::Parse(e.to_string()))?;
        Price::new(value)
    }
}

impl FromStr for Qty {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|e| DecimalError::Parse(e.to_string()))?;
        Qty::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Qty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
