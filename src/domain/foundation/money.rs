//! Money value object - a currency amount.
//!
//! Amounts may be zero or negative; zero doubles as "not set" throughout
//! the workbook, so parsing user input never fails - unparseable text
//! coerces to zero instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency amount. Zero means "not set" by workbook convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Money from a raw amount.
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Parses user-entered text, coercing anything unparseable to zero.
    pub fn parse_or_zero(input: &str) -> Self {
        Self(input.trim().parse::<f64>().unwrap_or(0.0))
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns true if the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Scales the amount by a factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_zero_accepts_numbers() {
        assert_eq!(Money::parse_or_zero("125000").amount(), 125000.0);
        assert_eq!(Money::parse_or_zero("  -500.5 ").amount(), -500.5);
    }

    #[test]
    fn parse_or_zero_coerces_garbage_to_zero() {
        assert_eq!(Money::parse_or_zero("").amount(), 0.0);
        assert_eq!(Money::parse_or_zero("abc").amount(), 0.0);
        assert_eq!(Money::parse_or_zero("12k").amount(), 0.0);
    }

    #[test]
    fn zero_and_sign_predicates_work() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::new(-1.0).is_positive());
        assert!(Money::new(0.01).is_positive());
    }

    #[test]
    fn scaled_multiplies_amount() {
        assert_eq!(Money::new(100000.0).scaled(1.1).amount(), 110000.0);
    }

    #[test]
    fn arithmetic_operators_work() {
        let a = Money::new(100.0);
        let b = Money::new(40.0);
        assert_eq!((a + b).amount(), 140.0);
        assert_eq!((a - b).amount(), 60.0);
    }

    #[test]
    fn money_serializes_transparently() {
        let json = serde_json::to_string(&Money::new(80000.0)).unwrap();
        assert_eq!(json, "80000.0");
    }
}
