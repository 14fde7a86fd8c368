//! Probability value object (0-100 scale, deliberately unclamped).
//!
//! User-entered probabilities outside 0-100 are accepted and used
//! arithmetically as-is. Range feedback is a presentation concern;
//! the workbook core never rejects or clamps a value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A probability expressed in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Fifty-fifty, the default for fresh options and scenarios.
    pub const EVEN: Self = Self(50.0);

    /// One hundred percent.
    pub const CERTAIN: Self = Self(100.0);

    /// Creates a Probability from a percent value, without clamping.
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// Parses user-entered text, coercing anything unparseable to zero.
    pub fn parse_or_zero(input: &str) -> Self {
        Self(input.trim().parse::<f64>().unwrap_or(0.0))
    }

    /// Returns the percent value.
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (50% -> 0.5).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
