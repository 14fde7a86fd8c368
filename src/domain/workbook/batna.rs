//! BATNA option entity - one fallback alternative to a negotiated deal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, OptionId, Probability};

/// A single fallback alternative with an estimated value and the
/// probability of actually realizing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatnaOption {
    pub id: OptionId,
    pub description: String,
    pub value: Money,
    pub probability: Probability,
}

impl BatnaOption {
    /// Creates a blank option: empty description, zero value, 50% probability.
    pub fn blank() -> Self {
        Self {
            id: OptionId::new(),
            description: String::new(),
            value: Money::ZERO,
            probability: Probability::EVEN,
        }
    }

    /// Probability-weighted value of this option.
    pub fn weighted_value(&self) -> Money {
        self.value.scaled(self.probability.as_fraction())
    }

    /// Applies a single field update.
    pub fn apply(&mut self, update: BatnaUpdate) {
        match update {
            BatnaUpdate::Description(description) => self.description = description,
            BatnaUpdate::Value(value) => self.value = value,
            BatnaUpdate::Probability(probability) => self.probability = probability,
        }
    }
}

/// Typed field update for a BATNA option.
///
/// A closed command set instead of update-by-field-name: an invalid field
/// is a compile error, not a runtime case.
#[derive(Debug, Clone, PartialEq)]
pub enum BatnaUpdate {
    Description(String),
    Value(Money),
    Probability(Probability),
}
