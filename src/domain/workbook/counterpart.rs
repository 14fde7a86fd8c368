//! Counterpart profile - assumptions about the other side.

use serde::{Deserialize, Serialize};

/// Free-text notes on the counterpart's positions, interests, and
/// constraints. No derived state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartProfile {
    pub positions: String,
    pub interests: String,
    pub constraints: String,
}

impl CounterpartProfile {
    /// Applies a single field update.
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::Positions(text) => self.positions = text,
            ProfileUpdate::Interests(text) => self.interests = text,
            ProfileUpdate::Constraints(text) => self.constraints = text,
        }
    }
}

/// Typed field update for the counterpart profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    Positions(String),
    Interests(String),
    Constraints(String),
}
