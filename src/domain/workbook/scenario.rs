//! Expected-value scenario - a two-outcome estimate of the deal itself.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Probability};

/// Best/worst case outcomes with probabilities.
///
/// The two probabilities are independent inputs and need not sum to 100;
/// no cross-field validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvScenario {
    pub best_case_value: Money,
    pub best_case_probability: Probability,
    pub worst_case_value: Money,
    pub worst_case_probability: Probability,
}

impl EvScenario {
    /// Probability-weighted best case.
    pub fn best_case_weighted(&self) -> Money {
        self.best_case_value
            .scaled(self.best_case_probability.as_fraction())
    }

    /// Probability-weighted worst case.
    pub fn worst_case_weighted(&self) -> Money {
        self.worst_case_value
            .scaled(self.worst_case_probability.as_fraction())
    }

    /// Expected value of the deal: best and worst cases weighted and summed.
    pub fn expected_value(&self) -> Money {
        self.best_case_weighted() + self.worst_case_weighted()
    }

    /// Applies a single field update.
    pub fn apply(&mut self, update: ScenarioUpdate) {
        match update {
            ScenarioUpdate::BestCaseValue(value) => self.best_case_value = value,
            ScenarioUpdate::BestCaseProbability(p) => self.best_case_probability = p,
            ScenarioUpdate::WorstCaseValue(value) => self.worst_case_value = value,
            ScenarioUpdate::WorstCaseProbability(p) => self.worst_case_probability = p,
        }
    }
}

impl Default for EvScenario {
    fn default() -> Self {
        Self {
            best_case_value: Money::ZERO,
            best_case_probability: Probability::EVEN,
            worst_case_value: Money::ZERO,
            worst_case_probability: Probability::EVEN,
        }
    }
}

/// Typed field update for the EV scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioUpdate {
    BestCaseValue(Money),
    BestCaseProbability(Probability),
    WorstCaseValue(Money),
    WorstCaseProbability(Probability),
}
