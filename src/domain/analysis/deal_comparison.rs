//! Deal-vs-BATNA comparison and the reservation sanity check.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::workbook::NegotiationState;

/// Which side of the deal/no-deal comparison wins, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DealComparison {
    /// The deal's expected value beats the weighted BATNA.
    DealBetter { margin: Money },
    /// Walking away (the weighted BATNA) beats the deal's expected value.
    BatnaBetter { margin: Money },
    /// Both options have equal value.
    Equal,
}

/// Analyzer comparing the deal's expected value against the fallback.
pub struct DealAnalyzer;

impl DealAnalyzer {
    /// Compares deal EV against weighted BATNA.
    ///
    /// Returns `None` while both numbers are still zero - there is
    /// nothing meaningful to compare until one side has an estimate.
    pub fn compare(state: &NegotiationState) -> Option<DealComparison> {
        let ev = state.expected_value();
        let batna = state.weighted_batna();

        if ev.is_zero() && batna.is_zero() {
            return None;
        }

        Some(if ev > batna {
            DealComparison::DealBetter { margin: ev - batna }
        } else if batna > ev {
            DealComparison::BatnaBetter { margin: batna - ev }
        } else {
            DealComparison::Equal
        })
    }

    /// True when the entered walk-away number is below the weighted BATNA:
    /// the floor is worse than the fallback, so the floor is too low.
    pub fn reservation_below_batna(state: &NegotiationState) -> bool {
        let reservation = state.reservation_price();
        reservation.is_positive() && reservation < state.weighted_batna()
    }
}
