//! ZOPA assessment - does a zone of possible agreement exist?

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::workbook::NegotiationState;

/// Tri-state ZOPA outcome.
///
/// `Indeterminate` (either reservation still unset, i.e. zero) is a real
/// third state and must not be collapsed into `Absent`: the front end
/// renders a neutral message for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZopaStatus {
    /// One or both reservation prices are unset.
    Indeterminate,
    /// Their walk-away is at or above ours; `surplus` is the overlap.
    Exists { surplus: Money },
    /// Our walk-away exceeds theirs; `gap` is the shortfall.
    Absent { gap: Money },
}

impl ZopaStatus {
    /// Returns whether a zone exists, if that is knowable yet.
    pub fn exists(&self) -> Option<bool> {
        match self {
            ZopaStatus::Indeterminate => None,
            ZopaStatus::Exists { .. } => Some(true),
            ZopaStatus::Absent { .. } => Some(false),
        }
    }
}

/// Analyzer for zone-of-possible-agreement status.
pub struct ZopaAnalyzer;

impl ZopaAnalyzer {
    /// Assesses ZOPA from both reservation prices.
    ///
    /// Defined only when both sides' numbers are strictly positive;
    /// zero means "not entered yet" by workbook convention.
    pub fn assess(state: &NegotiationState) -> ZopaStatus {
        let ours = state.reservation_price();
        let theirs = state.estimated_counterpart_reservation();

        if !ours.is_positive() || !theirs.is_positive() {
            return ZopaStatus::Indeterminate;
        }

        if theirs >= ours {
            ZopaStatus::Exists { surplus: theirs - ours }
        } else {
            ZopaStatus::Absent { gap: ours - theirs }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(ours: f64, theirs: f64) -> NegotiationState {
        let mut state = NegotiationState::new();
        state.set_reservation_price(Money::new(ours));
        state.set_estimated_counterpart_reservation(Money::new(theirs));
        state
    }

    #[test]
    fn zopa_exists_with_surplus_when_their_number_is_higher() {
        let status = ZopaAnalyzer::assess(&state_with(80000.0, 100000.0));
        assert_eq!(
            status,
            ZopaStatus::Exists { surplus: Money::new(20000.0) }
        );
        assert_eq!(status.exists(), Some(true));
    }

    #[test]
    fn zopa_absent_with_gap_when_our_number_is_higher() {
        let status = ZopaAnalyzer::assess(&state_with(100000.0, 80000.0));
        assert_eq!(status, ZopaStatus::Absent { gap: Money::new(20000.0) });
        assert_eq!(status.exists(), Some(false));
    }

    #[test]
    fn equal_reservations_still_form_a_zone() {
        let status = ZopaAnalyzer::assess(&state_with(90000.0, 90000.0));
        assert_eq!(status, ZopaStatus::Exists { surplus: Money::ZERO });
    }

    #[test]
    fn unset_inputs_are_indeterminate_not_absent() {
        assert_eq!(
            ZopaAnalyzer::assess(&state_with(0.0, 100000.0)),
            ZopaStatus::Indeterminate
        );
        assert_eq!(
            ZopaAnalyzer::assess(&state_with(80000.0, 0.0)),
            ZopaStatus::Indeterminate
        );
        assert_eq!(
            ZopaAnalyzer::assess(&state_with(0.0, 0.0)),
            ZopaStatus::Indeterminate
        );
        assert_eq!(
            ZopaAnalyzer::assess(&state_with(0.0, 100000.0)).exists(),
            None
        );
    }
}
