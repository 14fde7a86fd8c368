//! Negotiation state aggregate - the root of the workbook.
//!
//! # Ownership
//!
//! The aggregate exclusively owns every entity in the workbook. All
//! mutations go through `&mut self`; readers get shared references to the
//! current value, so there is exactly one writer per session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IssueId, Money, OptionId, ScriptId};

use super::{
    BatnaOption, BatnaUpdate, CounterpartProfile, EvScenario, IfThenScript, IssueUpdate,
    NegotiableIssue, ProfileUpdate, ScenarioUpdate, ScriptUpdate,
};

/// Default opening anchor markup over the reservation price (110%).
pub const ANCHOR_MARKUP: f64 = 1.1;

/// Root aggregate for one negotiation-preparation session.
///
/// # Invariants
///
/// - Every issue's `priority` reflects its current `points`
/// - Entity ids are unique within their list and never reused
/// - Mutations with an unknown id are silent no-ops, never errors
///
/// The aggregate starts with a single blank BATNA option. Removal can
/// legally empty the list; keeping at least one option on screen is a
/// front-end guard, not a core rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationState {
    batna_options: Vec<BatnaOption>,
    reservation_price: Money,
    issues: Vec<NegotiableIssue>,
    counterpart_profile: CounterpartProfile,
    estimated_counterpart_reservation: Money,
    ev_scenario: EvScenario,
    if_then_scripts: Vec<IfThenScript>,
    opening_anchor: Option<Money>,
}

impl NegotiationState {
    /// Creates a fresh session: one blank BATNA option, no issues or
    /// scripts, all currency scalars at zero, anchor unset.
    pub fn new() -> Self {
        Self {
            batna_options: vec![BatnaOption::blank()],
            reservation_price: Money::ZERO,
            issues: Vec::new(),
            counterpart_profile: CounterpartProfile::default(),
            estimated_counterpart_reservation: Money::ZERO,
            ev_scenario: EvScenario::default(),
            if_then_scripts: Vec::new(),
            opening_anchor: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the BATNA options in insertion order.
    pub fn batna_options(&self) -> &[BatnaOption] {
        &self.batna_options
    }

    /// Returns the reservation price (walk-away number).
    pub fn reservation_price(&self) -> Money {
        self.reservation_price
    }

    /// Returns the negotiable issues in insertion order.
    pub fn issues(&self) -> &[NegotiableIssue] {
        &self.issues
    }

    /// Returns the counterpart profile.
    pub fn counterpart_profile(&self) -> &CounterpartProfile {
        &self.counterpart_profile
    }

    /// Returns the estimated counterpart reservation price.
    pub fn estimated_counterpart_reservation(&self) -> Money {
        self.estimated_counterpart_reservation
    }

    /// Returns the EV scenario.
    pub fn ev_scenario(&self) -> &EvScenario {
        &self.ev_scenario
    }

    /// Returns the if/then scripts in insertion order.
    pub fn if_then_scripts(&self) -> &[IfThenScript] {
        &self.if_then_scripts
    }

    /// Returns the manual opening anchor override, if set.
    pub fn opening_anchor(&self) -> Option<Money> {
        self.opening_anchor
    }

    // ─────────────────────────────────────────────────────────────────────────
    // BATNA options
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a blank BATNA option and returns its id.
    pub fn add_batna_option(&mut self) -> OptionId {
        let option = BatnaOption::blank();
        let id = option.id;
        self.batna_options.push(option);
        id
    }

    /// Updates one field of the option with the given id; unknown ids are
    /// ignored.
    pub fn update_batna_option(&mut self, id: OptionId, update: BatnaUpdate) {
        if let Some(option) = self.batna_options.iter_mut().find(|o| o.id == id) {
            option.apply(update);
        }
    }

    /// Removes the option with the given id; unknown ids are ignored.
    pub fn remove_batna_option(&mut self, id: OptionId) {
        self.batna_options.retain(|o| o.id != id);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reservation prices
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the walk-away number verbatim, including zero or negative.
    pub fn set_reservation_price(&mut self, price: Money) {
        self.reservation_price = price;
    }

    /// Sets the estimate of the counterpart's walk-away number verbatim.
    pub fn set_estimated_counterpart_reservation(&mut self, price: Money) {
        self.estimated_counterpart_reservation = price;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Issues
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a blank issue and returns its id.
    pub fn add_issue(&mut self) -> IssueId {
        let issue = NegotiableIssue::blank();
        let id = issue.id;
        self.issues.push(issue);
        id
    }

    /// Updates one field of the issue with the given id; a points update
    /// recomputes priority in the same call. Unknown ids are ignored.
    pub fn update_issue(&mut self, id: IssueId, update: IssueUpdate) {
        if let Some(issue) = self.issues.iter_mut().find(|i| i.id == id) {
            issue.apply(update);
        }
    }

    /// Removes the issue with the given id; unknown ids are ignored.
    pub fn remove_issue(&mut self, id: IssueId) {
        self.issues.retain(|i| i.id != id);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Counterpart profile and EV scenario
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets one of the three free-text profile fields.
    pub fn update_counterpart_profile(&mut self, update: ProfileUpdate) {
        self.counterpart_profile.apply(update);
    }

    /// Sets one numeric field of the EV scenario.
    pub fn update_ev_scenario(&mut self, update: ScenarioUpdate) {
        self.ev_scenario.apply(update);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // If/then scripts
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a blank script and returns its id.
    pub fn add_if_then_script(&mut self) -> ScriptId {
        let script = IfThenScript::blank();
        let id = script.id;
        self.if_then_scripts.push(script);
        id
    }

    /// Updates one field of the script with the given id; unknown ids are
    /// ignored.
    pub fn update_if_then_script(&mut self, id: ScriptId, update: ScriptUpdate) {
        if let Some(script) = self.if_then_scripts.iter_mut().find(|s| s.id == id) {
            script.apply(update);
        }
    }

    /// Removes the script with the given id; unknown ids are ignored.
    pub fn remove_if_then_script(&mut self, id: ScriptId) {
        self.if_then_scripts.retain(|s| s.id != id);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Opening anchor
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets or clears the manual anchor override. An explicit zero is a
    /// real override, distinct from unset.
    pub fn set_opening_anchor(&mut self, anchor: Option<Money>) {
        self.opening_anchor = anchor;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derivations
    // ─────────────────────────────────────────────────────────────────────────

    /// Probability-weighted value across all BATNA options. Empty list
    /// yields zero.
    pub fn weighted_batna(&self) -> Money {
        Money::new(
            self.batna_options
                .iter()
                .map(|o| o.weighted_value().amount())
                .sum(),
        )
    }

    /// Expected value of the deal itself, from the EV scenario.
    pub fn expected_value(&self) -> Money {
        self.ev_scenario.expected_value()
    }

    /// Default opening anchor: 110% of the reservation price. Zero when
    /// the reservation is zero.
    pub fn calculated_anchor(&self) -> Money {
        self.reservation_price.scaled(ANCHOR_MARKUP)
    }

    /// The anchor the battle card shows: the manual override when one is
    /// set (including an explicit zero), otherwise the calculated default.
    pub fn effective_anchor(&self) -> Money {
        self.opening_anchor.unwrap_or_else(|| self.calculated_anchor())
    }

    /// Issues in the given priority band, in insertion order.
    pub fn issues_with_priority(
        &self,
        priority: crate::domain::foundation::Priority,
    ) -> impl Iterator<Item = &NegotiableIssue> {
        self.issues.iter().filter(move |i| i.priority == priority)
    }
}

impl Default for NegotiationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Priority, Probability};
    use proptest::prelude::*;

    #[test]
    fn new_state_has_documented_defaults() {
        let state = NegotiationState::new();
        assert_eq!(state.batna_options().len(), 1);
        assert_eq!(state.batna_options()[0].probability, Probability::EVEN);
        assert_eq!(state.reservation_price(), Money::ZERO);
        assert!(state.issues().is_empty());
        assert!(state.if_then_scripts().is_empty());
        assert_eq!(state.estimated_counterpart_reservation(), Money::ZERO);
        assert_eq!(state.opening_anchor(), None);
    }

    #[test]
    fn weighted_batna_sums_weighted_options() {
        let mut state = NegotiationState::new();
        let first = state.batna_options()[0].id;
        state.update_batna_option(first, BatnaUpdate::Value(Money::new(100000.0)));
        state.update_batna_option(first, BatnaUpdate::Probability(Probability::new(50.0)));

        let second = state.add_batna_option();
        state.update_batna_option(second, BatnaUpdate::Value(Money::new(20000.0)));
        state.update_batna_option(second, BatnaUpdate::Probability(Probability::CERTAIN));

        assert_eq!(state.weighted_batna().amount(), 70000.0);
    }

    #[test]
    fn weighted_batna_of_empty_list_is_zero() {
        let mut state = NegotiationState::new();
        let only = state.batna_options()[0].id;
        state.remove_batna_option(only);

        assert!(state.batna_options().is_empty());
        assert_eq!(state.weighted_batna(), Money::ZERO);
    }

    #[test]
    fn calculated_anchor_is_110_percent_of_reservation() {
        let mut state = NegotiationState::new();
        state.set_reservation_price(Money::new(100000.0));
        assert!((state.calculated_anchor().amount() - 110000.0).abs() < 1e-6);

        state.set_reservation_price(Money::ZERO);
        assert_eq!(state.calculated_anchor(), Money::ZERO);
    }

    #[test]
    fn effective_anchor_prefers_explicit_override() {
        let mut state = NegotiationState::new();
        state.set_reservation_price(Money::new(100000.0));
        assert_eq!(state.effective_anchor(), state.calculated_anchor());

        state.set_opening_anchor(Some(Money::new(90000.0)));
        assert_eq!(state.effective_anchor().amount(), 90000.0);

        // An explicit zero is still an override, not "unset".
        state.set_opening_anchor(Some(Money::ZERO));
        assert_eq!(state.effective_anchor(), Money::ZERO);

        state.set_opening_anchor(None);
        assert_eq!(state.effective_anchor(), state.calculated_anchor());
    }

    #[test]
    fn updates_with_unknown_ids_are_no_ops() {
        let mut state = NegotiationState::new();
        let before = state.clone();

        state.update_batna_option(OptionId::new(), BatnaUpdate::Value(Money::new(1.0)));
        state.remove_batna_option(OptionId::new());
        state.update_issue(IssueId::new(), IssueUpdate::Points(99));
        state.remove_issue(IssueId::new());
        state.update_if_then_script(ScriptId::new(), ScriptUpdate::Trigger("x".to_string()));
        state.remove_if_then_script(ScriptId::new());

        assert_eq!(state, before);
    }

    #[test]
    fn add_then_remove_restores_prior_collection() {
        let mut state = NegotiationState::new();
        let before = state.clone();

        let issue = state.add_issue();
        state.remove_issue(issue);
        assert_eq!(state, before);

        let script = state.add_if_then_script();
        state.remove_if_then_script(script);
        assert_eq!(state, before);

        // Fresh adds never reuse a removed id.
        let again = state.add_issue();
        assert_ne!(again, issue);
    }

    #[test]
    fn removing_the_sole_batna_option_is_legal_at_the_core() {
        let mut state = NegotiationState::new();
        let only = state.batna_options()[0].id;
        state.remove_batna_option(only);
        assert!(state.batna_options().is_empty());
    }

    #[test]
    fn issue_update_leaves_other_entities_untouched() {
        let mut state = NegotiationState::new();
        let a = state.add_issue();
        let b = state.add_issue();

        state.update_issue(a, IssueUpdate::Points(90));

        let untouched = state.issues().iter().find(|i| i.id == b).unwrap();
        assert_eq!(untouched.points, 50);
        assert_eq!(untouched.priority, Priority::Medium);
    }

    #[test]
    fn issues_with_priority_filters_by_band() {
        let mut state = NegotiationState::new();
        let a = state.add_issue();
        let b = state.add_issue();
        let c = state.add_issue();
        state.update_issue(a, IssueUpdate::Points(85));
        state.update_issue(b, IssueUpdate::Points(50));
        state.update_issue(c, IssueUpdate::Points(20));

        assert_eq!(state.issues_with_priority(Priority::High).count(), 1);
        assert_eq!(state.issues_with_priority(Priority::Medium).count(), 1);
        assert_eq!(state.issues_with_priority(Priority::Low).count(), 1);
    }

    #[test]
    fn state_round_trips_through_json_with_exact_ids() {
        let mut state = NegotiationState::new();
        state.add_issue();
        state.add_if_then_script();
        state.set_reservation_price(Money::new(80000.0));
        state.set_opening_anchor(Some(Money::new(95000.0)));

        let json = serde_json::to_string(&state).unwrap();
        let back: NegotiationState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    proptest! {
        #[test]
        fn weighted_batna_matches_manual_sum(
            entries in proptest::collection::vec((-1_000_000.0f64..1_000_000.0, 0.0f64..200.0), 0..8)
        ) {
            let mut state = NegotiationState::new();
            let only = state.batna_options()[0].id;
            state.remove_batna_option(only);

            let mut expected = 0.0;
            for (value, percent) in &entries {
                let id = state.add_batna_option();
                state.update_batna_option(id, BatnaUpdate::Value(Money::new(*value)));
                state.update_batna_option(id, BatnaUpdate::Probability(Probability::new(*percent)));
                expected += value * (percent / 100.0);
            }

            let got = state.weighted_batna().amount();
            prop_assert!((got - expected).abs() <= 1e-6 * expected.abs().max(1.0));
        }

        #[test]
        fn priority_always_reflects_last_written_points(points in -50i64..200) {
            let mut state = NegotiationState::new();
            let id = state.add_issue();
            state.update_issue(id, IssueUpdate::Points(points));

            let issue = state.issues().iter().find(|i| i.id == id).unwrap();
            prop_assert_eq!(issue.priority, Priority::from_points(points));
        }
    }
}
