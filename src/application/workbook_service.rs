//! WorkbookService - single-writer facade over one preparation session.
//!
//! The service owns the negotiation state and the advice board for the
//! lifetime of the process. Callers hold the service by exclusive
//! reference for mutations, so all writes are serialized by construction;
//! reads hand out shared references to the current value.

use tracing::debug;

use crate::domain::advice::AdviceBoard;
use crate::domain::analysis::{DealAnalyzer, DealComparison, ZopaAnalyzer, ZopaStatus};
use crate::domain::foundation::{AdviceId, IssueId, Money, OptionId, ScriptId, Timestamp};
use crate::domain::workbook::{
    BatnaUpdate, IssueUpdate, NegotiationState, ProfileUpdate, ScenarioUpdate, ScriptUpdate,
};

/// One negotiation-preparation session: state, advice board, and every
/// operation over them. State lives only as long as the service.
#[derive(Debug)]
pub struct WorkbookService {
    state: NegotiationState,
    advice: AdviceBoard,
    created_at: Timestamp,
}

impl WorkbookService {
    /// Creates a fresh session with default state and seeded advice.
    pub fn new() -> Self {
        Self {
            state: NegotiationState::new(),
            advice: AdviceBoard::seeded(),
            created_at: Timestamp::now(),
        }
    }

    /// Read-only view of the current negotiation state.
    pub fn state(&self) -> &NegotiationState {
        &self.state
    }

    /// Read-only view of the advice board.
    pub fn advice(&self) -> &AdviceBoard {
        &self.advice
    }

    /// When this session started.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (all total: unknown ids no-op, nothing returns an error)
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a blank BATNA option.
    pub fn add_batna_option(&mut self) -> OptionId {
        let id = self.state.add_batna_option();
        debug!(%id, "added batna option");
        id
    }

    /// Updates one field of a BATNA option.
    pub fn update_batna_option(&mut self, id: OptionId, update: BatnaUpdate) {
        self.state.update_batna_option(id, update);
    }

    /// Removes a BATNA option. The core allows removing the last one;
    /// front ends are expected to guard against that themselves.
    pub fn remove_batna_option(&mut self, id: OptionId) {
        self.state.remove_batna_option(id);
        debug!(%id, remaining = self.state.batna_options().len(), "removed batna option");
    }

    /// Sets the walk-away number.
    pub fn set_reservation_price(&mut self, price: Money) {
        self.state.set_reservation_price(price);
        debug!(price = price.amount(), "set reservation price");
    }

    /// Sets the estimated counterpart walk-away number.
    pub fn set_estimated_counterpart_reservation(&mut self, price: Money) {
        self.state.set_estimated_counterpart_reservation(price);
        debug!(price = price.amount(), "set counterpart reservation estimate");
    }

    /// Appends a blank negotiable issue.
    pub fn add_issue(&mut self) -> IssueId {
        let id = self.state.add_issue();
        debug!(%id, "added issue");
        id
    }

    /// Updates one field of an issue; points updates recompute priority.
    pub fn update_issue(&mut self, id: IssueId, update: IssueUpdate) {
        self.state.update_issue(id, update);
    }

    /// Removes an issue.
    pub fn remove_issue(&mut self, id: IssueId) {
        self.state.remove_issue(id);
    }

    /// Sets one counterpart profile field.
    pub fn update_counterpart_profile(&mut self, update: ProfileUpdate) {
        self.state.update_counterpart_profile(update);
    }

    /// Sets one EV scenario field.
    pub fn update_ev_scenario(&mut self, update: ScenarioUpdate) {
        self.state.update_ev_scenario(update);
    }

    /// Appends a blank if/then script.
    pub fn add_if_then_script(&mut self) -> ScriptId {
        let id = self.state.add_if_then_script();
        debug!(%id, "added if/then script");
        id
    }

    /// Updates one field of an if/then script.
    pub fn update_if_then_script(&mut self, id: ScriptId, update: ScriptUpdate) {
        self.state.update_if_then_script(id, update);
    }

    /// Removes an if/then script.
    pub fn remove_if_then_script(&mut self, id: ScriptId) {
        self.state.remove_if_then_script(id);
    }

    /// Sets or clears the manual opening anchor.
    pub fn set_opening_anchor(&mut self, anchor: Option<Money>) {
        self.state.set_opening_anchor(anchor);
        debug!(anchor = ?anchor.map(|a| a.amount()), "set opening anchor");
    }

    /// Posts a new advice entry; blank author or text is ignored.
    pub fn submit_advice(&mut self, author: &str, advice: &str) -> Option<AdviceId> {
        self.advice.submit(author, advice)
    }

    /// Likes an advice entry.
    pub fn like_advice(&mut self, id: AdviceId) {
        self.advice.like(id);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derivations (recomputed on every call)
    // ─────────────────────────────────────────────────────────────────────────

    /// Probability-weighted value across all BATNA options.
    pub fn weighted_batna(&self) -> Money {
        self.state.weighted_batna()
    }

    /// Expected value of the deal from the two-outcome scenario.
    pub fn expected_value(&self) -> Money {
        self.state.expected_value()
    }

    /// Default anchor: 110% of the reservation price.
    pub fn calculated_anchor(&self) -> Money {
        self.state.calculated_anchor()
    }

    /// Manual anchor override when set, calculated default otherwise.
    pub fn effective_anchor(&self) -> Money {
        self.state.effective_anchor()
    }

    /// Tri-state ZOPA assessment.
    pub fn zopa_status(&self) -> ZopaStatus {
        ZopaAnalyzer::assess(&self.state)
    }

    /// Deal-vs-BATNA comparison; `None` while both sides are zero.
    pub fn deal_comparison(&self) -> Option<DealComparison> {
        DealAnalyzer::compare(&self.state)
    }

    /// True when the entered floor is below the weighted fallback.
    pub fn reservation_below_batna(&self) -> bool {
        DealAnalyzer::reservation_below_batna(&self.state)
    }

    /// Serializes the current negotiation state as pretty-printed JSON,
    /// ids included, so a session can be inspected or kept around.
    pub fn export_state_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.state)
    }
}

impl Default for WorkbookService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Probability;

    #[test]
    fn fresh_service_matches_documented_defaults() {
        let service = WorkbookService::new();
        assert_eq!(service.state().batna_options().len(), 1);
        assert_eq!(service.advice().entries().len(), 4);
        assert_eq!(service.weighted_batna(), Money::ZERO);
        assert_eq!(service.zopa_status(), ZopaStatus::Indeterminate);
        assert_eq!(service.deal_comparison(), None);
        assert!(!service.reservation_below_batna());
    }

    #[test]
    fn derivations_track_mutations_without_caching() {
        let mut service = WorkbookService::new();
        let id = service.state().batna_options()[0].id;
        service.update_batna_option(id, BatnaUpdate::Value(Money::new(100000.0)));
        service.update_batna_option(id, BatnaUpdate::Probability(Probability::new(50.0)));
        assert_eq!(service.weighted_batna().amount(), 50000.0);

        service.update_batna_option(id, BatnaUpdate::Probability(Probability::CERTAIN));
        assert_eq!(service.weighted_batna().amount(), 100000.0);
    }

    #[test]
    fn effective_anchor_follows_override_lifecycle() {
        let mut service = WorkbookService::new();
        service.set_reservation_price(Money::new(100000.0));
        assert!((service.effective_anchor().amount() - 110000.0).abs() < 1e-6);

        service.set_opening_anchor(Some(Money::new(90000.0)));
        assert_eq!(service.effective_anchor().amount(), 90000.0);

        service.set_opening_anchor(None);
        assert!((service.effective_anchor().amount() - 110000.0).abs() < 1e-6);
    }

    #[test]
    fn zopa_flows_from_both_reservations() {
        let mut service = WorkbookService::new();
        service.set_reservation_price(Money::new(80000.0));
        assert_eq!(service.zopa_status(), ZopaStatus::Indeterminate);

        service.set_estimated_counterpart_reservation(Money::new(100000.0));
        assert_eq!(
            service.zopa_status(),
            ZopaStatus::Exists { surplus: Money::new(20000.0) }
        );
    }

    #[test]
    fn exported_json_restores_the_same_state() {
        let mut service = WorkbookService::new();
        service.set_reservation_price(Money::new(80000.0));
        service.add_issue();

        let json = service.export_state_json().unwrap();
        let restored: NegotiationState = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, service.state());
    }

    #[test]
    fn advice_submission_and_likes_flow_through() {
        let mut service = WorkbookService::new();
        let id = service.submit_advice("Priya", "Name the range first.").unwrap();
        service.like_advice(id);

        assert_eq!(service.advice().entries()[0].likes, 1);
        assert_eq!(service.submit_advice("", "no author"), None);
    }
}
