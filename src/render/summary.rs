//! Position summary and advice board rendering.

use std::fmt::Write;

use crate::domain::advice::AdviceBoard;
use crate::domain::analysis::{DealAnalyzer, DealComparison, ZopaAnalyzer, ZopaStatus};
use crate::domain::workbook::NegotiationState;

use super::currency::{format_currency, format_currency_or_dash};

/// Renders the analysis-side summary: weighted BATNA, floor check,
/// ZOPA message, and the deal-vs-BATNA comparison.
pub struct SummaryRenderer {
    currency_symbol: String,
}

impl SummaryRenderer {
    /// Creates a renderer using the given currency symbol.
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Renders the position summary.
    pub fn render(&self, state: &NegotiationState) -> String {
        let sym = &self.currency_symbol;
        let mut out = String::new();

        let _ = writeln!(out, "POSITION SUMMARY");
        let _ = writeln!(
            out,
            "  Weighted BATNA:          {}",
            format_currency(sym, state.weighted_batna())
        );
        let _ = writeln!(
            out,
            "  Reservation price:       {}",
            format_currency_or_dash(sym, state.reservation_price())
        );
        let _ = writeln!(
            out,
            "  Counterpart reservation: {}",
            format_currency_or_dash(sym, state.estimated_counterpart_reservation())
        );
        let _ = writeln!(out);

        if DealAnalyzer::reservation_below_batna(state) {
            let _ = writeln!(
                out,
                "  Warning: your reservation price ({}) is lower than your weighted BATNA ({}).",
                format_currency(sym, state.reservation_price()),
                format_currency(sym, state.weighted_batna())
            );
        } else if state.reservation_price().is_positive() {
            let _ = writeln!(
                out,
                "  Your reservation price is above your weighted BATNA. Solid position."
            );
        }

        match ZopaAnalyzer::assess(state) {
            ZopaStatus::Exists { surplus } => {
                let _ = writeln!(
                    out,
                    "  ZOPA exists with {} surplus.",
                    format_currency(sym, surplus)
                );
            }
            ZopaStatus::Absent { gap } => {
                let _ = writeln!(
                    out,
                    "  No ZOPA: {} gap between the two walk-away numbers.",
                    format_currency(sym, gap)
                );
            }
            ZopaStatus::Indeterminate => {
                let _ = writeln!(
                    out,
                    "  ZOPA unknown until both reservation prices are entered."
                );
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  Deal EV:  {}",
            format_currency(sym, state.expected_value())
        );
        let _ = writeln!(
            out,
            "  BATNA EV: {}",
            format_currency(sym, state.weighted_batna())
        );
        match DealAnalyzer::compare(state) {
            Some(DealComparison::DealBetter { margin }) => {
                let _ = writeln!(out, "  Deal is better by {}.", format_currency(sym, margin));
            }
            Some(DealComparison::BatnaBetter { margin }) => {
                let _ = writeln!(out, "  BATNA is better by {}.", format_currency(sym, margin));
            }
            Some(DealComparison::Equal) => {
                let _ = writeln!(out, "  Both options have equal value.");
            }
            None => {}
        }

        out
    }
}

/// Renders the advice board, newest first.
pub fn render_advice_board(board: &AdviceBoard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "COMMUNITY ADVICE");
    for (index, entry) in board.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. \"{}\" — {} ({} likes)",
            index + 1,
            entry.advice,
            entry.author,
            entry.likes
        );
    }
    out
}
