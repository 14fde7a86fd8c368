//! Battle card - the printable game-day quick reference.

use std::fmt::Write;

use crate::domain::foundation::Priority;
use crate::domain::workbook::NegotiationState;

use super::currency::{format_currency, format_currency_or_dash};

/// Renders the battle card as printable plain text.
pub struct BattleCardRenderer {
    currency_symbol: String,
}

impl BattleCardRenderer {
    /// Creates a renderer using the given currency symbol.
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Renders the full battle card.
    pub fn render(&self, state: &NegotiationState) -> String {
        let sym = &self.currency_symbol;
        let mut out = String::new();

        let _ = writeln!(out, "BATTLE CARD");
        let _ = writeln!(out, "Your game-day quick reference");
        let _ = writeln!(out);

        let _ = writeln!(out, "WALK-AWAY NUMBER");
        let _ = writeln!(
            out,
            "  {}",
            format_currency_or_dash(sym, state.reservation_price())
        );
        let _ = writeln!(out, "  Do not accept anything below this number");
        let _ = writeln!(out);

        let _ = writeln!(out, "OPENING ANCHOR");
        let _ = writeln!(out, "  {}", format_currency(sym, state.effective_anchor()));
        let _ = writeln!(
            out,
            "  Default: 110% of reservation ({})",
            format_currency(sym, state.calculated_anchor())
        );
        let _ = writeln!(out);

        self.render_trade_list(&mut out, state);
        self.render_scripts(&mut out, state);
        self.render_quick_stats(&mut out, state);

        out
    }

    fn render_trade_list(&self, out: &mut String, state: &NegotiationState) {
        let _ = writeln!(out, "TRADE LIST");

        let bands = [
            (Priority::High, "Must Have", "No high priority items"),
            (Priority::Medium, "Nice to Have", "No medium priority items"),
            (Priority::Low, "Can Trade Away", "No low priority items"),
        ];

        for (priority, heading, empty_note) in bands {
            let _ = writeln!(out, "  {}:", heading);
            let mut any = false;
            for issue in state.issues_with_priority(priority) {
                any = true;
                let name = if issue.name.is_empty() {
                    "Unnamed issue"
                } else {
                    &issue.name
                };
                let _ = writeln!(out, "    - {} ({}pts)", name, issue.points);
            }
            if !any {
                let _ = writeln!(out, "    ({})", empty_note);
            }
        }

        if state.issues().is_empty() {
            let _ = writeln!(out, "  No issues defined yet.");
        }
        let _ = writeln!(out);
    }

    fn render_scripts(&self, out: &mut String, state: &NegotiationState) {
        let _ = writeln!(out, "RESPONSE SCRIPTS");

        if state.if_then_scripts().is_empty() {
            let _ = writeln!(out, "  No scripts defined yet.");
        } else {
            for script in state.if_then_scripts() {
                let trigger = if script.trigger.is_empty() {
                    "(empty trigger)"
                } else {
                    &script.trigger
                };
                let response = if script.response.is_empty() {
                    "(empty response)"
                } else {
                    &script.response
                };
                let _ = writeln!(out, "  If they say: \"{}\"", trigger);
                let _ = writeln!(out, "    Then I say: \"{}\"", response);
            }
        }
        let _ = writeln!(out);
    }

    fn render_quick_stats(&self, out: &mut String, state: &NegotiationState) {
        let sym = &self.currency_symbol;
        let zopa = match crate::domain::analysis::ZopaAnalyzer::assess(state).exists() {
            Some(true) => "YES",
            Some(false) => "NO",
            None => "—",
        };

        let _ = writeln!(out, "QUICK STATS");
        let _ = writeln!(
            out,
            "  Weighted BATNA:   {}",
            format_currency(sym, state.weighted_batna())
        );
        let _ = writeln!(out, "  Issues defined:   {}", state.issues().len());
        let _ = writeln!(out, "  Response scripts: {}", state.if_then_scripts().len());
        let _ = writeln!(out, "  ZOPA exists:      {}", zopa);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, Probability};
    use crate::domain::workbook::{BatnaUpdate, IssueUpdate, ScriptUpdate};

    fn renderer() -> BattleCardRenderer {
        BattleCardRenderer::new("$")
    }

    #[test]
    fn empty_state_renders_placeholders() {
        let card = renderer().render(&NegotiationState::new());
        assert!(card.contains("WALK-AWAY NUMBER\n  —"));
        assert!(card.contains("No issues defined yet."));
        assert!(card.contains("No scripts defined yet."));
        assert!(card.contains("ZOPA exists:      —"));
    }

    #[test]
    fn shows_effective_anchor_and_default_note() {
        let mut state = NegotiationState::new();
        state.set_reservation_price(Money::new(100000.0));

        let card = renderer().render(&state);
        assert!(card.contains("OPENING ANCHOR\n  $110,000"));
        assert!(card.contains("Default: 110% of reservation ($110,000)"));

        state.set_opening_anchor(Some(Money::new(90000.0)));
        let card = renderer().render(&state);
        assert!(card.contains("OPENING ANCHOR\n  $90,000"));
    }

    #[test]
    fn groups_issues_by_priority_band() {
        let mut state = NegotiationState::new();
        let high = state.add_issue();
        state.update_issue(high, IssueUpdate::Name("Base salary".to_string()));
        state.update_issue(high, IssueUpdate::Points(90));
        let low = state.add_issue();
        state.update_issue(low, IssueUpdate::Points(10));

        let card = renderer().render(&state);
        assert!(card.contains("Must Have:\n    - Base salary (90pts)"));
        assert!(card.contains("Can Trade Away:\n    - Unnamed issue (10pts)"));
        assert!(card.contains("(No medium priority items)"));
    }

    #[test]
    fn renders_scripts_and_stats() {
        let mut state = NegotiationState::new();
        let id = state.batna_options()[0].id;
        state.update_batna_option(id, BatnaUpdate::Value(Money::new(100000.0)));
        state.update_batna_option(id, BatnaUpdate::Probability(Probability::new(50.0)));

        let script = state.add_if_then_script();
        state.update_if_then_script(
            script,
            ScriptUpdate::Trigger("Final offer".to_string()),
        );

        state.set_reservation_price(Money::new(80000.0));
        state.set_estimated_counterpart_reservation(Money::new(100000.0));

        let card = renderer().render(&state);
        assert!(card.contains("If they say: \"Final offer\""));
        assert!(card.contains("Then I say: \"(empty response)\""));
        assert!(card.contains("Weighted BATNA:   $50,000"));
        assert!(card.contains("Response scripts: 1"));
        assert!(card.contains("ZOPA exists:      YES"));
    }
}
