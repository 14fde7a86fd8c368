//! Render module - plain-text presentation of the workbook.
//!
//! Everything here consumes read-only state and derivation results; no
//! rendering code mutates the workbook.

mod battle_card;
mod currency;
mod summary;

pub use battle_card::BattleCardRenderer;
pub use currency::{format_currency, format_currency_or_dash};
pub use summary::{render_advice_board, SummaryRenderer};
