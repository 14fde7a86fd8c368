//! Analysis module - Pure derivation services over the workbook state.
//!
//! Nothing here caches or mutates: every function recomputes from the
//! state it is handed, so results can never go stale.

mod deal_comparison;
mod zopa;

pub use deal_comparison::{DealAnalyzer, DealComparison};
pub use zopa::{ZopaAnalyzer, ZopaStatus};
