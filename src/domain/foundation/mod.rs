//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and enums that form the
//! vocabulary of the Dealprep domain.

mod ids;
mod money;
mod priority;
mod probability;
mod timestamp;

pub use ids::{AdviceId, IssueId, OptionId, ScriptId};
pub use money::Money;
pub use priority::Priority;
pub use probability::Probability;
pub use timestamp::Timestamp;
