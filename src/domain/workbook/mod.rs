//! Workbook module - the negotiation state aggregate and its entities.
//!
//! This module defines:
//! - The three list entities (BATNA options, negotiable issues, if/then
//!   scripts) and their typed field-update commands
//! - The two singleton records (counterpart profile, EV scenario)
//! - The `NegotiationState` root aggregate that owns all of them and
//!   carries every mutation and the simple numeric derivations

mod batna;
mod counterpart;
mod issue;
mod scenario;
mod script;
mod state;

pub use batna::{BatnaOption, BatnaUpdate};
pub use counterpart::{CounterpartProfile, ProfileUpdate};
pub use issue::{IssueUpdate, NegotiableIssue};
pub use scenario::{EvScenario, ScenarioUpdate};
pub use script::{IfThenScript, ScriptUpdate};
pub use state::NegotiationState;
