//! If/then response script entity - a prepared reply to a counterpart move.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ScriptId;

/// A paired trigger/response, both free text with no validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfThenScript {
    pub id: ScriptId,
    pub trigger: String,
    pub response: String,
}

impl IfThenScript {
    /// Creates a blank script.
    pub fn blank() -> Self {
        Self {
            id: ScriptId::new(),
            trigger: String::new(),
            response: String::new(),
        }
    }

    /// Applies a single field update.
    pub fn apply(&mut self, update: ScriptUpdate) {
        match update {
            ScriptUpdate::Trigger(trigger) => self.trigger = trigger,
            ScriptUpdate::Response(response) => self.response = response,
        }
    }
}

/// Typed field update for an if/then script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptUpdate {
    Trigger(String),
    Response(String),
}
