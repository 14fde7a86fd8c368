//! Advice board - ordered list of community advice entries.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::AdviceId;

use super::AdviceEntry;

/// Example advice shown before anyone has posted in this session.
static SEED_ENTRIES: Lazy<Vec<(&'static str, &'static str, u32)>> = Lazy::new(|| {
    vec![
        (
            "George X.",
            "Try not to rush the negotiation. Take your time to understand everyone's needs.",
            24,
        ),
        (
            "Rebecca W.",
            "The best negotiators listen more than they speak in a negotiation.",
            18,
        ),
        (
            "Joaquin G.",
            "Focus on building rapport before diving into numbers. People are more likely to work with you when they like you!",
            31,
        ),
        (
            "Nicole B.",
            "Use the \"anchor\" technique early in the negotiation. It sets the frame for all subsequent discussions.",
            28,
        ),
    ]
});

/// The advice board, newest submissions first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceBoard {
    entries: Vec<AdviceEntry>,
}

impl AdviceBoard {
    /// Creates a board pre-populated with the example entries.
    pub fn seeded() -> Self {
        Self {
            entries: SEED_ENTRIES
                .iter()
                .map(|(author, advice, likes)| AdviceEntry::seeded(author, advice, *likes))
                .collect(),
        }
    }

    /// Creates an empty board.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns the entries, newest submission first.
    pub fn entries(&self) -> &[AdviceEntry] {
        &self.entries
    }

    /// Submits a new entry, prepending it to the list.
    ///
    /// Both fields are trimmed; if either ends up empty the submission is
    /// silently ignored and `None` is returned.
    pub fn submit(&mut self, author: &str, advice: &str) -> Option<AdviceId> {
        let author = author.trim();
        let advice = advice.trim();
        if author.is_empty() || advice.is_empty() {
            return None;
        }

        let entry = AdviceEntry::new(author, advice);
        let id = entry.id;
        self.entries.insert(0, entry);
        Some(id)
    }

    /// Increments the like counter of the entry with the given id;
    /// unknown ids are ignored.
    pub fn like(&mut self, id: AdviceId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.like();
        }
    }
}

impl Default for AdviceBoard {
    fn default() -> Self {
        Self::seeded()
    }
}
