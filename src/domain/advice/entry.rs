//! Advice entry - one shared tip with a like counter.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AdviceId, Timestamp};

/// A single piece of community advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceEntry {
    pub id: AdviceId,
    pub author: String,
    pub advice: String,
    pub likes: u32,
    pub submitted_at: Timestamp,
}

impl AdviceEntry {
    /// Creates a new entry with zero likes.
    pub fn new(author: impl Into<String>, advice: impl Into<String>) -> Self {
        Self {
            id: AdviceId::new(),
            author: author.into(),
            advice: advice.into(),
            likes: 0,
            submitted_at: Timestamp::now(),
        }
    }

    /// Creates a seeded entry with a preset like count.
    pub(crate) fn seeded(author: &str, advice: &str, likes: u32) -> Self {
        Self {
            id: AdviceId::new(),
            author: author.to_string(),
            advice: advice.to_string(),
            likes,
            submitted_at: Timestamp::now(),
        }
    }

    /// Increments the like counter.
    pub fn like(&mut self) {
        self.likes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_starts_with_zero_likes() {
        let entry = AdviceEntry::new("Dana", "Listen more than you speak.");
        assert_eq!(entry.likes, 0);
        assert_eq!(entry.author, "Dana");
    }

    #[test]
    fn like_increments_counter() {
        let mut entry = AdviceEntry::new("Dana", "Anchor early.");
        entry.like();
        entry.like();
        assert_eq!(entry.likes, 2);
    }
}
