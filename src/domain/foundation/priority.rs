//! Priority enum derived from issue points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue priority band, always derived from the issue's point score.
///
/// The bands are fixed: 70 points and above is High, 40-69 is Medium,
/// below 40 is Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Derives the priority band for a point score.
    pub fn from_points(points: i64) -> Self {
        if points >= 70 {
            Priority::High
        } else if points >= 40 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
