//! Negotiable issue entity - one tradeable item with a point score.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IssueId, Priority};

/// A negotiable issue, scored 0-100 points by how much it matters.
///
/// # Invariants
///
/// - `priority` always reflects the last-written `points` value; the two
///   are only ever set together through [`NegotiableIssue::set_points`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiableIssue {
    pub id: IssueId,
    pub name: String,
    pub points: i64,
    pub priority: Priority,
}

impl NegotiableIssue {
    /// Creates a blank issue: empty name, 50 points, medium priority.
    pub fn blank() -> Self {
        Self {
            id: IssueId::new(),
            name: String::new(),
            points: 50,
            priority: Priority::Medium,
        }
    }

    /// Sets points and the derived priority in one step.
    ///
    /// This is the only write path for either field, so a reader never
    /// observes them out of sync.
    pub fn set_points(&mut self, points: i64) {
        self.points = points;
        self.priority = Priority::from_points(points);
    }

    /// Applies a single field update.
    pub fn apply(&mut self, update: IssueUpdate) {
        match update {
            IssueUpdate::Name(name) => self.name = name,
            IssueUpdate::Points(points) => self.set_points(points),
        }
    }
}

/// Typed field update for a negotiable issue.
///
/// There is deliberately no `Priority` variant: priority is derived from
/// points and cannot be written independently.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueUpdate {
    Name(String),
    Points(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_issue_has_documented_defaults() {
        let issue = NegotiableIssue::blank();
        assert_eq!(issue.name, "");
        assert_eq!(issue.points, 50);
        assert_eq!(issue.priority, Priority::Medium);
    }

    #[test]
    fn set_points_recomputes_priority() {
        let mut issue = NegotiableIssue::blank();

        issue.set_points(75);
        assert_eq!(issue.priority, Priority::High);

        issue.set_points(55);
        assert_eq!(issue.priority, Priority::Medium);

        issue.set_points(10);
        assert_eq!(issue.priority, Priority::Low);
    }

    #[test]
    fn points_update_through_apply_keeps_priority_in_sync() {
        let mut issue = NegotiableIssue::blank();
        issue.apply(IssueUpdate::Points(70));
        assert_eq!(issue.points, 70);
        assert_eq!(issue.priority, Priority::High);
    }

    #[test]
    fn renaming_does_not_touch_points_or_priority() {
        let mut issue = NegotiableIssue::blank();
        issue.set_points(80);

        issue.apply(IssueUpdate::Name("Salary".to_string()));
        assert_eq!(issue.name, "Salary");
        assert_eq!(issue.points, 80);
        assert_eq!(issue.priority, Priority::High);
    }
}
