use crate::model::timeline::TimelineEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of an allocation. `Received` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Allocated,
    Dispatched,
    Received,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Allocated => "allocated",
            MatchStatus::Dispatched => "dispatched",
            MatchStatus::Received => "received",
        }
    }

    pub fn next(&self) -> Option<MatchStatus> {
        match self {
            MatchStatus::Allocated => Some(MatchStatus::Dispatched),
            MatchStatus::Dispatched => Some(MatchStatus::Received),
            MatchStatus::Received => None,
        }
    }

    /// A match may stay where it is (to record a note) or advance exactly one step.
    pub fn can_move_to(&self, target: MatchStatus) -> bool {
        *self == target || self.next() == Some(target)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The allocation linking exactly one request to exactly one donation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u64,
    pub request_id: u64,
    pub donation_id: u64,
    pub allocated_by: u64,
    pub status: MatchStatus,
    /// Append-only.
    pub notes: Vec<String>,
    pub timeline: Vec<TimelineEntry<MatchStatus>>,
}

#[cfg(test)]
mod tests {
    use super::MatchStatus::*;

    #[test]
    fn transitions_only_move_forward_one_step() {
        assert!(Allocated.can_move_to(Allocated));
        assert!(Allocated.can_move_to(Dispatched));
        assert!(!Allocated.can_move_to(Received));
        assert!(Dispatched.can_move_to(Received));
        assert!(!Dispatched.can_move_to(Allocated));
        assert!(!Received.can_move_to(Dispatched));
        assert!(Received.can_move_to(Received));
        assert_eq!(Received.next(), None);
    }
}
