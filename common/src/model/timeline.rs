use crate::model::donation::Donation;
use crate::model::matching::Match;
use crate::model::request::Request;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One step in the status history of a request, donation or match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry<S> {
    pub status: S,
    pub at: DateTime<Utc>,
    /// Free-form actor label, e.g. `"facility 1"` or `"user 10"`.
    pub by: String,
}

impl<S> TimelineEntry<S> {
    pub fn now(status: S, by: impl Into<String>) -> Self {
        TimelineEntry {
            status,
            at: Utc::now(),
            by: by.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Request,
    Donation,
    Match,
}

/// Payload of the item detail screen: the entity itself, including its
/// timeline and notes, tagged with its type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "entityType", content = "item", rename_all = "lowercase")]
pub enum ItemDetail {
    Request(Request),
    Donation(Donation),
    Match(Match),
}
