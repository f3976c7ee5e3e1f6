use crate::model::item::{ItemDetails, Location, Priority};
use crate::model::timeline::TimelineEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a facility request: `open → allocated → dispatched → received`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Open,
    Allocated,
    Dispatched,
    Received,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Open => "open",
            RequestStatus::Allocated => "allocated",
            RequestStatus::Dispatched => "dispatched",
            RequestStatus::Received => "received",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A facility's stated need for supplies or blood.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: u64,
    pub facility_id: u64,
    pub facility_name: Option<String>,
    #[serde(flatten)]
    pub item: ItemDetails,
    pub priority: Priority,
    pub location: Location,
    pub is_emergency: bool,
    pub needed_by: Option<String>,
    pub notes: Option<String>,
    pub status: RequestStatus,
    pub matched_donation_id: Option<u64>,
    pub timeline: Vec<TimelineEntry<RequestStatus>>,
}

impl Request {
    /// Moves the request to `status` and records it on the timeline.
    /// Setting the current status again is a no-op.
    pub fn transition(&mut self, status: RequestStatus, by: impl Into<String>) {
        if self.status == status {
            return;
        }
        self.status = status;
        self.timeline.push(TimelineEntry::now(status, by));
    }
}
