use crate::model::item::{ItemDetails, Location};
use crate::model::timeline::TimelineEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a donor offer: `available → allocated → fulfilled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Available,
    Allocated,
    Fulfilled,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Available => "available",
            DonationStatus::Allocated => "allocated",
            DonationStatus::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a blood donor can be reached, as entered on the donation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub from: String,
    pub to: String,
}

/// A donor's offered supplies or blood units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: u64,
    pub donor_id: u64,
    pub donor_name: Option<String>,
    #[serde(flatten)]
    pub item: ItemDetails,
    pub location: Location,
    pub expiry_date: Option<String>,
    pub preferred_location: Option<String>,
    pub availability: Option<AvailabilityWindow>,
    pub status: DonationStatus,
    pub matched_request_id: Option<u64>,
    pub timeline: Vec<TimelineEntry<DonationStatus>>,
}

impl Donation {
    /// Moves the donation to `status` and records it on the timeline.
    /// Setting the current status again is a no-op.
    pub fn transition(&mut self, status: DonationStatus, by: impl Into<String>) {
        if self.status == status {
            return;
        }
        self.status = status;
        self.timeline.push(TimelineEntry::now(status, by));
    }
}
