//! Request payloads accepted by the backend endpoints.

use crate::model::donation::AvailabilityWindow;
use crate::model::item::{ItemDetails, Location, Priority};
use crate::model::matching::MatchStatus;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequest {
    pub facility_id: Option<u64>,
    pub facility_name: Option<String>,
    #[serde(flatten)]
    pub item: ItemDetails,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub is_emergency: bool,
    pub needed_by: Option<String>,
    pub notes: Option<String>,
}

/// Body of `POST /api/donations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub donor_id: Option<u64>,
    pub donor_name: Option<String>,
    #[serde(flatten)]
    pub item: ItemDetails,
    #[serde(default)]
    pub location: Location,
    pub expiry_date: Option<String>,
    pub preferred_location: Option<String>,
    pub availability: Option<AvailabilityWindow>,
}

/// Body of `POST /api/matches`. Either id may be unset when the coordinator
/// has not selected both sides yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateMatchRequest {
    pub request_id: Option<u64>,
    pub donation_id: Option<u64>,
    pub allocated_by: u64,
}

/// Body of `POST /api/matches/{match_id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchStatusRequest {
    pub status: MatchStatus,
    pub updated_by: u64,
    #[serde(default)]
    pub note: Option<String>,
}

/// Body of `POST /api/emergency`. Everything is optional on the wire so that
/// missing fields can be reported by name instead of as a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyRequest {
    pub facility_id: Option<u64>,
    pub item_name_or_blood_group: Option<String>,
    pub quantity_or_units: Option<u32>,
    pub priority: Option<Priority>,
    pub is_emergency: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub role: Option<String>,
}
