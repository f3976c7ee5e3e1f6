use crate::model::donation::{Donation, DonationStatus};
use crate::model::item::Priority;
use crate::model::request::Request;
use serde::{Deserialize, Serialize};

/// Which dashboard is being viewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Donor,
    Ngo,
    Facility,
}

impl Role {
    /// Parses the `role` query parameter. Missing or unknown values fall back to `Donor`.
    pub fn from_query(role: Option<&str>) -> Role {
        match role.map(str::trim) {
            Some(r) if r.eq_ignore_ascii_case("ngo") => Role::Ngo,
            Some(r) if r.eq_ignore_ascii_case("facility") => Role::Facility,
            _ => Role::Donor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blood_group: Option<String>,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_donations: usize,
    pub active_donations: usize,
    pub total_requests: usize,
    pub active_requests: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationSummary {
    pub id: u64,
    pub item_name: String,
    pub quantity: u32,
    pub status: DonationStatus,
}

impl From<&Donation> for DonationSummary {
    fn from(donation: &Donation) -> Self {
        DonationSummary {
            id: donation.id,
            item_name: donation.item.label().to_string(),
            quantity: donation.item.amount(),
            status: donation.status,
        }
    }
}

/// Flattened request view used by the dashboards and the emergency endpoint.
///
/// Emergency requests and regular requests draw their ids from the same
/// sequence, so `id` is unambiguous within `recentRequests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummary {
    pub id: u64,
    pub facility_id: u64,
    pub item_name_or_blood_group: String,
    pub quantity_or_units: u32,
    pub priority: Priority,
    pub is_emergency: bool,
}

impl From<&Request> for RequestSummary {
    fn from(request: &Request) -> Self {
        RequestSummary {
            id: request.id,
            facility_id: request.facility_id,
            item_name_or_blood_group: request.item.label().to_string(),
            quantity_or_units: request.item.amount(),
            priority: request.priority,
            is_emergency: request.is_emergency,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub profile: Profile,
    pub kpis: Kpis,
    pub recent_donations: Vec<DonationSummary>,
    pub recent_requests: Vec<RequestSummary>,
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn unknown_or_missing_role_falls_back_to_donor() {
        assert_eq!(Role::from_query(None), Role::Donor);
        assert_eq!(Role::from_query(Some("admin")), Role::Donor);
        assert_eq!(Role::from_query(Some("NGO")), Role::Ngo);
        assert_eq!(Role::from_query(Some("facility")), Role::Facility);
    }
}
