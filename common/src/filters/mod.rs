//! Pure list filters shared by the request and donation listings.
//!
//! Filtering never mutates its input and always preserves the relative order
//! of the listings it keeps.

use crate::model::donation::{Donation, DonationStatus};
use crate::model::item::{ItemDetails, ItemKind, Priority};
use crate::model::request::{Request, RequestStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    #[serde(alias = "")]
    All,
    Supplies,
    Blood,
}

impl KindFilter {
    pub fn accepts(&self, kind: ItemKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Supplies => kind == ItemKind::Supplies,
            KindFilter::Blood => kind == ItemKind::Blood,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    #[serde(alias = "")]
    All,
    /// Flagged as emergency or high priority.
    Emergency,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub fn accepts(&self, priority: Priority, is_emergency: bool) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Emergency => is_emergency || priority == Priority::High,
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
        }
    }
}

/// Something that shows up in a filterable list.
pub trait Listing {
    type Status: Copy + PartialEq;

    fn item(&self) -> &ItemDetails;
    fn status(&self) -> Self::Status;
    /// Priority and emergency flag, or `None` when the listing has no urgency.
    fn urgency(&self) -> Option<(Priority, bool)>;
}

impl Listing for Request {
    type Status = RequestStatus;

    fn item(&self) -> &ItemDetails {
        &self.item
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn urgency(&self) -> Option<(Priority, bool)> {
        Some((self.priority, self.is_emergency))
    }
}

impl Listing for Donation {
    type Status = DonationStatus;

    fn item(&self) -> &ItemDetails {
        &self.item
    }

    fn status(&self) -> DonationStatus {
        self.status
    }

    fn urgency(&self) -> Option<(Priority, bool)> {
        None
    }
}

/// Query-string filter for request and donation listings.
///
/// * `category` is a case-insensitive substring of a supplies category;
///   blood listings carry no category and are never excluded by it.
/// * `priority` never excludes a listing without urgency (donations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFilter<S> {
    #[serde(default)]
    pub kind: KindFilter,
    #[serde(default)]
    pub priority: PriorityFilter,
    #[serde(default)]
    pub category: String,
    pub status: Option<S>,
}

impl<S> Default for ListingFilter<S> {
    fn default() -> Self {
        ListingFilter {
            kind: KindFilter::All,
            priority: PriorityFilter::All,
            category: String::new(),
            status: None,
        }
    }
}

pub type RequestFilter = ListingFilter<RequestStatus>;
pub type DonationFilter = ListingFilter<DonationStatus>;

impl<S: Copy + PartialEq> ListingFilter<S> {
    pub fn matches<L: Listing<Status = S>>(&self, listing: &L) -> bool {
        let item = listing.item();
        if !self.kind.accepts(item.kind()) {
            return false;
        }
        if let Some((priority, is_emergency)) = listing.urgency() {
            if !self.priority.accepts(priority, is_emergency) {
                return false;
            }
        }
        if !self.category.is_empty() {
            if let Some(category) = item.category() {
                if !category
                    .to_lowercase()
                    .contains(&self.category.to_lowercase())
                {
                    return false;
                }
            }
        }
        match self.status {
            Some(status) => listing.status() == status,
            None => true,
        }
    }
}

/// Returns the listings accepted by `filter`, in input order.
pub fn filter_listings<L>(listings: &[L], filter: &ListingFilter<L::Status>) -> Vec<L>
where
    L: Listing + Clone,
{
    listings
        .iter()
        .filter(|listing| filter.matches(*listing))
        .cloned()
        .collect()
}

pub fn filter_requests(requests: &[Request], filter: &RequestFilter) -> Vec<Request> {
    filter_listings(requests, filter)
}

pub fn filter_donations(donations: &[Donation], filter: &DonationFilter) -> Vec<Donation> {
    filter_listings(donations, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::Location;

    fn request(id: u64, item: ItemDetails, priority: Priority, is_emergency: bool) -> Request {
        Request {
            id,
            facility_id: 1,
            facility_name: None,
            item,
            priority,
            location: Location::new("Salem", "Tamil Nadu"),
            is_emergency,
            needed_by: None,
            notes: None,
            status: RequestStatus::Open,
            matched_donation_id: None,
            timeline: Vec::new(),
        }
    }

    fn donation(id: u64, item: ItemDetails) -> Donation {
        Donation {
            id,
            donor_id: 7,
            donor_name: None,
            item,
            location: Location::new("Salem", "Tamil Nadu"),
            expiry_date: None,
            preferred_location: None,
            availability: None,
            status: DonationStatus::Available,
            matched_request_id: None,
            timeline: Vec::new(),
        }
    }

    fn blood(group: &str, units: u32) -> ItemDetails {
        ItemDetails::Blood {
            blood_group: group.into(),
            units,
        }
    }

    fn supplies(name: &str, category: &str, quantity: u32) -> ItemDetails {
        ItemDetails::Supplies {
            item_name: name.into(),
            category: category.into(),
            quantity,
        }
    }

    fn sample_requests() -> Vec<Request> {
        vec![
            request(501, blood("O+", 2), Priority::High, true),
            request(502, supplies("N95 Masks", "PPE", 200), Priority::Medium, false),
            request(503, supplies("Rice bags", "Food", 40), Priority::Low, true),
            request(504, supplies("Face shields", "ppe", 10), Priority::High, false),
        ]
    }

    fn ids(requests: &[Request]) -> Vec<u64> {
        requests.iter().map(|r| r.id).collect()
    }

    #[test]
    fn default_filter_keeps_everything_in_order() {
        let requests = sample_requests();
        let kept = filter_requests(&requests, &RequestFilter::default());
        assert_eq!(ids(&kept), vec![501, 502, 503, 504]);
    }

    #[test]
    fn emergency_matches_flag_or_high_priority() {
        let filter = RequestFilter {
            priority: PriorityFilter::Emergency,
            ..Default::default()
        };
        let kept = filter_requests(&sample_requests(), &filter);
        assert_eq!(ids(&kept), vec![501, 503, 504]);
    }

    #[test]
    fn exact_priority_ignores_emergency_flag() {
        let filter = RequestFilter {
            priority: PriorityFilter::Low,
            ..Default::default()
        };
        assert_eq!(ids(&filter_requests(&sample_requests(), &filter)), vec![503]);
    }

    #[test]
    fn category_is_case_insensitive_substring_and_skips_blood() {
        let filter = RequestFilter {
            category: "Pp".into(),
            ..Default::default()
        };
        let kept = filter_requests(&sample_requests(), &filter);
        assert_eq!(ids(&kept), vec![501, 502, 504]);

        let supplies_only = RequestFilter {
            kind: KindFilter::Supplies,
            category: "pp".into(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_requests(&sample_requests(), &supplies_only)),
            vec![502, 504]
        );
    }

    #[test]
    fn status_filter_matches_exactly() {
        let mut requests = sample_requests();
        requests[2].status = RequestStatus::Allocated;
        let filter = RequestFilter {
            status: Some(RequestStatus::Open),
            ..Default::default()
        };
        assert_eq!(ids(&filter_requests(&requests, &filter)), vec![501, 502, 504]);
    }

    #[test]
    fn filtering_leaves_input_untouched() {
        let requests = sample_requests();
        let filter = RequestFilter {
            kind: KindFilter::Blood,
            ..Default::default()
        };
        let kept = filter_requests(&requests, &filter);
        assert_eq!(ids(&kept), vec![501]);
        assert_eq!(requests.len(), 4);
    }

    #[test]
    fn donations_are_not_excluded_by_priority() {
        let donations = vec![
            donation(302, blood("O+", 2)),
            donation(303, supplies("N95 Masks", "PPE", 500)),
        ];
        let filter = DonationFilter {
            priority: PriorityFilter::Emergency,
            kind: KindFilter::Supplies,
            ..Default::default()
        };
        let kept = filter_donations(&donations, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 303);
    }

    #[test]
    fn filter_parses_from_query_values() {
        let filter: RequestFilter = serde_json::from_str(
            r#"{"kind": "blood", "priority": "emergency", "status": "open"}"#,
        )
        .unwrap();
        assert_eq!(filter.kind, KindFilter::Blood);
        assert_eq!(filter.priority, PriorityFilter::Emergency);
        assert_eq!(filter.status, Some(RequestStatus::Open));
        assert!(filter.category.is_empty());
    }
}
