//! Demo data shown on the coordination screen when the server starts with
//! `DONATION_SEED_DEMO` enabled.

use crate::coordination::service::MatchingService;
use common::model::donation::{Donation, DonationStatus};
use common::model::item::{ItemDetails, Location, Priority};
use common::model::request::{Request, RequestStatus};
use common::model::timeline::TimelineEntry;

/// Builds a service holding two open requests (501, 502) and two available
/// donations (302, 303).
pub fn demo_service() -> MatchingService {
    let mut service = MatchingService::new();
    let salem = Location::new("Salem", "Tamil Nadu");

    service.insert_request(Request {
        id: 501,
        facility_id: 1,
        facility_name: Some("City Care Hospital".to_string()),
        item: ItemDetails::Blood {
            blood_group: "O+".to_string(),
            units: 2,
        },
        priority: Priority::High,
        location: salem.clone(),
        is_emergency: true,
        needed_by: None,
        notes: None,
        status: RequestStatus::Open,
        matched_donation_id: None,
        timeline: vec![TimelineEntry::now(RequestStatus::Open, "facility 1")],
    });
    service.insert_request(Request {
        id: 502,
        facility_id: 2,
        facility_name: Some("GreenLife Clinic".to_string()),
        item: ItemDetails::Supplies {
            item_name: "N95 Masks".to_string(),
            category: "PPE".to_string(),
            quantity: 200,
        },
        priority: Priority::Medium,
        location: salem.clone(),
        is_emergency: false,
        needed_by: None,
        notes: None,
        status: RequestStatus::Open,
        matched_donation_id: None,
        timeline: vec![TimelineEntry::now(RequestStatus::Open, "facility 2")],
    });

    service.insert_donation(Donation {
        id: 302,
        donor_id: 1,
        donor_name: Some("Arun Kumar".to_string()),
        item: ItemDetails::Blood {
            blood_group: "O+".to_string(),
            units: 2,
        },
        location: salem.clone(),
        expiry_date: None,
        preferred_location: None,
        availability: None,
        status: DonationStatus::Available,
        matched_request_id: None,
        timeline: vec![TimelineEntry::now(DonationStatus::Available, "donor 1")],
    });
    service.insert_donation(Donation {
        id: 303,
        donor_id: 2,
        donor_name: Some("HealthAid NGO Store".to_string()),
        item: ItemDetails::Supplies {
            item_name: "N95 Masks".to_string(),
            category: "PPE".to_string(),
            quantity: 500,
        },
        location: salem,
        expiry_date: None,
        preferred_location: None,
        availability: None,
        status: DonationStatus::Available,
        matched_request_id: None,
        timeline: vec![TimelineEntry::now(DonationStatus::Available, "donor 2")],
    });

    service
}
