use crate::coordination::service::MatchingService;
use common::model::dashboard::{Dashboard, DonationSummary, Kpis, Profile, RequestSummary, Role};
use common::model::donation::DonationStatus;
use common::model::request::RequestStatus;

/// Maximum number of entries in each "recent" list.
const RECENT_LIMIT: usize = 5;

pub fn profile_for(role: Role) -> Profile {
    match role {
        Role::Donor => Profile {
            name: "Arun Kumar".to_string(),
            blood_group: Some("O+".to_string()),
            address: "12, Main Street, Vengaivasal, Chennai".to_string(),
        },
        Role::Ngo => Profile {
            name: "Helping Hands NGO".to_string(),
            blood_group: None,
            address: "23 Charity Lane, Chennai".to_string(),
        },
        Role::Facility => Profile {
            name: "City General Hospital".to_string(),
            blood_group: None,
            address: "45 Hospital Road, Chennai".to_string(),
        },
    }
}

pub fn kpis(service: &MatchingService) -> Kpis {
    let donations = service.donations();
    let requests = service.requests();
    let emergencies = service.emergencies().len();

    Kpis {
        total_donations: donations.len(),
        active_donations: donations
            .iter()
            .filter(|d| d.status != DonationStatus::Fulfilled)
            .count(),
        total_requests: requests.len() + emergencies,
        active_requests: requests
            .iter()
            .filter(|r| r.status != RequestStatus::Received)
            .count()
            + emergencies,
    }
}

/// Assembles the dashboard for `role` from the live store.
///
/// Recent lists are newest first. Emergency requests are listed ahead of
/// regular ones.
pub fn build_dashboard(service: &MatchingService, role: Role) -> Dashboard {
    let recent_donations = service
        .donations()
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(DonationSummary::from)
        .collect();

    let recent_requests = service
        .emergencies()
        .iter()
        .rev()
        .cloned()
        .chain(service.requests().iter().rev().map(RequestSummary::from))
        .take(RECENT_LIMIT)
        .collect();

    Dashboard {
        profile: profile_for(role),
        kpis: kpis(service),
        recent_donations,
        recent_requests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordination::seed;
    use common::model::matching::MatchStatus;
    use common::requests::{AllocateMatchRequest, EmergencyRequest, UpdateMatchStatusRequest};

    #[test]
    fn kpis_follow_the_store() {
        let mut service = seed::demo_service();
        assert_eq!(
            kpis(&service),
            Kpis {
                total_donations: 2,
                active_donations: 2,
                total_requests: 2,
                active_requests: 2,
            }
        );

        let created = service
            .allocate(&AllocateMatchRequest {
                request_id: Some(501),
                donation_id: Some(302),
                allocated_by: 10,
            })
            .unwrap();
        for status in [MatchStatus::Dispatched, MatchStatus::Received] {
            service
                .update_match_status(
                    created.id,
                    &UpdateMatchStatusRequest {
                        status,
                        updated_by: 10,
                        note: None,
                    },
                )
                .unwrap();
        }
        service
            .register_emergency(EmergencyRequest {
                facility_id: Some(1),
                item_name_or_blood_group: Some("Sanitizer bottles".into()),
                quantity_or_units: Some(30),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            kpis(&service),
            Kpis {
                total_donations: 2,
                active_donations: 1,
                total_requests: 3,
                active_requests: 2,
            }
        );
    }

    #[test]
    fn recent_lists_are_newest_first_with_emergencies_on_top() {
        let mut service = seed::demo_service();
        service
            .register_emergency(EmergencyRequest {
                facility_id: Some(3),
                item_name_or_blood_group: Some("O+ blood".into()),
                quantity_or_units: Some(3),
                ..Default::default()
            })
            .unwrap();

        let dashboard = build_dashboard(&service, Role::Facility);

        assert_eq!(dashboard.profile.name, "City General Hospital");
        let request_ids: Vec<u64> = dashboard.recent_requests.iter().map(|r| r.id).collect();
        assert_eq!(request_ids, vec![1000, 502, 501]);
        let donation_ids: Vec<u64> = dashboard.recent_donations.iter().map(|d| d.id).collect();
        assert_eq!(donation_ids, vec![303, 302]);
        assert_eq!(dashboard.recent_donations[0].item_name, "N95 Masks");
    }
}
