//! # Matching Service
//!
//! Owns every request, donation, match and emergency request known to the
//! process and implements the coordination workflow on top of them:
//!
//! 1.  Facilities create **requests** (`open`) and donors create **donations**
//!     (`available`).
//! 2.  A coordinator **allocates** one open request to one available donation.
//!     This creates a `Match` in status `allocated` and flips both sides to
//!     `allocated`, so neither can be allocated again.
//! 3.  The match then advances `allocated → dispatched → received`, one step
//!     at a time, collecting free-text notes. Each step is mirrored onto the
//!     linked request and donation (`dispatched` → request dispatched;
//!     `received` → request received and donation fulfilled).
//!
//! Every status change is appended to the owning entity's timeline.
//! The service is synchronous; sharing across handlers goes through
//! `coordination::state::CoordinationState`.

use crate::coordination::error::CoordinationError;
use common::model::dashboard::RequestSummary;
use common::model::donation::{Donation, DonationStatus};
use common::model::item::Priority;
use common::model::matching::{Match, MatchStatus};
use common::model::request::{Request, RequestStatus};
use common::model::timeline::{EntityType, ItemDetail, TimelineEntry};
use common::requests::{
    AllocateMatchRequest, EmergencyRequest, NewDonation, NewRequest, UpdateMatchStatusRequest,
};

/// Emergency ids never go below this. Emergencies and regular requests share
/// one id sequence, so a request id is never reused for an emergency.
const FIRST_EMERGENCY_ID: u64 = 1000;

#[derive(Debug)]
pub struct MatchingService {
    requests: Vec<Request>,
    donations: Vec<Donation>,
    matches: Vec<Match>,
    emergencies: Vec<RequestSummary>,
    next_request_id: u64,
    next_donation_id: u64,
    next_match_id: u64,
}

impl Default for MatchingService {
    fn default() -> Self {
        MatchingService::new()
    }
}

impl MatchingService {
    pub fn new() -> Self {
        MatchingService {
            requests: Vec::new(),
            donations: Vec::new(),
            matches: Vec::new(),
            emergencies: Vec::new(),
            next_request_id: 1,
            next_donation_id: 1,
            next_match_id: 1,
        }
    }

    /// All requests, oldest first.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// All donations, oldest first.
    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    /// All matches, oldest first.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// All emergency requests, oldest first.
    pub fn emergencies(&self) -> &[RequestSummary] {
        &self.emergencies
    }

    pub fn request(&self, id: u64) -> Result<&Request, CoordinationError> {
        self.requests
            .iter()
            .find(|r| r.id == id)
            .ok_or(CoordinationError::RequestNotFound(id))
    }

    pub fn donation(&self, id: u64) -> Result<&Donation, CoordinationError> {
        self.donations
            .iter()
            .find(|d| d.id == id)
            .ok_or(CoordinationError::DonationNotFound(id))
    }

    pub fn find_match(&self, id: u64) -> Result<&Match, CoordinationError> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .ok_or(CoordinationError::MatchNotFound(id))
    }

    /// Stores a request that already carries an id, e.g. seed data.
    /// Later generated ids continue after the highest id seen.
    pub fn insert_request(&mut self, request: Request) {
        self.next_request_id = self.next_request_id.max(request.id + 1);
        self.requests.push(request);
    }

    /// Stores a donation that already carries an id. See `insert_request`.
    pub fn insert_donation(&mut self, donation: Donation) {
        self.next_donation_id = self.next_donation_id.max(donation.id + 1);
        self.donations.push(donation);
    }

    pub fn create_request(&mut self, new: NewRequest) -> Result<Request, CoordinationError> {
        let facility_id = new
            .facility_id
            .ok_or(CoordinationError::MissingField("facilityId"))?;
        if let Some(field) = new.item.first_missing_field() {
            return Err(CoordinationError::MissingField(field));
        }

        let request = Request {
            id: self.next_request_id,
            facility_id,
            facility_name: new.facility_name,
            item: new.item,
            priority: new.priority,
            location: new.location,
            is_emergency: new.is_emergency,
            needed_by: new.needed_by,
            notes: new.notes,
            status: RequestStatus::Open,
            matched_donation_id: None,
            timeline: vec![TimelineEntry::now(
                RequestStatus::Open,
                format!("facility {}", facility_id),
            )],
        };
        self.insert_request(request.clone());
        Ok(request)
    }

    pub fn create_donation(&mut self, new: NewDonation) -> Result<Donation, CoordinationError> {
        let donor_id = new
            .donor_id
            .ok_or(CoordinationError::MissingField("donorId"))?;
        if let Some(field) = new.item.first_missing_field() {
            return Err(CoordinationError::MissingField(field));
        }

        let donation = Donation {
            id: self.next_donation_id,
            donor_id,
            donor_name: new.donor_name,
            item: new.item,
            location: new.location,
            expiry_date: new.expiry_date,
            preferred_location: new.preferred_location,
            availability: new.availability,
            status: DonationStatus::Available,
            matched_request_id: None,
            timeline: vec![TimelineEntry::now(
                DonationStatus::Available,
                format!("donor {}", donor_id),
            )],
        };
        self.insert_donation(donation.clone());
        Ok(donation)
    }

    /// Links an open request to an available donation.
    ///
    /// Fails without touching any state when either id is unset, unknown, or
    /// already taken by another match.
    pub fn allocate(
        &mut self,
        selection: &AllocateMatchRequest,
    ) -> Result<Match, CoordinationError> {
        let (Some(request_id), Some(donation_id)) = (selection.request_id, selection.donation_id)
        else {
            return Err(CoordinationError::IncompleteSelection);
        };

        let request_idx = self.request_index(request_id)?;
        let donation_idx = self.donation_index(donation_id)?;

        let request_status = self.requests[request_idx].status;
        if request_status != RequestStatus::Open {
            return Err(CoordinationError::RequestUnavailable {
                id: request_id,
                status: request_status,
            });
        }
        let donation_status = self.donations[donation_idx].status;
        if donation_status != DonationStatus::Available {
            return Err(CoordinationError::DonationUnavailable {
                id: donation_id,
                status: donation_status,
            });
        }

        let actor = format!("user {}", selection.allocated_by);
        let allocated = Match {
            id: self.next_match_id,
            request_id,
            donation_id,
            allocated_by: selection.allocated_by,
            status: MatchStatus::Allocated,
            notes: vec![format!("Allocated by user {}", selection.allocated_by)],
            timeline: vec![TimelineEntry::now(MatchStatus::Allocated, actor.as_str())],
        };
        self.next_match_id += 1;

        let request = &mut self.requests[request_idx];
        request.matched_donation_id = Some(donation_id);
        request.transition(RequestStatus::Allocated, actor.as_str());

        let donation = &mut self.donations[donation_idx];
        donation.matched_request_id = Some(request_id);
        donation.transition(DonationStatus::Allocated, actor.as_str());

        self.matches.push(allocated.clone());
        Ok(allocated)
    }

    /// Moves a match to `update.status` and appends the note when it is not blank.
    ///
    /// The target must be the current status or the next one; re-submitting
    /// the current status only records the note.
    pub fn update_match_status(
        &mut self,
        match_id: u64,
        update: &UpdateMatchStatusRequest,
    ) -> Result<Match, CoordinationError> {
        let idx = self.match_index(match_id)?;
        let current = self.matches[idx].status;
        if !current.can_move_to(update.status) {
            return Err(CoordinationError::InvalidTransition {
                id: match_id,
                from: current,
                to: update.status,
            });
        }

        let actor = format!("user {}", update.updated_by);
        let entry = &mut self.matches[idx];
        if entry.status != update.status {
            entry.status = update.status;
            entry
                .timeline
                .push(TimelineEntry::now(update.status, actor.as_str()));
        }
        if let Some(note) = update.note.as_deref().map(str::trim) {
            if !note.is_empty() {
                entry.notes.push(note.to_string());
            }
        }
        let updated = entry.clone();

        self.propagate(&updated, &actor);
        Ok(updated)
    }

    pub fn item_detail(
        &self,
        entity: EntityType,
        id: u64,
    ) -> Result<ItemDetail, CoordinationError> {
        Ok(match entity {
            EntityType::Request => ItemDetail::Request(self.request(id)?.clone()),
            EntityType::Donation => ItemDetail::Donation(self.donation(id)?.clone()),
            EntityType::Match => ItemDetail::Match(self.find_match(id)?.clone()),
        })
    }

    /// Records an emergency request, filling in `priority = high` and
    /// `isEmergency = true` when the caller leaves them out.
    ///
    /// The id comes from the request sequence, bumped to at least 1000.
    pub fn register_emergency(
        &mut self,
        payload: EmergencyRequest,
    ) -> Result<RequestSummary, CoordinationError> {
        let facility_id = payload
            .facility_id
            .ok_or(CoordinationError::MissingField("facilityId"))?;
        let item = payload
            .item_name_or_blood_group
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(CoordinationError::MissingField("itemNameOrBloodGroup"))?;
        let quantity = payload
            .quantity_or_units
            .filter(|q| *q > 0)
            .ok_or(CoordinationError::MissingField("quantityOrUnits"))?;

        let id = self.next_request_id.max(FIRST_EMERGENCY_ID);
        let summary = RequestSummary {
            id,
            facility_id,
            item_name_or_blood_group: item,
            quantity_or_units: quantity,
            priority: payload.priority.unwrap_or(Priority::High),
            is_emergency: payload.is_emergency.unwrap_or(true),
        };
        self.next_request_id = id + 1;
        self.emergencies.push(summary.clone());
        Ok(summary)
    }

    fn request_index(&self, id: u64) -> Result<usize, CoordinationError> {
        self.requests
            .iter()
            .position(|r| r.id == id)
            .ok_or(CoordinationError::RequestNotFound(id))
    }

    fn donation_index(&self, id: u64) -> Result<usize, CoordinationError> {
        self.donations
            .iter()
            .position(|d| d.id == id)
            .ok_or(CoordinationError::DonationNotFound(id))
    }

    fn match_index(&self, id: u64) -> Result<usize, CoordinationError> {
        self.matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(CoordinationError::MatchNotFound(id))
    }

    /// Mirrors a match status onto its request and donation.
    fn propagate(&mut self, linked: &Match, actor: &str) {
        let (request_status, donation_status) = match linked.status {
            MatchStatus::Allocated => (RequestStatus::Allocated, DonationStatus::Allocated),
            MatchStatus::Dispatched => (RequestStatus::Dispatched, DonationStatus::Allocated),
            MatchStatus::Received => (RequestStatus::Received, DonationStatus::Fulfilled),
        };
        if let Some(request) = self.requests.iter_mut().find(|r| r.id == linked.request_id) {
            request.transition(request_status, actor);
        }
        if let Some(donation) = self.donations.iter_mut().find(|d| d.id == linked.donation_id) {
            donation.transition(donation_status, actor);
        }
    }
}
