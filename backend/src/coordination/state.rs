//! Shared, lock-protected coordination state injected into the Actix app.

use crate::coordination::service::MatchingService;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Clonable handle to the single `MatchingService` of the process.
///
/// Mutating handlers hold the write lock for the whole operation, so the
/// availability check and the status change of an allocation happen as one
/// step and two concurrent allocations of the same pair cannot both succeed.
/// Listing handlers take the read lock.
#[derive(Clone)]
pub struct CoordinationState {
    pub service: Arc<RwLock<MatchingService>>,
}

impl CoordinationState {
    pub fn new(service: MatchingService) -> Self {
        CoordinationState {
            service: Arc::new(RwLock::new(service)),
        }
    }
}
