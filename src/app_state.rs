//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::DirectoryStore;
use crate::service::{ArtistService, ShowService, VenueService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Venue reads and writes.
    pub venues: Arc<VenueService>,
    /// Artist reads and writes.
    pub artists: Arc<ArtistService>,
    /// Show reads and writes.
    pub shows: Arc<ShowService>,
}

impl AppState {
    /// Builds every service over one shared store.
    #[must_use]
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self {
            venues: Arc::new(VenueService::new(Arc::clone(&store))),
            artists: Arc::new(ArtistService::new(Arc::clone(&store))),
            shows: Arc::new(ShowService::new(store)),
        }
    }
}
