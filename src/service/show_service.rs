//! Show service: the show directory and show creation.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::write_failure;
use crate::domain::{ArtistId, EntityKind, Show, ShowListing, VenueId, WriteAction};
use crate::error::DirectoryError;
use crate::persistence::DirectoryStore;

/// Orchestrates show reads and writes over a [`DirectoryStore`].
#[derive(Debug, Clone)]
pub struct ShowService {
    store: Arc<dyn DirectoryStore>,
}

impl ShowService {
    /// Creates a new `ShowService`.
    #[must_use]
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    /// Lists every show with its venue and artist resolved.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] or
    /// [`DirectoryError::ArtistNotFound`] if a show references a missing
    /// entity, or a [`DirectoryError::PersistenceError`] on storage failure.
    pub async fn list(&self) -> Result<Vec<ShowListing>, DirectoryError> {
        let shows = self.store.list_shows().await?;

        let mut venue_ids: Vec<VenueId> = shows.iter().map(|show| show.venue_id).collect();
        venue_ids.sort_by_key(|id| *id.as_uuid());
        venue_ids.dedup();
        let mut artist_ids: Vec<ArtistId> = shows.iter().map(|show| show.artist_id).collect();
        artist_ids.sort_by_key(|id| *id.as_uuid());
        artist_ids.dedup();

        let venues = self.store.venues_by_ids(&venue_ids).await?;
        let artists = self.store.artists_by_ids(&artist_ids).await?;

        shows
            .iter()
            .map(|show| ShowListing::assemble(show, &venues, &artists))
            .collect()
    }

    /// Schedules an artist at a venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::WriteFailed`] if the insert is rolled back,
    /// including when either referenced entity does not exist.
    pub async fn create(
        &self,
        artist_id: ArtistId,
        venue_id: VenueId,
        start_time: DateTime<Utc>,
    ) -> Result<Show, DirectoryError> {
        let show = Show::new(artist_id, venue_id, start_time);
        let subject = format!("for Artist ID {artist_id}");
        self.store
            .insert_show(&show)
            .await
            .map_err(|e| {
                write_failure(e, EntityKind::Show, &subject, WriteAction::Listed)
            })?;

        tracing::info!(show_id = %show.id, %artist_id, %venue_id, "show listed");
        Ok(show)
    }
}
