//! Artist service: directory listing, search, detail pages and writes.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::write_failure;
use crate::domain::{
    Artist, ArtistDetail, ArtistDraft, ArtistId, ArtistSummary, EntityKind, SearchResults,
    VenueId, WriteAction,
};
use crate::error::DirectoryError;
use crate::persistence::DirectoryStore;

/// Orchestrates artist reads and writes over a [`DirectoryStore`].
#[derive(Debug, Clone)]
pub struct ArtistService {
    store: Arc<dyn DirectoryStore>,
}

impl ArtistService {
    /// Creates a new `ArtistService`.
    #[must_use]
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    /// Lists every artist as an (id, name) pair.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError::PersistenceError`] on storage failure.
    pub async fn list(&self) -> Result<Vec<ArtistSummary>, DirectoryError> {
        let artists = self.store.list_artists().await?;
        Ok(artists.iter().map(ArtistSummary::from).collect())
    }

    /// Finds artists whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError::PersistenceError`] on storage failure.
    pub async fn search(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, DirectoryError> {
        let matches = self.store.search_artists(term).await?;
        let shows = self.store.list_shows().await?;
        tracing::debug!(term, hits = matches.len(), "artist search");
        Ok(SearchResults::for_artists(&matches, &shows, now))
    }

    /// Builds the artist page with past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the artist does not
    /// exist, or [`DirectoryError::VenueNotFound`] if a show's venue cannot
    /// be resolved.
    pub async fn detail(
        &self,
        id: ArtistId,
        now: DateTime<Utc>,
    ) -> Result<ArtistDetail, DirectoryError> {
        let artist = self.store.artist(id).await?;
        let shows = self.store.shows_for_artist(id).await?;

        let mut venue_ids: Vec<VenueId> = shows.iter().map(|show| show.venue_id).collect();
        venue_ids.sort_by_key(|id| *id.as_uuid());
        venue_ids.dedup();
        let venues = self.store.venues_by_ids(&venue_ids).await?;

        ArtistDetail::assemble(artist, &shows, &venues, now)
    }

    /// Fetches the current record, used to prefill the edit form.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the artist does not
    /// exist.
    pub async fn get(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        self.store.artist(id).await
    }

    /// Lists a new artist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::WriteFailed`] if the insert is rolled back.
    pub async fn create(&self, draft: ArtistDraft) -> Result<Artist, DirectoryError> {
        let artist = Artist::from_draft(ArtistId::new(), draft);
        self.store
            .insert_artist(&artist)
            .await
            .map_err(|e| {
                write_failure(e, EntityKind::Artist, &artist.name, WriteAction::Listed)
            })?;

        tracing::info!(artist_id = %artist.id, name = %artist.name, "artist listed");
        Ok(artist)
    }

    /// Replaces every field of an existing artist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the artist does not
    /// exist, or [`DirectoryError::WriteFailed`] if the update is rolled
    /// back.
    pub async fn update(&self, id: ArtistId, draft: ArtistDraft) -> Result<Artist, DirectoryError> {
        let artist = Artist::from_draft(id, draft);
        self.store
            .update_artist(&artist)
            .await
            .map_err(|e| {
                write_failure(e, EntityKind::Artist, &artist.name, WriteAction::Updated)
            })?;

        tracing::info!(artist_id = %artist.id, "artist updated");
        Ok(artist)
    }

    /// Deletes an artist together with their shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the artist does not
    /// exist, or [`DirectoryError::WriteFailed`] if the delete is rolled
    /// back.
    pub async fn delete(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        let artist = self
            .store
            .delete_artist(id)
            .await
            .map_err(|e| {
                write_failure(e, EntityKind::Artist, &id.to_string(), WriteAction::Deleted)
            })?;

        tracing::info!(artist_id = %id, "artist deleted");
        Ok(artist)
    }
}
