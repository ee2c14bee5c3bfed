//! Persistence layer: the [`DirectoryStore`] repository and its backends.
//!
//! Services only see the trait. [`postgres::PostgresStore`] is the
//! production backend; [`memory::InMemoryStore`] backs tests and
//! database-less runs (`PERSISTENCE_ENABLED=false`).
//!
//! Every write is one transaction: it either commits as a whole or leaves
//! the store unchanged.

pub mod memory;
pub mod models;
pub mod postgres;

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::domain::{Artist, ArtistId, Location, Show, Venue, VenueId};
use crate::error::DirectoryError;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;

/// Storage contract for venues, artists and shows.
///
/// Listing methods return venues and artists ordered by name and shows
/// ordered by start time.
#[async_trait]
pub trait DirectoryStore: Send + Sync + fmt::Debug {
    /// Fetches one venue.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::VenueNotFound`] if absent,
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn venue(&self, id: VenueId) -> Result<Venue, DirectoryError>;

    /// Fetches the venues with the given ids. Unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn venues_by_ids(
        &self,
        ids: &[VenueId],
    ) -> Result<HashMap<VenueId, Venue>, DirectoryError>;

    /// Fetches every venue.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn list_venues(&self) -> Result<Vec<Venue>, DirectoryError>;

    /// Fetches venues whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, DirectoryError>;

    /// Fetches the distinct (city, state) pairs among venues, ordered by
    /// state then city.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn venue_locations(&self) -> Result<Vec<Location>, DirectoryError>;

    /// Inserts a new venue.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] if the write is rolled back.
    async fn insert_venue(&self, venue: &Venue) -> Result<(), DirectoryError>;

    /// Replaces every field of an existing venue.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::VenueNotFound`] if absent,
    /// [`DirectoryError::PersistenceError`] if the write is rolled back.
    async fn update_venue(&self, venue: &Venue) -> Result<(), DirectoryError>;

    /// Deletes a venue and its shows, returning the deleted venue.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::VenueNotFound`] if absent,
    /// [`DirectoryError::PersistenceError`] if the write is rolled back.
    async fn delete_venue(&self, id: VenueId) -> Result<Venue, DirectoryError>;

    /// Fetches one artist.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::ArtistNotFound`] if absent,
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn artist(&self, id: ArtistId) -> Result<Artist, DirectoryError>;

    /// Fetches the artists with the given ids. Unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn artists_by_ids(
        &self,
        ids: &[ArtistId],
    ) -> Result<HashMap<ArtistId, Artist>, DirectoryError>;

    /// Fetches every artist.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn list_artists(&self) -> Result<Vec<Artist>, DirectoryError>;

    /// Fetches artists whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, DirectoryError>;

    /// Inserts a new artist.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] if the write is rolled back.
    async fn insert_artist(&self, artist: &Artist) -> Result<(), DirectoryError>;

    /// Replaces every field of an existing artist.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::ArtistNotFound`] if absent,
    /// [`DirectoryError::PersistenceError`] if the write is rolled back.
    async fn update_artist(&self, artist: &Artist) -> Result<(), DirectoryError>;

    /// Deletes an artist and their shows, returning the deleted artist.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::ArtistNotFound`] if absent,
    /// [`DirectoryError::PersistenceError`] if the write is rolled back.
    async fn delete_artist(&self, id: ArtistId) -> Result<Artist, DirectoryError>;

    /// Fetches every show.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn list_shows(&self) -> Result<Vec<Show>, DirectoryError>;

    /// Fetches the shows hosted by a venue.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn shows_for_venue(&self, id: VenueId) -> Result<Vec<Show>, DirectoryError>;

    /// Fetches the shows performed by an artist.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] on storage failure.
    async fn shows_for_artist(&self, id: ArtistId) -> Result<Vec<Show>, DirectoryError>;

    /// Inserts a new show. Both referenced entities must exist.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::PersistenceError`] if the write is rolled back,
    /// including on a dangling reference.
    async fn insert_show(&self, show: &Show) -> Result<(), DirectoryError>;
}
