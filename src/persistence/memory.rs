//! In-memory implementation of [`DirectoryStore`].
//!
//! All three tables live behind one [`tokio::sync::RwLock`]. A write
//! clones the tables, applies the mutation to the copy, and swaps the copy
//! in only if every step succeeded, so a failed write leaves nothing
//! behind.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::DirectoryStore;
use crate::domain::listing::name_matches;
use crate::domain::{Artist, ArtistId, Location, Show, Venue, VenueId};
use crate::error::DirectoryError;

#[derive(Debug, Clone, Default)]
struct Tables {
    venues: Vec<Venue>,
    artists: Vec<Artist>,
    shows: Vec<Show>,
}

/// Process-local directory store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of (venues, artists, shows) currently stored.
    pub async fn counts(&self) -> (usize, usize, usize) {
        let tables = self.tables.read().await;
        (
            tables.venues.len(),
            tables.artists.len(),
            tables.shows.len(),
        )
    }

    /// Runs `apply` against a staged copy of the tables and publishes the
    /// copy only if `apply` succeeds.
    async fn commit<T, F>(&self, apply: F) -> Result<T, DirectoryError>
    where
        F: FnOnce(&mut Tables) -> Result<T, DirectoryError> + Send,
        T: Send,
    {
        let mut tables = self.tables.write().await;
        let mut staged = tables.clone();
        let out = apply(&mut staged)?;
        *tables = staged;
        Ok(out)
    }
}

fn venues_by_name(mut venues: Vec<Venue>) -> Vec<Venue> {
    venues.sort_by(|a, b| a.name.cmp(&b.name));
    venues
}

fn artists_by_name(mut artists: Vec<Artist>) -> Vec<Artist> {
    artists.sort_by(|a, b| a.name.cmp(&b.name));
    artists
}

fn sorted_by_start(mut shows: Vec<Show>) -> Vec<Show> {
    shows.sort_by_key(|show| show.start_time);
    shows
}

#[async_trait]
impl DirectoryStore for InMemoryStore {
    async fn venue(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        let tables = self.tables.read().await;
        tables
            .venues
            .iter()
            .find(|venue| venue.id == id)
            .cloned()
            .ok_or(DirectoryError::VenueNotFound(id))
    }

    async fn venues_by_ids(
        &self,
        ids: &[VenueId],
    ) -> Result<HashMap<VenueId, Venue>, DirectoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .venues
            .iter()
            .filter(|venue| ids.contains(&venue.id))
            .map(|venue| (venue.id, venue.clone()))
            .collect())
    }

    async fn list_venues(&self) -> Result<Vec<Venue>, DirectoryError> {
        let venues = self.tables.read().await.venues.clone();
        Ok(venues_by_name(venues))
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, DirectoryError> {
        let venues: Vec<Venue> = self
            .tables
            .read()
            .await
            .venues
            .iter()
            .filter(|venue| name_matches(&venue.name, term))
            .cloned()
            .collect();
        Ok(venues_by_name(venues))
    }

    async fn venue_locations(&self) -> Result<Vec<Location>, DirectoryError> {
        let tables = self.tables.read().await;
        let mut locations: Vec<Location> = Vec::new();
        for venue in &tables.venues {
            let location = venue.location();
            if !locations.contains(&location) {
                locations.push(location);
            }
        }
        locations.sort_by(|a, b| (&a.state, &a.city).cmp(&(&b.state, &b.city)));
        Ok(locations)
    }

    async fn insert_venue(&self, venue: &Venue) -> Result<(), DirectoryError> {
        let venue = venue.clone();
        self.commit(move |tables| {
            if tables.venues.iter().any(|v| v.id == venue.id) {
                return Err(DirectoryError::PersistenceError(format!(
                    "duplicate venue id {}",
                    venue.id
                )));
            }
            tables.venues.push(venue);
            Ok(())
        })
        .await
    }

    async fn update_venue(&self, venue: &Venue) -> Result<(), DirectoryError> {
        let venue = venue.clone();
        self.commit(move |tables| {
            let slot = tables
                .venues
                .iter_mut()
                .find(|v| v.id == venue.id)
                .ok_or(DirectoryError::VenueNotFound(venue.id))?;
            *slot = venue;
            Ok(())
        })
        .await
    }

    async fn delete_venue(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        self.commit(move |tables| {
            let index = tables
                .venues
                .iter()
                .position(|v| v.id == id)
                .ok_or(DirectoryError::VenueNotFound(id))?;
            let removed = tables.venues.remove(index);
            tables.shows.retain(|show| show.venue_id != id);
            Ok(removed)
        })
        .await
    }

    async fn artist(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        let tables = self.tables.read().await;
        tables
            .artists
            .iter()
            .find(|artist| artist.id == id)
            .cloned()
            .ok_or(DirectoryError::ArtistNotFound(id))
    }

    async fn artists_by_ids(
        &self,
        ids: &[ArtistId],
    ) -> Result<HashMap<ArtistId, Artist>, DirectoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .artists
            .iter()
            .filter(|artist| ids.contains(&artist.id))
            .map(|artist| (artist.id, artist.clone()))
            .collect())
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, DirectoryError> {
        let artists = self.tables.read().await.artists.clone();
        Ok(artists_by_name(artists))
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, DirectoryError> {
        let artists: Vec<Artist> = self
            .tables
            .read()
            .await
            .artists
            .iter()
            .filter(|artist| name_matches(&artist.name, term))
            .cloned()
            .collect();
        Ok(artists_by_name(artists))
    }

    async fn insert_artist(&self, artist: &Artist) -> Result<(), DirectoryError> {
        let artist = artist.clone();
        self.commit(move |tables| {
            if tables.artists.iter().any(|a| a.id == artist.id) {
                return Err(DirectoryError::PersistenceError(format!(
                    "duplicate artist id {}",
                    artist.id
                )));
            }
            tables.artists.push(artist);
            Ok(())
        })
        .await
    }

    async fn update_artist(&self, artist: &Artist) -> Result<(), DirectoryError> {
        let artist = artist.clone();
        self.commit(move |tables| {
            let slot = tables
                .artists
                .iter_mut()
                .find(|a| a.id == artist.id)
                .ok_or(DirectoryError::ArtistNotFound(artist.id))?;
            *slot = artist;
            Ok(())
        })
        .await
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        self.commit(move |tables| {
            let index = tables
                .artists
                .iter()
                .position(|a| a.id == id)
                .ok_or(DirectoryError::ArtistNotFound(id))?;
            let removed = tables.artists.remove(index);
            tables.shows.retain(|show| show.artist_id != id);
            Ok(removed)
        })
        .await
    }

    async fn list_shows(&self) -> Result<Vec<Show>, DirectoryError> {
        let shows = self.tables.read().await.shows.clone();
        Ok(sorted_by_start(shows))
    }

    async fn shows_for_venue(&self, id: VenueId) -> Result<Vec<Show>, DirectoryError> {
        let shows: Vec<Show> = self
            .tables
            .read()
            .await
            .shows
            .iter()
            .filter(|show| show.venue_id == id)
            .cloned()
            .collect();
        Ok(sorted_by_start(shows))
    }

    async fn shows_for_artist(&self, id: ArtistId) -> Result<Vec<Show>, DirectoryError> {
        let shows: Vec<Show> = self
            .tables
            .read()
            .await
            .shows
            .iter()
            .filter(|show| show.artist_id == id)
            .cloned()
            .collect();
        Ok(sorted_by_start(shows))
    }

    async fn insert_show(&self, show: &Show) -> Result<(), DirectoryError> {
        let show = show.clone();
        self.commit(move |tables| {
            if !tables.artists.iter().any(|a| a.id == show.artist_id) {
                return Err(DirectoryError::PersistenceError(format!(
                    "show references unknown artist {}",
                    show.artist_id
                )));
            }
            if !tables.venues.iter().any(|v| v.id == show.venue_id) {
                return Err(DirectoryError::PersistenceError(format!(
                    "show references unknown venue {}",
                    show.venue_id
                )));
            }
            tables.shows.push(show);
            Ok(())
        })
        .await
    }
}
