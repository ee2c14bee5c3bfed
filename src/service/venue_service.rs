//! Venue service: the city/state index, search, detail pages and writes.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::write_failure;
use crate::domain::listing::group_by_location;
use crate::domain::{
    ArtistId, EntityKind, SearchResults, Venue, VenueArea, VenueDetail, VenueDraft, VenueId,
    WriteAction,
};
use crate::error::DirectoryError;
use crate::persistence::DirectoryStore;

/// Orchestrates venue reads and writes over a [`DirectoryStore`].
#[derive(Debug, Clone)]
pub struct VenueService {
    store: Arc<dyn DirectoryStore>,
}

impl VenueService {
    /// Creates a new `VenueService`.
    #[must_use]
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    /// Lists venues grouped by (city, state) with upcoming counts.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError::PersistenceError`] on storage failure.
    pub async fn areas(&self, now: DateTime<Utc>) -> Result<Vec<VenueArea>, DirectoryError> {
        let locations = self.store.venue_locations().await?;
        let venues = self.store.list_venues().await?;
        let shows = self.store.list_shows().await?;
        Ok(group_by_location(&locations, &venues, &shows, now))
    }

    /// Finds venues whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError::PersistenceError`] on storage failure.
    pub async fn search(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, DirectoryError> {
        let matches = self.store.search_venues(term).await?;
        let shows = self.store.list_shows().await?;
        tracing::debug!(term, hits = matches.len(), "venue search");
        Ok(SearchResults::for_venues(&matches, &shows, now))
    }

    /// Builds the venue page with past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the venue does not
    /// exist, or [`DirectoryError::ArtistNotFound`] if a show's artist
    /// cannot be resolved.
    pub async fn detail(
        &self,
        id: VenueId,
        now: DateTime<Utc>,
    ) -> Result<VenueDetail, DirectoryError> {
        let venue = self.store.venue(id).await?;
        let shows = self.store.shows_for_venue(id).await?;

        let mut artist_ids: Vec<ArtistId> = shows.iter().map(|show| show.artist_id).collect();
        artist_ids.sort_by_key(|id| *id.as_uuid());
        artist_ids.dedup();
        let artists = self.store.artists_by_ids(&artist_ids).await?;

        VenueDetail::assemble(venue, &shows, &artists, now)
    }

    /// Fetches the current record, used to prefill the edit form.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the venue does not
    /// exist.
    pub async fn get(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        self.store.venue(id).await
    }

    /// Lists a new venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::WriteFailed`] if the insert is rolled back.
    pub async fn create(&self, draft: VenueDraft) -> Result<Venue, DirectoryError> {
        let venue = Venue::from_draft(VenueId::new(), draft);
        self.store
            .insert_venue(&venue)
            .await
            .map_err(|e| {
                write_failure(e, EntityKind::Venue, &venue.name, WriteAction::Listed)
            })?;

        tracing::info!(venue_id = %venue.id, name = %venue.name, "venue listed");
        Ok(venue)
    }

    /// Replaces every field of an existing venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the venue does not
    /// exist, or [`DirectoryError::WriteFailed`] if the update is rolled
    /// back.
    pub async fn update(&self, id: VenueId, draft: VenueDraft) -> Result<Venue, DirectoryError> {
        let venue = Venue::from_draft(id, draft);
        self.store
            .update_venue(&venue)
            .await
            .map_err(|e| {
                write_failure(e, EntityKind::Venue, &venue.name, WriteAction::Updated)
            })?;

        tracing::info!(venue_id = %venue.id, "venue updated");
        Ok(venue)
    }

    /// Deletes a venue together with its shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the venue does not
    /// exist, or [`DirectoryError::WriteFailed`] if the delete is rolled
    /// back.
    pub async fn delete(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        let venue = self
            .store
            .delete_venue(id)
            .await
            .map_err(|e| {
                write_failure(e, EntityKind::Venue, &id.to_string(), WriteAction::Deleted)
            })?;

        tracing::info!(venue_id = %id, "venue deleted");
        Ok(venue)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::{Artist, ArtistDraft, NoticeLevel, Show};
    use crate::persistence::InMemoryStore;
    use crate::service::test_support::{RejectingStore, artist_draft, venue_draft};

    fn service() -> (Arc<InMemoryStore>, VenueService) {
        let store = Arc::new(InMemoryStore::new());
        let service = VenueService::new(Arc::clone(&store) as Arc<dyn DirectoryStore>);
        (store, service)
    }

    async fn seed_artist(store: &InMemoryStore, draft: ArtistDraft) -> Artist {
        let artist = Artist::from_draft(ArtistId::new(), draft);
        let Ok(()) = store.insert_artist(&artist).await else {
            panic!("artist insert failed");
        };
        artist
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips_every_field() {
        let (_, service) = service();
        let draft = VenueDraft {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            genres: vec![
                "Jazz".to_string(),
                "Reggae".to_string(),
                "Swing".to_string(),
            ],
            website: Some("https://www.themusicalhop.com".to_string()),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            image_link: Some("https://images.example/hop.jpg".to_string()),
            seeking_talent: true,
            seeking_description: Some("Looking for local artists".to_string()),
        };

        let Ok(created) = service.create(draft.clone()).await else {
            panic!("create failed");
        };
        let Ok(fetched) = service.get(created.id).await else {
            panic!("fetch failed");
        };
        assert_eq!(fetched, Venue::from_draft(created.id, draft));
    }

    #[tokio::test]
    async fn seeking_talent_defaults_to_false() {
        let (_, service) = service();
        let Ok(created) = service
            .create(venue_draft("The Dueling Pianos Bar", "New York", "NY"))
            .await
        else {
            panic!("create failed");
        };
        let Ok(fetched) = service.get(created.id).await else {
            panic!("fetch failed");
        };
        assert!(!fetched.seeking_talent);
    }

    #[tokio::test]
    async fn rejected_create_leaves_store_unchanged() {
        let store = Arc::new(RejectingStore::default());
        let service = VenueService::new(Arc::clone(&store) as Arc<dyn DirectoryStore>);

        let result = service
            .create(venue_draft("The Musical Hop", "San Francisco", "CA"))
            .await;

        let Err(DirectoryError::WriteFailed { notice }) = result else {
            panic!("expected a write failure");
        };
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("The Musical Hop"));
        assert!(notice.message.contains("listed"));
        assert_eq!(store.inner.counts().await, (0, 0, 0));
    }

    #[tokio::test]
    async fn rejected_update_keeps_previous_record() {
        let store = Arc::new(RejectingStore::default());
        let original = Venue::from_draft(
            VenueId::new(),
            venue_draft("The Musical Hop", "San Francisco", "CA"),
        );
        let Ok(()) = store.inner.insert_venue(&original).await else {
            panic!("seed failed");
        };
        let service = VenueService::new(Arc::clone(&store) as Arc<dyn DirectoryStore>);

        let result = service
            .update(original.id, venue_draft("The Renamed Hop", "Oakland", "CA"))
            .await;
        let Err(DirectoryError::WriteFailed { notice }) = result else {
            panic!("expected a write failure");
        };
        assert!(notice.message.contains("The Renamed Hop"));
        assert!(notice.message.contains("updated"));

        let Ok(current) = store.inner.venue(original.id).await else {
            panic!("venue vanished");
        };
        assert_eq!(current, original);
    }

    #[tokio::test]
    async fn rejected_delete_reports_deleted_action() {
        let store = Arc::new(RejectingStore::default());
        let original = Venue::from_draft(
            VenueId::new(),
            venue_draft("The Musical Hop", "San Francisco", "CA"),
        );
        let _ = store.inner.insert_venue(&original).await;
        let service = VenueService::new(Arc::clone(&store) as Arc<dyn DirectoryStore>);

        let Err(DirectoryError::WriteFailed { notice }) = service.delete(original.id).await else {
            panic!("expected a write failure");
        };
        assert!(notice.message.contains("deleted"));
        assert_eq!(store.inner.counts().await, (1, 0, 0));
    }

    #[tokio::test]
    async fn detail_for_unknown_id_is_not_found() {
        let (_, service) = service();
        let missing = VenueId::new();
        let result = service.detail(missing, Utc::now()).await;
        assert!(matches!(result, Err(DirectoryError::VenueNotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (_, service) = service();
        let result = service
            .update(VenueId::new(), venue_draft("Ghost", "Nowhere", "NV"))
            .await;
        assert!(matches!(result, Err(DirectoryError::VenueNotFound(_))));
    }

    #[tokio::test]
    async fn detail_splits_shows_with_one_instant() {
        let (store, service) = service();
        let now = Utc::now();
        let Ok(hop) = service
            .create(venue_draft("The Musical Hop", "San Francisco", "CA"))
            .await
        else {
            panic!("create failed");
        };
        let petals = seed_artist(&store, artist_draft("Guns N Petals")).await;
        let quevado = seed_artist(&store, artist_draft("Matt Quevado")).await;
        for show in [
            Show::new(petals.id, hop.id, now - Duration::days(10)),
            Show::new(quevado.id, hop.id, now + Duration::days(10)),
            Show::new(petals.id, hop.id, now + Duration::days(20)),
        ] {
            let _ = store.insert_show(&show).await;
        }

        let Ok(detail) = service.detail(hop.id, now).await else {
            panic!("detail failed");
        };
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 2);
        let names: Vec<&str> = detail
            .upcoming_shows
            .iter()
            .map(|row| row.artist_name.as_str())
            .collect();
        assert_eq!(names, vec!["Matt Quevado", "Guns N Petals"]);
    }

    #[tokio::test]
    async fn areas_count_each_city_separately() {
        let (store, service) = service();
        let now = Utc::now();
        let Ok(hop) = service
            .create(venue_draft("The Musical Hop", "San Francisco", "CA"))
            .await
        else {
            panic!("create failed");
        };
        let Ok(_pianos) = service
            .create(venue_draft("The Dueling Pianos Bar", "New York", "NY"))
            .await
        else {
            panic!("create failed");
        };
        let petals = seed_artist(&store, artist_draft("Guns N Petals")).await;
        let _ = store
            .insert_show(&Show::new(petals.id, hop.id, now + Duration::days(1)))
            .await;

        let Ok(areas) = service.areas(now).await else {
            panic!("areas failed");
        };
        let counts: Vec<(&str, usize)> = areas
            .iter()
            .map(|a| (a.city.as_str(), a.num_upcoming_shows))
            .collect();
        assert_eq!(counts, vec![("San Francisco", 1), ("New York", 0)]);
    }

    #[tokio::test]
    async fn search_matches_substrings() {
        let (_, service) = service();
        for name in [
            "The Musical Hop",
            "Park Square Live Music & Coffee",
            "The Dueling Pianos Bar",
        ] {
            let _ = service.create(venue_draft(name, "San Francisco", "CA")).await;
        }

        let Ok(hop) = service.search("hop", Utc::now()).await else {
            panic!("search failed");
        };
        assert_eq!(hop.count, 1);

        let Ok(music) = service.search("Music", Utc::now()).await else {
            panic!("search failed");
        };
        let mut names: Vec<&str> = music.data.iter().map(|h| h.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec!["Park Square Live Music & Coffee", "The Musical Hop"]
        );
    }

    #[tokio::test]
    async fn delete_removes_venue() {
        let (store, service) = service();
        let Ok(hop) = service
            .create(venue_draft("The Musical Hop", "San Francisco", "CA"))
            .await
        else {
            panic!("create failed");
        };
        let Ok(deleted) = service.delete(hop.id).await else {
            panic!("delete failed");
        };
        assert_eq!(deleted.name, "The Musical Hop");
        assert_eq!(store.counts().await, (0, 0, 0));
    }
}
