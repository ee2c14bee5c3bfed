//! Show records: the association between one artist, one venue and a
//! start time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::timeline::{ShowOwner, ShowTiming};
use super::{ArtistId, ShowId, VenueId};

/// A performance of one artist at one venue.
///
/// Shows are created and listed but never edited. They are removed only
/// together with the venue or artist they reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Show {
    /// Stable identity.
    pub id: ShowId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Scheduled start.
    pub start_time: DateTime<Utc>,
}

impl Show {
    /// Creates a show with a fresh identity.
    #[must_use]
    pub fn new(artist_id: ArtistId, venue_id: VenueId, start_time: DateTime<Utc>) -> Self {
        Self {
            id: ShowId::new(),
            artist_id,
            venue_id,
            start_time,
        }
    }

    /// Classifies this show relative to the evaluation instant `now`.
    #[must_use]
    pub fn timing(&self, now: DateTime<Utc>) -> ShowTiming {
        ShowTiming::classify(self.start_time, now)
    }

    /// Returns `true` if this show references `owner`.
    #[must_use]
    pub fn belongs_to(&self, owner: ShowOwner) -> bool {
        match owner {
            ShowOwner::Venue(id) => self.venue_id == id,
            ShowOwner::Artist(id) => self.artist_id == id,
        }
    }
}
