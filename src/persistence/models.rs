//! Database row types for the `venues`, `artists` and `shows` tables.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::{Artist, ArtistId, Location, Show, ShowId, Venue, VenueId};

/// A row of the `venues` table.
#[derive(Debug, Clone, FromRow)]
pub struct VenueRow {
    /// Primary key.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Phone number.
    pub phone: Option<String>,
    /// `TEXT[]` of genre tags.
    pub genres: Vec<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Facebook page URL.
    pub facebook_link: Option<String>,
    /// Image URL.
    pub image_link: Option<String>,
    /// Seeking-talent flag.
    pub seeking_talent: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Self {
            id: VenueId::from_uuid(row.id),
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            genres: row.genres,
            website: row.website,
            facebook_link: row.facebook_link,
            image_link: row.image_link,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        }
    }
}

/// A row of the `artists` table.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistRow {
    /// Primary key.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Phone number.
    pub phone: Option<String>,
    /// `TEXT[]` of genre tags.
    pub genres: Vec<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Facebook page URL.
    pub facebook_link: Option<String>,
    /// Image URL.
    pub image_link: Option<String>,
    /// Seeking-venue flag.
    pub seeking_venue: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Self {
            id: ArtistId::from_uuid(row.id),
            name: row.name,
            city: row.city,
            state: row.state,
            phone: row.phone,
            genres: row.genres,
            website: row.website,
            facebook_link: row.facebook_link,
            image_link: row.image_link,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
        }
    }
}

/// A row of the `shows` table.
#[derive(Debug, Clone, FromRow)]
pub struct ShowRow {
    /// Primary key.
    pub id: Uuid,
    /// References `artists.id`.
    pub artist_id: Uuid,
    /// References `venues.id`.
    pub venue_id: Uuid,
    /// Scheduled start (`TIMESTAMPTZ`).
    pub start_time: DateTime<Utc>,
}

impl From<ShowRow> for Show {
    fn from(row: ShowRow) -> Self {
        Self {
            id: ShowId::from_uuid(row.id),
            artist_id: ArtistId::from_uuid(row.artist_id),
            venue_id: VenueId::from_uuid(row.venue_id),
            start_time: row.start_time,
        }
    }
}

/// A distinct `(city, state)` row.
#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    /// City.
    pub city: String,
    /// State.
    pub state: String,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self::new(row.city, row.state)
    }
}
