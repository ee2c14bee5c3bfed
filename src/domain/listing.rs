//! Directory listings: name search and the city/state venue index.
//!
//! Each entity's upcoming count is computed on its own through
//! [`count_upcoming`]; area totals are sums of those per-venue counts.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::timeline::{ShowOwner, count_upcoming};
use super::{Artist, ArtistId, Location, Show, Venue, VenueId};

/// Returns `true` if `name` contains `term`, ignoring case.
///
/// Plain substring containment: not anchored, not tokenized. An empty
/// term matches every name.
#[must_use]
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchHit {
    /// Venue or artist id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Upcoming shows of this entity alone.
    pub num_upcoming_shows: usize,
}

/// Search response: the hits plus their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchResults {
    /// Number of hits.
    pub count: usize,
    /// Hits in the order the store returned them.
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    /// Builds search results for venues that already matched the term.
    #[must_use]
    pub fn for_venues(matches: &[Venue], shows: &[Show], now: DateTime<Utc>) -> Self {
        let data = matches
            .iter()
            .map(|venue| SearchHit {
                id: *venue.id.as_uuid(),
                name: venue.name.clone(),
                num_upcoming_shows: count_upcoming(ShowOwner::Venue(venue.id), shows, now),
            })
            .collect();
        Self::from_hits(data)
    }

    /// Builds search results for artists that already matched the term.
    #[must_use]
    pub fn for_artists(matches: &[Artist], shows: &[Show], now: DateTime<Utc>) -> Self {
        let data = matches
            .iter()
            .map(|artist| SearchHit {
                id: *artist.id.as_uuid(),
                name: artist.name.clone(),
                num_upcoming_shows: count_upcoming(ShowOwner::Artist(artist.id), shows, now),
            })
            .collect();
        Self::from_hits(data)
    }

    fn from_hits(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A venue row inside a [`VenueArea`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VenueSummary {
    /// Venue id.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Upcoming shows at this venue alone.
    pub num_upcoming_shows: usize,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VenueArea {
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Venues located here.
    pub venues: Vec<VenueSummary>,
    /// Sum of the venues' individual upcoming counts.
    pub num_upcoming_shows: usize,
}

/// Groups venues by location, one area per entry of `locations`.
///
/// Areas keep the order of `locations` and venues keep the order of
/// `venues`. Venues whose location is not listed are left out.
#[must_use]
pub fn group_by_location(
    locations: &[Location],
    venues: &[Venue],
    shows: &[Show],
    now: DateTime<Utc>,
) -> Vec<VenueArea> {
    locations
        .iter()
        .map(|location| {
            let summaries: Vec<VenueSummary> = venues
                .iter()
                .filter(|venue| location.contains(venue))
                .map(|venue| VenueSummary {
                    id: venue.id,
                    name: venue.name.clone(),
                    num_upcoming_shows: count_upcoming(ShowOwner::Venue(venue.id), shows, now),
                })
                .collect();
            VenueArea {
                city: location.city.clone(),
                state: location.state.clone(),
                num_upcoming_shows: summaries.iter().map(|v| v.num_upcoming_shows).sum(),
                venues: summaries,
            }
        })
        .collect()
}

/// Artist row of the artist directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArtistSummary {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
}

impl From<&Artist> for ArtistSummary {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
        }
    }
}
