//! Denormalized view models joining shows with their counterpart entity.
//!
//! Counterparts are resolved from lookup tables that the caller fetched in
//! one batch. A show whose artist or venue is missing from the table is an
//! error, never a placeholder row.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::timeline::ShowTiming;
use super::{Artist, ArtistId, Show, Venue, VenueId};
use crate::error::DirectoryError;

/// Display pattern for show start times: `05/21/2035, 21:30:00`.
pub const START_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Formats a start time with [`START_TIME_FORMAT`].
#[must_use]
pub fn format_start_time(start_time: DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// A show seen from its venue: surfaces the performing artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArtistAppearance {
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist display name.
    pub artist_name: String,
    /// Artist image URL.
    pub artist_image_link: Option<String>,
    /// Formatted start time.
    pub start_time: String,
}

impl ArtistAppearance {
    /// Resolves the artist of `show`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if the artist is not in
    /// `artists`.
    pub fn assemble(
        show: &Show,
        artists: &HashMap<ArtistId, Artist>,
    ) -> Result<Self, DirectoryError> {
        let artist = artists
            .get(&show.artist_id)
            .ok_or(DirectoryError::ArtistNotFound(show.artist_id))?;
        Ok(Self {
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: format_start_time(show.start_time),
        })
    }
}

/// A show seen from its artist: surfaces the hosting venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VenueAppearance {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue display name.
    pub venue_name: String,
    /// Venue image URL.
    pub venue_image_link: Option<String>,
    /// Formatted start time.
    pub start_time: String,
}

impl VenueAppearance {
    /// Resolves the venue of `show`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if the venue is not in
    /// `venues`.
    pub fn assemble(show: &Show, venues: &HashMap<VenueId, Venue>) -> Result<Self, DirectoryError> {
        let venue = venues
            .get(&show.venue_id)
            .ok_or(DirectoryError::VenueNotFound(show.venue_id))?;
        Ok(Self {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            start_time: format_start_time(show.start_time),
        })
    }
}

/// One row of the show directory: both counterparts resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShowListing {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue display name.
    pub venue_name: String,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist display name.
    pub artist_name: String,
    /// Artist image URL.
    pub artist_image_link: Option<String>,
    /// Formatted start time.
    pub start_time: String,
}

impl ShowListing {
    /// Resolves both the venue and the artist of `show`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] or
    /// [`DirectoryError::ArtistNotFound`] if either side is missing.
    pub fn assemble(
        show: &Show,
        venues: &HashMap<VenueId, Venue>,
        artists: &HashMap<ArtistId, Artist>,
    ) -> Result<Self, DirectoryError> {
        let venue = VenueAppearance::assemble(show, venues)?;
        let artist = ArtistAppearance::assemble(show, artists)?;
        Ok(Self {
            venue_id: venue.venue_id,
            venue_name: venue.venue_name,
            artist_id: artist.artist_id,
            artist_name: artist.artist_name,
            artist_image_link: artist.artist_image_link,
            start_time: artist.start_time,
        })
    }
}

/// Splits `shows` into (past, upcoming) view rows, ordered by start time.
fn split_by_timing<T, F>(
    shows: &[Show],
    now: DateTime<Utc>,
    assemble: F,
) -> Result<(Vec<T>, Vec<T>), DirectoryError>
where
    F: Fn(&Show) -> Result<T, DirectoryError>,
{
    let mut ordered: Vec<&Show> = shows.iter().collect();
    ordered.sort_by_key(|show| show.start_time);

    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for show in ordered {
        let row = assemble(show)?;
        match show.timing(now) {
            ShowTiming::Past => past.push(row),
            ShowTiming::Upcoming => upcoming.push(row),
        }
    }
    Ok((past, upcoming))
}

/// Venue page: the venue plus its shows split into past and upcoming.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueDetail {
    /// The venue record.
    #[serde(flatten)]
    pub venue: Venue,
    /// Shows at or before the evaluation instant.
    pub past_shows: Vec<ArtistAppearance>,
    /// Shows after the evaluation instant.
    pub upcoming_shows: Vec<ArtistAppearance>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    /// Builds the venue page from the venue's shows and their artists.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if a show's artist is
    /// missing from `artists`.
    pub fn assemble(
        venue: Venue,
        shows: &[Show],
        artists: &HashMap<ArtistId, Artist>,
        now: DateTime<Utc>,
    ) -> Result<Self, DirectoryError> {
        let (past_shows, upcoming_shows) =
            split_by_timing(shows, now, |show| ArtistAppearance::assemble(show, artists))?;
        Ok(Self {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }
}

/// Artist page: the artist plus their shows split into past and upcoming.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistDetail {
    /// The artist record.
    #[serde(flatten)]
    pub artist: Artist,
    /// Shows at or before the evaluation instant.
    pub past_shows: Vec<VenueAppearance>,
    /// Shows after the evaluation instant.
    pub upcoming_shows: Vec<VenueAppearance>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    /// Builds the artist page from the artist's shows and their venues.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if a show's venue is
    /// missing from `venues`.
    pub fn assemble(
        artist: Artist,
        shows: &[Show],
        venues: &HashMap<VenueId, Venue>,
        now: DateTime<Utc>,
    ) -> Result<Self, DirectoryError> {
        let (past_shows, upcoming_shows) =
            split_by_timing(shows, now, |show| VenueAppearance::assemble(show, venues))?;
        Ok(Self {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::domain::{ArtistDraft, VenueDraft};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2035, 5, 21, 21, 30, 0)
            .single()
            .unwrap_or_default()
    }

    fn venue(name: &str) -> Venue {
        Venue::from_draft(
            VenueId::new(),
            VenueDraft {
                name: name.to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "1015 Folsom Street".to_string(),
                image_link: Some(format!("https://img.example/{name}")),
                ..VenueDraft::default()
            },
        )
    }

    fn artist(name: &str) -> Artist {
        Artist::from_draft(
            ArtistId::new(),
            ArtistDraft {
                name: name.to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                image_link: Some(format!("https://img.example/{name}")),
                ..ArtistDraft::default()
            },
        )
    }

    #[test]
    fn start_time_is_zero_padded_24h() {
        let start = Utc
            .with_ymd_and_hms(2035, 4, 1, 8, 5, 9)
            .single()
            .unwrap_or_default();
        assert_eq!(format_start_time(start), "04/01/2035, 08:05:09");
        assert_eq!(format_start_time(instant()), "05/21/2035, 21:30:00");
    }

    #[test]
    fn artist_appearance_surfaces_artist_fields() {
        let hop = venue("The Musical Hop");
        let petals = artist("Guns N Petals");
        let show = Show::new(petals.id, hop.id, instant());
        let artists = HashMap::from([(petals.id, petals.clone())]);

        let Ok(row) = ArtistAppearance::assemble(&show, &artists) else {
            panic!("artist should resolve");
        };
        assert_eq!(row.artist_id, petals.id);
        assert_eq!(row.artist_name, "Guns N Petals");
        assert_eq!(row.artist_image_link, petals.image_link);
        assert_eq!(row.start_time, "05/21/2035, 21:30:00");
    }

    #[test]
    fn missing_counterpart_is_not_found() {
        let hop = venue("The Musical Hop");
        let petals = artist("Guns N Petals");
        let show = Show::new(petals.id, hop.id, instant());

        let result = ArtistAppearance::assemble(&show, &HashMap::new());
        assert!(matches!(result, Err(DirectoryError::ArtistNotFound(id)) if id == petals.id));

        let artists = HashMap::from([(petals.id, petals)]);
        let result = ShowListing::assemble(&show, &HashMap::new(), &artists);
        assert!(matches!(result, Err(DirectoryError::VenueNotFound(id)) if id == hop.id));
    }

    #[test]
    fn show_listing_joins_both_sides() {
        let hop = venue("The Musical Hop");
        let petals = artist("Guns N Petals");
        let show = Show::new(petals.id, hop.id, instant());
        let venues = HashMap::from([(hop.id, hop.clone())]);
        let artists = HashMap::from([(petals.id, petals.clone())]);

        let Ok(row) = ShowListing::assemble(&show, &venues, &artists) else {
            panic!("both sides should resolve");
        };
        assert_eq!(row.venue_name, "The Musical Hop");
        assert_eq!(row.artist_name, "Guns N Petals");
        assert_eq!(row.venue_id, hop.id);
        assert_eq!(row.artist_id, petals.id);
    }

    #[test]
    fn venue_detail_splits_on_evaluation_instant() {
        let now = instant();
        let hop = venue("The Musical Hop");
        let petals = artist("Guns N Petals");
        let shows = vec![
            Show::new(petals.id, hop.id, now + Duration::days(7)),
            Show::new(petals.id, hop.id, now),
            Show::new(petals.id, hop.id, now - Duration::days(7)),
            Show::new(petals.id, hop.id, now + Duration::days(1)),
        ];
        let artists = HashMap::from([(petals.id, petals)]);

        let Ok(detail) = VenueDetail::assemble(hop, &shows, &artists, now) else {
            panic!("detail should assemble");
        };
        assert_eq!(detail.past_shows_count, 2);
        assert_eq!(detail.upcoming_shows_count, 2);
        let upcoming: Vec<&str> = detail
            .upcoming_shows
            .iter()
            .map(|row| row.start_time.as_str())
            .collect();
        assert_eq!(
            upcoming,
            vec!["05/22/2035, 21:30:00", "05/28/2035, 21:30:00"]
        );
    }

    #[test]
    fn artist_detail_with_no_shows_is_empty() {
        let petals = artist("Guns N Petals");
        let Ok(detail) = ArtistDetail::assemble(petals, &[], &HashMap::new(), instant()) else {
            panic!("detail should assemble");
        };
        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows_count, 0);
    }

    #[test]
    fn detail_flattens_entity_fields() {
        let petals = artist("Guns N Petals");
        let Ok(detail) = ArtistDetail::assemble(petals, &[], &HashMap::new(), instant()) else {
            panic!("detail should assemble");
        };
        let Ok(json) = serde_json::to_value(&detail) else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("name"), Some(&serde_json::json!("Guns N Petals")));
        assert_eq!(json.get("seeking_venue"), Some(&serde_json::json!(false)));
        assert_eq!(
            json.get("upcoming_shows_count"),
            Some(&serde_json::json!(0))
        );
    }
}
