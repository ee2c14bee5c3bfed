//! Show-relative time: past/upcoming classification and upcoming counts.
//!
//! Nothing here reads a clock. The evaluation instant is always passed in,
//! so one request classifies every show against the same `now`.

use chrono::{DateTime, Utc};

use super::{ArtistId, Show, VenueId};

/// Whether a show has already started relative to an evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    /// Starts at or before the evaluation instant.
    Past,
    /// Starts strictly after the evaluation instant.
    Upcoming,
}

impl ShowTiming {
    /// Classifies a start time against `now`. A show starting exactly at
    /// `now` is past.
    #[must_use]
    pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start_time > now {
            Self::Upcoming
        } else {
            Self::Past
        }
    }
}

/// The entity a set of shows is counted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowOwner {
    /// Shows hosted by this venue.
    Venue(VenueId),
    /// Shows performed by this artist.
    Artist(ArtistId),
}

/// Counts the upcoming shows of `owner` among `shows`.
///
/// Shows that reference a different entity are ignored, so the same
/// slice can be reused for every entity in a listing.
#[must_use]
pub fn count_upcoming(owner: ShowOwner, shows: &[Show], now: DateTime<Utc>) -> usize {
    shows
        .iter()
        .filter(|show| show.belongs_to(owner))
        .filter(|show| show.timing(now) == ShowTiming::Upcoming)
        .count()
}
