//! Show form DTO and start-time parsing.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DirectoryError;

/// Accepted naive start-time layout, read as UTC.
const NAIVE_START_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Request body for `POST /shows/create`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ShowForm {
    /// Performing artist.
    pub artist_id: Uuid,
    /// Hosting venue.
    pub venue_id: Uuid,
    /// RFC 3339 timestamp or `YYYY-MM-DD HH:MM:SS` (UTC).
    pub start_time: String,
}

/// Parses a submitted start time.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidRequest`] if `raw` matches neither
/// accepted layout.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, DirectoryError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_START_TIME)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            DirectoryError::InvalidRequest(format!("invalid start_time {raw:?}: {e}"))
        })
}
