//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Notice;

/// Request body for the search endpoints.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Case-insensitive substring to look for. Empty matches everything.
    #[serde(default)]
    pub search_term: String,
}

/// Response body of every write endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NoticeResponse {
    /// Outcome message for the user.
    pub notice: Notice,
    /// Path of the view to show next.
    pub redirect_to: String,
    /// Id of the written entity.
    pub id: Uuid,
}

/// Service banner returned by `GET /`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomeResponse {
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
    /// Entry points of the directory.
    pub links: Vec<String>,
}

/// Normalizes an optional text field: blank input is treated as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
