//! Show handlers: directory listing and creation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{NoticeResponse, ShowForm, parse_start_time};
use crate::app_state::AppState;
use crate::domain::{ArtistId, EntityKind, Notice, ShowListing, VenueId, WriteAction};
use crate::error::{DirectoryError, ErrorResponse, WriteFailedResponse};

/// `GET /shows`: Every show with venue and artist names.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/shows",
    tag = "Shows",
    summary = "List shows",
    description = "Returns every show ordered by start time, with the venue and artist resolved.",
    responses(
        (status = 200, description = "Show list", body = Vec<ShowListing>),
    )
)]
pub async fn list_shows(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    Ok(Json(state.shows.list().await?))
}

/// `POST /shows/create`: Schedule an artist at a venue.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidRequest`] for an unparseable start
/// time, or [`DirectoryError::WriteFailed`] if the insert is rolled back.
#[utoipa::path(
    post,
    path = "/api/v1/shows/create",
    tag = "Shows",
    summary = "Create a show",
    request_body = ShowForm,
    responses(
        (status = 201, description = "Show listed", body = NoticeResponse),
        (status = 400, description = "Invalid start time", body = ErrorResponse),
        (status = 500, description = "Write rolled back", body = WriteFailedResponse),
    )
)]
pub async fn create_show(
    State(state): State<AppState>,
    Json(form): Json<ShowForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let start_time = parse_start_time(&form.start_time)?;
    let artist_id = ArtistId::from_uuid(form.artist_id);
    let show = state
        .shows
        .create(artist_id, VenueId::from_uuid(form.venue_id), start_time)
        .await?;

    let subject = format!("for Artist ID {artist_id}");
    let response = NoticeResponse {
        notice: Notice::success(EntityKind::Show, &subject, WriteAction::Listed),
        redirect_to: "/".to_string(),
        id: *show.id.as_uuid(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Show routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", post(create_show))
}
