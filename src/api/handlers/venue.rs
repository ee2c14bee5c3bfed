//! Venue handlers: areas, search, detail, create, edit, delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{NoticeResponse, SearchRequest, VenueForm};
use crate::api::extract::IdPath;
use crate::app_state::AppState;
use crate::domain::{
    EntityKind, Notice, SearchResults, Venue, VenueArea, VenueDetail, VenueId, WriteAction,
};
use crate::error::{DirectoryError, ErrorResponse, WriteFailedResponse};

/// `GET /venues`: Venues grouped by city and state.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/venues",
    tag = "Venues",
    summary = "List venues by area",
    description = "Groups every venue by (city, state). Each venue and each area carries its own upcoming-show count.",
    responses(
        (status = 200, description = "Venue areas", body = Vec<VenueArea>),
    )
)]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let areas = state.venues.areas(Utc::now()).await?;
    Ok(Json(areas))
}

/// `POST /venues/search`: Case-insensitive name search.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    post,
    path = "/api/v1/venues/search",
    tag = "Venues",
    summary = "Search venues",
    description = "Returns venues whose name contains the search term, ignoring case.",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching venues", body = SearchResults),
    )
)]
pub async fn search_venues(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, DirectoryError> {
    let results = state.venues.search(&req.search_term, Utc::now()).await?;
    Ok(Json(results))
}

/// `GET /venues/{id}`: Venue page with past and upcoming shows.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/venues/{id}",
    tag = "Venues",
    summary = "Get venue details",
    params(
        ("id" = uuid::Uuid, Path, description = "Venue UUID"),
    ),
    responses(
        (status = 200, description = "Venue details", body = VenueDetail),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn get_venue(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, DirectoryError> {
    let detail = state
        .venues
        .detail(VenueId::from_uuid(id), Utc::now())
        .await?;
    Ok(Json(detail))
}

/// `POST /venues/create`: List a new venue.
///
/// # Errors
///
/// Returns [`DirectoryError::WriteFailed`] if the insert is rolled back.
#[utoipa::path(
    post,
    path = "/api/v1/venues/create",
    tag = "Venues",
    summary = "Create a venue",
    request_body = VenueForm,
    responses(
        (status = 201, description = "Venue listed", body = NoticeResponse),
        (status = 500, description = "Write rolled back", body = WriteFailedResponse),
    )
)]
pub async fn create_venue(
    State(state): State<AppState>,
    Json(form): Json<VenueForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = state.venues.create(form.into()).await?;
    let response = NoticeResponse {
        notice: Notice::success(EntityKind::Venue, &venue.name, WriteAction::Listed),
        redirect_to: "/".to_string(),
        id: *venue.id.as_uuid(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /venues/{id}/edit`: Current record, used to prefill the form.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/venues/{id}/edit",
    tag = "Venues",
    summary = "Get venue edit form",
    params(
        ("id" = uuid::Uuid, Path, description = "Venue UUID"),
    ),
    responses(
        (status = 200, description = "Current venue record", body = Venue),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn edit_venue_form(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = state.venues.get(VenueId::from_uuid(id)).await?;
    Ok(Json(venue))
}

/// `POST /venues/{id}/edit`: Replace every field of a venue.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist,
/// or [`DirectoryError::WriteFailed`] if the update is rolled back.
#[utoipa::path(
    post,
    path = "/api/v1/venues/{id}/edit",
    tag = "Venues",
    summary = "Update a venue",
    params(
        ("id" = uuid::Uuid, Path, description = "Venue UUID"),
    ),
    request_body = VenueForm,
    responses(
        (status = 200, description = "Venue updated", body = NoticeResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
        (status = 500, description = "Write rolled back", body = WriteFailedResponse),
    )
)]
pub async fn update_venue(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Json(form): Json<VenueForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = state
        .venues
        .update(VenueId::from_uuid(id), form.into())
        .await?;
    Ok(Json(NoticeResponse {
        notice: Notice::success(EntityKind::Venue, &venue.name, WriteAction::Updated),
        redirect_to: format!("/api/v1/venues/{id}"),
        id,
    }))
}

/// `DELETE /venues/{id}`: Delete a venue and its shows.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist,
/// or [`DirectoryError::WriteFailed`] if the delete is rolled back.
#[utoipa::path(
    delete,
    path = "/api/v1/venues/{id}",
    tag = "Venues",
    summary = "Delete a venue",
    params(
        ("id" = uuid::Uuid, Path, description = "Venue UUID"),
    ),
    responses(
        (status = 200, description = "Venue deleted", body = NoticeResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
        (status = 500, description = "Write rolled back", body = WriteFailedResponse),
    )
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = state.venues.delete(VenueId::from_uuid(id)).await?;
    Ok(Json(NoticeResponse {
        notice: Notice::success(EntityKind::Venue, &venue.name, WriteAction::Deleted),
        redirect_to: "/".to_string(),
        id,
    }))
}

/// Venue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", post(create_venue))
        .route("/venues/{id}", get(get_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(update_venue))
}
