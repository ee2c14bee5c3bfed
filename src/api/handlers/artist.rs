//! Artist handlers: list, search, detail, create, edit, delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{ArtistForm, NoticeResponse, SearchRequest};
use crate::api::extract::IdPath;
use crate::app_state::AppState;
use crate::domain::{
    Artist, ArtistDetail, ArtistId, ArtistSummary, EntityKind, Notice, SearchResults, WriteAction,
};
use crate::error::{DirectoryError, ErrorResponse, WriteFailedResponse};

/// `GET /artists`: Every artist as an (id, name) pair.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/artists",
    tag = "Artists",
    summary = "List artists",
    responses(
        (status = 200, description = "Artist list", body = Vec<ArtistSummary>),
    )
)]
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    Ok(Json(state.artists.list().await?))
}

/// `POST /artists/search`: Case-insensitive name search.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    post,
    path = "/api/v1/artists/search",
    tag = "Artists",
    summary = "Search artists",
    description = "Returns artists whose name contains the search term, ignoring case.",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching artists", body = SearchResults),
    )
)]
pub async fn search_artists(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, DirectoryError> {
    let results = state.artists.search(&req.search_term, Utc::now()).await?;
    Ok(Json(results))
}

/// `GET /artists/{id}`: Artist page with past and upcoming shows.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}",
    tag = "Artists",
    summary = "Get artist details",
    params(
        ("id" = uuid::Uuid, Path, description = "Artist UUID"),
    ),
    responses(
        (status = 200, description = "Artist details", body = ArtistDetail),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn get_artist(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, DirectoryError> {
    let detail = state
        .artists
        .detail(ArtistId::from_uuid(id), Utc::now())
        .await?;
    Ok(Json(detail))
}

/// `POST /artists/create`: List a new artist.
///
/// # Errors
///
/// Returns [`DirectoryError::WriteFailed`] if the insert is rolled back.
#[utoipa::path(
    post,
    path = "/api/v1/artists/create",
    tag = "Artists",
    summary = "Create an artist",
    request_body = ArtistForm,
    responses(
        (status = 201, description = "Artist listed", body = NoticeResponse),
        (status = 500, description = "Write rolled back", body = WriteFailedResponse),
    )
)]
pub async fn create_artist(
    State(state): State<AppState>,
    Json(form): Json<ArtistForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = state.artists.create(form.into()).await?;
    let response = NoticeResponse {
        notice: Notice::success(EntityKind::Artist, &artist.name, WriteAction::Listed),
        redirect_to: "/".to_string(),
        id: *artist.id.as_uuid(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /artists/{id}/edit`: Current record, used to prefill the form.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}/edit",
    tag = "Artists",
    summary = "Get artist edit form",
    params(
        ("id" = uuid::Uuid, Path, description = "Artist UUID"),
    ),
    responses(
        (status = 200, description = "Current artist record", body = Artist),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn edit_artist_form(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = state.artists.get(ArtistId::from_uuid(id)).await?;
    Ok(Json(artist))
}

/// `POST /artists/{id}/edit`: Replace every field of an artist.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not
/// exist, or [`DirectoryError::WriteFailed`] if the update is rolled back.
#[utoipa::path(
    post,
    path = "/api/v1/artists/{id}/edit",
    tag = "Artists",
    summary = "Update an artist",
    params(
        ("id" = uuid::Uuid, Path, description = "Artist UUID"),
    ),
    request_body = ArtistForm,
    responses(
        (status = 200, description = "Artist updated", body = NoticeResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
        (status = 500, description = "Write rolled back", body = WriteFailedResponse),
    )
)]
pub async fn update_artist(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Json(form): Json<ArtistForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = state
        .artists
        .update(ArtistId::from_uuid(id), form.into())
        .await?;
    Ok(Json(NoticeResponse {
        notice: Notice::success(EntityKind::Artist, &artist.name, WriteAction::Updated),
        redirect_to: format!("/api/v1/artists/{id}"),
        id,
    }))
}

/// `DELETE /artists/{id}`: Delete an artist and their shows.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not
/// exist, or [`DirectoryError::WriteFailed`] if the delete is rolled back.
#[utoipa::path(
    delete,
    path = "/api/v1/artists/{id}",
    tag = "Artists",
    summary = "Delete an artist",
    params(
        ("id" = uuid::Uuid, Path, description = "Artist UUID"),
    ),
    responses(
        (status = 200, description = "Artist deleted", body = NoticeResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
        (status = 500, description = "Write rolled back", body = WriteFailedResponse),
    )
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = state.artists.delete(ArtistId::from_uuid(id)).await?;
    Ok(Json(NoticeResponse {
        notice: Notice::success(EntityKind::Artist, &artist.name, WriteAction::Deleted),
        redirect_to: "/".to_string(),
        id,
    }))
}

/// Artist routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", post(create_artist))
        .route("/artists/{id}", get(get_artist).delete(delete_artist))
        .route(
            "/artists/{id}/edit",
            get(edit_artist_form).post(update_artist),
        )
}
