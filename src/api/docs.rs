//! OpenAPI document covering every REST endpoint.

use utoipa::OpenApi;

use super::dto::{ArtistForm, HomeResponse, NoticeResponse, SearchRequest, ShowForm, VenueForm};
use super::handlers::system::HealthResponse;
use crate::domain::{
    Artist, ArtistAppearance, ArtistDetail, ArtistSummary, Notice, NoticeLevel, SearchHit,
    SearchResults, ShowListing, Venue, VenueAppearance, VenueArea, VenueDetail, VenueSummary,
};
use crate::error::{ErrorBody, ErrorResponse, WriteFailedResponse};

/// Aggregated OpenAPI description of the directory API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Fyyur", description = "Venue and artist booking directory"),
    paths(
        crate::api::handlers::system::home_handler,
        crate::api::handlers::system::health_handler,
        crate::api::handlers::venue::list_venues,
        crate::api::handlers::venue::search_venues,
        crate::api::handlers::venue::get_venue,
        crate::api::handlers::venue::create_venue,
        crate::api::handlers::venue::edit_venue_form,
        crate::api::handlers::venue::update_venue,
        crate::api::handlers::venue::delete_venue,
        crate::api::handlers::artist::list_artists,
        crate::api::handlers::artist::search_artists,
        crate::api::handlers::artist::get_artist,
        crate::api::handlers::artist::create_artist,
        crate::api::handlers::artist::edit_artist_form,
        crate::api::handlers::artist::update_artist,
        crate::api::handlers::artist::delete_artist,
        crate::api::handlers::show::list_shows,
        crate::api::handlers::show::create_show,
    ),
    components(schemas(
        Venue, VenueArea, VenueSummary, VenueDetail, ArtistAppearance,
        Artist, ArtistSummary, ArtistDetail, VenueAppearance,
        ShowListing, SearchHit, SearchResults, Notice, NoticeLevel,
        VenueForm, ArtistForm, ShowForm, SearchRequest, NoticeResponse, HomeResponse,
        HealthResponse, ErrorResponse, ErrorBody, WriteFailedResponse,
    )),
    tags(
        (name = "Venues", description = "Venue directory"),
        (name = "Artists", description = "Artist directory"),
        (name = "Shows", description = "Show schedule"),
        (name = "System", description = "Health and service banner"),
    )
)]
pub struct ApiDoc;
