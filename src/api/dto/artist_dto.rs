//! Artist form DTO.

use serde::Deserialize;
use utoipa::ToSchema;

use super::common_dto::non_blank;
use crate::domain::ArtistDraft;

/// Request body for `POST /artists/create` and `POST /artists/{id}/edit`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ArtistForm {
    /// Display name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Genre tags.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Facebook page URL.
    #[serde(default)]
    pub facebook_link: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image_link: Option<String>,
    /// Whether the artist is looking for venues. Absent means `false`.
    #[serde(default)]
    pub seeking_venue: bool,
    /// What the artist is looking for.
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl From<ArtistForm> for ArtistDraft {
    fn from(form: ArtistForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            phone: non_blank(form.phone),
            genres: form.genres,
            website: non_blank(form.website),
            facebook_link: non_blank(form.facebook_link),
            image_link: non_blank(form.image_link),
            seeking_venue: form.seeking_venue,
            seeking_description: non_blank(form.seeking_description),
        }
    }
}
