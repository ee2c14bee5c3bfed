//! Venue form DTO.

use serde::Deserialize;
use utoipa::ToSchema;

use super::common_dto::non_blank;
use crate::domain::VenueDraft;

/// Request body for `POST /venues/create` and `POST /venues/{id}/edit`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VenueForm {
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: String,
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
    /// Whether the venue is looking for talent. Absent means `false`.
    #[serde(default)]
    pub seeking_talent: bool,
    /// What the venue is looking for.
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl From<VenueForm> for VenueDraft {
    fn from(form: VenueForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: non_blank(form.phone),
            genres: form.genres,
            website: non_blank(form.website),
            facebook_link: non_blank(form.facebook_link),
            image_link: non_blank(form.image_link),
            seeking_talent: form.seeking_talent,
            seeking_description: non_blank(form.seeking_description),
        }
    }
}
