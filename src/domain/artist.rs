//! Artist records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ArtistId;

/// An artist listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Artist {
    /// Stable identity.
    pub id: ArtistId,
    /// Display name. Not unique.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genre tags, in the order they were submitted.
    pub genres: Vec<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Facebook page URL.
    pub facebook_link: Option<String>,
    /// Image URL used on listing pages.
    pub image_link: Option<String>,
    /// Whether the artist is looking for venues.
    pub seeking_venue: bool,
    /// Free text describing what the artist is looking for.
    pub seeking_description: Option<String>,
}

/// Every editable artist field, as submitted through a create or edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtistDraft {
    /// Display name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genre tags.
    pub genres: Vec<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Facebook page URL.
    pub facebook_link: Option<String>,
    /// Image URL.
    pub image_link: Option<String>,
    /// Whether the artist is looking for venues.
    pub seeking_venue: bool,
    /// What the artist is looking for.
    pub seeking_description: Option<String>,
}

impl Artist {
    /// Builds an artist record with the given identity from a draft.
    #[must_use]
    pub fn from_draft(id: ArtistId, draft: ArtistDraft) -> Self {
        Self {
            id,
            name: draft.name,
            city: draft.city,
            state: draft.state,
            phone: draft.phone,
            genres: draft.genres,
            website: draft.website,
            facebook_link: draft.facebook_link,
            image_link: draft.image_link,
            seeking_venue: draft.seeking_venue,
            seeking_description: draft.seeking_description,
        }
    }
}
