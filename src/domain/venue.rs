//! Venue records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::VenueId;

/// A venue listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Venue {
    /// Stable identity.
    pub id: VenueId,
    /// Display name. Not unique.
    pub name: String,
    /// City the venue is located in.
    pub city: String,
    /// State (or region) the venue is located in.
    pub state: String,
    /// Street address.
    pub address: String,
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
    /// Whether the venue is looking for performers.
    pub seeking_talent: bool,
    /// Free text describing what the venue is looking for.
    pub seeking_description: Option<String>,
}

/// Every editable venue field, as submitted through a create or edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenueDraft {
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: String,
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
    /// Whether the venue is looking for performers.
    pub seeking_talent: bool,
    /// What the venue is looking for.
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Builds a venue record with the given identity from a draft.
    #[must_use]
    pub fn from_draft(id: VenueId, draft: VenueDraft) -> Self {
        Self {
            id,
            name: draft.name,
            city: draft.city,
            state: draft.state,
            address: draft.address,
            phone: draft.phone,
            genres: draft.genres,
            website: draft.website,
            facebook_link: draft.facebook_link,
            image_link: draft.image_link,
            seeking_talent: draft.seeking_talent,
            seeking_description: draft.seeking_description,
        }
    }

    /// Returns the (city, state) pair this venue is grouped under.
    #[must_use]
    pub fn location(&self) -> Location {
        Location {
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}

/// A distinct (city, state) pair among venues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct Location {
    /// City.
    pub city: String,
    /// State.
    pub state: String,
}

impl Location {
    /// Creates a location from its parts.
    #[must_use]
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }

    /// Returns `true` if the venue is located here.
    #[must_use]
    pub fn contains(&self, venue: &Venue) -> bool {
        self.city == venue.city && self.state == venue.state
    }
}
