//! Domain layer: entity records, identifiers, and the pure aggregation
//! logic that turns raw shows into listings and detail pages.
//!
//! Nothing in this module performs I/O or reads the clock. Every function
//! that depends on "now" takes the evaluation instant as a parameter.

pub mod artist;
pub mod ids;
pub mod listing;
pub mod notice;
pub mod show;
pub mod timeline;
pub mod venue;
pub mod view;

pub use artist::{Artist, ArtistDraft};
pub use ids::{ArtistId, ShowId, VenueId};
pub use listing::{ArtistSummary, SearchHit, SearchResults, VenueArea, VenueSummary};
pub use notice::{EntityKind, Notice, NoticeLevel, WriteAction};
pub use show::Show;
pub use timeline::{ShowOwner, ShowTiming};
pub use venue::{Location, Venue, VenueDraft};
pub use view::{ArtistAppearance, ArtistDetail, ShowListing, VenueAppearance, VenueDetail};
