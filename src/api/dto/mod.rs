//! Data Transfer Objects for REST request/response serialization.
//!
//! Form DTOs mirror the submitted fields one-to-one and convert into the
//! domain drafts. Unchecked booleans and omitted lists take their empty
//! value.

pub mod artist_dto;
pub mod common_dto;
pub mod show_dto;
pub mod venue_dto;

pub use artist_dto::*;
pub use common_dto::*;
pub use show_dto::*;
pub use venue_dto::*;
