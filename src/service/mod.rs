//! Service layer: read models and transactional writes.
//!
//! Each service holds the shared [`DirectoryStore`]. Reads take the
//! evaluation instant from the caller; writes turn a rolled-back
//! transaction into a [`DirectoryError::WriteFailed`] carrying the notice
//! the user should see.

pub mod artist_service;
pub mod show_service;
pub mod venue_service;

pub use artist_service::ArtistService;
pub use show_service::ShowService;
pub use venue_service::VenueService;

use crate::domain::{EntityKind, Notice, WriteAction};
use crate::error::DirectoryError;

/// Maps a storage failure at a write boundary to a failure notice.
///
/// Not-found and other non-storage errors pass through unchanged.
fn write_failure(
    err: DirectoryError,
    kind: EntityKind,
    subject: &str,
    action: WriteAction,
) -> DirectoryError {
    match err {
        DirectoryError::PersistenceError(reason) => {
            tracing::warn!(entity = %kind, subject, %action, %reason, "write rolled back");
            DirectoryError::WriteFailed {
                notice: Notice::failure(kind, subject, action),
            }
        }
        other => other,
    }
}
