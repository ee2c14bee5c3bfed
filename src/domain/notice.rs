//! Flash-style notices reporting the outcome of a write.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// Kind of entity a write was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A venue.
    Venue,
    /// An artist.
    Artist,
    /// A show.
    Show,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Venue => "Venue",
            Self::Artist => "Artist",
            Self::Show => "Show",
        })
    }
}

/// The write that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// Create.
    Listed,
    /// Edit.
    Updated,
    /// Delete.
    Deleted,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Listed => "listed",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        })
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// The write was committed.
    Success,
    /// The write was rolled back.
    Error,
}

/// A transient user-facing message, shown once after a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Notice {
    /// Outcome of the write.
    pub level: NoticeLevel,
    /// Human-readable message naming the entity and the action.
    pub message: String,
}

impl Notice {
    /// `"Venue The Musical Hop was successfully listed!"`
    #[must_use]
    pub fn success(kind: EntityKind, subject: &str, action: WriteAction) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: format!("{kind} {subject} was successfully {action}!"),
        }
    }

    /// `"An error occurred. Venue The Musical Hop could not be listed."`
    #[must_use]
    pub fn failure(kind: EntityKind, subject: &str, action: WriteAction) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: format!("An error occurred. {kind} {subject} could not be {action}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message() {
        let notice = Notice::success(EntityKind::Venue, "The Musical Hop", WriteAction::Listed);
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(
            notice.message,
            "Venue The Musical Hop was successfully listed!"
        );
    }

    #[test]
    fn failure_message() {
        let notice = Notice::failure(EntityKind::Artist, "Guns N Petals", WriteAction::Updated);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(
            notice.message,
            "An error occurred. Artist Guns N Petals could not be updated."
        );
    }

    #[test]
    fn show_subject_reads_naturally() {
        let notice = Notice::success(EntityKind::Show, "for Artist ID 42", WriteAction::Listed);
        assert_eq!(
            notice.message,
            "Show for Artist ID 42 was successfully listed!"
        );
    }
}
