//! Request extractors shared by the resource handlers.

use axum::extract::{FromRequestParts, OriginalUri, Path};
use axum::http::request::Parts;

use crate::error::DirectoryError;

/// Record id taken from the `{id}` path segment.
///
/// A segment that is not a UUID names no record, so it is rejected as
/// [`DirectoryError::RouteNotFound`] with the structured 404 body instead
/// of axum's plain-text 400.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub uuid::Uuid);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = DirectoryError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<uuid::Uuid>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                // Nested routers see the path without their prefix.
                let path = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map_or_else(|| parts.uri.path(), |original| original.0.path())
                    .to_string();
                tracing::debug!(%path, %rejection, "bad record id");
                Err(DirectoryError::RouteNotFound(path))
            }
        }
    }
}
