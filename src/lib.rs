//! # fyyur
//!
//! REST API for a booking directory of venues, artists and the shows that
//! connect them.
//!
//! The crate serves listings grouped by location, case-insensitive name
//! search, detail pages that split shows into past and upcoming relative
//! to the request instant, and transactional create/edit/delete writes
//! that answer with a user-facing notice.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── VenueService / ArtistService / ShowService (service/)
//!     ├── Aggregation and view models (domain/)
//!     │
//!     └── DirectoryStore (persistence/)
//!           ├── PostgresStore
//!           └── InMemoryStore
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
