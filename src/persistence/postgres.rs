//! PostgreSQL implementation of [`DirectoryStore`].

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool, Postgres, Transaction};
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::DirectoryStore;
use super::models::{ArtistRow, LocationRow, ShowRow, VenueRow};
use crate::config::DirectoryConfig;
use crate::domain::{Artist, ArtistId, Location, Show, Venue, VenueId};
use crate::error::DirectoryError;

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, website, \
     facebook_link, image_link, seeking_talent, seeking_description";

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, website, \
     facebook_link, image_link, seeking_venue, seeking_description";

const SHOW_COLUMNS: &str = "id, artist_id, venue_id, start_time";

fn persistence(err: sqlx::Error) -> DirectoryError {
    DirectoryError::PersistenceError(err.to_string())
}

/// Builds an `ILIKE` pattern matching `term` anywhere in the column.
/// `%`, `_` and `\` in the term match literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// PostgreSQL-backed directory store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError::PersistenceError`] if the URL is invalid
    /// or the database is unreachable.
    pub async fn connect(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let options = PgConnectOptions::from_str(&config.database_url)
            .map_err(persistence)?
            .log_statements(LevelFilter::Debug);

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_with(options)
            .await
            .map_err(persistence)?;

        tracing::info!(
            max_connections = config.database_max_connections,
            "connected to PostgreSQL"
        );
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError::PersistenceError`] if a migration fails.
    pub async fn run_migrations(&self) -> Result<(), DirectoryError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| DirectoryError::PersistenceError(e.to_string()))?;
        tracing::info!("database migrations applied");
        Ok(())
    }

    /// Begins a write transaction. Dropping it without `commit` rolls back
    /// and returns the connection to the pool.
    async fn begin(&self) -> Result<Transaction<'static, Postgres>, DirectoryError> {
        self.pool.begin().await.map_err(persistence)
    }

    async fn fetch_venues(
        &self,
        sql: &str,
        bind: Option<String>,
    ) -> Result<Vec<Venue>, DirectoryError> {
        let query = sqlx::query_as::<_, VenueRow>(sql);
        let query = match bind {
            Some(value) => query.bind(value),
            None => query,
        };
        let rows = query.fetch_all(&self.pool).await.map_err(persistence)?;
        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn fetch_artists(
        &self,
        sql: &str,
        bind: Option<String>,
    ) -> Result<Vec<Artist>, DirectoryError> {
        let query = sqlx::query_as::<_, ArtistRow>(sql);
        let query = match bind {
            Some(value) => query.bind(value),
            None => query,
        };
        let rows = query.fetch_all(&self.pool).await.map_err(persistence)?;
        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn fetch_shows(
        &self,
        sql: &str,
        bind: Option<Uuid>,
    ) -> Result<Vec<Show>, DirectoryError> {
        let query = sqlx::query_as::<_, ShowRow>(sql);
        let query = match bind {
            Some(value) => query.bind(value),
            None => query,
        };
        let rows = query.fetch_all(&self.pool).await.map_err(persistence)?;
        Ok(rows.into_iter().map(Show::from).collect())
    }
}

#[async_trait]
impl DirectoryStore for PostgresStore {
    async fn venue(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, VenueRow>(&sql)
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?
            .map(Venue::from)
            .ok_or(DirectoryError::VenueNotFound(id))
    }

    async fn venues_by_ids(
        &self,
        ids: &[VenueId],
    ) -> Result<HashMap<VenueId, Venue>, DirectoryError> {
        let ids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;
        Ok(rows
            .into_iter()
            .map(Venue::from)
            .map(|venue| (venue.id, venue))
            .collect())
    }

    async fn list_venues(&self) -> Result<Vec<Venue>, DirectoryError> {
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venues ORDER BY name, id");
        self.fetch_venues(&sql, None).await
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, DirectoryError> {
        let sql =
            format!("SELECT {VENUE_COLUMNS} FROM venues WHERE name ILIKE $1 ORDER BY name, id");
        self.fetch_venues(&sql, Some(contains_pattern(term))).await
    }

    async fn venue_locations(&self) -> Result<Vec<Location>, DirectoryError> {
        let rows = sqlx::query_as::<_, LocationRow>(
            "SELECT DISTINCT city, state FROM venues ORDER BY state, city",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(persistence)?;
        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn insert_venue(&self, venue: &Venue) -> Result<(), DirectoryError> {
        let mut tx = self.begin().await?;
        sqlx::query(
            "INSERT INTO venues (id, name, city, state, address, phone, genres, website, \
             facebook_link, image_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(*venue.id.as_uuid())
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.genres)
        .bind(&venue.website)
        .bind(&venue.facebook_link)
        .bind(&venue.image_link)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .execute(&mut *tx)
        .await
        .map_err(persistence)?;
        tx.commit().await.map_err(persistence)
    }

    async fn update_venue(&self, venue: &Venue) -> Result<(), DirectoryError> {
        let mut tx = self.begin().await?;
        let result = sqlx::query(
            "UPDATE venues SET name = $2, city = $3, state = $4, address = $5, phone = $6, \
             genres = $7, website = $8, facebook_link = $9, image_link = $10, \
             seeking_talent = $11, seeking_description = $12 \
             WHERE id = $1",
        )
        .bind(*venue.id.as_uuid())
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.genres)
        .bind(&venue.website)
        .bind(&venue.facebook_link)
        .bind(&venue.image_link)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .execute(&mut *tx)
        .await
        .map_err(persistence)?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::VenueNotFound(venue.id));
        }
        tx.commit().await.map_err(persistence)
    }

    async fn delete_venue(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        let mut tx = self.begin().await?;
        let sql = format!("DELETE FROM venues WHERE id = $1 RETURNING {VENUE_COLUMNS}");
        let deleted = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(*id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(persistence)?
            .map(Venue::from)
            .ok_or(DirectoryError::VenueNotFound(id))?;
        tx.commit().await.map_err(persistence)?;
        Ok(deleted)
    }

    async fn artist(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?
            .map(Artist::from)
            .ok_or(DirectoryError::ArtistNotFound(id))
    }

    async fn artists_by_ids(
        &self,
        ids: &[ArtistId],
    ) -> Result<HashMap<ArtistId, Artist>, DirectoryError> {
        let ids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;
        Ok(rows
            .into_iter()
            .map(Artist::from)
            .map(|artist| (artist.id, artist))
            .collect())
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, DirectoryError> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists ORDER BY name, id");
        self.fetch_artists(&sql, None).await
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, DirectoryError> {
        let sql =
            format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE name ILIKE $1 ORDER BY name, id");
        self.fetch_artists(&sql, Some(contains_pattern(term))).await
    }

    async fn insert_artist(&self, artist: &Artist) -> Result<(), DirectoryError> {
        let mut tx = self.begin().await?;
        sqlx::query(
            "INSERT INTO artists (id, name, city, state, phone, genres, website, \
             facebook_link, image_link, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(*artist.id.as_uuid())
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.genres)
        .bind(&artist.website)
        .bind(&artist.facebook_link)
        .bind(&artist.image_link)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .execute(&mut *tx)
        .await
        .map_err(persistence)?;
        tx.commit().await.map_err(persistence)
    }

    async fn update_artist(&self, artist: &Artist) -> Result<(), DirectoryError> {
        let mut tx = self.begin().await?;
        let result = sqlx::query(
            "UPDATE artists SET name = $2, city = $3, state = $4, phone = $5, genres = $6, \
             website = $7, facebook_link = $8, image_link = $9, seeking_venue = $10, \
             seeking_description = $11 \
             WHERE id = $1",
        )
        .bind(*artist.id.as_uuid())
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.genres)
        .bind(&artist.website)
        .bind(&artist.facebook_link)
        .bind(&artist.image_link)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .execute(&mut *tx)
        .await
        .map_err(persistence)?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::ArtistNotFound(artist.id));
        }
        tx.commit().await.map_err(persistence)
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        let mut tx = self.begin().await?;
        let sql = format!("DELETE FROM artists WHERE id = $1 RETURNING {ARTIST_COLUMNS}");
        let deleted = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(*id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(persistence)?
            .map(Artist::from)
            .ok_or(DirectoryError::ArtistNotFound(id))?;
        tx.commit().await.map_err(persistence)?;
        Ok(deleted)
    }

    async fn list_shows(&self) -> Result<Vec<Show>, DirectoryError> {
        let sql = format!("SELECT {SHOW_COLUMNS} FROM shows ORDER BY start_time, id");
        self.fetch_shows(&sql, None).await
    }

    async fn shows_for_venue(&self, id: VenueId) -> Result<Vec<Show>, DirectoryError> {
        let sql =
            format!("SELECT {SHOW_COLUMNS} FROM shows WHERE venue_id = $1 ORDER BY start_time, id");
        self.fetch_shows(&sql, Some(*id.as_uuid())).await
    }

    async fn shows_for_artist(&self, id: ArtistId) -> Result<Vec<Show>, DirectoryError> {
        let sql = format!(
            "SELECT {SHOW_COLUMNS} FROM shows WHERE artist_id = $1 ORDER BY start_time, id"
        );
        self.fetch_shows(&sql, Some(*id.as_uuid())).await
    }

    async fn insert_show(&self, show: &Show) -> Result<(), DirectoryError> {
        let mut tx = self.begin().await?;
        sqlx::query(
            "INSERT INTO shows (id, artist_id, venue_id, start_time) VALUES ($1, $2, $3, $4)",
        )
        .bind(*show.id.as_uuid())
        .bind(*show.artist_id.as_uuid())
        .bind(*show.venue_id.as_uuid())
        .bind(show.start_time)
        .execute(&mut *tx)
        .await
        .map_err(persistence)?;
        tx.commit().await.map_err(persistence)
    }
}
