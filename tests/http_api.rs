//! End-to-end tests of the REST API over a real socket, backed by the
//! in-memory store.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as TimeDelta, Utc};
use reqwest::StatusCode;
use serde_json::{Value, json};

use fyyur::api::build_router;
use fyyur::app_state::AppState;
use fyyur::persistence::{DirectoryStore, InMemoryStore};

struct TestServer {
    base: String,
    client: reqwest::Client,
}

impl TestServer {
    async fn spawn() -> Self {
        let store: Arc<dyn DirectoryStore> = Arc::new(InMemoryStore::new());
        let app = build_router(AppState::new(store), Duration::from_secs(5));

        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("failed to bind ephemeral port");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("listener has no local address");
        };
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let Ok(resp) = self.client.get(format!("{}{path}", self.base)).send().await else {
            panic!("GET {path} failed");
        };
        Self::read(resp).await
    }

    async fn post(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let Ok(resp) = self
            .client
            .post(format!("{}{path}", self.base))
            .json(body)
            .send()
            .await
        else {
            panic!("POST {path} failed");
        };
        Self::read(resp).await
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let Ok(resp) = self
            .client
            .delete(format!("{}{path}", self.base))
            .send()
            .await
        else {
            panic!("DELETE {path} failed");
        };
        Self::read(resp).await
    }

    async fn read(resp: reqwest::Response) -> (StatusCode, Value) {
        let status = resp.status();
        let Ok(body) = resp.json::<Value>().await else {
            panic!("response body is not JSON");
        };
        (status, body)
    }

    async fn create_venue(&self, name: &str, city: &str, state: &str) -> String {
        let (status, body) = self
            .post(
                "/api/v1/venues/create",
                &json!({
                    "name": name,
                    "city": city,
                    "state": state,
                    "address": "1015 Folsom Street",
                    "genres": ["Jazz", "Reggae"],
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        id_of(&body)
    }

    async fn create_artist(&self, name: &str) -> String {
        let (status, body) = self
            .post(
                "/api/v1/artists/create",
                &json!({ "name": name, "city": "San Francisco", "state": "CA" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        id_of(&body)
    }
}

fn id_of(body: &Value) -> String {
    let Some(id) = body["id"].as_str() else {
        panic!("response has no id: {body}");
    };
    id.to_string()
}

fn in_days(days: i64) -> String {
    (Utc::now() + TimeDelta::days(days)).to_rfc3339()
}

#[tokio::test]
async fn health_and_home_respond() {
    let server = TestServer::spawn().await;

    let (status, body) = server.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = server.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "fyyur");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = TestServer::spawn().await;
    let (status, body) = server.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/venues"].is_object());
}

#[tokio::test]
async fn create_venue_then_fetch_detail() {
    let server = TestServer::spawn().await;

    let (status, body) = server
        .post(
            "/api/v1/venues/create",
            &json!({
                "name": "The Musical Hop",
                "city": "San Francisco",
                "state": "CA",
                "address": "1015 Folsom Street",
                "phone": "123-123-1234",
                "genres": ["Jazz", "Reggae", "Swing"],
                "website": "https://www.themusicalhop.com",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["notice"]["level"], "success");
    assert_eq!(
        body["notice"]["message"],
        "Venue The Musical Hop was successfully listed!"
    );
    assert_eq!(body["redirect_to"], "/");

    let id = id_of(&body);
    let (status, detail) = server.get(&format!("/api/v1/venues/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["name"], "The Musical Hop");
    assert_eq!(detail["phone"], "123-123-1234");
    assert_eq!(detail["genres"], json!(["Jazz", "Reggae", "Swing"]));
    assert_eq!(detail["seeking_talent"], false);
    assert_eq!(detail["past_shows_count"], 0);
    assert_eq!(detail["upcoming_shows_count"], 0);
}

#[tokio::test]
async fn unknown_ids_and_routes_are_404() {
    let server = TestServer::spawn().await;
    let missing = uuid::Uuid::new_v4();

    let (status, body) = server.get(&format!("/api/v1/venues/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2001);

    let (status, body) = server.get(&format!("/api/v1/artists/{missing}/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2002);

    let (status, body) = server.delete(&format!("/api/v1/venues/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2001);

    let (status, body) = server.get("/api/v1/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2000);
}

#[tokio::test]
async fn malformed_ids_are_404_with_error_body() {
    let server = TestServer::spawn().await;

    let (status, body) = server.get("/api/v1/venues/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2000);
    assert_eq!(body["error"]["message"], "not found: /api/v1/venues/42");

    let (status, body) = server.get("/api/v1/artists/not-a-uuid/edit").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2000);

    let (status, body) = server
        .post(
            "/api/v1/venues/42/edit",
            &json!({ "name": "The Musical Hop" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2000);

    let (status, body) = server.delete("/api/v1/artists/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2000);
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let server = TestServer::spawn().await;
    server
        .create_venue("The Musical Hop", "San Francisco", "CA")
        .await;
    server
        .create_venue("Park Square Live Music & Coffee", "San Francisco", "CA")
        .await;
    server
        .create_venue("The Dueling Pianos Bar", "New York", "NY")
        .await;

    let (status, body) = server
        .post("/api/v1/venues/search", &json!({ "search_term": "hop" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "The Musical Hop");

    let (_, body) = server
        .post("/api/v1/venues/search", &json!({ "search_term": "Music" }))
        .await;
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn shows_drive_counts_and_listings() {
    let server = TestServer::spawn().await;
    let hop = server
        .create_venue("The Musical Hop", "San Francisco", "CA")
        .await;
    let pianos = server
        .create_venue("The Dueling Pianos Bar", "New York", "NY")
        .await;
    let petals = server.create_artist("Guns N Petals").await;

    for (venue, days) in [(&hop, 3), (&hop, -3), (&pianos, 5)] {
        let (status, body) = server
            .post(
                "/api/v1/shows/create",
                &json!({ "artist_id": petals, "venue_id": venue, "start_time": in_days(days) }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body["notice"]["message"],
            format!("Show for Artist ID {petals} was successfully listed!")
        );
    }

    let (_, areas) = server.get("/api/v1/venues").await;
    assert_eq!(areas[0]["city"], "San Francisco");
    assert_eq!(areas[0]["num_upcoming_shows"], 1);
    assert_eq!(areas[1]["city"], "New York");
    assert_eq!(areas[1]["num_upcoming_shows"], 1);

    let (_, detail) = server.get(&format!("/api/v1/artists/{petals}")).await;
    assert_eq!(detail["past_shows_count"], 1);
    assert_eq!(detail["upcoming_shows_count"], 2);
    assert_eq!(detail["upcoming_shows"][0]["venue_name"], "The Musical Hop");

    let (_, shows) = server.get("/api/v1/shows").await;
    let Some(rows) = shows.as_array() else {
        panic!("show list is not an array");
    };
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r["artist_name"] == "Guns N Petals"));

    let (_, hits) = server
        .post(
            "/api/v1/artists/search",
            &json!({ "search_term": "PETALS" }),
        )
        .await;
    assert_eq!(hits["data"][0]["num_upcoming_shows"], 2);
}

#[tokio::test]
async fn invalid_show_input_is_rejected() {
    let server = TestServer::spawn().await;
    let hop = server
        .create_venue("The Musical Hop", "San Francisco", "CA")
        .await;
    let petals = server.create_artist("Guns N Petals").await;

    let (status, body) = server
        .post(
            "/api/v1/shows/create",
            &json!({ "artist_id": petals, "venue_id": hop, "start_time": "soon" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);

    let missing = uuid::Uuid::new_v4();
    let (status, body) = server
        .post(
            "/api/v1/shows/create",
            &json!({
                "artist_id": petals,
                "venue_id": missing,
                "start_time": "2035-04-01 20:00:00"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["notice"]["level"], "error");
    assert_eq!(
        body["notice"]["message"],
        format!("An error occurred. Show for Artist ID {petals} could not be listed.")
    );

    let (_, shows) = server.get("/api/v1/shows").await;
    assert_eq!(shows, json!([]));
}

#[tokio::test]
async fn edit_replaces_fields_and_redirects_to_detail() {
    let server = TestServer::spawn().await;
    let id = server.create_artist("Guns N Petals").await;

    let (status, body) = server
        .post(
            &format!("/api/v1/artists/{id}/edit"),
            &json!({
                "name": "Guns N Roses",
                "city": "Los Angeles",
                "state": "CA",
                "seeking_venue": true,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["notice"]["message"],
        "Artist Guns N Roses was successfully updated!"
    );
    assert_eq!(body["redirect_to"], format!("/api/v1/artists/{id}"));

    let (_, form) = server.get(&format!("/api/v1/artists/{id}/edit")).await;
    assert_eq!(form["name"], "Guns N Roses");
    assert_eq!(form["city"], "Los Angeles");
    assert_eq!(form["seeking_venue"], true);
}

#[tokio::test]
async fn delete_venue_removes_it_and_its_shows() {
    let server = TestServer::spawn().await;
    let hop = server
        .create_venue("The Musical Hop", "San Francisco", "CA")
        .await;
    let petals = server.create_artist("Guns N Petals").await;
    let (status, _) = server
        .post(
            "/api/v1/shows/create",
            &json!({ "artist_id": petals, "venue_id": hop, "start_time": in_days(2) }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = server.delete(&format!("/api/v1/venues/{hop}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["notice"]["message"],
        "Venue The Musical Hop was successfully deleted!"
    );
    assert_eq!(body["redirect_to"], "/");

    let (status, _) = server.get(&format!("/api/v1/venues/{hop}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, detail) = server.get(&format!("/api/v1/artists/{petals}")).await;
    assert_eq!(detail["upcoming_shows_count"], 0);
}
