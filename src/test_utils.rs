//! Test utilities and fixtures for artist-stats tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{spawn_stub, write_temp_file};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let env = write_temp_file("ACCESS_TOKEN=abc\n");
//!     let base_url = spawn_stub(router).await;
//!     // ... test logic
//! }
//! ```

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tempfile::NamedTempFile;

use crate::genius::dto::{
    Artist, ArtistEnvelope, ArtistResponse, ArtistSummary, Hit, HitResult, Meta,
};

/// Write `contents` to a temp file that lives as long as the handle.
pub fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// A song hit whose primary artist is `artist_id`.
pub fn song_hit(artist_id: u64, artist_name: &str) -> Hit {
    Hit {
        hit_type: Some("song".to_string()),
        index: Some("song".to_string()),
        result: Some(HitResult {
            id: Some(artist_id * 1000),
            title: Some(format!("Greatest Hit by {}", artist_name)),
            full_title: None,
            url: None,
            primary_artist: Some(ArtistSummary {
                id: Some(artist_id),
                name: Some(artist_name.to_string()),
                url: None,
            }),
        }),
    }
}

/// A successful `/artists/:id` envelope.
pub fn artist_envelope(id: u64, name: &str, followers: Option<u64>) -> ArtistEnvelope {
    ArtistEnvelope {
        meta: Meta {
            status: 200,
            message: None,
        },
        response: ArtistResponse {
            artist: Some(Artist {
                id: Some(id),
                name: Some(name.to_string()),
                followers_count: followers,
                url: None,
                image_url: None,
                is_verified: None,
            }),
        },
    }
}

/// Fake Genius API serving `(query, artist id, artist name, followers)`.
///
/// `/search?q=` returns one hit for a known query and none otherwise;
/// `/artists/{id}` returns the artist or a 404 envelope.
pub fn genius_stub(catalog: &[(&str, u64, &str, Option<u64>)]) -> Router {
    let by_query: Arc<HashMap<String, (u64, String, Option<u64>)>> = Arc::new(
        catalog
            .iter()
            .map(|(q, id, name, followers)| (q.to_string(), (*id, name.to_string(), *followers)))
            .collect(),
    );
    let by_id = by_query.clone();

    Router::new()
        .route(
            "/search",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let by_query = by_query.clone();
                async move {
                    let q = params.get("q").cloned().unwrap_or_default();
                    let hits: Vec<serde_json::Value> = by_query
                        .get(&q)
                        .map(|(id, name, _)| {
                            vec![json!({
                                "type": "song",
                                "result": {
                                    "id": id * 1000,
                                    "title": format!("Greatest Hit by {}", name),
                                    "primary_artist": {"id": id, "name": name}
                                }
                            })]
                        })
                        .unwrap_or_default();
                    Json(json!({"meta": {"status": 200}, "response": {"hits": hits}}))
                }
            }),
        )
        .route(
            "/artists/{id}",
            get(move |Path(id): Path<u64>| {
                let by_id = by_id.clone();
                async move {
                    match by_id.values().find(|(artist_id, _, _)| *artist_id == id) {
                        Some((artist_id, name, followers)) => (
                            StatusCode::OK,
                            Json(json!({
                                "meta": {"status": 200},
                                "response": {"artist": {
                                    "id": artist_id,
                                    "name": name,
                                    "followers_count": followers
                                }}
                            })),
                        ),
                        None => (
                            StatusCode::NOT_FOUND,
                            Json(json!({"meta": {"status": 404, "message": "Not found"}})),
                        ),
                    }
                }
            }),
        )
}

/// Serve `app` on an ephemeral local port and return its base URL.
///
/// The server task runs until the test's runtime shuts down.
pub async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_temp_file() {
        let file = write_temp_file("hello");
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "hello");
    }

    #[test]
    fn test_song_hit_primary_artist() {
        let hit = song_hit(604, "Radiohead");
        assert_eq!(hit.primary_artist_id(), Some(604));
    }

    #[tokio::test]
    async fn test_spawn_stub_serves() {
        let app = Router::new().route("/ping", get(|| async { "pong" }));
        let base = spawn_stub(app).await;

        let body = reqwest::get(format!("{}/ping", base))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "pong");
    }

    #[tokio::test]
    async fn test_genius_stub_unknown_artist_is_404() {
        let base = spawn_stub(genius_stub(&[])).await;
        let status = reqwest::get(format!("{}/artists/1", base))
            .await
            .unwrap()
            .status();
        assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    }
}
