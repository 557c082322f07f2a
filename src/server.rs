//! # Playlist relay server
//!
//! Serves the same fetch-and-enrich cycle the terminal UI runs, for clients that
//! cannot reach the station pages or the search API themselves.
//!
//! | Path | Description |
//! |------|-------------|
//! | `/api/playlist?station=<id>` | `{"tracks": [...]}` for one station |
//! | `/api/stations` | configured stations with their colours |
//!
//! Playlists are reused per station for `server.cache_secs`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::station::StationRegistry;
use crate::track::{Playlist, Track};

#[derive(Debug, Clone, Serialize)]
struct StationInfo {
    id: String,
    name: String,
    color: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, Deserialize)]
struct PlaylistQuery {
    station: Option<String>,
}

struct CachedPlaylist {
    fetched_at: Instant,
    tracks: Vec<Track>,
}

/// Shared state passed to all request handlers.
#[derive(Clone)]
struct ServerState {
    pipeline: Pipeline,
    registry: Arc<StationRegistry>,
    cache: Arc<Mutex<HashMap<String, CachedPlaylist>>>,
    cache_ttl: Duration,
}

impl ServerState {
    fn cached(&self, station_id: &str) -> Option<Vec<Track>> {
        if self.cache_ttl.is_zero() {
            return None;
        }
        let cache = self.cache.lock().ok()?;
        cache
            .get(station_id)
            .filter(|entry| entry.fetched_at.elapsed() < self.cache_ttl)
            .map(|entry| entry.tracks.clone())
    }

    fn store(&self, station_id: &str, tracks: &[Track]) {
        if self.cache_ttl.is_zero() {
            return;
        }
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(
                station_id.to_string(),
                CachedPlaylist {
                    fetched_at: Instant::now(),
                    tracks: tracks.to_vec(),
                },
            );
        }
    }
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

/// Build the router serving the relay endpoints.
pub fn router(pipeline: Pipeline) -> Router {
    let settings = pipeline.settings();
    let state = ServerState {
        registry: Arc::new(StationRegistry::new(settings.stations.clone())),
        cache_ttl: Duration::from_secs(settings.server.cache_secs),
        cache: Arc::new(Mutex::new(HashMap::new())),
        pipeline,
    };

    Router::new()
        .route("/api/playlist", get(handle_playlist))
        .route("/api/stations", get(handle_stations))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(pipeline: Pipeline, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(pipeline)).await?;
    Ok(())
}

/// Handles `/api/playlist`. Without `station` the default station is served.
async fn handle_playlist(
    State(state): State<ServerState>,
    Query(query): Query<PlaylistQuery>,
) -> Response {
    let id = query
        .station
        .unwrap_or_else(|| state.pipeline.settings().default_station.clone());
    let Some(station) = state.registry.find(&id) else {
        return error_response(StatusCode::NOT_FOUND, "Unknown station");
    };

    if let Some(tracks) = state.cached(&station.id) {
        log::debug!("serving cached playlist for {}", station.id);
        return Json(Playlist { tracks }).into_response();
    }

    match state.pipeline.try_fetch_playlist(station).await {
        Ok(tracks) => {
            state.store(&station.id, &tracks);
            Json(Playlist { tracks }).into_response()
        }
        Err(err) => {
            log::error!("error scraping {} playlist: {err}", station.name);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch playlist")
        }
    }
}

/// Handles `/api/stations`.
async fn handle_stations(State(state): State<ServerState>) -> Json<Vec<StationInfo>> {
    Json(
        state
            .registry
            .all()
            .iter()
            .map(|s| StationInfo {
                id: s.id.clone(),
                name: s.name.clone(),
                color: s.color.clone(),
            })
            .collect(),
    )
}
