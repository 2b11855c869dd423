//! Canned SC2 Arcade API used by integration tests.
//!
//! Serves the JSON documents under `fixtures/` on the same paths as the real
//! API. Path-keyed endpoints answer only for the fixture identities below and
//! return 404 for anything else. Every request is appended to a
//! `RequestLog` so tests can assert on what actually went over the wire.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

/// Lobby served by `/lobbies/{regionId}/{bnetBucketId}/{bnetRecordId}`.
pub const LOBBY: (u8, u32, u32) = (2, 100, 555);
/// Map served by every `/maps/{regionId}/{mapId}/...` endpoint.
pub const MAP: (u8, u32) = (2, 208_271);
/// Profile served by `/profiles/{regionId}/{realmId}/{profileId}`.
pub const PROFILE: (u8, u32, u32) = (2, 1, 4_412_871);
/// Same profile, addressed by game id.
pub const PROFILE_GAME_ID: u64 = 8_594_346_439;

const ACTIVE_LOBBIES: &str = include_str!("../fixtures/active_lobbies.json");
const LOBBY_DETAILS: &str = include_str!("../fixtures/lobby_details.json");
const LOBBIES_HISTORY: &str = include_str!("../fixtures/lobbies_history.json");
const MAPS: &str = include_str!("../fixtures/maps.json");
const MAP_BASIC_INFO: &str = include_str!("../fixtures/map_basic_info.json");
const MAP_LOCALES: &str = include_str!("../fixtures/map_locales.json");
const MAP_DETAILS: &str = include_str!("../fixtures/map_details.json");
const MAP_VERSIONS: &str = include_str!("../fixtures/map_versions.json");
const MAP_DEPENDENCIES: &str = include_str!("../fixtures/map_dependencies.json");
const MAP_STATS: &str = include_str!("../fixtures/map_stats.json");
const MAP_PLAYER_BASE: &str = include_str!("../fixtures/map_player_base.json");
const MAP_REVIEWS: &str = include_str!("../fixtures/map_reviews.json");
const MAP_CATEGORIES: &str = include_str!("../fixtures/map_categories.json");
const PROFILES: &str = include_str!("../fixtures/profiles.json");
const PROFILE_DETAIL: &str = include_str!("../fixtures/profile_detail.json");

/// Path and raw query string of one received request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
}

pub type RequestLog = Arc<RwLock<Vec<RecordedRequest>>>;

pub fn app() -> Router {
    app_with_log(RequestLog::default())
}

pub fn app_with_log(log: RequestLog) -> Router {
    Router::new()
        .route("/lobbies/active", get(active_lobbies))
        .route("/lobbies/history", get(lobbies_history))
        .route("/lobbies/{region}/{bucket}/{record}", get(lobby_details))
        .route("/maps", get(maps))
        .route("/maps/categories", get(map_categories))
        .route("/maps/{region}/{map}/{section}", get(map_section))
        .route("/profiles", get(profiles))
        .route("/profiles/{region}/{id}", get(profile_by_game_id))
        .route("/profiles/{region}/{id}/{profile}", get(profile_detail))
        .layer(middleware::from_fn_with_state(log, record))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_log(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_log(log)).await
}

async fn record(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let uri = request.uri();
    let entry = RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
    };
    tracing::debug!(path = %entry.path, query = ?entry.query, "request");
    log.write().await.push(entry);
    next.run(request).await
}

type FixtureResult = Result<Json<Value>, StatusCode>;

fn fixture(raw: &'static str) -> FixtureResult {
    serde_json::from_str(raw)
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

#[derive(Deserialize)]
struct RegionFilter {
    #[serde(rename = "regionId")]
    region_id: Option<u8>,
}

async fn active_lobbies(Query(filter): Query<RegionFilter>) -> FixtureResult {
    let Json(mut lobbies) = fixture(ACTIVE_LOBBIES)?;
    if let (Some(region), Some(list)) = (filter.region_id, lobbies.as_array_mut()) {
        list.retain(|lobby| lobby["regionId"] == region);
    }
    Ok(Json(lobbies))
}

async fn lobbies_history() -> FixtureResult {
    fixture(LOBBIES_HISTORY)
}

async fn lobby_details(Path(key): Path<(u8, u32, u32)>) -> FixtureResult {
    if key != LOBBY {
        return Err(StatusCode::NOT_FOUND);
    }
    fixture(LOBBY_DETAILS)
}

async fn maps() -> FixtureResult {
    fixture(MAPS)
}

async fn map_categories() -> FixtureResult {
    fixture(MAP_CATEGORIES)
}

async fn map_section(Path((region, map, section)): Path<(u8, u32, String)>) -> FixtureResult {
    if (region, map) != MAP {
        return Err(StatusCode::NOT_FOUND);
    }
    let raw = match section.as_str() {
        "basic-info" => MAP_BASIC_INFO,
        "locales" => MAP_LOCALES,
        "details" => MAP_DETAILS,
        "versions" => MAP_VERSIONS,
        "dependencies" => MAP_DEPENDENCIES,
        "stats" => MAP_STATS,
        "player-base" => MAP_PLAYER_BASE,
        "reviews" => MAP_REVIEWS,
        _ => return Err(StatusCode::NOT_FOUND),
    };
    fixture(raw)
}

async fn profiles() -> FixtureResult {
    fixture(PROFILES)
}

async fn profile_detail(Path(key): Path<(u8, u32, u32)>) -> FixtureResult {
    if key != PROFILE {
        return Err(StatusCode::NOT_FOUND);
    }
    fixture(PROFILE_DETAIL)
}

async fn profile_by_game_id(Path((region, game_id)): Path<(u8, u64)>) -> FixtureResult {
    if region != PROFILE.0 || game_id != PROFILE_GAME_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    fixture(PROFILE_DETAIL)
}
