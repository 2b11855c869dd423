//! Typed blocking client for the SC2 Arcade API (`https://api.sc2arcade.com`).
//!
//! # Overview
//! Lobby snapshots and history, map listings and details, and player
//! profiles, each fetched with one GET request and deserialized into the
//! matching type from [`types`].
//!
//! # Design
//! - `Sc2ArcadeClient` is stateless: an immutable `base_url` plus a
//!   `Transport`. It is `Send + Sync` and can be shared between threads.
//! - Each endpoint has a pure `build_*` method (produces an `HttpRequest`)
//!   and a `get_*` method (executes it and parses the response), so the I/O
//!   boundary stays explicit and a caller can bring its own HTTP stack.
//! - Optional query parameters live in one struct per endpoint whose
//!   `Default` carries the API's documented defaults.
//! - No caching, retries or pagination; failures surface as [`ApiError`].

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod params;
pub mod types;

pub use client::{parse_response, Sc2ArcadeClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use params::{
    ActiveLobbiesParams, LobbiesHistoryParams, MapDetailsParams, MapPlayerBaseParams,
    MapReviewsParams, MapStatsParams, MapsOrderBy, MapsParams, PlayerBaseOrderBy, ProfilesOrderBy,
    ProfilesParams, ReviewsOrderBy, StatsKind,
};
pub use types::{GameRegion, Locale, LobbyStatus, MapType, OrderDirection, Page, Paginated};
