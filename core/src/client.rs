//! Request builder, response parser and executing client for the SC2 Arcade API.
//!
//! # Design
//! `Sc2ArcadeClient` holds only a `base_url` and a `Transport`; it carries no
//! mutable state between calls, so one client can be shared across threads.
//! Every endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `get_*` method that executes it through the transport
//! and hands the response to `parse_response`. Callers that run their own
//! HTTP stack can use `build_*` and `parse_response` directly.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::params::{
    ActiveLobbiesParams, LobbiesHistoryParams, MapDetailsParams, MapPlayerBaseParams,
    MapReviewsParams, MapStatsParams, MapsParams, ProfilesParams,
};
use crate::types::{
    ActiveLobby, GameRegion, LobbiesHistoryResponse, LobbyDetails, MapBasicInfo,
    MapCategoriesResponse, MapDependencies, MapDetails, MapLocalesResponse, MapPlayerBaseResponse,
    MapReviewsResponse, MapStats, MapVersions, MapsResponse, ProfileDetail, ProfilesResponse,
};

/// Client for the SC2 Arcade API.
///
/// ```no_run
/// use sc2arcade_core::{ActiveLobbiesParams, GameRegion, Sc2ArcadeClient};
///
/// let client = Sc2ArcadeClient::new();
/// let lobbies = client.get_active_lobbies(&ActiveLobbiesParams {
///     region_id: Some(GameRegion::Eu),
///     ..ActiveLobbiesParams::default()
/// })?;
/// println!("{} open lobbies", lobbies.len());
/// # Ok::<(), sc2arcade_core::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sc2ArcadeClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl Sc2ArcadeClient<UreqTransport> {
    /// Client for the production API with transport defaults.
    pub fn new() -> Self {
        Self::with_transport(DEFAULT_BASE_URL, UreqTransport::default())
    }

    /// # Errors
    /// Returns `ApiError::Config` if the configuration is invalid or the
    /// transport cannot be built from it.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let transport = UreqTransport::new(config)?;
        Ok(Self::with_transport(&config.base_url, transport))
    }
}

impl Default for Sc2ArcadeClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Sc2ArcadeClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn fetch<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url(), "sending request");
        let response = self.transport.execute(&request)?;
        debug!(status = response.status, bytes = response.body.len(), "received response");
        parse_response(response)
    }

    // -- lobbies ------------------------------------------------------------

    pub fn build_active_lobbies(&self, params: &ActiveLobbiesParams) -> HttpRequest {
        HttpRequest::get(self.url("/lobbies/active"), params.query())
    }

    pub fn build_lobbies_details(
        &self,
        region_id: GameRegion,
        bnet_bucket_id: u32,
        bnet_record_id: u32,
    ) -> HttpRequest {
        HttpRequest::get(
            self.url(&format!("/lobbies/{region_id}/{bnet_bucket_id}/{bnet_record_id}")),
            Vec::new(),
        )
    }

    pub fn build_lobbies_history(&self, params: &LobbiesHistoryParams) -> HttpRequest {
        HttpRequest::get(self.url("/lobbies/history"), params.query())
    }

    /// Open and recently closed lobbies.
    ///
    /// # Errors
    /// Transport, status and deserialization failures, see [`ApiError`].
    pub fn get_active_lobbies(
        &self,
        params: &ActiveLobbiesParams,
    ) -> Result<Vec<ActiveLobby>, ApiError> {
        self.fetch(self.build_active_lobbies(params))
    }

    /// # Errors
    /// `ApiError::NotFound` if the lobby is unknown; see [`ApiError`].
    pub fn get_lobbies_details(
        &self,
        region_id: GameRegion,
        bnet_bucket_id: u32,
        bnet_record_id: u32,
    ) -> Result<LobbyDetails, ApiError> {
        self.fetch(self.build_lobbies_details(region_id, bnet_bucket_id, bnet_record_id))
    }

    /// Match result of a lobby. Not supported: always fails without issuing
    /// a request.
    ///
    /// # Errors
    /// Always `ApiError::NotImplemented`.
    pub fn get_lobbies_match(
        &self,
        region_id: GameRegion,
        bnet_bucket_id: u32,
        bnet_record_id: u32,
    ) -> Result<serde_json::Value, ApiError> {
        debug!(%region_id, bnet_bucket_id, bnet_record_id, "lobby match requested");
        Err(ApiError::NotImplemented("get_lobbies_match"))
    }

    /// History of public lobbies, newest first by default.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub fn get_lobbies_history(
        &self,
        params: &LobbiesHistoryParams,
    ) -> Result<LobbiesHistoryResponse, ApiError> {
        self.fetch(self.build_lobbies_history(params))
    }

    // -- maps ---------------------------------------------------------------

    fn map_url(&self, region_id: GameRegion, map_id: u32, section: &str) -> String {
        self.url(&format!("/maps/{region_id}/{map_id}/{section}"))
    }

    pub fn build_maps(&self, params: &MapsParams) -> HttpRequest {
        HttpRequest::get(self.url("/maps"), params.query())
    }

    pub fn build_maps_basic_info(&self, region_id: GameRegion, map_id: u32) -> HttpRequest {
        HttpRequest::get(self.map_url(region_id, map_id, "basic-info"), Vec::new())
    }

    pub fn build_maps_locales(&self, region_id: GameRegion, map_id: u32) -> HttpRequest {
        HttpRequest::get(self.map_url(region_id, map_id, "locales"), Vec::new())
    }

    /// `params` does not influence the request; see [`MapDetailsParams`].
    pub fn build_maps_details(
        &self,
        region_id: GameRegion,
        map_id: u32,
        _params: &MapDetailsParams,
    ) -> HttpRequest {
        HttpRequest::get(self.map_url(region_id, map_id, "details"), Vec::new())
    }

    pub fn build_maps_versions(&self, region_id: GameRegion, map_id: u32) -> HttpRequest {
        HttpRequest::get(self.map_url(region_id, map_id, "versions"), Vec::new())
    }

    pub fn build_maps_dependencies(&self, region_id: GameRegion, map_id: u32) -> HttpRequest {
        HttpRequest::get(self.map_url(region_id, map_id, "dependencies"), Vec::new())
    }

    pub fn build_maps_stats(
        &self,
        region_id: GameRegion,
        map_id: u32,
        params: &MapStatsParams,
    ) -> HttpRequest {
        HttpRequest::get(self.map_url(region_id, map_id, "stats"), params.query())
    }

    pub fn build_maps_player_base(
        &self,
        region_id: GameRegion,
        map_id: u32,
        params: &MapPlayerBaseParams,
    ) -> HttpRequest {
        HttpRequest::get(self.map_url(region_id, map_id, "player-base"), params.query())
    }

    pub fn build_maps_reviews(
        &self,
        region_id: GameRegion,
        map_id: u32,
        params: &MapReviewsParams,
    ) -> HttpRequest {
        HttpRequest::get(self.map_url(region_id, map_id, "reviews"), params.query())
    }

    pub fn build_map_categories(&self) -> HttpRequest {
        HttpRequest::get(self.url("/maps/categories"), Vec::new())
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps(&self, params: &MapsParams) -> Result<MapsResponse, ApiError> {
        self.fetch(self.build_maps(params))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps_basic_info(
        &self,
        region_id: GameRegion,
        map_id: u32,
    ) -> Result<MapBasicInfo, ApiError> {
        self.fetch(self.build_maps_basic_info(region_id, map_id))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps_locales(
        &self,
        region_id: GameRegion,
        map_id: u32,
    ) -> Result<MapLocalesResponse, ApiError> {
        self.fetch(self.build_maps_locales(region_id, map_id))
    }

    /// Rich details about a map's current version.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps_details(
        &self,
        region_id: GameRegion,
        map_id: u32,
        params: &MapDetailsParams,
    ) -> Result<MapDetails, ApiError> {
        self.fetch(self.build_maps_details(region_id, map_id, params))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps_versions(
        &self,
        region_id: GameRegion,
        map_id: u32,
    ) -> Result<MapVersions, ApiError> {
        self.fetch(self.build_maps_versions(region_id, map_id))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps_dependencies(
        &self,
        region_id: GameRegion,
        map_id: u32,
    ) -> Result<MapDependencies, ApiError> {
        self.fetch(self.build_maps_dependencies(region_id, map_id))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps_stats(
        &self,
        region_id: GameRegion,
        map_id: u32,
        params: &MapStatsParams,
    ) -> Result<MapStats, ApiError> {
        self.fetch(self.build_maps_stats(region_id, map_id, params))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps_player_base(
        &self,
        region_id: GameRegion,
        map_id: u32,
        params: &MapPlayerBaseParams,
    ) -> Result<MapPlayerBaseResponse, ApiError> {
        self.fetch(self.build_maps_player_base(region_id, map_id, params))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_maps_reviews(
        &self,
        region_id: GameRegion,
        map_id: u32,
        params: &MapReviewsParams,
    ) -> Result<MapReviewsResponse, ApiError> {
        self.fetch(self.build_maps_reviews(region_id, map_id, params))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_map_categories(&self) -> Result<MapCategoriesResponse, ApiError> {
        self.fetch(self.build_map_categories())
    }

    // -- profiles -----------------------------------------------------------

    pub fn build_profiles(&self, params: &ProfilesParams) -> HttpRequest {
        HttpRequest::get(self.url("/profiles"), params.query())
    }

    pub fn build_profile_detail(
        &self,
        region_id: GameRegion,
        realm_id: u32,
        profile_id: u32,
    ) -> HttpRequest {
        HttpRequest::get(
            self.url(&format!("/profiles/{region_id}/{realm_id}/{profile_id}")),
            Vec::new(),
        )
    }

    pub fn build_profile_detail_via_game_id(
        &self,
        region_id: GameRegion,
        profile_game_id: u64,
    ) -> HttpRequest {
        HttpRequest::get(
            self.url(&format!("/profiles/{region_id}/{profile_game_id}")),
            Vec::new(),
        )
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_profiles(&self, params: &ProfilesParams) -> Result<ProfilesResponse, ApiError> {
        self.fetch(self.build_profiles(params))
    }

    /// # Errors
    /// See [`ApiError`].
    pub fn get_profile_detail(
        &self,
        region_id: GameRegion,
        realm_id: u32,
        profile_id: u32,
    ) -> Result<ProfileDetail, ApiError> {
        self.fetch(self.build_profile_detail(region_id, realm_id, profile_id))
    }

    /// Profile lookup by the single numeric id the game client uses.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub fn get_profile_detail_via_game_id(
        &self,
        region_id: GameRegion,
        profile_game_id: u64,
    ) -> Result<ProfileDetail, ApiError> {
        self.fetch(self.build_profile_detail_via_game_id(region_id, profile_game_id))
    }
}

/// Map a response to `R`: any 2xx body is parsed as JSON, 404 becomes
/// `NotFound`, everything else `Http`.
///
/// # Errors
/// See [`ApiError`].
pub fn parse_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    warn!(status = response.status, "request failed");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::http::HttpMethod;
    use crate::params::{MapsOrderBy, StatsKind};
    use crate::types::{Locale, OrderDirection};

    const BASE: &str = "http://localhost:3000";

    /// Records every request and answers with a fixed response.
    struct SpyTransport {
        calls: Mutex<Vec<HttpRequest>>,
        status: u16,
        body: String,
    }

    impl SpyTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                status,
                body: body.to_string(),
            }
        }

        fn calls(&self) -> Vec<HttpRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for SpyTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.calls.lock().unwrap().push(request.clone());
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.clone(),
            })
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Transport("connection refused".into()))
        }
    }

    fn client() -> Sc2ArcadeClient<SpyTransport> {
        Sc2ArcadeClient::with_transport(BASE, SpyTransport::new(200, "[]"))
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn default_client_targets_production() {
        let client = Sc2ArcadeClient::new();
        assert_eq!(client.base_url(), "https://api.sc2arcade.com");
        let req = client.build_map_categories();
        assert_eq!(req.path, "https://api.sc2arcade.com/maps/categories");
    }

    #[test]
    fn from_config_uses_configured_origin() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9000/");
        let client = Sc2ArcadeClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn from_config_rejects_invalid_config() {
        let config = ClientConfig::with_base_url("api.sc2arcade.com");
        assert!(matches!(
            Sc2ArcadeClient::from_config(&config),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn lobby_details_path_is_interpolated_in_order() {
        let req = client().build_lobbies_details(GameRegion::Eu, 100, 555);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/lobbies/2/100/555");
        assert!(req.query.is_empty());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn active_lobbies_default_request() {
        let req = client().build_active_lobbies(&ActiveLobbiesParams::default());
        assert_eq!(req.path, "http://localhost:3000/lobbies/active");
        assert_eq!(req.query_value("includeSlots"), Some("true"));
        assert_eq!(req.query_value("recentlyClosedThreshold"), Some("20"));
        assert_eq!(req.query_value("includeMapInfo"), Some("false"));
        assert_eq!(req.query_value("regionId"), None);
    }

    #[test]
    fn maps_default_request_omits_unset_keys() {
        let req = client().build_maps(&MapsParams::default());
        assert_eq!(req.path, "http://localhost:3000/maps");
        let keys: Vec<&str> = req.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["showPrivate", "orderDirection", "orderBy"]);
        assert_eq!(
            req.url(),
            "http://localhost:3000/maps?showPrivate=false&orderDirection=desc&orderBy=id"
        );
    }

    #[test]
    fn map_section_paths() {
        let c = client();
        let cases = [
            (c.build_maps_basic_info(GameRegion::Us, 208271), "/maps/1/208271/basic-info"),
            (c.build_maps_locales(GameRegion::Us, 208271), "/maps/1/208271/locales"),
            (
                c.build_maps_details(GameRegion::Us, 208271, &MapDetailsParams::default()),
                "/maps/1/208271/details",
            ),
            (c.build_maps_versions(GameRegion::Us, 208271), "/maps/1/208271/versions"),
            (c.build_maps_dependencies(GameRegion::Us, 208271), "/maps/1/208271/dependencies"),
        ];
        for (req, path) in cases {
            assert_eq!(req.path, format!("{BASE}{path}"));
            assert!(req.query.is_empty(), "{path}: unexpected query");
        }
    }

    #[test]
    fn map_details_ignores_version_and_locale() {
        let c = client();
        let plain = c.build_maps_details(GameRegion::Cn, 7, &MapDetailsParams::default());
        let pinned = c.build_maps_details(
            GameRegion::Cn,
            7,
            &MapDetailsParams {
                major_version: 3,
                minor_version: 12,
                locale: Locale::RuRu,
            },
        );
        assert_eq!(plain, pinned);
        assert_eq!(pinned.path, "http://localhost:3000/maps/5/7/details");
    }

    #[test]
    fn map_stats_sends_kind() {
        let req = client().build_maps_stats(
            GameRegion::Kr,
            42,
            &MapStatsParams {
                kind: StatsKind::Monthly,
            },
        );
        assert_eq!(req.path, "http://localhost:3000/maps/3/42/stats");
        assert_eq!(req.query, vec![("kind".to_string(), "monthly".to_string())]);
    }

    #[test]
    fn player_base_and_reviews_paths() {
        let c = client();
        let req = c.build_maps_player_base(
            GameRegion::Eu,
            9,
            &MapPlayerBaseParams {
                min_started: Some(5),
                ..MapPlayerBaseParams::default()
            },
        );
        assert_eq!(req.path, "http://localhost:3000/maps/2/9/player-base");
        assert_eq!(req.query_value("minStarted"), Some("5"));
        assert_eq!(req.query_value("name"), None);

        let req = c.build_maps_reviews(GameRegion::Eu, 9, &MapReviewsParams::default());
        assert_eq!(req.path, "http://localhost:3000/maps/2/9/reviews");
        assert_eq!(req.query_value("orderBy"), Some("updated"));
    }

    #[test]
    fn profile_paths() {
        let c = client();
        assert_eq!(
            c.build_profile_detail(GameRegion::Us, 1, 2837461).path,
            "http://localhost:3000/profiles/1/1/2837461"
        );
        assert_eq!(
            c.build_profile_detail_via_game_id(GameRegion::Us, 8_589_934_595).path,
            "http://localhost:3000/profiles/1/8589934595"
        );
        let req = c.build_profiles(&ProfilesParams {
            name: Some("Rag".into()),
            order_direction: OrderDirection::Asc,
            ..ProfilesParams::default()
        });
        assert_eq!(req.path, "http://localhost:3000/profiles");
        assert_eq!(req.url(), "http://localhost:3000/profiles?name=Rag&orderDirection=asc&orderBy=name");
    }

    #[test]
    fn lobbies_match_never_touches_transport() {
        let c = client();
        for (region, bucket, record) in [(GameRegion::Us, 0, 0), (GameRegion::Cn, 99, 123_456)] {
            let err = c.get_lobbies_match(region, bucket, record).unwrap_err();
            assert!(matches!(err, ApiError::NotImplemented(_)));
        }
        assert!(c.transport().calls().is_empty());
    }

    #[test]
    fn get_executes_exactly_one_request() {
        let c = Sc2ArcadeClient::with_transport(
            BASE,
            SpyTransport::new(
                200,
                r#"[{"id":1,"code":"Melee","name":"Melee","description":"","isMelee":true}]"#,
            ),
        );
        let categories = c.get_map_categories().unwrap();
        assert_eq!(categories.len(), 1);
        assert!(categories[0].is_melee);

        let calls = c.transport().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "http://localhost:3000/maps/categories");
    }

    #[test]
    fn transport_errors_surface_unchanged() {
        let c = Sc2ArcadeClient::with_transport(BASE, FailingTransport);
        let err = c.get_maps(&MapsParams::default()).unwrap_err();
        assert!(matches!(err, ApiError::Transport(msg) if msg == "connection refused"));
    }

    #[test]
    fn parse_not_found() {
        let err = parse_response::<LobbyDetails>(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_server_error_keeps_body() {
        let err = parse_response::<MapStats>(response(502, "bad gateway")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 502, ref body } if body == "bad gateway"));
    }

    #[test]
    fn parse_bad_json() {
        let err = parse_response::<MapCategoriesResponse>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_shape_mismatch_is_a_deserialization_error() {
        let err = parse_response::<MapsResponse>(response(200, r#"{"results": []}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let c = Sc2ArcadeClient::with_transport("http://localhost:3000/", SpyTransport::new(200, "[]"));
        assert_eq!(c.build_map_categories().path, "http://localhost:3000/maps/categories");
    }

    #[test]
    fn concurrent_calls_do_not_interfere() {
        /// Answers based on the request path so each caller can check it got its own body.
        struct RoutingTransport {
            calls: Mutex<Vec<String>>,
        }

        impl Transport for RoutingTransport {
            fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
                self.calls.lock().unwrap().push(request.url());
                let body = if request.path.ends_with("/maps/categories") {
                    r#"[{"id":2,"code":"Other","name":"Other","description":"misc","isMelee":false}]"#
                } else {
                    r#"{"lobbiesHosted":[3],"lobbiesStarted":[2],"participantsTotal":[9],
                        "participantsUniqueTotal":[8],"pendingTimeAverage":[12.5],"date":["2024-03-04"]}"#
                };
                std::thread::yield_now();
                Ok(response(200, body))
            }
        }

        let c = Sc2ArcadeClient::with_transport(
            BASE,
            RoutingTransport {
                calls: Mutex::new(Vec::new()),
            },
        );

        std::thread::scope(|s| {
            let categories = s.spawn(|| {
                (0..25)
                    .map(|_| c.get_map_categories().unwrap())
                    .collect::<Vec<_>>()
            });
            let stats = s.spawn(|| {
                (0..25)
                    .map(|_| {
                        c.get_maps_stats(GameRegion::Eu, 77, &MapStatsParams::default())
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            });

            for list in categories.join().unwrap() {
                assert_eq!(list[0].code, "Other");
            }
            for series in stats.join().unwrap() {
                assert_eq!(series.pending_time_average, vec![12.5]);
            }
        });

        let calls = c.transport().calls.lock().unwrap();
        assert_eq!(calls.len(), 50);
        assert_eq!(
            calls.iter().filter(|u| *u == "http://localhost:3000/maps/2/77/stats?kind=weekly").count(),
            25
        );
    }

    #[test]
    fn maps_order_by_is_forwarded() {
        let req = client().build_maps(&MapsParams {
            order_by: MapsOrderBy::Popularity,
            order_direction: OrderDirection::Asc,
            ..MapsParams::default()
        });
        assert_eq!(req.query_value("orderBy"), Some("popularity"));
        assert_eq!(req.query_value("orderDirection"), Some("asc"));
    }
}
