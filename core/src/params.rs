//! Per-endpoint request parameters.
//!
//! Each struct's `Default` carries the API's documented defaults, so callers
//! set only what they care about:
//!
//! ```
//! use sc2arcade_core::{GameRegion, MapsParams};
//!
//! let params = MapsParams {
//!     region_id: Some(GameRegion::Eu),
//!     name: Some("Direct Strike".into()),
//!     ..MapsParams::default()
//! };
//! assert!(!params.show_private);
//! ```
//!
//! `query()` renders the parameters in a fixed order. Unset optionals are
//! left out entirely; defaulted values are always sent.

use serde::Deserialize;

use crate::types::common::wire_str;
use crate::types::{GameRegion, Locale, MapType, OrderDirection};

/// Ordered query pairs under construction.
#[derive(Debug, Default)]
struct Query(Vec<(String, String)>);

impl Query {
    fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    fn finish(self) -> Vec<(String, String)> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MapsOrderBy {
    #[default]
    Id,
    VersionId,
    Name,
    Updated,
    Published,
    Popularity,
}

wire_str!(MapsOrderBy {
    Id => "id",
    VersionId => "versionId",
    Name => "name",
    Updated => "updated",
    Published => "published",
    Popularity => "popularity",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsKind {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

wire_str!(StatsKind {
    Daily => "daily",
    Weekly => "weekly",
    Monthly => "monthly",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerBaseOrderBy {
    Id,
    ProfileId,
    Name,
    #[default]
    LobbiesStarted,
    LobbiesHostedStarted,
}

wire_str!(PlayerBaseOrderBy {
    Id => "id",
    ProfileId => "profileId",
    Name => "name",
    LobbiesStarted => "lobbiesStarted",
    LobbiesHostedStarted => "lobbiesHostedStarted",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewsOrderBy {
    #[default]
    Updated,
    Rating,
    Helpful,
}

wire_str!(ReviewsOrderBy {
    Updated => "updated",
    Rating => "rating",
    Helpful => "helpful",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfilesOrderBy {
    Id,
    ProfileId,
    #[default]
    Name,
    LastOnlineAt,
}

wire_str!(ProfilesOrderBy {
    Id => "id",
    ProfileId => "profileId",
    Name => "name",
    LastOnlineAt => "lastOnlineAt",
});

/// Query for `/lobbies/active`: open and recently closed lobbies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActiveLobbiesParams {
    pub region_id: Option<GameRegion>,
    pub include_map_info: bool,
    pub include_slots: bool,
    pub include_slots_profile: bool,
    pub include_slots_join_info: bool,
    pub include_join_history: bool,
    /// Seconds a closed lobby stays in the listing.
    pub recently_closed_threshold: u32,
}

impl Default for ActiveLobbiesParams {
    fn default() -> Self {
        Self {
            region_id: None,
            include_map_info: false,
            include_slots: true,
            include_slots_profile: true,
            include_slots_join_info: true,
            include_join_history: true,
            recently_closed_threshold: 20,
        }
    }
}

impl ActiveLobbiesParams {
    pub fn query(&self) -> Vec<(String, String)> {
        Query::default()
            .push_opt("regionId", self.region_id)
            .push("includeMapInfo", self.include_map_info)
            .push("includeSlots", self.include_slots)
            .push("includeSlotsProfile", self.include_slots_profile)
            .push("includeSlotsJoinInfo", self.include_slots_join_info)
            .push("includeJoinHistory", self.include_join_history)
            .push("recentlyClosedThreshold", self.recently_closed_threshold)
            .finish()
    }
}

/// Query for `/lobbies/history`. Every `include_*` flag defaults to off.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LobbiesHistoryParams {
    pub region_id: Option<GameRegion>,
    pub map_id: Option<u32>,
    pub profile_handle: Option<String>,
    pub order_direction: OrderDirection,
    pub include_map_info: bool,
    pub include_slots: bool,
    pub include_slots_profile: bool,
    pub include_slots_join_info: bool,
    pub include_join_history: bool,
    pub include_match_results: bool,
    pub include_match_players: bool,
}

impl LobbiesHistoryParams {
    pub fn query(&self) -> Vec<(String, String)> {
        Query::default()
            .push_opt("regionId", self.region_id)
            .push_opt("mapId", self.map_id)
            .push_opt("profileHandle", self.profile_handle.as_deref())
            .push("orderDirection", self.order_direction)
            .push("includeMapInfo", self.include_map_info)
            .push("includeSlots", self.include_slots)
            .push("includeSlotsProfile", self.include_slots_profile)
            .push("includeSlotsJoinInfo", self.include_slots_join_info)
            .push("includeJoinHistory", self.include_join_history)
            .push("includeMatchResults", self.include_match_results)
            .push("includeMatchPlayers", self.include_match_players)
            .finish()
    }
}

/// Query for `/maps`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapsParams {
    pub author_handle: Option<String>,
    pub region_id: Option<GameRegion>,
    #[serde(rename = "type")]
    pub map_type: Option<MapType>,
    pub name: Option<String>,
    pub main_category_id: Option<String>,
    pub archive_hash: Option<String>,
    pub show_private: bool,
    pub order_direction: OrderDirection,
    pub order_by: MapsOrderBy,
}

impl MapsParams {
    pub fn query(&self) -> Vec<(String, String)> {
        Query::default()
            .push_opt("authorHandle", self.author_handle.as_deref())
            .push_opt("regionId", self.region_id)
            .push_opt("type", self.map_type)
            .push_opt("name", self.name.as_deref())
            .push_opt("mainCategoryId", self.main_category_id.as_deref())
            .push_opt("archiveHash", self.archive_hash.as_deref())
            .push("showPrivate", self.show_private)
            .push("orderDirection", self.order_direction)
            .push("orderBy", self.order_by)
            .finish()
    }
}

/// Version and locale selection for map details.
///
/// Accepted for parity with the API documentation but not sent: the
/// details endpoint is always queried for the current version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapDetailsParams {
    pub minor_version: u32,
    pub major_version: u32,
    pub locale: Locale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MapStatsParams {
    pub kind: StatsKind,
}

impl MapStatsParams {
    pub fn query(&self) -> Vec<(String, String)> {
        Query::default().push("kind", self.kind).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapPlayerBaseParams {
    pub name: Option<String>,
    /// ISO timestamp; only players seen after it are listed.
    pub last_played_min: Option<String>,
    pub min_started: Option<u32>,
    pub order_by: PlayerBaseOrderBy,
    pub order_direction: OrderDirection,
}

impl MapPlayerBaseParams {
    pub fn query(&self) -> Vec<(String, String)> {
        Query::default()
            .push_opt("name", self.name.as_deref())
            .push_opt("lastPlayedMin", self.last_played_min.as_deref())
            .push_opt("minStarted", self.min_started)
            .push("orderBy", self.order_by)
            .push("orderDirection", self.order_direction)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapReviewsParams {
    pub order_direction: OrderDirection,
    pub order_by: ReviewsOrderBy,
}

impl MapReviewsParams {
    pub fn query(&self) -> Vec<(String, String)> {
        Query::default()
            .push("orderDirection", self.order_direction)
            .push("orderBy", self.order_by)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfilesParams {
    pub region_id: Option<GameRegion>,
    pub name: Option<String>,
    pub profile_handle: Option<String>,
    pub order_direction: OrderDirection,
    pub order_by: ProfilesOrderBy,
}

impl ProfilesParams {
    pub fn query(&self) -> Vec<(String, String)> {
        Query::default()
            .push_opt("regionId", self.region_id)
            .push_opt("name", self.name.as_deref())
            .push_opt("profileHandle", self.profile_handle.as_deref())
            .push("orderDirection", self.order_direction)
            .push("orderBy", self.order_by)
            .finish()
    }
}
