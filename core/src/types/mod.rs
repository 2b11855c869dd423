//! Response shapes of the SC2 Arcade API.
//!
//! # Design
//! These types are the wire contract with an API this crate does not
//! control, so field names and nullability follow the server exactly:
//! `T | null` becomes `Option<T>` and serializes back to `null`. Nothing is
//! validated beyond what deserialization itself enforces.

pub mod common;
pub mod lobbies;
pub mod maps;
pub mod profiles;

pub use common::{GameRegion, Locale, LobbyStatus, MapType, OrderDirection, Page, Paginated, UnknownRegion};
pub use lobbies::{
    ActiveLobby, JoinInfo, LobbiesHistoryResponse, LobbyDetails, LobbyHistoryEntry, LobbyMapInfo,
    LobbyMod, Slot, SlotJoinInfo, SlotProfile, TitleHistory,
};
pub use maps::{
    ArcadeInfo, ArcadeSection, Attribute, AttributeDefault, AttributeDefaultValue, AttributeIndex,
    AttributeInstance, AttributeValue, AttributeVisibility, AttributeVisual, DependencyMap,
    DocumentRef, LocaleTableEntry, LockedAttribute, MapBasicInfo, MapBasicInfoVersion,
    MapCategoriesResponse, MapCategory, MapCurrentVersion, MapDependencies, MapDependency,
    MapDetails, MapDetailsInfo, MapHeader, MapLocale, MapLocalesResponse, MapMeta,
    MapPlayerBaseResponse, MapReviewsResponse, MapSize, MapStats, MapSummary, MapVariant,
    MapVersion, MapVersions, MapsResponse, Picture, PlayerBaseEntry, Review, Screenshot,
    TutorialLink, VariantAttributeDefaults,
};
pub use profiles::{Profile, ProfileDetail, ProfileSummary, ProfilesResponse};
