//! Map, mod and map-statistics shapes.
//!
//! `MapDetails` mirrors the document tree the API extracts from a map's
//! archive header; most of it is opaque to the client and kept verbatim.

use serde::{Deserialize, Serialize};

use super::common::{GameRegion, Locale, MapType, Paginated};
use super::profiles::ProfileSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapCurrentVersion {
    pub id: u32,
    pub major_version: u32,
    pub minor_version: u32,
    pub is_private: bool,
}

/// Entry of the `/maps` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub region_id: GameRegion,
    pub bnet_id: u32,
    #[serde(rename = "type")]
    pub map_type: MapType,
    pub icon_hash: String,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub main_category_id: u32,
    pub max_players: u32,
    pub updated_at: String,
    pub published_at: String,
    pub current_version: MapCurrentVersion,
}

pub type MapsResponse = Paginated<MapSummary>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBasicInfoVersion {
    pub id: u32,
    pub major_version: u32,
    pub minor_version: u32,
    pub is_private: bool,
    pub archive_size: u64,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBasicInfo {
    pub id: u32,
    pub region_id: GameRegion,
    // Published typings spell this `bnentId`; accept both.
    #[serde(alias = "bnentId")]
    pub bnet_id: u32,
    #[serde(rename = "type")]
    pub map_type: MapType,
    pub available_locales: u32,
    pub main_locale: Locale,
    pub main_locale_hash: String,
    pub icon_hash: String,
    pub thumbnail_hash: String,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub main_category_id: u32,
    pub max_players: u32,
    pub max_human_players: u32,
    pub updated_at: String,
    pub published_at: String,
    pub user_review_count: u32,
    pub user_reviews_rating: String,
    pub removed: bool,
    pub current_version: MapBasicInfoVersion,
    pub author: ProfileSummary,
}

/// Translation of a map into one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLocale {
    pub locale: Locale,
    pub initial_major_version: u32,
    pub initial_minor_version: u32,
    pub latest_major_version: u32,
    pub latest_minor_version: u32,
    pub in_latest_version: bool,
    pub is_main: bool,
    pub table_hash: String,
    pub original_name: String,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
}

pub type MapLocalesResponse = Vec<MapLocale>;

/// Crop rectangle into an image stored by hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub hash: String,
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub caption: String,
    pub picture: Picture,
}

/// Titled text block: "how to play" sections and patch notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcadeSection {
    pub items: Vec<String>,
    pub list_type: u32,
    pub subtitle: Option<String>,
    pub title: String,
}

/// `{id, version}` pointer to another archive document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: u32,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialLink {
    pub map: DocumentRef,
    pub speed: String,
    pub variant_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcadeInfo {
    pub game_info_screen_shoots: Vec<Screenshot>,
    pub how_to_play_screenshots: Vec<Screenshot>,
    pub how_to_play_sections: Vec<ArcadeSection>,
    pub map_icon: Picture,
    pub matchmaker_tags: Vec<String>,
    pub patch_note_sections: ArcadeSection,
    pub tutorial_link: TutorialLink,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeIndex {
    pub index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInstance {
    pub id: u32,
    pub namespace: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeVisual {
    pub art: Option<String>,
    pub text: Option<String>,
    pub tip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub value: String,
    pub visual: AttributeVisual,
}

/// Game attribute (lobby option) declared by a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub access: u32,
    pub arbitration: u32,
    #[serde(rename = "default")]
    pub defaults: Vec<AttributeIndex>,
    pub instance: AttributeInstance,
    pub options: u32,
    pub sort_order: u32,
    pub values: Vec<AttributeValue>,
}

/// A default is either one option index or several (multi-select attributes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeDefaultValue {
    Single(AttributeIndex),
    Multiple(Vec<AttributeIndex>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefault {
    pub id: u32,
    pub namespace: u32,
    pub value: AttributeDefaultValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeVisibility {
    pub id: u32,
    pub namespace: u32,
    pub hidden: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedAttribute {
    pub attribute: AttributeInstance,
    pub locked_scopes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAttributeDefaults {
    pub attribute: Vec<AttributeDefault>,
    pub attribute_visibility: AttributeVisibility,
    pub category_description: String,
    pub category_id: u32,
    pub category_name: String,
    pub locked_attributes: Vec<LockedAttribute>,
    pub max_human_players: u32,
    pub max_open_slots: u32,
    pub max_team_size: u32,
    pub mode_description: String,
    pub mode_id: u32,
    pub mode_name: String,
    pub premium_info: Option<String>,
    pub team_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapVariant {
    pub achievement_tags: Vec<String>,
    pub attribute_defaults: VariantAttributeDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapMeta {
    pub region: String,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleTableEntry {
    pub locale: Locale,
    pub string_table: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSize {
    pub horizontal: u32,
    pub vertical: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDetailsInfo {
    pub meta: MapMeta,
    pub dd_default_permissions: bool,
    pub add_multi_mod: bool,
    pub arcade_info: ArcadeInfo,
    /// Always null in observed responses.
    pub archive_handle: Option<serde_json::Value>,
    pub attributes: Vec<Attribute>,
    pub default_variant_index: u32,
    pub extra_dependencies: Vec<DocumentRef>,
    pub filename: String,
    pub header: DocumentRef,
    pub locale_table: Vec<LocaleTableEntry>,
    pub map_namespace: u32,
    pub map_size: MapSize,
    pub relevant_permissions: Vec<String>,
    pub special_tags: Vec<String>,
    pub tileset: String,
    pub variants: MapVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDetails {
    pub id: u32,
    pub region_id: GameRegion,
    pub bnet_id: u32,
    pub major_version: u32,
    pub minor_version: u32,
    pub header_hash: Option<String>,
    pub is_private: bool,
    pub is_extension_mod: bool,
    pub archive_hash: Option<String>,
    pub archive_size: u64,
    pub archive_filename: String,
    pub uploaded_at: String,
    pub info: MapDetailsInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapVersion {
    pub major_version: u32,
    pub minor_version: u32,
    pub header_hash: Option<String>,
    pub is_private: bool,
    pub is_extension_mod: bool,
    pub archive_hash: Option<String>,
    pub archive_size: u64,
    pub archive_filename: String,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapVersions {
    pub region_id: GameRegion,
    pub bnet_id: u32,
    pub version: Vec<MapVersion>,
}

/// Full map record as embedded in a dependency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyMap {
    pub id: u32,
    pub region_id: GameRegion,
    pub bnet_id: u32,
    #[serde(rename = "type")]
    pub map_type: MapType,
    pub author_local_profile_id: u32,
    pub available_locales: u32,
    pub main_locale: Locale,
    pub main_locale_hash: String,
    pub icon_hash: String,
    pub thumbnail_hash: String,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub main_category_id: u32,
    pub max_players: u32,
    pub max_human_players: u32,
    pub updated_at: String,
    pub published_at: String,
    pub user_review_count: u32,
    pub user_reviews_rating: String,
    pub removed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapHeader {
    pub id: u32,
    pub region_id: GameRegion,
    pub bnet_id: u32,
    pub major_version: u32,
    pub minor_version: u32,
    pub header_hash: Option<String>,
    pub is_private: bool,
    pub is_extension_mod: bool,
    pub archive_hash: Option<String>,
    pub archive_size: u64,
    pub archive_filename: String,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDependency {
    pub map: DependencyMap,
    pub map_header: MapHeader,
    pub requested_version: u32,
    pub tags: Vec<String>,
}

/// Dependencies of a map. Entries live under `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDependencies {
    pub region_id: GameRegion,
    pub bnet_id: u32,
    pub list: Vec<MapDependency>,
}

/// Column-oriented time series; index `i` of every vector belongs to `date[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    pub lobbies_hosted: Vec<u32>,
    pub lobbies_started: Vec<u32>,
    pub participants_total: Vec<u32>,
    pub participants_unique_total: Vec<u32>,
    pub pending_time_average: Vec<f64>,
    pub date: Vec<String>,
}

impl MapStats {
    /// Number of data points in the series.
    pub fn len(&self) -> usize {
        self.date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBaseEntry {
    pub lobbies_started: u32,
    pub lobbies_started_diff_days: u32,
    pub lobbies_joined: u32,
    pub lobbies_hosted: u32,
    pub lobbies_hosted_started: u32,
    pub time_spent_waiting: u64,
    pub time_spent_waiting_as_host: u64,
    pub last_played_at: String,
    pub profile: ProfileSummary,
}

pub type MapPlayerBaseResponse = Paginated<PlayerBaseEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub created_at: String,
    pub updated_at: String,
    pub rating: u32,
    pub helpful_count: u32,
    pub body: String,
    pub author: ProfileSummary,
}

pub type MapReviewsResponse = Paginated<Review>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapCategory {
    pub id: u32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub is_melee: bool,
}

pub type MapCategoriesResponse = Vec<MapCategory>;
