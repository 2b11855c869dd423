//! Player profile shapes.

use serde::{Deserialize, Serialize};

use super::common::{GameRegion, Paginated};

/// Profile record as listed by `/profiles` and embedded in lobby history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub region_id: GameRegion,
    pub realm_id: u32,
    pub profile_id: u32,
    pub name: String,
    pub discriminator: u32,
    pub avatar: String,
    pub last_online_at: String,
}

/// Compact profile embedded as a map author, reviewer or player-base entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub region_id: GameRegion,
    pub realm_id: u32,
    pub profile_id: u32,
    pub name: String,
    pub discriminator: u32,
    pub avatar: String,
}

pub type ProfilesResponse = Paginated<Profile>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetail {
    pub region_id: GameRegion,
    pub realm_id: u32,
    pub profile_id: u32,
    pub profile_game_id: u64,
    pub name: String,
    pub discriminator: u32,
    pub battle_tag: String,
    pub avatar: String,
}
