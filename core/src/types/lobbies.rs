//! Lobby snapshot and history shapes.

use serde::{Deserialize, Serialize};

use super::common::{GameRegion, LobbyStatus, Page};
use super::profiles::Profile;

/// Profile attached to a slot. `avatar` is omitted by the API for some
/// profiles rather than sent as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotProfile {
    pub region_id: GameRegion,
    pub realm_id: u32,
    pub profile_id: u32,
    pub name: String,
    pub discriminator: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotJoinInfo {
    pub joined_at: String,
    pub left_at: Option<String>,
}

/// One participant position in a lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub slot_number: u32,
    pub team: u32,
    /// `"human"`, `"ai"`, `"open"`... kept as the raw string.
    pub kind: String,
    pub name: String,
    pub profile: SlotProfile,
    pub join_info: SlotJoinInfo,
}

/// A join/leave event in a lobby's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinInfo {
    pub joined_at: String,
    pub left_at: Option<String>,
    pub profile: Profile,
}

/// Lobby entry returned by `/lobbies/active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLobby {
    pub region_id: GameRegion,
    pub bnet_bucket_id: u32,
    pub bnet_record_id: u32,
    pub created_at: String,
    pub closed_at: Option<String>,
    pub snapshot_updated_at: String,
    pub slots_updated_at: Option<String>,
    pub status: LobbyStatus,
    pub map_bnet_id: u32,
    pub ext_mod_bnet_id: Option<u32>,
    pub multi_mod_bnet_id: Option<u32>,
    pub map_variant_index: u32,
    pub map_variant_mode: String,
    pub lobby_title: String,
    pub slots_humans_total: u32,
    pub slots_humans_taken: u32,
    // Absent unless includeSlots / includeJoinHistory was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<Slot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_history: Option<Vec<JoinInfo>>,
}

/// Extension or multi-mod attached to a lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyMod {
    pub region_id: GameRegion,
    pub bnet_id: u32,
    pub icon_hash: String,
    pub name: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleHistory {
    pub date: String,
    pub title: String,
    pub host_name: String,
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyMapInfo {
    pub region_id: GameRegion,
    pub bnet_id: u32,
    pub icon_hash: String,
    pub name: String,
    pub main_category_id: u32,
    pub updated_at: String,
}

/// Full lobby record returned by `/lobbies/{regionId}/{bnetBucketId}/{bnetRecordId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyDetails {
    pub region_id: GameRegion,
    pub bnet_bucket_id: u32,
    pub bnet_record_id: u32,
    pub created_at: String,
    pub closed_at: Option<String>,
    pub snapshot_updated_at: String,
    pub slots_updated_at: Option<String>,
    pub status: LobbyStatus,
    pub map_bnet_id: u32,
    pub ext_mod_bnet_id: Option<u32>,
    pub multi_mod_bnet_id: Option<u32>,
    pub map_variant_index: u32,
    pub map_variant_mode: String,
    pub lobby_title: String,
    pub host_name: String,
    pub slots_humans_total: u32,
    pub slots_humans_taken: u32,
    pub map: LobbyMapInfo,
    pub ext_mode: Option<Vec<LobbyMod>>,
    pub multi_mode: Option<Vec<LobbyMod>>,
    pub slots: Vec<Slot>,
    pub join_history: Vec<JoinInfo>,
    pub title_history: Vec<TitleHistory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyHistoryEntry {
    pub id: u64,
    pub region_id: GameRegion,
    pub bnet_bucket_id: u32,
    pub bnet_record_id: u32,
    pub created_at: String,
    pub closed_at: Option<String>,
    pub status: LobbyStatus,
    pub map_bnet_id: u32,
    pub ext_mod_bnet_id: Option<u32>,
    pub multi_mod_bnet_id: Option<u32>,
    pub map_variant_index: u32,
    pub map_variant_mode: String,
    pub lobby_title: String,
    pub host_name: String,
    pub slots_humans_total: u32,
    pub slots_humans_taken: u32,
}

/// `/lobbies/history` page. The entries live under `result`, not `results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbiesHistoryResponse {
    pub page: Page,
    pub result: Vec<LobbyHistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_without_avatar_stays_without_avatar() {
        let raw = r#"{
            "slotNumber": 1,
            "team": 1,
            "kind": "human",
            "name": "Raynor",
            "profile": {"regionId": 1, "realmId": 1, "profileId": 42, "name": "Raynor", "discriminator": 123},
            "joinInfo": {"joinedAt": "2024-01-01T10:00:00.000Z", "leftAt": null}
        }"#;
        let slot: Slot = serde_json::from_str(raw).unwrap();
        assert!(slot.profile.avatar.is_none());
        assert!(slot.join_info.left_at.is_none());

        let json = serde_json::to_value(&slot).unwrap();
        assert!(json["profile"].get("avatar").is_none());
        assert!(json["joinInfo"]["leftAt"].is_null());
    }

    #[test]
    fn active_lobby_without_slots_keeps_them_absent() {
        let raw = r#"{"regionId":2,"bnetBucketId":1,"bnetRecordId":2,"createdAt":"2024-01-01T10:00:00.000Z","closedAt":null,"snapshotUpdatedAt":"2024-01-01T10:00:05.000Z","slotsUpdatedAt":null,"status":"open","mapBnetId":100,"extModBnetId":null,"multiModBnetId":null,"mapVariantIndex":0,"mapVariantMode":"Default","lobbyTitle":"","slotsHumansTotal":8,"slotsHumansTaken":1}"#;
        let lobby: ActiveLobby = serde_json::from_str(raw).unwrap();
        assert_eq!(lobby.region_id, GameRegion::Eu);
        assert_eq!(lobby.status, LobbyStatus::Open);
        assert!(lobby.slots.is_none());
        assert!(lobby.join_history.is_none());

        assert_eq!(serde_json::to_string(&lobby).unwrap(), raw);
    }

    #[test]
    fn active_lobby_with_empty_slots_keeps_them_empty() {
        let raw = r#"{
            "regionId": 1, "bnetBucketId": 1, "bnetRecordId": 3,
            "createdAt": "2024-01-01T10:00:00.000Z", "closedAt": null,
            "snapshotUpdatedAt": "2024-01-01T10:00:05.000Z", "slotsUpdatedAt": null,
            "status": "open", "mapBnetId": 100, "extModBnetId": null, "multiModBnetId": null,
            "mapVariantIndex": 0, "mapVariantMode": "Default", "lobbyTitle": "",
            "slotsHumansTotal": 8, "slotsHumansTaken": 0,
            "slots": [], "joinHistory": []
        }"#;
        let lobby: ActiveLobby = serde_json::from_str(raw).unwrap();
        assert_eq!(lobby.slots, Some(Vec::new()));
        assert_eq!(lobby.join_history, Some(Vec::new()));

        let json = serde_json::to_value(&lobby).unwrap();
        assert_eq!(json["slots"], serde_json::json!([]));
        assert_eq!(json["joinHistory"], serde_json::json!([]));
    }

    #[test]
    fn history_requires_result_key() {
        let ok = r#"{"page": {"prev": null, "next": null}, "result": []}"#;
        assert!(serde_json::from_str::<LobbiesHistoryResponse>(ok).is_ok());
        let wrong = r#"{"page": {"prev": null, "next": null}, "results": []}"#;
        assert!(serde_json::from_str::<LobbiesHistoryResponse>(wrong).is_err());
    }
}
