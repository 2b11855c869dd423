//! Enumerations and pagination wrappers shared by every endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Battle.net server region. Integer code on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GameRegion {
    Us,
    Eu,
    Kr,
    Cn,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown region code {0}")]
pub struct UnknownRegion(pub u8);

impl GameRegion {
    pub const fn code(self) -> u8 {
        match self {
            GameRegion::Us => 1,
            GameRegion::Eu => 2,
            GameRegion::Kr => 3,
            GameRegion::Cn => 5,
        }
    }
}

impl TryFrom<u8> for GameRegion {
    type Error = UnknownRegion;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(GameRegion::Us),
            2 => Ok(GameRegion::Eu),
            3 => Ok(GameRegion::Kr),
            5 => Ok(GameRegion::Cn),
            other => Err(UnknownRegion(other)),
        }
    }
}

impl From<GameRegion> for u8 {
    fn from(region: GameRegion) -> Self {
        region.code()
    }
}

impl fmt::Display for GameRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Implements `as_str` and `Display` for a fieldless enum from its wire strings.
macro_rules! wire_str {
    ($ty:ty { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
pub(crate) use wire_str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LobbyStatus {
    Open,
    Started,
    Abandoned,
    Unknown,
}

wire_str!(LobbyStatus {
    Open => "open",
    Started => "started",
    Abandoned => "abandoned",
    Unknown => "unknown",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapType {
    MeleeMap,
    ArcadeMap,
    ExtensionMod,
    DependencyMod,
}

wire_str!(MapType {
    MeleeMap => "melee_map",
    ArcadeMap => "arcade_map",
    ExtensionMod => "extension_mod",
    DependencyMod => "dependency_mod",
});

/// Game client locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "enUS")]
    EnUs,
    #[serde(rename = "koKR")]
    KoKr,
    #[serde(rename = "frFR")]
    FrFr,
    #[serde(rename = "deDE")]
    DeDe,
    #[serde(rename = "zhCN")]
    ZhCn,
    #[serde(rename = "esES")]
    EsEs,
    #[serde(rename = "zhTW")]
    ZhTw,
    #[serde(rename = "enGB")]
    EnGb,
    #[serde(rename = "esMX")]
    EsMx,
    #[serde(rename = "ruRU")]
    RuRu,
    #[serde(rename = "ptBR")]
    PtBr,
    #[serde(rename = "itIT")]
    ItIt,
    #[serde(rename = "ptPT")]
    PtPt,
    #[serde(rename = "enSG")]
    EnSg,
    #[serde(rename = "plPL")]
    PlPl,
}

wire_str!(Locale {
    EnUs => "enUS",
    KoKr => "koKR",
    FrFr => "frFR",
    DeDe => "deDE",
    ZhCn => "zhCN",
    EsEs => "esES",
    ZhTw => "zhTW",
    EnGb => "enGB",
    EsMx => "esMX",
    RuRu => "ruRU",
    PtBr => "ptBR",
    ItIt => "itIT",
    PtPt => "ptPT",
    EnSg => "enSG",
    PlPl => "plPL",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

wire_str!(OrderDirection {
    Asc => "asc",
    Desc => "desc",
});

/// Opaque cursors around one page of results. `None` means there is no
/// page in that direction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl Page {
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// A page of results under the `results` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub page: Page,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_roundtrip() {
        for region in [GameRegion::Us, GameRegion::Eu, GameRegion::Kr, GameRegion::Cn] {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, region.code().to_string());
            let back: GameRegion = serde_json::from_str(&json).unwrap();
            assert_eq!(back, region);
        }
        assert_eq!(GameRegion::Cn.to_string(), "5");
    }

    #[test]
    fn region_four_is_rejected() {
        assert_eq!(GameRegion::try_from(4), Err(UnknownRegion(4)));
        assert!(serde_json::from_str::<GameRegion>("4").is_err());
    }

    #[test]
    fn lobby_status_is_a_closed_set() {
        let status: LobbyStatus = serde_json::from_str(r#""abandoned""#).unwrap();
        assert_eq!(status, LobbyStatus::Abandoned);
        assert!(serde_json::from_str::<LobbyStatus>(r#""closed""#).is_err());
    }

    #[test]
    fn map_type_wire_form_matches_display() {
        for ty in [
            MapType::MeleeMap,
            MapType::ArcadeMap,
            MapType::ExtensionMod,
            MapType::DependencyMod,
        ] {
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, ty.as_str());
        }
    }

    #[test]
    fn locale_wire_form_matches_display() {
        let locale: Locale = serde_json::from_str(r#""zhTW""#).unwrap();
        assert_eq!(locale, Locale::ZhTw);
        assert_eq!(serde_json::to_value(Locale::PlPl).unwrap(), "plPL");
        assert_eq!(Locale::default().to_string(), "enUS");
        assert!(serde_json::from_str::<Locale>(r#""en-US""#).is_err());
    }

    #[test]
    fn order_direction_defaults_to_desc() {
        assert_eq!(OrderDirection::default(), OrderDirection::Desc);
        assert_eq!(OrderDirection::Asc.to_string(), "asc");
    }

    #[test]
    fn page_keeps_null_cursors() {
        let page: Page = serde_json::from_str(r#"{"prev":null,"next":"eyJpZCI6MTJ9"}"#).unwrap();
        assert!(!page.has_prev());
        assert!(page.has_next());
        let json = serde_json::to_value(&page).unwrap();
        assert!(json["prev"].is_null());
        assert!(json.as_object().unwrap().contains_key("prev"));
    }
}
