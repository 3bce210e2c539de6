use serde::{Deserialize, Serialize};
use std::fmt;
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::FormatItem,
    format_description::well_known::Rfc3339, macros::format_description,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
}

/// Key binding a chat message to its map. The wrapped value is the index of the
/// message in the conversation; the DOM anchor id is `map-<index>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MapId(pub usize);

impl MapId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map-{}", self.0)
    }
}

impl From<MapId> for String {
    fn from(id: MapId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for MapId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .strip_prefix("map-")
            .and_then(|index| index.parse().ok())
            .map(MapId)
            .ok_or_else(|| format!("invalid map id: {value}"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "mapId", default, skip_serializing_if = "Option::is_none")]
    pub map_id: Option<MapId>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            location: None,
            map_id: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            location: None,
            map_id: None,
        }
    }

    pub fn bot_with_map(text: impl Into<String>, location: Location, map_id: MapId) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            location: Some(location),
            map_id: Some(map_id),
        }
    }

    /// Location and map id, if this message should show a map.
    pub fn map_target(&self) -> Option<(MapId, &Location)> {
        match (self.map_id, self.location.as_ref()) {
            (Some(id), Some(location)) => Some((id, location)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Lost,
    Found,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category shown on the item board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Lost,
    Found,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Lost, Filter::Found];

    pub fn matches(self, kind: ItemKind) -> bool {
        match self {
            Filter::All => true,
            Filter::Lost => kind == ItemKind::Lost,
            Filter::Found => kind == ItemKind::Found,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Lost => "Lost",
            Filter::Found => "Found",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub name: String,
    pub confidence: f64,
}

/// A candidate pairing computed by the backend when a found item resembles a lost one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemMatch {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub similarity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finder_email: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "contactInfo", default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub detections: Vec<Detection>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub matches: Vec<ItemMatch>,
    #[serde(skip)]
    pub expanded: bool,
}

const NAIVE_TIMESTAMP: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const ITEM_TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year] [hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]"
);

impl Item {
    /// Report time. The backend writes naive UTC timestamps, sometimes with
    /// microseconds; offset-qualified ones are accepted as well.
    pub fn posted_at(&self) -> Option<OffsetDateTime> {
        let raw = self.timestamp.as_deref()?.trim();
        if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
            return Some(parsed);
        }
        let whole_seconds = raw.split('.').next().unwrap_or(raw);
        PrimitiveDateTime::parse(whole_seconds, NAIVE_TIMESTAMP)
            .ok()
            .map(PrimitiveDateTime::assume_utc)
    }

    pub fn display_timestamp(&self) -> Option<String> {
        self.posted_at()?.format(ITEM_TIME_FORMAT).ok()
    }
}
