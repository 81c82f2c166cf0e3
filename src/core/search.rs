use crate::api::ApiSearchResult;
use crate::core::error::{Result, SearchError};
use crate::core::thumbnail::Thumbnail;
use crate::core::timestamp::{self, parse_timestamp};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Live state of a result. Values outside these three are rejected when
/// decoding rather than carried through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveBroadcastContent {
    Upcoming,
    Live,
    #[serde(rename = "none")]
    NotLive,
}

impl LiveBroadcastContent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiveBroadcastContent::Upcoming => "upcoming",
            LiveBroadcastContent::Live => "live",
            LiveBroadcastContent::NotLive => "none",
        }
    }
}

impl fmt::Display for LiveBroadcastContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Video,
    Channel,
    Playlist,
}

impl ResourceKind {
    pub fn api_kind(&self) -> &'static str {
        match self {
            ResourceKind::Video => "youtube#video",
            ResourceKind::Channel => "youtube#channel",
            ResourceKind::Playlist => "youtube#playlist",
        }
    }

    pub fn from_api_kind(kind: &str) -> Option<Self> {
        match kind {
            "youtube#video" => Some(ResourceKind::Video),
            "youtube#channel" => Some(ResourceKind::Channel),
            "youtube#playlist" => Some(ResourceKind::Playlist),
            _ => None,
        }
    }
}

/// Identifier of the resource a search hit points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Video(String),
    Channel(String),
    Playlist(String),
}

impl ResourceId {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceId::Video(_) => ResourceKind::Video,
            ResourceId::Channel(_) => ResourceKind::Channel,
            ResourceId::Playlist(_) => ResourceKind::Playlist,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResourceId::Video(id) | ResourceId::Channel(id) | ResourceId::Playlist(id) => id,
        }
    }

    pub fn into_inner(self) -> String {
        match self {
            ResourceId::Video(id) | ResourceId::Channel(id) | ResourceId::Playlist(id) => id,
        }
    }
}

/// One hit of a `search.list` call: a video, channel or playlist.
///
/// See <https://developers.google.com/youtube/v3/docs/search> for the meaning
/// of each field. Serializes to the flat snake_case form that
/// [`SearchResultItem::from_dict`] reads back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerializedSearchResultItem")]
pub struct SearchResultItem {
    pub id: String,
    pub kind: String,
    pub channel_id: String,
    pub channel_title: String,
    pub title: String,
    pub description: String,
    pub live_broadcast_content: LiveBroadcastContent,
    #[serde(serialize_with = "timestamp::serialize")]
    pub published_at: DateTime<FixedOffset>,
    pub thumbnails: BTreeMap<String, Thumbnail>,
}

// Serialized shape before the timestamp is parsed.
#[derive(Deserialize)]
struct SerializedSearchResultItem {
    id: String,
    kind: String,
    channel_id: String,
    channel_title: String,
    title: String,
    description: String,
    live_broadcast_content: LiveBroadcastContent,
    published_at: String,
    thumbnails: BTreeMap<String, Thumbnail>,
}

impl TryFrom<SerializedSearchResultItem> for SearchResultItem {
    type Error = SearchError;

    fn try_from(flat: SerializedSearchResultItem) -> Result<Self> {
        Ok(Self {
            published_at: parse_timestamp(&flat.published_at)?,
            id: flat.id,
            kind: flat.kind,
            channel_id: flat.channel_id,
            channel_title: flat.channel_title,
            title: flat.title,
            description: flat.description,
            live_broadcast_content: flat.live_broadcast_content,
            thumbnails: flat.thumbnails,
        })
    }
}

impl TryFrom<ApiSearchResult> for SearchResultItem {
    type Error = SearchError;

    fn try_from(raw: ApiSearchResult) -> Result<Self> {
        let id = raw.id.resolve()?;
        let snippet = raw.snippet;

        debug!("Building {:?} result {}", id.kind(), id.as_str());

        Ok(Self {
            id: id.into_inner(),
            kind: raw.id.kind,
            channel_id: snippet.channel_id,
            channel_title: snippet.channel_title,
            title: snippet.title,
            description: snippet.description,
            live_broadcast_content: snippet.live_broadcast_content,
            published_at: parse_timestamp(&snippet.published_at)?,
            thumbnails: snippet.thumbnails,
        })
    }
}

impl SearchResultItem {
    /// Builds a record from one element of the upstream `items` array.
    pub fn from_api_response(raw: &Value) -> Result<Self> {
        let raw = ApiSearchResult::deserialize(raw)?;
        Self::try_from(raw)
    }

    /// Inverse of [`SearchResultItem::to_dict`].
    pub fn from_dict(dict: &Value) -> Result<Self> {
        let flat = SerializedSearchResultItem::deserialize(dict)?;
        Self::try_from(flat)
    }

    pub fn to_dict(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// `None` when `kind` is not one of the three search resource kinds.
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        ResourceKind::from_api_kind(&self.kind)
    }

    pub fn resource_id(&self) -> Option<ResourceId> {
        let id = self.id.clone();
        self.resource_kind().map(|kind| match kind {
            ResourceKind::Video => ResourceId::Video(id),
            ResourceKind::Channel => ResourceId::Channel(id),
            ResourceKind::Playlist => ResourceId::Playlist(id),
        })
    }

    /// Thumbnail with the most pixels; equal sizes resolve to the first name.
    pub fn largest_thumbnail(&self) -> Option<(&str, &Thumbnail)> {
        self.thumbnails
            .iter()
            .max_by(|(a_name, a), (b_name, b)| a.area().cmp(&b.area()).then_with(|| b_name.cmp(a_name)))
            .map(|(name, thumbnail)| (name.as_str(), thumbnail))
    }
}
