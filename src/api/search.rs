//! Wire shape of a `search.list` response, exactly as the Data API sends it.
//!
//! Field presence and primitive types are checked here, at the boundary, so
//! the conversion into [`SearchResultItem`](crate::core::SearchResultItem)
//! never indexes into untyped JSON. Unknown keys are ignored.

use crate::core::error::{Result, SearchError};
use crate::core::{LiveBroadcastContent, ResourceId, Thumbnail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub next_page_token: Option<String>,
    pub prev_page_token: Option<String>,
    pub region_code: Option<String>,
    pub page_info: Option<PageInfo>,
    pub items: Vec<ApiSearchResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: u64,
    pub results_per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSearchResult {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: ApiResourceId,
    pub snippet: ApiSnippet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceId {
    pub kind: String,
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
    pub playlist_id: Option<String>,
}

impl ApiResourceId {
    /// Picks the identifier, checking video, channel, then playlist.
    ///
    /// Empty strings count as absent.
    pub fn resolve(&self) -> Result<ResourceId> {
        let candidates = [
            self.video_id.clone().map(ResourceId::Video),
            self.channel_id.clone().map(ResourceId::Channel),
            self.playlist_id.clone().map(ResourceId::Playlist),
        ];

        let mut present = candidates
            .into_iter()
            .flatten()
            .filter(|id| !id.as_str().is_empty());

        let resolved = present.next().ok_or_else(|| SearchError::MissingResourceId {
            kind: self.kind.clone(),
        })?;

        let shadowed = present.count();
        if shadowed > 0 {
            debug!(
                "Resource of kind {} carries {} extra identifier(s), using {:?}",
                self.kind, shadowed, resolved
            );
        }

        Ok(resolved)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSnippet {
    pub published_at: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnails: BTreeMap<String, Thumbnail>,
    pub channel_title: String,
    pub live_broadcast_content: LiveBroadcastContent,
    // Duplicate of publishedAt kept by the API for compatibility.
    pub publish_time: Option<String>,
}
