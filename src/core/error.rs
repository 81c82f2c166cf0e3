use thiserror::Error;

/// Failures raised while building search records from upstream or serialized JSON.
///
/// None of these are recovered locally: a failing item fails the whole
/// conversion it belongs to.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Missing key, wrong primitive type or unknown `liveBroadcastContent` value.
    #[error("Invalid search result data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Malformed timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("No videoId, channelId or playlistId present for resource of kind {kind:?}")]
    MissingResourceId { kind: String },
}

impl SearchError {
    /// True when the upstream document itself broke the data contract, as
    /// opposed to the text not being JSON at all.
    pub fn is_data_contract(&self) -> bool {
        match self {
            SearchError::Decode(e) => e.is_data(),
            SearchError::Timestamp { .. } | SearchError::MissingResourceId { .. } => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
