pub mod codec;
pub mod error;
pub mod search;
pub mod thumbnail;
pub mod timestamp;

pub use codec::{deserialize_items, items_from_api_response, parse_search_response, serialize_items};
pub use error::SearchError;
pub use search::{LiveBroadcastContent, ResourceId, ResourceKind, SearchResultItem};
pub use thumbnail::Thumbnail;
pub use timestamp::{format_timestamp, parse_timestamp};
