pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

pub use api::SearchListResponse;
pub use core::{LiveBroadcastContent, ResourceId, ResourceKind, SearchError, SearchResultItem, Thumbnail};
