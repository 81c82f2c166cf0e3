pub mod search;

pub use search::{ApiResourceId, ApiSearchResult, ApiSnippet, PageInfo, SearchListResponse};
