use crate::core::{deserialize_items, parse_search_response, serialize_items, SearchResultItem};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Reads a raw `search.list` response from disk and converts every item.
pub async fn read_search_response(path: &Path) -> Result<Vec<SearchResultItem>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read search response {}", path.display()))?;

    let items = parse_search_response(&text)
        .with_context(|| format!("Failed to parse search response {}", path.display()))?;

    debug!("Parsed {} search results from {}", items.len(), path.display());
    Ok(items)
}

pub async fn write_serialized(path: &Path, items: &[SearchResultItem], pretty: bool) -> Result<()> {
    let text = serialize_items(items, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("Wrote {} serialized results to {}", items.len(), path.display());
    Ok(())
}

pub async fn read_serialized(path: &Path) -> Result<Vec<SearchResultItem>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    deserialize_items(&text).with_context(|| format!("Failed to rebuild search results from {}", path.display()))
}
