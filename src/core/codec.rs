use crate::api::SearchListResponse;
use crate::core::error::Result;
use crate::core::search::SearchResultItem;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Parses raw `search.list` response text into records.
pub fn parse_search_response(text: &str) -> Result<Vec<SearchResultItem>> {
    let response: SearchListResponse = serde_json::from_str(text)?;
    convert_response(response)
}

/// Same as [`parse_search_response`] for an already-parsed document.
pub fn items_from_api_response(document: &Value) -> Result<Vec<SearchResultItem>> {
    let response = SearchListResponse::deserialize(document)?;
    convert_response(response)
}

fn convert_response(response: SearchListResponse) -> Result<Vec<SearchResultItem>> {
    debug!(
        "Converting {} search results (next page token: {:?})",
        response.items.len(),
        response.next_page_token
    );

    response
        .items
        .into_iter()
        .map(SearchResultItem::try_from)
        .collect()
}

/// Renders records as a JSON array of flat objects.
pub fn serialize_items(items: &[SearchResultItem], pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    };
    Ok(text)
}

/// Reads back the output of [`serialize_items`].
pub fn deserialize_items(text: &str) -> Result<Vec<SearchResultItem>> {
    let values: Vec<Value> = serde_json::from_str(text)?;
    values.iter().map(SearchResultItem::from_dict).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SearchError;
    use serde_json::json;

    fn response() -> Value {
        json!({
            "kind": "youtube#searchListResponse",
            "nextPageToken": "CAIQAA",
            "items": [
                {
                    "id": {"kind": "youtube#video", "videoId": "v1"},
                    "snippet": {
                        "publishedAt": "2023-01-01T00:00:00Z",
                        "channelId": "UC1",
                        "title": "First",
                        "description": "",
                        "thumbnails": {},
                        "channelTitle": "One",
                        "liveBroadcastContent": "live"
                    }
                },
                {
                    "id": {"kind": "youtube#playlist", "playlistId": "PL2"},
                    "snippet": {
                        "publishedAt": "2022-06-15T08:00:00.5+01:00",
                        "channelId": "UC2",
                        "title": "Second",
                        "description": "list",
                        "thumbnails": {"default": {"height": 90, "width": 120, "url": "http://x/2.jpg"}},
                        "channelTitle": "Two",
                        "liveBroadcastContent": "none"
                    }
                }
            ]
        })
    }

    #[test]
    fn test_items_keep_document_order() {
        let items = items_from_api_response(&response()).unwrap();
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["v1", "PL2"]);
    }

    #[test]
    fn test_text_and_value_entry_points_agree() {
        let document = response();
        let from_text = parse_search_response(&document.to_string()).unwrap();
        let from_value = items_from_api_response(&document).unwrap();
        assert_eq!(from_text, from_value);
    }

    #[test]
    fn test_one_bad_item_fails_the_batch() {
        let mut document = response();
        document["items"][1]["snippet"]["publishedAt"] = json!("soon");

        let err = items_from_api_response(&document).unwrap_err();
        assert!(matches!(err, SearchError::Timestamp { .. }));
    }

    #[test]
    fn test_round_trip_compact_and_pretty() {
        let items = items_from_api_response(&response()).unwrap();

        for pretty in [false, true] {
            let text = serialize_items(&items, pretty).unwrap();
            assert_eq!(deserialize_items(&text).unwrap(), items);
        }
    }

    #[test]
    fn test_serialized_output_is_an_array_of_flat_objects() {
        let items = items_from_api_response(&response()).unwrap();
        let text = serialize_items(&items, false).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[1]["published_at"], "2022-06-15T08:00:00.500+01:00");
        assert_eq!(array[1]["thumbnails"]["default"]["width"], 120);
        assert!(array[0].get("snippet").is_none());
    }

    #[test]
    fn test_not_json() {
        let err = parse_search_response("{items: ").unwrap_err();
        assert!(!err.is_data_contract());
    }
}
