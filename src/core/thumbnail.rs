use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One image variant of a search result, e.g. `default` or `high`.
///
/// The upstream object and the serialized form share field names, so both
/// constructors are a straight structural copy with no coercion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Thumbnail {
    pub height: u32,
    pub url: String,
    pub width: u32,
}

impl Thumbnail {
    pub fn from_api_response(raw: &Value) -> Result<Self> {
        Ok(Self::deserialize(raw)?)
    }

    pub fn from_dict(dict: &Value) -> Result<Self> {
        Self::from_api_response(dict)
    }

    pub fn to_dict(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
