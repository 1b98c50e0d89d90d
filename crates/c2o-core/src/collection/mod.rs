pub mod document;
pub mod item;

use crate::error::ParseError;
pub use document::{Collection, CollectionInfo};
pub use item::{Body, FormParam, Item, KeyValue, QueryParam, Request, Url, UrlValue};

/// Parse a collection document from JSON.
pub fn from_json(input: &str) -> Result<Collection, ParseError> {
    let collection: Collection = serde_json::from_str(input)?;
    Ok(collection)
}

/// Parse a collection document from YAML.
pub fn from_yaml(input: &str) -> Result<Collection, ParseError> {
    let collection: Collection = serde_yaml_ng::from_str(input)?;
    Ok(collection)
}
