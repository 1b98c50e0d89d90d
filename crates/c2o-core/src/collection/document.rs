use serde::Deserialize;

use super::item::Item;

/// Collection metadata carried into the output document's `info` block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectionInfo {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

/// Top-level collection document: metadata plus an ordered item tree.
///
/// Every field is defaulted so a document missing `info` or `item` still
/// parses; a missing `item` sequence simply yields an empty `paths` mapping
/// after conversion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub info: Option<CollectionInfo>,

    #[serde(default)]
    pub item: Vec<Item>,
}
