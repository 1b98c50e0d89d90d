use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A schema as emitted by the inferencer: a flat `type`, an optional
/// `format`, and one level of `properties` for object schemas. Nothing
/// deeper is ever produced — inference is a shallow single-sample
/// heuristic by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
}

impl Schema {
    /// A schema with the given `type` and nothing else.
    pub fn typed(schema_type: &str) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            format: None,
            properties: IndexMap::new(),
        }
    }

    /// A plain string schema.
    pub fn string() -> Self {
        Self::typed("string")
    }

    /// A string schema with `format: binary`, used for file form fields.
    pub fn binary() -> Self {
        Self {
            schema_type: "string".to_string(),
            format: Some("binary".to_string()),
            properties: IndexMap::new(),
        }
    }

    /// An object schema with the given properties.
    pub fn object(properties: IndexMap<String, Schema>) -> Self {
        Self {
            schema_type: "object".to_string(),
            format: None,
            properties,
        }
    }
}
