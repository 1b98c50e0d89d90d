use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::Operation;
use super::schema::Schema;

/// Operations keyed by lowercase HTTP method.
///
/// Methods are verbatim lowercased strings rather than an enum: the
/// converter performs no validation against the HTTP method set, so an
/// unrecognized method still becomes a key.
pub type PathItem = IndexMap<String, Operation>;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// Components object holding reusable definitions. Reserved for shared
/// schema extraction; the converter never populates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

/// The flat OpenAPI description document produced by a conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub openapi: String,

    pub info: Info,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub components: Components,
}

impl Document {
    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
