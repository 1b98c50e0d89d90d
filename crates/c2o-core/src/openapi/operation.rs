use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::request_body::RequestBody;
use super::schema::Schema;

/// An API operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub summary: String,

    pub description: String,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

/// A response definition. The converter only ever emits the fixed
/// `"200": {description: "Success"}` entry; error responses are not
/// inferred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
}

impl Response {
    /// The single fixed success response attached to every operation.
    pub fn success() -> IndexMap<String, Response> {
        let mut responses = IndexMap::new();
        responses.insert(
            "200".to_string(),
            Response {
                description: "Success".to_string(),
            },
        );
        responses
    }
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: String,

    pub required: bool,

    pub schema: Schema,
}
