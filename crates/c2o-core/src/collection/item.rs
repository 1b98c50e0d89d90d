use serde::Deserialize;

/// A node in the collection tree.
///
/// The source format does not tag folders and requests explicitly: a node
/// with nested `item` entries is a folder, a node with a `request` is a
/// leaf, and a node may be both at once (its request is processed *and* its
/// children are walked). Optional fields mirror that permissive shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub item: Vec<Item>,

    #[serde(default)]
    pub request: Option<Request>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A single HTTP request description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub url: Option<UrlValue>,

    #[serde(default)]
    pub header: Vec<KeyValue>,

    #[serde(default)]
    pub body: Option<Body>,

    #[serde(default)]
    pub description: Option<String>,
}

/// The source format writes URLs either as a bare string or as an object
/// with pre-split `path` segments and `query` entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UrlValue {
    Raw(String),
    Url(Url),
}

impl UrlValue {
    /// Path segments, deriving them from the raw string when the structured
    /// form is absent or empty.
    pub fn path_segments(&self) -> Vec<String> {
        match self {
            UrlValue::Url(url) if !url.path.is_empty() => url.path.clone(),
            UrlValue::Url(url) => url
                .raw
                .as_deref()
                .map(split_raw_path)
                .unwrap_or_default(),
            UrlValue::Raw(raw) => split_raw_path(raw),
        }
    }

    /// Query entries; the bare-string form carries none.
    pub fn query(&self) -> &[QueryParam] {
        match self {
            UrlValue::Url(url) => &url.query,
            UrlValue::Raw(_) => &[],
        }
    }
}

/// Structured URL: ordered path segments (literals or `:variable`
/// placeholders) plus query entries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Url {
    #[serde(default)]
    pub raw: Option<String>,

    #[serde(default)]
    pub path: Vec<String>,

    #[serde(default)]
    pub query: Vec<QueryParam>,
}

/// Split the path segments out of a raw URL string, dropping scheme, host,
/// query string, and fragment.
fn split_raw_path(raw: &str) -> Vec<String> {
    let without_fragment = raw.split('#').next().unwrap_or("");
    let without_query = without_fragment.split('?').next().unwrap_or("");
    let after_host = match without_query.find("://") {
        Some(idx) => {
            let rest = &without_query[idx + 3..];
            match rest.find('/') {
                Some(slash) => &rest[slash..],
                None => "",
            }
        }
        None => without_query,
    };
    after_host
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A query string entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryParam {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub value: Option<String>,
}

/// A header (or urlencoded form) key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KeyValue {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub value: String,
}

/// A request body. `mode` selects which of the encoding fields is
/// meaningful; it is kept as a plain string so documents with modes this
/// converter does not recognize still deserialize and can be skipped with a
/// diagnostic instead of failing the whole conversion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub raw: Option<String>,

    #[serde(default)]
    pub formdata: Vec<FormParam>,

    #[serde(default)]
    pub urlencoded: Vec<KeyValue>,
}

/// A multipart form entry. `kind` is the source format's `type` field:
/// `"text"` or `"file"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormParam {
    #[serde(default)]
    pub key: String,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub value: Option<String>,
}
