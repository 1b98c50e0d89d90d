use indexmap::IndexMap;
use log::warn;
use serde_json::Value;

use crate::collection::{Body, KeyValue};
use crate::openapi::{MediaType, RequestBody, Schema};

/// Derive an OpenAPI request body from a sample body and the request's
/// headers.
///
/// Dispatch is two-level: by body mode, then (for raw bodies) by the
/// `Content-Type` header. Malformed JSON samples and unrecognized modes
/// leave `content` empty and log a warning naming the offending item; they
/// never abort the conversion.
pub(super) fn infer_request_body(body: &Body, headers: &[KeyValue], item_name: &str) -> RequestBody {
    let mut content = IndexMap::new();

    match body.mode.as_deref().unwrap_or("") {
        "raw" => {
            let raw = body.raw.as_deref().unwrap_or("");
            match content_type(headers) {
                "application/json" => match serde_json::from_str::<Value>(raw) {
                    Ok(value) => {
                        content.insert(
                            "application/json".to_string(),
                            MediaType {
                                schema: Schema::object(sample_properties(&value)),
                            },
                        );
                    }
                    Err(e) => {
                        warn!("request \"{}\": raw body is not valid JSON, skipping schema: {}", item_name, e);
                    }
                },
                "text/html" => {
                    content.insert("text/html".to_string(), MediaType { schema: Schema::string() });
                }
                "application/xml" => {
                    content.insert("application/xml".to_string(), MediaType { schema: Schema::string() });
                }
                _ => {
                    content.insert("text/plain".to_string(), MediaType { schema: Schema::string() });
                }
            }
        }
        "formdata" => {
            let properties = body
                .formdata
                .iter()
                .map(|p| {
                    let schema = if p.kind.as_deref() == Some("file") {
                        Schema::binary()
                    } else {
                        Schema::string()
                    };
                    (p.key.clone(), schema)
                })
                .collect();
            content.insert(
                "multipart/form-data".to_string(),
                MediaType {
                    schema: Schema::object(properties),
                },
            );
        }
        "urlencoded" => {
            let properties = body
                .urlencoded
                .iter()
                .map(|p| (p.key.clone(), Schema::string()))
                .collect();
            content.insert(
                "application/x-www-form-urlencoded".to_string(),
                MediaType {
                    schema: Schema::object(properties),
                },
            );
        }
        mode => {
            warn!("request \"{}\": unrecognized body mode \"{}\", skipping", item_name, mode);
        }
    }

    RequestBody { content }
}

/// The request's `Content-Type` header value. Header names are matched
/// case-insensitively; values are used verbatim.
fn content_type(headers: &[KeyValue]) -> &str {
    headers
        .iter()
        .find(|h| h.key.eq_ignore_ascii_case("content-type"))
        .map(|h| h.value.as_str())
        .unwrap_or("")
}

/// One level of properties from a sample JSON payload: each top-level key
/// of an object maps to the runtime type of its value. No recursion into
/// nested objects, no array item typing — a single representative sample is
/// all the inference this converter does. Non-object payloads yield no
/// properties.
fn sample_properties(value: &Value) -> IndexMap<String, Schema> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, v)| (key.clone(), Schema::typed(json_type_name(v))))
            .collect(),
        _ => IndexMap::new(),
    }
}

/// The flat "typeof"-style name for a JSON value. `null` reports as
/// "object", matching the runtime the sampled payloads come from.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Array(_) => "array",
        Value::Object(_) | Value::Null => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::FormParam;

    fn header(key: &str, value: &str) -> KeyValue {
        KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn raw_body(raw: &str) -> Body {
        Body {
            mode: Some("raw".to_string()),
            raw: Some(raw.to_string()),
            ..Body::default()
        }
    }

    #[test]
    fn test_json_object_sample() {
        let body = raw_body(r#"{"a": 1, "b": "x", "c": true, "d": [1], "e": {"f": 2}, "g": null}"#);
        let headers = [header("Content-Type", "application/json")];
        let rb = infer_request_body(&body, &headers, "item");
        let schema = &rb.content["application/json"].schema;
        assert_eq!(schema.schema_type, "object");
        assert_eq!(schema.properties["a"].schema_type, "number");
        assert_eq!(schema.properties["b"].schema_type, "string");
        assert_eq!(schema.properties["c"].schema_type, "boolean");
        assert_eq!(schema.properties["d"].schema_type, "array");
        assert_eq!(schema.properties["e"].schema_type, "object");
        assert_eq!(schema.properties["g"].schema_type, "object");
        // Inference stays shallow
        assert!(schema.properties["e"].properties.is_empty());
    }

    #[test]
    fn test_malformed_json_is_skipped() {
        let body = raw_body("{not json");
        let headers = [header("content-type", "application/json")];
        let rb = infer_request_body(&body, &headers, "item");
        assert!(rb.content.is_empty());
    }

    #[test]
    fn test_json_array_sample_has_no_properties() {
        let body = raw_body("[1, 2, 3]");
        let headers = [header("Content-Type", "application/json")];
        let rb = infer_request_body(&body, &headers, "item");
        let schema = &rb.content["application/json"].schema;
        assert_eq!(schema.schema_type, "object");
        assert!(schema.properties.is_empty());
    }

    #[test]
    fn test_html_and_xml_are_string() {
        for ct in ["text/html", "application/xml"] {
            let rb = infer_request_body(&raw_body("<p/>"), &[header("Content-Type", ct)], "item");
            assert_eq!(rb.content[ct].schema, Schema::string());
        }
    }

    #[test]
    fn test_missing_content_type_defaults_to_text_plain() {
        let rb = infer_request_body(&raw_body("hello"), &[], "item");
        assert_eq!(rb.content["text/plain"].schema, Schema::string());
    }

    #[test]
    fn test_unknown_content_type_defaults_to_text_plain() {
        let headers = [header("Content-Type", "application/octet-stream")];
        let rb = infer_request_body(&raw_body("hello"), &headers, "item");
        assert!(rb.content.contains_key("text/plain"));
    }

    #[test]
    fn test_formdata_file_entries_are_binary() {
        let body = Body {
            mode: Some("formdata".to_string()),
            formdata: vec![
                FormParam {
                    key: "avatar".to_string(),
                    kind: Some("file".to_string()),
                    value: None,
                },
                FormParam {
                    key: "caption".to_string(),
                    kind: Some("text".to_string()),
                    value: Some("hi".to_string()),
                },
            ],
            ..Body::default()
        };
        let rb = infer_request_body(&body, &[], "item");
        let schema = &rb.content["multipart/form-data"].schema;
        assert_eq!(schema.properties["avatar"], Schema::binary());
        assert_eq!(schema.properties["caption"], Schema::string());
        assert_eq!(schema.properties["caption"].format, None);
    }

    #[test]
    fn test_urlencoded_entries_are_string() {
        let body = Body {
            mode: Some("urlencoded".to_string()),
            urlencoded: vec![
                KeyValue {
                    key: "user".to_string(),
                    value: "ada".to_string(),
                },
                KeyValue {
                    key: "pass".to_string(),
                    value: "secret".to_string(),
                },
            ],
            ..Body::default()
        };
        let rb = infer_request_body(&body, &[], "item");
        let schema = &rb.content["application/x-www-form-urlencoded"].schema;
        assert_eq!(schema.schema_type, "object");
        assert_eq!(schema.properties.len(), 2);
        assert_eq!(schema.properties["user"], Schema::string());
    }

    #[test]
    fn test_unrecognized_mode_leaves_content_empty() {
        let body = Body {
            mode: Some("graphql".to_string()),
            ..Body::default()
        };
        let rb = infer_request_body(&body, &[], "item");
        assert!(rb.content.is_empty());
    }
}
