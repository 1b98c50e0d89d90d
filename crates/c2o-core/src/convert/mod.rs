mod flatten;
mod infer;
mod params;

use crate::collection::Collection;
use crate::openapi::{Components, Document, Info};

use flatten::Flattener;

/// Convert a collection document into a flat OpenAPI description document.
///
/// Pure and deterministic: the item tree is walked once, depth-first, and
/// every leaf request with a non-empty method and a resolvable path becomes
/// one `paths[path][method]` operation. Later requests silently overwrite
/// earlier ones on a `(path, method)` collision. Per-item problems
/// (malformed JSON sample, unrecognized body mode) are logged and skipped;
/// the conversion itself never fails.
pub fn convert(collection: &Collection) -> Document {
    let info = collection.info.as_ref();
    let info = Info {
        title: info
            .and_then(|i| i.name.clone())
            .unwrap_or_else(|| "API Documentation".to_string()),
        description: info.and_then(|i| i.description.clone()).unwrap_or_default(),
        version: info
            .and_then(|i| i.version.clone())
            .unwrap_or_else(|| "1.0.0".to_string()),
    };

    let mut document = Document {
        openapi: "3.0.0".to_string(),
        info,
        paths: indexmap::IndexMap::new(),
        components: Components::default(),
    };

    Flattener::new(&mut document.paths).walk(&collection.item, "", 0);

    document
}
