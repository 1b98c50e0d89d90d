use crate::collection::QueryParam;
use crate::openapi::{Parameter, Schema};

/// Build one query parameter per entry, in input order.
///
/// NOTE: `required` is true exactly when the example value is empty. This
/// looks inverted, and probably is, but it reproduces the behavior of the
/// converter this tool replaces — an unfilled example value is taken to
/// mean "the caller must supply this". Kept verbatim on purpose; see the
/// required-inversion entry in DESIGN.md before "fixing" it.
pub(super) fn query_parameters(query: &[QueryParam]) -> Vec<Parameter> {
    query
        .iter()
        .map(|entry| Parameter {
            name: entry.key.clone().unwrap_or_default(),
            location: "query".to_string(),
            required: entry.value.as_deref().unwrap_or("").is_empty(),
            schema: Schema::string(),
        })
        .collect()
}
