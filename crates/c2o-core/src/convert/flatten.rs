use indexmap::IndexMap;
use log::{debug, warn};

use crate::collection::{Item, Request};
use crate::openapi::{Operation, PathItem, Response};

use super::infer::infer_request_body;
use super::params::query_parameters;

/// Folder nesting deeper than this is pruned instead of recursed into, so a
/// hostile document cannot exhaust the stack.
const MAX_DEPTH: usize = 128;

/// Depth-first walker that flattens the item tree into the shared `paths`
/// mapping, accumulating a " / "-joined breadcrumb used as each operation's
/// summary.
pub(super) struct Flattener<'a> {
    paths: &'a mut IndexMap<String, PathItem>,
}

impl<'a> Flattener<'a> {
    pub(super) fn new(paths: &'a mut IndexMap<String, PathItem>) -> Self {
        Self { paths }
    }

    pub(super) fn walk(&mut self, items: &[Item], breadcrumb: &str, depth: usize) {
        for item in items {
            let name = item.name.as_deref().unwrap_or("");
            let current = if breadcrumb.is_empty() {
                name.to_string()
            } else {
                format!("{} / {}", breadcrumb, name)
            };

            // Children first; a node may carry both children and a request,
            // in which case both branches fire.
            if !item.item.is_empty() {
                if depth >= MAX_DEPTH {
                    warn!("item \"{}\" exceeds max folder depth {}, pruning subtree", current, MAX_DEPTH);
                } else {
                    self.walk(&item.item, &current, depth + 1);
                }
            }

            if let Some(ref request) = item.request {
                self.leaf(&current, request);
            }
        }
    }

    fn leaf(&mut self, summary: &str, request: &Request) {
        let Some(method) = request.method.as_deref().filter(|m| !m.is_empty()) else {
            debug!("skipping request \"{}\": no method", summary);
            return;
        };
        let Some(ref url) = request.url else {
            debug!("skipping request \"{}\": no url", summary);
            return;
        };

        let path = template_path(&url.path_segments());
        let method = method.to_lowercase();

        let mut operation = Operation {
            summary: summary.to_string(),
            description: request.description.clone().unwrap_or_default(),
            responses: Response::success(),
            request_body: None,
            parameters: Vec::new(),
        };

        if let Some(ref body) = request.body {
            operation.request_body = Some(infer_request_body(body, &request.header, summary));
        }

        if !url.query().is_empty() {
            operation.parameters = query_parameters(url.query());
        }

        // Last writer wins on a (path, method) collision.
        self.paths.entry(path).or_default().insert(method, operation);
    }
}

/// Join path segments into an OpenAPI path key: always `/`-prefixed, with
/// `:variable` segments rewritten to `{variable}`. An empty segment list
/// yields `/`.
fn template_path(segments: &[String]) -> String {
    let joined = segments
        .iter()
        .map(|seg| match seg.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => seg.clone(),
        })
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}
