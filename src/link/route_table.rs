//! Template based URL generation
//!
//! Route templates use `{name}` (or `{name:pattern}`) placeholders and
//! non-nested optional segments in square brackets:
//!
//! ```text
//! /books[/{page}]
//! /authors/{author}/books
//! ```
//!
//! An optional segment is emitted only when every placeholder inside it has a
//! value. Parameters the template does not reference are ignored. When
//! generating URLs, the route attributes of the current request fill any
//! placeholder the caller left unset.

use super::generator::{RequestContext, UrlGenerator};
use crate::error::{Error, Result};
use crate::types::ParamMap;
use crate::uri::build_query;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder body: a name with an optional `:pattern`
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([a-zA-Z_][a-zA-Z0-9_]*)(?::.*)?$").unwrap());

/// Piece of a parsed route template
#[derive(Debug, PartialEq, Eq)]
enum Part<'a> {
    Literal(&'a str),
    Param(&'a str),
    Optional(Vec<Part<'a>>),
}

/// Named route templates
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: IndexMap<String, String>,
}

impl RouteTable {
    /// Create an empty route table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route (builder style)
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.add_route(name, template);
        self
    }

    /// Add or replace a route
    pub fn add_route(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.routes.insert(name.into(), template.into());
    }

    /// Check whether a route is registered
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Get the template for a route
    pub fn template(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    /// Iterate over (name, template) pairs in registration order
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Build the path for `route` from its template
    pub fn path(&self, route: &str, params: &ParamMap) -> Result<String> {
        let template = self
            .routes
            .get(route)
            .ok_or_else(|| Error::route_not_found(route))?;

        let mut path = String::with_capacity(template.len());
        render(&parse_template(template), params, &mut path)
            .map_err(|param| Error::missing_route_param(route, param))?;
        Ok(path)
    }
}

/// Split a template into literals, placeholders and optional segments.
///
/// Braces are matched first, so brackets inside a placeholder pattern
/// (`{slug:[a-z-]+}`) never open an optional segment. Unbalanced delimiters
/// are kept as literal text.
fn parse_template(template: &str) -> Vec<Part<'_>> {
    let bytes = template.as_bytes();
    let mut root = Vec::new();
    // byte offset of the open `[` and the parts collected since
    let mut optional: Option<(usize, Vec<Part<'_>>)> = None;
    let mut literal_start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'{' => {
                let Some(end) = closing_brace(bytes, idx) else {
                    break;
                };
                let parts = match optional.as_mut() {
                    Some((_, parts)) => parts,
                    None => &mut root,
                };
                push_literal(parts, &template[literal_start..idx]);
                parts.push(placeholder(&template[idx..=end]));
                literal_start = end + 1;
                idx = end;
            }
            b'[' if optional.is_none() => {
                push_literal(&mut root, &template[literal_start..idx]);
                optional = Some((idx, Vec::new()));
                literal_start = idx + 1;
            }
            b']' => {
                if let Some((_, mut parts)) = optional.take() {
                    push_literal(&mut parts, &template[literal_start..idx]);
                    root.push(Part::Optional(parts));
                    literal_start = idx + 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }

    match optional {
        Some((open, _)) => push_literal(&mut root, &template[open..]),
        None => push_literal(&mut root, &template[literal_start..]),
    }
    root
}

/// Offset of the `}` closing the brace at `open`, honouring nesting
fn closing_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Placeholder part for a `{...}` span; malformed names stay literal
fn placeholder(span: &str) -> Part<'_> {
    let body = &span[1..span.len() - 1];
    PLACEHOLDER_REGEX
        .captures(body)
        .and_then(|cap| cap.get(1))
        .map_or(Part::Literal(span), |name| Part::Param(name.as_str()))
}

fn push_literal<'a>(parts: &mut Vec<Part<'a>>, text: &'a str) {
    if !text.is_empty() {
        parts.push(Part::Literal(text));
    }
}

/// Render parsed parts into `out`; on a missing value returns the
/// placeholder name. An optional segment with a missing value is skipped.
fn render(
    parts: &[Part<'_>],
    params: &ParamMap,
    out: &mut String,
) -> std::result::Result<(), String> {
    for part in parts {
        match part {
            Part::Literal(text) => out.push_str(text),
            Part::Param(name) => {
                let value = params.get(*name).ok_or_else(|| (*name).to_string())?;
                out.push_str(value);
            }
            Part::Optional(inner) => {
                let mut segment = String::new();
                if render(inner, params, &mut segment).is_ok() {
                    out.push_str(&segment);
                }
            }
        }
    }
    Ok(())
}

impl UrlGenerator for RouteTable {
    fn generate(
        &self,
        request: &RequestContext,
        route: &str,
        route_params: &ParamMap,
        query_params: &ParamMap,
    ) -> Result<String> {
        let path = if request.attributes.is_empty() {
            self.path(route, route_params)?
        } else {
            let mut params = request.attributes.clone();
            params.extend(route_params.iter().map(|(k, v)| (k.clone(), v.clone())));
            self.path(route, &params)?
        };

        let mut url = match &request.base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => path,
        };

        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&build_query(query_params));
        }

        Ok(url)
    }
}
