//! Tests for link module

use super::*;
use crate::error::Error;
use crate::types::{param_map, ParamMap};
use pretty_assertions::assert_eq;
use serde_json::json;

fn books_table() -> RouteTable {
    RouteTable::new()
        .with_route("books", "/books[/{page}]")
        .with_route("author.books", "/authors/{author:[a-z-]+}/books")
        .with_route("search", "/search")
        .with_route("shelf", "/shelves/{shelf}[/{slug:[a-z-]+}]")
        .with_route("items", "/items/{type}/{page}")
}

// ============================================================================
// Link Tests
// ============================================================================

#[test]
fn test_link_new() {
    let link = Link::new("next", "/books?page=2");
    assert_eq!(link.rel, "next");
    assert_eq!(link.href, "/books?page=2");
    assert!(link.attributes.is_empty());
    assert!(link.attribute("title").is_none());
}

#[test]
fn test_link_serializes_without_rel() {
    let link = Link::new("self", "/books").with_attribute("title", "Books");
    assert_eq!(link.attribute("title"), Some(&json!("Books")));
    assert_eq!(
        serde_json::to_value(&link).unwrap(),
        json!({"href": "/books", "title": "Books"})
    );
}

// ============================================================================
// RouteTable Tests
// ============================================================================

#[test]
fn test_route_table_optional_segment_omitted() {
    let table = books_table();
    assert_eq!(table.path("books", &ParamMap::new()).unwrap(), "/books");
}

#[test]
fn test_route_table_optional_segment_filled() {
    let table = books_table();
    let params = param_map([("page", "3")]);
    assert_eq!(table.path("books", &params).unwrap(), "/books/3");
}

#[test]
fn test_route_table_required_placeholder_with_pattern() {
    let table = books_table();
    let params = param_map([("author", "le-guin"), ("unused", "x")]);
    assert_eq!(
        table.path("author.books", &params).unwrap(),
        "/authors/le-guin/books"
    );
}

#[test]
fn test_route_table_missing_required_param() {
    let table = books_table();
    let err = table.path("author.books", &ParamMap::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRouteParameter { ref route, ref param } if route == "author.books" && param == "author"
    ));
}

#[test]
fn test_route_table_pattern_inside_optional_segment() {
    let table = books_table();
    let params = param_map([("shelf", "7"), ("slug", "sci-fi")]);
    assert_eq!(table.path("shelf", &params).unwrap(), "/shelves/7/sci-fi");
    assert_eq!(
        table.path("shelf", &param_map([("shelf", "7")])).unwrap(),
        "/shelves/7"
    );
}

#[test]
fn test_route_table_unbalanced_delimiters_are_literal() {
    let table = RouteTable::new()
        .with_route("odd", "/odd]/{id}[")
        .with_route("open", "/open/{id");
    let params = param_map([("id", "7")]);
    assert_eq!(table.path("odd", &params).unwrap(), "/odd]/7[");
    assert_eq!(table.path("open", &params).unwrap(), "/open/{id");
}

#[test]
fn test_route_table_unknown_route() {
    let table = books_table();
    let err = table.path("missing", &ParamMap::new()).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound { ref route } if route == "missing"));
}

#[test]
fn test_route_table_generate_with_base_url_and_query() {
    let table = books_table();
    let request = RequestContext::new().with_base_url("https://api.example.com/");
    let url = table
        .generate(
            &request,
            "search",
            &ParamMap::new(),
            &param_map([("q", "dune messiah"), ("page", "2")]),
        )
        .unwrap();
    assert_eq!(url, "https://api.example.com/search?q=dune+messiah&page=2");
}

#[test]
fn test_route_table_generate_fills_from_request_attributes() {
    let table = books_table();
    let request = RequestContext::new()
        .with_attribute("type", "book")
        .with_attribute("page", "2");

    let current = table
        .generate(&request, "items", &ParamMap::new(), &ParamMap::new())
        .unwrap();
    assert_eq!(current, "/items/book/2");

    let next = table
        .generate(&request, "items", &param_map([("page", "3")]), &ParamMap::new())
        .unwrap();
    assert_eq!(next, "/items/book/3");
}

#[test]
fn test_route_table_generate_without_attributes_fails() {
    let table = books_table();
    let err = table
        .generate(
            &RequestContext::new(),
            "items",
            &param_map([("page", "3")]),
            &ParamMap::new(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::MissingRouteParameter { ref param, .. } if param == "type"));
}

#[test]
fn test_route_table_listing() {
    let table = books_table();
    assert_eq!(table.len(), 5);
    assert!(table.contains("books"));
    assert_eq!(table.template("search"), Some("/search"));
    let names: Vec<&str> = table.routes().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec!["books", "author.books", "search", "shelf", "items"]
    );
}

// ============================================================================
// LinkGenerator Tests
// ============================================================================

#[test]
fn test_link_generator_from_route() {
    let generator = LinkGenerator::new(books_table());
    let link = generator
        .from_route(
            "next",
            &RequestContext::new(),
            "books",
            &param_map([("page", "2")]),
            &param_map([("sort", "title")]),
        )
        .unwrap();
    assert_eq!(link, Link::new("next", "/books/2?sort=title"));
}

#[test]
fn test_link_generator_propagates_errors() {
    let generator = LinkGenerator::new(books_table());
    let result = generator.from_route(
        "self",
        &RequestContext::new(),
        "nope",
        &ParamMap::new(),
        &ParamMap::new(),
    );
    assert!(result.is_err());
}
