//! Tests for collection module

use super::*;
use serde_json::json;
use test_case::test_case;

fn books(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|id| Record::from_value("Book", json!({"id": id})).unwrap())
        .collect()
}

fn ids(collection: &dyn Collection) -> Vec<u64> {
    collection
        .items()
        .map(|item| item.properties()["id"].as_u64().unwrap())
        .collect()
}

// ============================================================================
// Record Tests
// ============================================================================

#[test]
fn test_record_from_object() {
    let record = Record::from_value("Book", json!({"id": 1, "title": "Dune"})).unwrap();
    assert_eq!(record.type_name(), "Book");
    assert!(record.as_collection().is_none());
    assert_eq!(record.properties()["title"], "Dune");
}

#[test]
fn test_record_from_non_object_fails() {
    assert!(Record::from_value("Book", json!([1, 2])).is_err());
    assert!(Record::from_value("Book", json!("dune")).is_err());
}

// ============================================================================
// ListCollection Tests
// ============================================================================

#[test]
fn test_list_collection_iterates_all_items_without_pagination() {
    let list = ListCollection::new("BookList", books(3));
    let collection = list.as_collection().unwrap();
    assert_eq!(ids(collection), vec![1, 2, 3]);
    assert!(collection.pagination().is_none());
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[test]
fn test_paginator_defaults() {
    let paginator = Paginator::new("BookCollection", books(25));
    assert_eq!(paginator.items_per_page(), DEFAULT_ITEMS_PER_PAGE);
    assert_eq!(paginator.current_page(), 1);
    assert_eq!(paginator.page_count(), 3);
    assert_eq!(paginator.total_items(), 25);
}

#[test]
fn test_paginator_slices_current_page() {
    let paginator = Paginator::new("BookCollection", books(25))
        .with_items_per_page(10)
        .with_current_page(3);
    let collection = paginator.as_collection().unwrap();
    assert_eq!(ids(collection), (21..=25).collect::<Vec<_>>());

    let info = collection.pagination().unwrap();
    assert_eq!(info.current_page(), 3);
    assert_eq!(info.page_count(), 3);
}

#[test_case(0, 1 ; "below first page")]
#[test_case(2, 2 ; "in range")]
#[test_case(9, 4 ; "past last page")]
fn test_paginator_normalizes_page(requested: u64, expected: u64) {
    let paginator = Paginator::new("BookCollection", books(7))
        .with_items_per_page(2)
        .with_current_page(requested);
    assert_eq!(paginator.current_page(), expected);
}

#[test]
fn test_paginator_zero_per_page_is_single_page() {
    let paginator = Paginator::new("BookCollection", books(7)).with_items_per_page(0);
    assert_eq!(paginator.page_count(), 1);
    assert_eq!(paginator.current_items().len(), 7);
}

#[test]
fn test_paginator_empty() {
    let mut paginator = Paginator::new("BookCollection", Vec::<Record>::new());
    paginator.set_current_page(4);
    assert_eq!(paginator.page_count(), 0);
    assert_eq!(paginator.current_page(), 1);
    assert!(paginator.current_items().is_empty());
    assert_eq!(paginator.total_items(), 0);
}
