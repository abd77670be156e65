//! Tests for the `#[derive(HasId)]` macro.
//!
//! Covers the three ways the identifier field is chosen:
//!
//! - a named field called `id`
//! - a field marked `#[id]`
//! - the only field of a newtype

use std::collections::HashMap;

use rstest::rstest;
use utilkit::models::{HasId, collect_ids, entity_diff, unique_values};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Debug, Clone, PartialEq, HasId)]
struct Product {
    id: u32,
    category: String,
}

#[derive(Debug, Clone, PartialEq, HasId)]
struct Session {
    #[id]
    token: String,
    user_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, HasId)]
struct Sku(u64);

#[derive(Debug, Clone, HasId)]
struct Tagged<T> {
    id: u8,
    payload: T,
}

fn product(id: u32, category: &str) -> Product {
    Product {
        id,
        category: category.to_string(),
    }
}

// =============================================================================
// Field Selection
// =============================================================================

#[rstest]
fn test_named_id_field() {
    assert_eq!(product(7, "tools").id(), 7);
}

#[rstest]
fn test_marked_field() {
    let session = Session {
        token: "abc".to_string(),
        user_id: 1,
    };
    assert_eq!(session.id(), "abc");
    assert_eq!(session.user_id, 1);
}

#[rstest]
fn test_newtype_field() {
    assert_eq!(Sku(42).id(), 42);
}

#[rstest]
fn test_generic_struct() {
    let tagged = Tagged {
        id: 3,
        payload: vec![1.5, 2.5],
    };
    assert_eq!(tagged.id(), 3);
    assert_eq!(tagged.payload.len(), 2);
}

// =============================================================================
// Derived Entities in Collection Helpers
// =============================================================================

#[rstest]
fn test_collect_ids_with_derived_entities() {
    let products = [product(3, "a"), product(5, "b"), product(3, "c")];
    assert_eq!(collect_ids(&products), vec![3, 5]);
}

#[rstest]
fn test_unique_values_with_derived_entities() {
    let products = [product(1, "tool"), product(2, "yard"), product(3, "tool")];
    let categories = unique_values(&products, |product| product.category.clone());
    assert_eq!(categories, vec!["tool", "yard"]);
}

#[rstest]
fn test_entity_diff_with_string_ids() {
    let session = |token: &str| Session {
        token: token.to_string(),
        user_id: 0,
    };
    let active = vec![session("a"), session("b"), session("c")];
    let expired = vec![session("b")];

    let remaining: Vec<String> = entity_diff(&[active, expired])
        .into_iter()
        .map(|session| session.token)
        .collect();

    assert_eq!(remaining, vec!["a", "c"]);
}

#[rstest]
fn test_collect_ids_from_map_with_newtypes() {
    let skus = HashMap::from([("x", Sku(1)), ("y", Sku(2)), ("z", Sku(1))]);
    let mut ids = utilkit::models::collect_ids_from_map(&skus);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}
