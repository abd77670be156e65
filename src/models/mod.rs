//! Helpers for collections of identified entities.
//!
//! An entity takes part in these helpers by implementing [`HasId`], which
//! exposes a stable, comparable identifier. Two entities are considered the
//! same iff their identifiers are equal; the rest of their state is ignored.
//!
//! - [`collect_ids`] / [`collect_ids_from_map`]: distinct identifiers
//! - [`unique_values`] / [`unique_values_from_map`]: distinct projected values
//! - [`entity_diff`]: identity-based difference
//!
//! With the `derive` feature, `#[derive(HasId)]` implements the trait from a
//! field named `id` or a field marked `#[id]`.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::models::{HasId, collect_ids, entity_diff};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     id: u64,
//!     name: &'static str,
//! }
//!
//! impl HasId for User {
//!     type Id = u64;
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let users = vec![
//!     User { id: 3, name: "ada" },
//!     User { id: 5, name: "grace" },
//!     User { id: 3, name: "ada (copy)" },
//! ];
//! assert_eq!(collect_ids(&users), vec![3, 5]);
//!
//! let removed = vec![User { id: 5, name: "anyone" }];
//! let remaining = entity_diff(&[&users[..], &removed[..]]);
//! assert_eq!(remaining, vec![User { id: 3, name: "ada" }]);
//! ```

mod entity;

pub use entity::HasId;

#[cfg(feature = "derive")]
pub use utilkit_derive::HasId;

use std::collections::HashMap;
use std::hash::Hash;

use crate::hashing::{MembershipSet, membership_set};
use crate::slices::unique;

/// Returns the distinct identifiers of `entities`, in first-occurrence order.
///
/// # Examples
///
/// ```rust
/// use utilkit::models::{HasId, collect_ids};
///
/// struct Order(u32);
///
/// impl HasId for Order {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.0
///     }
/// }
///
/// assert_eq!(collect_ids(&[Order(3), Order(5), Order(1), Order(5)]), vec![3, 5, 1]);
/// ```
pub fn collect_ids<T: HasId>(entities: &[T]) -> Vec<T::Id> {
    unique_values(entities, HasId::id)
}

/// Returns the distinct identifiers of the values of `entities`.
///
/// The order follows the map's iteration order and is therefore
/// unspecified.
pub fn collect_ids_from_map<K, T: HasId, S>(entities: &HashMap<K, T, S>) -> Vec<T::Id> {
    unique_values_from_map(entities, HasId::id)
}

/// Projects every element through `getter` and returns the distinct results,
/// in first-occurrence order.
///
/// # Examples
///
/// ```rust
/// use utilkit::models::unique_values;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let initials = unique_values(&words, |word| word.chars().next());
/// assert_eq!(initials, vec![Some('a'), Some('b'), Some('c')]);
/// ```
pub fn unique_values<S, R, F>(items: &[S], getter: F) -> Vec<R>
where
    R: Eq + Hash + Clone,
    F: FnMut(&S) -> R,
{
    unique(items.iter().map(getter).collect())
}

/// Projects every value of `items` through `getter` and returns the distinct
/// results. The order follows the map's iteration order and is unspecified.
pub fn unique_values_from_map<K, V, R, F, S>(items: &HashMap<K, V, S>, getter: F) -> Vec<R>
where
    R: Eq + Hash + Clone,
    F: FnMut(&V) -> R,
{
    unique(items.values().map(getter).collect())
}

/// Returns the entities of the first collection whose identifier is absent
/// from every other collection.
///
/// The result keeps the first entity seen for each identifier, in order.
/// With exactly one collection, that collection is returned unchanged,
/// duplicates included. With no collections the result is empty.
///
/// # Examples
///
/// ```rust
/// use utilkit::models::{HasId, entity_diff};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Tag(u8, &'static str);
///
/// impl HasId for Tag {
///     type Id = u8;
///
///     fn id(&self) -> u8 {
///         self.0
///     }
/// }
///
/// let current = vec![Tag(1, "a"), Tag(2, "b"), Tag(3, "c")];
/// let removed = vec![Tag(2, "renamed")];
///
/// assert_eq!(entity_diff(&[current, removed]), vec![Tag(1, "a"), Tag(3, "c")]);
/// ```
pub fn entity_diff<T, C>(collections: &[C]) -> Vec<T>
where
    T: HasId + Clone,
    C: AsRef<[T]>,
{
    let Some((first, rest)) = collections.split_first() else {
        return Vec::new();
    };
    let first = first.as_ref();

    if rest.is_empty() {
        tracing::trace!(
            len = first.len(),
            "single collection entity diff returned verbatim"
        );
        return first.to_vec();
    }

    let mut excluded: MembershipSet<T::Id> = membership_set(0);
    for collection in rest {
        excluded.extend(collection.as_ref().iter().map(HasId::id));
    }

    let mut seen: MembershipSet<T::Id> = membership_set(first.len());
    first
        .iter()
        .filter(|entity| {
            let id = entity.id();
            !excluded.contains(&id) && seen.insert(id)
        })
        .cloned()
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
