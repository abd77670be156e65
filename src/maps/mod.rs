//! Helpers for key-value mappings.
//!
//! Every function here borrows its inputs and allocates a fresh result map;
//! the source maps are never mutated. Result maps reuse the hasher type of
//! the first argument.
//!
//! - [`has`]: key membership
//! - [`merge`]: union of two maps, first map wins on collisions
//! - [`diff_keys`]: entries whose key is absent from another map
//! - [`filter_by_keys`]: entries whose key appears in a candidate list
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use utilkit::maps::{diff_keys, merge};
//!
//! let first = HashMap::from([(1, "uno"), (2, "dos")]);
//! let second = HashMap::from([(1, "one"), (3, "three")]);
//!
//! let merged = merge(&first, &second);
//! assert_eq!(merged, HashMap::from([(1, "uno"), (2, "dos"), (3, "three")]));
//!
//! let only_first = diff_keys(&first, &second);
//! assert_eq!(only_first, HashMap::from([(2, "dos")]));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns `true` if `map` contains `key`.
///
/// Borrowed key forms are accepted, so a `HashMap<String, _>` can be
/// queried with a `&str`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use utilkit::maps::has;
///
/// let map = HashMap::from([("alpha".to_string(), 1)]);
/// assert!(has(&map, "alpha"));
/// assert!(!has(&map, "beta"));
/// ```
pub fn has<K, V, Q, S>(map: &HashMap<K, V, S>, key: &Q) -> bool
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    map.contains_key(key)
}

/// Merges two maps into a new one. When a key exists in both, the value
/// from `priority` wins.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use utilkit::maps::merge;
///
/// let defaults = HashMap::from([("color", "blue"), ("size", "m")]);
/// let overrides = HashMap::from([("color", "red")]);
///
/// let merged = merge(&overrides, &defaults);
/// assert_eq!(merged["color"], "red");
/// assert_eq!(merged["size"], "m");
/// ```
pub fn merge<K, V, S, S2>(
    priority: &HashMap<K, V, S>,
    other: &HashMap<K, V, S2>,
) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
    S2: BuildHasher,
{
    let mut result = HashMap::with_capacity_and_hasher(priority.len() + other.len(), S::default());

    result.extend(
        other
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    result.extend(
        priority
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );

    result
}

/// Returns the entries of `source` whose key does not appear in `excluded`.
///
/// Only key presence in `excluded` matters; its values are never read.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use utilkit::maps::diff_keys;
///
/// let source = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// let excluded = HashMap::from([(2, 0.5)]);
///
/// assert_eq!(diff_keys(&source, &excluded), HashMap::from([(1, "a"), (3, "c")]));
/// ```
pub fn diff_keys<K, V, W, S, S2>(
    source: &HashMap<K, V, S>,
    excluded: &HashMap<K, W, S2>,
) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
    S2: BuildHasher,
{
    let mut result = HashMap::with_capacity_and_hasher(source.len(), S::default());

    result.extend(
        source
            .iter()
            .filter(|(key, _)| !excluded.contains_key(*key))
            .map(|(key, value)| (key.clone(), value.clone())),
    );

    result
}

/// Returns the entries of `source` whose key appears in `keys`.
///
/// Candidate keys missing from `source` are ignored. An empty `source` or
/// an empty `keys` slice yields an empty map.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use utilkit::maps::filter_by_keys;
///
/// let source = HashMap::from([(1, "one"), (2, "two"), (3, "three")]);
///
/// assert_eq!(filter_by_keys(&source, &[1, 3, 10]), HashMap::from([(1, "one"), (3, "three")]));
/// assert!(filter_by_keys(&source, &[10, 20]).is_empty());
/// ```
pub fn filter_by_keys<K, V, S>(source: &HashMap<K, V, S>, keys: &[K]) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut result = HashMap::with_capacity_and_hasher(keys.len().min(source.len()), S::default());

    result.extend(keys.iter().filter_map(|key| {
        source
            .get_key_value(key)
            .map(|(key, value)| (key.clone(), value.clone()))
    }));

    result
}

// =============================================================================
// Tests
// =============================================================================
