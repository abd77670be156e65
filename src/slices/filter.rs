//! Uniqueness and value filters.

use std::collections::HashMap;
use std::hash::Hash;

use crate::hashing::membership_set;

/// Removes duplicates from `values`, keeping the first occurrence of each.
///
/// The vector is compacted in place and its allocation is reused for the
/// result. An empty input yields an empty vector.
///
/// # Complexity
///
/// O(n) time, O(n) auxiliary space for the membership set.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::unique;
///
/// let values = vec![0, 1, 2, 2, 3, 1, 2, 4, 5, 0];
/// assert_eq!(unique(values), vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn unique<T>(mut values: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    unique_in_place(&mut values);
    values
}

/// In-place form of [`unique`]: after the call `values` holds each distinct
/// element once, in order of first occurrence.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::unique_in_place;
///
/// let mut names = vec!["b", "a", "b", "c", "a"];
/// unique_in_place(&mut names);
/// assert_eq!(names, vec!["b", "a", "c"]);
/// ```
pub fn unique_in_place<T>(values: &mut Vec<T>)
where
    T: Eq + Hash + Clone,
{
    if values.len() < 2 {
        return;
    }

    let mut seen = membership_set(values.len());
    values.retain(|value| seen.insert(value.clone()));
}

/// Drops every element equal to `T::default()` (`0`, `""`, `false`, ...).
///
/// Order of the remaining elements is preserved and the allocation is reused.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::filter_nil;
///
/// assert_eq!(filter_nil(vec![0, 0, 1, 2, 0, 3]), vec![1, 2, 3]);
/// assert_eq!(filter_nil(vec!["", "a", ""]), vec!["a"]);
/// ```
pub fn filter_nil<T>(mut values: Vec<T>) -> Vec<T>
where
    T: Default + PartialEq,
{
    let empty = T::default();
    values.retain(|value| *value != empty);
    values
}

/// Trims leading and trailing whitespace of every string, in place.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::trim_strings;
///
/// let trimmed = trim_strings(vec!["  a ".to_string(), "b\n".to_string()]);
/// assert_eq!(trimmed, vec!["a", "b"]);
/// ```
pub fn trim_strings(mut values: Vec<String>) -> Vec<String> {
    for value in &mut values {
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_owned();
        }
    }
    values
}

/// Returns `true` if `candidate` occurs anywhere in `values`.
///
/// This is a linear scan; the slice is not assumed to be sorted or indexed.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::has;
///
/// assert!(has(&[1, 2, 3], &2));
/// assert!(!has::<i32>(&[], &2));
/// ```
pub fn has<T: PartialEq>(values: &[T], candidate: &T) -> bool {
    values.iter().any(|value| value == candidate)
}

/// Builds a lookup map whose keys are the values of the slice, each mapped
/// to `true`.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::to_key_map;
///
/// let lookup = to_key_map(&["x", "y", "x"]);
/// assert_eq!(lookup.len(), 2);
/// assert_eq!(lookup.get("x"), Some(&true));
/// ```
pub fn to_key_map<T>(values: &[T]) -> HashMap<T, bool>
where
    T: Eq + Hash + Clone,
{
    values.iter().map(|value| (value.clone(), true)).collect()
}
