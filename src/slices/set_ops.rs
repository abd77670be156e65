//! Set algebra over slices.
//!
//! All functions borrow their inputs and return freshly allocated vectors.
//! Presence is tested through per-call hash sets (see [`crate::hashing`]).

use std::hash::Hash;

use smallvec::SmallVec;

use super::filter::unique;
use crate::hashing::{MembershipSet, membership_map, membership_set};

/// Number of per-sequence membership sets kept inline by [`slice_intersect`].
const INLINE_SEQUENCES: usize = 4;

/// Returns every value that appears in `first` or `second`, once.
///
/// The order of the result follows the enumeration order of the internal
/// hash set and is unspecified.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use utilkit::slices::union;
///
/// let result: BTreeSet<i32> = union(&[1, 2, 3, 4], &[3, 4, 5]).into_iter().collect();
/// assert_eq!(result, BTreeSet::from([1, 2, 3, 4, 5]));
/// ```
pub fn union<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut members: MembershipSet<&T> = membership_set(first.len() + second.len());
    members.extend(first);
    members.extend(second);

    members.into_iter().cloned().collect()
}

/// Returns the values of `first` that also occur in `second`.
///
/// Duplicates and order of `first` are preserved: a value present twice in
/// `first` and once in `second` appears twice in the result. Either input
/// being empty yields an empty result.
///
/// Unlike [`slice_intersect`], the result is not deduplicated.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::cross;
///
/// assert_eq!(cross(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// assert_eq!(cross(&[2, 2, 3], &[2, 3, 4]), vec![2, 2, 3]);
/// ```
pub fn cross<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if first.is_empty() || second.is_empty() {
        return Vec::new();
    }

    let mut members: MembershipSet<&T> = membership_set(second.len());
    members.extend(second);

    first
        .iter()
        .filter(|value| members.contains(value))
        .cloned()
        .collect()
}

/// Returns the values present in every sequence, deduplicated.
///
/// The order of the result is unspecified. If any sequence is empty, or no
/// sequences are given, the result is empty.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::slice_intersect;
///
/// assert_eq!(slice_intersect(&[vec![1, 2, 3], vec![2, 3], vec![3, 4]]), vec![3]);
/// assert!(slice_intersect(&[vec![1, 2], vec![]]).is_empty());
/// ```
pub fn slice_intersect<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    if sequences.is_empty() {
        return Vec::new();
    }

    let mut member_sets: SmallVec<[MembershipSet<&T>; INLINE_SEQUENCES]> =
        SmallVec::with_capacity(sequences.len());

    for sequence in sequences {
        let sequence = sequence.as_ref();
        if sequence.is_empty() {
            return Vec::new();
        }

        let mut members = membership_set(sequence.len());
        members.extend(sequence);
        member_sets.push(members);
    }

    let present_everywhere = sequences
        .iter()
        .flat_map(AsRef::<[T]>::as_ref)
        .filter(|value| member_sets.iter().all(|set| set.contains(value)))
        .cloned()
        .collect();

    unique(present_everywhere)
}

/// Returns the values of the first sequence that are absent from all the
/// others, deduplicated, in first-occurrence order.
///
/// With exactly one sequence, that sequence is returned as-is: neither the
/// exclusion nor the deduplication step runs, so duplicates survive. With no
/// sequences the result is empty.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::slice_diff;
///
/// assert_eq!(slice_diff(&[vec![1, 2, 3, 4], vec![2, 3]]), vec![1, 4]);
/// assert_eq!(slice_diff(&[vec![1, 1, 2]]), vec![1, 1, 2]);
/// ```
pub fn slice_diff<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let Some((first, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    let first = first.as_ref();

    if rest.is_empty() {
        tracing::trace!(
            len = first.len(),
            "single sequence difference returned verbatim"
        );
        return first.to_vec();
    }

    let mut excluded: MembershipSet<&T> = membership_set(0);
    for sequence in rest {
        excluded.extend(sequence.as_ref());
    }

    let remaining = first
        .iter()
        .filter(|value| !excluded.contains(value))
        .cloned()
        .collect();

    unique(remaining)
}

/// Returns `true` if both slices hold the same elements with the same
/// multiplicities, in any order.
///
/// Slices of different lengths are rejected before any counting happens.
///
/// # Examples
///
/// ```rust
/// use utilkit::slices::is_equal;
///
/// assert!(is_equal(&[1, 2, 3], &[3, 2, 1]));
/// assert!(!is_equal(&[1, 2], &[1, 2, 3]));
/// assert!(!is_equal(&[1, 1, 2], &[1, 2, 2]));
/// ```
pub fn is_equal<T>(first: &[T], second: &[T]) -> bool
where
    T: Eq + Hash,
{
    if first.len() != second.len() {
        return false;
    }

    let mut counts = membership_map::<&T, isize>(first.len());
    for value in first {
        *counts.entry(value).or_insert(0) += 1;
    }
    for value in second {
        *counts.entry(value).or_insert(0) -= 1;
    }

    counts.values().all(|count| *count == 0)
}
