//! Hasher selection for the internal membership sets.
//!
//! Every set-algebra helper in this crate tests presence through a hash set
//! that lives only for the duration of one call. The hasher used by those
//! sets is chosen at compile time:
//!
//! - `fxhash` feature: [`rustc_hash::FxBuildHasher`]
//! - `ahash` feature: [`ahash::RandomState`]
//! - neither: [`std::collections::hash_map::RandomState`]
//!
//! When both features are enabled, `fxhash` wins.
//!
//! The choice never leaks into the public API: functions that return maps
//! either reuse the caller's hasher or return a standard `HashMap`.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "fxhash")]
pub(crate) type MembershipHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type MembershipHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type MembershipHasher = std::collections::hash_map::RandomState;

/// Hash set used to test value presence within a single call.
pub(crate) type MembershipSet<T> = HashSet<T, MembershipHasher>;

/// Hash map used for per-call bookkeeping (counters, exclusion sets keyed by id).
pub(crate) type MembershipMap<K, V> = HashMap<K, V, MembershipHasher>;

/// Creates an empty membership set sized for `capacity` elements.
#[inline]
pub(crate) fn membership_set<T>(capacity: usize) -> MembershipSet<T> {
    HashSet::with_capacity_and_hasher(capacity, MembershipHasher::default())
}

/// Creates an empty membership map sized for `capacity` entries.
#[inline]
pub(crate) fn membership_map<K, V>(capacity: usize) -> MembershipMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, MembershipHasher::default())
}

// =============================================================================
// Tests
// =============================================================================
