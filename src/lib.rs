//! # utilkit
//!
//! Small, generic, stateless helpers for slices, maps, identified entities,
//! numbers, strings and time values.
//!
//! ## Overview
//!
//! - **Slices**: uniqueness, membership, union, cross, n-ary intersection
//!   and difference, multiset equality
//! - **Maps**: key membership, merge, key difference, filter by keys
//! - **Models**: the [`HasId`](models::HasId) capability, identity-based
//!   difference, distinct identifier and projected-value collection
//! - **Numeric**: closed [`Numeric`](numeric::Numeric) trait with min, max,
//!   sum, conversion and parsing
//! - **Short**: eager and lazy conditional selection
//! - **Strings**: code-point aware truncation
//! - **Time**: midnight of the current day in any time zone
//!
//! ## Feature Flags
//!
//! - `numeric`, `slices`, `maps`, `models`, `short`, `strings`, `time`:
//!   one flag per module
//! - `derive`: `#[derive(HasId)]`
//! - `default`: every module plus `derive`
//! - `serde`: `Serialize`/`Deserialize` for the error types
//! - `fxhash` / `ahash`: faster hashers for the internal membership sets
//! - `full`: everything except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use utilkit::prelude::*;
//!
//! assert_eq!(unique(vec![0, 1, 2, 2, 3, 1]), vec![0, 1, 2, 3]);
//! assert_eq!(slice_diff(&[vec![1, 2, 3, 4], vec![2, 3]]), vec![1, 4]);
//! assert!(is_equal(&[1, 2, 3], &[3, 2, 1]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every public helper. Modules with clashing names
/// (`maps::has`, `slices::has`) are only reachable through their module.
///
/// # Usage
///
/// ```rust
/// use utilkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "numeric")]
    pub use crate::numeric::{Numeric, ParseNumericError, convert_slice, max, min, parse, sum};

    #[cfg(feature = "slices")]
    pub use crate::slices::{
        cross, filter_nil, is_equal, slice_diff, slice_intersect, to_key_map, trim_strings, union,
        unique, unique_in_place,
    };

    #[cfg(feature = "maps")]
    pub use crate::maps::{diff_keys, filter_by_keys, merge};

    #[cfg(feature = "models")]
    pub use crate::models::{
        HasId, collect_ids, collect_ids_from_map, entity_diff, unique_values,
        unique_values_from_map,
    };

    #[cfg(feature = "short")]
    pub use crate::short::{first_non_empty, if_else, if_else_with, try_if_else_with};

    #[cfg(feature = "strings")]
    pub use crate::strings::truncate;

    #[cfg(feature = "time")]
    pub use crate::time::{TimeError, midnight, midnight_by_time_zone, midnight_in, midnight_of};
}

#[cfg(feature = "slices")]
mod hashing;

#[cfg(feature = "numeric")]
pub mod numeric;

#[cfg(feature = "slices")]
pub mod slices;

#[cfg(feature = "maps")]
pub mod maps;

#[cfg(feature = "models")]
pub mod models;

#[cfg(feature = "short")]
pub mod short;

#[cfg(feature = "strings")]
pub mod strings;

#[cfg(feature = "time")]
pub mod time;
