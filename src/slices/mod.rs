//! Helpers for sequences of comparable values.
//!
//! The functions in this module fall into two layers:
//!
//! - Filters: [`unique`], [`unique_in_place`], [`filter_nil`],
//!   [`trim_strings`], [`has`] and [`to_key_map`]
//! - Set algebra built on hash-based membership sets: [`union`], [`cross`],
//!   [`slice_intersect`], [`slice_diff`] and [`is_equal`]
//!
//! # Ownership
//!
//! Filters that compact a sequence take it by value (or by `&mut`) and reuse
//! its allocation. The caller gives up the original contents explicitly, so
//! no stale alias of the pre-filter sequence can be observed. Set-algebra
//! functions borrow their inputs and always allocate a fresh result.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::slices::{cross, slice_diff, unique};
//!
//! assert_eq!(unique(vec![0, 1, 2, 2, 3, 1]), vec![0, 1, 2, 3]);
//! assert_eq!(cross(&[2, 2, 3], &[2, 3, 4]), vec![2, 2, 3]);
//! assert_eq!(slice_diff(&[vec![1, 2, 3, 4], vec![2, 3]]), vec![1, 4]);
//! ```

mod filter;
mod set_ops;

pub use filter::{filter_nil, has, to_key_map, trim_strings, unique, unique_in_place};
pub use set_ops::{cross, is_equal, slice_diff, slice_intersect, union};
