//! Conditional value selection.
//!
//! Small expression-level helpers for picking one of two values, eagerly or
//! lazily, and for picking the first non-empty value of a list.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::short::{first_non_empty, if_else, if_else_with};
//!
//! assert_eq!(if_else(2 > 1, "yes", "no"), "yes");
//! assert_eq!(if_else_with(false, || 1, || 2), 2);
//! assert_eq!(first_non_empty(&["", "", "fallback"]), "fallback");
//! ```

/// Returns `then` if `condition` holds, otherwise `otherwise`.
///
/// Both values are evaluated by the caller before the call; use
/// [`if_else_with`] when either branch is expensive.
#[inline]
pub fn if_else<T>(condition: bool, then: T, otherwise: T) -> T {
    if condition { then } else { otherwise }
}

/// Calls `then` if `condition` holds, otherwise calls `otherwise`.
///
/// Only the selected branch runs.
///
/// # Examples
///
/// ```rust
/// use utilkit::short::if_else_with;
///
/// let value = if_else_with(true, || "cheap", || unreachable!());
/// assert_eq!(value, "cheap");
/// ```
#[inline]
pub fn if_else_with<T, Then, Otherwise>(condition: bool, then: Then, otherwise: Otherwise) -> T
where
    Then: FnOnce() -> T,
    Otherwise: FnOnce() -> T,
{
    if condition { then() } else { otherwise() }
}

/// Fallible form of [`if_else_with`]: calls the selected branch and returns
/// its result unchanged.
///
/// # Errors
///
/// Returns whatever error the selected branch returns.
///
/// # Examples
///
/// ```rust
/// use utilkit::short::try_if_else_with;
///
/// let parsed: Result<i32, std::num::ParseIntError> =
///     try_if_else_with(false, || "x".parse(), || "7".parse());
/// assert_eq!(parsed, Ok(7));
/// ```
#[inline]
pub fn try_if_else_with<T, E, Then, Otherwise>(
    condition: bool,
    then: Then,
    otherwise: Otherwise,
) -> Result<T, E>
where
    Then: FnOnce() -> Result<T, E>,
    Otherwise: FnOnce() -> Result<T, E>,
{
    if condition { then() } else { otherwise() }
}

/// Returns the first value that differs from `T::default()`, or the default
/// when every value is empty (or the slice is).
///
/// # Examples
///
/// ```rust
/// use utilkit::short::first_non_empty;
///
/// assert_eq!(first_non_empty(&[0, 0, 3, 4]), 3);
/// assert_eq!(first_non_empty::<u8>(&[]), 0);
/// ```
pub fn first_non_empty<T>(values: &[T]) -> T
where
    T: Default + PartialEq + Clone,
{
    let empty = T::default();
    values
        .iter()
        .find(|value| **value != empty)
        .cloned()
        .unwrap_or(empty)
}
