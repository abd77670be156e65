//! String parsing into [`Numeric`] types.

use super::Numeric;

/// Error returned by [`parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseNumericError {
    /// The input is not a number of the requested type.
    #[error("invalid numeric value {input:?} for type {type_name}")]
    Invalid {
        /// The trimmed input.
        input: String,
        /// Name of the requested type.
        type_name: String,
    },
    /// A negative number was parsed into an unsigned type.
    #[error("negative value {input:?} cannot be parsed into unsigned type {type_name}")]
    NegativeUnsigned {
        /// The trimmed input.
        input: String,
        /// Name of the requested type.
        type_name: String,
    },
}

/// Parses `input` into `T` after trimming surrounding whitespace.
///
/// # Errors
///
/// - [`ParseNumericError::NegativeUnsigned`] when `input` starts with `-`
///   and `T` is unsigned.
/// - [`ParseNumericError::Invalid`] for anything `T::from_str` rejects,
///   including out-of-range values.
///
/// # Examples
///
/// ```rust
/// use utilkit::numeric::{parse, ParseNumericError};
///
/// assert_eq!(parse::<u16>(" 42 "), Ok(42));
/// assert!(matches!(
///     parse::<u32>("-5"),
///     Err(ParseNumericError::NegativeUnsigned { .. })
/// ));
/// ```
pub fn parse<T: Numeric>(input: &str) -> Result<T, ParseNumericError> {
    let trimmed = input.trim();
    let type_name = std::any::type_name::<T>();

    if !T::SIGNED && trimmed.starts_with('-') {
        tracing::debug!(
            input = trimmed,
            type_name,
            "negative value for unsigned type"
        );
        return Err(ParseNumericError::NegativeUnsigned {
            input: trimmed.to_owned(),
            type_name: type_name.to_owned(),
        });
    }

    trimmed.parse::<T>().map_err(|_| {
        tracing::debug!(input = trimmed, type_name, "numeric parse failed");
        ParseNumericError::Invalid {
            input: trimmed.to_owned(),
            type_name: type_name.to_owned(),
        }
    })
}
