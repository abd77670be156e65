//! Derive macro for the utilkit `HasId` capability.
//!
//! # Example
//!
//! ```rust,ignore
//! use utilkit::models::{HasId, collect_ids};
//!
//! #[derive(HasId)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(HasId)]
//! struct Session {
//!     #[id]
//!     token: String,
//!     user: u64,
//! }
//!
//! #[derive(HasId)]
//! struct Sku(u32);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod has_id;

use proc_macro::TokenStream;

/// Derive macro implementing `utilkit::models::HasId` for a struct.
///
/// The identifier field is chosen as follows:
///
/// - a field marked `#[id]`, if there is one (at most one is allowed)
/// - otherwise a named field called `id`
/// - otherwise, for a tuple struct with exactly one field, that field
///
/// The generated `id()` clones the field, and `HasId::Id` is the field's
/// type, which must implement `Eq`, `Hash` and `Clone`.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::utilkit::models::HasId for StructName {
///     type Id = FieldType;
///
///     fn id(&self) -> Self::Id {
///         ::core::clone::Clone::clone(&self.field)
///     }
/// }
/// ```
///
/// # Errors
///
/// Enums, unions, unit structs, structs with several `#[id]` fields and
/// structs where no identifier field can be chosen are rejected at compile
/// time.
#[proc_macro_derive(HasId, attributes(id))]
pub fn derive_has_id(input: TokenStream) -> TokenStream {
    has_id::derive_has_id_impl(input)
}
