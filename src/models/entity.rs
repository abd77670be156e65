//! The [`HasId`] capability.

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// An entity that exposes a stable, comparable identifier.
///
/// Identity-aware helpers such as [`entity_diff`](super::entity_diff) treat
/// two entities as the same iff their identifiers are equal.
///
/// # Laws
///
/// The identifier must be stable: calling [`id`](HasId::id) repeatedly on an
/// unchanged entity returns equal values.
///
/// # Examples
///
/// ```rust
/// use utilkit::models::HasId;
///
/// struct Invoice {
///     number: u64,
///     total_cents: i64,
/// }
///
/// impl HasId for Invoice {
///     type Id = u64;
///
///     fn id(&self) -> u64 {
///         self.number
///     }
/// }
///
/// let invoice = Invoice { number: 17, total_cents: 1_250 };
/// assert_eq!(invoice.id(), 17);
/// ```
pub trait HasId {
    /// The identifier type.
    type Id: Eq + Hash + Clone;

    /// Returns the identifier of this entity.
    fn id(&self) -> Self::Id;
}

impl<T: HasId + ?Sized> HasId for &T {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> Self::Id {
        (**self).id()
    }
}

impl<T: HasId + ?Sized> HasId for Box<T> {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> Self::Id {
        (**self).id()
    }
}

impl<T: HasId + ?Sized> HasId for Rc<T> {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> Self::Id {
        (**self).id()
    }
}

impl<T: HasId + ?Sized> HasId for Arc<T> {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> Self::Id {
        (**self).id()
    }
}
