use std::cmp::Ordering;
use std::{rc::Rc, sync::Arc};


/// Interface for comparing indices of an [`IntervalSkiplist`].
///
/// Implementations must be a pure total order: for any fixed comparator,
/// `cmp(a, b)` always returns the same [`Ordering`], `cmp(a, b)` is the
/// reverse of `cmp(b, a)`, and the relation is transitive. The list consults
/// the comparator for every search, splice, and marker adjustment, so a
/// comparator that violates these rules produces logic errors (though never
/// memory unsafety).
///
/// [`IntervalSkiplist`]: crate::IntervalSkiplist
pub trait Comparator<K: ?Sized> {
    /// Compare two indices.
    #[must_use]
    fn cmp(&self, lhs: &K, rhs: &K) -> Ordering;
}

/// A [`Comparator`] which uses the [`Ord`] implementation of `K`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefaultComparator;

impl<K: Ord> Comparator<K> for DefaultComparator {
    /// Defers to `Ord::cmp`.
    #[inline]
    fn cmp(&self, lhs: &K, rhs: &K) -> Ordering {
        Ord::cmp(lhs, rhs)
    }
}

impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for &C {
    #[inline]
    fn cmp(&self, lhs: &K, rhs: &K) -> Ordering {
        C::cmp(self, lhs, rhs)
    }
}

impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for Box<C> {
    #[inline]
    fn cmp(&self, lhs: &K, rhs: &K) -> Ordering {
        C::cmp(self, lhs, rhs)
    }
}

impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for Rc<C> {
    #[inline]
    fn cmp(&self, lhs: &K, rhs: &K) -> Ordering {
        C::cmp(self, lhs, rhs)
    }
}

impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for Arc<C> {
    #[inline]
    fn cmp(&self, lhs: &K, rhs: &K) -> Ordering {
        C::cmp(self, lhs, rhs)
    }
}
