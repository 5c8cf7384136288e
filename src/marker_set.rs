use std::slice;


/// An insertion-ordered collection of markers with set semantics.
///
/// Every observable marker sequence in the list (per-edge decorations, the
/// `starting`/`ending`/`endpoint` sets of a node, query results) is one of
/// these. A plain vector with linear membership tests is deliberate: the
/// sets are small in practice, iteration order is part of the contract, and
/// the adjustment algorithms need cheap snapshot-clones far more often than
/// they need sub-linear membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MarkerSet<M> {
    markers: Vec<M>,
}

impl<M> MarkerSet<M> {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { markers: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[inline]
    pub(crate) fn iter(&self) -> slice::Iter<'_, M> {
        self.markers.iter()
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.markers.clear();
    }

    #[inline]
    #[must_use]
    pub(crate) fn into_vec(self) -> Vec<M> {
        self.markers
    }
}

impl<M: PartialEq> MarkerSet<M> {
    #[must_use]
    pub(crate) fn contains(&self, marker: &M) -> bool {
        self.markers.contains(marker)
    }

    /// Append `marker` unless it is already present. Returns whether it was added.
    pub(crate) fn insert(&mut self, marker: M) -> bool {
        if self.markers.contains(&marker) {
            false
        } else {
            self.markers.push(marker);
            true
        }
    }

    /// Remove `marker` by value, preserving the order of the remaining markers.
    /// Returns whether it was present.
    pub(crate) fn remove(&mut self, marker: &M) -> bool {
        if let Some(position) = self.markers.iter().position(|stored| stored == marker) {
            self.markers.remove(position);
            true
        } else {
            false
        }
    }
}

impl<M: Clone + PartialEq> MarkerSet<M> {
    /// Clone out the current markers so a caller can iterate them while the
    /// set itself is mutated.
    #[must_use]
    pub(crate) fn snapshot(&self) -> Vec<M> {
        self.markers.clone()
    }

    #[must_use]
    pub(crate) fn to_vec(&self) -> Vec<M> {
        self.markers.clone()
    }

    /// Append every marker of `other` that is not already present, in
    /// `other`'s order.
    pub(crate) fn extend_from(&mut self, other: &Self) {
        for marker in other.iter() {
            self.insert(marker.clone());
        }
    }
}
