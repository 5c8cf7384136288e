use crate::marker_set::MarkerSet;


/// A stable, copyable handle to a node in the list's pool.
///
/// Nodes hold handles to one another rather than references: the marker
/// adjustment algorithms touch many nodes per operation, and indices into a
/// [`slab::Slab`] let them do so without aliasing gymnastics. A key is only
/// meaningful for the pool it came from, and only until that node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeKey(usize);

impl NodeKey {
    #[inline]
    #[must_use]
    pub(crate) const fn new(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn raw(self) -> usize {
        self.0
    }
}


/// An occupied index in the list: one tower of forward links plus the marker
/// state hanging off it.
///
/// `next` and `markers` are parallel vectors of length `height`: `next[i]`
/// is the target of the forward edge at level `i`, and `markers[i]` is the
/// set of markers decorating that edge. `starting`/`ending` hold the markers
/// of intervals whose start/end is pinned to this node's index, and
/// `endpoint` is their union with each marker stored once; a node stays
/// alive exactly as long as `endpoint` is non-empty.
///
/// The tail sentinel is the one node with an empty tower: it is only ever
/// the target of edges, never their source.
#[derive(Debug)]
pub(crate) struct Node<K, M> {
    index:    K,
    next:     Vec<NodeKey>,
    markers:  Vec<MarkerSet<M>>,
    starting: MarkerSet<M>,
    ending:   MarkerSet<M>,
    endpoint: MarkerSet<M>,
}

impl<K, M> Node<K, M> {
    /// A node whose forward edges initially point at the given targets; the
    /// tower height is the length of `tower`.
    #[must_use]
    pub(crate) fn with_tower(index: K, tower: Vec<NodeKey>) -> Self {
        let markers = (0..tower.len()).map(|_| MarkerSet::new()).collect();

        Self {
            index,
            next: tower,
            markers,
            starting: MarkerSet::new(),
            ending:   MarkerSet::new(),
            endpoint: MarkerSet::new(),
        }
    }

    /// The tail sentinel: no tower, and its forward edges are never followed.
    #[must_use]
    pub(crate) fn tail_sentinel(index: K) -> Self {
        Self::with_tower(index, Vec::new())
    }

    #[inline]
    #[must_use]
    pub(crate) fn index(&self) -> &K {
        &self.index
    }

    #[inline]
    #[must_use]
    pub(crate) fn height(&self) -> usize {
        self.next.len()
    }

    /// # Panics
    /// Panics if `level` is not less than this node's height.
    #[inline]
    #[must_use]
    pub(crate) fn next(&self, level: usize) -> NodeKey {
        self.next[level]
    }

    /// # Panics
    /// Panics if `level` is not less than this node's height.
    #[inline]
    pub(crate) fn set_next(&mut self, level: usize, target: NodeKey) {
        self.next[level] = target;
    }

    /// The markers decorating the forward edge at `level`.
    ///
    /// # Panics
    /// Panics if `level` is not less than this node's height.
    #[inline]
    #[must_use]
    pub(crate) fn markers(&self, level: usize) -> &MarkerSet<M> {
        &self.markers[level]
    }

    /// # Panics
    /// Panics if `level` is not less than this node's height.
    #[inline]
    #[must_use]
    pub(crate) fn markers_mut(&mut self, level: usize) -> &mut MarkerSet<M> {
        &mut self.markers[level]
    }

    #[inline]
    #[must_use]
    pub(crate) fn starting(&self) -> &MarkerSet<M> {
        &self.starting
    }

    #[inline]
    #[must_use]
    pub(crate) fn starting_mut(&mut self) -> &mut MarkerSet<M> {
        &mut self.starting
    }

    #[inline]
    #[must_use]
    pub(crate) fn ending(&self) -> &MarkerSet<M> {
        &self.ending
    }

    #[inline]
    #[must_use]
    pub(crate) fn ending_mut(&mut self) -> &mut MarkerSet<M> {
        &mut self.ending
    }

    #[inline]
    #[must_use]
    pub(crate) fn endpoint(&self) -> &MarkerSet<M> {
        &self.endpoint
    }

    #[inline]
    #[must_use]
    pub(crate) fn endpoint_mut(&mut self) -> &mut MarkerSet<M> {
        &mut self.endpoint
    }
}
