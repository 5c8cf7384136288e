use crate::{interface::Comparator, node_heights::MAX_HEIGHT};
use super::{node::NodeKey, IntervalSkiplist};


// Tower descent. Every public operation funnels through these searches.
impl<K, M, Cmp: Comparator<K>> IntervalSkiplist<K, M, Cmp> {
    /// Return the leftmost node whose index sorts greater than or equal to
    /// `index` (possibly the tail sentinel).
    ///
    /// Starting at the head tower, each level is walked forward while the
    /// next node still sorts strictly before `index`, then the search drops
    /// one level. Expected `O(log n)`.
    #[must_use]
    pub(crate) fn find_closest(&self, index: &K) -> NodeKey {
        let mut scratch = [self.head; MAX_HEIGHT];
        self.find_closest_recording(index, &mut scratch)
    }

    /// As [`find_closest`], also recording in `update` the last node visited
    /// at each level. `update[level]` is the node whose forward edge at
    /// `level` would cross `index`, which is exactly the splice vector the
    /// mutation paths need.
    ///
    /// [`find_closest`]: Self::find_closest
    pub(crate) fn find_closest_recording(
        &self,
        index:  &K,
        update: &mut [NodeKey; MAX_HEIGHT],
    ) -> NodeKey {
        let mut node = self.head;

        for level in (0..MAX_HEIGHT).rev() {
            loop {
                let next = self.node(node).next(level);

                if self.before_index(next, index) {
                    // `next` is still too small; keep walking this level.
                    node = next;
                } else {
                    break;
                }
            }

            update[level] = node;
        }

        self.node(node).next(0)
    }

    /// Whether `candidate`'s index sorts strictly before `index`. The tail
    /// sentinel never does: its forward edges must not be followed, even
    /// when a caller probes past the sentinel bound.
    #[inline]
    #[must_use]
    pub(crate) fn before_index(&self, candidate: NodeKey, index: &K) -> bool {
        candidate != self.tail
            && self.cmp.cmp(self.node(candidate).index(), index).is_lt()
    }
}
