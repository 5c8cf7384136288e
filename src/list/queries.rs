use crate::{interface::Comparator, marker_set::MarkerSet, node_heights::MAX_HEIGHT};
use super::{node::NodeKey, IntervalSkiplist};


// The query family. Every query is a tower descent plus, for the range
// variants, a level-0 walk from where the descent lands; none of them touch
// per-interval state beyond the marker sets on the edges and nodes visited.
impl<K, M, Cmp> IntervalSkiplist<K, M, Cmp>
where
    K:   Clone,
    M:   Clone + PartialEq,
    Cmp: Comparator<K>,
{
    /// The markers of every stored interval containing all of `points`.
    ///
    /// For a single point the result is ordered by the levels of the descent,
    /// top to bottom, with markers starting exactly at the point last. For
    /// multiple points the order is unspecified: an interval contains every
    /// point iff it contains the smallest and largest, so the result is the
    /// intersection of those two stabbing queries.
    ///
    /// An empty `points` yields an empty result.
    #[must_use]
    pub fn find_containing(&self, points: &[K]) -> Vec<M> {
        let Some(first) = points.first() else {
            return Vec::new();
        };

        if points.len() == 1 {
            return self.containing_point(first).into_vec();
        }

        let mut min = first;
        let mut max = first;
        for point in &points[1..] {
            if self.cmp.cmp(point, min).is_lt() {
                min = point;
            }
            if self.cmp.cmp(point, max).is_gt() {
                max = point;
            }
        }

        let min_hits = self.containing_point(min);
        let max_hits = self.containing_point(max);

        min_hits
            .into_vec()
            .into_iter()
            .filter(|marker| max_hits.contains(marker))
            .collect()
    }

    /// The markers of every stored interval intersecting the closed range
    /// `[range_start, range_end]`.
    ///
    /// Intervals intersecting the range either contain `range_start` or
    /// begin inside the range, so this is a stabbing descent followed by a
    /// level-0 walk collecting `starting` sets up to `range_end`.
    #[must_use]
    pub fn find_intersecting(&self, range_start: &K, range_end: &K) -> Vec<M> {
        let mut found = MarkerSet::new();
        let landing = self.descend_collecting(range_start, &mut found);

        let mut walk = self.node(landing).next(0);
        while self.at_or_before(walk, range_end) {
            found.extend_from(self.node(walk).starting());
            walk = self.node(walk).next(0);
        }

        found.into_vec()
    }

    /// The markers of intervals starting exactly at `point`.
    #[must_use]
    pub fn find_starting_at(&self, point: &K) -> Vec<M> {
        let closest = self.find_closest(point);

        if self.cmp.cmp(self.node(closest).index(), point).is_eq() {
            self.node(closest).starting().to_vec()
        } else {
            Vec::new()
        }
    }

    /// The markers of intervals ending exactly at `point`.
    #[must_use]
    pub fn find_ending_at(&self, point: &K) -> Vec<M> {
        let closest = self.find_closest(point);

        if self.cmp.cmp(self.node(closest).index(), point).is_eq() {
            self.node(closest).ending().to_vec()
        } else {
            Vec::new()
        }
    }

    /// The markers of intervals starting in the closed range `[from, to]`.
    #[must_use]
    pub fn find_starting_in(&self, from: &K, to: &K) -> Vec<M> {
        let mut found = MarkerSet::new();

        let mut walk = self.find_closest(from);
        while self.at_or_before(walk, to) {
            found.extend_from(self.node(walk).starting());
            walk = self.node(walk).next(0);
        }

        found.into_vec()
    }

    /// The markers of intervals ending in the closed range `[from, to]`.
    #[must_use]
    pub fn find_ending_in(&self, from: &K, to: &K) -> Vec<M> {
        let mut found = MarkerSet::new();

        let mut walk = self.find_closest(from);
        while self.at_or_before(walk, to) {
            found.extend_from(self.node(walk).ending());
            walk = self.node(walk).next(0);
        }

        found.into_vec()
    }

    /// The markers of intervals contained entirely within the closed range
    /// `[from, to]`.
    ///
    /// A single level-0 walk suffices: an interval is contained iff its end
    /// node is reached while its start has already been seen inside the
    /// range.
    #[must_use]
    pub fn find_contained_in(&self, from: &K, to: &K) -> Vec<M> {
        let mut started = MarkerSet::new();
        let mut found = MarkerSet::new();

        let mut walk = self.find_closest(from);
        while self.at_or_before(walk, to) {
            started.extend_from(self.node(walk).starting());

            for marker in self.node(walk).ending().iter() {
                if started.contains(marker) {
                    found.insert(marker.clone());
                }
            }

            walk = self.node(walk).next(0);
        }

        found.into_vec()
    }

    /// The markers of intervals starting at the smallest occupied index, or
    /// empty if no intervals are stored.
    #[must_use]
    pub fn find_first_after_min(&self) -> Vec<M> {
        let first = self.node(self.head).next(0);

        if first == self.tail {
            Vec::new()
        } else {
            self.node(first).starting().to_vec()
        }
    }

    /// The markers of intervals ending at the largest occupied index, or
    /// empty if no intervals are stored.
    #[must_use]
    pub fn find_last_before_max(&self) -> Vec<M> {
        // Descend the head tower toward the tail, tracking the rightmost
        // non-tail node; this lands on the last occupied index in O(log n).
        let mut node = self.head;

        for level in (0..MAX_HEIGHT).rev() {
            loop {
                let next = self.node(node).next(level);
                if next == self.tail {
                    break;
                }
                node = next;
            }
        }

        if node == self.head {
            Vec::new()
        } else {
            self.node(node).ending().to_vec()
        }
    }

    /// Single-point stabbing query: the markers of every interval containing
    /// `point`, in descent order.
    fn containing_point(&self, point: &K) -> MarkerSet<M> {
        let mut found = MarkerSet::new();
        let landing = self.descend_collecting(point, &mut found);

        // A node pinned exactly at the point contributes the intervals that
        // start there; everything else was already collected from the edges.
        let next = self.node(landing).next(0);
        if next != self.tail && self.cmp.cmp(self.node(next).index(), point).is_eq() {
            found.extend_from(self.node(next).starting());
        }

        found
    }

    /// Descend toward `point` as in [`find_closest`], accumulating the
    /// markers of every edge the descent stops on. By the stair-step
    /// decoration, an edge carries a marker iff the marker's interval covers
    /// the edge's whole span, so the collected markers are exactly the
    /// intervals containing `point` (minus those starting at it). Returns
    /// the last node visited at level 0.
    ///
    /// [`find_closest`]: Self::find_closest
    fn descend_collecting(&self, point: &K, found: &mut MarkerSet<M>) -> NodeKey {
        let mut node = self.head;

        for level in (0..MAX_HEIGHT).rev() {
            loop {
                let next = self.node(node).next(level);
                if self.before_index(next, point) {
                    node = next;
                } else {
                    break;
                }
            }

            found.extend_from(self.node(node).markers(level));
        }

        node
    }

    /// Whether `candidate` is a live (non-tail) node whose index sorts at or
    /// before `bound`. The walk guards of the range queries.
    #[inline]
    #[must_use]
    fn at_or_before(&self, candidate: NodeKey, bound: &K) -> bool {
        candidate != self.tail
            && self.cmp.cmp(self.node(candidate).index(), bound).is_le()
    }
}
