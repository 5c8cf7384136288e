mod adjust;
mod node;
mod placement;
mod queries;
mod search;
mod verify;


use std::hash::Hash;

use hashbrown::HashMap;
use oorandom::Rand32;
use slab::Slab;

use crate::error::{IntervalError, Result};
use crate::interface::{Comparator, DefaultComparator};
use crate::node_heights::{random_node_height, MAX_HEIGHT};
use self::node::{Node, NodeKey};
use self::placement::EdgeOp;


/// Seed used by the unseeded constructors. Randomness only shapes the towers,
/// never observable results, so a fixed default is fine outside of tests that
/// want to pin a particular shape.
const DEFAULT_SEED: u64 = 0x_0BAD_5EED;


/// A closed interval `[start, end]` over the index type `K`, with
/// `start <= end` under the list's comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<K> {
    start: K,
    end:   K,
}

impl<K> Interval<K> {
    #[inline]
    #[must_use]
    pub(crate) const fn new(start: K, end: K) -> Self {
        Self { start, end }
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> &K {
        &self.start
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> &K {
        &self.end
    }
}


/// An interval skip list: an in-memory container mapping opaque markers to
/// closed intervals `[start, end]` over a totally ordered index type `K`,
/// answering stabbing and range queries in expected `O(log n)`.
///
/// Structurally this is a randomized skip list whose nodes are the distinct
/// interval endpoints, bounded by head and tail sentinels at the
/// caller-supplied minimum and maximum indices. Every forward edge carries
/// the set of markers whose interval covers that edge's whole span, placed
/// along each interval's maximal stair-step path between its endpoint nodes.
/// Stabbing queries then collect markers from the `O(log n)` edges of a
/// single descent instead of inspecting intervals one by one; the price is
/// paid on mutation, where marker decorations are repaired as endpoint nodes
/// are spliced in and out.
///
/// The list is single-threaded: queries take `&self`, mutations `&mut self`.
/// Markers are equality-and-hash keys; indices are compared exclusively
/// through the injected [`Comparator`].
#[derive(Debug)]
pub struct IntervalSkiplist<K, M, Cmp = DefaultComparator> {
    pool:      Slab<Node<K, M>>,
    head:      NodeKey,
    tail:      NodeKey,
    directory: HashMap<M, Interval<K>>,
    cmp:       Cmp,
    prng:      Rand32,
}

// Pool plumbing; no trait bounds needed.
impl<K, M, Cmp> IntervalSkiplist<K, M, Cmp> {
    #[inline]
    #[must_use]
    fn node(&self, key: NodeKey) -> &Node<K, M> {
        &self.pool[key.raw()]
    }

    #[inline]
    #[must_use]
    fn node_mut(&mut self, key: NodeKey) -> &mut Node<K, M> {
        &mut self.pool[key.raw()]
    }

    /// The number of stored intervals.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    /// Whether no intervals are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Read-only view of the interval directory: every stored marker mapped
    /// to its interval. Iteration order is arbitrary.
    #[inline]
    #[must_use]
    pub fn intervals_by_marker(&self) -> &HashMap<M, Interval<K>> {
        &self.directory
    }
}

impl<K, M> IntervalSkiplist<K, M, DefaultComparator>
where
    K: Ord + Clone,
{
    /// An empty list over the natural order of `K`, bounded by the sentinel
    /// indices `min_index` and `max_index`. Every stored endpoint must sort
    /// strictly between the two.
    #[inline]
    #[must_use]
    pub fn new(min_index: K, max_index: K) -> Self {
        Self::with_comparator(DefaultComparator, min_index, max_index)
    }

    /// As [`new`], with the PRNG that draws tower heights seeded explicitly
    /// so tests can pin the tower shape.
    ///
    /// [`new`]: Self::new
    #[inline]
    #[must_use]
    pub fn new_seeded(min_index: K, max_index: K, seed: u64) -> Self {
        Self::with_comparator_seeded(DefaultComparator, min_index, max_index, seed)
    }
}

impl<K, M, Cmp> IntervalSkiplist<K, M, Cmp>
where
    K:   Clone,
    Cmp: Comparator<K>,
{
    /// An empty list ordered by `cmp`, bounded by the sentinel indices
    /// `min_index` and `max_index`.
    ///
    /// The sentinels are opaque to the list; the caller must pick values
    /// that sort strictly outside every index it will store.
    #[inline]
    #[must_use]
    pub fn with_comparator(cmp: Cmp, min_index: K, max_index: K) -> Self {
        Self::with_comparator_seeded(cmp, min_index, max_index, DEFAULT_SEED)
    }

    /// As [`with_comparator`], with an explicit PRNG seed.
    ///
    /// [`with_comparator`]: Self::with_comparator
    #[must_use]
    pub fn with_comparator_seeded(cmp: Cmp, min_index: K, max_index: K, seed: u64) -> Self {
        debug_assert!(
            cmp.cmp(&min_index, &max_index).is_lt(),
            "sentinel bounds must sort min strictly before max",
        );

        let mut pool = Slab::with_capacity(2);
        let tail = NodeKey::new(pool.insert(Node::tail_sentinel(max_index)));
        let head = NodeKey::new(pool.insert(Node::with_tower(min_index, vec![tail; MAX_HEIGHT])));

        Self {
            pool,
            head,
            tail,
            directory: HashMap::new(),
            cmp,
            prng: Rand32::new(seed),
        }
    }
}

// Mutation drivers.
impl<K, M, Cmp> IntervalSkiplist<K, M, Cmp>
where
    K:   Clone,
    M:   Clone + Eq + Hash,
    Cmp: Comparator<K>,
{
    /// Store the closed interval `[start, end]` under `marker`.
    ///
    /// # Errors
    /// - [`IntervalError::DuplicateMarker`] if `marker` already maps to an
    ///   interval,
    /// - [`IntervalError::ReversedEndpoints`] if `start` sorts after `end`,
    /// - [`IntervalError::EndpointOutOfBounds`] if either endpoint does not
    ///   sort strictly between the sentinel bounds.
    ///
    /// On error the list is unchanged.
    pub fn insert(&mut self, marker: M, start: K, end: K) -> Result<()> {
        self.check_endpoints(&start, &end)?;
        if self.directory.contains_key(&marker) {
            return Err(IntervalError::DuplicateMarker);
        }

        let start_node = self.ensure_node(&start);
        let end_node = self.ensure_node(&end);

        self.node_mut(start_node).starting_mut().insert(marker.clone());
        self.node_mut(start_node).endpoint_mut().insert(marker.clone());
        self.node_mut(end_node).ending_mut().insert(marker.clone());
        // Deduplicated when both endpoints share a node, so the liveness
        // check on remove collapses correctly for zero-length intervals.
        self.node_mut(end_node).endpoint_mut().insert(marker.clone());

        self.apply_on_stair_path(&marker, start_node, end_node, EdgeOp::Stamp);
        self.directory.insert(marker, Interval::new(start, end));

        Ok(())
    }

    /// Discard the interval stored under `marker`. Unknown markers are
    /// ignored.
    pub fn remove(&mut self, marker: &M) {
        let Some(interval) = self.directory.remove(marker) else {
            return;
        };

        let start_node = self.find_closest(interval.start());
        let end_node = self.find_closest(interval.end());
        debug_assert!(
            self.cmp.cmp(self.node(start_node).index(), interval.start()).is_eq()
                && self.cmp.cmp(self.node(end_node).index(), interval.end()).is_eq(),
            "stored interval endpoints must be pinned to live nodes",
        );

        self.node_mut(start_node).starting_mut().remove(marker);
        self.node_mut(start_node).endpoint_mut().remove(marker);
        self.node_mut(end_node).ending_mut().remove(marker);
        self.node_mut(end_node).endpoint_mut().remove(marker);

        self.apply_on_stair_path(marker, start_node, end_node, EdgeOp::Unstamp);

        if self.node(start_node).endpoint().is_empty() {
            self.remove_node(interval.start());
        }
        if start_node != end_node && self.node(end_node).endpoint().is_empty() {
            self.remove_node(interval.end());
        }
    }

    /// Replace the interval stored under `marker` with `[start, end]`,
    /// storing it fresh if the marker was unknown. Equivalent to a remove
    /// followed by an insert, except that the endpoints are validated first,
    /// so a failing update leaves the previous interval in place.
    ///
    /// # Errors
    /// As [`insert`], minus [`IntervalError::DuplicateMarker`].
    ///
    /// [`insert`]: Self::insert
    pub fn update(&mut self, marker: M, start: K, end: K) -> Result<()> {
        self.check_endpoints(&start, &end)?;
        self.remove(&marker);
        self.insert(marker, start, end)
    }

    /// Discard every stored interval, keeping the sentinels and comparator.
    pub fn clear(&mut self) {
        let (head, tail) = (self.head, self.tail);

        self.pool
            .retain(|raw, _| raw == head.raw() || raw == tail.raw());

        for level in 0..MAX_HEIGHT {
            self.node_mut(head).set_next(level, tail);
            self.node_mut(head).markers_mut(level).clear();
        }

        self.directory.clear();
        log::trace!("cleared interval skip list");
    }

    /// Whether `marker` currently maps to an interval.
    #[inline]
    #[must_use]
    pub fn contains_marker(&self, marker: &M) -> bool {
        self.directory.contains_key(marker)
    }

    /// The interval stored under `marker`, if any.
    #[inline]
    #[must_use]
    pub fn interval(&self, marker: &M) -> Option<&Interval<K>> {
        self.directory.get(marker)
    }

    fn check_endpoints(&self, start: &K, end: &K) -> Result<()> {
        if self.cmp.cmp(start, end).is_gt() {
            return Err(IntervalError::ReversedEndpoints);
        }

        let min = self.node(self.head).index();
        let max = self.node(self.tail).index();
        if self.cmp.cmp(start, min).is_le() || self.cmp.cmp(end, max).is_ge() {
            return Err(IntervalError::EndpointOutOfBounds);
        }

        Ok(())
    }

    /// The node pinned at `index`, splicing in a fresh one of random height
    /// if the index is not yet occupied.
    fn ensure_node(&mut self, index: &K) -> NodeKey {
        let mut update = [self.head; MAX_HEIGHT];
        let closest = self.find_closest_recording(index, &mut update);

        if closest != self.tail && self.cmp.cmp(self.node(closest).index(), index).is_eq() {
            return closest;
        }

        let height = random_node_height(&mut self.prng);
        let tower = (0..height)
            .map(|level| self.node(update[level]).next(level))
            .collect();
        let key = NodeKey::new(self.pool.insert(Node::with_tower(index.clone(), tower)));

        for level in 0..height {
            self.node_mut(update[level]).set_next(level, key);
        }

        log::trace!("spliced endpoint node with a height-{height} tower");
        self.adjust_markers_on_insert(key, &update);

        key
    }

    /// Unlink and discard the node pinned at `index`, repairing the marker
    /// decoration of intervals that rode its tower. No-op if the index is
    /// unoccupied.
    fn remove_node(&mut self, index: &K) {
        let mut update = [self.head; MAX_HEIGHT];
        let node = self.find_closest_recording(index, &mut update);

        if node == self.tail || self.cmp.cmp(self.node(node).index(), index).is_ne() {
            return;
        }

        self.adjust_markers_on_remove(node, &update);

        let height = self.node(node).height();
        for level in 0..height {
            let successor = self.node(node).next(level);
            self.node_mut(update[level]).set_next(level, successor);
        }

        self.pool.remove(node.raw());
        log::trace!("unlinked endpoint node with a height-{height} tower");
    }
}
