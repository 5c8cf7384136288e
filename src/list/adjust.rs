use std::hash::Hash;
use std::mem;

use crate::interface::Comparator;
use crate::node_heights::MAX_HEIGHT;
use super::{node::NodeKey, IntervalSkiplist};


// Splicing a node into or out of the towers invalidates the stair-step
// decoration of unrelated markers: a new tower can let markers climb to a
// higher level on either side of it (promotion), while a removed tower
// merges edges that may now overshoot a marker's interval (demotion). The
// two procedures here repair the decoration before the structural change is
// considered complete.
//
// Both iterate marker snapshots level by level, carrying a pending queue of
// markers still moving between levels; snapshots are required because the
// underlying sets are mutated mid-scan.
impl<K, M, Cmp> IntervalSkiplist<K, M, Cmp>
where
    K:   Clone,
    M:   Clone + Eq + Hash,
    Cmp: Comparator<K>,
{
    /// Repair marker placement around `new_node`, which has just been
    /// spliced into every tower level below its height. `update[level]` must
    /// be the level-`level` predecessor of `new_node`.
    pub(crate) fn adjust_markers_on_insert(
        &mut self,
        new_node: NodeKey,
        update:   &[NodeKey; MAX_HEIGHT],
    ) {
        let top = self.node(new_node).height() - 1;

        // Right side: markers that rode the edges the splice cut in two
        // continue to the right of `new_node`, climbing its tower while the
        // next-higher edge out of it still stays inside their interval.
        let mut pending: Vec<M> = Vec::new();

        for level in 0..top {
            let from  = self.node(new_node).next(level);
            let above = self.node(new_node).next(level + 1);
            let mut climbing: Vec<M> = Vec::new();

            for marker in self.node(update[level]).markers(level).snapshot() {
                if self.end_reaches(&marker, above) {
                    // The marker can ride a higher edge; clear its footprint on
                    // this level and queue it for the level above.
                    self.remove_on_level_segment(&marker, level, from, above);
                    climbing.push(marker);
                } else {
                    self.node_mut(new_node).markers_mut(level).insert(marker);
                }
            }

            let carried = mem::take(&mut pending);
            for marker in carried {
                if self.end_reaches(&marker, above) {
                    self.remove_on_level_segment(&marker, level, from, above);
                    pending.push(marker);
                } else {
                    self.node_mut(new_node).markers_mut(level).insert(marker);
                }
            }

            pending.extend(climbing);
        }

        // The top edge of the new tower takes every marker of the edge it
        // split at that level, plus whatever climbed all the way up.
        for marker in self.node(update[top]).markers(top).snapshot() {
            self.node_mut(new_node).markers_mut(top).insert(marker);
        }
        for marker in pending {
            self.node_mut(new_node).markers_mut(top).insert(marker);
        }

        // Left side: markers arriving at `new_node` can climb symmetrically,
        // riding the edge into it from a higher-level predecessor whenever
        // their interval starts at or before that predecessor.
        let mut pending: Vec<M> = Vec::new();

        for level in 0..top {
            let left_above = update[level + 1];
            let mut climbing: Vec<M> = Vec::new();

            for marker in self.node(update[level]).markers(level).snapshot() {
                if self.start_covers(&marker, left_above) {
                    self.remove_on_level_segment(&marker, level, left_above, new_node);
                    climbing.push(marker);
                }
            }

            let carried = mem::take(&mut pending);
            for marker in carried {
                if self.start_covers(&marker, left_above) {
                    self.remove_on_level_segment(&marker, level, left_above, new_node);
                    pending.push(marker);
                } else {
                    self.node_mut(update[level]).markers_mut(level).insert(marker);
                }
            }

            pending.extend(climbing);
        }

        for marker in pending {
            self.node_mut(update[top]).markers_mut(top).insert(marker);
        }
    }

    /// Repair marker placement around `node` before it is spliced out of the
    /// towers. `update[level]` must be the level-`level` predecessor of
    /// `node`; the node's own links must still be intact.
    pub(crate) fn adjust_markers_on_remove(
        &mut self,
        node:   NodeKey,
        update: &[NodeKey; MAX_HEIGHT],
    ) {
        let height = self.node(node).height();

        // Left side: each merged edge `update[level] -> node.next(level)`
        // reaches further than the edge it replaces, so markers that no
        // longer fit step down, re-covering their span with lower edges
        // between the predecessors.
        let mut pending: Vec<M> = Vec::new();

        for level in (0..height).rev() {
            let merged_target = self.node(node).next(level);
            let mut dropping: Vec<M> = Vec::new();

            for marker in self.node(update[level]).markers(level).snapshot() {
                if !self.end_reaches(&marker, merged_target) {
                    self.node_mut(update[level]).markers_mut(level).remove(&marker);
                    dropping.push(marker);
                }
            }

            let carried = mem::take(&mut pending);
            for marker in carried {
                // `update[level + 1]` is in bounds: markers only enter the
                // queue below the node's top level.
                self.place_on_level_segment(&marker, level, update[level + 1], update[level]);

                if self.end_reaches(&marker, merged_target) {
                    self.node_mut(update[level]).markers_mut(level).insert(marker);
                } else {
                    pending.push(marker);
                }
            }

            pending.extend(dropping);
        }

        // Every marker settles by level 0: an interval demoted here ends at
        // or past the node's immediate successor.
        debug_assert!(pending.is_empty(), "demoted marker failed to settle left of a node");

        // Right side: markers riding edges out of `node` lose those edges
        // with the node. Ones that start early enough move to the merged
        // edge; the rest step down along the node's successors.
        let mut pending: Vec<M> = Vec::new();

        for level in (0..height).rev() {
            let from = self.node(node).next(level);
            let mut dropping: Vec<M> = Vec::new();

            for marker in self.node(node).markers(level).snapshot() {
                if !self.start_covers(&marker, update[level]) {
                    dropping.push(marker);
                }
            }

            let carried = mem::take(&mut pending);
            for marker in carried {
                // As above, the queue is only populated below the top level.
                let to = self.node(node).next(level + 1);
                self.place_on_level_segment(&marker, level, from, to);

                if self.start_covers(&marker, update[level]) {
                    self.node_mut(update[level]).markers_mut(level).insert(marker);
                } else {
                    pending.push(marker);
                }
            }

            pending.extend(dropping);
        }

        debug_assert!(pending.is_empty(), "demoted marker failed to settle right of a node");
    }

    /// Whether the stored interval of `marker` reaches at least to the index
    /// of `node` on the right: `node.index <= end(marker)`.
    #[must_use]
    fn end_reaches(&self, marker: &M, node: NodeKey) -> bool {
        let Some(interval) = self.directory.get(marker) else {
            debug_assert!(false, "marker on an edge is missing from the directory");
            return false;
        };

        self.cmp.cmp(self.node(node).index(), interval.end()).is_le()
    }

    /// Whether the stored interval of `marker` begins at or before the index
    /// of `node`: `start(marker) <= node.index`.
    #[must_use]
    fn start_covers(&self, marker: &M, node: NodeKey) -> bool {
        let Some(interval) = self.directory.get(marker) else {
            debug_assert!(false, "marker on an edge is missing from the directory");
            return false;
        };

        self.cmp.cmp(interval.start(), self.node(node).index()).is_le()
    }
}
