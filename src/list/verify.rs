use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::error::{IntervalError, Result};
use crate::interface::Comparator;
use super::{node::NodeKey, IntervalSkiplist};


// Diagnostic validation of the marker decoration. This is a test and
// debugging hook, not a fast path: it recomputes the stair-step path of
// every stored interval and demands that the actual edge and endpoint sets
// match exactly.
impl<K, M, Cmp> IntervalSkiplist<K, M, Cmp>
where
    K:   Clone + Debug,
    M:   Clone + Eq + Hash + Debug,
    Cmp: Comparator<K>,
{
    /// Check that every marker decorates exactly the edges of its stair-step
    /// path, that endpoint sets agree with the directory, and that every
    /// non-sentinel node is still an endpoint of something.
    ///
    /// # Errors
    /// Returns [`IntervalError::InvariantViolation`] describing the first
    /// discrepancy found. Any violation is a bug in the marker maintenance
    /// code, not caller misuse.
    pub fn verify_marker_invariant(&self) -> Result<()> {
        let mut expected: HashMap<(NodeKey, usize), Vec<M>> = HashMap::new();

        for (marker, interval) in &self.directory {
            let start = self.endpoint_node(interval.start(), marker, "start")?;
            let end = self.endpoint_node(interval.end(), marker, "end")?;

            if !self.node(start).starting().contains(marker) {
                return violation(format!(
                    "marker {marker:?} missing from the starting set at {:?}",
                    self.node(start).index(),
                ));
            }
            if !self.node(end).ending().contains(marker) {
                return violation(format!(
                    "marker {marker:?} missing from the ending set at {:?}",
                    self.node(end).index(),
                ));
            }
            if !self.node(start).endpoint().contains(marker)
                || !self.node(end).endpoint().contains(marker)
            {
                return violation(format!("marker {marker:?} missing from an endpoint set"));
            }

            for edge in self.stair_path_edges(start, end) {
                expected.entry(edge).or_default().push(marker.clone());
            }
        }

        // Compare the actual decoration of every edge, as a set, against the
        // recomputed stair-step paths.
        for (raw, node) in self.pool.iter() {
            let key = NodeKey::new(raw);

            for level in 0..node.height() {
                let actual = node.markers(level);
                let empty = Vec::new();
                let wanted = expected.get(&(key, level)).unwrap_or(&empty);

                for marker in actual.iter() {
                    if !wanted.contains(marker) {
                        return violation(format!(
                            "marker {marker:?} decorates level {level} at {:?} \
                             but its path does not include that edge",
                            node.index(),
                        ));
                    }
                }
                for marker in wanted {
                    if !actual.contains(marker) {
                        return violation(format!(
                            "marker {marker:?} absent from level {level} at {:?} \
                             though its path includes that edge",
                            node.index(),
                        ));
                    }
                }
            }

            if key == self.head || key == self.tail {
                continue;
            }

            // Node liveness: a non-sentinel node exists iff it still pins an
            // interval endpoint, and its endpoint sets may only name stored
            // markers at the right index.
            if node.endpoint().is_empty() {
                return violation(format!(
                    "node at {:?} has an empty endpoint set but was not removed",
                    node.index(),
                ));
            }

            for marker in node.starting().iter() {
                let stored = self.directory.get(marker).map(|interval| interval.start());
                if stored.map_or(true, |start| self.cmp.cmp(start, node.index()).is_ne()) {
                    return violation(format!(
                        "stale marker {marker:?} in the starting set at {:?}",
                        node.index(),
                    ));
                }
            }
            for marker in node.ending().iter() {
                let stored = self.directory.get(marker).map(|interval| interval.end());
                if stored.map_or(true, |end| self.cmp.cmp(end, node.index()).is_ne()) {
                    return violation(format!(
                        "stale marker {marker:?} in the ending set at {:?}",
                        node.index(),
                    ));
                }
            }
            for marker in node.endpoint().iter() {
                if !node.starting().contains(marker) && !node.ending().contains(marker) {
                    return violation(format!(
                        "marker {marker:?} in the endpoint set at {:?} is neither \
                         starting nor ending there",
                        node.index(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Locate the node pinned at `index`, failing with a violation if the
    /// structure no longer has one.
    fn endpoint_node(&self, index: &K, marker: &M, role: &str) -> Result<NodeKey> {
        let closest = self.find_closest(index);

        if closest != self.tail && self.cmp.cmp(self.node(closest).index(), index).is_eq() {
            Ok(closest)
        } else {
            Err(IntervalError::InvariantViolation(format!(
                "no node at the {role} index {index:?} of marker {marker:?}",
            )))
        }
    }
}

fn violation(message: String) -> Result<()> {
    Err(IntervalError::InvariantViolation(message))
}
