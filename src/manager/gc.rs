//! Reachability garbage collection (§4.6).

use rustc_hash::FxHashSet;

use crate::node::NodeId;

use super::DDManager;

impl DDManager {
    /// Keeps exactly the nodes reachable from `roots`, discarding everything
    /// else, and precisely prunes every operation cache of entries that
    /// mention an evicted identifier (I6). `roots` must be the full set of
    /// node ids the caller still intends to use; anything else held past this
    /// call is dangling.
    pub fn clear(&mut self, roots: &[NodeId]) {
        let mut keep: FxHashSet<NodeId> = FxHashSet::default();
        let mut stack: Vec<NodeId> = roots.to_vec();

        while let Some(id) = stack.pop() {
            if !keep.insert(id) {
                continue;
            }
            if id.is_terminal() {
                continue;
            }
            if let Some(node) = self.nodes.get(&id) {
                stack.push(node.high);
                stack.push(node.low);
            }
        }

        let evicted: FxHashSet<NodeId> = self
            .nodes
            .keys()
            .copied()
            .filter(|id| !keep.contains(id))
            .collect();

        for id in &evicted {
            if let Some(node) = self.nodes.remove(id) {
                self.unique.remove(&(node.level, node.high, node.low));
            }
            self.free_ids.push(*id);
        }

        self.cofactor_cache
            .retain(|&(n, _), &mut (h, l)| !touched(&evicted, &[n, h, l]));
        self.ite_cache
            .retain(|&(a, b, c), &mut r| !touched(&evicted, &[a, b, c, r]));
        self.and_cache
            .retain(|&(a, b), &mut r| !touched(&evicted, &[a, b, r]));
        self.or_cache
            .retain(|&(a, b), &mut r| !touched(&evicted, &[a, b, r]));
        self.pre_image_cache
            .retain(|&(a, b), &mut r| !touched(&evicted, &[a, b, r]));

        log::debug!(
            "clear: evicted {} nodes, {} remain reachable",
            evicted.len(),
            keep.len().saturating_sub(2)
        );
    }
}

fn touched(evicted: &FxHashSet<NodeId>, ids: &[NodeId]) -> bool {
    ids.iter().any(|id| evicted.contains(id))
}
