//! Disjoint-set forest keyed by node identifiers.
//!
//! Union by rank keeps every tree at height `O(log n)`; `find` additionally
//! re-points each node it walks past straight at the root. Together they give
//! amortised `O(α(n))` per operation.
//!
//! Every structural step bumps an operation counter (one per node visited by
//! `find`, one per re-pointed node, one per `union` call, one per rank
//! increment). The counter is instrumentation only.
use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::graph::{Idx, IndexVec, NodeId, NodeKey};
use crate::mst::MstError;

#[derive(Debug, Clone)]
pub struct DisjointSet<N> {
    keys: IndexSet<N>,
    parent: IndexVec<NodeId, NodeId>,
    rank: IndexVec<NodeId, u32>,
    components: usize,
    operations: u64,
}

impl<N: NodeKey> DisjointSet<N> {
    /// Every node starts as its own singleton. Repeated nodes collapse into one.
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        let keys: IndexSet<N> = nodes.into_iter().collect();
        let len = keys.len();
        Self {
            keys,
            parent: IndexVec::from_fn(len, |id| id),
            rank: IndexVec::from_elem(0, len),
            components: len,
            operations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn id(&self, node: &N) -> Result<NodeId, MstError> {
        self.keys
            .get_index_of(node)
            .map(NodeId::from_usize)
            .ok_or_else(|| MstError::unknown_node(node))
    }

    /// Root id of the set containing `node`.
    pub fn find(&mut self, node: &N) -> Result<NodeId, MstError> {
        let id = self.id(node)?;
        Ok(self.find_id(id))
    }

    /// Representative key of the set containing `node`.
    pub fn representative(&mut self, node: &N) -> Result<&N, MstError> {
        let root = self.find(node)?;
        self.keys
            .get_index(root.index())
            .ok_or_else(|| MstError::unknown_node(node))
    }

    /// Two passes: walk to the root, then point every node on the walked path at it.
    pub(crate) fn find_id(&mut self, id: NodeId) -> NodeId {
        let mut root = id;
        self.operations += 1;
        while self.parent[root] != root {
            root = self.parent[root];
            self.operations += 1;
        }

        let mut node = id;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            self.operations += 1;
            node = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. `Ok(false)` means they already shared a set.
    pub fn union(&mut self, a: &N, b: &N) -> Result<bool, MstError> {
        let a = self.id(a)?;
        let b = self.id(b)?;
        Ok(self.union_ids(a, b))
    }

    /// The lower-rank root goes under the higher one; on a tie `b`'s root goes
    /// under `a`'s and `a`'s rank grows by one.
    pub(crate) fn union_ids(&mut self, a: NodeId, b: NodeId) -> bool {
        self.operations += 1;
        let root_a = self.find_id(a);
        let root_b = self.find_id(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
                self.operations += 1;
            }
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: &N, b: &N) -> Result<bool, MstError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Returns the counter and resets it to zero.
    pub fn take_operations(&mut self) -> u64 {
        std::mem::take(&mut self.operations)
    }

    #[cfg(test)]
    fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut node = id;
        while self.parent[node] != node {
            node = self.parent[node];
            depth += 1;
        }
        depth
    }
}
