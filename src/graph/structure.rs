//! Static graph elements: node keys, weighted undirected edges and the graph itself.
use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::graph::ids::{EdgeId, NodeId};
use crate::graph::index_vec::Idx;
use crate::mst::MstError;

pub type Weight = i64;

/// Anything usable as a node identifier. Identity is plain `Eq`/`Hash`.
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + fmt::Debug {}

/// An undirected weighted edge. `(a, b, w)` and `(b, a, w)` denote the same edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N = String> {
    pub from: N,
    pub to: N,
    pub weight: Weight,
}

impl<N> Edge<N> {
    pub fn new(from: impl Into<N>, to: impl Into<N>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl<N: PartialEq> Edge<N> {
    /// Orientation-insensitive endpoint test.
    pub fn connects(&self, a: &N, b: &N) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }

    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Undirected weighted graph.
///
/// Nodes keep their declaration order; declaring a node twice keeps the first
/// position. Edges are stored as given and may reference undeclared nodes
/// until [`Graph::validate`] is run; both MST algorithms report such
/// references as [`MstError::UnknownNode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize + Eq + Hash",
    deserialize = "N: Deserialize<'de> + Eq + Hash"
))]
pub struct Graph<N = String> {
    nodes: IndexSet<N>,
    #[serde(default)]
    edges: Vec<Edge<N>>,
}

/// Equal when both declare the same nodes in the same order and the same
/// edge list.
impl<N: NodeKey> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.iter().eq(other.nodes.iter()) && self.edges == other.edges
    }
}

impl<N: NodeKey> Eq for Graph<N> {}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N: NodeKey> Graph<N> {
    pub fn empty() -> Self {
        Self {
            nodes: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    pub fn new(nodes: impl IntoIterator<Item = N>, edges: impl IntoIterator<Item = Edge<N>>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            edges: edges.into_iter().collect(),
        }
    }

    /// Returns the id of `node`, declaring it if needed.
    pub fn add_node(&mut self, node: N) -> NodeId {
        let (idx, _) = self.nodes.insert_full(node);
        NodeId::from_usize(idx)
    }

    pub fn add_edge(&mut self, from: N, to: N, weight: Weight) -> EdgeId {
        let id = EdgeId::from_usize(self.edges.len());
        self.edges.push(Edge { from, to, weight });
        id
    }

    pub fn nodes(&self) -> &IndexSet<N> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_id(&self, node: &N) -> Option<NodeId> {
        self.nodes.get_index_of(node).map(NodeId::from_usize)
    }

    /// Like [`Graph::node_id`] but reports the missing key.
    pub fn require_node(&self, node: &N) -> Result<NodeId, MstError> {
        self.node_id(node).ok_or_else(|| MstError::unknown_node(node))
    }

    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get_index(id.index())
    }

    /// Number of edges a spanning tree over all nodes has.
    pub fn spanning_edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Checks that every edge joins two distinct declared nodes.
    ///
    /// Weights are not inspected: negative weights are legal input.
    pub fn validate(&self) -> Result<(), MstError> {
        for edge in &self.edges {
            self.require_node(&edge.from)?;
            self.require_node(&edge.to)?;
            if edge.is_loop() {
                return Err(MstError::SelfLoop(format!("{:?}", edge.from)));
            }
        }
        Ok(())
    }
}
