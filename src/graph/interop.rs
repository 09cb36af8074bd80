//! Conversion into petgraph's undirected graph.
use petgraph::graph::{NodeIndex, UnGraph};

use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::ids::NodeId;
use crate::graph::structure::{Graph, NodeKey, Weight};
use crate::mst::MstError;

impl<N: NodeKey> Graph<N> {
    /// Builds an `UnGraph` whose node indices follow declaration order.
    pub fn to_petgraph(&self) -> Result<UnGraph<N, Weight>, MstError> {
        let mut graph = UnGraph::with_capacity(self.node_count(), self.edge_count());
        let indices: IndexVec<NodeId, NodeIndex> =
            self.nodes().iter().map(|node| graph.add_node(node.clone())).collect();
        for edge in self.edges() {
            let from = self.require_node(&edge.from)?;
            let to = self.require_node(&edge.to)?;
            graph.add_edge(indices[from], indices[to], edge.weight);
        }
        debug_assert_eq!(indices.len(), self.node_count());
        debug_assert!(indices.iter_enumerated().all(|(id, idx)| id.index() == idx.index()));
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Edge, Graph};
    use crate::mst::MstError;

    #[test]
    fn converts_nodes_and_edges() {
        let graph: Graph = Graph::new(
            ["A", "B", "C"].map(String::from),
            [Edge::new("A", "B", 4), Edge::new("C", "B", 2)],
        );
        let pg = graph.to_petgraph().unwrap();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 2);
        assert_eq!(pg.edge_weights().sum::<i64>(), 6);
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let graph: Graph = Graph::new(["A".to_string()], [Edge::new("A", "Q", 1)]);
        assert!(matches!(graph.to_petgraph(), Err(MstError::UnknownNode(_))));
    }
}
