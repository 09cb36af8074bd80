//! Seeded random graphs for benchmarks and property tests.
use rand::Rng;

use crate::graph::structure::{Graph, Weight};

fn node_name(idx: usize) -> String {
    format!("n{idx}")
}

/// A connected graph over `n0..n{nodes-1}`.
///
/// A random spanning tree (every node `i > 0` attached to some `j < i`) is laid
/// down first, then `extra_edges` further non-loop edges. Weights are drawn
/// uniformly from `0..=max_weight`; parallel edges are possible.
pub fn random_connected<R: Rng + ?Sized>(
    rng: &mut R,
    nodes: usize,
    extra_edges: usize,
    max_weight: Weight,
) -> Graph {
    let mut graph = Graph::new((0..nodes).map(node_name), []);
    for i in 1..nodes {
        let j = rng.random_range(0..i);
        let weight = rng.random_range(0..=max_weight);
        graph.add_edge(node_name(j), node_name(i), weight);
    }
    add_random_edges(rng, &mut graph, nodes, extra_edges, max_weight);
    graph
}

/// `edges` random non-loop edges over `nodes` nodes, with no connectivity guarantee.
pub fn random<R: Rng + ?Sized>(rng: &mut R, nodes: usize, edges: usize, max_weight: Weight) -> Graph {
    let mut graph = Graph::new((0..nodes).map(node_name), []);
    add_random_edges(rng, &mut graph, nodes, edges, max_weight);
    graph
}

fn add_random_edges<R: Rng + ?Sized>(
    rng: &mut R,
    graph: &mut Graph,
    nodes: usize,
    count: usize,
    max_weight: Weight,
) {
    if nodes < 2 {
        return;
    }
    for _ in 0..count {
        let a = rng.random_range(0..nodes);
        let mut b = rng.random_range(0..nodes - 1);
        if b >= a {
            b += 1;
        }
        let weight = rng.random_range(0..=max_weight);
        graph.add_edge(node_name(a), node_name(b), weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn connected_graph_has_tree_plus_extras() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_connected(&mut rng, 10, 5, 20);
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 9 + 5);
        assert!(graph.validate().is_ok());
        assert!(graph.edges().iter().all(|e| (0..=20).contains(&e.weight)));
    }

    #[test]
    fn same_seed_same_graph() {
        let a = random(&mut StdRng::seed_from_u64(42), 6, 8, 9);
        let b = random(&mut StdRng::seed_from_u64(42), 6, 8, 9);
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn single_node_gets_no_edges() {
        let graph = random(&mut StdRng::seed_from_u64(1), 1, 4, 9);
        assert_eq!(graph.edge_count(), 0);
    }
}
