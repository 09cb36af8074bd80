use mst_compare::mst::{Algorithm, Connectivity, MstError, MstOptions, compare, kruskal, prim};
use mst_compare::{Edge, Graph};

fn graph(nodes: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
    Graph::new(
        nodes.iter().map(|n| n.to_string()),
        edges.iter().map(|&(a, b, w)| Edge::new(a, b, w)),
    )
}

fn edge(a: &str, b: &str, w: i64) -> Edge {
    Edge::new(a, b, w)
}

#[test]
fn triangle_graph() {
    let g = graph(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]);
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&g, &MstOptions::default()).unwrap();
        assert_eq!(result.edges, vec![edge("A", "B", 1), edge("B", "C", 2)]);
        assert_eq!(result.total_cost, 3);
    }
}

#[test]
fn single_node_graph() {
    let g = graph(&["A"], &[]);
    let comparison = compare(&g, &MstOptions::strict()).unwrap();
    for result in comparison.results() {
        assert!(result.edges.is_empty());
        assert_eq!(result.total_cost, 0);
    }
}

#[test]
fn empty_graph_fails_for_both() {
    let g = graph(&[], &[]);
    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.run(&g, &MstOptions::default()),
            Err(MstError::EmptyGraph)
        );
    }
}

#[test]
fn components_of_three_and_two() {
    let g = graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B", 1), ("B", "C", 2), ("A", "C", 3), ("D", "E", 4)],
    );
    let forest = kruskal(&g, &MstOptions::default()).unwrap();
    assert_eq!(forest.edge_count(), 3);
    assert_eq!(forest.total_cost, 7);

    // Prim only reaches the start node's component.
    let tree = prim(&g, &MstOptions::default()).unwrap();
    assert_eq!(tree.edges, vec![edge("A", "B", 1), edge("B", "C", 2)]);
}

#[test]
fn two_disjoint_edges() {
    let g = graph(&["A", "B", "C", "D"], &[("A", "B", 1), ("C", "D", 1)]);
    let forest = kruskal(&g, &MstOptions::default()).unwrap();
    assert_eq!(forest.edges, vec![edge("A", "B", 1), edge("C", "D", 1)]);
    assert_eq!(forest.total_cost, 2);

    let strict = MstOptions {
        connectivity: Connectivity::Strict,
    };
    for algorithm in Algorithm::ALL {
        assert!(matches!(
            algorithm.run(&g, &strict),
            Err(MstError::Disconnected { expected: 3, .. })
        ));
    }
}

#[test]
fn input_graph_is_left_untouched() {
    let g = graph(&["A", "B", "C"], &[("A", "C", 3), ("A", "B", 1), ("B", "C", 2)]);
    let before = g.clone();
    compare(&g, &MstOptions::default()).unwrap();
    assert_eq!(g.edges(), before.edges());
    assert_eq!(g.nodes(), before.nodes());
}
