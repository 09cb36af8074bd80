//! Kruskal's minimum spanning tree.
//!
//! Time: O(E log E) for sorting + O(E α(V)) for the disjoint-set work.
use std::time::Instant;

use log::debug;

use crate::graph::{Edge, Graph, NodeKey};
use crate::mst::{Algorithm, DisjointSet, MstError, MstOptions, MstResult};

/// Scans edges by ascending weight and keeps every edge that joins two
/// different components.
///
/// The sort is stable, so among equal weights the input order decides. The
/// scan stops as soon as `|V| - 1` edges are selected; on a disconnected graph
/// it runs out of edges first and yields a spanning forest (see
/// [`crate::mst::Connectivity`]).
///
/// # Errors
/// [`MstError::EmptyGraph`] for a graph without nodes and
/// [`MstError::UnknownNode`] for an edge endpoint that is not a declared node.
pub fn kruskal<N: NodeKey>(
    graph: &Graph<N>,
    options: &MstOptions,
) -> Result<MstResult<N>, MstError> {
    if graph.is_empty() {
        return Err(MstError::EmptyGraph);
    }
    let started = Instant::now();
    let mut result = MstResult::new(Algorithm::Kruskal);
    let mut ops: u64 = 0;

    let mut edges: Vec<&Edge<N>> = graph.edges().iter().collect();
    edges.sort_by_key(|edge| edge.weight);
    ops += edges.len() as u64;
    debug!("kruskal: {} edges sorted", edges.len());

    let mut sets = DisjointSet::new(graph.nodes().iter().cloned());
    let target = graph.spanning_edge_count();

    for edge in edges {
        if result.edge_count() == target {
            break;
        }
        ops += 1;
        if sets.find(&edge.from)? == sets.find(&edge.to)? {
            // cycle
            ops += 1 + sets.take_operations();
            continue;
        }
        let merged = sets.union(&edge.from, &edge.to)?;
        debug_assert!(merged, "distinct roots must merge");
        ops += sets.take_operations();
        if merged {
            result.push(edge.clone())?;
            ops += 1;
        }
    }

    debug!(
        "kruskal: {} edges selected, {} components left",
        result.edge_count(),
        sets.component_count()
    );
    let result = result.finish(ops, started);
    options.connectivity.check(&result, graph.node_count())?;
    Ok(result)
}
