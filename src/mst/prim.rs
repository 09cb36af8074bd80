//! Prim's minimum spanning tree.
//!
//! Uses a binary heap as the frontier and leaves stale entries in it instead
//! of doing decrease-key: an entry whose far end was visited after it was
//! pushed is simply discarded when popped.
//!
//! Time: O(E log E).
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::debug;
use smallvec::SmallVec;

use crate::graph::{Edge, Graph, Idx, IndexVec, NodeId, NodeKey, Weight};
use crate::mst::{Algorithm, MstError, MstOptions, MstResult};

#[derive(Debug, Clone, Copy)]
struct Incident {
    to: NodeId,
    weight: Weight,
}

type Adjacency = IndexVec<NodeId, SmallVec<[Incident; 4]>>;

/// Each undirected edge becomes one entry in each endpoint's list.
fn adjacency<N: NodeKey>(graph: &Graph<N>, ops: &mut u64) -> Result<Adjacency, MstError> {
    let mut adjacency: Adjacency = IndexVec::from_elem(SmallVec::new(), graph.node_count());
    for edge in graph.edges() {
        let from = graph.require_node(&edge.from)?;
        let to = graph.require_node(&edge.to)?;
        adjacency[from].push(Incident {
            to,
            weight: edge.weight,
        });
        adjacency[to].push(Incident {
            to: from,
            weight: edge.weight,
        });
        *ops += 2;
    }
    Ok(adjacency)
}

/// Frontier entry. Ordered by weight, then by push order so equal weights
/// leave the heap first-in first-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    weight: Weight,
    seq: u64,
    from: NodeId,
    to: NodeId,
}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    pushed: u64,
    stale: u64,
}

impl Frontier {
    fn push(&mut self, from: NodeId, incident: &Incident) {
        self.heap.push(Reverse(Candidate {
            weight: incident.weight,
            seq: self.pushed,
            from,
            to: incident.to,
        }));
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }
}

/// Prim's algorithm started from the first declared node.
///
/// On a disconnected graph only the start node's component is spanned.
///
/// # Errors
/// [`MstError::EmptyGraph`] for a graph without nodes and
/// [`MstError::UnknownNode`] for an edge endpoint that is not a declared node.
pub fn prim<N: NodeKey>(graph: &Graph<N>, options: &MstOptions) -> Result<MstResult<N>, MstError> {
    if graph.is_empty() {
        return Err(MstError::EmptyGraph);
    }
    grow(graph, NodeId::new(0), options)
}

/// Prim's algorithm started from `start`.
pub fn prim_from<N: NodeKey>(
    graph: &Graph<N>,
    start: &N,
    options: &MstOptions,
) -> Result<MstResult<N>, MstError> {
    let start = graph.require_node(start)?;
    grow(graph, start, options)
}

fn grow<N: NodeKey>(
    graph: &Graph<N>,
    start: NodeId,
    options: &MstOptions,
) -> Result<MstResult<N>, MstError> {
    let started = Instant::now();
    let mut result = MstResult::new(Algorithm::Prim);
    let mut ops: u64 = 0;

    let adjacency = adjacency(graph, &mut ops)?;
    let node_count = graph.node_count();
    let mut visited: IndexVec<NodeId, bool> = IndexVec::from_elem(false, node_count);
    let mut visited_count = 1;
    visited[start] = true;
    debug!("prim: starting from {:?}", &graph.nodes()[start.index()]);

    let mut frontier = Frontier::default();
    for incident in &adjacency[start] {
        frontier.push(start, incident);
        ops += 1;
    }

    while visited_count < node_count {
        let Some(candidate) = frontier.pop() else {
            break;
        };
        ops += 1;
        if visited[candidate.to] {
            frontier.stale += 1;
            ops += 1;
            continue;
        }

        visited[candidate.to] = true;
        visited_count += 1;
        ops += 1;
        result.push(Edge {
            from: graph.nodes()[candidate.from.index()].clone(),
            to: graph.nodes()[candidate.to.index()].clone(),
            weight: candidate.weight,
        })?;
        ops += 1;

        for incident in &adjacency[candidate.to] {
            if !visited[incident.to] {
                frontier.push(candidate.to, incident);
                ops += 1;
            }
            ops += 1;
        }
    }

    debug!(
        "prim: {} edges selected, {} pushed, {} stale discarded",
        result.edge_count(),
        frontier.pushed,
        frontier.stale
    );
    let result = result.finish(ops, started);
    options.connectivity.check(&result, node_count)?;
    Ok(result)
}
