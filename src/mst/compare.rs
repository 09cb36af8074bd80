//! Side-by-side runs of both algorithms on the same graph.
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NodeKey};
use crate::mst::{Algorithm, MstError, MstOptions, MstResult, kruskal, prim};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison<N = String> {
    pub prim: MstResult<N>,
    pub kruskal: MstResult<N>,
}

impl<N> Comparison<N> {
    /// MST weight is unique, so on a connected graph this must hold.
    pub fn costs_agree(&self) -> bool {
        self.prim.total_cost == self.kruskal.total_cost
    }

    /// `None` on a tie.
    pub fn fewer_operations(&self) -> Option<Algorithm> {
        match self.prim.operations.cmp(&self.kruskal.operations) {
            std::cmp::Ordering::Less => Some(Algorithm::Prim),
            std::cmp::Ordering::Greater => Some(Algorithm::Kruskal),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn result(&self, algorithm: Algorithm) -> &MstResult<N> {
        match algorithm {
            Algorithm::Prim => &self.prim,
            Algorithm::Kruskal => &self.kruskal,
        }
    }

    pub fn results(&self) -> [&MstResult<N>; 2] {
        [&self.prim, &self.kruskal]
    }
}

/// Runs Prim then Kruskal on the calling thread.
pub fn compare<N: NodeKey>(
    graph: &Graph<N>,
    options: &MstOptions,
) -> Result<Comparison<N>, MstError> {
    let prim = prim(graph, options)?;
    let kruskal = kruskal(graph, options)?;
    Ok(Comparison { prim, kruskal })
}

/// Runs both algorithms on two rayon tasks sharing `graph` read-only.
///
/// Timings are taken per task and may be disturbed by the other one.
pub fn compare_parallel<N>(
    graph: &Graph<N>,
    options: &MstOptions,
) -> Result<Comparison<N>, MstError>
where
    N: NodeKey + Send + Sync,
{
    let (prim, kruskal) = rayon::join(|| prim(graph, options), || kruskal(graph, options));
    Ok(Comparison {
        prim: prim?,
        kruskal: kruskal?,
    })
}
