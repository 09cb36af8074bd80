//! # Minimum spanning trees
//!
//! For a connected undirected graph `G = (V, E, w)` a spanning tree
//! `T ⊆ E` has `|V| - 1` edges and no cycle; an MST minimises `Σ_{e∈T} w(e)`.
//! Two greedy constructions are provided and instrumented identically so
//! their costs can be compared:
//!
//! * [`kruskal`]: edges in ascending weight, cycle rejection through a
//!   [`DisjointSet`] (union by rank, full path compression);
//! * [`prim`]: a single tree grown from the first declared node, frontier kept
//!   in a binary heap with lazy deletion of stale entries.
//!
//! Each run owns its scratch state and only borrows the graph, so both may
//! run concurrently ([`compare_parallel`]).
//!
//! ## Disconnected input
//!
//! Under [`Connectivity::Partial`] (the default) a disconnected graph is not
//! an error: Kruskal returns a spanning forest and Prim the tree of the start
//! node's component. [`Connectivity::Strict`] turns a short result into
//! [`MstError::Disconnected`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Graph, NodeKey};

pub mod compare;
pub mod kruskal;
pub mod prim;
pub mod result;
pub mod union_find;

pub use compare::{Comparison, compare, compare_parallel};
pub use kruskal::kruskal;
pub use prim::{prim, prim_from};
pub use result::MstResult;
pub use union_find::DisjointSet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MstError {
    #[error("node {0} is not part of the graph")]
    UnknownNode(String),
    #[error("edge on node {0} is a self-loop")]
    SelfLoop(String),
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("{algorithm} selected {found} of {expected} edges: graph is disconnected")]
    Disconnected {
        algorithm: Algorithm,
        found: usize,
        expected: usize,
    },
    #[error("{algorithm}: total cost does not fit in a 64-bit weight")]
    CostOverflow { algorithm: Algorithm },
}

impl MstError {
    pub(crate) fn unknown_node<N: fmt::Debug>(node: &N) -> Self {
        MstError::UnknownNode(format!("{node:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    pub fn run<N: NodeKey>(
        self,
        graph: &Graph<N>,
        options: &MstOptions,
    ) -> Result<MstResult<N>, MstError> {
        match self {
            Algorithm::Prim => prim(graph, options),
            Algorithm::Kruskal => kruskal(graph, options),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}` (expected `prim` or `kruskal`)")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prim" => Ok(Algorithm::Prim),
            "kruskal" => Ok(Algorithm::Kruskal),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// What to do when fewer than `|V| - 1` edges could be selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Return whatever was built.
    #[default]
    Partial,
    /// Fail with [`MstError::Disconnected`].
    Strict,
}

impl Connectivity {
    pub(crate) fn check<N>(
        self,
        result: &MstResult<N>,
        node_count: usize,
    ) -> Result<(), MstError> {
        let expected = node_count.saturating_sub(1);
        let found = result.edge_count();
        if found >= expected {
            return Ok(());
        }
        match self {
            Connectivity::Partial => {
                log::warn!(
                    "{}: graph is disconnected, returning {found} of {expected} edges",
                    result.algorithm
                );
                Ok(())
            }
            Connectivity::Strict => Err(MstError::Disconnected {
                algorithm: result.algorithm,
                found,
                expected,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MstOptions {
    pub connectivity: Connectivity,
}

impl MstOptions {
    pub fn strict() -> Self {
        Self {
            connectivity: Connectivity::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_parse_back() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("KRUSKAL".parse::<Algorithm>(), Ok(Algorithm::Kruskal));
        assert!("boruvka".parse::<Algorithm>().is_err());
    }

    #[test]
    fn disconnected_error_names_algorithm() {
        let err = MstError::Disconnected {
            algorithm: Algorithm::Prim,
            found: 1,
            expected: 3,
        };
        assert_eq!(
            err.to_string(),
            "prim selected 1 of 3 edges: graph is disconnected"
        );
    }

    #[test]
    fn cost_overflow_names_algorithm() {
        let err = MstError::CostOverflow {
            algorithm: Algorithm::Kruskal,
        };
        assert_eq!(
            err.to_string(),
            "kruskal: total cost does not fit in a 64-bit weight"
        );
    }

    #[test]
    fn connectivity_defaults_to_partial() {
        assert_eq!(MstOptions::default().connectivity, Connectivity::Partial);
        assert_eq!(MstOptions::strict().connectivity, Connectivity::Strict);
    }
}
