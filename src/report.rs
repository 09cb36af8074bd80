use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::io::{self, IoError};
use crate::mst::{Algorithm, Connectivity, MstResult};

/// What `mstc` writes for one graph: the inputs' shape and every run's result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MstReport {
    pub input: String,
    pub nodes: usize,
    pub edges: usize,
    pub connectivity: Connectivity,
    pub results: Vec<MstResult>,
    /// All runs produced the same total cost.
    pub costs_agree: bool,
    /// Run with the smallest operation count; `None` when tied or fewer than two runs.
    pub fewest_operations: Option<Algorithm>,
}

impl MstReport {
    pub fn new(
        input: impl Into<String>,
        graph: &Graph,
        connectivity: Connectivity,
        results: Vec<MstResult>,
    ) -> Self {
        let costs_agree = results
            .windows(2)
            .all(|pair| pair[0].total_cost == pair[1].total_cost);
        let fewest_operations = fewest_operations(&results);
        MstReport {
            input: input.into(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            connectivity,
            results,
            costs_agree,
            fewest_operations,
        }
    }

    pub fn result(&self, algorithm: Algorithm) -> Option<&MstResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }

    /// Saves the report; a `.ron` path selects RON, anything else JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        io::write(path, self)
    }
}

fn fewest_operations(results: &[MstResult]) -> Option<Algorithm> {
    if results.len() < 2 {
        return None;
    }
    let min = results.iter().map(|r| r.operations).min()?;
    let mut best = results.iter().filter(|r| r.operations == min);
    match (best.next(), best.next()) {
        (Some(only), None) => Some(only.algorithm),
        _ => None,
    }
}
