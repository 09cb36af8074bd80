use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Weight};
use crate::mst::{Algorithm, MstError};

/// Output of one MST run.
///
/// `edges` are in selection order; `operations` counts the algorithm's
/// primitive steps and is only comparable in magnitude between algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult<N = String> {
    pub algorithm: Algorithm,
    pub edges: Vec<Edge<N>>,
    pub total_cost: Weight,
    pub operations: u64,
    pub execution_time_ms: f64,
}

impl<N> MstResult<N> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            edges: Vec::new(),
            total_cost: 0,
            operations: 0,
            execution_time_ms: 0.0,
        }
    }

    /// Appends a selected edge. Fails instead of wrapping when the running
    /// total leaves the `i64` range.
    pub(crate) fn push(&mut self, edge: Edge<N>) -> Result<(), MstError> {
        self.total_cost = self
            .total_cost
            .checked_add(edge.weight)
            .ok_or(MstError::CostOverflow {
                algorithm: self.algorithm,
            })?;
        self.edges.push(edge);
        Ok(())
    }

    pub(crate) fn finish(mut self, operations: u64, started: Instant) -> Self {
        self.operations = operations;
        self.execution_time_ms = started.elapsed().as_secs_f64() * 1_000.0;
        self
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the selected edges form a spanning tree of `node_count` nodes.
    pub fn spans(&self, node_count: usize) -> bool {
        self.edges.len() == node_count.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_accumulates_cost_in_order() {
        let mut result: MstResult = MstResult::new(Algorithm::Kruskal);
        result.push(Edge::new("A", "B", 1)).unwrap();
        result.push(Edge::new("B", "C", -4)).unwrap();
        assert_eq!(result.total_cost, -3);
        assert_eq!(result.edges[1].to, "C");
        assert!(result.spans(3));
        assert!(!result.spans(4));
    }

    #[test]
    fn push_rejects_cost_overflow() {
        let mut result: MstResult = MstResult::new(Algorithm::Prim);
        result.push(Edge::new("A", "B", Weight::MAX)).unwrap();
        assert_eq!(
            result.push(Edge::new("B", "C", 1)),
            Err(MstError::CostOverflow {
                algorithm: Algorithm::Prim
            })
        );
        assert_eq!(result.total_cost, Weight::MAX);
        assert_eq!(result.edge_count(), 1);
    }

    #[test]
    fn finish_records_counter_and_time() {
        let result: MstResult = MstResult::new(Algorithm::Prim).finish(17, Instant::now());
        assert_eq!(result.operations, 17);
        assert!(result.execution_time_ms >= 0.0);
    }

    #[test]
    fn serializes_with_algorithm_name() {
        let result: MstResult = MstResult::new(Algorithm::Prim);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["algorithm"], "prim");
        assert_eq!(json["total_cost"], 0);
    }
}
