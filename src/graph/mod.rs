//! # Weighted undirected graphs
//!
//! A graph is a node set `V` (kept in declaration order) and an edge list
//! `E ⊆ V × V × ℤ`. Nodes are addressed internally by dense [`NodeId`]s
//! (`0..|V|` in declaration order) so per-node state lives in an
//! [`IndexVec`] rather than a hash map.
//!
//! ## Example
//!
//! ```rust
//! use mst_compare::graph::*;
//!
//! let mut graph: Graph = Graph::empty();
//! let a = graph.add_node("A".to_string());
//! graph.add_node("B".to_string());
//! graph.add_edge("A".to_string(), "B".to_string(), 3);
//!
//! assert_eq!(a, NodeId::new(0));
//! assert_eq!(graph.spanning_edge_count(), 1);
//! assert!(graph.validate().is_ok());
//! ```

pub mod generate;
pub mod ids;
pub mod index_vec;
pub mod interop;
pub mod structure;

pub use ids::{EdgeId, NodeId};
pub use index_vec::{Idx, IndexVec};
pub use structure::{Edge, Graph, NodeKey, Weight};
