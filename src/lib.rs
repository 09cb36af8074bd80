//! Prim's and Kruskal's minimum spanning tree algorithms, instrumented so
//! their cost (total weight, primitive operations, wall-clock time) can be
//! compared on the same graph.

pub mod config;
pub mod graph;
pub mod io;
pub mod mst;
pub mod options;
pub mod report;

pub use graph::{Edge, Graph};
pub use mst::{Algorithm, Connectivity, MstError, MstOptions, MstResult};
