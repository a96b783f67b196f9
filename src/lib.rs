//! Linear-time computation of the 3-edge-connected components of an
//! undirected multigraph, after Tsin's 2005 single-pass DFS algorithm
//! "with reduction".
//!
//! See [`compute_three_edge_connected_components`] for the simplest entry
//! point, or [`Graph`] / [`algorithm`] to build a graph incrementally and
//! run the algorithm over it directly.

pub mod algorithm;
pub mod arena;
pub mod error;
pub mod graph;
pub mod state;

pub use error::{Error, Result};
pub use graph::Graph;

/// Partitions `adjacency` (a 0-based adjacency list, one entry per vertex,
/// each undirected edge duplicated on both endpoints as required by the
/// input model) into 3-edge-connected components.
///
/// Every vertex id `0..adjacency.len()` appears in exactly one returned
/// component.
pub fn compute_three_edge_connected_components(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let graph = Graph::from_adjacency_lists(adjacency);
    algorithm::find_components(&graph)
}
