//! Weighted, undirected network of named locations
//!
//! A [`CityGraph`] is built once from a fixed list of location names and then
//! filled with routes. It answers two queries:
//! - [`CityGraph::shortest_paths`]: Dijkstra from one source to every location
//! - [`CityGraph::cheapest_edge`]: the single cheapest direct route
//!
//! The [`display`] module renders both, plus the matrix and list views of the graph.

pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod display;
mod collections;

pub use errors::NetworkError;
pub use graph::{CityGraph, Cost};
pub use graph_algos::cheapest_edge::CheapestEdge;
pub use graph_algos::dijkstra::ShortestPaths;
