pub mod dijkstra;
pub mod cheapest_edge;
mod shortest_path;

use shortest_path::shortest_path;
