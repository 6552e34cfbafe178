use crate::graph::{CityGraph, Cost};
use crate::graph_algos::cheapest_edge::CheapestEdge;
use crate::graph_algos::dijkstra::ShortestPaths;

use std::fmt;


/// Dense matrix, one row per location, INF where there is no direct route
pub struct MatrixView<'a, C>(pub &'a CityGraph<C>);

impl<C: Cost> fmt::Display for MatrixView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        let n = graph.len();

        writeln!(f, "Adjacency Matrix:")?;
        for i in 0..n {
            for j in 0..n {
                if j > 0 {
                    write!(f, " ")?;
                }
                match graph.cell(i, j) {
                    Some(weight) => write!(f, "{weight}")?,
                    None => write!(f, "INF")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


/// Neighbor list per location
pub struct AdjacencyView<'a, C>(pub &'a CityGraph<C>);

impl<C: Cost> fmt::Display for AdjacencyView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;

        writeln!(f, "Adjacency List:")?;
        for (i, name) in graph.locations().enumerate() {
            write!(f, "{name} connects to:")?;
            for &(j, weight) in graph.adjacent(i) {
                write!(f, " ({}, {weight})", graph.label(j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


/// Cost and route from the source to every location
pub struct ShortestPathsView<'a, C>(pub &'a ShortestPaths<C>);

impl<C: Cost> fmt::Display for ShortestPathsView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paths = self.0;

        writeln!(f, "Shortest Paths from {}:", paths.source())?;
        for (index, name) in paths.names().enumerate() {
            match paths.distance(index) {
                Some(cost) => {
                    let path = paths.path_to_index(index).map_err(|_| fmt::Error)?;
                    writeln!(f, "{name}: {cost} (Path: {})", path.join(" "))?;
                }
                None => writeln!(f, "{name}: No path")?,
            }
        }
        Ok(())
    }
}


pub struct CheapestTripView<'a, C>(pub Option<CheapestEdge<'a, C>>);

impl<C: Cost> fmt::Display for CheapestTripView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(edge) => writeln!(f, "Low-cost Trip: {} -> {} with cost: {}", edge.from, edge.to, edge.weight),
            None => writeln!(f, "Low-cost Trip: none"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> CityGraph<u32> {
        let mut graph = CityGraph::new(["A", "B", "C", "D"]).unwrap();
        graph.add_edge("A", "B", 2).unwrap();
        graph.add_edge("B", "C", 5).unwrap();
        graph
    }

    #[test]
    fn test_matrix_view() {
        let text = MatrixView(&line()).to_string();
        assert_eq!(
            text,
            "Adjacency Matrix:\n\
             INF 2 INF INF\n\
             2 INF 5 INF\n\
             INF 5 INF INF\n\
             INF INF INF INF\n"
        );
    }

    #[test]
    fn test_adjacency_view() {
        let text = AdjacencyView(&line()).to_string();
        assert_eq!(
            text,
            "Adjacency List:\n\
             A connects to: (B, 2)\n\
             B connects to: (A, 2) (C, 5)\n\
             C connects to: (B, 5)\n\
             D connects to:\n"
        );
    }

    #[test]
    fn test_shortest_paths_view() {
        let paths = line().shortest_paths("A").unwrap();
        let text = ShortestPathsView(&paths).to_string();
        assert_eq!(
            text,
            "Shortest Paths from A:\n\
             A: 0 (Path: A)\n\
             B: 2 (Path: A B)\n\
             C: 7 (Path: A B C)\n\
             D: No path\n"
        );
    }

    #[test]
    fn test_cheapest_trip_view() {
        let graph = line();
        assert_eq!(
            CheapestTripView(graph.cheapest_edge()).to_string(),
            "Low-cost Trip: A -> B with cost: 2\n"
        );

        let empty: CityGraph = CityGraph::new(["A"]).unwrap();
        assert_eq!(CheapestTripView(empty.cheapest_edge()).to_string(), "Low-cost Trip: none\n");
    }
}
