use crate::collections::FxIndexSet;
use crate::errors::NetworkError;
use crate::graph::{CityGraph, Cost};
use super::shortest_path;

use log::{debug, trace};


/// Distances and parent links from one source to every location
/// Owns a copy of the location names, so it outlives edits to the graph
/// it was computed from, but is only accurate for the graph as it was
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths<C> {
    source: usize,
    names: FxIndexSet<String>, // name <-> index, same order as the graph
    distance: Vec<Option<C>>, // None = unreachable
    predecessor: Vec<Option<usize>>, // None for the source and unreachable nodes
}

impl<C: Cost> ShortestPaths<C> {

    pub fn source(&self) -> &str {
        &self.names[self.source]
    }

    pub fn source_index(&self) -> usize {
        self.source
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Location names in index order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn distances(&self) -> &[Option<C>] {
        &self.distance
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessor
    }

    /// Total cost to reach `index`, None if unreachable or out of range
    pub fn distance(&self, index: usize) -> Option<C> {
        self.distance.get(index).copied().flatten()
    }

    pub fn predecessor(&self, index: usize) -> Option<usize> {
        self.predecessor.get(index).copied().flatten()
    }

    pub fn distance_to(&self, name: &str) -> Result<Option<C>, NetworkError> {
        let index = self.index_of(name)?;
        Ok(self.distance[index])
    }

    /// Locations on the shortest path from the source to `index`, source first
    pub fn path_to_index(&self, index: usize) -> Result<Vec<&str>, NetworkError> {
        let name = self.names.get_index(index).ok_or(NetworkError::IndexOutOfBounds(index))?;

        // Unreachable nodes have no parent chain to walk
        if self.distance[index].is_none() {
            return Err(NetworkError::NoPathFound(name.clone()));
        }

        let path = shortest_path(&self.predecessor, index)?;
        Ok(path.into_iter().map(|i| self.names[i].as_str()).collect())
    }

    pub fn path_to(&self, name: &str) -> Result<Vec<&str>, NetworkError> {
        self.path_to_index(self.index_of(name)?)
    }

    fn index_of(&self, name: &str) -> Result<usize, NetworkError> {
        self.names
            .get_index_of(name)
            .ok_or_else(|| NetworkError::UnknownLocation(name.to_string()))
    }
}


/// Single-source shortest paths using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Dense O(V^2) variant over the adjacency matrix: each round settles the
/// closest unvisited node (lowest index on ties) and relaxes its routes
/// Sums that overflow `C` are skipped; CostOverflow only when a location is
/// reachable through nothing but such sums
pub fn dijkstra<C: Cost>(graph: &CityGraph<C>, source: &str) -> Result<ShortestPaths<C>, NetworkError> {

    let source_index = graph.index_of(source)?;
    let n = graph.len();

    let mut distance: Vec<Option<C>> = vec![None; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut overflowed = vec![false; n]; // some route to v exceeded the weight type

    distance[source_index] = Some(C::zero());

    for _ in 0..n {

        // Remaining nodes are unreachable once nothing finite is left
        let Some((u, cost)) = closest_unvisited(&distance, &visited) else {
            break;
        };
        visited[u] = true;
        debug!("settled {} at cost {cost}", graph.label(u));

        for v in 0..n {
            if visited[v] {
                continue;
            }
            let Some(edge_cost) = graph.cell(u, v) else {
                continue;
            };

            // An unrepresentable sum can never be the shorter route
            let Some(new_cost) = cost.checked_add(&edge_cost) else {
                overflowed[v] = true;
                continue;
            };

            // Strictly better only, the first relaxation wins ties
            if distance[v].is_none_or(|current| new_cost < current) {
                trace!("relax {} via {}: {new_cost}", graph.label(v), graph.label(u));
                distance[v] = Some(new_cost);
                predecessor[v] = Some(u);
            }
        }
    }

    // Reachable only through sums the weight type cannot hold
    if distance.iter().zip(&overflowed).any(|(d, &o)| d.is_none() && o) {
        return Err(NetworkError::CostOverflow);
    }

    Ok(ShortestPaths {
        source: source_index,
        names: graph.locations().map(str::to_owned).collect(),
        distance,
        predecessor,
    })
}


/// Unvisited node with the smallest finite distance, lowest index on ties
fn closest_unvisited<C: Ord + Copy>(distance: &[Option<C>], visited: &[bool]) -> Option<(usize, C)> {
    let mut best: Option<(usize, C)> = None;

    for (index, (dist, &seen)) in distance.iter().zip(visited).enumerate() {
        if seen {
            continue;
        }
        if let Some(d) = *dist {
            if best.is_none_or(|(_, b)| d < b) {
                best = Some((index, d));
            }
        }
    }

    best
}
