use crate::collections::FxIndexSet;
use crate::errors::NetworkError;
use crate::graph_algos::cheapest_edge::{cheapest_edge, CheapestEdge};
use crate::graph_algos::dijkstra::{dijkstra, ShortestPaths};

use std::fmt::{Debug, Display};
use log::debug;
use num_traits::{CheckedAdd, Zero};


/// Edge weight / path cost
/// Signed types are accepted so negative weights can be rejected on insertion
pub trait Cost: Zero + CheckedAdd + Ord + Copy + Debug + Display {}

impl<T> Cost for T where T: Zero + CheckedAdd + Ord + Copy + Debug + Display {}


/// Undirected, weighted network of named locations
/// Stored twice: a dense |V| x |V| matrix for the algorithms
/// and per-location neighbor lists for the list view
/// Location indices are fixed at construction
#[derive(Clone, Debug)]
pub struct CityGraph<C = u32> {
    locations: FxIndexSet<String>, // name <-> index
    matrix: Vec<Option<C>>, // row-major, None = no direct route
    adjacency: Vec<Vec<(usize, C)>>, // (neighbor index, weight), insertion order
}

impl<C: Cost> CityGraph<C> {

    /// Create a graph with the given locations and no routes
    pub fn new<I, S>(names: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut locations = FxIndexSet::default();
        for name in names {
            let name = name.into();
            if locations.contains(&name) {
                return Err(NetworkError::DuplicateLocation(name));
            }
            locations.insert(name);
        }

        let n = locations.len();
        debug!("created network with {n} locations");

        Ok(Self {
            locations,
            matrix: vec![None; n * n],
            adjacency: vec![Vec::new(); n],
        })
    }

    /// Insert or overwrite the route between `a` and `b`
    /// Nothing is modified if the call fails
    pub fn add_edge(&mut self, a: &str, b: &str, weight: C) -> Result<(), NetworkError> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;

        if i == j {
            return Err(NetworkError::InvalidEdge {
                from: a.to_string(),
                to: b.to_string(),
                reason: "an edge must connect two distinct locations",
            });
        }
        if weight < C::zero() {
            return Err(NetworkError::InvalidEdge {
                from: a.to_string(),
                to: b.to_string(),
                reason: "edge weight must be non-negative",
            });
        }

        let n = self.len();
        self.matrix[i * n + j] = Some(weight);
        self.matrix[j * n + i] = Some(weight);
        self.link(i, j, weight);
        self.link(j, i, weight);

        debug!("route {a} <-> {b} = {weight}");
        Ok(())
    }

    // last write wins, one entry per neighbor
    fn link(&mut self, from: usize, to: usize, weight: C) {
        let row = &mut self.adjacency[from];
        match row.iter_mut().find(|(neighbor, _)| *neighbor == to) {
            Some(entry) => entry.1 = weight,
            None => row.push((to, weight)),
        }
    }

    /// Direct neighbors of `name` with route weights, in insertion order
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, C)>, NetworkError> {
        let i = self.index_of(name)?;
        Ok(self.adjacency[i]
            .iter()
            .map(|&(j, weight)| (self.label(j), weight))
            .collect())
    }

    /// Direct route weight between two locations, None if they are not connected
    pub fn weight_between(&self, a: &str, b: &str) -> Result<Option<C>, NetworkError> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.cell(i, j))
    }

    /// Index-addressed matrix cell
    pub fn weight_at(&self, i: usize, j: usize) -> Result<Option<C>, NetworkError> {
        let n = self.len();
        if i >= n {
            return Err(NetworkError::IndexOutOfBounds(i));
        }
        if j >= n {
            return Err(NetworkError::IndexOutOfBounds(j));
        }
        Ok(self.cell(i, j))
    }

    /// Shortest paths from `source` to every location
    pub fn shortest_paths(&self, source: &str) -> Result<ShortestPaths<C>, NetworkError> {
        dijkstra(self, source)
    }

    /// The single cheapest direct route, None if there are no routes
    pub fn cheapest_edge(&self) -> Option<CheapestEdge<'_, C>> {
        cheapest_edge(self)
    }

    /// Each route once, as (a, b, weight) with a declared before b
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, C)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .filter(move |&&(j, _)| j > i)
                .map(move |&(j, weight)| (self.label(i), self.label(j), weight))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub(crate) fn cell(&self, i: usize, j: usize) -> Option<C> {
        self.matrix[i * self.len() + j]
    }

    pub(crate) fn adjacent(&self, i: usize) -> &[(usize, C)] {
        &self.adjacency[i]
    }
}

impl<C> CityGraph<C> {

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Result<usize, NetworkError> {
        self.locations
            .get_index_of(name)
            .ok_or_else(|| NetworkError::UnknownLocation(name.to_string()))
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.locations.get_index(index).map(String::as_str)
    }

    /// Location names in index order
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.locations.iter().map(String::as_str)
    }

    // caller guarantees the index is in range
    pub(crate) fn label(&self, index: usize) -> &str {
        &self.locations[index]
    }
}
