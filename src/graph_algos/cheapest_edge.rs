use crate::graph::{CityGraph, Cost};


/// Cheapest direct route in a network
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheapestEdge<'a, C> {
    pub from: &'a str,
    pub to: &'a str,
    pub weight: C,
}

/// Scan every matrix cell row by row and keep the first strictly cheaper route
/// Equal weights keep the earlier pair, so `from` is declared before `to`
/// None if the network has no routes
pub fn cheapest_edge<C: Cost>(graph: &CityGraph<C>) -> Option<CheapestEdge<'_, C>> {
    let n = graph.len();
    let mut best: Option<(usize, usize, C)> = None;

    for i in 0..n {
        for j in 0..n {
            let Some(weight) = graph.cell(i, j) else {
                continue;
            };
            if best.is_none_or(|(_, _, b)| weight < b) {
                best = Some((i, j, weight));
            }
        }
    }

    best.map(|(i, j, weight)| CheapestEdge {
        from: graph.label(i),
        to: graph.label(j),
        weight,
    })
}
