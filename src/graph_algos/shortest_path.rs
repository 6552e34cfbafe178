use crate::errors::NetworkError;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as location indices from start to goal
/// predecessor: &[Option<usize>] - parent index of each node, None for the start
/// goal_index: usize - index of the goal node, must be reachable
pub(crate) fn shortest_path(predecessor: &[Option<usize>], goal_index: usize) -> Result<Vec<usize>, NetworkError> {

    let mut path = Vec::new();
    let mut current = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current {
        match predecessor.get(index) {
            Some(&parent) => {
                path.push(index);
                current = parent;
            }
            None => return Err(NetworkError::IndexOutOfBounds(index)),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
