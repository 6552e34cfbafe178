use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("duplicate location: {0}")]
    DuplicateLocation(String), // name declared twice at construction

    #[error("unknown location: {0}")]
    UnknownLocation(String), // name not present in the graph

    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: &'static str,
    },

    #[error("no path to {0}")]
    NoPathFound(String), // destination is unreachable from the source

    #[error("location index {0} is out of bounds")]
    IndexOutOfBounds(usize),

    #[error("path cost overflowed the weight type")]
    CostOverflow,
}
