use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FlowError {
    #[error("edge {from}->{to} has a negative capacity")]
    InvalidCapacity { from: usize, to: usize },

    #[error("vertex {vertex} is out of range for a network of {num_nodes} nodes")]
    InvalidVertex { vertex: usize, num_nodes: usize },

    #[error("source and sink are both vertex {0}")]
    SameSourceSink(usize),

    #[error("edge {0} does not exist")]
    InvalidEdge(usize),

    // engine bug, never caused by user input
    #[error("{operation} called on vertex {vertex} outside its precondition")]
    PreconditionViolation { operation: &'static str, vertex: usize },

    #[error("flow accumulated at vertex {0} does not fit the flow type")]
    Overflow(usize),

    #[error("maximum flow has not been computed for the current network")]
    NotSolved,

    #[error("active-vertex loop did not terminate within {0} iterations")]
    IterationLimitExceeded(usize),
}
