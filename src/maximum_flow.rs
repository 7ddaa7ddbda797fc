pub mod error;
pub mod graph;
pub mod push_relabel_fifo;
pub mod status;

use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::push_relabel_fifo::PushRelabelFIFO;
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

/// Maximum flow value from `source` to `sink`, leaving the flow on `graph`.
pub fn compute_max_flow<Flow>(graph: &mut Graph<Flow>, source: usize, sink: usize) -> Result<Flow, FlowError>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug + Default,
{
    PushRelabelFIFO::default().solve(source, sink, graph)
}
