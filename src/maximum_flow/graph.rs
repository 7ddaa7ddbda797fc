use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::status::Status;
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

/// Caller-visible view of a forward edge.
#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

/// Indices of both halves of an edge pair. Only `forward` carries capacity.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct EdgeHandle {
    pub forward: usize,
    pub reverse: usize,
}

#[derive(Default, PartialEq, Debug, Clone)]
pub struct InsideEdge<Flow> {
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
    pub residual: Flow,
    pub rev: usize,
    pub is_reverse: bool,
}

impl<Flow> InsideEdge<Flow>
where
    Flow: NumAssign + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.residual
    }

    // meaningful on forward edges only, where residual <= upper
    #[inline]
    pub(crate) fn flow(&self) -> Flow {
        self.upper - self.residual
    }
}

/// Directed network stored as a flat arena of paired residual edges.
///
/// Every `add_directed_edge(u, v, c)` appends `u -> v` with capacity `c` and
/// its companion `v -> u` with capacity zero. The per-vertex adjacency lists
/// keep insertion order, which fixes the tie-breaking of every algorithm
/// that walks them.
#[derive(Default, Clone, Debug)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) inside_edge_list: Vec<InsideEdge<Flow>>,
    pub(crate) adjacency: Vec<Vec<usize>>,
    pub(crate) status: Status,
    terminals: Option<(usize, usize)>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, num_edges: 0, inside_edge_list: Vec::new(), adjacency: vec![Vec::new(); num_nodes], status: Status::NotSolved, terminals: None }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    // number of caller-visible (forward) edges
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    // (source, sink) of the completed run, if any
    #[inline]
    pub fn solved_terminals(&self) -> Option<(usize, usize)> {
        self.terminals
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.num_nodes += 1;
        self.invalidate();
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.adjacency.extend((0..num_nodes).map(|_| Vec::new()));
        self.num_nodes += num_nodes;
        self.invalidate();
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<EdgeHandle, FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if upper < Flow::zero() {
            return Err(FlowError::InvalidCapacity { from, to });
        }
        if from == to {
            log::warn!("self-loop {from}->{to} with capacity {upper:?} can never carry flow");
        }

        let forward = self.inside_edge_list.len();
        let reverse = forward + 1;
        self.inside_edge_list.push(InsideEdge { from, to, upper, residual: upper, rev: reverse, is_reverse: false });
        self.inside_edge_list.push(InsideEdge { from: to, to: from, upper: Flow::zero(), residual: Flow::zero(), rev: forward, is_reverse: true });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(reverse);

        self.num_edges += 1;
        self.invalidate();
        Ok(EdgeHandle { forward, reverse })
    }

    /// Residual edge indices leaving `u`, in construction order.
    #[inline]
    pub fn out_edges(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = &InsideEdge<Flow>> + '_ {
        self.adjacency[u].iter().map(move |&i| &self.inside_edge_list[i])
    }

    #[inline]
    pub fn inside_edge(&self, inside_edge_index: usize) -> Option<&InsideEdge<Flow>> {
        self.inside_edge_list.get(inside_edge_index)
    }

    pub fn get_edge(&self, handle: EdgeHandle) -> Option<Edge<Flow>> {
        let edge = self.forward_edge(handle).ok()?;
        Some(Edge { from: edge.from, to: edge.to, flow: edge.flow(), upper: edge.upper })
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<Flow>> + '_ {
        self.inside_edge_list
            .iter()
            .filter(|edge| !edge.is_reverse)
            .map(|edge| Edge { from: edge.from, to: edge.to, flow: edge.flow(), upper: edge.upper })
    }

    pub fn flow_on_edge(&self, handle: EdgeHandle) -> Result<Flow, FlowError> {
        Ok(self.forward_edge(handle)?.flow())
    }

    /// Net flow leaving `source`. Only defined once a solver has run to
    /// completion from this same source on the network as it currently stands.
    pub fn maximum_flow(&self, source: usize) -> Result<Flow, FlowError> {
        self.check_vertex(source)?;
        match self.terminals {
            Some((solved_source, _)) if self.status == Status::Optimal && solved_source == source => {}
            _ => return Err(FlowError::NotSolved),
        }

        let (mut outflow, mut inflow) = (Flow::zero(), Flow::zero());
        for edge in self.neighbors(source) {
            if edge.is_reverse {
                inflow = inflow.checked_add(&self.inside_edge_list[edge.rev].flow()).ok_or(FlowError::Overflow(source))?;
            } else {
                outflow = outflow.checked_add(&edge.flow()).ok_or(FlowError::Overflow(source))?;
            }
        }
        Ok(outflow - inflow)
    }

    pub(crate) fn mark_solved(&mut self, source: usize, sink: usize) {
        self.status = Status::Optimal;
        self.terminals = Some((source, sink));
    }

    pub(crate) fn invalidate(&mut self) {
        self.status = Status::NotSolved;
        self.terminals = None;
    }

    #[inline]
    pub(crate) fn push_flow(&mut self, inside_edge_index: usize, flow: Flow) {
        let rev = self.inside_edge_list[inside_edge_index].rev;

        // update residual capacities
        self.inside_edge_list[inside_edge_index].residual -= flow;
        self.inside_edge_list[rev].residual += flow;
    }

    pub(crate) fn reset_residuals(&mut self) {
        self.inside_edge_list.iter_mut().for_each(|edge| edge.residual = edge.upper);
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        if vertex >= self.num_nodes {
            return Err(FlowError::InvalidVertex { vertex, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    fn forward_edge(&self, handle: EdgeHandle) -> Result<&InsideEdge<Flow>, FlowError> {
        match self.inside_edge_list.get(handle.forward) {
            Some(edge) if !edge.is_reverse && edge.rev == handle.reverse => Ok(edge),
            _ => Err(FlowError::InvalidEdge(handle.forward)),
        }
    }
}
