use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Generic push-relabel with first-in first-out selection of active vertices.
///
/// The source is pinned at height `n` and the sink at `0`; every other
/// vertex starts at `0` and is only ever lifted, never lowered. A vertex
/// sits in `active_nodes` exactly while it holds positive excess, so the
/// loop ends when no vertex other than the terminals holds any. Runs take
/// `O(n^2 m)` time.
#[derive(Default)]
pub struct PushRelabelFIFO<Flow> {
    excesses: Vec<Flow>,
    heights: Vec<usize>,
    active_nodes: VecDeque<usize>,

    iteration_limit: Option<usize>,
    push_count: usize,
    relabel_count: usize,
    iteration_count: usize,
}

impl<Flow> PushRelabelFIFO<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug + Default,
{
    /// Solver that gives up with `IterationLimitExceeded` after `limit`
    /// vertex discharges instead of the size-derived default.
    pub fn with_iteration_limit(limit: usize) -> Self {
        Self { iteration_limit: Some(limit), ..Self::default() }
    }

    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow, FlowError> {
        graph.check_vertex(source)?;
        graph.check_vertex(sink)?;
        if source == sink {
            return Err(FlowError::SameSourceSink(source));
        }
        graph.invalidate();

        self.pre_process(source, sink, graph)?;

        let limit = self.iteration_limit.unwrap_or_else(|| default_iteration_limit(graph.num_nodes(), graph.inside_edge_list.len()));
        while let Some(u) = self.active_nodes.pop_front() {
            self.iteration_count += 1;
            if self.iteration_count > limit {
                log::warn!("giving up after {limit} iterations with {} active vertices", self.active_nodes.len() + 1);
                return Err(FlowError::IterationLimitExceeded(limit));
            }
            self.discharge(u, source, sink, graph)?;
        }

        graph.mark_solved(source, sink);
        let flow = graph.maximum_flow(source).inspect_err(|_| graph.invalidate())?;
        log::debug!(
            "maximum flow {source}->{sink} is {flow:?} ({} pushes, {} relabels, {} iterations)",
            self.push_count,
            self.relabel_count,
            self.iteration_count
        );
        Ok(flow)
    }

    #[inline]
    pub fn push_count(&self) -> usize {
        self.push_count
    }

    #[inline]
    pub fn relabel_count(&self) -> usize {
        self.relabel_count
    }

    #[inline]
    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    #[inline]
    pub fn heights(&self) -> &[usize] {
        &self.heights
    }

    #[inline]
    pub fn excesses(&self) -> &[Flow] {
        &self.excesses
    }

    // saturate every edge leaving the source and queue the vertices that received flow
    fn pre_process(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<(), FlowError> {
        let num_nodes = graph.num_nodes();
        self.excesses.clear();
        self.excesses.resize(num_nodes, Flow::zero());
        self.heights.clear();
        self.heights.resize(num_nodes, 0);
        self.active_nodes.clear();
        self.push_count = 0;
        self.relabel_count = 0;
        self.iteration_count = 0;

        graph.reset_residuals();
        self.heights[source] = num_nodes;

        for k in 0..graph.out_edges(source).len() {
            let inside_edge_index = graph.out_edges(source)[k];
            let edge = &graph.inside_edge_list[inside_edge_index];
            let (to, delta) = (edge.to, edge.residual_capacity());
            if to == source || delta == Flow::zero() {
                continue;
            }
            self.credit(to, delta)?;
            graph.push_flow(inside_edge_index, delta);
            log::trace!("saturated {source}->{to} with {delta:?}");
        }

        for u in 0..num_nodes {
            if u != source && u != sink && self.excesses[u] > Flow::zero() {
                self.active_nodes.push_back(u);
                log::trace!("queued {u}");
            }
        }
        log::debug!("preflow from {source} activated {} of {num_nodes} vertices", self.active_nodes.len());
        Ok(())
    }

    fn discharge(&mut self, u: usize, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<(), FlowError> {
        let mut pushed = false;
        for k in 0..graph.out_edges(u).len() {
            if self.excesses[u] == Flow::zero() {
                return Ok(());
            }
            let inside_edge_index = graph.out_edges(u)[k];
            if self.is_admissible_edge(graph, u, inside_edge_index) {
                self.push(u, inside_edge_index, source, sink, graph)?;
                pushed = true;
            }
        }
        if self.excesses[u] == Flow::zero() {
            return Ok(());
        }

        if !pushed && !self.relabel(u, graph)? {
            log::warn!("vertex {u} keeps excess {:?} with no residual edge out", self.excesses[u]);
            return Ok(());
        }
        self.active_nodes.push_back(u);
        log::trace!("queued {u}");
        Ok(())
    }

    fn credit(&mut self, to: usize, delta: Flow) -> Result<(), FlowError> {
        self.excesses[to] = self.excesses[to].checked_add(&delta).ok_or(FlowError::Overflow(to))?;
        Ok(())
    }

    #[inline]
    fn is_admissible_edge(&self, graph: &Graph<Flow>, u: usize, inside_edge_index: usize) -> bool {
        let edge = &graph.inside_edge_list[inside_edge_index];
        edge.residual_capacity() > Flow::zero() && self.heights[u] == self.heights[edge.to] + 1
    }

    // push along an admissible edge out of an active vertex
    fn push(&mut self, u: usize, inside_edge_index: usize, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<(), FlowError> {
        if self.excesses[u] == Flow::zero() || !self.is_admissible_edge(graph, u, inside_edge_index) {
            return Err(FlowError::PreconditionViolation { operation: "push", vertex: u });
        }

        let to = graph.inside_edge_list[inside_edge_index].to;
        let delta = self.excesses[u].min(graph.inside_edge_list[inside_edge_index].residual_capacity());
        self.credit(to, delta)?;
        graph.push_flow(inside_edge_index, delta);
        self.excesses[u] -= delta;
        self.push_count += 1;
        log::trace!("pushed {delta:?} from {u} to {to}");

        if to != source && to != sink && self.excesses[to] == delta {
            self.active_nodes.push_back(to);
            log::trace!("queued {to}");
        }
        Ok(())
    }

    // returns false when u has no residual edge out and keeps its height
    fn relabel(&mut self, u: usize, graph: &Graph<Flow>) -> Result<bool, FlowError> {
        if self.excesses[u] == Flow::zero() || graph.out_edges(u).iter().any(|&i| self.is_admissible_edge(graph, u, i)) {
            return Err(FlowError::PreconditionViolation { operation: "relabel", vertex: u });
        }

        let heights = &self.heights;
        let min_height = graph.neighbors(u).filter(|edge| edge.to != u && edge.residual_capacity() > Flow::zero()).map(|edge| heights[edge.to]).min();

        match min_height {
            Some(min_height) => {
                debug_assert!(min_height + 1 > self.heights[u]);
                self.heights[u] = min_height + 1;
                debug_assert!(self.heights[u] < 2 * graph.num_nodes());
                self.relabel_count += 1;
                log::trace!("relabeled {u} to height {}", self.heights[u]);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// at least 2n^2 relabels + 2nm saturating + 4n^2 m non-saturating pushes
fn default_iteration_limit(num_nodes: usize, num_inside_edges: usize) -> usize {
    num_nodes.saturating_mul(num_nodes).saturating_mul(num_inside_edges + 1).saturating_mul(8).saturating_add(num_nodes + 1)
}
