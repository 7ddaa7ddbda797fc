#![allow(dead_code)]

use push_relabel::maximum_flow::graph::{EdgeHandle, Graph};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn build(num_nodes: usize, edges: &[(usize, usize, i64)]) -> (Graph<i64>, Vec<EdgeHandle>) {
    let mut graph = Graph::new(num_nodes);
    let handles = edges.iter().map(|&(from, to, upper)| graph.add_directed_edge(from, to, upper).unwrap()).collect();
    (graph, handles)
}

// brute force over every vertex subset containing source but not sink
pub fn minimum_cut_capacity(num_nodes: usize, edges: &[(usize, usize, i64)], source: usize, sink: usize) -> i64 {
    let inside = |mask: u32, u: usize| mask >> u & 1 == 1;
    (0u32..1 << num_nodes)
        .filter(|&mask| inside(mask, source) && !inside(mask, sink))
        .map(|mask| edges.iter().filter(|&&(u, v, _)| inside(mask, u) && !inside(mask, v)).map(|&(_, _, upper)| upper).sum::<i64>())
        .min()
        .unwrap()
}

// flow is feasible on every pair and conserved away from the terminals
pub fn assert_valid_flow(graph: &Graph<i64>, handles: &[EdgeHandle], source: usize, sink: usize, value: i64) {
    let mut balance = vec![0i64; graph.num_nodes()];
    for &handle in handles {
        let edge = graph.get_edge(handle).unwrap();
        assert!(0 <= edge.flow && edge.flow <= edge.upper, "{edge:?} violates its capacity");

        let reverse = graph.inside_edge(handle.reverse).unwrap();
        assert_eq!(reverse.upper - reverse.residual_capacity(), -edge.flow);

        balance[edge.from] -= edge.flow;
        balance[edge.to] += edge.flow;
    }

    for (u, &b) in balance.iter().enumerate() {
        if u != source && u != sink {
            assert_eq!(b, 0, "flow is not conserved at {u}");
        }
    }
    assert_eq!(balance[source], -value);
    assert_eq!(balance[sink], value);
}
