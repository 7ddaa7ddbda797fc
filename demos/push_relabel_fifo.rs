use push_relabel::maximum_flow::compute_max_flow;
use push_relabel::maximum_flow::error::FlowError;
use push_relabel::maximum_flow::graph::Graph;

// RUST_LOG=trace shows every push, relabel and queue operation
fn main() -> Result<(), FlowError> {
    env_logger::init();

    let mut graph = Graph::new(0);
    let (a, b, c) = (graph.add_node(), graph.add_node(), graph.add_node());
    graph.add_directed_edge(a, b, 10)?;
    graph.add_directed_edge(b, c, 5)?;
    println!("max flow {a}->{c}: {}", compute_max_flow(&mut graph, a, c)?);

    let d = graph.add_node();
    graph.add_directed_edge(a, d, 15)?;
    graph.add_directed_edge(d, c, 10)?;
    println!("max flow with branch (A -> B -> C, A -> D -> C): {}", compute_max_flow(&mut graph, a, c)?);

    let mut graph = Graph::new(6);
    for (from, to, upper) in [(0, 1, 16), (0, 2, 13), (2, 1, 4), (1, 2, 10), (1, 3, 12), (3, 2, 9), (2, 4, 14), (4, 3, 7), (3, 5, 20), (4, 5, 4)] {
        graph.add_directed_edge(from, to, upper)?;
    }
    println!("max flow 0->5: {}", compute_max_flow(&mut graph, 0, 5)?);
    for edge in graph.edges() {
        println!("{:?}", edge);
    }

    Ok(())
}
