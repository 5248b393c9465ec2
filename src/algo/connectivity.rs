/*!
Connectivity check: one BFS from a random vertex, connected iff every vertex
ends up visited.
*/

use std::collections::VecDeque;
use std::time::Instant;

use fxhash::FxHashSet;
use rand::Rng;

use super::{ops_line, time_line};
use crate::graph::Graph;
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::vertex::VertexId;

/// Checks whether the (undirected) graph is connected.
pub fn check_connected(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    if graph.vertices().is_empty() {
        return AlgorithmOutput::empty();
    }

    let adj = graph.adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let mut trace = Trace::new();

    let started = Instant::now();

    let start = order[rand::rng().random_range(0..order.len())];
    let mut used: FxHashSet<VertexId> = FxHashSet::default();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    used.insert(start);
    queue.push_back(start);
    trace.push(Step::vertex(start, VertexAction::Enter));

    while let Some(vertex) = queue.pop_front() {
        trace.push(Step::vertex(vertex, VertexAction::Select));
        for n in &adj[&vertex] {
            if used.insert(n.to) {
                trace.push(Step::edge(vertex, n.to, false, None, EdgeAction::Walk));
                queue.push_back(n.to);
                trace.push(Step::vertex(n.to, VertexAction::Enter));
            }
        }
        trace.push(Step::vertex(vertex, VertexAction::Exit));
    }

    let is_connected = order.iter().all(|v| used.contains(v));
    let elapsed = started.elapsed();

    let verdict = if is_connected {
        "Graph is connected"
    } else {
        "Graph is not connected"
    };
    let statistics = vec![verdict.to_string(), time_line(elapsed), ops_line(&trace)];
    AlgorithmOutput {
        trace,
        statistics,
        info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_path_is_reported_connected() {
        let mut g = Graph::new(false);
        for id in 0..4 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3)] {
            g.add_edge(a, b, None).unwrap();
        }
        for _ in 0..8 {
            let out = check_connected(&g, None);
            assert_eq!(out.statistics[0], "Graph is connected");
        }
    }

    #[test]
    fn isolated_vertex_breaks_connectivity() {
        let mut g = Graph::new(false);
        for id in 0..3 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        g.add_edge(0, 1, None).unwrap();
        for _ in 0..8 {
            let out = check_connected(&g, None);
            assert_eq!(out.statistics[0], "Graph is not connected");
        }
    }
}
