/*!
Breadth-first and depth-first traversal.

Both traversals start at a user-selected vertex and draw only their tree
edges: BFS marks a vertex `Enter` on discovery, `Select` when dequeued and
`Exit` once its neighborhood is scanned; DFS walks each tree edge twice
(down and back) so the replay visibly backtracks.
*/

use std::collections::VecDeque;
use std::time::Instant;

use fxhash::FxHashSet;

use super::{ops_line, time_line};
use crate::graph::{AdjacencyList, Graph};
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::vertex::VertexId;

fn bfs(start: VertexId, adj: &AdjacencyList, trace: &mut Trace) {
    let mut used: FxHashSet<VertexId> = FxHashSet::default();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    used.insert(start);
    queue.push_back(start);
    trace.push(Step::vertex(start, VertexAction::Enter));

    while let Some(vertex) = queue.pop_front() {
        trace.push(Step::vertex(vertex, VertexAction::Select));
        for n in &adj[&vertex] {
            if used.insert(n.to) {
                trace.push(Step::edge(vertex, n.to, true, None, EdgeAction::Walk));
                queue.push_back(n.to);
                trace.push(Step::vertex(n.to, VertexAction::Enter));
            }
        }
        trace.push(Step::vertex(vertex, VertexAction::Exit));
    }
}

/// Breadth-first search from the selected vertex.
pub fn breadth_first_search(graph: &Graph, selection: Option<&Selection>) -> AlgorithmOutput {
    let Some(start) = selection.and_then(Selection::vertex) else {
        return AlgorithmOutput::empty();
    };
    if !graph.has_vertex(start) {
        return AlgorithmOutput::empty();
    }

    let adj = graph.adjacency_list();
    let mut trace = Trace::new();

    let started = Instant::now();
    bfs(start, &adj, &mut trace);
    let elapsed = started.elapsed();

    let statistics = vec![time_line(elapsed), ops_line(&trace)];
    AlgorithmOutput {
        trace,
        statistics,
        info: None,
    }
}

struct DepthFirst<'a> {
    adj: &'a AdjacencyList,
    used: FxHashSet<VertexId>,
    trace: Trace,
}

impl<'a> DepthFirst<'a> {
    fn new(adj: &'a AdjacencyList) -> Self {
        Self {
            adj,
            used: FxHashSet::default(),
            trace: Trace::new(),
        }
    }

    fn run(&mut self, vertex: VertexId) {
        self.used.insert(vertex);
        self.trace.push(Step::vertex(vertex, VertexAction::Enter));
        for n in &self.adj[&vertex] {
            if !self.used.contains(&n.to) {
                self.trace
                    .push(Step::edge(vertex, n.to, true, None, EdgeAction::Walk));
                self.run(n.to);
                self.trace
                    .push(Step::edge(n.to, vertex, true, None, EdgeAction::Walk));
            }
        }
        self.trace.push(Step::vertex(vertex, VertexAction::Exit));
    }
}

/// Depth-first search from the selected vertex.
pub fn depth_first_search(graph: &Graph, selection: Option<&Selection>) -> AlgorithmOutput {
    let Some(start) = selection.and_then(Selection::vertex) else {
        return AlgorithmOutput::empty();
    };
    if !graph.has_vertex(start) {
        return AlgorithmOutput::empty();
    }

    let adj = graph.adjacency_list();
    let mut search = DepthFirst::new(&adj);

    let started = Instant::now();
    search.run(start);
    let elapsed = started.elapsed();

    let statistics = vec![
        time_line(elapsed),
        format!("Steps: {}", search.trace.len()),
    ];
    AlgorithmOutput {
        trace: search.trace,
        statistics,
        info: None,
    }
}
