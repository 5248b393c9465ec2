/*!
Articulation-point (cut-vertex) search, sharing the low-link DFS state with
the bridge finder.

A non-root vertex is a cut vertex as soon as one of its DFS children cannot
reach above it (`low[child] >= tin[vertex]`); the DFS root is one iff it has
more than one tree child. A found cut vertex is selected exactly once.
*/

use std::time::Instant;

use fxhash::FxHashSet;

use super::bridges::LowLink;
use super::{ops_line, time_line};
use crate::graph::Graph;
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::vertex::VertexId;

struct CutVertexSearch<'a> {
    state: LowLink<'a>,
    trace: Trace,
    cut_vertices: FxHashSet<VertexId>,
}

impl<'a> CutVertexSearch<'a> {
    fn run(&mut self, vertex: VertexId, parent: Option<VertexId>) {
        self.state.discover(vertex);
        self.trace.chained(Step::vertex(vertex, VertexAction::Enter));
        self.trace.push(Step::hint_set(vertex, self.state.hint(vertex)));

        let adj = self.state.adj;
        let mut children = 0usize;
        for n in &adj[&vertex] {
            if Some(n.to) == parent {
                continue;
            }
            if !self.state.used.contains(&n.to) {
                self.trace
                    .push(Step::edge(vertex, n.to, true, None, EdgeAction::Walk));
                self.run(n.to, Some(vertex));
                self.state.lower(vertex, self.state.low[&n.to]);
                self.trace
                    .chained(Step::hint_set(vertex, self.state.hint(vertex)));
                self.trace
                    .push(Step::edge(vertex, n.to, true, None, EdgeAction::Unselect));
                if self.state.low[&n.to] >= self.state.tin[&vertex]
                    && parent.is_some()
                    && !self.cut_vertices.contains(&vertex)
                {
                    self.cut_vertices.insert(vertex);
                    self.trace.push(Step::vertex(vertex, VertexAction::Select));
                }
                children += 1;
            } else {
                self.trace
                    .push(Step::edge(vertex, n.to, true, None, EdgeAction::Walk));
                self.state.lower(vertex, self.state.tin[&n.to]);
                self.trace
                    .chained(Step::hint_set(vertex, self.state.hint(vertex)));
                self.trace
                    .push(Step::edge(vertex, n.to, true, None, EdgeAction::Unselect));
            }
        }

        if !self.cut_vertices.contains(&vertex) {
            self.trace.push(Step::vertex(vertex, VertexAction::Exit));
            if parent.is_none() && children > 1 {
                self.cut_vertices.insert(vertex);
                self.trace.push(Step::vertex(vertex, VertexAction::Select));
            }
        }
    }
}

/// Finds all articulation points of the graph.
pub fn find_cut_vertices(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    if graph.vertices().is_empty() {
        return AlgorithmOutput::empty();
    }

    let adj = graph.adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let mut search = CutVertexSearch {
        state: LowLink::new(&adj),
        trace: Trace::new(),
        cut_vertices: FxHashSet::default(),
    };

    let started = Instant::now();
    for &v in &order {
        if !search.state.used.contains(&v) {
            search.run(v, None);
        }
    }
    let elapsed = started.elapsed();

    let statistics = vec![
        format!("Cut vertices: {}", search.cut_vertices.len()),
        time_line(elapsed),
        ops_line(&search.trace),
    ];
    AlgorithmOutput {
        trace: search.trace,
        statistics,
        info: None,
    }
}
