/*!
Bipartiteness check via 2-coloring DFS.

Vertices are painted `Color1`/`Color2` alternately while walking; meeting a
non-parent neighbor of the same color proves an odd cycle — the offending
edge is highlighted and the search aborts.
*/

use std::time::Instant;

use fxhash::FxHashMap;
use rand::Rng;

use super::{ops_line, time_line};
use crate::graph::{AdjacencyList, Graph};
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::vertex::VertexId;

struct TwoColoring<'a> {
    adj: &'a AdjacencyList,
    colors: FxHashMap<VertexId, u8>,
    trace: Trace,
}

impl<'a> TwoColoring<'a> {
    fn new(adj: &'a AdjacencyList) -> Self {
        Self {
            adj,
            colors: FxHashMap::default(),
            trace: Trace::new(),
        }
    }

    fn color(&self, v: VertexId) -> u8 {
        self.colors.get(&v).copied().unwrap_or(0)
    }

    fn run(&mut self, vertex: VertexId, parent: Option<VertexId>, color: u8) -> bool {
        self.colors.insert(vertex, color);
        let action = if color == 1 {
            VertexAction::Color1
        } else {
            VertexAction::Color2
        };
        self.trace.push(Step::vertex(vertex, action));

        for n in &self.adj[&vertex] {
            if self.color(n.to) == 0 {
                self.trace
                    .push(Step::edge(vertex, n.to, true, None, EdgeAction::Walk));
                if !self.run(n.to, Some(vertex), 3 - color) {
                    return false;
                }
                self.trace
                    .push(Step::edge(n.to, vertex, true, None, EdgeAction::Walk));
            } else if parent != Some(n.to) && self.color(n.to) == color {
                self.trace
                    .push(Step::edge(vertex, n.to, true, None, EdgeAction::Highlight));
                return false;
            }
        }
        true
    }
}

/// Checks whether the graph admits a 2-coloring.
pub fn check_bipartite(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    if graph.vertices().is_empty() {
        return AlgorithmOutput::empty();
    }

    let adj = graph.adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let mut search = TwoColoring::new(&adj);

    let started = Instant::now();

    let start = order[rand::rng().random_range(0..order.len())];
    let mut is_bipartite = search.run(start, None, 1);
    if is_bipartite {
        for &v in &order {
            if search.color(v) == 0 {
                if !search.run(v, None, 1) {
                    is_bipartite = false;
                    break;
                }
            }
        }
    }

    let elapsed = started.elapsed();
    let verdict = if is_bipartite {
        "Graph is bipartite"
    } else {
        "Graph is not bipartite"
    };

    let statistics = vec![
        verdict.to_string(),
        time_line(elapsed),
        ops_line(&search.trace),
    ];
    AlgorithmOutput {
        trace: search.trace,
        statistics,
        info: None,
    }
}
