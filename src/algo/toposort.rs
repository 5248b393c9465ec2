/*!
Topological sort via DFS finish order.

Searches are seeded at unvisited vertices of in-degree 0; if none remains
(the graph still has unvisited vertices only inside cycles reachable from
nowhere), any unvisited vertex serves as a fallback seed. Ranks are the
positions in the reversed finish order and are written onto the vertices as
hints once the searches are done.
*/

use std::time::Instant;

use fxhash::FxHashSet;

use super::{ops_line, time_line};
use crate::graph::{AdjacencyList, Graph};
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::vertex::VertexId;

pub(crate) struct FinishOrder<'a> {
    adj: &'a AdjacencyList,
    pub used: FxHashSet<VertexId>,
    pub trace: Trace,
    pub finish: Vec<VertexId>,
    added: u64,
}

impl<'a> FinishOrder<'a> {
    pub fn new(adj: &'a AdjacencyList) -> Self {
        Self {
            adj,
            used: FxHashSet::default(),
            trace: Trace::new(),
            finish: Vec::new(),
            added: 0,
        }
    }

    pub fn run(&mut self, vertex: VertexId) {
        self.used.insert(vertex);
        self.trace.push(Step::vertex(vertex, VertexAction::Enter));
        for n in &self.adj[&vertex] {
            if !self.used.contains(&n.to) {
                self.trace
                    .chained(Step::edge(vertex, n.to, true, None, EdgeAction::Walk));
                self.run(n.to);
                self.trace
                    .chained(Step::edge(vertex, n.to, true, None, EdgeAction::Unselect));
            }
        }
        self.trace.chained(Step::hint_highlight(vertex, self.added));
        self.added += 1;
        self.trace.push(Step::vertex(vertex, VertexAction::Exit));
        self.finish.push(vertex);
    }
}

/// Assigns every vertex its rank in a topological order.
pub fn topological_sort(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    let adj = graph.adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let mut search = FinishOrder::new(&adj);

    let started = Instant::now();

    let mut has_incoming: FxHashSet<VertexId> = FxHashSet::default();
    for neighbors in adj.values() {
        has_incoming.extend(neighbors.iter().map(|n| n.to));
    }

    for &v in &order {
        if !has_incoming.contains(&v) && !search.used.contains(&v) {
            search.run(v);
        }
    }
    // cyclic leftovers: seed anywhere so every vertex gets a rank
    for &v in &order {
        if !search.used.contains(&v) {
            search.run(v);
        }
    }

    let mut trace = search.trace;
    for (rank, &v) in search.finish.iter().rev().enumerate() {
        trace.chained(Step::hint_set(v, rank));
        trace.push(Step::vertex(v, VertexAction::Unselect));
    }

    let elapsed = started.elapsed();
    let statistics = vec![time_line(elapsed), ops_line(&trace)];
    AlgorithmOutput {
        trace,
        statistics,
        info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::HintAction;
    use fxhash::FxHashMap;

    fn ranks(out: &AlgorithmOutput) -> FxHashMap<VertexId, u64> {
        // the rank hints are the Set hints; finish-order markers use Highlight
        out.trace
            .iter()
            .filter_map(|s| match &s.step {
                Step::Hint {
                    vertex,
                    action: HintAction::Set(text),
                } => Some((*vertex, text.parse().unwrap())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ranks_respect_edges() {
        let mut g = Graph::new(true);
        for id in 0..6 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        let edges = [(2, 0), (1, 0), (0, 3), (0, 4), (3, 5)];
        for (a, b) in edges {
            g.add_edge(a, b, None).unwrap();
        }

        let out = topological_sort(&g, None);
        let ranks = ranks(&out);
        assert_eq!(ranks.len(), 6);
        for (a, b) in edges {
            assert!(ranks[&a] < ranks[&b], "edge {a}->{b} out of order");
        }
    }

    #[test]
    fn every_vertex_is_ranked_even_without_sources() {
        // a pure cycle has no in-degree-0 seed; the fallback must cover it
        let mut g = Graph::new(true);
        for id in 0..3 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            g.add_edge(a, b, None).unwrap();
        }
        let out = topological_sort(&g, None);
        assert_eq!(ranks(&out).len(), 3);
    }
}
