/*!
Strongly connected components, Kosaraju's two-pass scheme.

Pass one computes a DFS finish order on the graph and visualizes the ranks;
then every edge is flipped to show the transposed graph, pass two runs DFS
over the reversed adjacency in reverse finish order and writes a component
id onto each vertex, and the edges are flipped back.
*/

use std::time::Instant;

use fxhash::FxHashSet;

use super::toposort::FinishOrder;
use super::{ops_line, time_line};
use crate::graph::{AdjacencyList, Graph};
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::vertex::VertexId;

struct ComponentSearch<'a> {
    adj: &'a AdjacencyList,
    used: FxHashSet<VertexId>,
    trace: &'a mut Trace,
}

impl<'a> ComponentSearch<'a> {
    fn run(&mut self, vertex: VertexId, component: usize) {
        self.used.insert(vertex);
        self.trace.chained(Step::vertex(vertex, VertexAction::Enter));
        self.trace.push(Step::hint_set(vertex, component));
        for n in &self.adj[&vertex] {
            if !self.used.contains(&n.to) {
                self.trace
                    .chained(Step::edge(vertex, n.to, true, None, EdgeAction::Walk));
                self.run(n.to, component);
                self.trace
                    .chained(Step::edge(vertex, n.to, true, None, EdgeAction::Unselect));
            }
        }
        self.trace.push(Step::vertex(vertex, VertexAction::Exit));
    }
}

/// Counts strongly connected components and labels every vertex with its
/// component id.
pub fn kosaraju_scc(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    let adj = graph.adjacency_list();
    let reversed = graph.reversed_adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();

    let started = Instant::now();

    // pass 1: finish order over the original graph
    let mut pass1 = FinishOrder::new(&adj);
    for &v in &order {
        if !pass1.used.contains(&v) {
            pass1.run(v);
        }
    }
    let reverse_finish: Vec<VertexId> = pass1.finish.iter().rev().copied().collect();

    let mut trace = pass1.trace;
    for (rank, &v) in reverse_finish.iter().enumerate() {
        trace.chained(Step::hint_highlight(v, rank));
        trace.push(Step::vertex(v, VertexAction::Unselect));
    }

    // show the transposed graph
    for e in graph.edges() {
        trace.chained(Step::edge(e.from, e.to, true, None, EdgeAction::Flip));
    }
    trace.set_last_chained(false);

    // pass 2: reverse-finish-order DFS over the reversed adjacency
    let mut components = 0usize;
    {
        let mut search = ComponentSearch {
            adj: &reversed,
            used: FxHashSet::default(),
            trace: &mut trace,
        };
        for &v in &reverse_finish {
            if !search.used.contains(&v) {
                search.run(v, components);
                components += 1;
            }
        }
    }

    // restore edge directions
    for e in graph.edges() {
        trace.chained(Step::edge(e.from, e.to, true, None, EdgeAction::Flip));
    }

    let elapsed = started.elapsed();
    let statistics = vec![
        format!("Strongly connected components: {components}"),
        time_line(elapsed),
        ops_line(&trace),
    ];
    AlgorithmOutput {
        trace,
        statistics,
        info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component_count(out: &AlgorithmOutput) -> usize {
        out.statistics[0]
            .rsplit(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn three_components() {
        let mut g = Graph::new(true);
        for id in 0..8 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for (a, b) in [
            (0, 1),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 6),
            (2, 3),
            (3, 2),
            (3, 7),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 5),
            (7, 3),
            (7, 6),
        ] {
            g.add_edge(a, b, None).unwrap();
        }
        let out = kosaraju_scc(&g, None);
        assert_eq!(component_count(&out), 3);
    }

    #[test]
    fn directed_tree_splits_into_singletons() {
        let mut g = Graph::new(true);
        for id in 0..5 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for (a, b) in [(0, 1), (0, 2), (1, 3), (1, 4)] {
            g.add_edge(a, b, None).unwrap();
        }
        let out = kosaraju_scc(&g, None);
        assert_eq!(component_count(&out), 5);
    }

    #[test]
    fn edges_flip_there_and_back() {
        let mut g = Graph::new(true);
        g.add_vertex(0, 0.0, 0.0).unwrap();
        g.add_vertex(1, 0.0, 0.0).unwrap();
        g.add_edge(0, 1, None).unwrap();
        let out = kosaraju_scc(&g, None);
        let flips = out
            .trace
            .iter()
            .filter(|s| {
                matches!(
                    s.step,
                    Step::Edge {
                        action: EdgeAction::Flip,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(flips, 2 * g.edges().len());
    }
}
