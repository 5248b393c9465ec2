/*!
Bridge finding via the classic low-link DFS.

Each vertex carries a `"tin low"` hint that is rewritten whenever its lowest
reachable discovery time improves; a tree edge whose child cannot reach
above it (`low[child] > tin[parent]`) is highlighted as a bridge. All
components are covered.
*/

use std::time::Instant;

use fxhash::{FxHashMap, FxHashSet};

use super::{mem_line, ops_line, time_line};
use crate::graph::{AdjacencyList, Graph};
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::utils::mem;
use crate::vertex::VertexId;

pub(crate) struct LowLink<'a> {
    pub adj: &'a AdjacencyList,
    pub used: FxHashSet<VertexId>,
    pub tin: FxHashMap<VertexId, u64>,
    pub low: FxHashMap<VertexId, u64>,
    timer: u64,
}

impl<'a> LowLink<'a> {
    pub fn new(adj: &'a AdjacencyList) -> Self {
        Self {
            adj,
            used: FxHashSet::default(),
            tin: FxHashMap::default(),
            low: FxHashMap::default(),
            timer: 0,
        }
    }

    pub fn discover(&mut self, vertex: VertexId) {
        self.used.insert(vertex);
        self.tin.insert(vertex, self.timer);
        self.low.insert(vertex, self.timer);
        self.timer += 1;
    }

    pub fn hint(&self, vertex: VertexId) -> String {
        format!("{} {}", self.tin[&vertex], self.low[&vertex])
    }

    pub fn lower(&mut self, vertex: VertexId, candidate: u64) {
        let low = self.low.get_mut(&vertex).unwrap();
        *low = (*low).min(candidate);
    }
}

struct BridgeSearch<'a> {
    state: LowLink<'a>,
    trace: Trace,
    bridges: usize,
}

impl<'a> BridgeSearch<'a> {
    fn run(&mut self, vertex: VertexId, parent: Option<VertexId>) {
        self.state.discover(vertex);
        self.trace.chained(Step::vertex(vertex, VertexAction::Enter));
        self.trace.push(Step::hint_set(vertex, self.state.hint(vertex)));

        let adj = self.state.adj;
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
                if self.state.low[&n.to] > self.state.tin[&vertex] {
                    self.bridges += 1;
                    self.trace
                        .push(Step::edge(vertex, n.to, false, None, EdgeAction::Highlight));
                }
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
        self.trace.push(Step::vertex(vertex, VertexAction::Exit));
    }
}

/// Finds all bridges of the graph.
pub fn find_bridges(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    if graph.vertices().is_empty() {
        return AlgorithmOutput::empty();
    }

    let adj = graph.adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let mut search = BridgeSearch {
        state: LowLink::new(&adj),
        trace: Trace::new(),
        bridges: 0,
    };

    let started = Instant::now();
    for &v in &order {
        if !search.state.used.contains(&v) {
            search.run(v, None);
        }
    }
    let elapsed = started.elapsed();

    let memory = mem::set_bytes(&search.state.used)
        + mem::adjacency_bytes(&adj)
        + mem::map_bytes(&search.state.tin)
        + mem::map_bytes(&search.state.low);

    let statistics = vec![
        format!("Bridges: {}", search.bridges),
        time_line(elapsed),
        ops_line(&search.trace),
        mem_line(memory),
    ];
    AlgorithmOutput {
        trace: search.trace,
        statistics,
        info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge_count(out: &AlgorithmOutput) -> usize {
        out.statistics[0]
            .rsplit(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn every_path_edge_is_a_bridge() {
        let mut g = Graph::new(false);
        for id in 0..5 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for id in 0..4 {
            g.add_edge(id, id + 1, None).unwrap();
        }
        let out = find_bridges(&g, None);
        assert_eq!(bridge_count(&out), 4);
    }

    #[test]
    fn bridge_between_two_cycles() {
        // two triangles joined by the single bridge 1-3
        let mut g = Graph::new(false);
        for id in 0..6 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for (a, b) in [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)] {
            g.add_edge(a, b, None).unwrap();
        }
        let out = find_bridges(&g, None);
        assert_eq!(bridge_count(&out), 1);
        assert!(out.trace.iter().any(|s| s.step
            == Step::edge(1, 3, false, None, EdgeAction::Highlight)));
    }

    #[test]
    fn cycle_has_no_bridges() {
        let mut g = Graph::new(false);
        for id in 0..4 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            g.add_edge(a, b, None).unwrap();
        }
        assert_eq!(bridge_count(&find_bridges(&g, None)), 0);
    }

    #[test]
    fn disconnected_components_are_all_covered() {
        let mut g = Graph::new(false);
        for id in 0..4 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        g.add_edge(0, 1, None).unwrap();
        g.add_edge(2, 3, None).unwrap();
        assert_eq!(bridge_count(&find_bridges(&g, None)), 2);
    }
}
