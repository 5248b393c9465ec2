/*!
Dijkstra's shortest paths with an O(V²+E) minimum selection — no heap, the
vertex list is small and the round-based selection reads better in replay.

Every vertex starts with an "∞" distance hint; relaxations rewrite the hint
of the target vertex, probing an edge highlights it, a non-improving edge is
dimmed again. Ties for the minimal unvisited vertex go to the earliest
vertex in list order.
*/

use std::time::Instant;

use fxhash::{FxHashMap, FxHashSet};

use super::{mem_line, ops_line, time_line, INFINITE};
use crate::graph::Graph;
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::utils::mem;
use crate::vertex::VertexId;

/// Single-source shortest paths from the selected vertex.
pub fn dijkstra(graph: &Graph, selection: Option<&Selection>) -> AlgorithmOutput {
    let Some(start) = selection.and_then(Selection::vertex) else {
        return AlgorithmOutput::empty();
    };
    if !graph.has_vertex(start) {
        return AlgorithmOutput::empty();
    }

    let adj = graph.adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let mut trace = Trace::new();

    let started = Instant::now();

    let mut dist: FxHashMap<VertexId, u64> = FxHashMap::default();
    let mut used: FxHashSet<VertexId> = FxHashSet::default();

    for &v in &order {
        if v == start {
            continue;
        }
        dist.insert(v, INFINITE);
        trace.chained(Step::hint_set(v, "∞"));
    }
    dist.insert(start, 0);
    trace.push(Step::hint_set(start, "0"));

    for _ in 0..order.len() {
        let mut current: Option<VertexId> = None;
        for &j in &order {
            if !used.contains(&j) && current.is_none_or(|v| dist[&j] < dist[&v]) {
                current = Some(j);
            }
        }
        let Some(vertex) = current else {
            break;
        };
        if dist[&vertex] == INFINITE {
            break;
        }

        used.insert(vertex);
        trace.push(Step::vertex(vertex, VertexAction::Select));

        for n in &adj[&vertex] {
            if used.contains(&n.to) {
                continue;
            }
            let weight = n.weight.unwrap_or(0);
            trace.push(Step::edge(
                vertex,
                n.to,
                true,
                Some(weight),
                EdgeAction::Highlight,
            ));
            if dist[&vertex] + weight < dist[&n.to] {
                dist.insert(n.to, dist[&vertex] + weight);
                trace.chained(Step::edge(vertex, n.to, true, Some(weight), EdgeAction::Walk));
                trace.push(Step::hint_set(n.to, dist[&n.to]));
            } else {
                trace.push(Step::edge(
                    vertex,
                    n.to,
                    true,
                    Some(weight),
                    EdgeAction::Unselect,
                ));
            }
        }
        trace.push(Step::vertex(vertex, VertexAction::Exit));
    }

    let elapsed = started.elapsed();
    let memory = mem::map_bytes(&dist) + mem::set_bytes(&used) + mem::adjacency_bytes(&adj);

    let statistics = vec![time_line(elapsed), ops_line(&trace), mem_line(memory)];
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

    fn weighted_graph() -> Graph {
        //      1
        //  0 ----- 1
        //  |       |
        // 4|       |1
        //  |   2   |
        //  3 ----- 2      5 isolated
        let mut g = Graph::new(false);
        for id in 0..5 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        g.add_edge(0, 1, Some(1)).unwrap();
        g.add_edge(1, 2, Some(1)).unwrap();
        g.add_edge(2, 3, Some(2)).unwrap();
        g.add_edge(0, 3, Some(4)).unwrap();
        g
    }

    /// Brute-force reference: Bellman-Ford style relaxation to a fixpoint.
    fn reference_distances(graph: &Graph, start: VertexId) -> FxHashMap<VertexId, u64> {
        let adj = graph.adjacency_list();
        let mut dist: FxHashMap<VertexId, u64> =
            graph.vertex_ids().map(|v| (v, INFINITE)).collect();
        dist.insert(start, 0);
        for _ in 0..graph.vertices().len() {
            for v in graph.vertex_ids() {
                if dist[&v] == INFINITE {
                    continue;
                }
                for n in &adj[&v] {
                    let candidate = dist[&v] + n.weight.unwrap_or(0);
                    if candidate < dist[&n.to] {
                        dist.insert(n.to, candidate);
                    }
                }
            }
        }
        dist
    }

    fn hint_value(text: &str) -> u64 {
        if text == "∞" {
            INFINITE
        } else {
            text.parse().unwrap()
        }
    }

    /// Hints per vertex, in emission order.
    fn hint_history(out: &AlgorithmOutput) -> FxHashMap<VertexId, Vec<u64>> {
        let mut history: FxHashMap<VertexId, Vec<u64>> = FxHashMap::default();
        for s in out.trace.iter() {
            if let Step::Hint {
                vertex,
                action: HintAction::Set(text),
            } = &s.step
            {
                history.entry(*vertex).or_default().push(hint_value(text));
            }
        }
        history
    }

    #[test]
    fn final_hints_match_reference_distances() {
        let g = weighted_graph();
        let out = dijkstra(&g, Some(&Selection::Vertex(0)));
        let reference = reference_distances(&g, 0);
        let history = hint_history(&out);

        for v in g.vertex_ids() {
            let last = *history[&v].last().unwrap();
            assert_eq!(last, reference[&v], "distance of vertex {v}");
        }
        // the isolated vertex keeps its infinity hint
        assert_eq!(history[&4], vec![INFINITE]);
    }

    #[test]
    fn hints_never_increase() {
        let g = weighted_graph();
        let out = dijkstra(&g, Some(&Selection::Vertex(0)));
        for (v, values) in hint_history(&out) {
            for pair in values.windows(2) {
                assert!(pair[1] <= pair[0], "hint of vertex {v} increased");
            }
        }
    }

    #[test]
    fn reports_time_ops_and_memory() {
        let out = dijkstra(&weighted_graph(), Some(&Selection::Vertex(0)));
        assert_eq!(out.statistics.len(), 3);
        assert!(out.statistics[2].contains("bytes"));
    }
}
