/*!
Minimum spanning trees: Prim's tree growth and Kruskal's sorted edge scan.

Both start by dimming every edge to `Shadow`; accepted edges are promoted to
`Walk`, rejected or superseded ones fall back to `Shadow`. On the same
connected weighted graph both produce the same total weight (the tree itself
may differ under ties).
*/

use std::time::Instant;

use fxhash::{FxHashMap, FxHashSet};
use rand::Rng;

use super::{ops_line, time_line, INFINITE};
use crate::graph::Graph;
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::utils::Dsu;
use crate::vertex::VertexId;

/// Prim's minimum spanning tree from a random start vertex.
pub fn prim_mst(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    if graph.vertices().is_empty() {
        return AlgorithmOutput::empty();
    }

    let adj = graph.adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let mut trace = Trace::new();

    let started = Instant::now();

    for e in graph.edges() {
        trace.chained(Step::edge(e.from, e.to, false, e.weight, EdgeAction::Shadow));
    }

    let start = order[rand::rng().random_range(0..order.len())];

    let mut dist: FxHashMap<VertexId, u64> = FxHashMap::default();
    let mut tree_edge: FxHashMap<VertexId, Option<VertexId>> = FxHashMap::default();
    let mut used: FxHashSet<VertexId> = FxHashSet::default();

    for &v in &order {
        if v == start {
            continue;
        }
        dist.insert(v, INFINITE);
        trace.chained(Step::hint_set(v, "∞"));
        tree_edge.insert(v, None);
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
                false,
                Some(weight),
                EdgeAction::Highlight,
            ));
            if weight < dist[&n.to] {
                dist.insert(n.to, weight);
                // demote the tree edge this one supersedes before promoting
                if let Some(Some(prev)) = tree_edge.get(&n.to) {
                    trace.push(Step::edge(*prev, n.to, false, Some(weight), EdgeAction::Shadow));
                }
                tree_edge.insert(n.to, Some(vertex));
                trace.chained(Step::edge(
                    vertex,
                    n.to,
                    false,
                    Some(weight),
                    EdgeAction::Walk,
                ));
                trace.push(Step::hint_set(n.to, weight));
            } else {
                trace.push(Step::edge(
                    vertex,
                    n.to,
                    false,
                    Some(weight),
                    EdgeAction::Shadow,
                ));
            }
        }
        trace.push(Step::vertex(vertex, VertexAction::Exit));
    }

    let elapsed = started.elapsed();
    let mst_weight: u64 = dist.values().filter(|&&d| d != INFINITE).sum();

    let statistics = vec![
        format!("MST weight: {mst_weight}"),
        time_line(elapsed),
        ops_line(&trace),
    ];
    AlgorithmOutput {
        trace,
        statistics,
        info: None,
    }
}

/// Kruskal's minimum spanning tree: ascending edge scan with a DSU guard.
pub fn kruskal_mst(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    if graph.vertices().is_empty() {
        return AlgorithmOutput::empty();
    }

    let mut trace = Trace::new();
    let started = Instant::now();

    let mut dsu = Dsu::new();
    for v in graph.vertex_ids() {
        dsu.make_set(v);
    }

    // stable sort: ties keep input order
    let mut edges = graph.edges().to_vec();
    edges.sort_by_key(|e| e.weight.unwrap_or(0));

    for e in &edges {
        trace.chained(Step::edge(e.from, e.to, false, e.weight, EdgeAction::Shadow));
    }

    let mut mst_weight: u64 = 0;
    for e in &edges {
        let weight = e.weight.unwrap_or(0);
        trace.push(Step::edge(
            e.from,
            e.to,
            false,
            Some(weight),
            EdgeAction::Highlight,
        ));
        if dsu.find(e.from) != dsu.find(e.to) {
            mst_weight += weight;
            dsu.union(e.from, e.to);
            trace.push(Step::edge(e.from, e.to, false, Some(weight), EdgeAction::Walk));
        } else {
            trace.push(Step::edge(
                e.from,
                e.to,
                false,
                Some(weight),
                EdgeAction::Shadow,
            ));
        }
    }

    let elapsed = started.elapsed();
    let statistics = vec![
        format!("MST weight: {mst_weight}"),
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
    use crate::trace::TraceStep;

    fn weighted_square_with_diagonal() -> Graph {
        // MST = 1 + 2 + 3 = 6
        let mut g = Graph::new(false);
        for id in 0..4 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        g.add_edge(0, 1, Some(1)).unwrap();
        g.add_edge(1, 2, Some(2)).unwrap();
        g.add_edge(2, 3, Some(3)).unwrap();
        g.add_edge(3, 0, Some(7)).unwrap();
        g.add_edge(0, 2, Some(9)).unwrap();
        g
    }

    fn mst_weight_line(out: &AlgorithmOutput) -> u64 {
        out.statistics[0]
            .rsplit(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn kruskal_and_prim_agree_on_total_weight() {
        let g = weighted_square_with_diagonal();
        let kruskal = kruskal_mst(&g, None);
        // Prim starts at a random vertex; the weight must not depend on it
        for _ in 0..8 {
            let prim = prim_mst(&g, None);
            assert_eq!(mst_weight_line(&prim), mst_weight_line(&kruskal));
        }
        assert_eq!(mst_weight_line(&kruskal), 6);
    }

    #[test]
    fn kruskal_walks_exactly_tree_edges() {
        let g = weighted_square_with_diagonal();
        let out = kruskal_mst(&g, None);
        let walks = out
            .trace
            .iter()
            .filter(|s| {
                matches!(
                    s,
                    TraceStep {
                        step: Step::Edge {
                            action: EdgeAction::Walk,
                            ..
                        },
                        ..
                    }
                )
            })
            .count();
        assert_eq!(walks, g.vertices().len() - 1);
    }

    #[test]
    fn kruskal_shadows_every_edge_up_front() {
        let g = weighted_square_with_diagonal();
        let out = kruskal_mst(&g, None);
        let leading_shadows = out
            .trace
            .iter()
            .take_while(|s| s.chained)
            .count();
        assert_eq!(leading_shadows, g.edges().len());
    }

    #[test]
    fn prim_and_kruskal_agree_on_random_graphs() {
        use rand::{Rng, SeedableRng};
        use rand_pcg::Pcg64Mcg;

        let rng = &mut Pcg64Mcg::seed_from_u64(1234);
        for _ in 0..10 {
            let n: VertexId = rng.random_range(2..20);
            let mut g = Graph::new(false);
            for id in 0..n {
                g.add_vertex(id, 0.0, 0.0).unwrap();
            }
            // random spanning tree keeps the graph connected, extra edges
            // make the MST nontrivial
            for id in 1..n {
                let anchor = rng.random_range(0..id);
                g.add_edge(id, anchor, Some(rng.random_range(0..=99))).unwrap();
            }
            for _ in 0..n {
                let a = rng.random_range(0..n);
                let b = rng.random_range(0..n);
                let _ = g.add_edge(a, b, Some(rng.random_range(0..=99)));
            }

            let kruskal = kruskal_mst(&g, None);
            let prim = prim_mst(&g, None);
            assert_eq!(mst_weight_line(&prim), mst_weight_line(&kruskal));
        }
    }

    #[test]
    fn equal_weights_still_yield_a_spanning_tree() {
        let mut g = Graph::new(false);
        for id in 0..4 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            g.add_edge(a, b, Some(5)).unwrap();
        }
        let kruskal = kruskal_mst(&g, None);
        let prim = prim_mst(&g, None);
        assert_eq!(mst_weight_line(&kruskal), 15);
        assert_eq!(mst_weight_line(&prim), 15);
    }
}
