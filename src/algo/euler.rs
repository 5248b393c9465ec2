/*!
Euler paths and cycles.

Feasibility comes first: degree parity (undirected, self-loops stripped so
they cannot corrupt the parity) or in/out balance (directed), plus a single
nonempty component reachable over the union of forward and reverse
adjacency. Only a feasible graph is walked — Hierholzer's algorithm with an
explicit stack over a private, edge-consuming copy of the adjacency list,
emitting the circuit edges on backtrack with incrementing position labels.
*/

use std::time::Instant;

use fxhash::FxHashSet;

use super::{ops_line, time_line};
use crate::graph::{AdjacencyList, Graph};
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::vertex::VertexId;

#[derive(Clone, Copy, PartialEq)]
enum EulerMode {
    Path,
    Cycle,
}

/// Reachability over forward and (for directed graphs) reverse edges, so a
/// weakly connected directed graph counts as one component.
struct UnionReach<'a> {
    adj: &'a AdjacencyList,
    reversed: &'a AdjacencyList,
    oriented: bool,
    used: FxHashSet<VertexId>,
    trace: &'a mut Trace,
}

impl<'a> UnionReach<'a> {
    fn run(&mut self, vertex: VertexId) {
        self.used.insert(vertex);
        self.trace.push(Step::vertex(vertex, VertexAction::Enter));
        let adj = self.adj;
        for n in &adj[&vertex] {
            if !self.used.contains(&n.to) {
                self.trace
                    .chained(Step::edge(vertex, n.to, self.oriented, None, EdgeAction::Walk));
                self.run(n.to);
            }
        }
        if self.oriented {
            let reversed = self.reversed;
            for n in &reversed[&vertex] {
                if !self.used.contains(&n.to) {
                    self.trace.chained(Step::edge(
                        n.to,
                        vertex,
                        self.oriented,
                        None,
                        EdgeAction::Walk,
                    ));
                    self.run(n.to);
                }
            }
        }
        self.trace.push(Step::vertex(vertex, VertexAction::Exit));
    }
}

fn check_for_euler(graph: &Graph, mode: EulerMode, trace: &mut Trace) -> bool {
    let oriented = graph.oriented();
    let mut adj = graph.adjacency_list();
    let reversed = graph.reversed_adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();

    if !oriented {
        // strip self-loops so they cannot produce odd degrees
        for &v in &order {
            adj.get_mut(&v).unwrap().retain(|n| n.to != v);
        }

        let mut odd_vertices = 0;
        for &v in &order {
            if adj[&v].len() % 2 == 1 {
                odd_vertices += 1;
                let infeasible = match mode {
                    EulerMode::Path => odd_vertices > 2,
                    EulerMode::Cycle => true,
                };
                if infeasible {
                    trace.push(Step::hint_set(v, "1"));
                    return false;
                }
                trace.push(Step::hint_highlight(v, "1"));
            } else {
                trace.push(Step::hint_highlight(v, "0"));
            }
        }
    } else {
        let mut surplus_in = 0;
        let mut surplus_out = 0;
        for &v in &order {
            let degree = reversed[&v].len() as i64 - adj[&v].len() as i64;
            match (degree, mode) {
                (0, _) => trace.push(Step::hint_highlight(v, "0")),
                (1, EulerMode::Path) => {
                    surplus_in += 1;
                    if surplus_in > 1 {
                        trace.push(Step::hint_set(v, degree));
                        return false;
                    }
                    trace.push(Step::hint_highlight(v, degree));
                }
                (-1, EulerMode::Path) => {
                    surplus_out += 1;
                    if surplus_out > 1 {
                        trace.push(Step::hint_set(v, degree));
                        return false;
                    }
                    trace.push(Step::hint_highlight(v, degree));
                }
                _ => {
                    trace.push(Step::hint_set(v, degree));
                    return false;
                }
            }
        }
    }

    // all edges must live in one component
    let mut reach = UnionReach {
        adj: &adj,
        reversed: &reversed,
        oriented,
        used: FxHashSet::default(),
        trace: &mut *trace,
    };
    reach.run(order[0]);
    let used = reach.used;

    for &v in &order {
        if !used.contains(&v) {
            if !adj[&v].is_empty() {
                trace.chained(Step::vertex(v, VertexAction::Select));
                trace.push(Step::edge(
                    v,
                    adj[&v][0].to,
                    oriented,
                    None,
                    EdgeAction::Highlight,
                ));
                return false;
            }
            trace.push(Step::vertex(v, VertexAction::Exit));
        }
    }

    true
}

fn construct(graph: &Graph, mode: EulerMode, trace: &mut Trace) {
    let oriented = graph.oriented();
    let adj = graph.adjacency_list();
    let reversed = graph.reversed_adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();

    let mut start = order[0];
    if mode == EulerMode::Path {
        for &v in &order {
            let qualifies = if oriented {
                // the walk below runs over the reversed adjacency, so it
                // begins at the sink and unwinds into a forward path
                reversed[&v].len() as i64 - adj[&v].len() as i64 == 1
            } else {
                adj[&v].len() % 2 == 1
            };
            if qualifies {
                start = v;
                break;
            }
        }
    }
    trace.push(Step::vertex(start, VertexAction::Select));

    // private, edge-consuming copy
    let mut walk: AdjacencyList = if oriented { reversed } else { adj };

    let mut stack: Vec<VertexId> = vec![start];
    let mut path_len: u64 = 0;
    while let Some(&cur) = stack.last() {
        let neighbors = walk.get_mut(&cur).unwrap();
        if !neighbors.is_empty() {
            let to = neighbors.remove(0).to;
            stack.push(to);
            if !oriented {
                let back = walk.get_mut(&to).unwrap();
                if let Some(pos) = back.iter().position(|n| n.to == cur) {
                    back.remove(pos);
                }
            }
            trace.push(Step::edge(cur, to, true, None, EdgeAction::Highlight));
        } else {
            stack.pop();
            if let Some(&top) = stack.last() {
                if path_len == 0 {
                    trace.chained(Step::vertex(cur, VertexAction::Color1));
                }
                path_len += 1;
                trace.push(Step::edge(cur, top, true, Some(path_len), EdgeAction::Walk));
            }
        }
    }
}

fn euler(graph: &Graph, mode: EulerMode) -> AlgorithmOutput {
    let mut trace = Trace::new();
    let started = Instant::now();

    let feasible = !graph.vertices().is_empty()
        && !graph.edges().is_empty()
        && check_for_euler(graph, mode, &mut trace);
    if feasible {
        trace.chained(Step::ClearVertexSelections);
        trace.chained(Step::ClearEdgeSelections);
        construct(graph, mode, &mut trace);
    }

    let elapsed = started.elapsed();
    let verdict = match (mode, feasible) {
        (EulerMode::Path, true) => "Euler path exists",
        (EulerMode::Path, false) => "No Euler path exists",
        (EulerMode::Cycle, true) => "Euler cycle exists",
        (EulerMode::Cycle, false) => "No Euler cycle exists",
    };

    let statistics = vec![verdict.to_string(), time_line(elapsed), ops_line(&trace)];
    AlgorithmOutput {
        trace,
        statistics,
        info: None,
    }
}

/// Euler path: uses every edge exactly once, endpoints may differ.
pub fn find_euler_path(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    euler(graph, EulerMode::Path)
}

/// Euler cycle: uses every edge exactly once and returns to the start.
pub fn find_euler_cycle(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    euler(graph, EulerMode::Cycle)
}
