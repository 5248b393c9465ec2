/*!
Graph diameter and radius via per-vertex eccentricities.

One BFS per vertex yields its eccentricity (farthest distance in edge
count); the path to the farthest vertex is reconstructed through parent
pointers and lit up as one chained run, then all selections are cleared
before the next round. The diameter is the maximal eccentricity (peripheral
vertices attain it), the radius the minimal one (central vertices attain
it). Cost O(V·(V+E)).
*/

use std::collections::VecDeque;
use std::time::Instant;

use fxhash::{FxHashMap, FxHashSet};

use super::{mem_line, ops_line, time_line};
use crate::graph::{AdjacencyList, Graph};
use crate::registry::{AlgorithmOutput, Selection};
use crate::trace::{EdgeAction, Step, Trace, VertexAction};
use crate::utils::mem;
use crate::vertex::VertexId;

/// BFS from `start`, returning its eccentricity and visualizing the path to
/// the farthest vertex found.
fn eccentricity_bfs(
    start: VertexId,
    adj: &AdjacencyList,
    used: &mut FxHashSet<VertexId>,
    trace: &mut Trace,
) -> u64 {
    let mut parent: FxHashMap<VertexId, VertexId> = FxHashMap::default();
    let mut queue: VecDeque<(VertexId, u64)> = VecDeque::new();

    used.insert(start);
    queue.push_back((start, 0));
    trace.push(Step::vertex(start, VertexAction::Enter));

    let mut vertex = start;
    let mut level = 0;
    while let Some((v, lvl)) = queue.pop_front() {
        vertex = v;
        level = lvl;
        for n in &adj[&v] {
            if used.insert(n.to) {
                queue.push_back((n.to, lvl + 1));
                parent.insert(n.to, v);
            }
        }
    }

    // walk back from the farthest vertex, lighting the path in one frame
    let mut cur = vertex;
    while let Some(&p) = parent.get(&cur) {
        trace.chained(Step::vertex(cur, VertexAction::Select));
        trace.chained(Step::edge(p, cur, false, None, EdgeAction::Highlight));
        cur = p;
    }
    trace.chained(Step::vertex(cur, VertexAction::Select));
    trace.push(Step::hint_highlight(start, level));

    level
}

fn eccentricity_sweep(graph: &Graph) -> (Trace, FxHashMap<VertexId, u64>, usize) {
    let adj = graph.adjacency_list();
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let mut trace = Trace::new();
    let mut used: FxHashSet<VertexId> = FxHashSet::default();
    let mut eccentricities: FxHashMap<VertexId, u64> = FxHashMap::default();

    for &start in &order {
        used.clear();
        let ecc = eccentricity_bfs(start, &adj, &mut used, &mut trace);
        eccentricities.insert(start, ecc);
        trace.chained(Step::hint_set(start, ecc));
        trace.chained(Step::ClearVertexSelections);
        trace.chained(Step::ClearEdgeSelections);
    }

    let memory =
        mem::adjacency_bytes(&adj) + mem::map_bytes(&eccentricities) + mem::set_bytes(&used);
    (trace, eccentricities, memory)
}

/// Diameter of the graph plus its peripheral vertices.
pub fn find_diameter(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    if graph.vertices().is_empty() {
        return AlgorithmOutput::empty();
    }

    let started = Instant::now();
    let (mut trace, eccentricities, memory) = eccentricity_sweep(graph);

    let diameter = *eccentricities.values().max().unwrap_or(&0);
    for v in graph.vertex_ids() {
        if eccentricities[&v] == diameter {
            trace.chained(Step::vertex(v, VertexAction::Select));
        }
    }
    let elapsed = started.elapsed();

    let statistics = vec![
        format!("Diameter: {diameter}"),
        time_line(elapsed),
        ops_line(&trace),
        mem_line(memory),
    ];
    AlgorithmOutput {
        trace,
        statistics,
        info: None,
    }
}

/// Radius of the graph plus its central vertices.
pub fn find_radius(graph: &Graph, _selection: Option<&Selection>) -> AlgorithmOutput {
    if graph.vertices().is_empty() {
        return AlgorithmOutput::empty();
    }

    let started = Instant::now();
    let (mut trace, eccentricities, _memory) = eccentricity_sweep(graph);

    let radius = *eccentricities.values().min().unwrap_or(&0);
    for v in graph.vertex_ids() {
        if eccentricities[&v] == radius {
            trace.chained(Step::vertex(v, VertexAction::Select));
        }
    }
    let elapsed = started.elapsed();

    let statistics = vec![
        format!("Radius: {radius}"),
        time_line(elapsed),
        ops_line(&trace),
    ];
    AlgorithmOutput {
        trace,
        statistics,
        info: None,
    }
}
