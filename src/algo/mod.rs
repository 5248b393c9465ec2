/*!
# Algorithm Library

The fifteen algorithms of the visualizer. Every algorithm is a pure function
over the graph snapshot (plus an optional user selection): it builds whatever
adjacency view it needs, walks the graph, and appends visualization
[`Step`](crate::trace::Step)s to a fresh [`Trace`](crate::trace::Trace) as it
goes. Nothing here touches the screen or the clock beyond measuring its own
runtime for the statistics lines.

Algorithms are total: an infeasible input that passed the pre-call criteria
(e.g. a graph without an Euler cycle) produces a normal result describing
the negative answer, never an error.
*/

mod bipartite;
mod bridges;
mod connectivity;
mod cut_vertices;
mod dijkstra;
mod eccentricity;
mod euler;
mod mst;
mod scc;
mod toposort;
mod traversal;

pub use bipartite::check_bipartite;
pub use bridges::find_bridges;
pub use connectivity::check_connected;
pub use cut_vertices::find_cut_vertices;
pub use dijkstra::dijkstra;
pub use eccentricity::{find_diameter, find_radius};
pub use euler::{find_euler_cycle, find_euler_path};
pub use mst::{kruskal_mst, prim_mst};
pub use scc::kosaraju_scc;
pub use toposort::topological_sort;
pub use traversal::{breadth_first_search, depth_first_search};

use std::time::Duration;

use crate::trace::Trace;

/// Distance value for "not reached yet".
pub(crate) const INFINITE: u64 = u64::MAX;

pub(crate) fn time_line(elapsed: Duration) -> String {
    format!("Time: {:.4}ms", elapsed.as_secs_f64() * 1e3)
}

pub(crate) fn ops_line(trace: &Trace) -> String {
    format!("Operations: {}", trace.operations_count())
}

pub(crate) fn mem_line(bytes: usize) -> String {
    format!("Memory: {bytes} bytes")
}
