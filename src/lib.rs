/*!
`graphtrace` is the engine behind an interactive graph-algorithm visualizer:
it runs classic graph algorithms over a snapshot of a small editable graph
and records every visualization-relevant event into a replayable **trace**,
which a cooperative playback loop then applies step by step.

# Architecture

The crate is split along a strict producer/consumer boundary:

- **Algorithms are pure.** Every algorithm in [`algo`] consumes an immutable
  view of the graph (plus an optional user selection) and returns an
  [`AlgorithmOutput`](registry::AlgorithmOutput): an ordered
  [`Trace`](trace::Trace) of atomic [`Step`](trace::Step)s together with
  human-readable statistics. Nothing is rendered while an algorithm runs.
- **Playback decides timing.** The [`playback`] module owns the trace during
  replay and decides *when* each logged step becomes visible: steps marked
  `chained` are applied back-to-back within one visible frame, everything
  else is separated by a configurable delay. Pausing, single-stepping and
  cancellation are handled by the scheduler, never by the algorithms.

# Core submodules

- [`graph`] — the mutable graph model with fail-fast invariant checks and
  the adjacency-list / reversed-adjacency / adjacency-matrix converters
  algorithms consume,
- [`trace`] — step variants and the trace container,
- [`algo`] — the fifteen algorithms (traversal, shortest path, MST,
  connectivity, bipartiteness, topology, bridges, cut vertices, SCC,
  Euler structures, eccentricity),
- [`registry`] — static descriptors binding each algorithm to its pre-call
  mode and structural criteria,
- [`validate`] — the pre-call criteria validator,
- [`playback`] — the tokio-based replay scheduler and the auto-dismissing
  notification timer,
- [`io`] — JSON persistence of graphs.

In most use-cases, `use graphtrace::prelude::*;` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod graph;
pub mod io;
pub mod playback;
pub mod registry;
pub mod trace;
pub mod utils;
pub mod validate;
pub mod vertex;

/// Common types: identifiers, the graph model, steps and traces, descriptors.
pub mod prelude {
    pub use super::{
        edge::{Edge, Weight, MAX_WEIGHT},
        error::{GraphError, ValidationError},
        graph::{Graph, Neighbor},
        registry::{registry, AlgorithmDescriptor, AlgorithmOutput, PreCall, Selection},
        trace::{EdgeAction, HintAction, Step, Trace, TraceStep, VertexAction},
        vertex::{Vertex, VertexId, MAX_VERTEX_ID},
    };
}
