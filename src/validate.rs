/*!
# Pre-call Validation

Before an algorithm may run, the graph must satisfy the structural
[`Criteria`] of its descriptor. Checks run in a fixed order — weighted,
orientation, connected, acyclic — and the first violation wins, so the user
always sees a single, stable message when several criteria fail at once.

[`pre_call`] wraps validation into the one-of-three decision the host acts
on: reject with a message, switch into a pick-a-vertex/edge mode, or invoke
the algorithm right away.
*/

use fxhash::FxHashMap;
use tracing::debug;

use crate::error::ValidationError;
use crate::graph::{AdjacencyList, Graph};
use crate::registry::{AlgorithmDescriptor, AlgorithmOutput, Criteria, PreCall, Selection};
use crate::vertex::VertexId;

/// Checks the graph against a criteria bitmask, returning the first
/// violated criterion in check order.
pub fn validate(criteria: Criteria, graph: &Graph) -> Result<(), ValidationError> {
    if criteria.contains(Criteria::WEIGHTED) && !graph.is_weighted() {
        return Err(ValidationError::NotWeighted);
    }
    if criteria.contains(Criteria::NOT_ORIENTED) && graph.oriented() {
        return Err(ValidationError::MustBeUndirected);
    }
    if criteria.contains(Criteria::ORIENTED) && !graph.oriented() {
        return Err(ValidationError::MustBeDirected);
    }
    if criteria.contains(Criteria::CONNECTED) && !graph.all_reachable_ignoring_direction() {
        return Err(ValidationError::NotConnected);
    }
    if criteria.contains(Criteria::ACYCLIC) && has_directed_cycle(graph) {
        return Err(ValidationError::HasCycle);
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

struct CycleSearch<'a> {
    adj: &'a AdjacencyList,
    colors: FxHashMap<VertexId, Color>,
}

impl<'a> CycleSearch<'a> {
    fn color(&self, v: VertexId) -> Color {
        self.colors.get(&v).copied().unwrap_or(Color::White)
    }

    /// Returns true iff a gray-to-gray back edge is reachable from `vertex`.
    fn run(&mut self, vertex: VertexId) -> bool {
        self.colors.insert(vertex, Color::Gray);
        let adj = self.adj;
        for n in &adj[&vertex] {
            match self.color(n.to) {
                Color::Gray => return true,
                Color::White => {
                    if self.run(n.to) {
                        return true;
                    }
                }
                Color::Black => {}
            }
        }
        self.colors.insert(vertex, Color::Black);
        false
    }
}

/// Three-color DFS over the directed adjacency.
fn has_directed_cycle(graph: &Graph) -> bool {
    let adj = graph.adjacency_list();
    let mut search = CycleSearch {
        adj: &adj,
        colors: FxHashMap::default(),
    };
    for v in graph.vertex_ids() {
        if search.color(v) == Color::White && search.run(v) {
            return true;
        }
    }
    false
}

/// The single decision produced by a pre-call: exactly one of a rejection,
/// a pick-mode transition, or an immediate invocation.
#[derive(Debug)]
pub enum PreCallOutcome {
    /// A criterion failed; nothing ran. The error carries the user message.
    Rejected(ValidationError),
    /// The algorithm needs a vertex; the host enters pick mode and later
    /// calls the descriptor with the selection.
    AwaitingVertex,
    /// Same, for an edge.
    AwaitingEdge,
    /// Ran immediately (no selection required).
    Ran(AlgorithmOutput),
}

/// Validates and either runs the algorithm or defers for a selection.
pub fn pre_call(descriptor: &AlgorithmDescriptor, graph: &Graph) -> PreCallOutcome {
    if let Err(violation) = validate(descriptor.criteria, graph) {
        debug!(algorithm = descriptor.name, %violation, "pre-call rejected");
        return PreCallOutcome::Rejected(violation);
    }
    match descriptor.pre_call {
        PreCall::Nothing => PreCallOutcome::Ran((descriptor.call)(graph, None)),
        PreCall::SelectVertex => PreCallOutcome::AwaitingVertex,
        PreCall::SelectEdge => PreCallOutcome::AwaitingEdge,
    }
}

/// Invokes a descriptor once the deferred selection has arrived.
pub fn call_with_selection(
    descriptor: &AlgorithmDescriptor,
    graph: &Graph,
    selection: Selection,
) -> AlgorithmOutput {
    (descriptor.call)(graph, Some(&selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;

    fn two_vertices(oriented: bool) -> Graph {
        let mut g = Graph::new(oriented);
        g.add_vertex(0, 0.0, 0.0).unwrap();
        g.add_vertex(1, 0.0, 0.0).unwrap();
        g.add_edge(0, 1, None).unwrap();
        g
    }

    #[test]
    fn oriented_criterion_matches_global_flag() {
        assert_eq!(validate(Criteria::ORIENTED, &two_vertices(true)), Ok(()));
        assert_eq!(
            validate(Criteria::ORIENTED, &two_vertices(false)),
            Err(ValidationError::MustBeDirected)
        );
        assert_eq!(
            validate(Criteria::NOT_ORIENTED, &two_vertices(true)),
            Err(ValidationError::MustBeUndirected)
        );
    }

    #[test]
    fn weighted_criterion_needs_every_edge_weighted() {
        let mut g = two_vertices(false);
        assert_eq!(
            validate(Criteria::WEIGHTED, &g),
            Err(ValidationError::NotWeighted)
        );
        g.set_edge_weight(0, 1, Some(3)).unwrap();
        assert_eq!(validate(Criteria::WEIGHTED, &g), Ok(()));
    }

    #[test]
    fn connectivity_ignores_edge_direction() {
        // 0 -> 1 <- 2 is weakly connected
        let mut g = Graph::new(true);
        for id in 0..3 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        g.add_edge(0, 1, None).unwrap();
        g.add_edge(2, 1, None).unwrap();
        assert_eq!(validate(Criteria::CONNECTED, &g), Ok(()));

        g.add_vertex(9, 0.0, 0.0).unwrap();
        assert_eq!(
            validate(Criteria::CONNECTED, &g),
            Err(ValidationError::NotConnected)
        );
    }

    #[test]
    fn acyclic_criterion_finds_directed_cycles() {
        let mut g = Graph::new(true);
        for id in 0..3 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        g.add_edge(0, 1, None).unwrap();
        g.add_edge(1, 2, None).unwrap();
        assert_eq!(validate(Criteria::ACYCLIC, &g), Ok(()));

        g.add_edge(2, 0, None).unwrap();
        assert_eq!(
            validate(Criteria::ACYCLIC, &g),
            Err(ValidationError::HasCycle)
        );
    }

    #[test]
    fn diamond_without_cycle_passes_three_color_dfs() {
        // 0 -> 1 -> 3, 0 -> 2 -> 3: the shared sink must not read as a cycle
        let mut g = Graph::new(true);
        for id in 0..4 {
            g.add_vertex(id, 0.0, 0.0).unwrap();
        }
        for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            g.add_edge(a, b, None).unwrap();
        }
        assert_eq!(validate(Criteria::ACYCLIC, &g), Ok(()));
    }

    #[test]
    fn first_violation_wins_in_check_order() {
        // unweighted AND directed: the weighted check fires first
        let g = two_vertices(true);
        let criteria = Criteria::WEIGHTED | Criteria::NOT_ORIENTED;
        assert_eq!(validate(criteria, &g), Err(ValidationError::NotWeighted));
    }

    #[test]
    fn pre_call_produces_exactly_one_outcome() {
        let bfs = &registry()[0];
        let g = two_vertices(false);
        assert!(matches!(
            pre_call(bfs, &g),
            PreCallOutcome::AwaitingVertex
        ));

        let connectivity = registry()
            .iter()
            .find(|d| d.name == "Connectivity check")
            .unwrap();
        assert!(matches!(
            pre_call(connectivity, &g),
            PreCallOutcome::Ran(_)
        ));

        let directed = two_vertices(true);
        assert!(matches!(
            pre_call(connectivity, &directed),
            PreCallOutcome::Rejected(ValidationError::MustBeUndirected)
        ));
    }

    #[test]
    fn deferred_selection_invokes_the_algorithm() {
        let bfs = &registry()[0];
        let g = two_vertices(false);
        let out = call_with_selection(bfs, &g, Selection::Vertex(0));
        assert!(!out.trace.is_empty());
    }
}
