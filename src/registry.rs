/*!
# Algorithm Descriptors

Static, shared, read-only descriptors for every algorithm the visualizer
offers: display name, the pre-call interaction it needs (nothing / pick a
vertex / pick an edge), the structural [`Criteria`] the graph must meet, and
the pure `call` function producing the trace. The host keeps a single
"currently selected" reference into [`registry()`] and swaps it on user
action.
*/

use std::ops::BitOr;

use crate::algo;
use crate::graph::Graph;
use crate::trace::Trace;
use crate::vertex::VertexId;

/// Structural preconditions an algorithm requires of the graph, as a
/// bitmask. Checked by [`validate`](crate::validate::validate) in a fixed
/// order before any call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Criteria(u8);

impl Criteria {
    pub const NONE: Criteria = Criteria(0);
    pub const WEIGHTED: Criteria = Criteria(1);
    pub const CONNECTED: Criteria = Criteria(1 << 1);
    pub const ORIENTED: Criteria = Criteria(1 << 2);
    pub const NOT_ORIENTED: Criteria = Criteria(1 << 3);
    pub const ACYCLIC: Criteria = Criteria(1 << 4);

    pub const fn union(self, other: Criteria) -> Criteria {
        Criteria(self.0 | other.0)
    }

    pub fn contains(self, other: Criteria) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Criteria {
    type Output = Criteria;

    fn bitor(self, rhs: Criteria) -> Criteria {
        self.union(rhs)
    }
}

/// The interaction an algorithm needs before it can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreCall {
    Nothing,
    SelectVertex,
    SelectEdge,
}

/// A user selection handed to algorithms whose descriptor asks for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Vertex(VertexId),
    Edge { from: VertexId, to: VertexId },
}

impl Selection {
    pub(crate) fn vertex(&self) -> Option<VertexId> {
        match self {
            Selection::Vertex(v) => Some(*v),
            Selection::Edge { .. } => None,
        }
    }
}

/// What one algorithm invocation returns: the replayable trace, the
/// statistics lines shown once playback finishes, and optional extra
/// presentation blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlgorithmOutput {
    pub trace: Trace,
    pub statistics: Vec<String>,
    pub info: Option<Vec<String>>,
}

impl AlgorithmOutput {
    /// Output of a call on a graph the algorithm has nothing to do with
    /// (e.g. no vertices).
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Signature shared by all algorithm entry points.
pub type AlgorithmFn = fn(&Graph, Option<&Selection>) -> AlgorithmOutput;

/// One entry of the algorithm menu.
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    pub pre_call: PreCall,
    pub criteria: Criteria,
    pub call: AlgorithmFn,
}

/// All algorithms in menu order.
pub fn registry() -> &'static [AlgorithmDescriptor] {
    &REGISTRY
}

static REGISTRY: [AlgorithmDescriptor; 15] = [
    AlgorithmDescriptor {
        name: "Breadth-first search",
        pre_call: PreCall::SelectVertex,
        criteria: Criteria::NONE,
        call: algo::breadth_first_search,
    },
    AlgorithmDescriptor {
        name: "Depth-first search",
        pre_call: PreCall::SelectVertex,
        criteria: Criteria::NONE,
        call: algo::depth_first_search,
    },
    AlgorithmDescriptor {
        name: "Dijkstra's shortest paths",
        pre_call: PreCall::SelectVertex,
        criteria: Criteria::WEIGHTED,
        call: algo::dijkstra,
    },
    AlgorithmDescriptor {
        name: "Prim's minimum spanning tree",
        pre_call: PreCall::Nothing,
        criteria: Criteria::CONNECTED
            .union(Criteria::WEIGHTED)
            .union(Criteria::NOT_ORIENTED),
        call: algo::prim_mst,
    },
    AlgorithmDescriptor {
        name: "Kruskal's minimum spanning tree",
        pre_call: PreCall::Nothing,
        criteria: Criteria::CONNECTED
            .union(Criteria::WEIGHTED)
            .union(Criteria::NOT_ORIENTED),
        call: algo::kruskal_mst,
    },
    AlgorithmDescriptor {
        name: "Bipartiteness check",
        pre_call: PreCall::Nothing,
        criteria: Criteria::CONNECTED.union(Criteria::NOT_ORIENTED),
        call: algo::check_bipartite,
    },
    AlgorithmDescriptor {
        name: "Connectivity check",
        pre_call: PreCall::Nothing,
        criteria: Criteria::NOT_ORIENTED,
        call: algo::check_connected,
    },
    AlgorithmDescriptor {
        name: "Diameter and peripheral vertices",
        pre_call: PreCall::Nothing,
        criteria: Criteria::NOT_ORIENTED.union(Criteria::CONNECTED),
        call: algo::find_diameter,
    },
    AlgorithmDescriptor {
        name: "Radius and central vertices",
        pre_call: PreCall::Nothing,
        criteria: Criteria::NOT_ORIENTED.union(Criteria::CONNECTED),
        call: algo::find_radius,
    },
    AlgorithmDescriptor {
        name: "Topological sort",
        pre_call: PreCall::Nothing,
        criteria: Criteria::ORIENTED.union(Criteria::ACYCLIC),
        call: algo::topological_sort,
    },
    AlgorithmDescriptor {
        name: "Find bridges",
        pre_call: PreCall::Nothing,
        criteria: Criteria::NOT_ORIENTED,
        call: algo::find_bridges,
    },
    AlgorithmDescriptor {
        name: "Find cut vertices",
        pre_call: PreCall::Nothing,
        criteria: Criteria::NOT_ORIENTED,
        call: algo::find_cut_vertices,
    },
    AlgorithmDescriptor {
        name: "Strongly connected components (Kosaraju)",
        pre_call: PreCall::Nothing,
        criteria: Criteria::ORIENTED,
        call: algo::kosaraju_scc,
    },
    AlgorithmDescriptor {
        name: "Euler path",
        pre_call: PreCall::Nothing,
        criteria: Criteria::NONE,
        call: algo::find_euler_path,
    },
    AlgorithmDescriptor {
        name: "Euler cycle",
        pre_call: PreCall::Nothing,
        criteria: Criteria::NONE,
        call: algo::find_euler_cycle,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_bitmask_combines() {
        let c = Criteria::WEIGHTED | Criteria::CONNECTED;
        assert!(c.contains(Criteria::WEIGHTED));
        assert!(c.contains(Criteria::CONNECTED));
        assert!(!c.contains(Criteria::ORIENTED));
        assert!(c.contains(Criteria::NONE));
    }

    #[test]
    fn registry_is_complete() {
        assert_eq!(registry().len(), 15);
        let selecting = registry()
            .iter()
            .filter(|d| d.pre_call == PreCall::SelectVertex)
            .count();
        assert_eq!(selecting, 3);
    }
}
