//! JSON import/export of graphs.
//!
//! Import re-runs the full graph-model validation: a document with
//! dangling edge endpoints, duplicate ids or out-of-range values is
//! rejected as a whole and leaves no partial graph behind.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::edge::Weight;
use crate::error::ImportError;
use crate::graph::Graph;
use crate::vertex::VertexId;

#[derive(Serialize, Deserialize)]
struct GraphDoc {
    oriented: bool,
    vertices: Vec<VertexDoc>,
    edges: Vec<EdgeDoc>,
}

#[derive(Serialize, Deserialize)]
struct VertexDoc {
    id: VertexId,
    x: f64,
    y: f64,
}

#[derive(Serialize, Deserialize)]
struct EdgeDoc {
    from: VertexId,
    to: VertexId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<Weight>,
}

/// Serializes a graph to its persisted JSON form.
pub fn to_json(graph: &Graph) -> String {
    let doc = GraphDoc {
        oriented: graph.oriented(),
        vertices: graph
            .vertices()
            .iter()
            .map(|v| VertexDoc {
                id: v.id,
                x: v.x,
                y: v.y,
            })
            .collect(),
        edges: graph
            .edges()
            .iter()
            .map(|e| EdgeDoc {
                from: e.from,
                to: e.to,
                weight: e.weight,
            })
            .collect(),
    };
    // the document is a plain data tree, serialization cannot fail
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

/// Parses and validates a persisted graph document.
pub fn from_json(text: &str) -> Result<Graph, ImportError> {
    let doc: GraphDoc = serde_json::from_str(text)?;

    let mut graph = Graph::new(doc.oriented);
    for v in &doc.vertices {
        graph.add_vertex(v.id, v.x, v.y).inspect_err(|err| {
            debug!(%err, "rejecting graph document");
        })?;
    }
    for e in &doc.edges {
        graph.add_edge(e.from, e.to, e.weight).inspect_err(|err| {
            debug!(%err, "rejecting graph document");
        })?;
    }
    Ok(graph)
}
