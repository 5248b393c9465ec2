/*!
# Vertex Representation

Vertices are identified by a small user-chosen integer, not by their position
in the vertex list: algorithms cross-reference vertices exclusively through
this id. We choose `VertexId = u32` and cap it at [`MAX_VERTEX_ID`], which is
plenty for hand-edited graphs and keeps ids directly usable as map keys.
*/

use std::fmt::{self, Display};

/// Identifier of a vertex, unique within one graph.
pub type VertexId = u32;

/// The largest id a vertex may carry.
pub const MAX_VERTEX_ID: VertexId = 999;

/// A vertex of the editable graph.
///
/// The position is presentation data carried for persistence; no algorithm
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(id: VertexId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
