/*!
# Graph Model & Adjacency Converters

The [`Graph`] is the single mutable structure of the crate: a vertex list, an
edge list and a global orientation flag. Mutations fail fast on invariant
violations (duplicate ids, multi-edges, dangling endpoints, out-of-range
values) so that algorithms never have to re-check them.

For the duration of one algorithm call the graph acts as an immutable
snapshot; algorithms derive the adjacency structures they need on demand via
[`Graph::adjacency_list`], [`Graph::reversed_adjacency_list`] and
[`Graph::adjacency_matrix`] and must clone whatever they intend to consume
(see the Euler walk).
*/

use fxhash::{FxHashMap, FxHashSet};

use crate::edge::{Edge, Weight, MAX_WEIGHT};
use crate::error::GraphError;
use crate::vertex::{Vertex, VertexId, MAX_VERTEX_ID};

/// One adjacency-list entry: the neighboring vertex and the weight of the
/// edge leading there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub to: VertexId,
    pub weight: Option<Weight>,
}

/// Adjacency view of a graph, keyed by vertex id. Every vertex of the graph
/// has an entry; neighbors are ordered ascending by id.
pub type AdjacencyList = FxHashMap<VertexId, Vec<Neighbor>>;

/// The editable graph: vertices, edges and a global orientation flag that
/// applies to every edge at once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    oriented: bool,
}

impl Graph {
    pub fn new(oriented: bool) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            oriented,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn oriented(&self) -> bool {
        self.oriented
    }

    /// Iterates vertex ids in insertion order. Algorithms rely on this order
    /// for deterministic tie-breaking.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.iter().any(|v| v.id == id)
    }

    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(from, to))
    }

    /// Returns true if every edge carries a weight.
    pub fn is_weighted(&self) -> bool {
        self.edges.iter().all(|e| e.weight.is_some())
    }

    pub fn add_vertex(&mut self, id: VertexId, x: f64, y: f64) -> Result<(), GraphError> {
        if id > MAX_VERTEX_ID {
            return Err(GraphError::IdOutOfRange(id));
        }
        if self.has_vertex(id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.vertices.push(Vertex::new(id, x, y));
        Ok(())
    }

    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: Option<Weight>,
    ) -> Result<(), GraphError> {
        if !self.has_vertex(from) {
            return Err(GraphError::UnknownVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(GraphError::UnknownVertex(to));
        }
        if let Some(w) = weight {
            if w > MAX_WEIGHT {
                return Err(GraphError::WeightOutOfRange(w));
            }
        }
        if self.find_edge(from, to).is_some() {
            return Err(GraphError::DuplicateEdge(from, to));
        }
        self.edges.push(Edge::new(from, to, weight, self.oriented));
        Ok(())
    }

    /// Removes a vertex together with all incident edges.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
        if !self.has_vertex(id) {
            return Err(GraphError::UnknownVertex(id));
        }
        self.vertices.retain(|v| v.id != id);
        self.edges.retain(|e| e.from != id && e.to != id);
        Ok(())
    }

    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<(), GraphError> {
        // connects() honors orientation, so removing (to, from) on a
        // directed graph leaves (from, to) alone
        let pos = self
            .edges
            .iter()
            .position(|e| e.connects(from, to))
            .ok_or(GraphError::UnknownEdge(from, to))?;
        self.edges.remove(pos);
        Ok(())
    }

    pub fn set_edge_weight(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: Option<Weight>,
    ) -> Result<(), GraphError> {
        if let Some(w) = weight {
            if w > MAX_WEIGHT {
                return Err(GraphError::WeightOutOfRange(w));
            }
        }
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.connects(from, to))
            .ok_or(GraphError::UnknownEdge(from, to))?;
        edge.weight = weight;
        Ok(())
    }

    /// Flips the global orientation flag and restamps every edge.
    pub fn invert_orientation(&mut self) {
        self.oriented = !self.oriented;
        for edge in &mut self.edges {
            edge.oriented = self.oriented;
        }
    }

    /// Builds the adjacency list: a directed edge contributes one entry, an
    /// undirected edge two, an undirected self-loop only one. Neighbors are
    /// sorted ascending by id.
    pub fn adjacency_list(&self) -> AdjacencyList {
        let mut adj: AdjacencyList = FxHashMap::default();
        for v in &self.vertices {
            adj.insert(v.id, Vec::new());
        }
        for e in &self.edges {
            if let Some(list) = adj.get_mut(&e.from) {
                list.push(Neighbor {
                    to: e.to,
                    weight: e.weight,
                });
            }
            if !e.oriented && !e.is_loop() {
                if let Some(list) = adj.get_mut(&e.to) {
                    list.push(Neighbor {
                        to: e.from,
                        weight: e.weight,
                    });
                }
            }
        }
        for list in adj.values_mut() {
            list.sort_by_key(|n| n.to);
        }
        adj
    }

    /// Builds the reversed adjacency list (in-edges). For an undirected
    /// graph this coincides with [`Graph::adjacency_list`].
    pub fn reversed_adjacency_list(&self) -> AdjacencyList {
        let mut adj: AdjacencyList = FxHashMap::default();
        for v in &self.vertices {
            adj.insert(v.id, Vec::new());
        }
        for e in &self.edges {
            if let Some(list) = adj.get_mut(&e.to) {
                list.push(Neighbor {
                    to: e.from,
                    weight: e.weight,
                });
            }
            if !e.oriented && !e.is_loop() {
                if let Some(list) = adj.get_mut(&e.from) {
                    list.push(Neighbor {
                        to: e.to,
                        weight: e.weight,
                    });
                }
            }
        }
        for list in adj.values_mut() {
            list.sort_by_key(|n| n.to);
        }
        adj
    }

    /// Builds the adjacency matrix in vertex-list order; `cell[i][j]` holds
    /// the weight of the edge from the i-th to the j-th vertex (`Some(0)`
    /// only for explicitly zero-weighted edges — unweighted adjacency is
    /// encoded by the host, this matrix only reports stored weights).
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<Weight>>> {
        let n = self.vertices.len();
        let index: FxHashMap<VertexId, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id, i))
            .collect();
        let mut matrix = vec![vec![None; n]; n];
        for e in &self.edges {
            let (i, j) = (index[&e.from], index[&e.to]);
            matrix[i][j] = Some(e.weight.unwrap_or(0));
            if !e.oriented {
                matrix[j][i] = Some(e.weight.unwrap_or(0));
            }
        }
        matrix
    }

    /// Reachability over the undirected view of the graph, used by the
    /// connectivity criterion: edge direction is ignored.
    pub fn all_reachable_ignoring_direction(&self) -> bool {
        let Some(start) = self.vertices.first().map(|v| v.id) else {
            return true;
        };
        let mut merged: FxHashMap<VertexId, Vec<VertexId>> = FxHashMap::default();
        for v in &self.vertices {
            merged.insert(v.id, Vec::new());
        }
        for e in &self.edges {
            if let Some(list) = merged.get_mut(&e.from) {
                list.push(e.to);
            }
            if !e.is_loop() {
                if let Some(list) = merged.get_mut(&e.to) {
                    list.push(e.from);
                }
            }
        }

        let mut seen: FxHashSet<VertexId> = FxHashSet::default();
        let mut stack = vec![start];
        seen.insert(start);
        while let Some(v) = stack.pop() {
            for &to in &merged[&v] {
                if seen.insert(to) {
                    stack.push(to);
                }
            }
        }
        seen.len() == self.vertices.len()
    }
}
