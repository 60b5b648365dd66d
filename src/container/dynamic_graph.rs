//! A growable, bidirectional adjacency list with vertex, edge and graph
//! values.
//!
//! Edges live in one table; each vertex keeps the slots of its outgoing and
//! incoming edges in insertion order. An edge descriptor's `owner` is the
//! vertex whose list it came from and its `position` is the table slot, so
//! outgoing and incoming handles to the same edge share a value.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | amortized \(O(1)\) | |
//! | `add_edge` | amortized \(O(1)\) | |
//! | `degree` / `in_degree` | \(O(1)\) | native |
//! | `num_edges` | \(O(1)\) | native |
//! | `find_vertex_edge` | \(O(\text{out-degree})\) | derived scan |

use tracing::trace;

use super::SlotEdges;
use crate::adj_list::{
    AdjacencyList, BidirectionalAdjacencyList, EdgeDescriptor, EdgeValues, GraphValue, VertexDescriptor,
    VertexDescriptors, VertexValues,
};
use crate::error::{GraphError, Result};

#[derive(Clone, Debug)]
struct VertexEntry<VV> {
    value: VV,
    partition: usize,
    out: Vec<usize>,
    inc: Vec<usize>,
}

#[derive(Clone, Debug)]
struct EdgeEntry<EV> {
    source: usize,
    target: usize,
    value: EV,
}

/// A growable directed graph with `usize` vertex ids.
#[derive(Clone, Debug)]
pub struct DynamicGraph<VV = (), EV = (), GV = ()> {
    vertices: Vec<VertexEntry<VV>>,
    edges: Vec<EdgeEntry<EV>>,
    partitions: usize,
    value: GV,
}

impl<VV, EV, GV: Default> DynamicGraph<VV, EV, GV> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_graph_value(GV::default())
    }
}

impl<VV, EV, GV: Default> Default for DynamicGraph<VV, EV, GV> {
    fn default() -> Self {
        Self::new()
    }
}

impl<VV, EV, GV> DynamicGraph<VV, EV, GV> {
    /// Creates an empty graph carrying `value`.
    pub fn with_graph_value(value: GV) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            partitions: 1,
            value,
        }
    }

    /// Appends a vertex and returns its id.
    pub fn add_vertex(&mut self, value: VV) -> usize {
        self.vertices.push(VertexEntry {
            value,
            partition: 0,
            out: Vec::new(),
            inc: Vec::new(),
        });
        self.vertices.len() - 1
    }

    /// Appends the edge `source -> target` and returns its outgoing handle.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if either endpoint does not exist.
    pub fn add_edge(&mut self, source: usize, target: usize, value: EV) -> Result<EdgeDescriptor<usize>> {
        let n = self.vertices.len();
        for id in [source, target] {
            if id >= n {
                return Err(GraphError::VertexOutOfRange {
                    index: id,
                    num_vertices: n,
                });
            }
        }
        let slot = self.edges.len();
        self.edges.push(EdgeEntry { source, target, value });
        self.vertices[source].out.push(slot);
        self.vertices[target].inc.push(slot);
        trace!(source, target, slot, "edge added");
        Ok(EdgeDescriptor::new(source, slot))
    }

    /// Moves vertex `id` into partition `pid`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `id` does not exist.
    pub fn assign_partition(&mut self, id: usize, pid: usize) -> Result<()> {
        let num_vertices = self.vertices.len();
        let entry = self
            .vertices
            .get_mut(id)
            .ok_or(GraphError::VertexOutOfRange { index: id, num_vertices })?;
        entry.partition = pid;
        self.partitions = self.partitions.max(pid + 1);
        Ok(())
    }

    /// Mutable payload of vertex `id`.
    pub fn vertex_value_mut(&mut self, id: usize) -> Option<&mut VV> {
        self.vertices.get_mut(id).map(|v| &mut v.value)
    }

    /// Mutable payload of the edge behind `e`.
    pub fn edge_value_mut(&mut self, e: EdgeDescriptor<usize>) -> Option<&mut EV> {
        self.edges.get_mut(e.position()).map(|e| &mut e.value)
    }

    /// Mutable graph payload.
    pub fn graph_value_mut(&mut self) -> &mut GV {
        &mut self.value
    }
}

impl<VV: Default, EV, GV: Default> DynamicGraph<VV, EV, GV> {
    /// Builds a graph of `num_vertices` default-valued vertices from
    /// `(source, target, value)` triples.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if an endpoint is `>= num_vertices`.
    pub fn from_edges<T>(num_vertices: usize, edges: T) -> Result<Self>
    where
        T: IntoIterator<Item = (usize, usize, EV)>,
    {
        let mut g = Self::new();
        for _ in 0..num_vertices {
            g.add_vertex(VV::default());
        }
        for (source, target, value) in edges {
            g.add_edge(source, target, value)?;
        }
        Ok(g)
    }
}

impl<VV, EV, GV> DynamicGraph<VV, EV, GV> {
    fn slot_edges<'g>(&'g self, owner: usize, pick: impl FnOnce(&'g VertexEntry<VV>) -> &'g [usize]) -> SlotEdges<'g> {
        SlotEdges::new(owner, self.vertices.get(owner).map_or(&[][..], pick))
    }
}

impl<VV, EV, GV> AdjacencyList for DynamicGraph<VV, EV, GV> {
    type VertexId = usize;
    type Vertex = VertexDescriptor<usize>;
    type Edge = EdgeDescriptor<usize>;
    type Vertices<'g> = VertexDescriptors<usize> where Self: 'g;
    type Edges<'g> = SlotEdges<'g> where Self: 'g;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        VertexDescriptors::new(self.vertices.len())
    }

    #[inline]
    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_> {
        self.slot_edges(u.id(), |v| v.out.as_slice())
    }

    #[inline]
    fn vertex_id(&self, u: Self::Vertex) -> usize {
        u.id()
    }

    #[inline]
    fn target_id(&self, e: Self::Edge) -> usize {
        self.edges[e.position()].target
    }

    #[inline]
    fn find_vertex(&self, id: usize) -> Option<Self::Vertex> {
        (id < self.vertices.len()).then_some(VertexDescriptor::new(id))
    }

    #[inline]
    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn degree(&self, u: Self::Vertex) -> usize {
        self.vertices.get(u.id()).map_or(0, |v| v.out.len())
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn has_edge(&self) -> bool {
        !self.edges.is_empty()
    }

    #[inline]
    fn partition_id(&self, u: Self::Vertex) -> usize {
        self.vertices.get(u.id()).map_or(0, |v| v.partition)
    }

    #[inline]
    fn num_partitions(&self) -> usize {
        self.partitions
    }
}

impl<VV, EV, GV> BidirectionalAdjacencyList for DynamicGraph<VV, EV, GV> {
    type InEdge = EdgeDescriptor<usize>;
    type InEdges<'g> = SlotEdges<'g> where Self: 'g;

    #[inline]
    fn in_edges(&self, u: Self::Vertex) -> Self::InEdges<'_> {
        self.slot_edges(u.id(), |v| v.inc.as_slice())
    }

    #[inline]
    fn source_id(&self, e: Self::InEdge) -> usize {
        self.edges[e.position()].source
    }

    #[inline]
    fn in_degree(&self, u: Self::Vertex) -> usize {
        self.vertices.get(u.id()).map_or(0, |v| v.inc.len())
    }
}

impl<VV, EV, GV> VertexValues for DynamicGraph<VV, EV, GV> {
    type Value = VV;

    #[inline]
    fn vertex_value(&self, u: Self::Vertex) -> &VV {
        &self.vertices[u.id()].value
    }
}

impl<VV, EV, GV> EdgeValues<EdgeDescriptor<usize>> for DynamicGraph<VV, EV, GV> {
    type Value = EV;

    #[inline]
    fn edge_value(&self, e: EdgeDescriptor<usize>) -> &EV {
        &self.edges[e.position()].value
    }
}

impl<VV, EV, GV> GraphValue for DynamicGraph<VV, EV, GV> {
    type Value = GV;

    #[inline]
    fn graph_value(&self) -> &GV {
        &self.value
    }
}
