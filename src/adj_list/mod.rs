//! The operation dispatch protocol.
//!
//! Traversals never name a storage type. They call operations on the traits
//! in this module, and each graph type answers them in one of three ways,
//! tried in order:
//!
//! 1. **Native**: the impl overrides the trait method (`degree` on a CSR
//!    graph is an offset subtraction).
//! 2. **Derived**: the provided method builds the answer from other
//!    operations (`degree` counts `edges(u)`, `contains_edge` scans for a
//!    matching `target_id`).
//! 3. **Structural default**: the provided method returns a fixed answer
//!    (`partition_id` is `0`, `num_partitions` is `1`).
//!
//! The precedence is ordinary method resolution, fixed per graph type at
//! compile time. A graph that cannot answer a required operation does not
//! implement the trait, so a traversal over it is rejected by the compiler
//! rather than at run time. Only [`AdjacencyList`]'s five required methods
//! and the two required methods of [`BidirectionalAdjacencyList`] have no
//! fallback.
//!
//! | Operation | Tier 2 / 3 fallback |
//! |-----------|---------------------|
//! | `num_vertices` | count of `vertices()` |
//! | `vertex_index` | `vertex_id(u).index()` |
//! | `degree` / `in_degree` | count of `edges(u)` / `in_edges(u)` |
//! | `num_edges` | sum of degrees |
//! | `target` / `source` | `find_vertex` of the endpoint id |
//! | `find_vertex_edge` | linear scan of `edges(u)` |
//! | `contains_edge` | `find_edge(..).is_some()` |
//! | `partition_id` | `0` |
//! | `num_partitions` | `1` |
//! | `vertices_in(pid)` | `vertices()` filtered by `partition_id` |

pub mod descriptor;
pub mod index;

use core::fmt::Debug;

pub use descriptor::{EdgeDescriptor, EdgeDescriptors, VertexDescriptor, VertexDescriptors};
pub use index::VertexIndex;

/// A graph whose vertices can be enumerated and whose outgoing edges can be
/// walked.
pub trait AdjacencyList {
    /// Application-level vertex id.
    type VertexId: VertexIndex;
    /// Copyable handle to a vertex.
    type Vertex: Copy + Debug;
    /// Copyable handle to an outgoing edge.
    type Edge: Copy + Debug;
    /// Lazy sequence of all vertices.
    type Vertices<'g>: Iterator<Item = Self::Vertex>
    where
        Self: 'g;
    /// Lazy sequence of a vertex's outgoing edges.
    type Edges<'g>: Iterator<Item = Self::Edge>
    where
        Self: 'g;

    /// Returns a fresh sequence over every vertex.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns a fresh sequence over the outgoing edges of `u`.
    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_>;

    /// Returns the id of `u`.
    fn vertex_id(&self, u: Self::Vertex) -> Self::VertexId;

    /// Returns the id of the vertex `e` points at.
    fn target_id(&self, e: Self::Edge) -> Self::VertexId;

    /// Looks up a vertex by id. A nonexistent id yields `None`.
    fn find_vertex(&self, id: Self::VertexId) -> Option<Self::Vertex>;

    /// Number of vertices.
    fn num_vertices(&self) -> usize {
        self.vertices().count()
    }

    /// Dense `0..index_bound()` index of `u`, used for visited tracking.
    ///
    /// Override together with [`index_bound`](Self::index_bound) when ids are
    /// sparse.
    #[inline]
    fn vertex_index(&self, u: Self::Vertex) -> usize {
        self.vertex_id(u).index()
    }

    /// Exclusive upper bound of [`vertex_index`](Self::vertex_index).
    fn index_bound(&self) -> usize {
        self.num_vertices()
    }

    /// Outgoing edges of the vertex with id `id`, or `None` if it does not exist.
    fn edges_of(&self, id: Self::VertexId) -> Option<Self::Edges<'_>> {
        self.find_vertex(id).map(|u| self.edges(u))
    }

    /// Number of outgoing edges of `u`.
    fn degree(&self, u: Self::Vertex) -> usize {
        self.edges(u).count()
    }

    /// Total number of edges.
    fn num_edges(&self) -> usize {
        self.vertices().map(|u| self.degree(u)).sum()
    }

    /// Returns `true` if the graph has at least one edge.
    fn has_edge(&self) -> bool {
        self.vertices().any(|u| self.edges(u).next().is_some())
    }

    /// The vertex `e` points at.
    fn target(&self, e: Self::Edge) -> Option<Self::Vertex> {
        self.find_vertex(self.target_id(e))
    }

    /// First outgoing edge of `u` that points at `v`.
    fn find_vertex_edge(&self, u: Self::Vertex, v: Self::VertexId) -> Option<Self::Edge> {
        self.edges(u).find(|&e| self.target_id(e) == v)
    }

    /// First edge `uid -> vid`, or `None` if either vertex or the edge is missing.
    fn find_edge(&self, uid: Self::VertexId, vid: Self::VertexId) -> Option<Self::Edge> {
        self.find_vertex(uid)
            .and_then(|u| self.find_vertex_edge(u, vid))
    }

    /// Returns `true` if an edge `uid -> vid` exists.
    fn contains_edge(&self, uid: Self::VertexId, vid: Self::VertexId) -> bool {
        self.find_edge(uid, vid).is_some()
    }

    /// Partition that `u` belongs to.
    #[inline]
    fn partition_id(&self, _u: Self::Vertex) -> usize {
        0
    }

    /// Number of partitions.
    #[inline]
    fn num_partitions(&self) -> usize {
        1
    }

    /// Vertices belonging to partition `pid`. Empty for a partition that does
    /// not exist.
    fn vertices_in(&self, pid: usize) -> PartitionVertices<'_, Self>
    where
        Self: Sized,
    {
        PartitionVertices::new(self, pid)
    }

    /// Number of vertices in partition `pid`.
    fn num_vertices_in(&self, pid: usize) -> usize
    where
        Self: Sized,
    {
        match self.num_partitions() {
            1 if pid == 0 => self.num_vertices(),
            1 => 0,
            _ => self.vertices_in(pid).count(),
        }
    }
}

/// A graph that can also walk each vertex's incoming edges.
pub trait BidirectionalAdjacencyList: AdjacencyList {
    /// Copyable handle to an incoming edge.
    type InEdge: Copy + Debug;
    /// Lazy sequence of a vertex's incoming edges.
    type InEdges<'g>: Iterator<Item = Self::InEdge>
    where
        Self: 'g;

    /// Returns a fresh sequence over the incoming edges of `u`.
    fn in_edges(&self, u: Self::Vertex) -> Self::InEdges<'_>;

    /// Returns the id of the vertex `e` comes from.
    fn source_id(&self, e: Self::InEdge) -> Self::VertexId;

    /// Number of incoming edges of `u`.
    fn in_degree(&self, u: Self::Vertex) -> usize {
        self.in_edges(u).count()
    }

    /// The vertex `e` comes from.
    fn source(&self, e: Self::InEdge) -> Option<Self::Vertex> {
        self.find_vertex(self.source_id(e))
    }

    /// First incoming edge of `u` that comes from `source`.
    fn find_in_edge(&self, u: Self::Vertex, source: Self::VertexId) -> Option<Self::InEdge> {
        self.in_edges(u).find(|&e| self.source_id(e) == source)
    }

    /// Returns `true` if `vid` has an incoming edge from `uid`.
    fn contains_in_edge(&self, vid: Self::VertexId, uid: Self::VertexId) -> bool {
        self.find_vertex(vid)
            .and_then(|v| self.find_in_edge(v, uid))
            .is_some()
    }
}

/// Graphs carrying a payload per vertex.
pub trait VertexValues: AdjacencyList {
    /// Payload type.
    type Value: ?Sized;

    /// Payload of `u`.
    fn vertex_value(&self, u: Self::Vertex) -> &Self::Value;
}

/// Graphs carrying a payload per edge.
///
/// Generic over the edge handle so that bidirectional graphs can answer for
/// incoming handles too, which is what lets a transposed graph keep its
/// edge values.
pub trait EdgeValues<E>: AdjacencyList {
    /// Payload type.
    type Value: ?Sized;

    /// Payload of `e`.
    fn edge_value(&self, e: E) -> &Self::Value;
}

/// Graphs carrying a single graph-wide payload.
pub trait GraphValue {
    /// Payload type.
    type Value: ?Sized;

    /// The graph payload.
    fn graph_value(&self) -> &Self::Value;
}

/// Vertices of one partition, see [`AdjacencyList::vertices_in`].
pub struct PartitionVertices<'g, G: AdjacencyList + 'g> {
    graph: &'g G,
    inner: Option<G::Vertices<'g>>,
    pid: usize,
}

impl<'g, G: AdjacencyList> PartitionVertices<'g, G> {
    pub(crate) fn new(graph: &'g G, pid: usize) -> Self {
        let inner = (pid < graph.num_partitions()).then(|| graph.vertices());
        Self { graph, inner, pid }
    }
}

impl<'g, G: AdjacencyList> Iterator for PartitionVertices<'g, G> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        let graph = self.graph;
        let pid = self.pid;
        inner.find(|&u| graph.partition_id(u) == pid)
    }
}
