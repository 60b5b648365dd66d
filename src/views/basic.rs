//! Non-searching views: every vertex, the edges of one vertex, the
//! neighbors of one vertex, and every edge.
//!
//! These are thin wrappers over the dispatch operations that pair each
//! handle with the id a caller usually wants next. The per-vertex views are
//! written against [`EdgeAccessor`], so `in_incidence` and `in_neighbors` are
//! the same code reading incoming edges.

use crate::adj_list::{AdjacencyList, BidirectionalAdjacencyList};
use crate::views::accessor::{EdgeAccessor, InEdgeAccessor, OutEdgeAccessor};
use crate::views::value::GraphView;

/// Every vertex of a graph as `(id, vertex)`.
pub struct VertexList<'g, G: AdjacencyList + 'g> {
    graph: &'g G,
    inner: G::Vertices<'g>,
}

impl<'g, G: AdjacencyList> VertexList<'g, G> {
    /// Lists the vertices of `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            inner: graph.vertices(),
        }
    }

    /// The graph being listed.
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList> Iterator for VertexList<'g, G> {
    type Item = (G::VertexId, G::Vertex);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.inner.next()?;
        Some((self.graph.vertex_id(u), u))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// The edges of one vertex as `(neighbor id, edge)`.
pub struct Incidence<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G> = OutEdgeAccessor> {
    graph: &'g G,
    accessor: A,
    inner: A::Edges<'g>,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Incidence<'g, G, A> {
    /// Lists the edges `accessor` follows out of `u`.
    pub fn with_accessor(graph: &'g G, u: G::Vertex, accessor: A) -> Self {
        Self {
            graph,
            accessor,
            inner: accessor.edges(graph, u),
        }
    }

    /// The graph being listed.
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Iterator for Incidence<'g, G, A> {
    type Item = (G::VertexId, A::Edge);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.inner.next()?;
        Some((self.accessor.neighbor_id(self.graph, e), e))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// The neighbors of one vertex as `(id, vertex)`, one per edge. Edges whose
/// far end does not resolve to a vertex are skipped.
pub struct Neighbors<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G> = OutEdgeAccessor> {
    graph: &'g G,
    accessor: A,
    inner: A::Edges<'g>,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Neighbors<'g, G, A> {
    /// Lists the vertices `accessor` reaches from `u` in one step.
    pub fn with_accessor(graph: &'g G, u: G::Vertex, accessor: A) -> Self {
        Self {
            graph,
            accessor,
            inner: accessor.edges(graph, u),
        }
    }

    /// The graph being listed.
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Iterator for Neighbors<'g, G, A> {
    type Item = (G::VertexId, G::Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        let (graph, accessor) = (self.graph, self.accessor);
        self.inner.by_ref().find_map(|e| {
            let v = accessor.neighbor(graph, e)?;
            Some((graph.vertex_id(v), v))
        })
    }
}

/// Every edge of a graph as `(source id, target id, edge)`, grouped by
/// source in `vertices()` order.
pub struct EdgeList<'g, G: AdjacencyList + 'g> {
    graph: &'g G,
    vertices: G::Vertices<'g>,
    current: Option<(G::VertexId, G::Edges<'g>)>,
}

impl<'g, G: AdjacencyList> EdgeList<'g, G> {
    /// Lists the edges of `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            vertices: graph.vertices(),
            current: None,
        }
    }

    /// The graph being listed.
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList> Iterator for EdgeList<'g, G> {
    type Item = (G::VertexId, G::VertexId, G::Edge);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((uid, edges)) = self.current.as_mut() {
                if let Some(e) = edges.next() {
                    return Some((*uid, self.graph.target_id(e), e));
                }
            }
            let u = self.vertices.next()?;
            self.current = Some((self.graph.vertex_id(u), self.graph.edges(u)));
        }
    }
}

impl<'g, G: AdjacencyList + 'g> GraphView<'g> for VertexList<'g, G> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> GraphView<'g> for Incidence<'g, G, A> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> GraphView<'g> for Neighbors<'g, G, A> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList + 'g> GraphView<'g> for EdgeList<'g, G> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.graph
    }
}

/// Every vertex of `g`.
pub fn vertexlist<G: AdjacencyList>(g: &G) -> VertexList<'_, G> {
    VertexList::new(g)
}

/// Outgoing edges of `u`.
pub fn incidence<G: AdjacencyList>(g: &G, u: G::Vertex) -> Incidence<'_, G> {
    Incidence::with_accessor(g, u, OutEdgeAccessor)
}

/// Incoming edges of `u`, each paired with its source id.
pub fn in_incidence<G: BidirectionalAdjacencyList>(g: &G, u: G::Vertex) -> Incidence<'_, G, InEdgeAccessor> {
    Incidence::with_accessor(g, u, InEdgeAccessor)
}

/// Targets of `u`'s outgoing edges.
pub fn neighbors<G: AdjacencyList>(g: &G, u: G::Vertex) -> Neighbors<'_, G> {
    Neighbors::with_accessor(g, u, OutEdgeAccessor)
}

/// Sources of `u`'s incoming edges.
pub fn in_neighbors<G: BidirectionalAdjacencyList>(g: &G, u: G::Vertex) -> Neighbors<'_, G, InEdgeAccessor> {
    Neighbors::with_accessor(g, u, InEdgeAccessor)
}

/// Every edge of `g`.
pub fn edgelist<G: AdjacencyList>(g: &G) -> EdgeList<'_, G> {
    EdgeList::new(g)
}
