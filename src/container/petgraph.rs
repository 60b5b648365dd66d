//! Dispatch protocol for `petgraph::graph::DiGraph`.
//!
//! Vertex ids are the dense `usize` node indices; vertex and edge handles are
//! petgraph's own `NodeIndex` / `EdgeIndex`. Petgraph lists a node's edges
//! most recently added first, and traversals follow that order.

use petgraph::graph::{DiGraph, EdgeIndex, IndexType, NodeIndex, NodeIndices};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use crate::adj_list::{AdjacencyList, BidirectionalAdjacencyList, EdgeValues, VertexValues};

/// Edge ids of one node in one direction.
pub struct EdgeIds<'g, E, Ix: IndexType> {
    inner: petgraph::graph::Edges<'g, E, Directed, Ix>,
}

impl<'g, E, Ix: IndexType> Iterator for EdgeIds<'g, E, Ix> {
    type Item = EdgeIndex<Ix>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|er| er.id())
    }
}

impl<N, E, Ix: IndexType> AdjacencyList for DiGraph<N, E, Ix> {
    type VertexId = usize;
    type Vertex = NodeIndex<Ix>;
    type Edge = EdgeIndex<Ix>;
    type Vertices<'g> = NodeIndices<Ix> where Self: 'g;
    type Edges<'g> = EdgeIds<'g, E, Ix> where Self: 'g;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        self.node_indices()
    }

    #[inline]
    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_> {
        EdgeIds {
            inner: self.edges_directed(u, Direction::Outgoing),
        }
    }

    #[inline]
    fn vertex_id(&self, u: Self::Vertex) -> usize {
        u.index()
    }

    /// # Panics
    /// Panics if `e` is not an edge of this graph.
    #[inline]
    fn target_id(&self, e: Self::Edge) -> usize {
        self.raw_edges()[e.index()].target().index()
    }

    #[inline]
    fn find_vertex(&self, id: usize) -> Option<Self::Vertex> {
        (id < self.node_count()).then(|| NodeIndex::new(id))
    }

    #[inline]
    fn num_vertices(&self) -> usize {
        self.node_count()
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.edge_count()
    }

    #[inline]
    fn has_edge(&self) -> bool {
        self.edge_count() > 0
    }

    #[inline]
    fn find_vertex_edge(&self, u: Self::Vertex, v: usize) -> Option<Self::Edge> {
        let v = self.find_vertex(v)?;
        self.find_edge(u, v)
    }
}

impl<N, E, Ix: IndexType> BidirectionalAdjacencyList for DiGraph<N, E, Ix> {
    type InEdge = EdgeIndex<Ix>;
    type InEdges<'g> = EdgeIds<'g, E, Ix> where Self: 'g;

    #[inline]
    fn in_edges(&self, u: Self::Vertex) -> Self::InEdges<'_> {
        EdgeIds {
            inner: self.edges_directed(u, Direction::Incoming),
        }
    }

    /// # Panics
    /// Panics if `e` is not an edge of this graph.
    #[inline]
    fn source_id(&self, e: Self::InEdge) -> usize {
        self.raw_edges()[e.index()].source().index()
    }
}

impl<N, E, Ix: IndexType> VertexValues for DiGraph<N, E, Ix> {
    type Value = N;

    #[inline]
    fn vertex_value(&self, u: Self::Vertex) -> &N {
        &self[u]
    }
}

impl<N, E, Ix: IndexType> EdgeValues<EdgeIndex<Ix>> for DiGraph<N, E, Ix> {
    type Value = E;

    #[inline]
    fn edge_value(&self, e: EdgeIndex<Ix>) -> &E {
        &self[e]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{transpose, verify_bidirectional};

    #[test]
    fn petgraph_answers_the_protocol() {
        let mut g: DiGraph<&str, u8> = DiGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(a, b, 1);
        g.add_edge(b, c, 2);

        assert_eq!(AdjacencyList::num_vertices(&g), 3);
        // Graph's inherent `contains_edge` takes node indices.
        assert!(AdjacencyList::contains_edge(&g, 0, 1));
        assert!(!AdjacencyList::contains_edge(&g, 1, 0));
        assert_eq!(BidirectionalAdjacencyList::in_degree(&g, c), 1);
        assert_eq!(*g.vertex_value(b), "b");

        let e = g.find_vertex_edge(b, 2).unwrap();
        assert_eq!(*g.edge_value(e), 2);
        assert!(verify_bidirectional(&g).is_ok());

        let t = transpose(&g);
        assert!(t.contains_edge(2, 1));
    }
}
