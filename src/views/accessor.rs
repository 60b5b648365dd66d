//! Edge accessor policies.
//!
//! A policy is a zero-sized strategy that tells a view which edge set counts
//! as "outgoing" and which endpoint of such an edge is the neighbor:
//!
//! | Accessor | `edges` | `neighbor_id` |
//! |----------|---------|---------------|
//! | [`OutEdgeAccessor`] | `edges(g, u)` | `target_id(g, e)` |
//! | [`InEdgeAccessor`] | `in_edges(g, u)` | `source_id(g, e)` |
//!
//! Every search and basic view is written once against [`EdgeAccessor`];
//! picking `InEdgeAccessor` runs the same code against incoming edges. The
//! reverse policy is only implemented for [`BidirectionalAdjacencyList`]
//! graphs, so asking for it on a forward-only graph does not compile.

use core::fmt::Debug;

use crate::adj_list::{AdjacencyList, BidirectionalAdjacencyList};

/// Direction policy used by the views.
pub trait EdgeAccessor<G: AdjacencyList>: Copy + Default + Debug {
    /// Edge handle produced by [`edges`](Self::edges).
    type Edge: Copy + Debug;
    /// Edge sequence produced by [`edges`](Self::edges).
    type Edges<'g>: Iterator<Item = Self::Edge>
    where
        G: 'g;

    /// The edges a traversal follows out of `u`.
    fn edges<'g>(&self, g: &'g G, u: G::Vertex) -> Self::Edges<'g>;

    /// The id at the far end of `e`.
    fn neighbor_id(&self, g: &G, e: Self::Edge) -> G::VertexId;

    /// Number of edges a traversal follows out of `u`.
    fn degree(&self, g: &G, u: G::Vertex) -> usize;

    /// The vertex at the far end of `e`.
    #[inline]
    fn neighbor(&self, g: &G, e: Self::Edge) -> Option<G::Vertex> {
        g.find_vertex(self.neighbor_id(g, e))
    }
}

/// Follows outgoing edges to their targets. The default for every view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutEdgeAccessor;

/// Follows incoming edges back to their sources.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InEdgeAccessor;

impl<G: AdjacencyList> EdgeAccessor<G> for OutEdgeAccessor {
    type Edge = G::Edge;
    type Edges<'g> = G::Edges<'g> where G: 'g;

    #[inline]
    fn edges<'g>(&self, g: &'g G, u: G::Vertex) -> Self::Edges<'g> {
        g.edges(u)
    }

    #[inline]
    fn neighbor_id(&self, g: &G, e: Self::Edge) -> G::VertexId {
        g.target_id(e)
    }

    #[inline]
    fn degree(&self, g: &G, u: G::Vertex) -> usize {
        g.degree(u)
    }

    #[inline]
    fn neighbor(&self, g: &G, e: Self::Edge) -> Option<G::Vertex> {
        g.target(e)
    }
}

impl<G: BidirectionalAdjacencyList> EdgeAccessor<G> for InEdgeAccessor {
    type Edge = G::InEdge;
    type Edges<'g> = G::InEdges<'g> where G: 'g;

    #[inline]
    fn edges<'g>(&self, g: &'g G, u: G::Vertex) -> Self::Edges<'g> {
        g.in_edges(u)
    }

    #[inline]
    fn neighbor_id(&self, g: &G, e: Self::Edge) -> G::VertexId {
        g.source_id(e)
    }

    #[inline]
    fn degree(&self, g: &G, u: G::Vertex) -> usize {
        g.in_degree(u)
    }

    #[inline]
    fn neighbor(&self, g: &G, e: Self::Edge) -> Option<G::Vertex> {
        g.source(e)
    }
}
