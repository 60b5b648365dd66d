//! Transposed view of a bidirectional graph.
//!
//! [`Transpose`] borrows a graph and answers every direction-sensitive
//! operation with its mirror: `edges` is the inner graph's `in_edges`,
//! `target_id` is `source_id`, `degree` is `in_degree`, and so on. Nothing is
//! copied and construction is O(1).
//!
//! Every operation the traversals use is a trait method, so the mirror is
//! total: whichever tier the inner graph answers `in_degree` from, the
//! transposed `degree` reaches the same answer. [`verify_bidirectional`]
//! checks the one thing the type system cannot, that the inner graph's out-
//! and in-edge sets describe the same edges.

use tracing::debug;

use crate::adj_list::{AdjacencyList, BidirectionalAdjacencyList, EdgeValues, GraphValue, VertexValues};
use crate::error::{GraphError, Result};

/// A graph with every edge reversed.
#[derive(Debug)]
pub struct Transpose<'a, G> {
    graph: &'a G,
}

impl<'a, G> Clone for Transpose<'a, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, G> Copy for Transpose<'a, G> {}

impl<'a, G: BidirectionalAdjacencyList> Transpose<'a, G> {
    /// Wraps `graph`.
    #[inline]
    pub const fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// The untransposed graph.
    #[inline]
    pub const fn inner(&self) -> &'a G {
        self.graph
    }
}

/// Reverses every edge of `g` without copying it.
#[inline]
pub const fn transpose<G: BidirectionalAdjacencyList>(g: &G) -> Transpose<'_, G> {
    Transpose::new(g)
}

impl<'a, G: BidirectionalAdjacencyList> AdjacencyList for Transpose<'a, G> {
    type VertexId = G::VertexId;
    type Vertex = G::Vertex;
    type Edge = G::InEdge;
    type Vertices<'g> = G::Vertices<'a> where Self: 'g;
    type Edges<'g> = G::InEdges<'a> where Self: 'g;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        self.graph.vertices()
    }

    #[inline]
    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_> {
        self.graph.in_edges(u)
    }

    #[inline]
    fn vertex_id(&self, u: Self::Vertex) -> Self::VertexId {
        self.graph.vertex_id(u)
    }

    #[inline]
    fn target_id(&self, e: Self::Edge) -> Self::VertexId {
        self.graph.source_id(e)
    }

    #[inline]
    fn find_vertex(&self, id: Self::VertexId) -> Option<Self::Vertex> {
        self.graph.find_vertex(id)
    }

    #[inline]
    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    #[inline]
    fn vertex_index(&self, u: Self::Vertex) -> usize {
        self.graph.vertex_index(u)
    }

    #[inline]
    fn index_bound(&self) -> usize {
        self.graph.index_bound()
    }

    #[inline]
    fn degree(&self, u: Self::Vertex) -> usize {
        self.graph.in_degree(u)
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    #[inline]
    fn has_edge(&self) -> bool {
        self.graph.has_edge()
    }

    #[inline]
    fn target(&self, e: Self::Edge) -> Option<Self::Vertex> {
        self.graph.source(e)
    }

    #[inline]
    fn find_vertex_edge(&self, u: Self::Vertex, v: Self::VertexId) -> Option<Self::Edge> {
        self.graph.find_in_edge(u, v)
    }

    #[inline]
    fn partition_id(&self, u: Self::Vertex) -> usize {
        self.graph.partition_id(u)
    }

    #[inline]
    fn num_partitions(&self) -> usize {
        self.graph.num_partitions()
    }
}

impl<'a, G: BidirectionalAdjacencyList> BidirectionalAdjacencyList for Transpose<'a, G> {
    type InEdge = G::Edge;
    type InEdges<'g> = G::Edges<'a> where Self: 'g;

    #[inline]
    fn in_edges(&self, u: Self::Vertex) -> Self::InEdges<'_> {
        self.graph.edges(u)
    }

    #[inline]
    fn source_id(&self, e: Self::InEdge) -> Self::VertexId {
        self.graph.target_id(e)
    }

    #[inline]
    fn in_degree(&self, u: Self::Vertex) -> usize {
        self.graph.degree(u)
    }

    #[inline]
    fn source(&self, e: Self::InEdge) -> Option<Self::Vertex> {
        self.graph.target(e)
    }

    #[inline]
    fn find_in_edge(&self, u: Self::Vertex, source: Self::VertexId) -> Option<Self::InEdge> {
        self.graph.find_vertex_edge(u, source)
    }
}

impl<'a, G> VertexValues for Transpose<'a, G>
where
    G: BidirectionalAdjacencyList + VertexValues,
{
    type Value = <G as VertexValues>::Value;

    #[inline]
    fn vertex_value(&self, u: Self::Vertex) -> &Self::Value {
        self.graph.vertex_value(u)
    }
}

impl<'a, G, E> EdgeValues<E> for Transpose<'a, G>
where
    G: BidirectionalAdjacencyList + EdgeValues<E>,
{
    type Value = <G as EdgeValues<E>>::Value;

    #[inline]
    fn edge_value(&self, e: E) -> &Self::Value {
        self.graph.edge_value(e)
    }
}

impl<'a, G: GraphValue> GraphValue for Transpose<'a, G> {
    type Value = G::Value;

    #[inline]
    fn graph_value(&self) -> &Self::Value {
        self.graph.graph_value()
    }
}

/// Checks that the out-edge and in-edge sets of `g` describe the same
/// multiset of `(source, target)` pairs, and that both agree on degrees.
///
/// # Errors
/// [`GraphError::Inconsistent`] describing the first disagreement found.
pub fn verify_bidirectional<G: BidirectionalAdjacencyList>(g: &G) -> Result<()> {
    let n = g.index_bound();
    let mut from_out: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut from_in: Vec<Vec<usize>> = vec![Vec::new(); n];

    let index_of = |id: G::VertexId| g.find_vertex(id).map(|v| g.vertex_index(v));

    for u in g.vertices() {
        let ui = g.vertex_index(u);
        if g.degree(u) != g.edges(u).count() || g.in_degree(u) != g.in_edges(u).count() {
            return Err(inconsistent(format!("degree of vertex index {ui} disagrees with its edge list")));
        }
        for e in g.edges(u) {
            let vi = index_of(g.target_id(e))
                .ok_or_else(|| inconsistent(format!("out-edge of vertex index {ui} targets a missing vertex")))?;
            from_out[vi].push(ui);
        }
        for e in g.in_edges(u) {
            let si = index_of(g.source_id(e))
                .ok_or_else(|| inconsistent(format!("in-edge of vertex index {ui} comes from a missing vertex")))?;
            from_in[ui].push(si);
        }
    }

    for (v, (out, inc)) in from_out.iter_mut().zip(from_in.iter_mut()).enumerate() {
        out.sort_unstable();
        inc.sort_unstable();
        if out != inc {
            return Err(inconsistent(format!(
                "vertex index {v}: out-edges name sources {out:?} but in-edges name {inc:?}"
            )));
        }
    }
    Ok(())
}

fn inconsistent(msg: String) -> GraphError {
    debug!(%msg, "bidirectional conformance check failed");
    GraphError::Inconsistent(msg)
}
