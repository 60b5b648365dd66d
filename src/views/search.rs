//! Shared pieces of the search views: cancellation and introspection.

use serde::{Deserialize, Serialize};

use crate::adj_list::{AdjacencyList, VertexIndex};
use crate::error::{GraphError, Result};

/// Cancellation signal a consumer hands back to a search between elements.
///
/// The signal is consumed by the next step: after a `CancelBranch` the search
/// resumes with `Continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CancelSearch {
    /// Keep going.
    #[default]
    Continue,
    /// Do not explore past the element just yielded; carry on with the rest.
    CancelBranch,
    /// Stop; the search yields nothing more.
    CancelAll,
}

/// Control surface shared by every search view.
///
/// Views are iterators, so the natural driving loop is
/// `while let Some(v) = search.next() { ...; search.cancel(..) }`.
pub trait Search {
    /// Sets the signal consumed by the next step.
    fn cancel(&mut self, signal: CancelSearch);

    /// The pending signal.
    fn cancel_state(&self) -> CancelSearch;

    /// Depth of the most recently yielded element (the seed is depth 0).
    fn depth(&self) -> usize;

    /// Number of vertices yielded so far.
    fn size(&self) -> usize;
}

/// An edge crossed by a search, oriented in the direction of travel.
///
/// With the reverse accessor `from` is the edge's target in the graph and
/// `to` its source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchEdge<V, E> {
    /// Vertex the search was expanding.
    pub from: V,
    /// The edge handle.
    pub edge: E,
    /// Vertex newly reached through `edge`.
    pub to: V,
}

/// One advance of a search state machine: the newly reached vertex, plus the
/// vertex and edge it was reached through (absent for the seed).
pub(crate) struct Step<V, E> {
    pub(crate) via: Option<(V, E)>,
    pub(crate) to: V,
}

/// Resolves a seed id, rejecting ids outside the graph.
pub(crate) fn resolve_seed<G: AdjacencyList>(g: &G, seed: G::VertexId) -> Result<G::Vertex> {
    g.find_vertex(seed)
        .filter(|&u| g.vertex_index(u) < g.index_bound())
        .ok_or(GraphError::VertexOutOfRange {
            index: seed.index(),
            num_vertices: g.num_vertices(),
        })
}

/// Resolves a seed id, panicking on a caller error.
#[track_caller]
pub(crate) fn expect_seed<G: AdjacencyList>(g: &G, seed: G::VertexId) -> G::Vertex {
    match resolve_seed(g, seed) {
        Ok(u) => u,
        Err(err) => panic!("invalid traversal seed: {err}"),
    }
}
