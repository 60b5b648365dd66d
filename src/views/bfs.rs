//! Breadth-first search views.
//!
//! FIFO-backed with the same contract as the depth-first views: vertices come
//! out in non-decreasing distance from the seed, ties broken by the
//! accessor's edge order. A yielded vertex is expanded lazily, on the
//! following step, which is what lets `CancelBranch` drop exactly the
//! neighbors it would have enqueued.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::adj_list::{AdjacencyList, BidirectionalAdjacencyList};
use crate::config::SearchOptions;
use crate::error::Result;
use crate::views::accessor::{EdgeAccessor, InEdgeAccessor, OutEdgeAccessor};
use crate::views::search::{expect_seed, resolve_seed, CancelSearch, Search, SearchEdge, Step};
use crate::views::value::GraphView;
use crate::views::visited::VisitedTracker;

struct Entry<V, E> {
    vertex: V,
    depth: usize,
    via: Option<(V, E)>,
}

pub(crate) struct BfsState<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> {
    graph: &'g G,
    accessor: A,
    options: SearchOptions,
    queue: VecDeque<Entry<G::Vertex, A::Edge>>,
    visited: VisitedTracker,
    /// Last yielded vertex, not yet expanded.
    pending: Option<(G::Vertex, usize)>,
    cancel: CancelSearch,
    depth: usize,
    count: usize,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> BfsState<'g, G, A> {
    fn new(graph: &'g G, seed: G::Vertex, accessor: A, options: SearchOptions) -> Self {
        let mut visited = VisitedTracker::new(graph.index_bound());
        visited.mark_visited(graph.vertex_index(seed));
        debug!(?seed, tracked = visited.size(), ?options, "breadth-first search created");

        let mut queue = VecDeque::with_capacity(options.reserve.max(1));
        queue.push_back(Entry {
            vertex: seed,
            depth: 0,
            via: None,
        });

        Self {
            graph,
            accessor,
            options,
            queue,
            visited,
            pending: None,
            cancel: CancelSearch::Continue,
            depth: 0,
            count: 0,
        }
    }

    fn expand(&mut self, u: G::Vertex, depth: usize) {
        if !self.options.expands(depth) {
            return;
        }
        for e in self.accessor.edges(self.graph, u) {
            let Some(v) = self.accessor.neighbor(self.graph, e) else {
                continue;
            };
            if self.visited.try_visit(self.graph.vertex_index(v)) {
                self.queue.push_back(Entry {
                    vertex: v,
                    depth: depth + 1,
                    via: Some((u, e)),
                });
            }
        }
    }

    pub(crate) fn advance(&mut self) -> Option<Step<G::Vertex, A::Edge>> {
        let pending = self.pending.take();
        match core::mem::take(&mut self.cancel) {
            CancelSearch::Continue => {
                if let Some((u, depth)) = pending {
                    self.expand(u, depth);
                }
            }
            CancelSearch::CancelBranch => {
                trace!(vertex = ?pending.map(|(u, _)| u), "bfs branch cancelled");
            }
            CancelSearch::CancelAll => {
                trace!(yielded = self.count, "bfs cancelled");
                self.queue.clear();
                return None;
            }
        }

        let entry = self.queue.pop_front()?;
        self.pending = Some((entry.vertex, entry.depth));
        self.depth = entry.depth;
        self.count += 1;
        Some(Step {
            via: entry.via,
            to: entry.vertex,
        })
    }

    pub(crate) fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Search for BfsState<'g, G, A> {
    fn cancel(&mut self, signal: CancelSearch) {
        self.cancel = signal;
    }

    fn cancel_state(&self) -> CancelSearch {
        self.cancel
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn size(&self) -> usize {
        self.count
    }
}

/// Vertices reachable from a seed, in breadth-first order.
pub struct VerticesBfs<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G> = OutEdgeAccessor> {
    state: BfsState<'g, G, A>,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> VerticesBfs<'g, G, A> {
    /// Starts a search at `seed` following `accessor`'s edges.
    ///
    /// # Panics
    /// Panics if `seed` is not a vertex of `graph`.
    #[track_caller]
    pub fn with_accessor(graph: &'g G, seed: G::VertexId, accessor: A) -> Self {
        Self::with_options(graph, seed, accessor, SearchOptions::default())
    }

    /// Starts a configured search at `seed`.
    ///
    /// # Panics
    /// Panics if `seed` is not a vertex of `graph`.
    #[track_caller]
    pub fn with_options(graph: &'g G, seed: G::VertexId, accessor: A, options: SearchOptions) -> Self {
        let seed = expect_seed(graph, seed);
        Self {
            state: BfsState::new(graph, seed, accessor, options),
        }
    }

    /// Like [`with_options`](Self::with_options) but reports a bad seed.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
    /// if `seed` is not a vertex of `graph`.
    pub fn try_with_options(graph: &'g G, seed: G::VertexId, accessor: A, options: SearchOptions) -> Result<Self> {
        let seed = resolve_seed(graph, seed)?;
        Ok(Self {
            state: BfsState::new(graph, seed, accessor, options),
        })
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Iterator for VerticesBfs<'g, G, A> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.advance().map(|step| step.to)
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Search for VerticesBfs<'g, G, A> {
    fn cancel(&mut self, signal: CancelSearch) {
        self.state.cancel(signal);
    }

    fn cancel_state(&self) -> CancelSearch {
        self.state.cancel_state()
    }

    fn depth(&self) -> usize {
        self.state.depth()
    }

    fn size(&self) -> usize {
        self.state.size()
    }
}

/// Edges crossed by a breadth-first search, each paired with the vertex it
/// discovered. The seed is not yielded.
pub struct EdgesBfs<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G> = OutEdgeAccessor> {
    state: BfsState<'g, G, A>,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> EdgesBfs<'g, G, A> {
    /// Starts a search at `seed` following `accessor`'s edges.
    ///
    /// # Panics
    /// Panics if `seed` is not a vertex of `graph`.
    #[track_caller]
    pub fn with_accessor(graph: &'g G, seed: G::VertexId, accessor: A) -> Self {
        Self::with_options(graph, seed, accessor, SearchOptions::default())
    }

    /// Starts a configured search at `seed`.
    ///
    /// # Panics
    /// Panics if `seed` is not a vertex of `graph`.
    #[track_caller]
    pub fn with_options(graph: &'g G, seed: G::VertexId, accessor: A, options: SearchOptions) -> Self {
        let seed = expect_seed(graph, seed);
        Self {
            state: BfsState::new(graph, seed, accessor, options),
        }
    }

    /// Like [`with_options`](Self::with_options) but reports a bad seed.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
    /// if `seed` is not a vertex of `graph`.
    pub fn try_with_options(graph: &'g G, seed: G::VertexId, accessor: A, options: SearchOptions) -> Result<Self> {
        let seed = resolve_seed(graph, seed)?;
        Ok(Self {
            state: BfsState::new(graph, seed, accessor, options),
        })
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Iterator for EdgesBfs<'g, G, A> {
    type Item = SearchEdge<G::Vertex, A::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = self.state.advance()?;
            if let Some((from, edge)) = step.via {
                return Some(SearchEdge { from, edge, to: step.to });
            }
        }
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Search for EdgesBfs<'g, G, A> {
    fn cancel(&mut self, signal: CancelSearch) {
        self.state.cancel(signal);
    }

    fn cancel_state(&self) -> CancelSearch {
        self.state.cancel_state()
    }

    fn depth(&self) -> usize {
        self.state.depth()
    }

    fn size(&self) -> usize {
        self.state.size()
    }
}

impl<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> GraphView<'g> for VerticesBfs<'g, G, A> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

impl<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> GraphView<'g> for EdgesBfs<'g, G, A> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

/// Breadth-first vertices from `seed` along outgoing edges.
///
/// # Panics
/// Panics if `seed` is not a vertex of `g`.
#[track_caller]
pub fn vertices_bfs<G: AdjacencyList>(g: &G, seed: G::VertexId) -> VerticesBfs<'_, G> {
    VerticesBfs::with_accessor(g, seed, OutEdgeAccessor)
}

/// Breadth-first vertices from `seed` along incoming edges.
///
/// # Panics
/// Panics if `seed` is not a vertex of `g`.
#[track_caller]
pub fn reverse_vertices_bfs<G: BidirectionalAdjacencyList>(
    g: &G,
    seed: G::VertexId,
) -> VerticesBfs<'_, G, InEdgeAccessor> {
    VerticesBfs::with_accessor(g, seed, InEdgeAccessor)
}

/// Breadth-first tree edges from `seed` along outgoing edges.
///
/// # Panics
/// Panics if `seed` is not a vertex of `g`.
#[track_caller]
pub fn edges_bfs<G: AdjacencyList>(g: &G, seed: G::VertexId) -> EdgesBfs<'_, G> {
    EdgesBfs::with_accessor(g, seed, OutEdgeAccessor)
}

/// Breadth-first tree edges from `seed` along incoming edges.
///
/// # Panics
/// Panics if `seed` is not a vertex of `g`.
#[track_caller]
pub fn reverse_edges_bfs<G: BidirectionalAdjacencyList>(
    g: &G,
    seed: G::VertexId,
) -> EdgesBfs<'_, G, InEdgeAccessor> {
    EdgesBfs::with_accessor(g, seed, InEdgeAccessor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_in_order() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![2], vec![]];
        let mut bfs = vertices_bfs(&g, 0);
        let mut seen = Vec::new();
        while let Some(v) = bfs.next() {
            seen.push((v.id(), bfs.depth()));
        }
        assert_eq!(seen, vec![(0, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn cancel_branch_drops_only_current_children() {
        // 0 -> 1, 2 ; 1 -> 3 ; 2 -> 4
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![4], vec![], vec![]];
        let mut bfs = vertices_bfs(&g, 0);
        let mut seen = Vec::new();
        while let Some(v) = bfs.next() {
            seen.push(v.id());
            if v.id() == 1 {
                bfs.cancel(CancelSearch::CancelBranch);
            }
        }
        assert_eq!(seen, vec![0, 1, 2, 4]);
    }

    #[test]
    fn cancel_all_after_seed() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![], vec![]];
        let mut bfs = vertices_bfs(&g, 0);
        assert!(bfs.next().is_some());
        bfs.cancel(CancelSearch::CancelAll);
        assert!(bfs.next().is_none());
        assert_eq!(bfs.size(), 1);
    }

    #[test]
    fn edges_carry_their_discovering_parent() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![3], vec![]];
        let tree: Vec<(usize, usize)> = edges_bfs(&g, 0).map(|se| (se.from.id(), se.to.id())).collect();
        assert_eq!(tree, vec![(0, 1), (0, 2), (1, 3)]);
    }

    #[test]
    fn max_depth_zero_yields_seed_only() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![]];
        let bfs = VerticesBfs::with_options(&g, 0, OutEdgeAccessor, SearchOptions::new().with_max_depth(0));
        assert_eq!(bfs.count(), 1);
    }
}
