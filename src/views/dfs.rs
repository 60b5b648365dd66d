//! Depth-first search views.
//!
//! The search keeps an explicit stack of `(vertex, edge iterator, depth)`
//! frames. Each step resumes the top frame's edge iterator until it finds an
//! unvisited neighbor, pushes a frame for it and yields it; exhausted frames
//! are popped. Neighbors are therefore explored in exactly the accessor's
//! edge order, and a vertex is never expanded before it is yielded.
//!
//! ```text
//! Ready --first next()--> Visiting(stack) --stack empty / CancelAll--> Done
//! ```
//!
//! **Time complexity**: \(O(n + m)\) over the reachable subgraph.
//! **Space complexity**: \(O(n)\) for the stack and the visited bitset.

use tracing::{debug, trace};

use crate::adj_list::{AdjacencyList, BidirectionalAdjacencyList};
use crate::config::SearchOptions;
use crate::error::Result;
use crate::views::accessor::{EdgeAccessor, InEdgeAccessor, OutEdgeAccessor};
use crate::views::search::{expect_seed, resolve_seed, CancelSearch, Search, SearchEdge, Step};
use crate::views::value::GraphView;
use crate::views::visited::VisitedTracker;

struct Frame<V, I> {
    vertex: V,
    edges: I,
    depth: usize,
}

pub(crate) struct DfsState<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> {
    graph: &'g G,
    accessor: A,
    options: SearchOptions,
    stack: Vec<Frame<G::Vertex, A::Edges<'g>>>,
    visited: VisitedTracker,
    seed: Option<G::Vertex>,
    cancel: CancelSearch,
    depth: usize,
    count: usize,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> DfsState<'g, G, A> {
    fn new(graph: &'g G, seed: G::Vertex, accessor: A, options: SearchOptions) -> Self {
        let mut visited = VisitedTracker::new(graph.index_bound());
        visited.mark_visited(graph.vertex_index(seed));
        debug!(?seed, tracked = visited.size(), ?options, "depth-first search created");

        Self {
            graph,
            accessor,
            options,
            stack: Vec::with_capacity(options.reserve),
            visited,
            seed: Some(seed),
            cancel: CancelSearch::Continue,
            depth: 0,
            count: 0,
        }
    }

    fn push(&mut self, vertex: G::Vertex, depth: usize) {
        let edges = self.accessor.edges(self.graph, vertex);
        self.stack.push(Frame { vertex, edges, depth });
        self.depth = depth;
        self.count += 1;
    }

    pub(crate) fn advance(&mut self) -> Option<Step<G::Vertex, A::Edge>> {
        match core::mem::take(&mut self.cancel) {
            CancelSearch::Continue => {}
            CancelSearch::CancelBranch => {
                // The frame of the vertex just yielded is on top.
                if let Some(frame) = self.stack.pop() {
                    trace!(vertex = ?frame.vertex, "dfs branch cancelled");
                }
            }
            CancelSearch::CancelAll => {
                trace!(yielded = self.count, "dfs cancelled");
                self.stack.clear();
                self.seed = None;
                return None;
            }
        }

        if let Some(seed) = self.seed.take() {
            self.push(seed, 0);
            return Some(Step { via: None, to: seed });
        }

        loop {
            let top = self.stack.last_mut()?;
            if !self.options.expands(top.depth) {
                self.stack.pop();
                continue;
            }

            let from = top.vertex;
            let depth = top.depth + 1;
            let mut found = None;
            for e in top.edges.by_ref() {
                let Some(v) = self.accessor.neighbor(self.graph, e) else {
                    continue;
                };
                if self.visited.try_visit(self.graph.vertex_index(v)) {
                    found = Some((e, v));
                    break;
                }
            }

            match found {
                Some((e, v)) => {
                    self.push(v, depth);
                    return Some(Step { via: Some((from, e)), to: v });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    pub(crate) fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Search for DfsState<'g, G, A> {
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

/// Vertices reachable from a seed, in depth-first order.
pub struct VerticesDfs<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G> = OutEdgeAccessor> {
    state: DfsState<'g, G, A>,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> VerticesDfs<'g, G, A> {
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
            state: DfsState::new(graph, seed, accessor, options),
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
            state: DfsState::new(graph, seed, accessor, options),
        })
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Iterator for VerticesDfs<'g, G, A> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.advance().map(|step| step.to)
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Search for VerticesDfs<'g, G, A> {
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

/// Edges crossed by a depth-first search, each paired with the vertex it
/// discovered. The seed itself is reached by no edge and is not yielded.
pub struct EdgesDfs<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G> = OutEdgeAccessor> {
    state: DfsState<'g, G, A>,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> EdgesDfs<'g, G, A> {
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
            state: DfsState::new(graph, seed, accessor, options),
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
            state: DfsState::new(graph, seed, accessor, options),
        })
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Iterator for EdgesDfs<'g, G, A> {
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

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Search for EdgesDfs<'g, G, A> {
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

impl<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> GraphView<'g> for VerticesDfs<'g, G, A> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

impl<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> GraphView<'g> for EdgesDfs<'g, G, A> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

/// Depth-first vertices from `seed` along outgoing edges.
///
/// # Panics
/// Panics if `seed` is not a vertex of `g`.
#[track_caller]
pub fn vertices_dfs<G: AdjacencyList>(g: &G, seed: G::VertexId) -> VerticesDfs<'_, G> {
    VerticesDfs::with_accessor(g, seed, OutEdgeAccessor)
}

/// Depth-first vertices from `seed` along incoming edges.
///
/// # Panics
/// Panics if `seed` is not a vertex of `g`.
#[track_caller]
pub fn reverse_vertices_dfs<G: BidirectionalAdjacencyList>(
    g: &G,
    seed: G::VertexId,
) -> VerticesDfs<'_, G, InEdgeAccessor> {
    VerticesDfs::with_accessor(g, seed, InEdgeAccessor)
}

/// Depth-first tree edges from `seed` along outgoing edges.
///
/// # Panics
/// Panics if `seed` is not a vertex of `g`.
#[track_caller]
pub fn edges_dfs<G: AdjacencyList>(g: &G, seed: G::VertexId) -> EdgesDfs<'_, G> {
    EdgesDfs::with_accessor(g, seed, OutEdgeAccessor)
}

/// Depth-first tree edges from `seed` along incoming edges.
///
/// # Panics
/// Panics if `seed` is not a vertex of `g`.
#[track_caller]
pub fn reverse_edges_dfs<G: BidirectionalAdjacencyList>(
    g: &G,
    seed: G::VertexId,
) -> EdgesDfs<'_, G, InEdgeAccessor> {
    EdgesDfs::with_accessor(g, seed, InEdgeAccessor)
}
