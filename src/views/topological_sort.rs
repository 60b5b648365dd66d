//! Topological sort views (Kahn's algorithm).
//!
//! Construction counts, for every vertex in scope, how many in-scope edges
//! point at it, and seeds a FIFO ready queue with the zero-count vertices in
//! `vertices()` order. Each step dequeues one vertex, yields it, and releases
//! its neighbors; a neighbor whose count reaches zero joins the queue. The
//! scope is the whole graph, or the vertices reachable from a seed set.
//!
//! A cycle never panics. The queue simply runs dry while in-scope vertices
//! still wait on a predecessor, and [`status`](VerticesTopologicalSort::status)
//! reports [`TopoStatus::CycleDetected`]. The `try_*` factories detect that
//! up front and return [`GraphError::CycleDetected`] instead.
//!
//! Ordering is flat, so there is no subtree to skip: `CancelBranch` stops
//! the sort exactly like `CancelAll`.
//!
//! **Time complexity**: \(O(n + m)\).
//! **Space complexity**: \(O(n)\).

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::adj_list::{AdjacencyList, BidirectionalAdjacencyList};
use crate::config::SearchOptions;
use crate::error::{GraphError, Result};
use crate::views::accessor::{EdgeAccessor, InEdgeAccessor, OutEdgeAccessor};
use crate::views::search::{resolve_seed, CancelSearch, Search, SearchEdge};
use crate::views::value::GraphView;
use crate::views::visited::VisitedTracker;

/// Progress of a topological sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopoStatus {
    /// Vertices remain in the ready queue.
    Sorting,
    /// Every in-scope vertex was yielded.
    Finished,
    /// The queue ran dry with in-scope vertices still waiting on a
    /// predecessor: at least one cycle is present.
    CycleDetected,
    /// `max_depth` withheld the release of some vertices; whether the rest
    /// is cyclic is unknown.
    Truncated,
    /// The consumer cancelled the sort.
    Cancelled,
}

pub(crate) struct TopoState<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> {
    graph: &'g G,
    accessor: A,
    options: SearchOptions,
    in_scope: VisitedTracker,
    in_degree: Vec<usize>,
    level: Vec<usize>,
    ready: VecDeque<G::Vertex>,
    /// Last yielded vertex, released on the following step.
    pending: Option<G::Vertex>,
    scope: usize,
    truncated: bool,
    status: TopoStatus,
    cancel: CancelSearch,
    depth: usize,
    count: usize,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> TopoState<'g, G, A> {
    fn new(graph: &'g G, roots: Option<Vec<G::Vertex>>, accessor: A, options: SearchOptions) -> Self {
        let n = graph.index_bound();
        let mut in_scope = VisitedTracker::new(n);

        let scope = match roots {
            None => {
                let mut count = 0;
                for u in graph.vertices() {
                    if in_scope.try_visit(graph.vertex_index(u)) {
                        count += 1;
                    }
                }
                count
            }
            Some(roots) => {
                let mut stack = Vec::with_capacity(options.reserve.max(roots.len()));
                for r in roots {
                    if in_scope.try_visit(graph.vertex_index(r)) {
                        stack.push(r);
                    }
                }
                let mut count = stack.len();
                while let Some(u) = stack.pop() {
                    for e in accessor.edges(graph, u) {
                        let Some(v) = accessor.neighbor(graph, e) else {
                            continue;
                        };
                        if in_scope.try_visit(graph.vertex_index(v)) {
                            count += 1;
                            stack.push(v);
                        }
                    }
                }
                count
            }
        };

        let mut in_degree = vec![0usize; n];
        for u in graph.vertices() {
            if !in_scope.is_visited(graph.vertex_index(u)) {
                continue;
            }
            for e in accessor.edges(graph, u) {
                if let Some(v) = accessor.neighbor(graph, e) {
                    in_degree[graph.vertex_index(v)] += 1;
                }
            }
        }

        // Sources in vertices() order for determinism.
        let mut ready = VecDeque::with_capacity(options.reserve);
        for u in graph.vertices() {
            let i = graph.vertex_index(u);
            if in_scope.is_visited(i) && in_degree[i] == 0 {
                ready.push_back(u);
            }
        }

        debug!(scope, sources = ready.len(), ?options, "topological sort created");

        Self {
            graph,
            accessor,
            options,
            in_scope,
            in_degree,
            level: vec![0; n],
            ready,
            pending: None,
            scope,
            truncated: false,
            status: TopoStatus::Sorting,
            cancel: CancelSearch::Continue,
            depth: 0,
            count: 0,
        }
    }

    fn release(&mut self, u: G::Vertex) {
        let ui = self.graph.vertex_index(u);
        let next_level = self.level[ui] + 1;
        if !self.options.expands(self.level[ui]) {
            self.truncated |= self.accessor.edges(self.graph, u).next().is_some();
            return;
        }
        for e in self.accessor.edges(self.graph, u) {
            let Some(v) = self.accessor.neighbor(self.graph, e) else {
                continue;
            };
            let vi = self.graph.vertex_index(v);
            self.level[vi] = self.level[vi].max(next_level);
            self.in_degree[vi] -= 1;
            if self.in_degree[vi] == 0 {
                self.ready.push_back(v);
            }
        }
    }

    fn finish(&mut self) {
        self.status = if self.count == self.scope {
            TopoStatus::Finished
        } else if self.truncated {
            TopoStatus::Truncated
        } else {
            debug!(
                yielded = self.count,
                remaining = self.scope - self.count,
                "topological sort stopped on a cycle"
            );
            TopoStatus::CycleDetected
        };
    }

    pub(crate) fn advance(&mut self) -> Option<G::Vertex> {
        if self.status != TopoStatus::Sorting {
            return None;
        }
        match core::mem::take(&mut self.cancel) {
            CancelSearch::Continue => {
                if let Some(u) = self.pending.take() {
                    self.release(u);
                }
            }
            CancelSearch::CancelBranch | CancelSearch::CancelAll => {
                trace!(yielded = self.count, "topological sort cancelled");
                self.pending = None;
                self.ready.clear();
                self.status = TopoStatus::Cancelled;
                return None;
            }
        }

        let Some(u) = self.ready.pop_front() else {
            self.finish();
            return None;
        };
        self.pending = Some(u);
        self.depth = self.level[self.graph.vertex_index(u)];
        self.count += 1;
        Some(u)
    }

    /// Runs Kahn's algorithm on copies of the tables and reports the first
    /// in-scope vertex, by dense index, that could not be ordered.
    fn find_cycle(&self) -> Option<GraphError> {
        let mut in_degree = self.in_degree.clone();
        let mut ready = self.ready.clone();
        let mut ordered = 0usize;
        while let Some(u) = ready.pop_front() {
            ordered += 1;
            for e in self.accessor.edges(self.graph, u) {
                let Some(v) = self.accessor.neighbor(self.graph, e) else {
                    continue;
                };
                let vi = self.graph.vertex_index(v);
                in_degree[vi] -= 1;
                if in_degree[vi] == 0 {
                    ready.push_back(v);
                }
            }
        }
        if ordered == self.scope {
            return None;
        }
        let vertex = (0..in_degree.len()).find(|&i| self.in_scope.is_visited(i) && in_degree[i] > 0)?;
        debug!(vertex, remaining = self.scope - ordered, "cycle rejected by topological sort factory");
        Some(GraphError::CycleDetected {
            vertex,
            remaining: self.scope - ordered,
        })
    }

    pub(crate) fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Search for TopoState<'g, G, A> {
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

fn resolve_roots<G: AdjacencyList, S>(graph: &G, seeds: S) -> Result<Vec<G::Vertex>>
where
    S: IntoIterator<Item = G::VertexId>,
{
    seeds.into_iter().map(|id| resolve_seed(graph, id)).collect()
}

macro_rules! topo_view_common {
    ($view:ident) => {
        impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> $view<'g, G, A> {
            /// Sorts every vertex of `graph` along `accessor`'s edges.
            pub fn with_accessor(graph: &'g G, accessor: A) -> Self {
                Self::with_options(graph, accessor, SearchOptions::default())
            }

            /// Sorts every vertex of `graph` with explicit options.
            ///
            /// `max_depth` bounds the dependency level whose successors are
            /// released; see [`TopoStatus::Truncated`].
            pub fn with_options(graph: &'g G, accessor: A, options: SearchOptions) -> Self {
                Self::from_state(TopoState::new(graph, None, accessor, options))
            }

            /// Sorts the vertices reachable from `seeds`.
            ///
            /// # Panics
            /// Panics if a seed is not a vertex of `graph`.
            #[track_caller]
            pub fn from_seeds<S>(graph: &'g G, seeds: S, accessor: A) -> Self
            where
                S: IntoIterator<Item = G::VertexId>,
            {
                match Self::try_from_seeds(graph, seeds, accessor) {
                    Ok(view) => view,
                    Err(err) => panic!("invalid traversal seed: {err}"),
                }
            }

            /// Like [`from_seeds`](Self::from_seeds) but reports a bad seed.
            ///
            /// # Errors
            /// [`GraphError::VertexOutOfRange`] if a seed is not a vertex of
            /// `graph`.
            pub fn try_from_seeds<S>(graph: &'g G, seeds: S, accessor: A) -> Result<Self>
            where
                S: IntoIterator<Item = G::VertexId>,
            {
                let roots = resolve_roots(graph, seeds)?;
                Ok(Self::from_state(TopoState::new(
                    graph,
                    Some(roots),
                    accessor,
                    SearchOptions::default(),
                )))
            }

            /// Sorts every vertex of `graph`, rejecting cyclic graphs before
            /// the first element is produced.
            ///
            /// # Errors
            /// [`GraphError::CycleDetected`] naming the lowest dense index that
            /// lies on, or downstream of, a cycle.
            pub fn try_with_accessor(graph: &'g G, accessor: A) -> Result<Self> {
                let state = TopoState::new(graph, None, accessor, SearchOptions::default());
                match state.find_cycle() {
                    Some(err) => Err(err),
                    None => Ok(Self::from_state(state)),
                }
            }

            /// Progress of the sort. Only settles once the view is exhausted.
            pub fn status(&self) -> TopoStatus {
                self.state.status
            }

            /// Returns `true` once the sort has stopped on a cycle.
            pub fn has_cycle(&self) -> bool {
                self.state.status == TopoStatus::CycleDetected
            }

            /// Number of vertices in scope: the whole graph, or everything
            /// reachable from the seeds.
            pub fn scope(&self) -> usize {
                self.state.scope
            }

            /// The graph being sorted.
            pub fn graph(&self) -> &'g G {
                self.state.graph()
            }
        }

        impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Search for $view<'g, G, A> {
            fn cancel(&mut self, signal: CancelSearch) {
                self.state.cancel(signal);
            }

            fn cancel_state(&self) -> CancelSearch {
                self.state.cancel_state()
            }

            /// Longest-path level of the last yielded vertex: sources are 0.
            fn depth(&self) -> usize {
                self.state.depth()
            }

            fn size(&self) -> usize {
                self.state.size()
            }
        }
    };
}

/// Vertices in topological order: every vertex after all of its in-scope
/// predecessors.
pub struct VerticesTopologicalSort<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G> = OutEdgeAccessor> {
    state: TopoState<'g, G, A>,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> VerticesTopologicalSort<'g, G, A> {
    fn from_state(state: TopoState<'g, G, A>) -> Self {
        Self { state }
    }
}

topo_view_common!(VerticesTopologicalSort);

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Iterator for VerticesTopologicalSort<'g, G, A> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.advance()
    }
}

/// The edges leaving each vertex, with vertices taken in topological order.
pub struct EdgesTopologicalSort<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G> = OutEdgeAccessor> {
    state: TopoState<'g, G, A>,
    current: Option<(G::Vertex, A::Edges<'g>)>,
}

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> EdgesTopologicalSort<'g, G, A> {
    fn from_state(state: TopoState<'g, G, A>) -> Self {
        Self { state, current: None }
    }
}

topo_view_common!(EdgesTopologicalSort);

impl<'g, G: AdjacencyList, A: EdgeAccessor<G>> Iterator for EdgesTopologicalSort<'g, G, A> {
    type Item = SearchEdge<G::Vertex, A::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.state.graph;
        let accessor = self.state.accessor;
        loop {
            if self.state.cancel != CancelSearch::Continue {
                self.current = None;
            }
            if let Some((from, edges)) = self.current.as_mut() {
                for edge in edges.by_ref() {
                    if let Some(to) = accessor.neighbor(graph, edge) {
                        return Some(SearchEdge { from: *from, edge, to });
                    }
                }
            }
            let u = self.state.advance()?;
            self.current = Some((u, accessor.edges(graph, u)));
        }
    }
}

impl<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> GraphView<'g> for VerticesTopologicalSort<'g, G, A> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

impl<'g, G: AdjacencyList + 'g, A: EdgeAccessor<G>> GraphView<'g> for EdgesTopologicalSort<'g, G, A> {
    type Graph = G;

    fn graph(&self) -> &'g G {
        self.state.graph()
    }
}

/// Every vertex of `g` in topological order.
pub fn vertices_topological_sort<G: AdjacencyList>(g: &G) -> VerticesTopologicalSort<'_, G> {
    VerticesTopologicalSort::with_accessor(g, OutEdgeAccessor)
}

/// Every vertex of `g`, each after all of its successors.
pub fn reverse_vertices_topological_sort<G: BidirectionalAdjacencyList>(
    g: &G,
) -> VerticesTopologicalSort<'_, G, InEdgeAccessor> {
    VerticesTopologicalSort::with_accessor(g, InEdgeAccessor)
}

/// Vertices reachable from `seeds`, in topological order.
///
/// # Panics
/// Panics if a seed is not a vertex of `g`.
#[track_caller]
pub fn vertices_topological_sort_from<G, S>(g: &G, seeds: S) -> VerticesTopologicalSort<'_, G>
where
    G: AdjacencyList,
    S: IntoIterator<Item = G::VertexId>,
{
    VerticesTopologicalSort::from_seeds(g, seeds, OutEdgeAccessor)
}

/// Out-edges of every vertex of `g`, vertices taken in topological order.
pub fn edges_topological_sort<G: AdjacencyList>(g: &G) -> EdgesTopologicalSort<'_, G> {
    EdgesTopologicalSort::with_accessor(g, OutEdgeAccessor)
}

/// Out-edges of the vertices reachable from `seeds`, in topological order.
///
/// # Panics
/// Panics if a seed is not a vertex of `g`.
#[track_caller]
pub fn edges_topological_sort_from<G, S>(g: &G, seeds: S) -> EdgesTopologicalSort<'_, G>
where
    G: AdjacencyList,
    S: IntoIterator<Item = G::VertexId>,
{
    EdgesTopologicalSort::from_seeds(g, seeds, OutEdgeAccessor)
}

/// Topological order of every vertex of `g`, or the cycle that prevents it.
///
/// # Errors
/// [`GraphError::CycleDetected`] if `g` has a cycle.
pub fn try_vertices_topological_sort<G: AdjacencyList>(g: &G) -> Result<VerticesTopologicalSort<'_, G>> {
    VerticesTopologicalSort::try_with_accessor(g, OutEdgeAccessor)
}

/// Edge form of [`try_vertices_topological_sort`].
///
/// # Errors
/// [`GraphError::CycleDetected`] if `g` has a cycle.
pub fn try_edges_topological_sort<G: AdjacencyList>(g: &G) -> Result<EdgesTopologicalSort<'_, G>> {
    EdgesTopologicalSort::try_with_accessor(g, OutEdgeAccessor)
}
