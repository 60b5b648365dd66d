//! Pipe syntax for building views.
//!
//! The functions here mirror the eager view constructors but leave the graph
//! out; `|` supplies it:
//!
//! ```
//! use graph_traverse::container::DynamicGraph;
//! use graph_traverse::views::adaptors::{pipe, vertices_bfs};
//!
//! let g: DynamicGraph = DynamicGraph::from_edges(3, [(0, 1, ()), (1, 2, ())]).unwrap();
//! let via_pipe: Vec<usize> = (pipe(&g) | vertices_bfs(0)).map(|v| v.id()).collect();
//! let direct: Vec<usize> = (&g | vertices_bfs(0)).map(|v| v.id()).collect();
//! assert_eq!(via_pipe, [0, 1, 2]);
//! assert_eq!(via_pipe, direct);
//! ```
//!
//! [`pipe`] works for any graph type. The bundled containers and
//! [`Transpose`] also accept `&g | builder` directly; foreign types such as
//! `Vec<Vec<I>>` cannot, since `|` on a foreign reference would be an
//! orphan impl.

use core::ops::BitOr;

use crate::adj_list::{AdjacencyList, VertexIndex};
use crate::config::SearchOptions;
use crate::container::{CompressedGraph, DynamicGraph};
use crate::views::accessor::{EdgeAccessor, InEdgeAccessor, OutEdgeAccessor};
use crate::views::basic::{EdgeList, Incidence, Neighbors, VertexList};
use crate::views::bfs::{EdgesBfs, VerticesBfs};
use crate::views::dfs::{EdgesDfs, VerticesDfs};
use crate::views::topological_sort::{EdgesTopologicalSort, VerticesTopologicalSort};
use crate::views::transpose::Transpose;
use crate::views::value::{GraphView, Valued};

/// A view waiting for its graph.
pub trait ViewBuilder<'g, G: 'g> {
    /// The view produced.
    type View;

    /// Builds the view over `g`.
    fn build(self, g: &'g G) -> Self::View;
}

/// A borrowed graph on the left of `|`.
#[derive(Debug)]
pub struct Pipe<'g, G>(&'g G);

impl<G> Clone for Pipe<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Pipe<'_, G> {}

/// Starts a pipe over `g`.
pub fn pipe<G>(g: &G) -> Pipe<'_, G> {
    Pipe(g)
}

impl<'g, G: 'g, B: ViewBuilder<'g, G>> BitOr<B> for Pipe<'g, G> {
    type Output = B::View;

    fn bitor(self, builder: B) -> B::View {
        builder.build(self.0)
    }
}

macro_rules! pipe_for {
    (impl<$($p:ident),*> $ty:ty) => {
        impl<'g, $($p,)* B> BitOr<B> for &'g $ty
        where
            B: ViewBuilder<'g, $ty>,
        {
            type Output = B::View;

            fn bitor(self, builder: B) -> B::View {
                builder.build(self)
            }
        }
    };
}

pipe_for!(impl<VV, EV, GV> DynamicGraph<VV, EV, GV>);
pipe_for!(impl<I, EV> CompressedGraph<I, EV>);

impl<'g, 'a, G, B> BitOr<B> for &'g Transpose<'a, G>
where
    B: ViewBuilder<'g, Transpose<'a, G>>,
{
    type Output = B::View;

    fn bitor(self, builder: B) -> B::View {
        builder.build(self)
    }
}

/// A builder whose view will carry a value function.
#[derive(Clone, Debug)]
pub struct WithValue<B, F> {
    builder: B,
    f: F,
}

impl<'g, G, B, F, R> ViewBuilder<'g, G> for WithValue<B, F>
where
    G: 'g,
    B: ViewBuilder<'g, G>,
    B::View: GraphView<'g, Graph = G>,
    <B::View as Iterator>::Item: Clone,
    F: Fn(&'g G, <B::View as Iterator>::Item) -> R + Clone,
{
    type View = Valued<'g, B::View, F>;

    fn build(self, g: &'g G) -> Self::View {
        self.builder.build(g).with_value(self.f)
    }
}

macro_rules! search_builder {
    (
        $(#[$meta:meta])*
        $builder:ident => $view:ident, $fwd:ident, $rev:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $builder<Id, A> {
            seed: Id,
            accessor: A,
            options: SearchOptions,
        }

        impl<Id, A> $builder<Id, A> {
            /// Replaces the search options.
            pub fn with_options(mut self, options: SearchOptions) -> Self {
                self.options = options;
                self
            }

            /// Attaches a value function to the view this builds.
            pub fn with_value<F>(self, f: F) -> WithValue<Self, F> {
                WithValue { builder: self, f }
            }
        }

        impl<'g, G, Id, A> ViewBuilder<'g, G> for $builder<Id, A>
        where
            G: AdjacencyList<VertexId = Id> + 'g,
            Id: VertexIndex,
            A: EdgeAccessor<G>,
        {
            type View = $view<'g, G, A>;

            #[track_caller]
            fn build(self, g: &'g G) -> Self::View {
                $view::with_options(g, self.seed, self.accessor, self.options)
            }
        }

        /// Pipe form of the eager constructor of the same name.
        pub fn $fwd<Id>(seed: Id) -> $builder<Id, OutEdgeAccessor> {
            $builder {
                seed,
                accessor: OutEdgeAccessor,
                options: SearchOptions::default(),
            }
        }

        /// Pipe form of the eager constructor of the same name.
        pub fn $rev<Id>(seed: Id) -> $builder<Id, InEdgeAccessor> {
            $builder {
                seed,
                accessor: InEdgeAccessor,
                options: SearchOptions::default(),
            }
        }
    };
}

search_builder!(
    /// Builds a [`VerticesDfs`].
    VerticesDfsBuilder => VerticesDfs, vertices_dfs, reverse_vertices_dfs
);
search_builder!(
    /// Builds an [`EdgesDfs`].
    EdgesDfsBuilder => EdgesDfs, edges_dfs, reverse_edges_dfs
);
search_builder!(
    /// Builds a [`VerticesBfs`].
    VerticesBfsBuilder => VerticesBfs, vertices_bfs, reverse_vertices_bfs
);
search_builder!(
    /// Builds an [`EdgesBfs`].
    EdgesBfsBuilder => EdgesBfs, edges_bfs, reverse_edges_bfs
);

macro_rules! topo_builder {
    (
        $(#[$meta:meta])*
        $builder:ident => $view:ident, $fwd:ident, $rev:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $builder<A> {
            accessor: A,
            options: SearchOptions,
        }

        impl<A> $builder<A> {
            /// Replaces the sort options.
            pub fn with_options(mut self, options: SearchOptions) -> Self {
                self.options = options;
                self
            }

            /// Attaches a value function to the view this builds.
            pub fn with_value<F>(self, f: F) -> WithValue<Self, F> {
                WithValue { builder: self, f }
            }
        }

        impl<'g, G, A> ViewBuilder<'g, G> for $builder<A>
        where
            G: AdjacencyList + 'g,
            A: EdgeAccessor<G>,
        {
            type View = $view<'g, G, A>;

            fn build(self, g: &'g G) -> Self::View {
                $view::with_options(g, self.accessor, self.options)
            }
        }

        /// Pipe form of the eager constructor of the same name.
        pub fn $fwd() -> $builder<OutEdgeAccessor> {
            $builder {
                accessor: OutEdgeAccessor,
                options: SearchOptions::default(),
            }
        }

        /// Pipe form of the eager constructor of the same name.
        pub fn $rev() -> $builder<InEdgeAccessor> {
            $builder {
                accessor: InEdgeAccessor,
                options: SearchOptions::default(),
            }
        }
    };
}

topo_builder!(
    /// Builds a [`VerticesTopologicalSort`] over the whole graph.
    VerticesTopologicalSortBuilder => VerticesTopologicalSort, vertices_topological_sort, reverse_vertices_topological_sort
);
topo_builder!(
    /// Builds an [`EdgesTopologicalSort`] over the whole graph.
    EdgesTopologicalSortBuilder => EdgesTopologicalSort, edges_topological_sort, reverse_edges_topological_sort
);

/// Builds a [`VertexList`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VertexListBuilder;

impl VertexListBuilder {
    /// Attaches a value function to the view this builds.
    pub fn with_value<F>(self, f: F) -> WithValue<Self, F> {
        WithValue { builder: self, f }
    }
}

impl<'g, G: AdjacencyList + 'g> ViewBuilder<'g, G> for VertexListBuilder {
    type View = VertexList<'g, G>;

    fn build(self, g: &'g G) -> Self::View {
        VertexList::new(g)
    }
}

/// Pipe form of [`vertexlist`](crate::views::vertexlist).
pub fn vertexlist() -> VertexListBuilder {
    VertexListBuilder
}

/// Builds an [`EdgeList`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeListBuilder;

impl EdgeListBuilder {
    /// Attaches a value function to the view this builds.
    pub fn with_value<F>(self, f: F) -> WithValue<Self, F> {
        WithValue { builder: self, f }
    }
}

impl<'g, G: AdjacencyList + 'g> ViewBuilder<'g, G> for EdgeListBuilder {
    type View = EdgeList<'g, G>;

    fn build(self, g: &'g G) -> Self::View {
        EdgeList::new(g)
    }
}

/// Pipe form of [`edgelist`](crate::views::edgelist).
pub fn edgelist() -> EdgeListBuilder {
    EdgeListBuilder
}

macro_rules! local_builder {
    (
        $(#[$meta:meta])*
        $builder:ident => $view:ident, $fwd:ident, $rev:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $builder<V, A> {
            vertex: V,
            accessor: A,
        }

        impl<V, A> $builder<V, A> {
            /// Attaches a value function to the view this builds.
            pub fn with_value<F>(self, f: F) -> WithValue<Self, F> {
                WithValue { builder: self, f }
            }
        }

        impl<'g, G, V, A> ViewBuilder<'g, G> for $builder<V, A>
        where
            G: AdjacencyList<Vertex = V> + 'g,
            A: EdgeAccessor<G>,
        {
            type View = $view<'g, G, A>;

            fn build(self, g: &'g G) -> Self::View {
                $view::with_accessor(g, self.vertex, self.accessor)
            }
        }

        /// Pipe form of the eager constructor of the same name.
        pub fn $fwd<V>(vertex: V) -> $builder<V, OutEdgeAccessor> {
            $builder {
                vertex,
                accessor: OutEdgeAccessor,
            }
        }

        /// Pipe form of the eager constructor of the same name.
        pub fn $rev<V>(vertex: V) -> $builder<V, InEdgeAccessor> {
            $builder {
                vertex,
                accessor: InEdgeAccessor,
            }
        }
    };
}

local_builder!(
    /// Builds an [`Incidence`].
    IncidenceBuilder => Incidence, incidence, in_incidence
);
local_builder!(
    /// Builds a [`Neighbors`].
    NeighborsBuilder => Neighbors, neighbors, in_neighbors
);
