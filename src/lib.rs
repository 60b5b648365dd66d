//! # `graph-traverse` - Storage-Agnostic Graph Traversal
//!
//! Depth-first, breadth-first and topological traversals written once and run
//! unchanged over any graph representation that can answer a small set of
//! questions: what are the vertices, what are the edges of this vertex, and
//! where does this edge point.
//!
//! ## Architecture
//!
//! ### Operation dispatch
//!
//! [`AdjacencyList`] and [`BidirectionalAdjacencyList`] are the whole
//! contract between a graph and the traversals. Five methods are required;
//! everything else (degrees, edge counts, edge lookup, partitions) has a
//! provided fallback that a graph overrides only when it can do better. The
//! choice is made per graph type at compile time, and a graph missing a
//! required operation is rejected by the compiler, not at run time. See
//! [`adj_list`] for the resolution table.
//!
//! ### Views
//!
//! Traversals are lazy iterators in [`views`]. Each one borrows the graph,
//! owns its own bookkeeping (a dense [`VisitedTracker`], a stack, a queue, an
//! in-degree table) and does one step of work per `next()`:
//!
//! 1. **Searches** ([`vertices_dfs`], [`vertices_bfs`],
//!    [`vertices_topological_sort`] and their edge forms) expose
//!    [`Search::cancel`], [`Search::depth`] and [`Search::size`].
//! 2. **Accessors** pick the direction. [`OutEdgeAccessor`] is the default;
//!    [`InEdgeAccessor`] walks incoming edges and only exists for
//!    bidirectional graphs. [`Transpose`] swaps the two for a whole graph.
//! 3. **Value functions** pair each element with a computed value through
//!    [`GraphView::with_value`].
//!
//! ### Containers
//!
//! [`container`] bundles a few graphs that answer the protocol from different
//! tiers: plain `Vec<Vec<I>>`, the growable [`DynamicGraph`], the compressed
//! [`CompressedGraph`], and (with the `petgraph` feature) `petgraph`'s
//! `DiGraph`.
//!
//! ## Example
//!
//! ```rust
//! use graph_traverse::views::{vertices_bfs, vertices_dfs, vertices_topological_sort, Search};
//!
//! // 0 -> 1, 0 -> 2, 1 -> 2
//! let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![2], vec![]];
//!
//! let mut dfs = vertices_dfs(&g, 0);
//! let mut visits = Vec::new();
//! while let Some(v) = dfs.next() {
//!     visits.push((v.id(), dfs.depth()));
//! }
//! assert_eq!(visits, [(0, 0), (1, 1), (2, 2)]);
//!
//! let bfs: Vec<usize> = vertices_bfs(&g, 0).map(|v| v.id()).collect();
//! assert_eq!(bfs, [0, 1, 2]);
//!
//! let topo: Vec<usize> = vertices_topological_sort(&g).map(|v| v.id()).collect();
//! assert_eq!(topo, [0, 1, 2]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod adj_list;
pub mod config;
pub mod container;
pub mod error;
pub mod views;

pub use adj_list::{
    AdjacencyList, BidirectionalAdjacencyList, EdgeDescriptor, EdgeValues, GraphValue, VertexDescriptor,
    VertexIndex, VertexValues,
};
pub use config::SearchOptions;
pub use container::{CompressedGraph, DynamicGraph};
pub use error::{GraphError, Result};
pub use views::{
    transpose, vertices_bfs, vertices_dfs, vertices_topological_sort, CancelSearch, GraphView, InEdgeAccessor,
    OutEdgeAccessor, Search, Transpose, VisitedTracker,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Accessor policies are stateless.
    assert!(mem::size_of::<OutEdgeAccessor>() == 0);
    assert!(mem::size_of::<InEdgeAccessor>() == 0);

    // Descriptors are plain ids.
    assert!(mem::size_of::<VertexDescriptor<u32>>() == mem::size_of::<u32>());
    assert!(mem::size_of::<EdgeDescriptor<usize>>() == 2 * mem::size_of::<usize>());

    // A transposed graph is a single borrow.
    assert!(mem::size_of::<Transpose<'static, DynamicGraph>>() == mem::size_of::<usize>());
};
