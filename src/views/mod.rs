//! Lazy views over any [`AdjacencyList`](crate::AdjacencyList).
//!
//! Every view borrows its graph and does work only when advanced:
//!
//! | View | Yields | Order |
//! |------|--------|-------|
//! | [`vertexlist`] | `(id, vertex)` | `vertices()` order |
//! | [`incidence`] / [`in_incidence`] | `(neighbor id, edge)` | edge order |
//! | [`neighbors`] / [`in_neighbors`] | `(neighbor id, vertex)` | edge order |
//! | [`edgelist`] | `(source id, target id, edge)` | by source |
//! | [`vertices_dfs`] / [`edges_dfs`] | vertex / [`SearchEdge`] | depth-first |
//! | [`vertices_bfs`] / [`edges_bfs`] | vertex / [`SearchEdge`] | breadth-first |
//! | [`vertices_topological_sort`] / [`edges_topological_sort`] | vertex / [`SearchEdge`] | Kahn |
//!
//! Searches implement [`Search`] for cancellation and depth/size
//! introspection, and every view implements [`GraphView`] for value
//! functions. The `reverse_*` and `in_*` forms follow incoming edges and
//! exist only for [`BidirectionalAdjacencyList`](crate::BidirectionalAdjacencyList)
//! graphs.

pub mod accessor;
pub mod adaptors;
pub mod basic;
pub mod bfs;
pub mod dfs;
pub mod search;
pub mod topological_sort;
pub mod transpose;
pub mod value;
pub mod visited;

pub use accessor::{EdgeAccessor, InEdgeAccessor, OutEdgeAccessor};
pub use basic::{
    edgelist, in_incidence, in_neighbors, incidence, neighbors, vertexlist, EdgeList, Incidence, Neighbors,
    VertexList,
};
pub use bfs::{edges_bfs, reverse_edges_bfs, reverse_vertices_bfs, vertices_bfs, EdgesBfs, VerticesBfs};
pub use dfs::{edges_dfs, reverse_edges_dfs, reverse_vertices_dfs, vertices_dfs, EdgesDfs, VerticesDfs};
pub use search::{CancelSearch, Search, SearchEdge};
pub use topological_sort::{
    edges_topological_sort, edges_topological_sort_from, reverse_vertices_topological_sort,
    try_edges_topological_sort, try_vertices_topological_sort, vertices_topological_sort,
    vertices_topological_sort_from, EdgesTopologicalSort, TopoStatus, VerticesTopologicalSort,
};
pub use transpose::{transpose, verify_bidirectional, Transpose};
pub use value::{GraphView, Valued};
pub use visited::VisitedTracker;
