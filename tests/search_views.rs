use std::cell::Cell;

use anyhow::Result;
use graph_traverse::adj_list::{VertexDescriptor, VertexDescriptors};
use graph_traverse::views::{
    edges_dfs, edges_topological_sort, reverse_vertices_bfs, reverse_vertices_dfs, transpose,
    try_vertices_topological_sort, verify_bidirectional, vertices_bfs, vertices_dfs, vertices_topological_sort,
    vertices_topological_sort_from, CancelSearch, Search, TopoStatus, VerticesBfs, VerticesDfs,
};
use graph_traverse::{
    AdjacencyList, BidirectionalAdjacencyList, CompressedGraph, DynamicGraph, GraphError, OutEdgeAccessor,
    SearchOptions,
};

fn triangle_edges() -> [(usize, usize, ()); 3] {
    [(0, 1, ()), (0, 2, ()), (1, 2, ())]
}

fn with_depths<I>(mut search: I) -> Vec<(usize, usize)>
where
    I: Iterator<Item = VertexDescriptor<usize>> + Search,
{
    let mut out = Vec::new();
    while let Some(v) = search.next() {
        out.push((v.id(), search.depth()));
    }
    out
}

#[test]
fn triangle_orders_on_every_container() -> Result<()> {
    let vec_graph: Vec<Vec<usize>> = vec![vec![1, 2], vec![2], vec![]];
    let dynamic: DynamicGraph = DynamicGraph::from_edges(3, triangle_edges())?;
    let compressed: CompressedGraph = CompressedGraph::from_edges(3, triangle_edges())?;

    let dfs = [(0, 0), (1, 1), (2, 2)];
    let bfs = [(0, 0), (1, 1), (2, 1)];
    assert_eq!(with_depths(vertices_dfs(&vec_graph, 0)), dfs);
    assert_eq!(with_depths(vertices_dfs(&dynamic, 0)), dfs);
    assert_eq!(with_depths(vertices_dfs(&compressed, 0)), dfs);
    assert_eq!(with_depths(vertices_bfs(&vec_graph, 0)), bfs);
    assert_eq!(with_depths(vertices_bfs(&dynamic, 0)), bfs);
    assert_eq!(with_depths(vertices_bfs(&compressed, 0)), bfs);

    for order in [
        vertices_topological_sort(&vec_graph).map(|v| v.id()).collect::<Vec<_>>(),
        vertices_topological_sort(&dynamic).map(|v| v.id()).collect(),
        vertices_topological_sort(&compressed).map(|v| v.id()).collect(),
    ] {
        assert_eq!(order, [0, 1, 2]);
    }
    Ok(())
}

#[test]
fn reverse_accessor_never_follows_out_edges() -> Result<()> {
    let g: DynamicGraph = DynamicGraph::from_edges(3, triangle_edges())?;
    let dfs: Vec<usize> = reverse_vertices_dfs(&g, 2).map(|v| v.id()).collect();
    let bfs: Vec<usize> = reverse_vertices_bfs(&g, 2).map(|v| v.id()).collect();
    assert!(dfs == [2, 1, 0] || dfs == [2, 0, 1], "unexpected order {dfs:?}");
    assert!(bfs == [2, 1, 0] || bfs == [2, 0, 1], "unexpected order {bfs:?}");

    // 0 has no incoming edges.
    assert_eq!(reverse_vertices_dfs(&g, 0).count(), 1);
    Ok(())
}

#[test]
fn back_edge_makes_topological_sort_report_a_cycle() -> Result<()> {
    let g: DynamicGraph = DynamicGraph::from_edges(3, [(0, 1, ()), (0, 2, ()), (1, 2, ()), (2, 0, ())])?;
    let mut topo = vertices_topological_sort(&g);
    let yielded = topo.by_ref().count();
    assert!(yielded < g.num_vertices());
    assert!(topo.has_cycle());

    match try_vertices_topological_sort(&g) {
        Err(GraphError::CycleDetected { remaining, .. }) => assert_eq!(remaining, 3),
        Err(other) => anyhow::bail!("wrong error: {other}"),
        Ok(_) => anyhow::bail!("cycle not detected"),
    }
    Ok(())
}

#[test]
fn cancel_all_ends_every_search() -> Result<()> {
    let g: CompressedGraph = CompressedGraph::from_edges(3, triangle_edges())?;

    let mut dfs = vertices_dfs(&g, 0);
    let mut bfs = vertices_bfs(&g, 0);
    let mut topo = vertices_topological_sort(&g);
    dfs.next();
    bfs.next();
    topo.next();
    dfs.cancel(CancelSearch::CancelAll);
    bfs.cancel(CancelSearch::CancelAll);
    topo.cancel(CancelSearch::CancelAll);
    assert!(dfs.next().is_none());
    assert!(bfs.next().is_none());
    assert!(topo.next().is_none());
    assert_eq!(topo.status(), TopoStatus::Cancelled);
    Ok(())
}

#[test]
fn cancel_branch_in_a_tree_prunes_exactly_the_subtree() {
    //        0
    //      /   \
    //     1     4
    //    / \     \
    //   2   3     5
    let g: Vec<Vec<usize>> = vec![vec![1, 4], vec![2, 3], vec![], vec![], vec![5], vec![]];
    let mut dfs = vertices_dfs(&g, 0);
    let mut seen = Vec::new();
    while let Some(v) = dfs.next() {
        seen.push(v.id());
        if v.id() == 1 {
            dfs.cancel(CancelSearch::CancelBranch);
        }
    }
    assert_eq!(seen, [0, 1, 4, 5]);

    let mut bfs = vertices_bfs(&g, 0);
    let mut seen = Vec::new();
    while let Some(v) = bfs.next() {
        seen.push(v.id());
        if v.id() == 4 {
            bfs.cancel(CancelSearch::CancelBranch);
        }
    }
    assert_eq!(seen, [0, 1, 4, 2, 3]);
}

#[test]
fn cancel_state_is_consumed_by_one_step() {
    let g: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![]];
    let mut dfs = vertices_dfs(&g, 0);
    dfs.next();
    dfs.cancel(CancelSearch::CancelBranch);
    assert_eq!(dfs.cancel_state(), CancelSearch::CancelBranch);
    assert!(dfs.next().is_none());
    assert_eq!(dfs.cancel_state(), CancelSearch::Continue);
}

#[test]
fn transpose_twice_is_the_identity() -> Result<()> {
    let g: DynamicGraph = DynamicGraph::from_edges(4, [(0, 1, ()), (1, 2, ()), (3, 1, ())])?;
    let t = transpose(&g);
    let tt = transpose(&t);
    for u in g.vertices() {
        let out: Vec<usize> = g.edges(u).map(|e| g.target_id(e)).collect();
        let inc: Vec<usize> = g.in_edges(u).map(|e| g.source_id(e)).collect();
        assert_eq!(tt.edges(u).map(|e| tt.target_id(e)).collect::<Vec<_>>(), out);
        assert_eq!(tt.in_edges(u).map(|e| tt.source_id(e)).collect::<Vec<_>>(), inc);
        assert_eq!(t.degree(u), g.in_degree(u));
        assert_eq!(t.in_degree(u), g.degree(u));
    }
    assert!(t.contains_edge(1, 3));
    assert!(!t.contains_edge(3, 1));
    verify_bidirectional(&t)?;

    let forward: Vec<usize> = reverse_vertices_dfs(&t, 0).map(|v| v.id()).collect();
    assert_eq!(forward, [0, 1, 2]);
    Ok(())
}

#[test]
fn edge_views_report_tree_and_topological_edges() -> Result<()> {
    let g: DynamicGraph = DynamicGraph::from_edges(3, triangle_edges())?;
    let tree: Vec<(usize, usize)> = edges_dfs(&g, 0).map(|se| (se.from.id(), se.to.id())).collect();
    assert_eq!(tree, [(0, 1), (1, 2)]);

    let all: Vec<(usize, usize)> = edges_topological_sort(&g).map(|se| (se.from.id(), se.to.id())).collect();
    assert_eq!(all, [(0, 1), (0, 2), (1, 2)]);
    Ok(())
}

#[test]
fn seeded_topological_sort() {
    // 0 -> 1 -> 2, 3 -> 2
    let g: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![], vec![2]];
    let order: Vec<usize> = vertices_topological_sort_from(&g, [1, 3]).map(|v| v.id()).collect();
    assert_eq!(order, [1, 3, 2]);
}

#[test]
fn options_from_json_drive_a_search() -> Result<()> {
    let options = SearchOptions::from_json(r#"{ "max_depth": 1, "reserve": 16 }"#)?;
    let g: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![]];
    let ids: Vec<usize> = VerticesBfs::with_options(&g, 0, OutEdgeAccessor, options).map(|v| v.id()).collect();
    assert_eq!(ids, [0, 1]);
    Ok(())
}

#[test]
fn try_constructors_reject_bad_seeds() {
    let g: Vec<Vec<usize>> = vec![vec![]];
    let err = VerticesDfs::try_with_options(&g, 3, OutEdgeAccessor, SearchOptions::default()).err();
    assert_eq!(err, Some(GraphError::VertexOutOfRange { index: 3, num_vertices: 1 }));
}

#[test]
fn search_creation_logs_through_tracing() {
    let subscriber = tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).with_test_writer().finish();
    tracing::subscriber::with_default(subscriber, || {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![0]];
        assert_eq!(vertices_dfs(&g, 0).count(), 2);
        assert!(vertices_topological_sort(&g).next().is_none());
    });
}

/// Answers only the required operations but counts how often `edges` is
/// asked, and overrides `degree` natively.
struct Instrumented {
    rows: Vec<Vec<usize>>,
    edge_calls: Cell<usize>,
}

impl AdjacencyList for Instrumented {
    type VertexId = usize;
    type Vertex = VertexDescriptor<usize>;
    type Edge = (usize, usize);
    type Vertices<'g> = VertexDescriptors<usize> where Self: 'g;
    type Edges<'g> = std::vec::IntoIter<(usize, usize)> where Self: 'g;

    fn vertices(&self) -> Self::Vertices<'_> {
        VertexDescriptors::new(self.rows.len())
    }

    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_> {
        self.edge_calls.set(self.edge_calls.get() + 1);
        let row = &self.rows[u.id()];
        (0..row.len()).map(|i| (u.id(), i)).collect::<Vec<_>>().into_iter()
    }

    fn vertex_id(&self, u: Self::Vertex) -> usize {
        u.id()
    }

    fn target_id(&self, e: Self::Edge) -> usize {
        self.rows[e.0][e.1]
    }

    fn find_vertex(&self, id: usize) -> Option<Self::Vertex> {
        (id < self.rows.len()).then_some(VertexDescriptor::new(id))
    }

    fn degree(&self, u: Self::Vertex) -> usize {
        self.rows[u.id()].len()
    }
}

#[test]
fn native_operations_take_precedence_over_derived_ones() {
    let g = Instrumented {
        rows: vec![vec![1, 2], vec![2], vec![]],
        edge_calls: Cell::new(0),
    };

    // Native `degree`, so `num_edges` (derived from degrees) never walks edges.
    assert_eq!(g.num_edges(), 3);
    assert_eq!(g.edge_calls.get(), 0);

    // `contains_edge` has no override and falls back to scanning edges.
    assert!(g.contains_edge(0, 2));
    assert_eq!(g.edge_calls.get(), 1);

    // Structural defaults.
    assert_eq!(g.num_partitions(), 1);
    assert_eq!(g.num_vertices(), 3);

    let order: Vec<usize> = vertices_dfs(&g, 0).map(|v| v.id()).collect();
    assert_eq!(order, [0, 1, 2]);
}

/// Vertex ids are sparse (multiples of 10), so the graph supplies its own
/// dense index.
struct Sparse {
    rows: Vec<Vec<u32>>,
}

impl AdjacencyList for Sparse {
    type VertexId = u32;
    type Vertex = VertexDescriptor<u32>;
    type Edge = (u32, usize);
    type Vertices<'g> = std::vec::IntoIter<VertexDescriptor<u32>> where Self: 'g;
    type Edges<'g> = std::vec::IntoIter<(u32, usize)> where Self: 'g;

    fn vertices(&self) -> Self::Vertices<'_> {
        (0..self.rows.len() as u32).map(|i| VertexDescriptor::new(i * 10)).collect::<Vec<_>>().into_iter()
    }

    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_> {
        let len = self.rows[u.id() as usize / 10].len();
        (0..len).map(|i| (u.id(), i)).collect::<Vec<_>>().into_iter()
    }

    fn vertex_id(&self, u: Self::Vertex) -> u32 {
        u.id()
    }

    fn target_id(&self, e: Self::Edge) -> u32 {
        self.rows[e.0 as usize / 10][e.1]
    }

    fn find_vertex(&self, id: u32) -> Option<Self::Vertex> {
        (id % 10 == 0 && (id as usize / 10) < self.rows.len()).then_some(VertexDescriptor::new(id))
    }

    fn vertex_index(&self, u: Self::Vertex) -> usize {
        u.id() as usize / 10
    }

    fn index_bound(&self) -> usize {
        self.rows.len()
    }
}

#[test]
fn sparse_ids_use_the_graph_index_mapping() {
    let g = Sparse {
        rows: vec![vec![10, 20], vec![20], vec![]],
    };
    let dfs: Vec<u32> = vertices_dfs(&g, 0).map(|v| v.id()).collect();
    let topo: Vec<u32> = vertices_topological_sort(&g).map(|v| v.id()).collect();
    assert_eq!(dfs, [0, 10, 20]);
    assert_eq!(topo, [0, 10, 20]);
    assert!(VerticesDfs::try_with_options(&g, 5, OutEdgeAccessor, SearchOptions::default()).is_err());
}

/// Out-edges say `0 -> 1`, in-edges say `1 <- 0` and `0 <- 1`.
struct Lopsided;

impl AdjacencyList for Lopsided {
    type VertexId = usize;
    type Vertex = VertexDescriptor<usize>;
    type Edge = (usize, usize);
    type Vertices<'g> = VertexDescriptors<usize> where Self: 'g;
    type Edges<'g> = std::vec::IntoIter<(usize, usize)> where Self: 'g;

    fn vertices(&self) -> Self::Vertices<'_> {
        VertexDescriptors::new(2)
    }

    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_> {
        if u.id() == 0 { vec![(0, 1)] } else { vec![] }.into_iter()
    }

    fn vertex_id(&self, u: Self::Vertex) -> usize {
        u.id()
    }

    fn target_id(&self, e: Self::Edge) -> usize {
        e.1
    }

    fn find_vertex(&self, id: usize) -> Option<Self::Vertex> {
        (id < 2).then_some(VertexDescriptor::new(id))
    }
}

impl BidirectionalAdjacencyList for Lopsided {
    type InEdge = (usize, usize);
    type InEdges<'g> = std::vec::IntoIter<(usize, usize)> where Self: 'g;

    fn in_edges(&self, u: Self::Vertex) -> Self::InEdges<'_> {
        if u.id() == 0 { vec![(1, 0)] } else { vec![(0, 1)] }.into_iter()
    }

    fn source_id(&self, e: Self::InEdge) -> usize {
        e.0
    }
}

#[test]
fn verify_bidirectional_flags_mismatched_edge_sets() -> Result<()> {
    assert!(matches!(verify_bidirectional(&Lopsided), Err(GraphError::Inconsistent(_))));

    let g: DynamicGraph = DynamicGraph::from_edges(3, triangle_edges())?;
    verify_bidirectional(&g)?;
    verify_bidirectional(&transpose(&g))?;
    Ok(())
}
