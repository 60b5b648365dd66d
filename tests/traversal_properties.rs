use std::collections::{BTreeSet, HashMap};

use graph_traverse::views::{
    edges_bfs, edges_dfs, reverse_vertices_bfs, transpose, vertices_bfs, vertices_dfs, vertices_topological_sort,
    Search,
};
use graph_traverse::{CompressedGraph, DynamicGraph};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

type EdgeSet = Vec<(usize, usize)>;

fn graph_strategy() -> impl Strategy<Value = (usize, EdgeSet)> {
    (1..24usize).prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..n * 3)))
}

fn dag_strategy() -> impl Strategy<Value = (usize, EdgeSet)> {
    graph_strategy().prop_map(|(n, edges)| {
        let forward = edges
            .into_iter()
            .filter(|(u, v)| u != v)
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect();
        (n, forward)
    })
}

fn rows(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut rows = vec![Vec::new(); n];
    for &(u, v) in edges {
        rows[u].push(v);
    }
    rows
}

fn dynamic(n: usize, edges: &[(usize, usize)]) -> DynamicGraph {
    DynamicGraph::from_edges(n, edges.iter().map(|&(u, v)| (u, v, ()))).unwrap()
}

fn petgraph_of(n: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
    let mut g = DiGraph::new();
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v) in edges {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    g
}

fn petgraph_reachable(g: &DiGraph<(), ()>, seed: usize) -> BTreeSet<usize> {
    let mut dfs = petgraph::visit::Dfs::new(g, NodeIndex::new(seed));
    let mut seen = BTreeSet::new();
    while let Some(nx) = dfs.next(g) {
        seen.insert(nx.index());
    }
    seen
}

proptest! {
    #[test]
    fn searches_visit_each_reachable_vertex_once((n, edges) in graph_strategy(), seed in 0..24usize) {
        let seed = seed % n;
        let g = rows(n, &edges);
        let expected = petgraph_reachable(&petgraph_of(n, &edges), seed);

        let dfs: Vec<usize> = vertices_dfs(&g, seed).map(|v| v.id()).collect();
        let bfs: Vec<usize> = vertices_bfs(&g, seed).map(|v| v.id()).collect();
        prop_assert_eq!(dfs.len(), expected.len());
        prop_assert_eq!(bfs.len(), expected.len());
        prop_assert_eq!(dfs.iter().copied().collect::<BTreeSet<_>>(), expected.clone());
        prop_assert_eq!(bfs.iter().copied().collect::<BTreeSet<_>>(), expected);
        prop_assert_eq!(dfs[0], seed);
        prop_assert_eq!(bfs[0], seed);
    }

    #[test]
    fn bfs_depth_is_shortest_distance((n, edges) in graph_strategy(), seed in 0..24usize) {
        let seed = seed % n;
        let g = rows(n, &edges);
        let pg = petgraph_of(n, &edges);
        let distances = petgraph::algo::dijkstra(&pg, NodeIndex::new(seed), None, |_| 1usize);

        let mut bfs = vertices_bfs(&g, seed);
        let mut last = 0;
        while let Some(v) = bfs.next() {
            prop_assert_eq!(Some(&bfs.depth()), distances.get(&NodeIndex::new(v.id())));
            prop_assert!(bfs.depth() >= last);
            last = bfs.depth();
        }
        prop_assert_eq!(bfs.size(), distances.len());
    }

    #[test]
    fn tree_edges_go_one_level_deeper((n, edges) in graph_strategy(), seed in 0..24usize) {
        let seed = seed % n;
        let g = dynamic(n, &edges);

        for tree in [true, false] {
            let mut depth_of: HashMap<usize, usize> = HashMap::from([(seed, 0)]);
            let mut check = |from: usize, to: usize, depth: usize| {
                let parent = depth_of.get(&from).copied();
                depth_of.insert(to, depth);
                (parent, depth)
            };
            if tree {
                let mut dfs = edges_dfs(&g, seed);
                while let Some(se) = dfs.next() {
                    let (parent, depth) = check(se.from.id(), se.to.id(), dfs.depth());
                    prop_assert_eq!(parent.map(|d| d + 1), Some(depth));
                }
            } else {
                let mut bfs = edges_bfs(&g, seed);
                while let Some(se) = bfs.next() {
                    let (parent, depth) = check(se.from.id(), se.to.id(), bfs.depth());
                    prop_assert_eq!(parent.map(|d| d + 1), Some(depth));
                }
            }
        }
    }

    #[test]
    fn every_container_yields_the_same_order((n, edges) in graph_strategy(), seed in 0..24usize) {
        let seed = seed % n;
        let plain = rows(n, &edges);
        let growable = dynamic(n, &edges);
        let compressed: CompressedGraph =
            CompressedGraph::from_edges(n, edges.iter().map(|&(u, v)| (u, v, ()))).unwrap();

        let expected: Vec<usize> = vertices_dfs(&plain, seed).map(|v| v.id()).collect();
        prop_assert_eq!(&vertices_dfs(&growable, seed).map(|v| v.id()).collect::<Vec<_>>(), &expected);
        prop_assert_eq!(&vertices_dfs(&compressed, seed).map(|v| v.id()).collect::<Vec<_>>(), &expected);

        // Re-running a search reproduces it.
        prop_assert_eq!(&vertices_dfs(&plain, seed).map(|v| v.id()).collect::<Vec<_>>(), &expected);

        let expected: Vec<usize> = vertices_bfs(&plain, seed).map(|v| v.id()).collect();
        prop_assert_eq!(&vertices_bfs(&growable, seed).map(|v| v.id()).collect::<Vec<_>>(), &expected);
        prop_assert_eq!(&vertices_bfs(&compressed, seed).map(|v| v.id()).collect::<Vec<_>>(), &expected);
    }

    #[test]
    fn reverse_search_matches_search_of_reversed_graph((n, edges) in graph_strategy(), seed in 0..24usize) {
        let seed = seed % n;
        let g = dynamic(n, &edges);
        let reversed: Vec<(usize, usize)> = edges.iter().map(|&(u, v)| (v, u)).collect();
        let flipped = rows(n, &reversed);

        let expected: Vec<usize> = vertices_bfs(&flipped, seed).map(|v| v.id()).collect();
        prop_assert_eq!(&reverse_vertices_bfs(&g, seed).map(|v| v.id()).collect::<Vec<_>>(), &expected);
        prop_assert_eq!(&vertices_bfs(&transpose(&g), seed).map(|v| v.id()).collect::<Vec<_>>(), &expected);
    }

    #[test]
    fn topological_order_respects_every_edge((n, edges) in dag_strategy()) {
        let g = dynamic(n, &edges);
        let mut topo = vertices_topological_sort(&g);
        let order: Vec<usize> = topo.by_ref().map(|v| v.id()).collect();
        prop_assert!(!topo.has_cycle());
        prop_assert_eq!(order.len(), n);

        let mut position = vec![usize::MAX; n];
        for (i, &v) in order.iter().enumerate() {
            prop_assert_eq!(position[v], usize::MAX);
            position[v] = i;
        }
        for &(u, v) in &edges {
            prop_assert!(position[u] < position[v], "edge {}->{} out of order", u, v);
        }
        prop_assert!(petgraph::algo::toposort(&petgraph_of(n, &edges), None).is_ok());
    }

    #[test]
    fn cycle_detection_agrees_with_petgraph((n, edges) in graph_strategy()) {
        let g = rows(n, &edges);
        let mut topo = vertices_topological_sort(&g);
        let yielded = topo.by_ref().count();
        let cyclic = petgraph::algo::is_cyclic_directed(&petgraph_of(n, &edges));
        prop_assert_eq!(topo.has_cycle(), cyclic);
        prop_assert_eq!(yielded == n, !cyclic);
    }
}
