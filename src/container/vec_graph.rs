//! `Vec<Vec<I>>` as a forward-only adjacency list.
//!
//! Row `u` holds the target ids of `u`'s outgoing edges. The impl answers
//! only the five required operations; degrees, edge counts, edge lookup and
//! partitioning all come from the provided defaults. There is no incoming
//! edge list, so reverse traversals over it are rejected at compile time.

use core::iter::FusedIterator;

use crate::adj_list::{AdjacencyList, EdgeDescriptor, EdgeDescriptors, VertexDescriptor, VertexDescriptors, VertexIndex};

/// Outgoing edges of one row.
#[derive(Clone, Debug)]
pub struct RowEdges<I> {
    inner: EdgeDescriptors<I>,
}

impl<I: Copy> Iterator for RowEdges<I> {
    type Item = EdgeDescriptor<I>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Copy> ExactSizeIterator for RowEdges<I> {}

impl<I: Copy> FusedIterator for RowEdges<I> {}

impl<I: VertexIndex> AdjacencyList for Vec<Vec<I>> {
    type VertexId = I;
    type Vertex = VertexDescriptor<I>;
    type Edge = EdgeDescriptor<I>;
    type Vertices<'g> = VertexDescriptors<I> where Self: 'g;
    type Edges<'g> = RowEdges<I> where Self: 'g;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        VertexDescriptors::new(self.len())
    }

    #[inline]
    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_> {
        let len = self.get(u.id().index()).map_or(0, Vec::len);
        RowEdges {
            inner: EdgeDescriptors::new(u.id(), len),
        }
    }

    #[inline]
    fn vertex_id(&self, u: Self::Vertex) -> Self::VertexId {
        u.id()
    }

    /// # Panics
    /// Panics if `e` was not produced by this graph.
    #[inline]
    fn target_id(&self, e: Self::Edge) -> Self::VertexId {
        self[e.owner().index()][e.position()]
    }

    #[inline]
    fn find_vertex(&self, id: Self::VertexId) -> Option<Self::Vertex> {
        (id.index() < self.len()).then_some(VertexDescriptor::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_operations_only() {
        let g: Vec<Vec<u32>> = vec![vec![1, 2], vec![2], vec![]];
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 3);
        assert!(g.has_edge());

        let u = g.find_vertex(0).unwrap();
        assert_eq!(g.degree(u), 2);
        let targets: Vec<u32> = g.edges(u).map(|e| g.target_id(e)).collect();
        assert_eq!(targets, vec![1, 2]);

        assert!(g.contains_edge(1, 2));
        assert!(!g.contains_edge(2, 1));
        assert!(g.find_vertex(3).is_none());
        assert!(g.find_edge(7, 0).is_none());
    }

    #[test]
    fn structural_partition_defaults() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![]];
        let u = g.find_vertex(1).unwrap();
        assert_eq!(g.partition_id(u), 0);
        assert_eq!(g.num_partitions(), 1);
        assert_eq!(g.vertices_in(0).count(), 2);
        assert_eq!(g.vertices_in(1).count(), 0);
        assert_eq!(g.num_vertices_in(0), 2);
        assert_eq!(g.num_vertices_in(3), 0);
    }

    #[test]
    fn empty_graph() {
        let g: Vec<Vec<usize>> = Vec::new();
        assert_eq!(g.num_vertices(), 0);
        assert!(!g.has_edge());
        assert!(g.edges_of(0).is_none());
    }
}
