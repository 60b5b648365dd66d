//! An immutable CSR + CSC graph.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: target id of every edge, row-major
//! - `rows`: source id of every edge, row-major (so an edge slot alone
//!   recovers both endpoints)
//! - `values`: edge payloads, row-major
//! - `in_offsets` / `in_slots`: the column-major index, holding for each
//!   vertex the row-major slots of its incoming edges
//!
//! Outgoing and incoming handles both carry the row-major slot, so edge
//! values are shared between directions.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `from_adjacency` | \(O(n + m)\) | Builds CSR and CSC |
//! | `edges` / `in_edges` | \(O(1)\) | Slice-backed iterators |
//! | `degree` / `in_degree` | \(O(1)\) | Offset subtraction |
//! | `find_vertex_edge` | \(O(\log \text{out-degree})\) | Binary search when rows are sorted, else a scan |

use tracing::debug;

use super::SlotEdges;
use crate::adj_list::{
    AdjacencyList, BidirectionalAdjacencyList, EdgeDescriptor, EdgeDescriptors, EdgeValues, VertexDescriptor,
    VertexDescriptors, VertexIndex,
};
use crate::error::{GraphError, Result};

/// A compressed directed graph with ids of type `I` and edge payloads `EV`.
#[derive(Clone, Debug)]
pub struct CompressedGraph<I = usize, EV = ()> {
    offsets: Vec<usize>,
    targets: Vec<I>,
    rows: Vec<I>,
    values: Vec<EV>,
    in_offsets: Vec<usize>,
    in_slots: Vec<usize>,
    sorted_rows: bool,
}

impl<I: VertexIndex, EV: Default> CompressedGraph<I, EV> {
    /// Builds a graph from an adjacency list, with default edge values.
    ///
    /// # Panics
    /// Panics if any edge references a vertex index out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<I>]) -> Self {
        match Self::try_from_adjacency(adjacency) {
            Ok(g) => g,
            Err(err) => panic!("{err}"),
        }
    }

    /// Builds a graph from an adjacency list, rejecting out-of-bounds edges.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] naming the first offending target.
    pub fn try_from_adjacency(adjacency: &[Vec<I>]) -> Result<Self> {
        let n = adjacency.len();
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut total_edges = 0usize;
        for nbrs in adjacency {
            total_edges = total_edges.saturating_add(nbrs.len());
            offsets.push(total_edges);
        }

        let mut targets = Vec::with_capacity(total_edges);
        for nbrs in adjacency {
            for &v in nbrs {
                if v.index() >= n {
                    return Err(GraphError::VertexOutOfRange {
                        index: v.index(),
                        num_vertices: n,
                    });
                }
                targets.push(v);
            }
        }
        let values = (0..total_edges).map(|_| EV::default()).collect();
        Self::from_csr_parts(offsets, targets, values)
    }
}

impl<I: VertexIndex, EV> CompressedGraph<I, EV> {
    /// Builds a graph directly from CSR parts.
    ///
    /// # Errors
    /// [`GraphError::InvalidCsr`] if
    /// - `offsets.len() < 1`
    /// - offsets do not start at 0 or are not monotone
    /// - `offsets.last()` differs from `targets.len()` or `values.len()`
    /// - a target is out of bounds or `n` does not fit in `I`
    pub fn from_csr_parts(offsets: Vec<usize>, targets: Vec<I>, values: Vec<EV>) -> Result<Self> {
        let Some(&m) = offsets.last() else {
            return Err(invalid("offsets must have length n+1"));
        };
        let n = offsets.len() - 1;
        if offsets[0] != 0 {
            return Err(invalid("offsets must start at 0"));
        }
        if offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(invalid("offsets must be monotone"));
        }
        if m != targets.len() || m != values.len() {
            return Err(invalid(format!(
                "offsets end at {m} but there are {} targets and {} values",
                targets.len(),
                values.len()
            )));
        }
        if n > 0 && I::from_index(n - 1).is_none() {
            return Err(invalid(format!("{n} vertices do not fit the id type")));
        }
        if let Some(v) = targets.iter().find(|v| v.index() >= n) {
            return Err(invalid(format!("edge to {v:?} out of bounds for n={n}")));
        }

        let mut rows = Vec::with_capacity(m);
        let mut sorted_rows = true;
        for (u, w) in offsets.windows(2).enumerate() {
            let row = &targets[w[0]..w[1]];
            sorted_rows &= row.windows(2).all(|p| p[0] <= p[1]);
            // Checked above: every u < n fits in I.
            let uid = I::from_index(u).ok_or_else(|| invalid("row id overflow"))?;
            rows.extend(core::iter::repeat(uid).take(row.len()));
        }

        // Column index: counting sort of slots by target, stable in slot order.
        let mut in_offsets = vec![0usize; n + 1];
        for v in &targets {
            in_offsets[v.index() + 1] += 1;
        }
        for i in 0..n {
            in_offsets[i + 1] += in_offsets[i];
        }
        let mut write_pos = in_offsets[..n].to_vec();
        let mut in_slots = vec![0usize; m];
        for (slot, v) in targets.iter().enumerate() {
            let pos = &mut write_pos[v.index()];
            in_slots[*pos] = slot;
            *pos += 1;
        }

        debug!(vertices = n, edges = m, sorted_rows, "compressed graph built");
        Ok(Self {
            offsets,
            targets,
            rows,
            values,
            in_offsets,
            in_slots,
            sorted_rows,
        })
    }

    /// Builds a graph of `num_vertices` vertices from `(source, target,
    /// value)` triples. Edges keep their relative order within each row.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if an endpoint is out of bounds, or
    /// [`GraphError::InvalidCsr`] if `num_vertices` does not fit in `I`.
    pub fn from_edges<T>(num_vertices: usize, edges: T) -> Result<Self>
    where
        T: IntoIterator<Item = (I, I, EV)>,
    {
        let mut triples: Vec<(I, I, EV)> = edges.into_iter().collect();
        for &(u, v, _) in &triples {
            for id in [u, v] {
                if id.index() >= num_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        index: id.index(),
                        num_vertices,
                    });
                }
            }
        }
        triples.sort_by_key(|&(u, _, _)| u);

        let mut offsets = vec![0usize; num_vertices + 1];
        for &(u, _, _) in &triples {
            offsets[u.index() + 1] += 1;
        }
        for i in 0..num_vertices {
            offsets[i + 1] += offsets[i];
        }
        let (targets, values) = triples.into_iter().map(|(_, v, ev)| (v, ev)).unzip();
        Self::from_csr_parts(offsets, targets, values)
    }

    /// Returns `true` if every row lists its targets in ascending order.
    pub fn has_sorted_rows(&self) -> bool {
        self.sorted_rows
    }

    fn row(&self, u: usize) -> core::ops::Range<usize> {
        match (self.offsets.get(u), self.offsets.get(u + 1)) {
            (Some(&start), Some(&end)) => start..end,
            _ => 0..0,
        }
    }

    fn column(&self, v: usize) -> &[usize] {
        match (self.in_offsets.get(v), self.in_offsets.get(v + 1)) {
            (Some(&start), Some(&end)) => &self.in_slots[start..end],
            _ => &[],
        }
    }
}

fn invalid(msg: impl Into<String>) -> GraphError {
    GraphError::InvalidCsr(msg.into())
}

impl<I: VertexIndex, EV> AdjacencyList for CompressedGraph<I, EV> {
    type VertexId = I;
    type Vertex = VertexDescriptor<I>;
    type Edge = EdgeDescriptor<I>;
    type Vertices<'g> = VertexDescriptors<I> where Self: 'g;
    type Edges<'g> = EdgeDescriptors<I> where Self: 'g;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        VertexDescriptors::new(self.num_vertices())
    }

    #[inline]
    fn edges(&self, u: Self::Vertex) -> Self::Edges<'_> {
        EdgeDescriptors::with_range(u.id(), self.row(u.id().index()))
    }

    #[inline]
    fn vertex_id(&self, u: Self::Vertex) -> I {
        u.id()
    }

    #[inline]
    fn target_id(&self, e: Self::Edge) -> I {
        self.targets[e.position()]
    }

    #[inline]
    fn find_vertex(&self, id: I) -> Option<Self::Vertex> {
        (id.index() < self.num_vertices()).then_some(VertexDescriptor::new(id))
    }

    #[inline]
    fn num_vertices(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len().saturating_sub(1)
    }

    #[inline]
    fn degree(&self, u: Self::Vertex) -> usize {
        self.row(u.id().index()).len()
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    fn has_edge(&self) -> bool {
        !self.targets.is_empty()
    }

    fn find_vertex_edge(&self, u: Self::Vertex, v: I) -> Option<Self::Edge> {
        let range = self.row(u.id().index());
        let start = range.start;
        let row = &self.targets[range];
        let pos = if self.sorted_rows {
            // First match, so parallel edges resolve like the scan does.
            let first = row.partition_point(|&t| t < v);
            (row.get(first) == Some(&v)).then_some(first)
        } else {
            row.iter().position(|&t| t == v)
        }?;
        Some(EdgeDescriptor::new(u.id(), start + pos))
    }
}

impl<I: VertexIndex, EV> BidirectionalAdjacencyList for CompressedGraph<I, EV> {
    type InEdge = EdgeDescriptor<I>;
    type InEdges<'g> = SlotEdges<'g, I> where Self: 'g;

    #[inline]
    fn in_edges(&self, u: Self::Vertex) -> Self::InEdges<'_> {
        SlotEdges::new(u.id(), self.column(u.id().index()))
    }

    #[inline]
    fn source_id(&self, e: Self::InEdge) -> I {
        self.rows[e.position()]
    }

    #[inline]
    fn in_degree(&self, u: Self::Vertex) -> usize {
        self.column(u.id().index()).len()
    }
}

impl<I: VertexIndex, EV> EdgeValues<EdgeDescriptor<I>> for CompressedGraph<I, EV> {
    type Value = EV;

    #[inline]
    fn edge_value(&self, e: EdgeDescriptor<I>) -> &EV {
        &self.values[e.position()]
    }
}
