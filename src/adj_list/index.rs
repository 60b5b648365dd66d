//! Dense vertex indices.
//!
//! Visited tracking and in-degree tables are plain arrays, so every vertex id
//! a traversal sees must map onto `0..N`. Integral ids map onto themselves;
//! graphs with sparse ids override [`AdjacencyList::vertex_index`] instead.
//!
//! [`AdjacencyList::vertex_index`]: super::AdjacencyList::vertex_index

use core::fmt::Debug;
use core::hash::Hash;

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// An id that converts losslessly to and from a dense `usize` index.
pub trait VertexIndex: Copy + Eq + Ord + Hash + Debug {
    /// Returns the dense index of this id.
    fn index(self) -> usize;

    /// Builds the id for a dense index, or `None` if it does not fit.
    fn from_index(index: usize) -> Option<Self>;
}

impl<T> VertexIndex for T
where
    T: PrimInt + Unsigned + ToPrimitive + FromPrimitive + Hash + Debug,
{
    #[inline(always)]
    fn index(self) -> usize {
        // Ids wider than usize cannot index a resident graph anyway.
        self.to_usize().unwrap_or(usize::MAX)
    }

    #[inline(always)]
    fn from_index(index: usize) -> Option<Self> {
        T::from_usize(index)
    }
}
