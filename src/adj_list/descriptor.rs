//! Vertex and edge descriptors for index-addressed storage.
//!
//! A descriptor is a copyable handle into one graph instance. It stays valid
//! exactly as long as the storage keeps the referenced position; nothing here
//! tracks invalidation. The bundled containers all use these two types, but
//! the dispatch traits accept any `Copy` handle.

use core::fmt;

use super::VertexIndex;

/// A handle to a vertex stored at a dense position.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexDescriptor<I = usize> {
    id: I,
}

impl<I: Copy> VertexDescriptor<I> {
    /// Creates a descriptor for the vertex with id `id`.
    #[inline(always)]
    pub const fn new(id: I) -> Self {
        Self { id }
    }

    /// The id of the referenced vertex.
    #[inline(always)]
    pub const fn id(self) -> I {
        self.id
    }
}

impl<I: fmt::Debug> fmt::Debug for VertexDescriptor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{:?}", self.id)
    }
}

/// A handle to an edge: the vertex that owns the edge list plus the edge's
/// position inside that list.
///
/// For an outgoing edge the owner is the source; for an incoming edge it is
/// the target. The other endpoint is always read back from storage, so an
/// edge descriptor is the same size regardless of edge payload.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EdgeDescriptor<I = usize> {
    owner: I,
    position: usize,
}

impl<I: Copy> EdgeDescriptor<I> {
    /// Creates a descriptor for the `position`-th edge owned by `owner`.
    #[inline(always)]
    pub const fn new(owner: I, position: usize) -> Self {
        Self { owner, position }
    }

    /// The vertex whose edge list holds this edge.
    #[inline(always)]
    pub const fn owner(self) -> I {
        self.owner
    }

    /// Position inside the owner's edge list.
    #[inline(always)]
    pub const fn position(self) -> usize {
        self.position
    }
}

impl<I: fmt::Debug> fmt::Debug for EdgeDescriptor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{:?}#{}", self.owner, self.position)
    }
}

/// Lazily yields a [`VertexDescriptor`] for every dense id in `0..len`.
#[derive(Clone, Debug)]
pub struct VertexDescriptors<I> {
    range: core::ops::Range<usize>,
    _marker: core::marker::PhantomData<I>,
}

impl<I: VertexIndex> VertexDescriptors<I> {
    /// Descriptors for ids `0..len`.
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            range: 0..len,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<I: VertexIndex> Iterator for VertexDescriptors<I> {
    type Item = VertexDescriptor<I>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.range.next()?;
        I::from_index(i).map(VertexDescriptor::new)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.range.size_hint().1)
    }
}

/// Lazily turns each position of an edge list into an [`EdgeDescriptor`].
///
/// Calling `edges` again produces a fresh, independent iterator; there is no
/// shared cursor to rewind.
#[derive(Clone, Debug)]
pub struct EdgeDescriptors<I> {
    owner: I,
    range: core::ops::Range<usize>,
}

impl<I: Copy> EdgeDescriptors<I> {
    /// Descriptors for positions `0..len` of `owner`'s edge list.
    #[inline]
    pub fn new(owner: I, len: usize) -> Self {
        Self { owner, range: 0..len }
    }

    /// Descriptors for an explicit position range, used by layouts that
    /// address edges globally (CSR offsets).
    #[inline]
    pub fn with_range(owner: I, range: core::ops::Range<usize>) -> Self {
        Self { owner, range }
    }
}

impl<I: Copy> Iterator for EdgeDescriptors<I> {
    type Item = EdgeDescriptor<I>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|p| EdgeDescriptor::new(self.owner, p))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<I: Copy> DoubleEndedIterator for EdgeDescriptors<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|p| EdgeDescriptor::new(self.owner, p))
    }
}

impl<I: Copy> ExactSizeIterator for EdgeDescriptors<I> {}

impl<I: Copy> core::iter::FusedIterator for EdgeDescriptors<I> {}
