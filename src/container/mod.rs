//! Bundled graph containers.
//!
//! Each container answers the dispatch protocol from a different tier mix:
//!
//! | Container | Direction | Native beyond the required five |
//! |-----------|-----------|---------------------------------|
//! | `Vec<Vec<I>>` | forward | nothing |
//! | [`DynamicGraph`] | bidirectional | degrees, edge count, partitions, values |
//! | [`CompressedGraph`] | bidirectional | degrees, edge count, sorted-row edge lookup |
//! | `petgraph::graph::DiGraph` | bidirectional | degrees, edge lookup, values |

pub mod compressed_graph;
pub mod dynamic_graph;
#[cfg(feature = "petgraph")]
pub mod petgraph;
pub mod vec_graph;

use core::iter::FusedIterator;
use core::slice;

pub use compressed_graph::CompressedGraph;
pub use dynamic_graph::DynamicGraph;

use crate::adj_list::EdgeDescriptor;

/// Edge handles read from a list of table slots owned by one vertex.
#[derive(Clone, Debug)]
pub struct SlotEdges<'g, I = usize> {
    owner: I,
    slots: slice::Iter<'g, usize>,
}

impl<'g, I: Copy> SlotEdges<'g, I> {
    pub(crate) fn new(owner: I, slots: &'g [usize]) -> Self {
        Self {
            owner,
            slots: slots.iter(),
        }
    }
}

impl<'g, I: Copy> Iterator for SlotEdges<'g, I> {
    type Item = EdgeDescriptor<I>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|&slot| EdgeDescriptor::new(self.owner, slot))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<I: Copy> ExactSizeIterator for SlotEdges<'_, I> {}

impl<I: Copy> FusedIterator for SlotEdges<'_, I> {}
