//! Value functions.
//!
//! A value function maps a graph and one produced element to a value;
//! [`GraphView::with_value`] attaches one to any view, turning each element
//! `x` into `(x, f(g, x))`. The function is `Fn + Clone`: it cannot carry
//! mutable state, so a valued view composes with `take`, `filter`, `map` and
//! the rest of [`Iterator`] the same way the bare view does.
//!
//! ```
//! use graph_traverse::container::DynamicGraph;
//! use graph_traverse::views::{vertices_dfs, GraphView};
//! use graph_traverse::VertexValues;
//!
//! let mut g: DynamicGraph<&str> = DynamicGraph::new();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! g.add_edge(a, b, ()).unwrap();
//!
//! let names: Vec<&str> = vertices_dfs(&g, a)
//!     .with_value(|g, v| *g.vertex_value(v))
//!     .map(|(_, name)| name)
//!     .collect();
//! assert_eq!(names, ["a", "b"]);
//! ```

use crate::views::search::{CancelSearch, Search};

/// A view over a borrowed graph.
pub trait GraphView<'g>: Iterator + Sized {
    /// The viewed graph type.
    type Graph: ?Sized + 'g;

    /// The viewed graph.
    fn graph(&self) -> &'g Self::Graph;

    /// Pairs every element with `f(graph, element)`.
    fn with_value<F, R>(self, f: F) -> Valued<'g, Self, F>
    where
        F: Fn(&'g Self::Graph, Self::Item) -> R + Clone,
        Self::Item: Clone,
    {
        Valued {
            graph: GraphView::graph(&self),
            view: self,
            f,
        }
    }
}

/// A view whose elements carry a computed value, see
/// [`GraphView::with_value`].
pub struct Valued<'g, V: GraphView<'g>, F> {
    view: V,
    graph: &'g V::Graph,
    f: F,
}

impl<'g, V: GraphView<'g>, F> Valued<'g, V, F> {
    /// The wrapped view.
    pub fn inner(&self) -> &V {
        &self.view
    }

    /// Unwraps the view, dropping the value function.
    pub fn into_inner(self) -> V {
        self.view
    }
}

impl<'g, V, F, R> Iterator for Valued<'g, V, F>
where
    V: GraphView<'g>,
    V::Item: Clone,
    F: Fn(&'g V::Graph, V::Item) -> R,
{
    type Item = (V::Item, R);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.view.next()?;
        let value = (self.f)(self.graph, item.clone());
        Some((item, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.view.size_hint()
    }
}

impl<'g, V, F, R> GraphView<'g> for Valued<'g, V, F>
where
    V: GraphView<'g>,
    V::Item: Clone,
    F: Fn(&'g V::Graph, V::Item) -> R,
{
    type Graph = V::Graph;

    fn graph(&self) -> &'g V::Graph {
        self.graph
    }
}

impl<'g, V: GraphView<'g> + Search, F> Search for Valued<'g, V, F> {
    fn cancel(&mut self, signal: CancelSearch) {
        self.view.cancel(signal);
    }

    fn cancel_state(&self) -> CancelSearch {
        self.view.cancel_state()
    }

    fn depth(&self) -> usize {
        self.view.depth()
    }

    fn size(&self) -> usize {
        self.view.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adj_list::{AdjacencyList, EdgeValues};
    use crate::container::DynamicGraph;
    use crate::views::{edges_bfs, vertices_bfs, vertices_dfs};

    #[test]
    fn values_ride_along_with_search_control() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![], vec![]];
        let mut dfs = vertices_dfs(&g, 0).with_value(|g, v| g.degree(v));
        let mut seen = Vec::new();
        while let Some((v, degree)) = dfs.next() {
            seen.push((v.id(), degree, dfs.depth()));
            if v.id() == 1 {
                dfs.cancel(CancelSearch::CancelBranch);
            }
        }
        assert_eq!(seen, vec![(0, 2, 0), (1, 1, 1), (2, 0, 1)]);
        assert_eq!(dfs.size(), 3);
    }

    #[test]
    fn edge_values_through_bfs() {
        let g: DynamicGraph<(), u32> = DynamicGraph::from_edges(3, [(0, 1, 10), (0, 2, 20), (1, 2, 30)]).unwrap();
        let weights: Vec<u32> = edges_bfs(&g, 0)
            .with_value(|g, se| *g.edge_value(se.edge))
            .map(|(_, w)| w)
            .collect();
        assert_eq!(weights, vec![10, 20]);
    }

    #[test]
    fn composes_with_iterator_adaptors() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![3], vec![]];
        let doubled: Vec<usize> = vertices_bfs(&g, 0)
            .with_value(|g, v| g.vertex_id(v) * 2)
            .filter(|(_, x)| x % 4 == 0)
            .map(|(_, x)| x)
            .take(1)
            .collect();
        assert_eq!(doubled, vec![0]);
    }

    #[test]
    fn values_stack() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![]];
        let pairs: Vec<(usize, usize)> = vertices_dfs(&g, 0)
            .with_value(|g, v| g.degree(v))
            .with_value(|_, (v, _)| v.id() + 100)
            .map(|((_, deg), id)| (deg, id))
            .collect();
        assert_eq!(pairs, vec![(1, 100), (0, 101)]);
    }
}
