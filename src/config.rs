//! Search configuration shared by the DFS, BFS and topological sort views.

use serde::{Deserialize, Serialize};

/// Tuning knobs for a single traversal.
///
/// The defaults reproduce an unbounded traversal; nothing here changes the
/// visit order, only how far a search descends and how much it reserves up
/// front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Vertices at this depth are still yielded, but their edges are not
    /// explored. `None` explores the whole reachable subgraph.
    pub max_depth: Option<usize>,
    /// Initial capacity of the stack or queue.
    pub reserve: usize,
}

impl SearchOptions {
    /// Creates the default (unbounded) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum depth to expand.
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(max);
        self
    }

    /// Sets the initial stack/queue capacity.
    pub fn with_reserve(mut self, reserve: usize) -> Self {
        self.reserve = reserve;
        self
    }

    /// Parses options from a JSON document; missing fields take defaults.
    ///
    /// # Errors
    /// Returns the `serde_json` error when the document is not valid JSON or
    /// a field has the wrong type.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Returns `true` if a vertex at `depth` may have its edges explored.
    #[inline]
    pub(crate) fn expands(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }
}
