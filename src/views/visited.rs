//! Dense visited tracking for search views.
//!
//! A word-packed bitset keyed by the dense vertex index. It is sized once, at
//! traversal start, from the graph's index bound and never grows.

/// A dense, word-packed visited set.
#[derive(Clone, Debug, Default)]
pub struct VisitedTracker {
    bits: usize,
    words: Vec<usize>,
}

impl VisitedTracker {
    /// Creates a tracker for `bits` vertices, none visited.
    pub fn new(bits: usize) -> Self {
        let word_bits = usize::BITS as usize;
        Self {
            bits,
            words: vec![0; bits.div_ceil(word_bits)],
        }
    }

    /// Number of vertices tracked.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.bits
    }

    /// Returns whether `index` has been marked.
    ///
    /// # Panics
    /// Panics if `index >= size()`.
    #[inline(always)]
    pub fn is_visited(&self, index: usize) -> bool {
        assert!(index < self.bits, "vertex index {index} out of range for {} tracked", self.bits);
        let (word, mask) = bit_word_mask(index);
        (self.words[word] & mask) != 0
    }

    /// Marks `index` as visited.
    ///
    /// # Panics
    /// Panics if `index >= size()`.
    #[inline(always)]
    pub fn mark_visited(&mut self, index: usize) {
        self.try_visit(index);
    }

    /// Marks `index` and returns `true` iff it was not visited before.
    ///
    /// # Panics
    /// Panics if `index >= size()`.
    #[inline(always)]
    pub fn try_visit(&mut self, index: usize) -> bool {
        assert!(index < self.bits, "vertex index {index} out of range for {} tracked", self.bits);
        let (word, mask) = bit_word_mask(index);
        let prev = self.words[word];
        self.words[word] = prev | mask;
        (prev & mask) == 0
    }

    /// Clears every mark.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }

    /// Number of marked vertices.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    let word_bits = usize::BITS as usize;
    (bit / word_bits, 1usize << (bit % word_bits))
}

#[cfg(test)]
mod tests {
    use super::VisitedTracker;

    #[test]
    fn mark_query_reset_across_word_boundary() {
        let mut v = VisitedTracker::new(130);
        assert_eq!(v.size(), 130);
        assert!(!v.is_visited(0));

        assert!(v.try_visit(0));
        assert!(!v.try_visit(0));
        v.mark_visited(129);
        assert!(v.is_visited(129));
        assert!(!v.is_visited(64));
        assert_eq!(v.count(), 2);

        v.reset();
        assert!(!v.is_visited(0));
        assert!(!v.is_visited(129));
        assert_eq!(v.count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn marking_past_the_end_panics() {
        let mut v = VisitedTracker::new(3);
        v.mark_visited(3);
    }

    #[test]
    fn empty_tracker() {
        let v = VisitedTracker::new(0);
        assert_eq!(v.size(), 0);
        assert_eq!(v.count(), 0);
    }
}
