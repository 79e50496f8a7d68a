/// Result of a local alignment between two token sequences
///
/// `a1` and `a2` are equal-length columns over the aligned core: entry k
/// holds the source index consumed from the respective sequence at column
/// k, or `None` for a gap. Unaligned flanking regions are absent, not
/// padded with gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalAlignment {
    /// Index column for the first sequence (`None` = gap)
    pub a1: Vec<Option<usize>>,
    /// Index column for the second sequence (`None` = gap)
    pub a2: Vec<Option<usize>>,
    /// Cumulative score of the aligned core
    pub score: f64,
}

impl LocalAlignment {
    /// The trivial alignment of degenerate (empty) input
    pub fn empty() -> Self {
        Self {
            a1: Vec::new(),
            a2: Vec::new(),
            score: 0.0,
        }
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.a1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a1.is_empty()
    }

    /// Columns where both sequences contribute an index (match or
    /// substitution, never a gap)
    pub fn matched_pairs(&self) -> Vec<(usize, usize)> {
        self.a1
            .iter()
            .zip(self.a2.iter())
            .filter_map(|(i, j)| Some(((*i)?, (*j)?)))
            .collect()
    }

    /// Number of gap columns on either side
    pub fn gaps(&self) -> usize {
        self.a1
            .iter()
            .zip(self.a2.iter())
            .filter(|(i, j)| i.is_none() || j.is_none())
            .count()
    }
}
