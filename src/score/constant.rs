use super::{ScoreMatrix, Scorer};

/// Flat match/mismatch scoring
#[derive(Debug, Clone, Copy)]
pub struct ConstantScorer {
    /// Score for identical tokens
    pub match_score: f64,
    /// Score for differing tokens
    pub mismatch_score: f64,
}

impl Default for ConstantScorer {
    fn default() -> Self {
        Self {
            match_score: 2.0,
            mismatch_score: -1.0,
        }
    }
}

impl ConstantScorer {
    pub fn new(match_score: f64, mismatch_score: f64) -> Self {
        Self {
            match_score,
            mismatch_score,
        }
    }
}

impl Scorer for ConstantScorer {
    fn get_scores(&self, s1: &[String], s2: &[String]) -> ScoreMatrix {
        let mut scores = ScoreMatrix::new(s1.len(), s2.len());
        for (i, a) in s1.iter().enumerate() {
            for (j, b) in s2.iter().enumerate() {
                let score = if a == b {
                    self.match_score
                } else {
                    self.mismatch_score
                };
                scores.set(i, j, score);
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_constant_scores() {
        let scorer = ConstantScorer::new(2.0, -1.0);
        let s1 = toks("a b");
        let s2 = toks("b b c");
        let m = scorer.get_scores(&s1, &s2);

        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(0, 0), -1.0); // a vs b
        assert_eq!(m.get(1, 0), 2.0); // b vs b
        assert_eq!(m.get(1, 1), 2.0);
        assert_eq!(m.get(1, 2), -1.0);
    }

    #[test]
    fn test_default_parameters() {
        let scorer = ConstantScorer::default();
        assert_eq!(scorer.match_score, 2.0);
        assert_eq!(scorer.mismatch_score, -1.0);
    }
}
