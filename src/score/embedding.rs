//! Embedding-similarity scoring
//!
//! Softens mismatch penalties using a precomputed token-similarity lookup:
//! tokens that are distinct but semantically close (per an external
//! embedding model) score a fraction of the full match score instead of the
//! mismatch penalty.
//!
//! The lookup is built once from a square similarity matrix over a fixed
//! vocabulary and is immutable afterwards, so a single scorer can be shared
//! read-only across every worker of a batch run.

use anyhow::{ensure, Result};
use rustc_hash::FxHashMap;

use super::{ScoreMatrix, Scorer};

/// Pack a vocabulary id pair into a single map key
#[inline(always)]
fn pack_pair_key(a: u32, b: u32) -> u64 {
    ((a as u64) << 32) | (b as u64)
}

/// Scoring policy backed by a filtered token-similarity lookup
#[derive(Debug, Clone)]
pub struct EmbeddingScorer {
    match_score: f64,
    mismatch_score: f64,
    factor: f64,
    cutoff: f64,
    vocab: FxHashMap<String, u32>,
    lut: FxHashMap<u64, f64>,
}

impl EmbeddingScorer {
    /// Build a scorer with the default parameters
    /// (match 2.0, mismatch -1.0, factor 1.0, cutoff 0.8).
    ///
    /// `sim` is a flat row-major `keys.len() x keys.len()` similarity
    /// matrix in the key order of `keys`; it is expected to be symmetric.
    pub fn new(keys: &[String], sim: &[f64]) -> Result<Self> {
        Self::with_params(keys, sim, 2.0, -1.0, 1.0, 0.8)
    }

    /// Build a scorer with explicit parameters.
    ///
    /// The lookup keeps only token pairs with similarity >= `cutoff`,
    /// excluding self-pairs, and is symmetric by construction. Malformed
    /// input (matrix size not matching the vocabulary, duplicate keys) is
    /// rejected here, before any alignment work can start.
    pub fn with_params(
        keys: &[String],
        sim: &[f64],
        match_score: f64,
        mismatch_score: f64,
        factor: f64,
        cutoff: f64,
    ) -> Result<Self> {
        let n = keys.len();
        ensure!(
            sim.len() == n * n,
            "similarity matrix has {} entries, expected {} for {} keys",
            sim.len(),
            n * n,
            n
        );

        let mut vocab = FxHashMap::default();
        for (idx, key) in keys.iter().enumerate() {
            let previous = vocab.insert(key.clone(), idx as u32);
            ensure!(previous.is_none(), "duplicate vocabulary key: {:?}", key);
        }

        let mut lut = FxHashMap::default();
        for i in 0..n {
            for j in (i + 1)..n {
                let s = sim[i * n + j];
                if s >= cutoff {
                    lut.insert(pack_pair_key(i as u32, j as u32), s);
                    lut.insert(pack_pair_key(j as u32, i as u32), s);
                }
            }
        }

        Ok(Self {
            match_score,
            mismatch_score,
            factor,
            cutoff,
            vocab,
            lut,
        })
    }

    /// Filtered similarity for a token pair, if it survived the cutoff.
    ///
    /// Self-pairs and pairs below the cutoff are absent. Symmetric:
    /// `similarity(a, b) == similarity(b, a)`.
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let ia = *self.vocab.get(a)?;
        let ib = *self.vocab.get(b)?;
        self.lut.get(&pack_pair_key(ia, ib)).copied()
    }

    /// Similarity cutoff the lookup was filtered with
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Number of directed pairs retained in the lookup
    pub fn lookup_len(&self) -> usize {
        self.lut.len()
    }
}

impl Scorer for EmbeddingScorer {
    fn get_scores(&self, s1: &[String], s2: &[String]) -> ScoreMatrix {
        // Resolve vocabulary ids once per sequence; the O(n1*n2) fill then
        // only touches the integer-keyed lookup.
        let ids1: Vec<Option<u32>> = s1.iter().map(|t| self.vocab.get(t).copied()).collect();
        let ids2: Vec<Option<u32>> = s2.iter().map(|t| self.vocab.get(t).copied()).collect();

        let mut scores = ScoreMatrix::new(s1.len(), s2.len());
        for (i, a) in s1.iter().enumerate() {
            for (j, b) in s2.iter().enumerate() {
                let score = if a == b {
                    self.match_score
                } else if let (Some(ia), Some(ib)) = (ids1[i], ids2[j]) {
                    match self.lut.get(&pack_pair_key(ia, ib)) {
                        Some(&sim) => self.match_score * sim.powf(self.factor),
                        None => self.mismatch_score,
                    }
                } else {
                    self.mismatch_score
                };
                scores.set(i, j, score);
            }
        }
        scores
    }
}
