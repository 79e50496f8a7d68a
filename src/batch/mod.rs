//! Batch orchestration of pairwise alignments
//!
//! Fans the per-pair alignment out over two document collections and
//! aggregates the scores into a sparse matrix. The workload is the full
//! cross product, or the coordinates of a [`CandidateSet`] when a cheap
//! coarse filter has already pruned the search space.
//!
//! Everything a worker touches during the parallel phase - both
//! collections, the scoring policy, the gap parameters - is immutable and
//! shared by reference, so no locking is needed; each pair is a stateless,
//! side-effect-free unit of work and the result cell is keyed by its own
//! (i, j) coordinate, making completion order irrelevant.
//!
//! Failure policy: a failure inside any single pair aborts the whole
//! batch with an error naming the pair, in both the sequential and pooled
//! paths; no partial matrix is returned.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;

use crate::align::{local_alignment, GapParams};
use crate::score::Scorer;
use crate::sparse::{CandidateSet, SparseScoreMatrix};

/// Options for a batch run
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Worker count: 1 runs sequentially, n > 1 uses a pool of n threads,
    /// and any value <= 0 resolves to all available hardware parallelism
    /// (resolved once per invocation).
    pub processes: i32,
    /// Show a progress bar over the candidate pairs
    pub progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            processes: 1,
            progress: false,
        }
    }
}

fn progress_bar(len: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap(),
    );
    bar
}

/// One unit of work: align the (i, j) pair and return its keyed score
fn align_pair<S: Scorer>(
    queries: &[Vec<String>],
    index: &[Vec<String>],
    i: usize,
    j: usize,
    scorer: &S,
    gaps: &GapParams,
) -> Result<(usize, usize, f64)> {
    let query = queries.get(i).with_context(|| {
        format!(
            "candidate pair ({}, {}) outside query collection of size {}",
            i,
            j,
            queries.len()
        )
    })?;
    let doc = index.get(j).with_context(|| {
        format!(
            "candidate pair ({}, {}) outside index collection of size {}",
            i,
            j,
            index.len()
        )
    })?;

    let score = local_alignment(query, doc, scorer, gaps).score;
    Ok((i, j, score))
}

/// Align every candidate pair of two collections into a sparse score matrix
///
/// `index = None` aligns the query collection against itself. Without a
/// candidate set the full `queries.len() x index.len()` cross product is
/// evaluated. The returned matrix is zero everywhere outside the evaluated
/// set; zero scores inside it are not stored either.
pub fn align_collections<S: Scorer + Sync>(
    queries: &[Vec<String>],
    index: Option<&[Vec<String>]>,
    candidates: Option<&CandidateSet>,
    scorer: &S,
    gaps: &GapParams,
    options: &BatchOptions,
) -> Result<SparseScoreMatrix> {
    let index = index.unwrap_or(queries);

    let pairs: Vec<(usize, usize)> = match candidates {
        Some(set) => set.iter().collect(),
        None => (0..queries.len())
            .flat_map(|i| (0..index.len()).map(move |j| (i, j)))
            .collect(),
    };

    let processes = if options.processes <= 0 {
        num_cpus::get()
    } else {
        options.processes as usize
    };
    debug!(
        "aligning {} candidate pairs ({} x {} documents) on {} worker(s)",
        pairs.len(),
        queries.len(),
        index.len(),
        processes
    );

    let bar = progress_bar(pairs.len() as u64, options.progress);

    let triplets: Vec<(usize, usize, f64)> = if processes == 1 {
        let mut out = Vec::with_capacity(pairs.len());
        for &(i, j) in &pairs {
            let triplet = align_pair(queries, index, i, j, scorer, gaps)?;
            bar.inc(1);
            out.push(triplet);
        }
        out
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(processes)
            .build()
            .context("failed to build alignment worker pool")?;
        pool.install(|| {
            pairs
                .par_iter()
                .map(|&(i, j)| {
                    let triplet = align_pair(queries, index, i, j, scorer, gaps);
                    bar.inc(1);
                    triplet
                })
                .collect::<Result<Vec<_>>>()
        })?
    };
    bar.finish_and_clear();

    let triplets = triplets
        .into_iter()
        .filter(|&(_, _, score)| score != 0.0)
        .collect();

    Ok(SparseScoreMatrix::from_triplets(
        queries.len(),
        index.len(),
        triplets,
    ))
}
