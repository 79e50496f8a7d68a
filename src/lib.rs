//! relign - local alignment engine for text reuse detection
//!
//! Computes, for pairs of token sequences, the best-scoring locally aligned
//! subsequence (Smith-Waterman style dynamic program with distinct
//! gap-open/gap-extend costs, free terminal gaps, and pluggable
//! substitution scoring), and fans the computation out across many
//! document pairs into a sparse similarity matrix.
//!
//! Token sequences come from an external preprocessing stage; candidate
//! pair sets come from an external coarse set-similarity filter; the
//! embedding similarity matrix comes from an external embedding loader.
//! This crate owns the scoring policies, the alignment dynamic program and
//! traceback, the alignment renderers, and the parallel batch scheduler.

pub mod align;
pub mod batch;
pub mod render;
pub mod score;
pub mod sparse;

pub use align::{local_alignment, GapParams, LocalAlignment};
pub use batch::{align_collections, BatchOptions};
pub use score::{ConstantScorer, EmbeddingScorer, ScoreMatrix, Scorer};
pub use sparse::{CandidateSet, SparseScoreMatrix};
