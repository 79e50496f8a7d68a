//! Local alignment of token sequences
//!
//! Smith-Waterman style dynamic program with distinct gap-open and
//! gap-extend costs, free terminal gaps, and a pluggable substitution
//! scoring policy. The result is an index-level alignment: which positions
//! of the two sequences line up, and where gaps fall.

pub mod engine;
pub mod result;
pub mod traceback;

pub use engine::{local_alignment, GapParams};
pub use result::LocalAlignment;
