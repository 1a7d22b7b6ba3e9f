//! Corpus building: one ordered table from a whole tests directory
//!
//! The corpus is rebuilt from scratch on every scan; there is no
//! incremental mutation. Each immediate, non-hidden subdirectory of the
//! root becomes one row via name parse → record file load → merge, and a
//! failure in any single directory degrades that row without aborting the
//! rest of the scan.

pub mod builder;

#[cfg(test)]
pub mod tests;

pub use builder::{ScanStats, build_corpus, build_corpus_with_stats};
