//! Tests for record file loading, writing, and schema flattening

pub mod writer_tests;
