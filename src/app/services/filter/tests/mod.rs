//! Tests for predicates, the filter engine, and bounds derivation

pub mod bounds_tests;
pub mod engine_tests;
