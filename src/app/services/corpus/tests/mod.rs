//! Tests for corpus building
