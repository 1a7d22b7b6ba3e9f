//! Declarative filtering over the corpus table
//!
//! A filter pass is an ordered set of independent predicates combined with
//! logical AND. Rows with a missing value for a range predicate's field are
//! excluded, never treated as in-range. The engine additionally owns the
//! per-row selection state so a user's manual row selection survives
//! repeated filter tightening and loosening within a session.

pub mod bounds;
pub mod engine;
pub mod predicate;

#[cfg(test)]
pub mod tests;

pub use engine::FilterEngine;
pub use predicate::Predicate;
