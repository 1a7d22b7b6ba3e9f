//! Authoritative per-test record file (`group.yaml`)
//!
//! Each test directory may carry a structured YAML file holding the load
//! recipe, environment, and measured results as nested sections. This module
//! owns that file's schema, the tolerant loader that flattens it into a
//! [`TestRecord`](crate::app::models::TestRecord), and the writer that
//! persists user edits back to disk.
//!
//! Loading is deliberately forgiving: an absent, unreadable, or malformed
//! file simply contributes no data, leaving the legacy name parse as the
//! only source. Writing, by contrast, reports failures to the caller.

use std::path::{Path, PathBuf};

use crate::constants::GROUP_FILE_NAME;

pub mod loader;
pub mod schema;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use loader::load_record_file;
pub use schema::RecordFile;
pub use writer::save_record_file;

/// Path of the structured record file inside a test directory
pub fn record_file_path(test_dir: &Path) -> PathBuf {
    test_dir.join(GROUP_FILE_NAME)
}
