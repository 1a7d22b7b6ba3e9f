//! Persisting user edits back to the record file
//!
//! Unlike loading, saving is a user-initiated action whose failure must be
//! surfaced, so this is the one record-file path that returns a `Result`.

use std::fs;
use std::path::Path;

use tracing::info;

use super::{record_file_path, schema::RecordFile};
use crate::app::models::TestRecord;
use crate::{Error, Result};

/// Write a record back to its directory's `group.yaml`
///
/// The nested on-disk shape is rebuilt from the flat record; sections with
/// no data are omitted. An existing file is replaced wholesale.
pub fn save_record_file(test_dir: &Path, record: &TestRecord) -> Result<()> {
    let path = record_file_path(test_dir);
    let file = RecordFile::from_record(record);

    let yaml = serde_yaml::to_string(&file).map_err(|e| {
        Error::record_file(
            path.display().to_string(),
            "serializing record to YAML",
            Some(e),
        )
    })?;

    fs::write(&path, yaml).map_err(|e| Error::io(format!("writing '{}'", path.display()), e))?;

    info!("saved record file for '{}'", record.test_id);
    Ok(())
}
