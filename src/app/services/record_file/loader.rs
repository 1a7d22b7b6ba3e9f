//! Tolerant loading of the structured record file
//!
//! A test directory without a readable, well-formed `group.yaml` is not an
//! error; the file simply contributes no data and the legacy name parse
//! remains the only source. Callers must not conflate "file absent" with
//! "field present and numerically zero": absence flattens to missing
//! fields, never zeros.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::{record_file_path, schema::RecordFile};
use crate::app::models::TestRecord;
use crate::{Error, Result};

/// Load and flatten the structured record file of one test directory
///
/// Returns a record whose `test_id` is the directory name. If the file is
/// absent, unreadable, or does not parse as the expected mapping, every
/// other field is missing; the failure is logged and never propagated.
pub fn load_record_file(test_dir: &Path) -> TestRecord {
    let test_id = test_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match try_load(test_dir) {
        Ok(Some(file)) => file.flatten(&test_id),
        Ok(None) => {
            debug!("no record file in '{}'", test_dir.display());
            TestRecord::empty(test_id)
        }
        Err(error) => {
            warn!("record file unusable, treating as empty: {}", error);
            TestRecord::empty(test_id)
        }
    }
}

/// Read and parse the record file, distinguishing "absent" from "broken"
fn try_load(test_dir: &Path) -> Result<Option<RecordFile>> {
    let path = record_file_path(test_dir);
    if !path.exists() {
        return Ok(None);
    }

    let text = fs::read_to_string(&path)
        .map_err(|e| Error::io(format!("reading '{}'", path.display()), e))?;

    let file: RecordFile = serde_yaml::from_str(&text).map_err(|e| {
        Error::record_file(
            path.display().to_string(),
            "not a valid record mapping",
            Some(e),
        )
    })?;

    Ok(Some(file))
}
