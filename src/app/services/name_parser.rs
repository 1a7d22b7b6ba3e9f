//! Legacy encoded-name parser
//!
//! Before the structured `group.yaml` record existed, every test directory
//! name carried the full load recipe:
//!
//! `<date>__<distance>_<calibre>_<rifle>_<case>_<bulletBrand>_<bulletModel>_`
//! `<bulletWeight>gr_<powderBrand>_<powderModel>_<charge>gr_<oal>in_<bto>in_`
//! `<primerBrand>_<primerModel>`
//!
//! The decoded result is only a fallback: the record merger prefers any
//! value the structured file provides. Parsing never fails outward: a name
//! that does not match the pattern degrades to a record carrying only its
//! `test_id` so the corpus scan can continue.

use crate::app::models::TestRecord;
use crate::constants::{DATE_SEPARATOR, LEGACY_FIELD_COUNT};
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// First run of digits with an optional decimal point, e.g. "23.50" in "23.50gr"
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)").expect("numeric token pattern is valid"));

/// Decode a test directory name into a fallback record
///
/// On any mismatch (wrong token count, unparsable numeric token) the result
/// is the minimal record for that directory, with every field other than
/// `test_id` missing. The caller never sees an error.
pub fn parse_directory_name(dir_name: &str) -> TestRecord {
    match try_parse(dir_name) {
        Ok(record) => record,
        Err(error) => {
            debug!("falling back to minimal record for '{}': {}", dir_name, error);
            TestRecord::empty(dir_name)
        }
    }
}

fn try_parse(dir_name: &str) -> Result<TestRecord> {
    let (date, encoded) = dir_name
        .split_once(DATE_SEPARATOR)
        .ok_or_else(|| Error::legacy_name(dir_name, "missing date separator"))?;

    let fields: Vec<&str> = encoded.split('_').collect();
    if fields.len() != LEGACY_FIELD_COUNT {
        return Err(Error::legacy_name(
            dir_name,
            format!(
                "expected {} encoded fields, found {}",
                LEGACY_FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    let mut record = TestRecord::empty(dir_name);
    record.date = Some(date.to_string());
    record.distance_m = Some(numeric_token(dir_name, fields[0])? as u32);
    record.calibre = Some(fields[1].to_string());
    // Rifle names encode spaces as hyphens
    record.rifle = Some(fields[2].replace('-', " "));
    record.case_brand = Some(fields[3].to_string());
    record.bullet_brand = Some(fields[4].to_string());
    record.bullet_model = Some(fields[5].to_string());
    record.bullet_weight_gr = Some(numeric_token(dir_name, fields[6])?);
    record.powder_brand = Some(fields[7].to_string());
    record.powder_model = Some(fields[8].to_string());
    record.powder_charge_gr = Some(numeric_token(dir_name, fields[9])?);
    record.coal_in = Some(numeric_token(dir_name, fields[10])?);
    record.b2o_in = Some(numeric_token(dir_name, fields[11])?);
    record.primer_brand = Some(fields[12].to_string());
    record.primer_model = Some(fields[13].to_string());

    Ok(record)
}

/// Extract the embedded numeric value from a token like "100m" or "23.50gr"
fn numeric_token(dir_name: &str, token: &str) -> Result<f64> {
    let captured = NUMERIC_TOKEN
        .find(token)
        .ok_or_else(|| Error::legacy_name(dir_name, format!("no numeric value in '{token}'")))?;

    captured.as_str().parse::<f64>().map_err(|e| {
        Error::legacy_name(dir_name, format!("bad numeric value '{}': {e}", captured.as_str()))
    })
}
