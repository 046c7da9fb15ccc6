//! Extraction of NEOs from the CSV table and close approaches from the CAD
//! JSON record list.
//!
//! Both loaders are all-or-nothing: the first malformed row aborts the load
//! and no partial collection is returned.

use crate::error::{Error, Result};
use crate::models::{CloseApproach, NearEarthObject};
use serde::Deserialize;
use serde_json::Value;
use std::{collections::HashMap, fs, path::Path};

const DESIGNATION_FIELD: usize = 0;
const TIME_FIELD: usize = 3;
const DISTANCE_FIELD: usize = 4;
const VELOCITY_FIELD: usize = 7;

/// Top-level layout of a CAD file. `fields` only documents the columns.
#[derive(Debug, Deserialize)]
struct CadFile {
    data: Vec<Vec<Value>>,
}

/// Reads the NEO table into a map keyed by designation.
///
/// Only the `pdes`, `name`, `diameter` and `pha` columns are read; any other
/// column is ignored. A repeated designation replaces the earlier row.
///
/// # Errors
/// [`Error::Io`] if the file cannot be read, [`Error::Format`] for a missing
/// column or a non-numeric diameter.
pub fn load_neos(path: &Path) -> Result<HashMap<String, NearEarthObject>> {
    tracing::debug!("Loading NEOs from '{}'", path.display());

    let file = fs::File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new().from_reader(file);

    let mut neos = HashMap::new();
    for record in reader.deserialize::<NearEarthObject>() {
        let neo = record.map_err(|e| Error::from_csv(path, e))?.normalized();
        if let Some(previous) = neos.insert(neo.designation().to_string(), neo) {
            tracing::debug!(
                "Duplicate designation '{}' in '{}', keeping the later row",
                previous.designation(),
                path.display()
            );
        }
    }

    tracing::debug!("Loaded {} NEOs from '{}'", neos.len(), path.display());
    Ok(neos)
}

/// Reads the CAD record list into approaches, in source order.
///
/// Fields are positional: designation at 0, time at 3, distance at 4 and
/// velocity at 7. A `null` designation becomes the empty string.
///
/// # Errors
/// [`Error::Io`] if the file cannot be read, [`Error::Format`] for malformed
/// JSON, short records, bad times or non-numeric distance/velocity.
pub fn load_approaches(path: &Path) -> Result<Vec<CloseApproach>> {
    tracing::debug!("Loading close approaches from '{}'", path.display());

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let cad: CadFile = serde_json::from_str(&content).map_err(|e| Error::from_json(path, e))?;

    let approaches = cad
        .data
        .iter()
        .enumerate()
        .map(|(i, record)| {
            parse_record(record).map_err(|e| match e {
                Error::Format(msg) => {
                    Error::Format(format!("{}: record {}: {}", path.display(), i, msg))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Loaded {} close approaches from '{}'",
        approaches.len(),
        path.display()
    );
    Ok(approaches)
}

fn parse_record(record: &[Value]) -> Result<CloseApproach> {
    if record.len() <= VELOCITY_FIELD {
        return Err(Error::Format(format!(
            "expected at least {} fields, found {}",
            VELOCITY_FIELD + 1,
            record.len()
        )));
    }

    let designation = match &record[DESIGNATION_FIELD] {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let time = match &record[TIME_FIELD] {
        Value::Null => None,
        Value::String(s) => Some(s.as_str()),
        other => {
            return Err(Error::Format(format!(
                "approach time must be a string, found {}",
                other
            )));
        }
    };
    let distance = parse_float(&record[DISTANCE_FIELD], "distance")?;
    let velocity = parse_float(&record[VELOCITY_FIELD], "velocity")?;

    CloseApproach::new(designation, time, distance, velocity)
}

/// CAD files carry numbers as strings, but bare JSON numbers are accepted too.
fn parse_float(value: &Value, field: &str) -> Result<f64> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::Format(format!("{} '{}' is not a number", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Vec<Value> {
        value.as_array().unwrap().clone()
    }

    #[test]
    fn test_parse_record() {
        let ca = parse_record(&record(json!([
            "433", "1", "2415020.5", "1900-Jan-01 00:00", "0.15", "0.149", "0.151", "5.5",
            "5.49", "< 00:01", "10.4"
        ])))
        .unwrap();
        assert_eq!(ca.designation(), "433");
        assert_eq!(ca.time_str(), "1900-01-01 00:00");
        assert_eq!(ca.distance(), 0.15);
        assert_eq!(ca.velocity(), 5.5);
    }

    #[test]
    fn test_null_designation_is_empty() {
        let ca = parse_record(&record(json!([
            null, "1", "0", "2000-Mar-03 12:30", "0.2", "0", "0", 7.25
        ])))
        .unwrap();
        assert_eq!(ca.designation(), "");
        assert_eq!(ca.velocity(), 7.25);
    }

    #[test]
    fn test_short_record_is_format_error() {
        let err = parse_record(&record(json!(["433", "1", "0", "1900-Jan-01 00:00"]))).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_non_numeric_distance_is_format_error() {
        let err = parse_record(&record(json!([
            "433", "1", "0", "1900-Jan-01 00:00", "far", "0", "0", "5.5"
        ])))
        .unwrap_err();
        assert!(matches!(err, Error::Format(msg) if msg.contains("distance")));
    }
}
