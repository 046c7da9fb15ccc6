//! Writers that flatten linked `(approach, neo)` pairs to CSV or JSON.
//!
//! The two entry points are independent; choosing between them by file
//! extension is left to the caller. Rows are written in iteration order.

use crate::error::{Error, Result};
use crate::helpers::{datetime_to_iso, datetime_to_str};
use crate::models::{CloseApproach, NearEarthObject};
use serde::Serialize;
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

/// Header of the CSV output, in column order.
pub const CSV_FIELDNAMES: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Stand-in for an unknown diameter in the JSON output.
pub const UNKNOWN_DIAMETER: &str = "-";

#[derive(Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: &'static str,
}

impl<'a> CsvRow<'a> {
    fn new(approach: &'a CloseApproach, neo: &'a NearEarthObject) -> Self {
        CsvRow {
            datetime_utc: approach.time().map(datetime_to_str).unwrap_or_default(),
            distance_au: approach.distance(),
            velocity_km_s: approach.velocity(),
            designation: neo.designation(),
            name: neo.name().unwrap_or_default(),
            diameter_km: neo.diameter(),
            potentially_hazardous: if neo.hazardous() { "True" } else { "False" },
        }
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    close_approach: JsonApproach,
    neo: JsonNeo<'a>,
}

#[derive(Serialize)]
struct JsonApproach {
    datetime_utc: Option<String>,
    distance_au: f64,
    velocity_km_s: f64,
}

#[derive(Serialize)]
struct JsonNeo<'a> {
    designation: &'a str,
    name: Option<&'a str>,
    diameter_km: JsonDiameter,
    potentially_hazardous: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonDiameter {
    Known(f64),
    Unknown(&'static str),
}

impl<'a> JsonRecord<'a> {
    fn new(approach: &'a CloseApproach, neo: &'a NearEarthObject) -> Self {
        JsonRecord {
            close_approach: JsonApproach {
                datetime_utc: approach.time().map(datetime_to_iso),
                distance_au: approach.distance(),
                velocity_km_s: approach.velocity(),
            },
            neo: JsonNeo {
                designation: neo.designation(),
                name: neo.name(),
                diameter_km: neo
                    .diameter()
                    .map_or(JsonDiameter::Unknown(UNKNOWN_DIAMETER), JsonDiameter::Known),
                potentially_hazardous: neo.hazardous(),
            },
        }
    }
}

/// Writes linked pairs as CSV with a fixed seven-column header.
///
/// The file is overwritten. An empty input produces a header-only file.
/// Floats are written unrounded; a missing name or diameter is an empty cell.
pub fn write_to_csv<'a, I>(results: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = (&'a CloseApproach, &'a NearEarthObject)>,
{
    let file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(CSV_FIELDNAMES)
        .map_err(|e| Error::from_csv(path, e))?;

    let mut count = 0;
    for (approach, neo) in results {
        writer
            .serialize(CsvRow::new(approach, neo))
            .map_err(|e| Error::from_csv(path, e))?;
        count += 1;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;

    tracing::debug!("Wrote {} rows to '{}'", count, path.display());
    Ok(count)
}

/// Writes linked pairs as a pretty-printed JSON array (2-space indent).
///
/// The file is overwritten. An empty input produces `[]`. An unknown
/// diameter is written as `"-"`, a missing name as `null`.
pub fn write_to_json<'a, I>(results: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = (&'a CloseApproach, &'a NearEarthObject)>,
{
    let records: Vec<JsonRecord> = results
        .into_iter()
        .map(|(approach, neo)| JsonRecord::new(approach, neo))
        .collect();

    let file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records).map_err(|e| Error::from_json(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))?;

    tracing::debug!("Wrote {} records to '{}'", records.len(), path.display());
    Ok(records.len())
}
