//! Custom serde deserializers for the NEO table cells.
//!
//! The table leaves optional values blank instead of omitting the column, so
//! every helper receives a (possibly empty) string and normalizes it into the
//! typed value the model expects.

use serde::{Deserialize, Deserializer, de::Error as _};

/// Deserializes a possibly blank cell into `Option<String>`.
///
/// # Examples
/// ```text
/// Input:  ""      Output: None
/// Input:  "Eros"  Output: Some("Eros")
/// ```
pub fn empty_as_none<'a, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'a>,
{
    let s = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(if s.is_empty() { None } else { Some(s) })
}

/// Deserializes a diameter cell in kilometers.
///
/// Blank cells are unknown diameters. Anything else must be a float, or the
/// whole row is rejected.
///
/// # Examples
/// ```text
/// Input:  ""       Output: None
/// Input:  "16.84"  Output: Some(16.84)
/// Input:  "big"    Output: Err(..)
/// ```
pub fn optional_float<'a, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'a>,
{
    let s = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    s.parse::<f64>()
        .map(Some)
        .map_err(|e| D::Error::custom(format!("invalid float '{}': {}", s, e)))
}

/// Deserializes the single-character `pha` flag. Only `Y` is hazardous.
pub fn flag_to_bool<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.as_deref() == Some("Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "empty_as_none")]
        name: Option<String>,
        #[serde(deserialize_with = "optional_float")]
        diameter: Option<f64>,
        #[serde(deserialize_with = "flag_to_bool")]
        pha: bool,
    }

    fn parse(line: &str) -> Result<Row, csv::Error> {
        let data = format!("name,diameter,pha\n{}\n", line);
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        reader.deserialize().next().expect("one row")
    }

    #[test]
    fn test_blank_cells_are_absent() {
        let row = parse(",,").unwrap();
        assert!(row.name.is_none());
        assert!(row.diameter.is_none());
        assert!(!row.pha);
    }

    #[test]
    fn test_filled_cells() {
        let row = parse("Eros,16.84,Y").unwrap();
        assert_eq!(row.name.as_deref(), Some("Eros"));
        assert_eq!(row.diameter, Some(16.84));
        assert!(row.pha);
    }

    #[test]
    fn test_only_uppercase_y_is_hazardous() {
        for flag in ["N", "y", "yes", "Yes", "1"] {
            assert!(!parse(&format!("x,1,{}", flag)).unwrap().pha, "{}", flag);
        }
    }

    #[test]
    fn test_bad_diameter_is_rejected() {
        assert!(parse("x,big,N").is_err());
    }
}
