use super::neo::NearEarthObject;
use crate::error::{Error, Result};
use crate::helpers::{datetime_to_str, parse_approach_time};
use chrono::NaiveDateTime;
use std::fmt;

/// A single close approach of an NEO to Earth.
///
/// The owning object is referenced by designation only. `neo` stays `None`
/// until the linking pass finds a matching object.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation: String,
    time: Option<NaiveDateTime>,
    distance: f64,
    velocity: f64,
    neo: Option<String>,
}

impl CloseApproach {
    /// Creates an unlinked approach, parsing `time` from the compact source format.
    ///
    /// # Errors
    /// Returns [`Error::Format`] if `time` is present but malformed.
    pub fn new(
        designation: impl Into<String>,
        time: Option<&str>,
        distance: f64,
        velocity: f64,
    ) -> Result<Self> {
        let time = time.map(parse_approach_time).transpose()?;
        Ok(CloseApproach {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        })
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> Option<&NaiveDateTime> {
        self.time.as_ref()
    }

    /// Nominal approach distance in astronomical units.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity in km/s.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Designation of the linked object, if linking found one.
    pub fn neo(&self) -> Option<&str> {
        self.neo.as_deref()
    }

    pub fn is_linked(&self) -> bool {
        self.neo.is_some()
    }

    /// Approach time as `YYYY-MM-DD HH:MM`, or `"unknown time"`.
    pub fn time_str(&self) -> String {
        self.time
            .as_ref()
            .map(datetime_to_str)
            .unwrap_or_else(|| String::from("unknown time"))
    }

    /// Sets the back-reference to `neo`. An approach is linked at most once,
    /// and only to the object carrying its own designation.
    pub(crate) fn link_to(&mut self, neo: &NearEarthObject) -> Result<()> {
        if neo.designation() != self.designation {
            return Err(Error::Link(format!(
                "approach for '{}' cannot be linked to NEO '{}'",
                self.designation,
                neo.designation()
            )));
        }
        if let Some(existing) = &self.neo {
            return Err(Error::Link(format!(
                "approach for '{}' is already linked to NEO '{}'",
                self.designation, existing
            )));
        }
        self.neo = Some(neo.designation().to_string());
        Ok(())
    }

    /// Human-readable line using `label` to name the object.
    pub fn describe_as(&self, label: &str) -> String {
        format!(
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            label,
            self.distance,
            self.velocity
        )
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_as(&self.designation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approach() -> CloseApproach {
        CloseApproach::new("433", Some("1900-Jan-01 00:00"), 0.15, 5.5).unwrap()
    }

    #[test]
    fn test_new_is_unlinked() {
        let ca = approach();
        assert!(!ca.is_linked());
        assert!(ca.neo().is_none());
        assert_eq!(ca.time_str(), "1900-01-01 00:00");
    }

    #[test]
    fn test_missing_time() {
        let ca = CloseApproach::new("433", None, 0.15, 5.5).unwrap();
        assert!(ca.time().is_none());
        assert_eq!(ca.time_str(), "unknown time");
    }

    #[test]
    fn test_malformed_time_is_format_error() {
        let err = CloseApproach::new("433", Some("1900-01-01"), 0.15, 5.5).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            approach().to_string(),
            "On 1900-01-01 00:00, '433' approaches Earth at a distance of 0.15 au and a velocity of 5.50 km/s."
        );
    }

    #[test]
    fn test_link_once() {
        let neo = NearEarthObject::new("433", Some("Eros"), Some(16.84), false);
        let mut ca = approach();
        ca.link_to(&neo).unwrap();
        assert_eq!(ca.neo(), Some("433"));
        assert!(matches!(ca.link_to(&neo), Err(Error::Link(_))));
    }

    #[test]
    fn test_link_rejects_other_designation() {
        let other = NearEarthObject::new("99942", Some("Apophis"), None, true);
        let mut ca = approach();
        assert!(matches!(ca.link_to(&other), Err(Error::Link(_))));
        assert!(!ca.is_linked());
    }
}
