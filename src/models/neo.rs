use super::serde_helpers::{empty_as_none, flag_to_bool, optional_float};
use serde::Deserialize;
use std::{collections::BTreeSet, fmt};

/// A near-Earth object, keyed by its primary designation.
///
/// Linked close approaches are tracked as indices into the approach sequence
/// owned by [`crate::database::NeoDatabase`], never as owning references.
#[derive(Debug, Clone, Deserialize)]
pub struct NearEarthObject {
    #[serde(rename(deserialize = "pdes"))]
    designation: String,

    #[serde(deserialize_with = "empty_as_none")]
    name: Option<String>,

    #[serde(rename(deserialize = "diameter"), deserialize_with = "optional_float")]
    diameter: Option<f64>,

    #[serde(rename(deserialize = "pha"), deserialize_with = "flag_to_bool", default)]
    hazardous: bool,

    #[serde(skip)]
    approaches: BTreeSet<usize>,
}

impl NearEarthObject {
    /// Creates an unlinked object.
    ///
    /// An empty name becomes absent. A NaN or zero diameter becomes unknown.
    pub fn new(
        designation: impl Into<String>,
        name: Option<&str>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        NearEarthObject {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()).map(String::from),
            diameter,
            hazardous,
            approaches: BTreeSet::new(),
        }
        .normalized()
    }

    /// Applies the optional-field coercions to a freshly deserialized row.
    pub(crate) fn normalized(mut self) -> Self {
        self.diameter = self.diameter.filter(|d| !d.is_nan() && *d != 0.0);
        self
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, `None` when unknown.
    pub fn diameter(&self) -> Option<f64> {
        self.diameter
    }

    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Indices of the linked approaches, in ascending order.
    pub fn approaches(&self) -> impl Iterator<Item = usize> + '_ {
        self.approaches.iter().copied()
    }

    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// `"433 (Eros)"`, or just the designation when the object is unnamed.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Records a linked approach. Returns `false` if it was already recorded.
    pub(crate) fn attach_approach(&mut self, index: usize) -> bool {
        self.approaches.insert(index)
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {} ", self.fullname())?;
        match self.diameter {
            Some(d) => write!(f, "has a diameter of {:.3} km", d)?,
            None => write!(f, "has an unknown diameter")?,
        }
        let qualifier = if self.hazardous { "" } else { "not " };
        write!(f, " and is {}potentially hazardous.", qualifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eros() -> NearEarthObject {
        NearEarthObject::new("433", Some("Eros"), Some(16.84), false)
    }

    #[test]
    fn test_empty_name_is_absent() {
        let neo = NearEarthObject::new("2020 AB", Some(""), None, false);
        assert!(neo.name().is_none());
        assert_eq!(neo.fullname(), "2020 AB");
    }

    #[test]
    fn test_unknown_diameter() {
        for diameter in [None, Some(f64::NAN), Some(0.0)] {
            let neo = NearEarthObject::new("1", None, diameter, false);
            assert!(neo.diameter().is_none());
        }
    }

    #[test]
    fn test_fullname() {
        assert_eq!(eros().fullname(), "433 (Eros)");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            eros().to_string(),
            "NEO 433 (Eros) has a diameter of 16.840 km and is not potentially hazardous."
        );
        let unknown = NearEarthObject::new("2020 AB", None, None, true);
        assert_eq!(
            unknown.to_string(),
            "NEO 2020 AB has an unknown diameter and is potentially hazardous."
        );
    }

    #[test]
    fn test_attach_approach_has_no_duplicates() {
        let mut neo = eros();
        assert_eq!(neo.approach_count(), 0);
        assert!(neo.attach_approach(3));
        assert!(neo.attach_approach(1));
        assert!(!neo.attach_approach(3));
        assert_eq!(neo.approaches().collect::<Vec<_>>(), vec![1, 3]);
    }
}
