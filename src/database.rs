//! Linking of close approaches to their NEOs.
//!
//! `NeoDatabase` owns both collections: the designation-keyed NEO map and the
//! ordered approach sequence. Links are keys in one direction (approach to
//! designation) and indices in the other (NEO to approach positions), so
//! neither collection holds the other.

use crate::error::Result;
use crate::models::{CloseApproach, NearEarthObject};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct NeoDatabase {
    neos: HashMap<String, NearEarthObject>,
    approaches: Vec<CloseApproach>,
    names: HashMap<String, String>,
    unlinked: usize,
}

impl NeoDatabase {
    /// Takes ownership of both collections and links them.
    ///
    /// Approaches whose designation matches no NEO are kept, unlinked, and
    /// reported once as a warning.
    pub fn new(
        neos: HashMap<String, NearEarthObject>,
        approaches: Vec<CloseApproach>,
    ) -> Result<Self> {
        let names = neos
            .values()
            .filter_map(|neo| Some((neo.name()?.to_string(), neo.designation().to_string())))
            .collect();

        let mut db = NeoDatabase {
            neos,
            approaches,
            names,
            unlinked: 0,
        };
        db.link()?;
        Ok(db)
    }

    fn link(&mut self) -> Result<()> {
        for (index, approach) in self.approaches.iter_mut().enumerate() {
            match self.neos.get_mut(approach.designation()) {
                Some(neo) => {
                    approach.link_to(neo)?;
                    neo.attach_approach(index);
                }
                None => {
                    tracing::trace!(
                        "No NEO with designation '{}' for approach #{}",
                        approach.designation(),
                        index
                    );
                    self.unlinked += 1;
                }
            }
        }

        if self.unlinked > 0 {
            tracing::warn!(
                "{} of {} close approaches reference an unknown NEO and were left unlinked",
                self.unlinked,
                self.approaches.len()
            );
        }
        tracing::debug!(
            "Linked {} close approaches to {} NEOs",
            self.approaches.len() - self.unlinked,
            self.neos.len()
        );
        Ok(())
    }

    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Number of approaches whose designation matched no NEO.
    pub fn unlinked_count(&self) -> usize {
        self.unlinked
    }

    /// Case-sensitive lookup by primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.neos.get(designation)
    }

    /// Case-sensitive lookup by IAU name.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.names
            .get(name)
            .and_then(|designation| self.neos.get(designation))
    }

    /// All approaches in source order, linked or not.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// The object an approach is linked to.
    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo().and_then(|designation| self.neos.get(designation))
    }

    /// Approaches of `neo`, in source order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approaches().filter_map(|index| self.approaches.get(index))
    }

    /// Linked `(approach, neo)` pairs in source order, ready for the writers.
    pub fn linked_pairs(&self) -> impl Iterator<Item = (&CloseApproach, &NearEarthObject)> + '_ {
        self.approaches
            .iter()
            .filter_map(|approach| Some((approach, self.neo_for(approach)?)))
    }

    /// Human-readable approach line, naming the NEO by full name when linked.
    pub fn describe(&self, approach: &CloseApproach) -> String {
        match self.neo_for(approach) {
            Some(neo) => approach.describe_as(&neo.fullname()),
            None => approach.to_string(),
        }
    }
}
