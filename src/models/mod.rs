//! Data models and serialization helpers.
//!
//! This module contains the two entity types, `NearEarthObject` and
//! `CloseApproach`, and the custom deserializers that coerce the quirky
//! optional cells of the NEO table into them.
pub mod approach;
pub mod neo;
pub mod serde_helpers;

pub use approach::CloseApproach;
pub use neo::NearEarthObject;
