//! Loading, linking and re-serialization of near-Earth object data.
//!
//! NEOs come from a CSV table and close approaches from a CAD JSON record
//! list. [`database::NeoDatabase`] links the two, and the [`write`] module
//! flattens linked pairs back to CSV or JSON.

pub mod database;
pub mod error;
pub mod extract;
pub mod helpers;
pub mod logging;
pub mod models;
pub mod ui;
pub mod write;

pub use error::{Error, Result};
