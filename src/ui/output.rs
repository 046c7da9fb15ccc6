//! Console reporting for the NEO explorer.

use crate::database::NeoDatabase;
use crate::models::{CloseApproach, NearEarthObject};
use std::path::Path;

/// Prints the load and link summary.
///
/// # Arguments
/// * `db` - The linked database
pub fn print_load_summary(db: &NeoDatabase) {
    println!(
        "🔄 NEO table processed successfully!\n\t🔎 Found {} near-Earth objects",
        db.neo_count()
    );
    println!(
        "🔄 Close approach data processed successfully!\n\t🔎 Found {} close approaches",
        db.approach_count()
    );
    if db.unlinked_count() > 0 {
        println!(
            "⚠️  {} close approaches reference an unknown NEO and were skipped",
            db.unlinked_count()
        );
    }
}

/// Prints one line per approach, followed by its NEO.
///
/// # Arguments
/// * `db` - The database used to name each approach's NEO
/// * `pairs` - Linked approaches to print, in order
pub fn print_approaches(db: &NeoDatabase, pairs: &[(&CloseApproach, &NearEarthObject)]) {
    if pairs.is_empty() {
        println!("✅ No close approaches to show.");
        return;
    }

    for (approach, neo) in pairs {
        println!("☄️  {}", db.describe(approach));
        println!("\t{}", neo);
    }
}

/// Prints where the results were written.
pub fn print_written(count: usize, path: &Path) {
    println!("💾 Wrote {} close approaches to '{}'", count, path.display());
}
