//! Resource directory scan
//!
//! Layout:
//!
//! ```text
//! resource/
//!   001.png     map
//!   001a.png    first investigation spot on that map
//!   001b.png
//!   002.png
//!   002a.png
//! ```
//!
//! Every (map, spot) pair is one entry, numbered in scan order.

use std::path::Path;

use crate::types::CatalogEntry;

/// Map numbers are three digits wide
const MAX_MAPS: u32 = 999;

/// Scan the resource directory.
///
/// Maps are numbered from `001` and scanning stops at the first missing map.
/// Spot letters start at `a` and stop at the first missing screenshot.
/// A missing directory yields an empty catalog.
#[must_use]
pub fn scan_catalog(dir: &Path) -> Vec<CatalogEntry> {
    let mut catalog = Vec::new();

    for map_no in 1..=MAX_MAPS {
        let stem = format!("{map_no:03}");
        let map_path = dir.join(format!("{stem}.png"));
        if !map_path.is_file() {
            break;
        }

        for spot in 'a'..='z' {
            let label = format!("{stem}{spot}");
            let spot_path = dir.join(format!("{label}.png"));
            if !spot_path.is_file() {
                break;
            }
            catalog.push(CatalogEntry {
                label,
                map_path: map_path.clone(),
                spot_path,
            });
        }
    }

    log::info!(
        "Scanned {} catalog entries from {}",
        catalog.len(),
        dir.display()
    );
    catalog
}
