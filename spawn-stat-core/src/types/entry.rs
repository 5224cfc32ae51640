//! Entry related types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::DropKind;

/// Average experience weight per recorded drop.
const EXP_PER_DROP_UNIT: f64 = 420.0;

/// One resource catalog item: a map image and a spot screenshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Display label, e.g. `001a`
    pub label: String,
    /// Map image path
    pub map_path: PathBuf,
    /// Spot screenshot path
    pub spot_path: PathBuf,
}

impl CatalogEntry {
    /// Catalog item without backing images, labelled by position.
    #[must_use]
    pub fn placeholder(index: usize) -> Self {
        Self {
            label: format!("#{index}"),
            map_path: PathBuf::new(),
            spot_path: PathBuf::new(),
        }
    }
}

/// Aggregate drop counters received from the stats service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropStats {
    pub single_one_star: u32,
    pub double_one_star: u32,
    pub single_two_star: u32,
}

impl DropStats {
    #[must_use]
    pub fn new(single_one_star: u32, double_one_star: u32, single_two_star: u32) -> Self {
        Self {
            single_one_star,
            double_one_star,
            single_two_star,
        }
    }

    /// Derive the presentation values from the raw counters.
    #[must_use]
    pub fn summary(&self) -> AggregateSummary {
        let s1 = u64::from(self.single_one_star);
        let d1 = u64::from(self.double_one_star);
        let s2 = u64::from(self.single_two_star);
        let records = s1 + d1 + s2;

        if records == 0 {
            return AggregateSummary::default();
        }

        let total = records as f64;
        let weighted = (s1 + 2 * d1 + 2 * s2) as f64;
        let percentage = |x: u64| 100.0 * x as f64 / total;

        AggregateSummary {
            records,
            avg_exp: EXP_PER_DROP_UNIT * weighted / total,
            single_one_star_pct: percentage(s1),
            double_one_star_pct: percentage(d1),
            single_two_star_pct: percentage(s2),
        }
    }
}

/// Derived statistics; recomputed from [`DropStats`] on every read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateSummary {
    pub records: u64,
    pub avg_exp: f64,
    pub single_one_star_pct: f64,
    pub double_one_star_pct: f64,
    pub single_two_star_pct: f64,
}

/// A classifiable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub descriptor: CatalogEntry,
    pub drop: DropKind,
    pub stats: DropStats,
}

impl Entry {
    #[must_use]
    pub fn new(descriptor: CatalogEntry) -> Self {
        Self {
            descriptor,
            drop: DropKind::None,
            stats: DropStats::default(),
        }
    }
}
