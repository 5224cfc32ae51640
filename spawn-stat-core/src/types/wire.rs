//! Save file and stats service payload types.

use serde::{Deserialize, Serialize};

use super::{DropKind, DropStats};

/// `[index, classificationCode]` as written to the save file and the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropPair(pub usize, pub u8);

impl DropPair {
    /// Build a pair for a classified entry; `None` yields no pair.
    #[must_use]
    pub fn from_entry(index: usize, drop: DropKind) -> Option<Self> {
        drop.code().map(|code| Self(index, code))
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }

    /// Classification carried by the pair, `None` for an out-of-range code.
    #[must_use]
    pub fn drop_kind(&self) -> Option<DropKind> {
        DropKind::from_code(u64::from(self.1))
    }
}

/// Body of the submission request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub drops: Vec<DropPair>,
}

/// Body of the submission response.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
}

impl SubmitResponse {
    /// Only `"success"` counts as an accepted submission.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// `[singleOneStar, doubleOneStar, singleTwoStar]` for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatsRow(pub u32, pub u32, pub u32);

impl From<StatsRow> for DropStats {
    fn from(row: StatsRow) -> Self {
        DropStats::new(row.0, row.1, row.2)
    }
}

/// Body of the aggregate stats response.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub error: bool,
    pub drops: Vec<StatsRow>,
}
