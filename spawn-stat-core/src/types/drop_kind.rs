//! Drop classification of one investigation spot.

use serde::{Deserialize, Serialize};

/// Classification chosen by the user for an entry.
///
/// The three classified variants are mutually exclusive; `None` means the
/// user has not classified the entry yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DropKind {
    /// Not classified
    #[default]
    None,
    /// One 1-star artifact
    SingleOneStar,
    /// Two 1-star artifacts
    DoubleOneStar,
    /// One 2-star artifact
    SingleTwoStar,
}

impl DropKind {
    /// All classified variants in code order.
    pub const CLASSIFIED: [DropKind; 3] = [
        DropKind::SingleOneStar,
        DropKind::DoubleOneStar,
        DropKind::SingleTwoStar,
    ];

    /// Code used by the save file and the wire payload.
    ///
    /// `None` has no code; unclassified entries are never encoded.
    #[must_use]
    pub fn code(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::SingleOneStar => Some(0),
            Self::DoubleOneStar => Some(1),
            Self::SingleTwoStar => Some(2),
        }
    }

    /// Inverse of [`code`](Self::code); only `0..=2` are valid.
    #[must_use]
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Self::SingleOneStar),
            1 => Some(Self::DoubleOneStar),
            2 => Some(Self::SingleTwoStar),
            _ => None,
        }
    }

    /// Short label shown next to the radio choice.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "-",
            Self::SingleOneStar => "★",
            Self::DoubleOneStar => "★ x2",
            Self::SingleTwoStar => "★★",
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_cover_classified_variants() {
        for (expected, kind) in DropKind::CLASSIFIED.iter().enumerate() {
            assert_eq!(kind.code(), Some(expected as u8));
            assert_eq!(DropKind::from_code(expected as u64), Some(*kind));
        }
    }

    #[test]
    fn none_has_no_code() {
        assert_eq!(DropKind::None.code(), None);
        assert!(DropKind::None.is_none());
    }

    #[test]
    fn out_of_range_code_rejected() {
        assert_eq!(DropKind::from_code(3), None);
        assert_eq!(DropKind::from_code(u64::MAX), None);
    }
}
