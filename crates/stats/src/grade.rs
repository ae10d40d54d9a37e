//! Display classification for grades and finishing positions.
//!
//! The class tokens (`grade-g1`, `cell-rank-1`, …) are part of the
//! rendered card's stylesheet contract and are preserved verbatim.

use umacard_schemas::parse_int_text;

/// Race grade classification, derived from the free-text grade label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradeClass {
    /// Grade 1 (label contains `Ⅰ`).
    G1,
    /// Grade 2 (label contains `Ⅱ`).
    G2,
    /// Grade 3 (label contains `Ⅲ`).
    G3,
    /// Listed race (label is exactly `L`).
    Listed,
    /// Anything else, including an empty label.
    #[default]
    Other,
}

impl GradeClass {
    /// Classifies a grade label by substring containment, checked in
    /// G1 > G2 > G3 precedence so a label carrying several grade glyphs
    /// takes the highest one.
    pub fn from_text(grade: &str) -> Self {
        if grade.is_empty() {
            return Self::Other;
        }
        if grade.contains('Ⅰ') {
            Self::G1
        } else if grade.contains('Ⅱ') {
            Self::G2
        } else if grade.contains('Ⅲ') {
            Self::G3
        } else if grade == "L" {
            Self::Listed
        } else {
            Self::Other
        }
    }

    /// Stylesheet class token for the rendered grade badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::G1 => "grade-g1",
            Self::G2 => "grade-g2",
            Self::G3 => "grade-g3",
            Self::Listed => "grade-l",
            Self::Other => "grade-other",
        }
    }
}

/// Finishing-position highlight, for the top three placings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankClass {
    /// Winner.
    First,
    /// Second place.
    Second,
    /// Third place.
    Third,
    /// No highlight.
    #[default]
    None,
}

impl RankClass {
    /// Classifies rank text (also used for the popularity column).
    pub fn from_text(rank: &str) -> Self {
        match parse_int_text(rank) {
            Some(1) => Self::First,
            Some(2) => Self::Second,
            Some(3) => Self::Third,
            _ => Self::None,
        }
    }

    /// Stylesheet class token; empty for unhighlighted cells.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::First => "cell-rank-1",
            Self::Second => "cell-rank-2",
            Self::Third => "cell-rank-3",
            Self::None => "",
        }
    }
}
