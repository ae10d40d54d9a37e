//! Top-level profile document and mode tag.

use serde::{Deserialize, Serialize};

use crate::race::RaceEntry;
use crate::records::{FictionalRecord, OriginalRecord};

/// Which subject record is authoritative for display and export.
///
/// Both records are always allocated; switching modes never discards the
/// inactive record's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fictional racehorse biography.
    #[default]
    Fictional,
    /// Original character biography.
    Original,
}

/// The root entity: one profile card document.
///
/// Exactly one instance exists per editing session. All race-list
/// mutation goes through `umacard-editor`; this type only carries state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// Active subject record.
    #[serde(default)]
    pub mode: Mode,
    /// Fictional-horse biography (kept even when inactive).
    #[serde(default)]
    pub fictional: FictionalRecord,
    /// Original-character biography (kept even when inactive).
    #[serde(default)]
    pub original: OriginalRecord,
    /// Ordered race results, most-recent-first by insertion convention.
    #[serde(default)]
    pub races: Vec<RaceEntry>,
}

impl ProfileDocument {
    /// Subject name for the active mode, used for export file naming.
    /// Empty when the user has not named the subject yet.
    pub fn display_name(&self) -> &str {
        match self.mode {
            Mode::Fictional => &self.fictional.horse_name,
            Mode::Original => &self.original.name,
        }
    }
}
