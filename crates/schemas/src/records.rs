//! Subject biography records, one per document mode.
//!
//! Field names serialize as the original document format's camelCase
//! keys. Every field is deserialized with a field-level default, so a
//! present-but-incomplete record object loads its missing fields as
//! empty strings. The documented select defaults below apply only to a
//! freshly created document (or when the whole record key is absent);
//! see the merge rules in `umacard-document`.

use serde::{Deserialize, Serialize};

/// Default training-center / dormitory select value.
pub const DEFAULT_TRAINING_CENTER: &str = "美浦";
/// Default ear-accessory side for an original character.
pub const DEFAULT_EAR: &str = "右";
/// Default school grade for an original character.
pub const DEFAULT_SCHOOL_GRADE: &str = "中等部";

/// Biography fields for a fictional racehorse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FictionalRecord {
    /// Horse name.
    #[serde(default)]
    pub horse_name: String,
    /// Romanized horse name.
    #[serde(default)]
    pub horse_name_en: String,
    /// Sire.
    #[serde(default)]
    pub father: String,
    /// Dam.
    #[serde(default)]
    pub mother: String,
    /// Broodmare sire.
    #[serde(default)]
    pub bms: String,
    /// Sex and age text (e.g. "牡3").
    #[serde(default)]
    pub sex_age: String,
    /// Affiliation select value (training center).
    #[serde(default)]
    pub affiliation_select: String,
    /// Affiliation free-text qualifier (trainer etc.).
    #[serde(default)]
    pub affiliation_text: String,
    /// Owner.
    #[serde(default)]
    pub owner: String,
    /// Breeder.
    #[serde(default)]
    pub breeder: String,
    /// Cached career summary, written by the stats engine.
    #[serde(default)]
    pub total_results: String,
    /// Cached formatted total prize, written by the stats engine.
    #[serde(default)]
    pub total_prize: String,
    /// Main win description.
    #[serde(default)]
    pub main_win: String,
    /// Birthday as an ISO date string.
    #[serde(default)]
    pub birthday: String,
    /// Name-meaning text.
    #[serde(default)]
    pub meaning: String,
    /// Next planned race.
    #[serde(default)]
    pub next_race: String,
}

impl Default for FictionalRecord {
    fn default() -> Self {
        Self {
            horse_name: String::new(),
            horse_name_en: String::new(),
            father: String::new(),
            mother: String::new(),
            bms: String::new(),
            sex_age: String::new(),
            affiliation_select: DEFAULT_TRAINING_CENTER.to_string(),
            affiliation_text: String::new(),
            owner: String::new(),
            breeder: String::new(),
            total_results: String::new(),
            total_prize: String::new(),
            main_win: String::new(),
            birthday: String::new(),
            meaning: String::new(),
            next_race: String::new(),
        }
    }
}

/// Biography fields for an original character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalRecord {
    /// Character name.
    #[serde(default)]
    pub name: String,
    /// Romanized name.
    #[serde(default)]
    pub name_en: String,
    /// Ear-accessory side.
    #[serde(default)]
    pub ear: String,
    /// School grade / level.
    #[serde(default)]
    pub grade: String,
    /// Dormitory select value.
    #[serde(default)]
    pub dorm_select: String,
    /// Dormitory free-text qualifier.
    #[serde(default)]
    pub dorm_text: String,
    /// Cached career summary, written by the stats engine.
    #[serde(default)]
    pub total_results: String,
    /// Cached formatted total fan count, written by the stats engine.
    #[serde(default)]
    pub total_fans: String,
    /// Main win description.
    #[serde(default)]
    pub main_win: String,
    /// Birthday as an ISO date string.
    #[serde(default)]
    pub birthday: String,
    /// Name-meaning text.
    #[serde(default)]
    pub meaning: String,
    /// Next planned race.
    #[serde(default)]
    pub next_race: String,
}

impl Default for OriginalRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            name_en: String::new(),
            ear: DEFAULT_EAR.to_string(),
            grade: DEFAULT_SCHOOL_GRADE.to_string(),
            dorm_select: DEFAULT_TRAINING_CENTER.to_string(),
            dorm_text: String::new(),
            total_results: String::new(),
            total_fans: String::new(),
            main_win: String::new(),
            birthday: String::new(),
            meaning: String::new(),
            next_race: String::new(),
        }
    }
}
