//! Typed biography field keys.
//!
//! The presentation layer addresses biography fields by the form ids of
//! the original document format (`horseName`, `dormSelect`, …); these
//! enums give that contract a typed surface. The cached projection
//! fields (`totalResults`, `totalPrize`, `totalFans`) are deliberately
//! absent: they are only ever written by the stats refresh.

use umacard_schemas::{FictionalRecord, OriginalRecord};

/// User-authored fields of the fictional-horse record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs, reason = "variant names mirror the record fields")]
pub enum FictionalField {
    HorseName,
    HorseNameEn,
    Father,
    Mother,
    Bms,
    SexAge,
    AffiliationSelect,
    AffiliationText,
    Owner,
    Breeder,
    MainWin,
    Birthday,
    Meaning,
    NextRace,
}

impl FictionalField {
    /// Resolves a field from its document-format key.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "horseName" => Self::HorseName,
            "horseNameEn" => Self::HorseNameEn,
            "father" => Self::Father,
            "mother" => Self::Mother,
            "bms" => Self::Bms,
            "sexAge" => Self::SexAge,
            "affiliationSelect" => Self::AffiliationSelect,
            "affiliationText" => Self::AffiliationText,
            "owner" => Self::Owner,
            "breeder" => Self::Breeder,
            "mainWin" => Self::MainWin,
            "birthday" => Self::Birthday,
            "meaning" => Self::Meaning,
            "nextRace" => Self::NextRace,
            _ => return None,
        })
    }

    /// The document-format key for this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::HorseName => "horseName",
            Self::HorseNameEn => "horseNameEn",
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Bms => "bms",
            Self::SexAge => "sexAge",
            Self::AffiliationSelect => "affiliationSelect",
            Self::AffiliationText => "affiliationText",
            Self::Owner => "owner",
            Self::Breeder => "breeder",
            Self::MainWin => "mainWin",
            Self::Birthday => "birthday",
            Self::Meaning => "meaning",
            Self::NextRace => "nextRace",
        }
    }

    pub(crate) fn apply(self, record: &mut FictionalRecord, value: String) {
        let slot = match self {
            Self::HorseName => &mut record.horse_name,
            Self::HorseNameEn => &mut record.horse_name_en,
            Self::Father => &mut record.father,
            Self::Mother => &mut record.mother,
            Self::Bms => &mut record.bms,
            Self::SexAge => &mut record.sex_age,
            Self::AffiliationSelect => &mut record.affiliation_select,
            Self::AffiliationText => &mut record.affiliation_text,
            Self::Owner => &mut record.owner,
            Self::Breeder => &mut record.breeder,
            Self::MainWin => &mut record.main_win,
            Self::Birthday => &mut record.birthday,
            Self::Meaning => &mut record.meaning,
            Self::NextRace => &mut record.next_race,
        };
        *slot = value;
    }
}

/// User-authored fields of the original-character record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs, reason = "variant names mirror the record fields")]
pub enum OriginalField {
    Name,
    NameEn,
    Ear,
    Grade,
    DormSelect,
    DormText,
    MainWin,
    Birthday,
    Meaning,
    NextRace,
}

impl OriginalField {
    /// Resolves a field from its document-format key.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "name" => Self::Name,
            "nameEn" => Self::NameEn,
            "ear" => Self::Ear,
            "grade" => Self::Grade,
            "dormSelect" => Self::DormSelect,
            "dormText" => Self::DormText,
            "mainWin" => Self::MainWin,
            "birthday" => Self::Birthday,
            "meaning" => Self::Meaning,
            "nextRace" => Self::NextRace,
            _ => return None,
        })
    }

    /// The document-format key for this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameEn => "nameEn",
            Self::Ear => "ear",
            Self::Grade => "grade",
            Self::DormSelect => "dormSelect",
            Self::DormText => "dormText",
            Self::MainWin => "mainWin",
            Self::Birthday => "birthday",
            Self::Meaning => "meaning",
            Self::NextRace => "nextRace",
        }
    }

    pub(crate) fn apply(self, record: &mut OriginalRecord, value: String) {
        let slot = match self {
            Self::Name => &mut record.name,
            Self::NameEn => &mut record.name_en,
            Self::Ear => &mut record.ear,
            Self::Grade => &mut record.grade,
            Self::DormSelect => &mut record.dorm_select,
            Self::DormText => &mut record.dorm_text,
            Self::MainWin => &mut record.main_win,
            Self::Birthday => &mut record.birthday,
            Self::Meaning => &mut record.meaning,
            Self::NextRace => &mut record.next_race,
        };
        *slot = value;
    }
}
