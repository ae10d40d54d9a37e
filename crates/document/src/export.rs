//! Export file naming.
//!
//! The core does not rasterize anything; it only supplies the region
//! names and file names the export boundary uses.

use umacard_schemas::ProfileDocument;

/// On-screen region offered for image export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRegion {
    /// The whole preview card.
    All,
    /// The biography box only.
    Profile,
    /// The race results table only.
    Results,
}

impl ExportRegion {
    /// Stable lowercase name, used as the file-name suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Profile => "profile",
            Self::Results => "results",
        }
    }
}

fn file_name_base(document: &ProfileDocument) -> &str {
    let name = document.display_name();
    if name.is_empty() { "profile" } else { name }
}

/// File name for a saved JSON document: `{subject name or "profile"}.json`.
pub fn document_file_name(document: &ProfileDocument) -> String {
    format!("{}.json", file_name_base(document))
}

/// File name for an exported image:
/// `{subject name or "profile"}_{region}.png`.
pub fn image_file_name(document: &ProfileDocument, region: ExportRegion) -> String {
    format!("{}_{}.png", file_name_base(document), region.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use umacard_schemas::Mode;

    #[test]
    fn test_unnamed_subject_falls_back_to_profile() {
        let document = ProfileDocument::default();
        assert_eq!(document_file_name(&document), "profile.json");
        assert_eq!(
            image_file_name(&document, ExportRegion::All),
            "profile_all.png"
        );
    }

    #[test]
    fn test_named_subject_by_mode() {
        let mut document = ProfileDocument::default();
        document.fictional.horse_name = "ハヤテ".to_string();
        document.original.name = "オリジナル".to_string();

        assert_eq!(document_file_name(&document), "ハヤテ.json");
        document.mode = Mode::Original;
        assert_eq!(document_file_name(&document), "オリジナル.json");
        assert_eq!(
            image_file_name(&document, ExportRegion::Results),
            "オリジナル_results.png"
        );
    }

    #[test]
    fn test_region_names() {
        assert_eq!(ExportRegion::All.as_str(), "all");
        assert_eq!(ExportRegion::Profile.as_str(), "profile");
        assert_eq!(ExportRegion::Results.as_str(), "results");
    }
}
