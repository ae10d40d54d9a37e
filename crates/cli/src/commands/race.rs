//! `umacard add` / `umacard remove` - race-list edits.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use umacard_document::{load_document, save_document};
use umacard_editor::ProfileSession;
use umacard_schemas::RaceEntry;

#[derive(Args)]
pub struct AddArgs {
    /// Document file
    pub file: PathBuf,

    /// Race date (free text)
    #[arg(long, default_value = "")]
    pub date: String,
    /// Course / venue
    #[arg(long, default_value = "")]
    pub course: String,
    /// Race name
    #[arg(long, default_value = "")]
    pub name: String,
    /// Grade label (e.g. "GⅠ", "L")
    #[arg(long, default_value = "")]
    pub grade: String,
    /// Distance
    #[arg(long, default_value = "")]
    pub distance: String,
    /// Popularity rank (positive integer)
    #[arg(long, default_value = "")]
    pub pop: String,
    /// Finishing position (positive integer)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub rank: String,
    /// Jockey
    #[arg(long, default_value = "")]
    pub jockey: String,
    /// Carried weight
    #[arg(long, default_value = "")]
    pub weight: String,
    /// Win odds
    #[arg(long, default_value = "")]
    pub odds: String,
    /// Prize money in man-en (non-negative integer)
    #[arg(long, default_value = "")]
    pub prize: String,
    /// Fan count gained (non-negative integer)
    #[arg(long, default_value = "")]
    pub fans: String,
}

impl AddArgs {
    fn entry(&self) -> RaceEntry {
        RaceEntry {
            date: self.date.clone(),
            course: self.course.clone(),
            name: self.name.clone(),
            grade: self.grade.clone(),
            distance: self.distance.clone(),
            pop: self.pop.clone(),
            rank: self.rank.clone(),
            jockey: self.jockey.clone(),
            weight: self.weight.clone(),
            odds: self.odds.clone(),
            prize: self.prize.clone(),
            fans: self.fans.clone(),
        }
    }
}

pub fn execute_add(args: &AddArgs) -> Result<()> {
    let document = load_document(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    let mut session = ProfileSession::with_document(document);

    session.commit(args.entry())?;
    save_document(&args.file, session.document())
        .with_context(|| format!("failed to write {}", args.file.display()))?;
    println!("Added race ({} total)", session.races().len());
    Ok(())
}

pub fn execute_remove(file: &Path, index: usize) -> Result<()> {
    let document =
        load_document(file).with_context(|| format!("failed to load {}", file.display()))?;
    let mut session = ProfileSession::with_document(document);

    let removed = session.remove(index)?;
    save_document(file, session.document())
        .with_context(|| format!("failed to write {}", file.display()))?;
    let label = if removed.name.is_empty() {
        format!("entry {index}")
    } else {
        removed.name
    };
    println!("Removed {label} ({} remaining)", session.races().len());
    Ok(())
}
