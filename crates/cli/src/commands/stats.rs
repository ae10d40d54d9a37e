//! `umacard stats` - print aggregate career statistics.

use std::path::Path;

use anyhow::{Context, Result};
use umacard_document::load_document;
use umacard_stats::{compute_totals, format_fans, format_prize};

pub fn execute(file: &Path) -> Result<()> {
    let document =
        load_document(file).with_context(|| format!("failed to load {}", file.display()))?;
    let totals = compute_totals(&document.races);

    println!("通算成績: {}", totals.summary);
    println!("総獲得賞金: {}", format_prize(totals.total_prize));
    println!("累計ファン数: {}", format_fans(totals.total_fans));
    Ok(())
}
