//! `umacard validate` - check every race entry.

use std::path::Path;

use anyhow::{Context, Result, bail};
use umacard_document::load_document;
use umacard_editor::validate_entry;

pub fn execute(file: &Path) -> Result<()> {
    let document =
        load_document(file).with_context(|| format!("failed to load {}", file.display()))?;

    let mut failures = 0usize;
    for (index, race) in document.races.iter().enumerate() {
        if let Err(errors) = validate_entry(race) {
            failures += 1;
            for error in &errors {
                println!("entry {index}: {error}");
            }
        }
    }

    if failures > 0 {
        bail!(
            "{failures} of {} race entries failed validation",
            document.races.len()
        );
    }
    println!("{} race entries OK", document.races.len());
    Ok(())
}
