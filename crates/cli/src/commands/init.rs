//! `umacard init` - create a fresh default document.

use std::path::Path;

use anyhow::{Context, Result, bail};
use umacard_document::save_document;
use umacard_editor::ProfileSession;

pub fn execute(file: &Path, force: bool) -> Result<()> {
    if file.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", file.display());
    }

    let session = ProfileSession::new();
    save_document(file, session.document())
        .with_context(|| format!("failed to write {}", file.display()))?;
    println!("Created {}", file.display());
    Ok(())
}
