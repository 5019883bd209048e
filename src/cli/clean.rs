//! Artifact cleanup command.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Filename suffixes treated as compiled-bytecode artifacts.
const ARTIFACT_SUFFIXES: [&str; 2] = [".pyc", ".pyo"];

/// Remove compiled-bytecode artifacts recursively, starting at the
/// current directory. Prints each removed path. Irreversible.
pub fn run() -> Result<ExitCode> {
    clean_tree(Path::new("."))?;
    Ok(ExitCode::SUCCESS)
}

/// Walk `root` and delete every artifact file underneath it.
pub fn clean_tree(root: &Path) -> Result<()> {
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if ARTIFACT_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            println!("Removing {}", entry.path().display());
            std::fs::remove_file(entry.path())
                .with_context(|| format!("failed to remove {}", entry.path().display()))?;
        }
    }
    Ok(())
}
