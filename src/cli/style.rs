//! Code style commands.
//!
//! `lint` checks formatting, `fmt` rewrites it. Both collect the same
//! target set and hand it to an external tool, whose exit code becomes
//! the command's own.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, ExitStatus};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use walkdir::WalkDir;

use super::exit_code;

/// Directories never handed to the style tools.
const SKIP: [&str; 2] = ["node_modules", "target"];

/// Arguments for the fmt subcommand
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Group imports before formatting
    #[arg(short = 'f', long)]
    pub fix_imports: bool,
}

/// Check code style without modifying anything.
pub fn lint() -> Result<ExitCode> {
    let files = expand_to_files(&collect_targets(Path::new("."))?);
    let status = execute_tool("Checking code style", "rustfmt", &["--check"], &files)?;
    Ok(exit_code(status))
}

/// Reformat the tree, optionally grouping imports first.
pub fn fmt(args: &FmtArgs) -> Result<ExitCode> {
    let files = expand_to_files(&collect_targets(Path::new("."))?);

    if args.fix_imports {
        let status = execute_tool(
            "Fixing import order",
            "rustfmt",
            &["--config", "group_imports=StdExternalCrate"],
            &files,
        )?;
        if !status.success() {
            return Ok(exit_code(status));
        }
    }

    let status = execute_tool("Formatting project", "rustfmt", &[], &files)?;
    Ok(exit_code(status))
}

/// The entries the style tools operate on: top-level `.rs` files plus
/// every non-hidden top-level directory not on the skip list.
pub fn collect_targets(root: &Path) -> Result<Vec<PathBuf>> {
    let mut targets = Vec::new();

    for entry in std::fs::read_dir(root).context("failed to read working directory")? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type()?;

        if file_type.is_file() && name.ends_with(".rs") {
            targets.push(entry.path());
        } else if file_type.is_dir() && !name.starts_with('.') && !SKIP.contains(&name.as_str()) {
            targets.push(entry.path());
        }
    }

    targets.sort();
    Ok(targets)
}

/// Expand directory targets into the `.rs` files beneath them.
/// rustfmt only accepts file arguments.
pub fn expand_to_files(targets: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for target in targets {
        if !target.is_dir() {
            files.push(target.clone());
            continue;
        }
        for entry in WalkDir::new(target)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "rs")
            {
                files.push(entry.into_path());
            }
        }
    }

    files
}

/// Echo and run a style tool over the collected files.
fn execute_tool(
    description: &str,
    program: &str,
    args: &[&str],
    files: &[PathBuf],
) -> Result<ExitStatus> {
    let mut command_line: Vec<String> = vec![program.to_string()];
    command_line.extend(args.iter().map(|arg| arg.to_string()));
    command_line.extend(files.iter().map(|path| path.display().to_string()));
    println!("{}: {}", description.bold(), command_line.join(" "));

    Command::new(program)
        .args(args)
        .args(files)
        .status()
        .with_context(|| format!("failed to run {program}"))
}
