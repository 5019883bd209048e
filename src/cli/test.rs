//! Test-runner command.
//!
//! Runs the suite through cargo. When coverage is requested the
//! command re-invokes itself once with the coverage flag in the
//! environment; the instrumented run then owns a [`CoverageSession`]
//! that reports and discards the collected data when the tests finish.

use std::env;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use super::exit_code;

/// Environment flag marking a coverage-instrumented re-exec.
pub const COVERAGE_ENV: &str = "SPELL_CHECK_COVERAGE";

/// Where the HTML coverage report lands.
const COVERAGE_DIR: &str = "tmp/coverage";

/// Arguments for the test subcommand
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Run only tests whose names contain this filter
    #[arg(long)]
    pub test_name: Option<String>,
    /// Run tests under code coverage
    #[arg(long)]
    pub coverage: bool,
    /// Verbose cargo output
    #[arg(long)]
    pub verbose: bool,
}

/// Execute the test command.
pub fn run(args: &TestArgs) -> Result<ExitCode> {
    if args.coverage && env::var(COVERAGE_ENV).is_err() {
        return reexec_with_coverage();
    }

    let session = CoverageSession::from_env();

    let mut cargo = Command::new("cargo");
    match &session {
        Some(_) => {
            cargo.args(["llvm-cov", "--no-report", "test"]);
        }
        None => {
            cargo.arg("test");
        }
    }
    if args.verbose {
        cargo.arg("--verbose");
    }
    if let Some(test_name) = &args.test_name {
        cargo.arg(test_name);
    }

    let status = cargo.status().context("failed to run cargo test")?;
    if !status.success() {
        println!("{}", "Test run reported failures".yellow());
    }

    if let Some(session) = session {
        session.finish()?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Re-invoke the current command line once with coverage enabled,
/// propagating the child's exit status.
fn reexec_with_coverage() -> Result<ExitCode> {
    let has_llvm_cov = Command::new("cargo")
        .args(["llvm-cov", "--version"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);
    if !has_llvm_cov {
        eprintln!(
            "{} cargo-llvm-cov is not installed. Install it with:",
            "!".yellow()
        );
        eprintln!("  cargo install cargo-llvm-cov");
        bail!("cargo-llvm-cov not found");
    }

    let exe = env::current_exe().context("cannot locate current executable")?;
    let status = Command::new(exe)
        .args(env::args().skip(1))
        .env(COVERAGE_ENV, "1")
        .status()
        .context("failed to re-run under coverage")?;

    Ok(exit_code(status))
}

/// A coverage measurement context for one test-command run.
///
/// Present only when the coverage flag is already in the environment,
/// i.e. inside the re-exec started by `test --coverage`.
pub struct CoverageSession {
    output_dir: PathBuf,
}

impl CoverageSession {
    pub fn from_env() -> Option<Self> {
        env::var(COVERAGE_ENV).ok().map(|_| CoverageSession {
            output_dir: PathBuf::from(COVERAGE_DIR),
        })
    }

    /// Print the summary, write the HTML report, drop the collected
    /// profile data.
    pub fn finish(self) -> Result<()> {
        let output_dir = self.output_dir.display().to_string();

        println!("{}", "Coverage Summary:".bold());
        run_cargo(&["llvm-cov", "report"])?;
        run_cargo(&["llvm-cov", "report", "--html", "--output-dir", &output_dir])?;
        println!("HTML version: file://{output_dir}/html/index.html");
        run_cargo(&["llvm-cov", "clean", "--workspace"])?;
        Ok(())
    }
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("failed to run cargo {}", args.join(" ")))?;
    if !status.success() {
        bail!("cargo {} failed", args.join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_session_absent_without_flag() {
        unsafe {
            env::remove_var(COVERAGE_ENV);
        }
        assert!(CoverageSession::from_env().is_none());
    }

    #[test]
    #[serial]
    fn test_session_present_with_flag() {
        unsafe {
            env::set_var(COVERAGE_ENV, "1");
        }
        let session = CoverageSession::from_env().unwrap();
        assert_eq!(session.output_dir, PathBuf::from("tmp/coverage"));
        unsafe {
            env::remove_var(COVERAGE_ENV);
        }
    }
}
