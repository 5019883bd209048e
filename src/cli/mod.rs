//! Operator commands for the spell-check application.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Artifact cleanup — `spell-check clean`.
pub mod clean;

/// Server startup — `spell-check serve`.
pub mod serve;

/// Code style — `spell-check lint` and `spell-check fmt`.
pub mod style;

/// Test runner — `spell-check test`.
pub mod test;

/// Route listing — `spell-check urls`.
pub mod urls;

use std::process::{ExitCode, ExitStatus};

use clap::{Parser, Subcommand};

/// spell-check - minimal web application skeleton
#[derive(Parser, Debug)]
#[command(name = "spell-check")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SPELL_CHECK_ENV           Settings object to start from (default: production)
    SPELL_CHECK_HOST          Bind address (default: 0.0.0.0)
    SPELL_CHECK_PORT          Listen port (default: 5000)
    SPELL_CHECK_STATIC_DIR    Static asset directory (default: static)
    SPELL_CHECK_COVERAGE      Set by `test --coverage` for its re-exec
    RUST_LOG                  Log filter (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute; serves the application when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web application
    Serve(serve::ServeArgs),
    /// Run the test suite
    Test(test::TestArgs),
    /// Check code style without rewriting anything
    Lint,
    /// Reformat the working tree
    Fmt(style::FmtArgs),
    /// Remove compiled-bytecode artifacts recursively
    Clean,
    /// Display the url matching routes for the project
    Urls(urls::UrlsArgs),
}

/// Translate an external tool's exit status into our own.
pub(crate) fn exit_code(status: ExitStatus) -> ExitCode {
    if status.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(status.code().unwrap_or(1).clamp(0, 255) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
