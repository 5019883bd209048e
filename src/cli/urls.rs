//! Route listing command.
//!
//! Prints the registered route table, or resolves one concrete path
//! against it. A failed resolution degrades to a diagnostic row; the
//! command itself still succeeds.

use std::collections::BTreeMap;
use std::fmt;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::routes::{self, RouteEntry};

const HEADERS: [&str; 3] = ["Path", "Endpoint", "Arguments"];

// Column floors keep the headers from ever being truncated.
const MIN_WIDTHS: [usize; 3] = [4, 8, 9];

/// Arguments for the urls subcommand
#[derive(Args, Debug)]
pub struct UrlsArgs {
    /// Url to test (ex. /static/image.png)
    #[arg(long)]
    pub url: Option<String>,
    /// Route field to order by
    #[arg(long, value_enum, default_value = "path")]
    pub order: SortField,
}

/// The sortable route fields.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Path,
    Endpoint,
}

impl SortField {
    fn key(self, route: &RouteEntry) -> &'static str {
        match self {
            SortField::Path => route.pattern,
            SortField::Endpoint => route.endpoint,
        }
    }
}

/// Successful resolution of a concrete path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub pattern: &'static str,
    pub endpoint: &'static str,
    pub arguments: BTreeMap<String, String>,
}

/// Why a path failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    NotFound { path: String },
    MethodNotAllowed { path: String, allowed: Vec<String> },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NotFound { path } => {
                write!(f, "404 Not Found: no route matches {path}")
            }
            MatchError::MethodNotAllowed { path, allowed } => {
                write!(
                    f,
                    "405 Method Not Allowed: {} only allows {}",
                    path,
                    allowed.join(", ")
                )
            }
        }
    }
}

/// Execute the urls command over the application's route table.
pub fn run(args: &UrlsArgs) -> Result<ExitCode> {
    let rows = match &args.url {
        Some(url) => single_path_rows(routes::TABLE, url)?,
        None => listing_rows(routes::TABLE, args.order),
    };

    print!("{}", render_table(&rows));
    Ok(ExitCode::SUCCESS)
}

/// One row per registered route, sorted ascending by the selected
/// field: pattern and endpoint columns only.
fn listing_rows(table: &[RouteEntry], order: SortField) -> Vec<Vec<String>> {
    let mut entries: Vec<&RouteEntry> = table.iter().collect();
    entries.sort_by_key(|route| order.key(route));

    entries
        .iter()
        .map(|route| vec![route.pattern.to_string(), route.endpoint.to_string()])
        .collect()
}

/// A single three-column row for a resolved path, or a one-column
/// diagnostic row when nothing matches.
fn single_path_rows(table: &[RouteEntry], url: &str) -> Result<Vec<Vec<String>>> {
    match match_path(table, url) {
        Ok(found) => Ok(vec![vec![
            found.pattern.to_string(),
            found.endpoint.to_string(),
            serde_json::to_string(&found.arguments)?,
        ]]),
        Err(err) => Ok(vec![vec![format!("<{err}>")]]),
    }
}

/// Resolve `path` as a GET request against the route table.
pub fn match_path(table: &[RouteEntry], path: &str) -> Result<RouteMatch, MatchError> {
    let mut method_mismatch: Option<&RouteEntry> = None;

    for route in table {
        if let Some(arguments) = match_pattern(route.pattern, path) {
            if route.methods.contains(&"GET") {
                return Ok(RouteMatch {
                    pattern: route.pattern,
                    endpoint: route.endpoint,
                    arguments,
                });
            }
            method_mismatch.get_or_insert(route);
        }
    }

    match method_mismatch {
        Some(route) => Err(MatchError::MethodNotAllowed {
            path: path.to_string(),
            allowed: route.methods.iter().map(|m| m.to_string()).collect(),
        }),
        None => Err(MatchError::NotFound {
            path: path.to_string(),
        }),
    }
}

/// Match one pattern against a concrete path, collecting captures.
///
/// `{name}` captures a single segment; `{*name}` captures the
/// non-empty remainder and is only valid as the final segment.
fn match_pattern(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
    let pattern_parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut arguments = BTreeMap::new();

    for (i, part) in pattern_parts.iter().enumerate() {
        if let Some(name) = part.strip_prefix("{*").and_then(|p| p.strip_suffix('}')) {
            if i + 1 != pattern_parts.len() {
                return None;
            }
            let rest = path_parts.get(i..)?;
            if rest.is_empty() {
                return None;
            }
            arguments.insert(name.to_string(), rest.join("/"));
            return Some(arguments);
        }

        let actual = path_parts.get(i)?;
        if let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
            arguments.insert(name.to_string(), (*actual).to_string());
        } else if part != actual {
            return None;
        }
    }

    if path_parts.len() != pattern_parts.len() {
        return None;
    }

    Some(arguments)
}

/// Render rows into the aligned table format.
///
/// Every row must have the same number of cells. Each column is as
/// wide as its longest value, never narrower than its header; columns
/// are left-justified and separated by two spaces, and a dash rule
/// spanning the full table width separates the headers from the data.
fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.first().map_or(0, Vec::len);

    let mut widths = Vec::with_capacity(columns);
    for col in 0..columns {
        let longest = rows.iter().map(|row| row[col].len()).max().unwrap_or(0);
        widths.push(longest.max(MIN_WIDTHS[col]));
    }
    let table_width: usize = widths.iter().sum::<usize>() + 2 * columns.saturating_sub(1);

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS[..columns], &widths));
    out.push('\n');
    out.push_str(&"-".repeat(table_width));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ")
}
