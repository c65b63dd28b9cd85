pub mod fixtures;

use std::path::PathBuf;
use tempfile::TempDir;
use zpath::{NoTrace, QueryEngine, QueryReport, ZpathError, run_query};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Runs `expression` against `svg` from the document root with the default engine.
pub fn query_ids(svg: &str, expression: &str) -> Result<Vec<String>, ZpathError> {
    query_selection(svg, expression, &[])
}

/// Runs `expression` starting from the elements with the given ids.
pub fn query_selection(
    svg: &str,
    expression: &str,
    selection: &[&str],
) -> Result<Vec<String>, ZpathError> {
    let report = run_query(&QueryEngine::new(), svg, expression, selection, &mut NoTrace)?;
    Ok(report.matches.into_iter().map(|m| m.id).collect())
}

pub fn report(svg: &str, expression: &str) -> Result<QueryReport, ZpathError> {
    run_query::<&str, _>(&QueryEngine::new(), svg, expression, &[], &mut NoTrace)
}

/// Writes `svg` into a fresh temporary directory. Keep the `TempDir` alive while using the path.
pub fn write_drawing(svg: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("drawing.svg");
    std::fs::write(&path, svg)?;
    Ok((dir, path))
}
