//! Select elements of layered SVG drawings with compact path expressions.
//!
//! `/l/g[0]` picks the first group of every top-level layer, `//p` every path at
//! any depth, `/g[0:2]` the first two groups of a selection. Results always come
//! back in stacking (document) order, whatever order the selection was given in.

pub mod error;
pub mod report;

pub use error::ZpathError;
pub use report::{MatchRecord, QueryReport};
pub use zpath_query::{
    CompiledQuery, DocumentNode, Expression, LogTracer, Matches, MetaPolicy, NoTrace, NodeKind,
    ParseError, ParseErrorKind, QueryBuilder, QueryEngine, QueryError, QueryWarning,
    RecordingTracer, RootPolicy, TagAliasTable, TraceEvent, TraceSink, parse_expression,
};
pub use zpath_svg::{SvgDocument, SvgError, SvgNode};

use std::fs;
use std::path::Path;

/// Runs `expression` against an SVG given as text.
///
/// With an empty `selection` the query starts at the document root; otherwise
/// it starts at the elements with those ids.
pub fn run_query<S, T>(
    engine: &QueryEngine,
    svg: &str,
    expression: &str,
    selection: &[S],
    tracer: &mut T,
) -> Result<QueryReport, ZpathError>
where
    S: AsRef<str>,
    T: TraceSink + ?Sized,
{
    let document = SvgDocument::parse(svg)?;
    let root = document.root_node();
    let candidates = if selection.is_empty() {
        vec![root]
    } else {
        document.select_ids(selection)?
    };
    let matches = engine.query_traced(root, candidates, expression, tracer)?;
    for warning in &matches.warnings {
        log::info!("{}", warning);
    }
    Ok(QueryReport::new(expression, &matches))
}

/// Same as [`run_query`], reading the drawing from `path`.
pub fn run_query_file<P, S, T>(
    engine: &QueryEngine,
    path: P,
    expression: &str,
    selection: &[S],
    tracer: &mut T,
) -> Result<QueryReport, ZpathError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
    T: TraceSink + ?Sized,
{
    let path = path.as_ref();
    log::debug!("Loading drawing from {}", path.display());
    let svg = fs::read_to_string(path)?;
    run_query(engine, &svg, expression, selection, tracer)
}
