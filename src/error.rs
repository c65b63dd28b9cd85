// src/error.rs
use thiserror::Error;
use zpath_query::QueryError;
use zpath_svg::SvgError;

/// The error type for loading a drawing and running a query against it.
#[derive(Error, Debug)]
pub enum ZpathError {
    #[error("Document failed: {0}")]
    Svg(#[from] SvgError),

    #[error("Query failed: {0}")]
    Query(#[from] QueryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
