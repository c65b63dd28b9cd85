//! Exposes parsed SVG (and Inkscape) documents to `zpath-query`.
//!
//! Elements are classified into [`zpath_query::NodeKind`]s: Inkscape layers,
//! groups, shapes, and the bookkeeping elements (`defs`, `sodipodi:namedview`,
//! `metadata`, `style`) that top-level queries skip.

pub mod document;
pub mod error;
pub mod kinds;

pub use document::{SvgDocument, SvgNode};
pub use error::SvgError;
pub use kinds::classify;
