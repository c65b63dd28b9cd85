//! Selects nodes from a layered vector document with compact path expressions
//! such as `/l/g[0]` or `//p[-2:-1]`, returning them in stacking (document) order.
//!
//! ```
//! use zpath_query::QueryEngine;
//! use zpath_query::document::tests::create_test_tree;
//!
//! let tree = create_test_tree();
//! let root = tree.root();
//! let groups = QueryEngine::new().query(root, [root], "/l[0]/g[0:2]").unwrap();
//! let ids: Vec<usize> = groups.iter().map(|n| n.id).collect();
//! assert_eq!(ids, vec![4, 8]);
//! ```

pub mod alias;
pub mod ast;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod meta;
pub mod order;
pub mod parser;
pub mod query;
pub mod selector;
pub mod trace;

pub use alias::{KindFilter, TagAliasTable};
pub use ast::{Axis, Expression, IndexSelector, Step, TypeSelector};
pub use config::{MetaPolicy, QueryConfig, RootPolicy};
pub use document::{DocumentNode, NodeKind, Preorder, describe, preorder};
pub use engine::{EvaluationContext, Matches, evaluate};
pub use error::{ParseError, ParseErrorKind, QueryError, QueryWarning};
pub use meta::strip_bookkeeping;
pub use order::{DocumentOrderIndex, document_order};
pub use parser::parse_expression;
pub use query::{CompiledQuery, QueryBuilder, QueryEngine};
pub use trace::{LogTracer, NoTrace, RecordingTracer, TraceEvent, TraceSink};

/// Runs `expression` with the default engine configuration.
pub fn query<'a, N, I>(root: N, candidates: I, expression: &str) -> Result<Matches<N>, QueryError>
where
    N: DocumentNode<'a> + 'a,
    I: IntoIterator<Item = N>,
{
    QueryEngine::new().query(root, candidates, expression)
}
