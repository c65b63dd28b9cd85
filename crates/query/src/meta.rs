//! Strips non-visual bookkeeping nodes from a top-level candidate set.
use crate::document::DocumentNode;

/// Removes definitions, named-view, metadata and style nodes.
///
/// Only applied to the candidates a query starts from; such nodes do not
/// appear beneath layers or groups.
pub fn strip_bookkeeping<'a, N, I>(nodes: I) -> Vec<N>
where
    N: DocumentNode<'a>,
    I: IntoIterator<Item = N>,
{
    nodes
        .into_iter()
        .filter(|node| !node.kind().is_bookkeeping())
        .collect()
}
