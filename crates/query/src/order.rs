//! Reconciles arbitrary node sets to document (stacking) order.
use crate::document::{DocumentNode, preorder};
use std::collections::{HashMap, HashSet};

/// Returns the members of `subset` in document order.
///
/// Walks the tree under `root` once in preorder and emits every visited node
/// that is still pending, stopping as soon as nothing is pending. Duplicates
/// collapse, and nodes that are not part of the tree are dropped.
pub fn document_order<'a, N, I>(root: N, subset: I) -> Vec<N>
where
    N: DocumentNode<'a>,
    I: IntoIterator<Item = N>,
{
    let mut pending: HashSet<N> = subset.into_iter().collect();
    let mut ordered = Vec::with_capacity(pending.len());
    if pending.is_empty() {
        return ordered;
    }

    for node in preorder(root) {
        if pending.remove(&node) {
            ordered.push(node);
            if pending.is_empty() {
                break;
            }
        }
    }
    ordered
}

/// Preorder positions of every node under a root, built once and reused for
/// the per-call reconciliations of a query. The final result goes through
/// [`document_order`] instead, which stops at the last pending node.
#[derive(Debug, Clone)]
pub struct DocumentOrderIndex<N> {
    positions: HashMap<N, usize>,
}

impl<N> DocumentOrderIndex<N> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<'a, N: DocumentNode<'a>> DocumentOrderIndex<N> {
    pub fn build(root: N) -> Self {
        let positions = preorder(root)
            .enumerate()
            .map(|(position, node)| (node, position))
            .collect();
        Self { positions }
    }

    pub fn position(&self, node: &N) -> Option<usize> {
        self.positions.get(node).copied()
    }

    /// Same contract as [`document_order`], answered from the index.
    pub fn order<I>(&self, subset: I) -> Vec<N>
    where
        I: IntoIterator<Item = N>,
    {
        let mut ranked: Vec<(usize, N)> = subset
            .into_iter()
            .filter_map(|node| self.position(&node).map(|position| (position, node)))
            .collect();
        ranked.sort_unstable_by_key(|&(position, _)| position);
        ranked.dedup_by_key(|&mut (position, _)| position);
        ranked.into_iter().map(|(_, node)| node).collect()
    }
}
