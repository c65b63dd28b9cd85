//! The recursive step evaluator.
//!
//! Evaluation state is `(step_index, candidates)`. Each call reconciles its
//! candidates to document order, filters them by the step's kind and index
//! selectors, and returns its own results; callers concatenate what their
//! recursive calls return.
//!
//! An immediate step hands its matching containers to the next step. A
//! descendant step emits its matches directly and searches every container
//! candidate again with the same step.

use crate::alias::{KindFilter, TagAliasTable};
use crate::ast::{Axis, Expression, Step};
use crate::document::{DocumentNode, describe_all};
use crate::error::{QueryError, QueryWarning};
use crate::order::DocumentOrderIndex;
use crate::selector::Selection;
use crate::trace::{MatchOutcome, TraceEvent, TraceSink};
use std::marker::PhantomData;

/// A step whose type selector has been resolved against an alias table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStep {
    pub step: Step,
    pub filter: KindFilter,
}

/// Resolves every type code in `expression` up front, failing on the first unknown one.
pub fn resolve_steps(
    expression: &Expression,
    aliases: &TagAliasTable,
) -> Result<Vec<ResolvedStep>, QueryError> {
    expression
        .steps()
        .iter()
        .map(|step| {
            Ok(ResolvedStep {
                filter: step.selector.resolve(aliases)?,
                step: step.clone(),
            })
        })
        .collect()
}

/// The nodes an evaluation produced, plus any step-local warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches<N> {
    pub nodes: Vec<N>,
    pub warnings: Vec<QueryWarning>,
}

impl<N> Default for Matches<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<N> Matches<N> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    fn append(&mut self, other: Matches<N>) {
        self.nodes.extend(other.nodes);
        self.warnings.extend(other.warnings);
    }
}

impl<N> IntoIterator for Matches<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

/// Everything an evaluation reads but never changes.
/// `'a` is the lifetime of the underlying document.
/// `'d` is the lifetime of the evaluation context itself.
pub struct EvaluationContext<'a, 'd, N: DocumentNode<'a>> {
    pub root_node: N,
    pub order: &'d DocumentOrderIndex<N>,
    pub steps: &'d [ResolvedStep],
    _marker: PhantomData<&'a ()>,
}

impl<'a, 'd, N: DocumentNode<'a>> EvaluationContext<'a, 'd, N> {
    pub fn new(root_node: N, order: &'d DocumentOrderIndex<N>, steps: &'d [ResolvedStep]) -> Self {
        Self {
            root_node,
            order,
            steps,
            _marker: PhantomData,
        }
    }
}

/// Evaluates `steps[step_index..]` against `candidates`.
///
/// `chain` holds the containers that led to this call and only feeds tracing.
/// An out-of-range index empties the current step and records a warning;
/// sibling branches are unaffected.
pub fn evaluate<'a, N, T>(
    candidates: &[N],
    step_index: usize,
    chain: &[N],
    e_ctx: &EvaluationContext<'a, '_, N>,
    tracer: &mut T,
) -> Matches<N>
where
    N: DocumentNode<'a> + 'a,
    T: TraceSink + ?Sized,
{
    let Some(resolved) = e_ctx.steps.get(step_index) else {
        return Matches::default();
    };
    let step = &resolved.step;
    let depth = chain.len();
    let candidates = e_ctx.order.order(candidates.iter().copied());
    log::trace!(
        "Step {} '{}' at depth {} over {} candidate(s)",
        step_index,
        step,
        depth,
        candidates.len()
    );

    if tracer.enabled() {
        tracer.record(TraceEvent::Visit {
            depth,
            chain: describe_all(chain),
            candidates: describe_all(&candidates),
            step: step.to_string(),
        });
    }

    let mut result = Matches::default();
    let matching = filter_by_kind(&candidates, resolved.filter);
    let selected = match step.index.apply(&matching) {
        Selection::Selected(nodes) => nodes,
        Selection::OutOfRange { index, len } => {
            log::warn!("List index {} out of range for step '{}' ({} match(es))", index, step, len);
            result.warnings.push(QueryWarning::IndexOutOfRange {
                step: step.to_string(),
                index,
                len,
            });
            Vec::new()
        }
    };

    // Descendant matches are results at every depth, whatever steps follow.
    let is_last = step_index + 1 == e_ctx.steps.len();
    if is_last || step.axis == Axis::Descendant {
        trace_matches(tracer, depth, MatchOutcome::Final, &selected);
        result.nodes.extend(selected.iter().copied());
    } else {
        trace_matches(tracer, depth, MatchOutcome::Partial, &selected);
        for &container in selected.iter().filter(|n| n.is_container()) {
            result.append(evaluate_children(container, step_index + 1, chain, e_ctx, tracer));
        }
    }

    if step.axis == Axis::Descendant {
        let containers: Vec<N> = candidates.iter().copied().filter(|n| n.is_container()).collect();
        if tracer.enabled() && !containers.is_empty() {
            tracer.record(TraceEvent::Descend {
                depth,
                containers: describe_all(&containers),
            });
        }
        for container in containers {
            result.append(evaluate_children(container, step_index, chain, e_ctx, tracer));
        }
    }

    result
}

/// Recurses into the children of one container, extending the trace chain.
fn evaluate_children<'a, N, T>(
    container: N,
    step_index: usize,
    chain: &[N],
    e_ctx: &EvaluationContext<'a, '_, N>,
    tracer: &mut T,
) -> Matches<N>
where
    N: DocumentNode<'a> + 'a,
    T: TraceSink + ?Sized,
{
    let children: Vec<N> = container.children().collect();
    if children.is_empty() {
        return Matches::default();
    }
    let mut next_chain = Vec::with_capacity(chain.len() + 1);
    next_chain.extend_from_slice(chain);
    next_chain.push(container);
    evaluate(&children, step_index, &next_chain, e_ctx, tracer)
}

fn filter_by_kind<'a, N>(nodes: &[N], filter: KindFilter) -> Vec<N>
where
    N: DocumentNode<'a> + 'a,
{
    nodes
        .iter()
        .filter(|node| filter.matches(node.kind()))
        .copied()
        .collect()
}

fn trace_matches<'a, N, T>(tracer: &mut T, depth: usize, outcome: MatchOutcome, nodes: &[N])
where
    N: DocumentNode<'a> + 'a,
    T: TraceSink + ?Sized,
{
    if tracer.enabled() {
        tracer.record(TraceEvent::Matched {
            depth,
            outcome,
            nodes: describe_all(nodes),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tests::{MockNode, MockTree, create_test_tree};
    use crate::parser::parse_expression;
    use crate::trace::{NoTrace, RecordingTracer};

    fn run<'a>(tree: &'a MockTree, candidates: &[usize], text: &str) -> Matches<MockNode<'a>> {
        let expr = parse_expression(text).unwrap();
        let steps = resolve_steps(&expr, &TagAliasTable::default()).unwrap();
        let order = DocumentOrderIndex::build(tree.root());
        let e_ctx = EvaluationContext::new(tree.root(), &order, &steps);
        evaluate(&tree.nodes(candidates), 0, &[], &e_ctx, &mut NoTrace)
    }

    fn ids(matches: &Matches<MockNode<'_>>) -> Vec<usize> {
        matches.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_filter_by_kind() {
        let tree = create_test_tree();
        let nodes = tree.nodes(&[4, 5, 8, 11]);
        let groups = filter_by_kind(&nodes, KindFilter::Only(crate::NodeKind::Group));
        assert_eq!(groups, tree.nodes(&[4, 8]));
        assert_eq!(filter_by_kind(&nodes, KindFilter::Any), nodes);
    }

    #[test]
    fn test_immediate_last_step_keeps_candidate_order() {
        let tree = create_test_tree();
        let matches = run(&tree, &[10, 4, 8], "/g");
        assert_eq!(ids(&matches), vec![4, 8, 10]);
    }

    #[test]
    fn test_immediate_steps_descend_through_matching_containers() {
        let tree = create_test_tree();
        let matches = run(&tree, &[3, 12], "/l/g/p");
        assert_eq!(ids(&matches), vec![5]);
    }

    #[test]
    fn test_non_container_partial_matches_contribute_nothing() {
        let tree = create_test_tree();
        let matches = run(&tree, &[3], "/l/p/*");
        assert!(matches.is_empty());
        assert!(!matches.has_warnings());
    }

    #[test]
    fn test_out_of_range_index_warns_and_continues() {
        let tree = create_test_tree();
        let matches = run(&tree, &[4, 8, 10], "/g[5]");
        assert!(matches.is_empty());
        assert_eq!(
            matches.warnings,
            vec![QueryWarning::IndexOutOfRange {
                step: "/g[5]".to_string(),
                index: 5,
                len: 3
            }]
        );
    }

    #[test]
    fn test_warning_in_one_branch_keeps_sibling_results() {
        let tree = create_test_tree();
        // layer1 has groups, layer2 has none: index 0 fails only under layer2.
        let matches = run(&tree, &[3, 12], "/l/g[0]");
        assert_eq!(ids(&matches), vec![4]);
        assert_eq!(matches.warnings.len(), 1);
    }

    #[test]
    fn test_descendant_collects_at_every_depth() {
        let tree = create_test_tree();
        let matches = run(&tree, &[3, 12], "//g");
        let mut found = ids(&matches);
        found.sort_unstable();
        assert_eq!(found, vec![4, 6, 8, 10]);
    }

    #[test]
    fn test_descendant_step_emits_matches_before_later_steps() {
        let tree = create_test_tree();
        let matches = run(&tree, &[3, 12], "//g/p");
        let mut found = ids(&matches);
        found.sort_unstable();
        assert_eq!(found, vec![4, 6, 8, 10]);

        let mut tracer = RecordingTracer::new();
        let expr = parse_expression("//g/p").unwrap();
        let steps = resolve_steps(&expr, &TagAliasTable::default()).unwrap();
        let order = DocumentOrderIndex::build(tree.root());
        let e_ctx = EvaluationContext::new(tree.root(), &order, &steps);
        evaluate(&tree.nodes(&[4]), 0, &[], &e_ctx, &mut tracer);
        assert!(tracer.events.iter().all(|e| !matches!(
            e,
            TraceEvent::Matched { outcome: MatchOutcome::Partial, .. }
        )));
        assert!(tracer.events.iter().all(|e| match e {
            TraceEvent::Visit { step, .. } => step == "//g",
            _ => true,
        }));
    }

    #[test]
    fn test_trace_records_each_call_with_depth() {
        let tree = create_test_tree();
        let expr = parse_expression("/l[0]/g[1]").unwrap();
        let steps = resolve_steps(&expr, &TagAliasTable::default()).unwrap();
        let order = DocumentOrderIndex::build(tree.root());
        let e_ctx = EvaluationContext::new(tree.root(), &order, &steps);
        let mut tracer = RecordingTracer::new();
        let matches = evaluate(&tree.nodes(&[12, 3]), 0, &[], &e_ctx, &mut tracer);
        assert_eq!(ids(&matches), vec![8]);

        let visits: Vec<&TraceEvent> = tracer
            .events
            .iter()
            .filter(|e| matches!(e, TraceEvent::Visit { .. }))
            .collect();
        assert_eq!(visits.len(), 2);
        assert_eq!(
            visits[0],
            &TraceEvent::Visit {
                depth: 0,
                chain: vec![],
                candidates: vec!["Layer(layer1)".into(), "Layer(layer2)".into()],
                step: "/l[0]".into(),
            }
        );
        assert_eq!(visits[1].depth(), 1);
        assert!(tracer.lines()[tracer.lines().len() - 1].starts_with("    Last step reached"));
    }

    #[test]
    fn test_unknown_alias_fails_resolution() {
        let expr = parse_expression("/g/z").unwrap();
        assert_eq!(
            resolve_steps(&expr, &TagAliasTable::default()),
            Err(QueryError::UnknownTypeAlias("z".to_string()))
        );
    }
}
