//! The public query surface: an engine built from configuration, and compiled
//! expressions that can be run repeatedly against the same document.

use crate::alias::TagAliasTable;
use crate::ast::Expression;
use crate::config::{MetaPolicy, QueryConfig, RootPolicy};
use crate::document::{DocumentNode, NodeKind};
use crate::engine::{EvaluationContext, Matches, ResolvedStep, evaluate, resolve_steps};
use crate::error::QueryError;
use crate::meta::strip_bookkeeping;
use crate::order::{DocumentOrderIndex, document_order};
use crate::parser::parse_expression;
use crate::trace::{NoTrace, TraceSink};

/// A builder for creating a [`QueryEngine`].
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: QueryConfig,
}

impl QueryBuilder {
    /// Creates a builder with the default alias table and policies.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds or replaces a single type code.
    pub fn with_alias(mut self, code: &str, kind: NodeKind) -> Self {
        if let Some(previous) = self.config.aliases.insert(code, kind) {
            log::debug!("Type code '{}' remapped from {} to {}", code, previous, kind);
        }
        self
    }

    /// Replaces the whole alias table.
    pub fn with_aliases(mut self, aliases: TagAliasTable) -> Self {
        self.config.aliases = aliases;
        self
    }

    pub fn with_meta_policy(mut self, policy: MetaPolicy) -> Self {
        self.config.meta_policy = policy;
        self
    }

    pub fn with_root_policy(mut self, policy: RootPolicy) -> Self {
        self.config.root_policy = policy;
        self
    }

    pub fn build(self) -> QueryEngine {
        QueryEngine {
            config: self.config,
        }
    }
}

/// Parses and runs path expressions. Holds no per-query state.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: QueryConfig,
}

impl QueryEngine {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Parses `expression` and resolves its type codes.
    pub fn compile(&self, expression: &str) -> Result<CompiledQuery, QueryError> {
        let expression = parse_expression(expression)?;
        let steps = resolve_steps(&expression, &self.config.aliases)?;
        Ok(CompiledQuery {
            expression,
            steps,
            meta_policy: self.config.meta_policy,
            root_policy: self.config.root_policy,
        })
    }

    /// Selects the nodes reachable from `candidates` through `expression`, in document order.
    pub fn query<'a, N, I>(
        &self,
        root: N,
        candidates: I,
        expression: &str,
    ) -> Result<Matches<N>, QueryError>
    where
        N: DocumentNode<'a> + 'a,
        I: IntoIterator<Item = N>,
    {
        self.query_traced(root, candidates, expression, &mut NoTrace)
    }

    pub fn query_traced<'a, N, I, T>(
        &self,
        root: N,
        candidates: I,
        expression: &str,
        tracer: &mut T,
    ) -> Result<Matches<N>, QueryError>
    where
        N: DocumentNode<'a> + 'a,
        I: IntoIterator<Item = N>,
        T: TraceSink + ?Sized,
    {
        Ok(self.compile(expression)?.run_traced(root, candidates, tracer))
    }
}

/// A parsed expression with every type code already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    expression: Expression,
    steps: Vec<ResolvedStep>,
    meta_policy: MetaPolicy,
    root_policy: RootPolicy,
}

impl CompiledQuery {
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn steps(&self) -> &[ResolvedStep] {
        &self.steps
    }

    pub fn run<'a, N, I>(&self, root: N, candidates: I) -> Matches<N>
    where
        N: DocumentNode<'a> + 'a,
        I: IntoIterator<Item = N>,
    {
        self.run_traced(root, candidates, &mut NoTrace)
    }

    pub fn run_traced<'a, N, I, T>(&self, root: N, candidates: I, tracer: &mut T) -> Matches<N>
    where
        N: DocumentNode<'a> + 'a,
        I: IntoIterator<Item = N>,
        T: TraceSink + ?Sized,
    {
        let order = DocumentOrderIndex::build(root);
        let (starting, chain) = self.starting_candidates(root, candidates);
        log::debug!(
            "Evaluating '{}' over {} candidate(s)",
            self.expression,
            starting.len()
        );

        let e_ctx = EvaluationContext::new(root, &order, &self.steps);
        let mut matches = evaluate(&starting, 0, &chain, &e_ctx, tracer);
        // Descendant searches can reach nodes out of order, or more than once.
        matches.nodes = document_order(root, matches.nodes);

        log::debug!(
            "'{}' matched {} node(s) with {} warning(s)",
            self.expression,
            matches.len(),
            matches.warnings.len()
        );
        matches
    }

    /// Applies the root and bookkeeping policies to the caller's candidates.
    /// Returns the candidates and the trace chain they start from.
    fn starting_candidates<'a, N, I>(&self, root: N, candidates: I) -> (Vec<N>, Vec<N>)
    where
        N: DocumentNode<'a> + 'a,
        I: IntoIterator<Item = N>,
    {
        let mut starting = Vec::new();
        let mut expanded = false;
        for candidate in candidates {
            if self.root_policy == RootPolicy::ExpandChildren && candidate.kind() == NodeKind::Root {
                starting.extend(candidate.children());
                expanded = true;
            } else {
                starting.push(candidate);
            }
        }
        let chain = if expanded { vec![root] } else { Vec::new() };

        let starting = match self.meta_policy {
            MetaPolicy::StripTopLevel => strip_bookkeeping(starting),
            MetaPolicy::Keep => starting,
        };
        (starting, chain)
    }
}
