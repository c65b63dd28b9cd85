//! Maps the short type codes used in expressions to node kinds.
use crate::ast::TypeSelector;
use crate::document::NodeKind;
use crate::error::QueryError;
use std::collections::HashMap;

const DEFAULT_ALIASES: &[(&str, NodeKind)] = &[
    ("l", NodeKind::Layer),
    ("g", NodeKind::Group),
    ("p", NodeKind::Path),
    ("img", NodeKind::Image),
    ("rect", NodeKind::Rectangle),
    ("circle", NodeKind::Circle),
    ("ellipse", NodeKind::Ellipse),
    ("line", NodeKind::Line),
    ("polyline", NodeKind::Polyline),
    ("polygon", NodeKind::Polygon),
    ("text", NodeKind::Text),
    ("tspan", NodeKind::TextSpan),
    ("use", NodeKind::Use),
    ("a", NodeKind::Anchor),
];

/// A lookup table from type codes (`g`, `l`, ...) to [`NodeKind`]s.
///
/// Looking up a code that is not in the table is an error, so callers can tell
/// "nothing matched" apart from "the selector is invalid".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAliasTable {
    entries: HashMap<String, NodeKind>,
}

impl Default for TagAliasTable {
    fn default() -> Self {
        DEFAULT_ALIASES
            .iter()
            .fold(Self::empty(), |table, &(code, kind)| table.with_alias(code, kind))
    }
}

impl TagAliasTable {
    /// A table with no codes at all.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_alias(mut self, code: &str, kind: NodeKind) -> Self {
        self.insert(code, kind);
        self
    }

    /// Adds or replaces a code, returning the kind it previously mapped to.
    pub fn insert(&mut self, code: &str, kind: NodeKind) -> Option<NodeKind> {
        self.entries.insert(code.to_string(), kind)
    }

    pub fn get(&self, code: &str) -> Option<NodeKind> {
        self.entries.get(code).copied()
    }

    pub fn resolve(&self, code: &str) -> Result<NodeKind, QueryError> {
        self.get(code)
            .ok_or_else(|| QueryError::UnknownTypeAlias(code.to_string()))
    }

    /// All registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A type selector after alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    Any,
    Only(NodeKind),
}

impl KindFilter {
    pub fn matches(self, kind: NodeKind) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::Only(expected) => expected == kind,
        }
    }
}

impl TypeSelector {
    pub fn resolve(&self, aliases: &TagAliasTable) -> Result<KindFilter, QueryError> {
        match self {
            TypeSelector::Wildcard => Ok(KindFilter::Any),
            TypeSelector::Code(code) => aliases.resolve(code).map(KindFilter::Only),
        }
    }
}
