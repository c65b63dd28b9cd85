// src/report.rs
use serde::{Deserialize, Serialize};
use zpath_query::{DocumentNode, Matches};

/// One matched element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub kind: String,
}

/// The serializable outcome of a query: matches in document order plus warnings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryReport {
    pub expression: String,
    pub matches: Vec<MatchRecord>,
    pub warnings: Vec<String>,
    /// Indented trace lines, present only when tracing was requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<String>,
}

impl QueryReport {
    pub fn new<'a, N: DocumentNode<'a>>(expression: &str, matches: &Matches<N>) -> Self {
        Self {
            expression: expression.to_string(),
            matches: matches
                .iter()
                .map(|node| MatchRecord {
                    id: node.id().into_owned(),
                    kind: node.kind().to_string(),
                })
                .collect(),
            warnings: matches.warnings.iter().map(ToString::to_string).collect(),
            trace: Vec::new(),
        }
    }

    pub fn with_trace(mut self, trace: Vec<String>) -> Self {
        self.trace = trace;
        self
    }

    pub fn ids(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.id.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
