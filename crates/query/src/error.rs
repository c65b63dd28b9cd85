use thiserror::Error;

/// The category of an expression that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Nothing but whitespace was supplied.
    Empty,
    /// Missing axis or type token, stray characters, unbalanced brackets.
    Syntax,
    /// A slice without a stop bound, e.g. `[1:]`.
    UnsupportedSlice,
    /// A slice whose step is zero, e.g. `[0:4:0]`.
    ZeroSliceStep,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot parse '{expression}' at '{fragment}': {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub expression: String,
    /// The offending part of the expression.
    pub fragment: String,
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(
        kind: ParseErrorKind,
        expression: &str,
        fragment: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            expression: expression.to_string(),
            fragment: fragment.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn syntax(expression: &str, fragment: &str, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Syntax, expression, fragment, message)
    }
}

/// Errors that abort a whole query. No partial results are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown type alias '{0}'")]
    UnknownTypeAlias(String),
}

/// Problems that are contained to a single step; evaluation carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryWarning {
    #[error("Index {index} out of range for {len} match(es) of step '{step}'")]
    IndexOutOfRange { step: String, index: i64, len: usize },
}
