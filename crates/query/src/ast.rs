//! Defines the parsed form of a path expression: an ordered list of steps.
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// How far below the current candidates a step looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `/`: only the candidates themselves (direct children after the first step).
    Immediate,
    /// `//`: candidates and everything nested inside their containers.
    Descendant,
}

/// Which node kinds a step accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSelector {
    /// `*` matches any kind.
    Wildcard,
    /// A short type code, resolved through the alias table (e.g. `g`, `l`).
    Code(String),
}

/// A positional filter applied to the type-filtered matches of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSelector {
    None,
    /// A single position; negative values count from the end.
    Index(i64),
    /// `start:stop:step` with the usual slice semantics. `stop` is always present.
    Slice {
        start: Option<i64>,
        stop: i64,
        step: Option<i64>,
    },
}

/// One `axis type [index]` unit of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub selector: TypeSelector,
    pub index: IndexSelector,
}

/// A parsed expression. Always holds at least one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    steps: Vec<Step>,
}

impl Expression {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Parsed expressions are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_expression(s)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Immediate => f.write_str("/"),
            Axis::Descendant => f.write_str("//"),
        }
    }
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSelector::Wildcard => f.write_str("*"),
            TypeSelector::Code(code) => f.write_str(code),
        }
    }
}

impl fmt::Display for IndexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSelector::None => Ok(()),
            IndexSelector::Index(i) => write!(f, "[{}]", i),
            IndexSelector::Slice { start, stop, step } => {
                f.write_str("[")?;
                if let Some(start) = start {
                    write!(f, "{}", start)?;
                }
                write!(f, ":{}", stop)?;
                if let Some(step) = step {
                    write!(f, ":{}", step)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.axis, self.selector, self.index)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
