//! A `nom`-based parser for the path-expression language.
//!
//! ```text
//! expression := step+
//! step       := ("/" | "//") (identifier | "*") ("[" index "]")?
//! index      := int | int? ":" int (":" int?)?
//! ```
//!
//! The whole expression is turned into a step list once; evaluation never
//! looks at the text again.

use super::ast::*;
use crate::error::{ParseError, ParseErrorKind};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{consumed, map, map_res, opt, recognize},
    sequence::{delimited, pair, preceded},
};

// --- Main Public Parser ---

pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::Empty,
            input,
            "",
            "expression is empty",
        ));
    }

    let mut steps = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let (remaining, next) = step(rest, input)?;
        steps.push(next);
        rest = remaining;
    }
    Ok(Expression::new(steps))
}

/// Parses one step, mapping each failure point to a diagnostic that names the offending text.
fn step<'i>(input: &'i str, expression: &str) -> Result<(&'i str, Step), ParseError> {
    let (rest, axis) = axis(input)
        .map_err(|_| ParseError::syntax(expression, input, "expected '/' or '//'"))?;
    let (rest, selector) = type_selector(rest)
        .map_err(|_| ParseError::syntax(expression, input, "missing type selector"))?;

    if !rest.starts_with('[') {
        return Ok((
            rest,
            Step {
                axis,
                selector,
                index: IndexSelector::None,
            },
        ));
    }

    let (rest, (fragment, raw)) = bracketed_index(rest)
        .map_err(|_| ParseError::syntax(expression, rest, "malformed index selector"))?;
    let index = raw.into_selector(expression, fragment)?;
    Ok((
        rest,
        Step {
            axis,
            selector,
            index,
        },
    ))
}

// --- Combinators ---

fn axis(input: &str) -> IResult<&str, Axis> {
    alt((
        map(tag("//"), |_| Axis::Descendant),
        map(tag("/"), |_| Axis::Immediate),
    ))
    .parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_').parse(input)
}

fn type_selector(input: &str) -> IResult<&str, TypeSelector> {
    alt((
        map(char('*'), |_| TypeSelector::Wildcard),
        map(identifier, |code: &str| TypeSelector::Code(code.to_string())),
    ))
    .parse(input)
}

fn signed_int(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })
    .parse(input)
}

/// Index body before validation: the grammar accepts an open stop so the
/// error can be reported as an unsupported slice rather than a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawIndex {
    Index(i64),
    Slice {
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    },
}

impl RawIndex {
    fn into_selector(self, expression: &str, fragment: &str) -> Result<IndexSelector, ParseError> {
        match self {
            RawIndex::Index(i) => Ok(IndexSelector::Index(i)),
            RawIndex::Slice { stop: None, .. } => Err(ParseError::new(
                ParseErrorKind::UnsupportedSlice,
                expression,
                fragment,
                "slice stop bound is required",
            )),
            RawIndex::Slice { step: Some(0), .. } => Err(ParseError::new(
                ParseErrorKind::ZeroSliceStep,
                expression,
                fragment,
                "slice step cannot be zero",
            )),
            RawIndex::Slice {
                start,
                stop: Some(stop),
                step,
            } => Ok(IndexSelector::Slice { start, stop, step }),
        }
    }
}

fn slice_body(input: &str) -> IResult<&str, RawIndex> {
    map(
        (
            opt(signed_int),
            char(':'),
            opt(signed_int),
            opt(preceded(char(':'), opt(signed_int))),
        ),
        |(start, _, stop, step)| RawIndex::Slice {
            start,
            stop,
            step: step.flatten(),
        },
    )
    .parse(input)
}

fn index_body(input: &str) -> IResult<&str, RawIndex> {
    alt((slice_body, map(signed_int, RawIndex::Index))).parse(input)
}

fn bracketed_index(input: &str) -> IResult<&str, (&str, RawIndex)> {
    consumed(delimited(char('['), index_body, char(']'))).parse(input)
}
