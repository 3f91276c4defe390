//! Parse failures and source locations.

use alloc::string::String;
use core::fmt;

use crate::cursor::slice;
use crate::rule::Rule;
use crate::span::Span;

/// Line and column of a character offset.
///
/// Lines start at 1. The column counts characters on the line up to and
/// including the one at the offset, so the first character of a line is
/// column 1. A newline itself is column 0 of the line it starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} symbol {}", self.line, self.column)
    }
}

/// Locate a set of offsets in one pass over `chars`.
///
/// Offsets may be anywhere in `0..=chars.len()`; the end-of-input sentinel
/// counts as one ordinary character. Results are in the order of `offsets`.
pub fn locate<const N: usize>(chars: &[char], offsets: [usize; N]) -> [Location; N] {
    let mut found = [Location { line: 1, column: 0 }; N];
    let last = offsets.iter().copied().max().unwrap_or(0).min(chars.len());
    let (mut line, mut column) = (1, 0);
    for i in 0..=last {
        if chars.get(i) == Some(&'\n') {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
        for (slot, &offset) in found.iter_mut().zip(offsets.iter()) {
            if offset.min(chars.len()) == i {
                *slot = Location { line, column };
            }
        }
    }
    found
}

/// Why a directive string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The grammar did not match through the end of the input.
    ///
    /// `rule` and the locations come from the deepest-reaching failed rule,
    /// which is the most likely place of the mistake but not always the one
    /// the author would point at.
    #[error("parse error near {rule} ({begin} - {end}): {text:?}")]
    Syntax {
        rule: Rule,
        begin: Location,
        end: Location,
        text: String,
    },
    /// Input exceeded [`ParseOptions::max_input_len`](crate::ParseOptions::max_input_len).
    #[error("input is {len} characters, limit is {max}")]
    InputTooLong { len: usize, max: usize },
    /// The parse gave up after [`ParseOptions::step_budget`](crate::ParseOptions::step_budget)
    /// rule invocations.
    #[error("step budget of {budget} rule invocations exhausted")]
    StepBudgetExhausted { budget: usize },
}

impl ParseError {
    /// Build a syntax error for the failed span over `chars`.
    pub(crate) fn syntax(span: Span, chars: &[char]) -> Self {
        let [begin, end] = locate(chars, [span.begin, span.end]);
        Self::Syntax {
            rule: span.rule,
            begin,
            end,
            text: slice(chars, span.begin, span.end),
        }
    }
}
