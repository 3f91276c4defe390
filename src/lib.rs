//! Parser for compact image-transform directive strings.
//!
//! Turns strings like `?format=png&w=400&crop(w100,h80,x10,y0)&quality=80`
//! into a [`ParameterMap`]. Parsing runs in two phases: a backtracking PEG
//! pass that records matched spans, then an execution pass that runs the
//! actions recorded in those spans. The spans (and the tree rebuilt from
//! them) can be inspected between the two.
//!
//! # Modules
//!
//! - [`rule`] — Rule kinds and action markers
//! - [`cursor`] — Character buffer and read position
//! - [`span`] — Span records, span table, furthest-failure tracking
//! - [`tree`] — Parse tree reconstruction and rendering
//! - [`params`] — Output maps
//! - [`action`] — Action execution
//! - [`error`] — Parse errors and line/column translation
//! - [`options`] — Parser limits and switches
//! - `directives` — Typed view over a parameter map (feature `directives`)
//!
//! # Example
//!
//! ```
//! use zenquery::{CropKey, Parser};
//!
//! let parsed = Parser::new()
//!     .parse("?format=png&width=10&crop(w10,h20,x1,y2)&aaa=pp")
//!     .expect("valid directive string");
//!
//! let params = parsed.to_params();
//! assert_eq!(params.text("format"), Some("png"));
//! assert_eq!(params.text("width"), Some("10"));
//! assert_eq!(params.crop().and_then(|c| c.get(CropKey::Y)), Some("2"));
//! // Unrecognized fields are skipped, not stored.
//! assert!(!params.contains_key("aaa"));
//! ```
//!
//! Fields whose value does not fit the field's pattern are treated as
//! unrecognized rather than rejected: `?width=10a` parses to an empty map.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod action;
pub mod cursor;
#[cfg(feature = "directives")]
pub mod directives;
mod engine;
pub mod error;
mod grammar;
pub mod options;
pub mod params;
pub mod rule;
pub mod span;
pub mod tree;

pub use action::{Actions, MapActions};
pub use error::{Location, ParseError};
pub use options::ParseOptions;
pub use params::{CropKey, CropParameterMap, ParamKey, ParamValue, ParameterMap};
pub use rule::{Action, Rule};
pub use span::Span;
pub use tree::Node;

use alloc::string::String;
use alloc::vec::Vec;

use engine::Engine;

/// Parse a directive string and execute it into a fresh map.
pub fn parse(input: &str) -> Result<ParameterMap, ParseError> {
    Ok(Parser::new().parse(input)?.to_params())
}

/// Directive string parser.
///
/// Holds configuration only. Every call to [`parse`](Self::parse) builds
/// its own cursor and span table, so a parser can be reused and shared.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Match `input` against the grammar and return the recorded spans.
    ///
    /// No actions run here; call [`Parsed::execute`] or
    /// [`Parsed::to_params`] on the result.
    pub fn parse(&self, input: &str) -> Result<Parsed, ParseError> {
        let len = input.chars().count();
        if let Some(max) = self.options.max_input_len
            && len > max
        {
            tracing::debug!(len, max, "directive string over length limit");
            return Err(ParseError::InputTooLong { len, max });
        }
        tracing::debug!(len, "parsing directive string");

        let mut engine = Engine::new(input, &self.options);
        let matched = grammar::expression(&mut engine);

        if engine.exhausted() {
            let budget = self.options.step_budget.unwrap_or_default();
            tracing::debug!(budget, "step budget exhausted");
            return Err(ParseError::StepBudgetExhausted { budget });
        }
        if !matched {
            let failure = engine
                .furthest()
                .get()
                .unwrap_or(Span::new(Rule::Expression, 0, 0));
            let (cursor, _) = engine.into_parts();
            let err = ParseError::syntax(failure, cursor.chars());
            tracing::debug!(%err, "directive string rejected");
            return Err(err);
        }

        let steps = engine.steps();
        let (cursor, table) = engine.into_parts();
        let spans = table.finish();
        tracing::debug!(spans = spans.len(), steps, "directive string accepted");
        Ok(Parsed {
            chars: cursor.into_chars(),
            spans,
        })
    }
}

/// Result of a successful parse: the input and its live spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed {
    chars: Vec<char>,
    spans: Vec<Span>,
}

impl Parsed {
    /// Spans in emission order. A rule's span follows its children's.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The parsed input.
    pub fn input(&self) -> String {
        self.chars.iter().collect()
    }

    /// Text covered by `span`.
    pub fn text(&self, span: &Span) -> String {
        cursor::slice(&self.chars, span.begin, span.end)
    }

    /// Rebuild the parse tree from the spans.
    pub fn tree(&self) -> Vec<Node> {
        tree::build(&self.spans)
    }

    /// Indented rendering of [`tree`](Self::tree).
    pub fn syntax_tree(&self) -> String {
        tree::render(&self.tree(), &self.chars)
    }

    /// Run the recorded actions against `actions`.
    pub fn execute<A: Actions + ?Sized>(&self, actions: &mut A) {
        action::execute(&self.spans, &self.chars, actions);
    }

    /// Run the recorded actions into caller-owned maps.
    pub fn execute_into(&self, params: &mut ParameterMap, crop: &mut CropParameterMap) {
        self.execute(&mut MapActions::new(params, crop));
    }

    /// Run the recorded actions into a fresh map.
    pub fn to_params(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        let mut crop = CropParameterMap::new();
        self.execute_into(&mut params, &mut crop);
        params
    }
}
