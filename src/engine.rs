//! Backtracking combinators.
//!
//! The [`Engine`] owns all mutable state of one parse: the cursor, the span
//! table, and the furthest-failure record. Grammar rules are plain
//! functions of type [`Matcher`] that return `true` on a match. A rule that
//! returns `false` must leave the cursor and the span commit index where it
//! found them; every combinator here upholds that by taking a
//! [`Checkpoint`] before it starts and restoring it on failure.

use core::mem;

use crate::cursor::Cursor;
use crate::options::ParseOptions;
use crate::rule::{Action, Rule};
use crate::span::{FurthestFailure, SpanTable};

/// A grammar rule or fragment.
pub(crate) type Matcher = fn(&mut Engine) -> bool;

/// Cursor position plus span commit index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Checkpoint {
    position: usize,
    commit: usize,
}

pub(crate) struct Engine {
    cursor: Cursor,
    spans: SpanTable,
    furthest: FurthestFailure,
    /// Deepest offset reached inside the innermost active rule.
    reach: usize,
    steps: usize,
    budget: Option<usize>,
    exhausted: bool,
    empty_fields: bool,
}

impl Engine {
    pub fn new(input: &str, options: &ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            spans: SpanTable::with_capacity(options.span_capacity),
            furthest: FurthestFailure::new(),
            reach: 0,
            steps: 0,
            budget: options.step_budget,
            exhausted: false,
            empty_fields: options.empty_fields,
        }
    }

    // ---- State ----

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.cursor.position(),
            commit: self.spans.commit(),
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.reset_to(checkpoint.position);
        self.spans.rewind(checkpoint.commit);
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn empty_fields(&self) -> bool {
        self.empty_fields
    }

    /// True once the step budget ran out. Every rule fails from then on.
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn furthest(&self) -> &FurthestFailure {
        &self.furthest
    }

    pub fn into_parts(self) -> (Cursor, SpanTable) {
        (self.cursor, self.spans)
    }

    fn tick(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.steps += 1;
        if let Some(budget) = self.budget
            && self.steps > budget
        {
            self.exhausted = true;
            return false;
        }
        true
    }

    fn bump(&mut self) {
        self.cursor.advance();
        self.reach = self.reach.max(self.cursor.position());
    }

    /// A character was looked at and rejected. It still counts toward
    /// reach, so a failure report covers it.
    fn reject(&mut self) {
        self.reach = self.reach.max(self.cursor.position() + 1);
    }

    // ---- Named rules ----

    /// Run `body` as the named rule `rule`.
    ///
    /// On success emits `rule` over the consumed range. On failure records
    /// how far the attempt got, then restores the cursor and span table.
    pub fn rule(&mut self, rule: Rule, body: impl FnOnce(&mut Self) -> bool) -> bool {
        if !self.tick() {
            return false;
        }
        let start = self.checkpoint();
        let outer_reach = mem::replace(&mut self.reach, start.position);
        let matched = body(self);
        let reached = self.reach;
        self.reach = outer_reach.max(reached);

        if matched {
            self.spans.emit(rule, start.position, self.cursor.position());
            true
        } else {
            self.furthest.record(rule, start.position, reached);
            self.restore(start);
            false
        }
    }

    /// Match `body` and emit a [`Rule::Text`] span over what it consumed.
    pub fn capture(&mut self, body: Matcher) -> bool {
        let begin = self.cursor.position();
        if body(self) {
            self.spans.emit(Rule::Text, begin, self.cursor.position());
            true
        } else {
            false
        }
    }

    /// Emit a zero-width action marker. Always matches.
    pub fn action(&mut self, action: Action) -> bool {
        let at = self.cursor.position();
        self.spans.emit(Rule::Action(action), at, at);
        true
    }

    // ---- Combinators ----

    /// All of `parts` in order, or nothing.
    pub fn sequence(&mut self, parts: &[Matcher]) -> bool {
        let start = self.checkpoint();
        for part in parts {
            if !part(self) {
                self.restore(start);
                return false;
            }
        }
        true
    }

    /// First alternative that matches. Each failed alternative is rolled
    /// back before the next is tried.
    pub fn choice(&mut self, alternatives: &[Matcher]) -> bool {
        let start = self.checkpoint();
        for alternative in alternatives {
            if alternative(self) {
                return true;
            }
            self.restore(start);
        }
        false
    }

    /// Zero or one. Always matches.
    pub fn optional(&mut self, body: Matcher) -> bool {
        let start = self.checkpoint();
        if !body(self) {
            self.restore(start);
        }
        true
    }

    /// Greedy repetition. Always matches.
    pub fn zero_or_more(&mut self, body: Matcher) -> bool {
        loop {
            let start = self.checkpoint();
            if !body(self) {
                self.restore(start);
                return true;
            }
            // A zero-width repetition would loop forever.
            if self.position() == start.position {
                return true;
            }
        }
    }

    /// Greedy repetition of at least one.
    pub fn one_or_more(&mut self, body: Matcher) -> bool {
        let start = self.checkpoint();
        if !body(self) {
            self.restore(start);
            return false;
        }
        self.zero_or_more(body)
    }

    /// Positive lookahead: matches iff `body` does, consumes nothing.
    pub fn followed_by(&mut self, body: Matcher) -> bool {
        let start = self.checkpoint();
        let matched = body(self);
        self.restore(start);
        matched
    }

    /// Negative lookahead: matches iff `body` does not, consumes nothing.
    pub fn not_followed_by(&mut self, body: Matcher) -> bool {
        let start = self.checkpoint();
        let matched = body(self);
        self.restore(start);
        !matched
    }

    // ---- Terminals ----

    /// One specific character.
    pub fn char(&mut self, expected: char) -> bool {
        match self.cursor.peek() {
            Some(c) if c == expected => {
                self.bump();
                true
            }
            Some(_) => {
                self.reject();
                false
            }
            None => false,
        }
    }

    /// One character satisfying `pred`.
    pub fn char_if(&mut self, pred: fn(char) -> bool) -> bool {
        match self.cursor.peek() {
            Some(c) if pred(c) => {
                self.bump();
                true
            }
            Some(_) => {
                self.reject();
                false
            }
            None => false,
        }
    }

    /// A run of at least one character satisfying `pred`.
    pub fn chars_while(&mut self, pred: fn(char) -> bool) -> bool {
        if !self.char_if(pred) {
            return false;
        }
        while self.char_if(pred) {}
        true
    }

    /// An exact string, or nothing.
    pub fn literal(&mut self, expected: &str) -> bool {
        let start = self.checkpoint();
        for c in expected.chars() {
            if !self.char(c) {
                self.restore(start);
                return false;
            }
        }
        true
    }

    /// Any single character except the end sentinel.
    pub fn any(&mut self) -> bool {
        if self.cursor.at_end() {
            false
        } else {
            self.bump();
            true
        }
    }
}
