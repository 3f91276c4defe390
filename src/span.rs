//! Span records, the span table, and the furthest-failure tracker.

use alloc::vec::Vec;
use core::fmt;

use crate::rule::Rule;

/// A matched rule over the half-open character range `begin..end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub rule: Rule,
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub fn new(rule: Rule, begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "span {rule} {begin}..{end} is inverted");
        Self { rule, begin, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Zero-width spans (actions, lookahead-only rules) carry no text.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// True if `other` lies within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.rule, self.begin, self.end)
    }
}

/// Spans in emission order, with a commit index.
///
/// Slots at or past the commit index are dead: they were emitted inside an
/// attempt that later backtracked. They stay in storage until overwritten by
/// a later emission or dropped by [`finish`](Self::finish).
#[derive(Clone, Debug)]
pub struct SpanTable {
    slots: Vec<Span>,
    commit: usize,
}

impl SpanTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            commit: 0,
        }
    }

    /// Number of live spans.
    pub fn commit(&self) -> usize {
        self.commit
    }

    /// Discard every span emitted after `commit`.
    pub fn rewind(&mut self, commit: usize) {
        debug_assert!(commit <= self.slots.len());
        self.commit = commit;
    }

    /// Write a span at the commit index and advance it.
    pub fn emit(&mut self, rule: Rule, begin: usize, end: usize) {
        let span = Span::new(rule, begin, end);
        if let Some(slot) = self.slots.get_mut(self.commit) {
            *slot = span;
        } else {
            self.slots.push(span);
        }
        self.commit += 1;
    }

    /// Live spans.
    pub fn live(&self) -> &[Span] {
        &self.slots[..self.commit]
    }

    /// Storage length, including dead slots.
    pub fn stored(&self) -> usize {
        self.slots.len()
    }

    /// Truncate storage to the live spans and return them.
    pub fn finish(mut self) -> Vec<Span> {
        self.slots.truncate(self.commit);
        self.slots
    }
}

/// Deepest-reaching failed rule seen during a parse.
#[derive(Copy, Clone, Debug, Default)]
pub struct FurthestFailure {
    deepest: Option<Span>,
}

impl FurthestFailure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure of `rule` that started at `begin` and reached `end`.
    /// Ties keep the earlier record.
    pub fn record(&mut self, rule: Rule, begin: usize, end: usize) {
        match self.deepest {
            Some(d) if end <= d.end => {}
            _ => self.deepest = Some(Span::new(rule, begin, end)),
        }
    }

    pub fn get(&self) -> Option<Span> {
        self.deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rewind_discards_then_overwrites() {
        let mut t = SpanTable::with_capacity(1);
        t.emit(Rule::Question, 0, 1);
        let mark = t.commit();
        t.emit(Rule::WidthKey, 1, 6);
        t.emit(Rule::Equal, 6, 7);
        t.rewind(mark);
        assert_eq!(t.live(), &[Span::new(Rule::Question, 0, 1)]);
        assert_eq!(t.stored(), 3);

        t.emit(Rule::FieldChars, 1, 4);
        assert_eq!(t.live()[1], Span::new(Rule::FieldChars, 1, 4));
        assert_eq!(t.stored(), 3);

        let spans = t.finish();
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn furthest_failure_keeps_deepest() {
        let mut f = FurthestFailure::new();
        f.record(Rule::Question, 0, 0);
        assert_eq!(f.get(), Some(Span::new(Rule::Question, 0, 0)));
        f.record(Rule::Width, 1, 9);
        f.record(Rule::SkipField, 1, 9);
        f.record(Rule::Height, 1, 3);
        assert_eq!(f.get(), Some(Span::new(Rule::Width, 1, 9)));
    }

    #[test]
    fn containment_is_inclusive() {
        let outer = Span::new(Rule::Crop, 1, 10);
        assert!(outer.contains(&Span::new(Rule::CropKey, 1, 5)));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&Span::new(Rule::Ampersand, 10, 11)));
    }

    #[test]
    fn display_lists_rule_and_offsets() {
        assert_eq!(Span::new(Rule::Digits, 7, 9).to_string(), "Digits 7 9");
    }
}
