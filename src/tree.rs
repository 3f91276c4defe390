//! Parse tree reconstruction from the flat span list.
//!
//! Spans are emitted when a rule finishes, so every child precedes its
//! parent in the list. Walking the list once with a stack of pending nodes
//! is enough: when a span arrives, every pending node it contains becomes
//! its child.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::cursor::slice;
use crate::rule::Rule;
use crate::span::Span;

/// A node of the parse tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub span: Span,
    pub children: Vec<Node>,
}

impl Node {
    pub fn rule(&self) -> Rule {
        self.span.rule
    }

    /// Depth-first search for the first node of `rule`, including `self`.
    pub fn find(&self, rule: Rule) -> Option<&Node> {
        if self.span.rule == rule {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(rule))
    }

}

/// Build the forest for `spans` (in emission order).
///
/// Zero-width spans are skipped. The returned roots are in input order.
pub fn build(spans: &[Span]) -> Vec<Node> {
    let mut stack: Vec<Node> = Vec::new();
    for span in spans.iter().filter(|s| !s.is_empty()) {
        let mut children = Vec::new();
        while stack.last().is_some_and(|top| span.contains(&top.span)) {
            if let Some(child) = stack.pop() {
                children.push(child);
            }
        }
        children.reverse();
        stack.push(Node {
            span: *span,
            children,
        });
    }
    stack
}

/// Render `forest` one node per line, indented by depth, with the quoted
/// text each node covers.
pub fn render(forest: &[Node], chars: &[char]) -> String {
    let mut out = String::new();
    for root in forest {
        render_node(root, chars, 0, &mut out);
    }
    out
}

fn render_node(node: &Node, chars: &[char], depth: usize, out: &mut String) {
    let text = slice(chars, node.span.begin, node.span.end);
    for _ in 0..depth {
        out.push(' ');
    }
    let _ = writeln!(out, "{} {:?}", node.span.rule, text);
    for child in &node.children {
        render_node(child, chars, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Action;

    fn s(rule: Rule, begin: usize, end: usize) -> Span {
        Span::new(rule, begin, end)
    }

    #[test]
    fn children_keep_input_order() {
        let spans = [
            s(Rule::Question, 0, 1),
            s(Rule::Delimiter, 0, 1),
            s(Rule::FieldChars, 1, 4),
            s(Rule::Text, 1, 4),
            s(Rule::Action(Action::Skip), 4, 4),
            s(Rule::SkipField, 1, 4),
            s(Rule::EndOfInput, 4, 4),
            s(Rule::Expression, 0, 4),
        ];
        let forest = build(&spans);
        assert_eq!(forest.len(), 1);
        let root = &forest[0];
        assert_eq!(root.rule(), Rule::Expression);
        let kids: Vec<_> = root.children.iter().map(Node::rule).collect();
        assert_eq!(kids, [Rule::Delimiter, Rule::SkipField]);
        let skip = &root.children[1];
        assert_eq!(skip.children.len(), 1);
        assert_eq!(skip.children[0].rule(), Rule::Text);
        assert_eq!(skip.children[0].children[0].rule(), Rule::FieldChars);
    }

    #[test]
    fn zero_width_spans_are_dropped() {
        let forest = build(&[s(Rule::EndOfInput, 0, 0)]);
        assert!(forest.is_empty());
    }

    #[test]
    fn disjoint_spans_form_a_forest() {
        let forest = build(&[s(Rule::Digits, 0, 2), s(Rule::Dot, 2, 3)]);
        assert_eq!(forest.len(), 2);
        assert!(forest[1].children.is_empty());
    }

    #[test]
    fn render_indents_by_depth() {
        let chars: Vec<char> = "?ab".chars().collect();
        let forest = build(&[
            s(Rule::Question, 0, 1),
            s(Rule::FieldChars, 1, 3),
            s(Rule::Expression, 0, 3),
        ]);
        assert_eq!(
            render(&forest, &chars),
            "Expression \"?ab\"\n Question \"?\"\n FieldChars \"ab\"\n"
        );
    }

    #[test]
    fn find_searches_depth_first() {
        let forest = build(&[
            s(Rule::Digits, 1, 3),
            s(Rule::Text, 1, 3),
            s(Rule::Width, 0, 3),
        ]);
        assert_eq!(
            forest[0].find(Rule::Digits).map(|n| n.span),
            Some(s(Rule::Digits, 1, 3))
        );
        assert!(forest[0].find(Rule::Height).is_none());
    }
}
