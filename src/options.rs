//! Parser configuration.

/// Limits and grammar switches for a [`Parser`](crate::Parser).
///
/// ```
/// use zenquery::{ParseOptions, Parser};
///
/// let parser = Parser::with_options(
///     ParseOptions::new().empty_fields(true).step_budget(10_000),
/// );
/// let params = parser.parse("?w=10&&h=20").unwrap().to_params();
/// assert_eq!(params.text("height"), Some("20"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseOptions {
    /// Reject input longer than this many characters before parsing.
    pub max_input_len: Option<usize>,
    /// Maximum number of rule invocations for one parse.
    pub step_budget: Option<usize>,
    /// Accept a bare delimiter as an empty field (`?a=1&&b=2`, trailing `&`).
    pub empty_fields: bool,
    /// Initial span table capacity.
    pub span_capacity: usize,
}

/// Default input cap, in characters.
pub const DEFAULT_MAX_INPUT_LEN: usize = 8 * 1024;

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self {
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
            step_budget: None,
            empty_fields: false,
            span_capacity: 64,
        }
    }

    /// Set the input length cap. `None` disables it.
    pub fn max_input_len(mut self, max: impl Into<Option<usize>>) -> Self {
        self.max_input_len = max.into();
        self
    }

    /// Set the rule invocation budget. `None` disables it.
    pub fn step_budget(mut self, budget: impl Into<Option<usize>>) -> Self {
        self.step_budget = budget.into();
        self
    }

    /// Allow empty fields between delimiters.
    pub fn empty_fields(mut self, allow: bool) -> Self {
        self.empty_fields = allow;
        self
    }

    /// Set the initial span table capacity.
    pub fn span_capacity(mut self, capacity: usize) -> Self {
        self.span_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cap_length_only() {
        let o = ParseOptions::default();
        assert_eq!(o.max_input_len, Some(DEFAULT_MAX_INPUT_LEN));
        assert_eq!(o.step_budget, None);
        assert!(!o.empty_fields);
    }

    #[test]
    fn builders_accept_plain_and_none() {
        let o = ParseOptions::new().max_input_len(None).step_budget(500);
        assert_eq!(o.max_input_len, None);
        assert_eq!(o.step_budget, Some(500));
    }
}
