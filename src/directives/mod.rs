//! Typed view over a parsed [`ParameterMap`](crate::ParameterMap).
//!
//! The parameter map keeps every value as the text the grammar captured, so
//! `?width=1.2.3` stores `"1.2.3"`. This module converts that text into
//! numbers and enums, reporting anything that does not convert as a
//! warning instead of failing.
//!
//! # Example
//!
//! ```
//! use zenquery::directives::{self, FitMode};
//!
//! let result = directives::parse("?w=800&fit=max&crop(x10,y20,w100,h50)")
//!     .expect("valid directive string");
//! assert!(result.warnings.is_empty());
//!
//! let d = result.directives;
//! assert_eq!(d.width, Some(800));
//! assert_eq!(d.fit, Some(FitMode::Max));
//! assert_eq!(d.crop.and_then(|c| c.rect()), Some((10, 20, 100, 50)));
//! ```

mod convert;
pub mod instructions;

pub use instructions::{CropRegion, Directives, FitMode, Reverse};

use alloc::string::String;
use alloc::vec::Vec;

use crate::ParseError;

/// Result of parsing a directive string into typed directives.
#[derive(Debug, Clone)]
pub struct DirectiveResult {
    /// Converted directives.
    pub directives: Directives,
    /// Non-fatal conversion warnings.
    pub warnings: Vec<ConvertWarning>,
}

/// Non-fatal warning from converting a parameter map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertWarning {
    /// A key was recognized but its value did not convert.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    /// A key the grammar never produces.
    KeyNotRecognized { key: String },
}

/// Parse a directive string and convert it to typed directives.
///
/// Syntax errors are still errors; conversion problems become warnings.
pub fn parse(input: &str) -> Result<DirectiveResult, ParseError> {
    let params = crate::parse(input)?;
    let (directives, warnings) = Directives::from_params(&params);
    Ok(DirectiveResult {
        directives,
        warnings,
    })
}
