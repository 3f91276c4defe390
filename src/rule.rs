//! Rule kinds of the directive grammar.
//!
//! Every named grammar rule has a [`Rule`] variant. A rule that matches
//! emits a [`Span`](crate::Span) tagged with its kind; the two synthetic
//! kinds, [`Rule::Text`] and [`Rule::Action`], mark captured text and the
//! semantic action bound to it.

use core::fmt;

use crate::params::{CropKey, ParamKey};

/// Semantic action attached to a successful field match.
///
/// Actions are recorded as zero-width spans and only run when the span list
/// is executed, after parsing has finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Write the last captured text under a top-level key.
    Set(ParamKey),
    /// Write the last captured text into the crop map.
    SetCrop(CropKey),
    /// Report the last captured text as an unrecognized field.
    Skip,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(key) => write!(f, "set {key}"),
            Self::SetCrop(key) => write!(f, "set crop.{key}"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

/// Kind of a grammar rule, carried by every emitted span.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    // Structure
    Expression,
    Format,
    Progressive,
    Width,
    Height,
    Fit,
    Scale,
    Reverse,
    Crop,
    CropBody,
    CropField,
    CropWidth,
    CropHeight,
    CropX,
    CropY,
    Quality,
    Exif,
    SkipField,

    // Value classes
    Separator,
    Delimiter,
    Bool,
    FitValue,
    ReverseValue,
    Open,
    Close,
    Digits,
    LowerCase,
    FieldChars,

    // Keys
    FormatKey,
    ProgressiveKey,
    WidthKey,
    HeightKey,
    FitKey,
    ScaleKey,
    ReverseKey,
    CropKey,
    QualityKey,
    ExifKey,

    // Single characters
    Equal,
    Question,
    Ampersand,
    Dot,
    Comma,
    Hyphen,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    EndOfInput,

    /// Text captured for the next action.
    Text,
    /// Zero-width marker for a semantic action.
    Action(Action),
}

impl Rule {
    /// Rule name as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Expression => "Expression",
            Self::Format => "Format",
            Self::Progressive => "Progressive",
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Fit => "Fit",
            Self::Scale => "Scale",
            Self::Reverse => "Reverse",
            Self::Crop => "Crop",
            Self::CropBody => "CropBody",
            Self::CropField => "CropField",
            Self::CropWidth => "CropWidth",
            Self::CropHeight => "CropHeight",
            Self::CropX => "CropX",
            Self::CropY => "CropY",
            Self::Quality => "Quality",
            Self::Exif => "Exif",
            Self::SkipField => "SkipField",
            Self::Separator => "Separator",
            Self::Delimiter => "Delimiter",
            Self::Bool => "Bool",
            Self::FitValue => "FitValue",
            Self::ReverseValue => "ReverseValue",
            Self::Open => "Open",
            Self::Close => "Close",
            Self::Digits => "Digits",
            Self::LowerCase => "LowerCase",
            Self::FieldChars => "FieldChars",
            Self::FormatKey => "FormatKey",
            Self::ProgressiveKey => "ProgressiveKey",
            Self::WidthKey => "WidthKey",
            Self::HeightKey => "HeightKey",
            Self::FitKey => "FitKey",
            Self::ScaleKey => "ScaleKey",
            Self::ReverseKey => "ReverseKey",
            Self::CropKey => "CropKey",
            Self::QualityKey => "QualityKey",
            Self::ExifKey => "ExifKey",
            Self::Equal => "Equal",
            Self::Question => "Question",
            Self::Ampersand => "Ampersand",
            Self::Dot => "Dot",
            Self::Comma => "Comma",
            Self::Hyphen => "Hyphen",
            Self::OpenParen => "OpenParen",
            Self::CloseParen => "CloseParen",
            Self::OpenBrace => "OpenBrace",
            Self::CloseBrace => "CloseBrace",
            Self::OpenBracket => "OpenBracket",
            Self::CloseBracket => "CloseBracket",
            Self::EndOfInput => "EndOfInput",
            Self::Text => "Text",
            Self::Action(_) => "Action",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => write!(f, "Action({action})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_uses_rule_name() {
        assert_eq!(Rule::CropBody.to_string(), "CropBody");
        assert_eq!(Rule::EndOfInput.to_string(), "EndOfInput");
    }

    #[test]
    fn action_display_names_target() {
        assert_eq!(
            Rule::Action(Action::Set(ParamKey::Width)).to_string(),
            "Action(set width)"
        );
        assert_eq!(
            Rule::Action(Action::SetCrop(CropKey::X)).to_string(),
            "Action(set crop.x)"
        );
        assert_eq!(Rule::Action(Action::Skip).to_string(), "Action(skip)");
    }
}
