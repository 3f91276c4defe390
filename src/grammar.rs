//! The directive grammar.
//!
//! ```text
//! Expression   <- (Delimiter Field)+ EndOfInput
//! Field        <- Width / Height / Quality / Format / Crop / Fit / Scale
//!                 / Reverse / Progressive / Exif / SkipField
//! Width        <- WidthKey Separator <Number> FieldEnd {set width}
//! Format       <- FormatKey Separator <LowerCase> FieldEnd {set format}
//! Progressive  <- ProgressiveKey Separator <Bool> FieldEnd {set progressive}
//! Fit          <- FitKey Separator <FitValue> FieldEnd {set fit}
//! Reverse      <- ReverseKey Separator <ReverseValue> FieldEnd {set reverse}
//! Crop         <- CropKey CropBody FieldEnd
//! CropBody     <- Open CropField+ Close
//! CropField    <- Separator? (CropWidth / CropHeight / CropX / CropY)
//! CropWidth    <- WidthKey Separator? <Number> {set crop.width}
//! SkipField    <- <FieldChars> FieldEnd {skip}
//! FieldEnd     <- &Delimiter / EndOfInput
//! Number       <- (Digits / Dot)+
//! Separator    <- '=' / '.' / '-' / ','
//! Delimiter    <- '?' / '&'
//! EndOfInput   <- !.
//! ```
//!
//! `<...>` marks captured text and `{...}` the action that consumes it.
//! Height, Scale, Quality and Exif follow the Width/Progressive shapes.

use crate::engine::{Engine, Matcher};
use crate::params::{CropKey, ParamKey};
use crate::rule::{Action, Rule};

/// Match a whole directive string.
pub(crate) fn expression(e: &mut Engine) -> bool {
    e.rule(Rule::Expression, |e| {
        e.sequence(&[|e| e.one_or_more(field_entry), end_of_input])
    })
}

fn field_entry(e: &mut Engine) -> bool {
    e.choice(&[|e| e.sequence(&[delimiter, field]), empty_field])
}

fn empty_field(e: &mut Engine) -> bool {
    e.empty_fields() && delimiter(e)
}

fn field(e: &mut Engine) -> bool {
    e.choice(&[
        width,
        height,
        quality,
        format,
        crop,
        fit,
        scale,
        reverse,
        progressive,
        exif,
        skip_field,
    ])
}

// ---- Fields ----

/// `key separator <value> field-end {set target}`.
fn keyed_field(e: &mut Engine, rule: Rule, key: Matcher, value: Matcher, target: ParamKey) -> bool {
    e.rule(rule, |e| {
        key(e)
            && separator(e)
            && e.capture(value)
            && field_end(e)
            && e.action(Action::Set(target))
    })
}

fn width(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Width, width_key, number, ParamKey::Width)
}

fn height(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Height, height_key, number, ParamKey::Height)
}

fn quality(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Quality, quality_key, number, ParamKey::Quality)
}

fn format(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Format, format_key, lower_case, ParamKey::Format)
}

fn fit(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Fit, fit_key, fit_value, ParamKey::Fit)
}

fn scale(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Scale, scale_key, number, ParamKey::Scale)
}

fn reverse(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Reverse, reverse_key, reverse_value, ParamKey::Reverse)
}

fn progressive(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Progressive, progressive_key, bool_value, ParamKey::Progressive)
}

fn exif(e: &mut Engine) -> bool {
    keyed_field(e, Rule::Exif, exif_key, bool_value, ParamKey::Exif)
}

fn skip_field(e: &mut Engine) -> bool {
    e.rule(Rule::SkipField, |e| {
        e.capture(field_chars) && field_end(e) && e.action(Action::Skip)
    })
}

/// Followed by a delimiter, or at the end. Consumes nothing.
fn field_end(e: &mut Engine) -> bool {
    e.choice(&[|e| e.followed_by(delimiter), end_of_input])
}

// ---- Crop ----

fn crop(e: &mut Engine) -> bool {
    e.rule(Rule::Crop, |e| e.sequence(&[crop_key, crop_body, field_end]))
}

fn crop_body(e: &mut Engine) -> bool {
    e.rule(Rule::CropBody, |e| {
        e.sequence(&[open, |e| e.one_or_more(crop_field), close])
    })
}

fn crop_field(e: &mut Engine) -> bool {
    e.rule(Rule::CropField, |e| {
        e.optional(separator) && e.choice(&[crop_width, crop_height, crop_x, crop_y])
    })
}

/// `key separator? <number> {set crop.target}`.
fn crop_component(e: &mut Engine, rule: Rule, key: Matcher, target: CropKey) -> bool {
    e.rule(rule, |e| {
        key(e) && e.optional(separator) && e.capture(number) && e.action(Action::SetCrop(target))
    })
}

fn crop_width(e: &mut Engine) -> bool {
    crop_component(e, Rule::CropWidth, width_key, CropKey::Width)
}

fn crop_height(e: &mut Engine) -> bool {
    crop_component(e, Rule::CropHeight, height_key, CropKey::Height)
}

fn crop_x(e: &mut Engine) -> bool {
    crop_component(e, Rule::CropX, |e| e.char('x'), CropKey::X)
}

fn crop_y(e: &mut Engine) -> bool {
    crop_component(e, Rule::CropY, |e| e.char('y'), CropKey::Y)
}

fn open(e: &mut Engine) -> bool {
    e.rule(Rule::Open, |e| e.choice(&[open_paren, open_brace, open_bracket]))
}

fn close(e: &mut Engine) -> bool {
    e.rule(Rule::Close, |e| e.choice(&[close_paren, close_brace, close_bracket]))
}

// ---- Values ----

fn number(e: &mut Engine) -> bool {
    e.one_or_more(|e| e.choice(&[digits, dot]))
}

fn digits(e: &mut Engine) -> bool {
    e.rule(Rule::Digits, |e| e.chars_while(|c| c.is_ascii_digit()))
}

fn lower_case(e: &mut Engine) -> bool {
    e.rule(Rule::LowerCase, |e| e.chars_while(|c| c.is_ascii_lowercase()))
}

fn bool_value(e: &mut Engine) -> bool {
    e.rule(Rule::Bool, |e| {
        e.choice(&[|e| e.literal("true"), |e| e.literal("false")])
    })
}

fn fit_value(e: &mut Engine) -> bool {
    e.rule(Rule::FitValue, |e| {
        e.choice(&[
            |e| e.literal("clip"),
            |e| e.literal("scale"),
            |e| e.literal("max"),
            |e| e.literal("crop"),
        ])
    })
}

fn reverse_value(e: &mut Engine) -> bool {
    e.rule(Rule::ReverseValue, |e| {
        e.choice(&[|e| e.literal("flip"), |e| e.literal("flop")])
    })
}

fn field_chars(e: &mut Engine) -> bool {
    e.rule(Rule::FieldChars, |e| e.chars_while(is_field_char))
}

/// Characters an unrecognized field may contain.
pub(crate) fn is_field_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '*' | '{' | '}' | '(' | ')' | ',' | ':' | ';' | '%' | '#' | '=' | '/' | '.' | '-' | '+'
        )
}

fn separator(e: &mut Engine) -> bool {
    e.rule(Rule::Separator, |e| e.choice(&[equal, dot, hyphen, comma]))
}

fn delimiter(e: &mut Engine) -> bool {
    e.rule(Rule::Delimiter, |e| e.choice(&[question, ampersand]))
}

fn end_of_input(e: &mut Engine) -> bool {
    e.rule(Rule::EndOfInput, |e| e.not_followed_by(Engine::any))
}

// ---- Keys ----

fn format_key(e: &mut Engine) -> bool {
    e.rule(Rule::FormatKey, |e| e.literal("format"))
}

fn progressive_key(e: &mut Engine) -> bool {
    e.rule(Rule::ProgressiveKey, |e| e.literal("progressive"))
}

fn width_key(e: &mut Engine) -> bool {
    e.rule(Rule::WidthKey, |e| {
        e.choice(&[|e| e.literal("width"), |e| e.char('w')])
    })
}

fn height_key(e: &mut Engine) -> bool {
    e.rule(Rule::HeightKey, |e| {
        e.choice(&[|e| e.literal("height"), |e| e.char('h')])
    })
}

fn fit_key(e: &mut Engine) -> bool {
    e.rule(Rule::FitKey, |e| e.literal("fit"))
}

fn scale_key(e: &mut Engine) -> bool {
    e.rule(Rule::ScaleKey, |e| e.literal("scale"))
}

fn reverse_key(e: &mut Engine) -> bool {
    e.rule(Rule::ReverseKey, |e| e.literal("reverse"))
}

fn crop_key(e: &mut Engine) -> bool {
    e.rule(Rule::CropKey, |e| e.literal("crop"))
}

fn quality_key(e: &mut Engine) -> bool {
    e.rule(Rule::QualityKey, |e| {
        e.choice(&[|e| e.literal("quality"), |e| e.char('q')])
    })
}

fn exif_key(e: &mut Engine) -> bool {
    e.rule(Rule::ExifKey, |e| e.literal("exif"))
}

// ---- Single characters ----

fn equal(e: &mut Engine) -> bool {
    e.rule(Rule::Equal, |e| e.char('='))
}

fn question(e: &mut Engine) -> bool {
    e.rule(Rule::Question, |e| e.char('?'))
}

fn ampersand(e: &mut Engine) -> bool {
    e.rule(Rule::Ampersand, |e| e.char('&'))
}

fn dot(e: &mut Engine) -> bool {
    e.rule(Rule::Dot, |e| e.char('.'))
}

fn comma(e: &mut Engine) -> bool {
    e.rule(Rule::Comma, |e| e.char(','))
}

fn hyphen(e: &mut Engine) -> bool {
    e.rule(Rule::Hyphen, |e| e.char('-'))
}

fn open_paren(e: &mut Engine) -> bool {
    e.rule(Rule::OpenParen, |e| e.char('('))
}

fn close_paren(e: &mut Engine) -> bool {
    e.rule(Rule::CloseParen, |e| e.char(')'))
}

fn open_brace(e: &mut Engine) -> bool {
    e.rule(Rule::OpenBrace, |e| e.char('{'))
}

fn close_brace(e: &mut Engine) -> bool {
    e.rule(Rule::CloseBrace, |e| e.char('}'))
}

fn open_bracket(e: &mut Engine) -> bool {
    e.rule(Rule::OpenBracket, |e| e.char('['))
}

fn close_bracket(e: &mut Engine) -> bool {
    e.rule(Rule::CloseBracket, |e| e.char(']'))
}
