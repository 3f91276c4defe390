//! Conversion from a parameter map to typed directives.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use num_traits::Num;

use super::ConvertWarning;
use super::instructions::{CropRegion, Directives, FitMode, Reverse};
use crate::params::{CROP, CropKey, CropParameterMap, ParamKey, ParamValue, ParameterMap};

impl Directives {
    /// Convert `params` into typed directives plus warnings.
    ///
    /// Never fails. A value that does not convert leaves its field `None`.
    pub fn from_params(params: &ParameterMap) -> (Directives, Vec<ConvertWarning>) {
        let mut out = Directives::new();
        let mut warnings = Vec::new();

        for (key, value) in params {
            if key == CROP {
                match value {
                    ParamValue::Crop(crop) => out.crop = convert_crop(crop, &mut warnings),
                    ParamValue::Text(text) => invalid(&mut warnings, CROP, text, "expected crop components"),
                }
                continue;
            }
            let Some(param) = ParamKey::ALL.into_iter().find(|p| p.as_str() == key) else {
                warnings.push(ConvertWarning::KeyNotRecognized { key: key.clone() });
                continue;
            };
            let ParamValue::Text(text) = value else {
                invalid(&mut warnings, param.as_str(), &value.to_string(), "expected a single value");
                continue;
            };
            dispatch_key(param, text, &mut out, &mut warnings);
        }

        (out, warnings)
    }
}

fn dispatch_key(key: ParamKey, value: &str, out: &mut Directives, warnings: &mut Vec<ConvertWarning>) {
    let name = key.as_str();
    match key {
        ParamKey::Format => out.format = Some(String::from(value)),
        ParamKey::Progressive => {
            out.progressive = check(parse_bool(value), name, value, "expected true|false", warnings);
        }
        ParamKey::Exif => {
            out.exif = check(parse_bool(value), name, value, "expected true|false", warnings);
        }
        ParamKey::Width => {
            out.width = check(parse_dimension(value), name, value, "expected positive integer", warnings);
        }
        ParamKey::Height => {
            out.height = check(parse_dimension(value), name, value, "expected positive integer", warnings);
        }
        ParamKey::Quality => {
            out.quality = check(parse_quality(value), name, value, "expected integer 0-100", warnings);
        }
        ParamKey::Scale => {
            out.scale = check(parse_scale(value), name, value, "expected positive number", warnings);
        }
        ParamKey::Fit => {
            out.fit = check(parse_fit_mode(value), name, value, "expected clip|scale|max|crop", warnings);
        }
        ParamKey::Reverse => {
            out.reverse = check(parse_reverse(value), name, value, "expected flip|flop", warnings);
        }
    }
}

fn convert_crop(crop: &CropParameterMap, warnings: &mut Vec<ConvertWarning>) -> Option<CropRegion> {
    let mut region = CropRegion::default();
    for (key, value) in crop.iter() {
        let (slot, name) = match key {
            CropKey::Width => (&mut region.width, "crop.width"),
            CropKey::Height => (&mut region.height, "crop.height"),
            CropKey::X => (&mut region.x, "crop.x"),
            CropKey::Y => (&mut region.y, "crop.y"),
        };
        *slot = check(parse_num(value), name, value, "expected non-negative integer", warnings);
    }
    (region != CropRegion::default()).then_some(region)
}

/// Pass `parsed` through, warning when it is `None`.
fn check<T>(
    parsed: Option<T>,
    key: &'static str,
    value: &str,
    reason: &'static str,
    warnings: &mut Vec<ConvertWarning>,
) -> Option<T> {
    if parsed.is_none() {
        invalid(warnings, key, value, reason);
    }
    parsed
}

fn invalid(warnings: &mut Vec<ConvertWarning>, key: &'static str, value: &str, reason: &'static str) {
    warnings.push(ConvertWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    });
}

// ---- Value parsers ----

fn parse_num<T: Num>(s: &str) -> Option<T> {
    T::from_str_radix(s, 10).ok()
}

fn parse_dimension(s: &str) -> Option<u32> {
    parse_num::<u32>(s).filter(|&v| v > 0)
}

fn parse_quality(s: &str) -> Option<u32> {
    parse_num::<u32>(s).filter(|&v| v <= 100)
}

fn parse_scale(s: &str) -> Option<f32> {
    parse_num::<f32>(s).filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_fit_mode(s: &str) -> Option<FitMode> {
    match s {
        "clip" => Some(FitMode::Clip),
        "scale" => Some(FitMode::Scale),
        "max" => Some(FitMode::Max),
        "crop" => Some(FitMode::Crop),
        _ => None,
    }
}

fn parse_reverse(s: &str) -> Option<Reverse> {
    match s {
        "flip" => Some(Reverse::Flip),
        "flop" => Some(Reverse::Flop),
        _ => None,
    }
}
