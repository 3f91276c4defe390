//! Second pass: run the actions recorded in a span list.

use alloc::string::String;

use crate::cursor::slice;
use crate::params::{CROP, CropKey, CropParameterMap, ParamKey, ParamValue, ParameterMap};
use crate::rule::{Action, Rule};
use crate::span::Span;

/// Receiver for the semantic actions of a successful parse.
///
/// Calls arrive in input order, each with the text captured just before the
/// action marker.
pub trait Actions {
    fn set(&mut self, key: ParamKey, text: &str);
    fn set_crop(&mut self, key: CropKey, text: &str);
    fn skip(&mut self, text: &str);
}

/// Writes actions into caller-owned maps.
///
/// Crop components go into `crop`, which is then copied under
/// [`CROP`](crate::params::CROP) in `params`. The same crop map is used for
/// every crop field of a parse, so `?crop(w1)&crop(h2)` yields both
/// components.
#[derive(Debug)]
pub struct MapActions<'a> {
    pub params: &'a mut ParameterMap,
    pub crop: &'a mut CropParameterMap,
}

impl<'a> MapActions<'a> {
    pub fn new(params: &'a mut ParameterMap, crop: &'a mut CropParameterMap) -> Self {
        Self { params, crop }
    }
}

impl Actions for MapActions<'_> {
    fn set(&mut self, key: ParamKey, text: &str) {
        tracing::trace!(key = key.as_str(), value = text, "set parameter");
        self.params.insert(key.as_str(), ParamValue::Text(String::from(text)));
    }

    fn set_crop(&mut self, key: CropKey, text: &str) {
        tracing::trace!(key = key.as_str(), value = text, "set crop parameter");
        self.crop.insert(key, text);
        self.params.insert(CROP, ParamValue::Crop(self.crop.clone()));
    }

    fn skip(&mut self, text: &str) {
        tracing::info!(field = text, "skipping unrecognized field");
    }
}

/// Walk `spans` in order, dispatching each action marker with the most
/// recent captured text.
pub fn execute<A: Actions + ?Sized>(spans: &[Span], chars: &[char], actions: &mut A) {
    let mut text = String::new();
    for span in spans {
        match span.rule {
            Rule::Text => {
                text = slice(chars, span.begin, span.end);
            }
            Rule::Action(Action::Set(key)) => actions.set(key, &text),
            Rule::Action(Action::SetCrop(key)) => actions.set_crop(key, &text),
            Rule::Action(Action::Skip) => actions.skip(&text),
            _ => {}
        }
    }
}
