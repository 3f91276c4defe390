//! Output maps populated by the action executor.
//!
//! Values are kept as the exact text the grammar captured. Nothing here
//! parses numbers or checks ranges; see the `directives` module for a typed
//! view.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;
use core::fmt;

/// Key under which the crop map is attached to a [`ParameterMap`].
pub const CROP: &str = "crop";

/// Top-level keys the grammar can set directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKey {
    Format,
    Progressive,
    Width,
    Height,
    Fit,
    Scale,
    Reverse,
    Quality,
    Exif,
}

impl ParamKey {
    /// All keys, in grammar order.
    pub const ALL: [ParamKey; 9] = [
        Self::Format,
        Self::Progressive,
        Self::Width,
        Self::Height,
        Self::Fit,
        Self::Scale,
        Self::Reverse,
        Self::Quality,
        Self::Exif,
    ];

    /// Map key for this parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Progressive => "progressive",
            Self::Width => "width",
            Self::Height => "height",
            Self::Fit => "fit",
            Self::Scale => "scale",
            Self::Reverse => "reverse",
            Self::Quality => "quality",
            Self::Exif => "exif",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-keys of the crop map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CropKey {
    Width,
    Height,
    X,
    Y,
}

impl CropKey {
    /// Map key for this crop component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for CropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crop components captured from `crop(...)` fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CropParameterMap {
    entries: BTreeMap<CropKey, String>,
}

impl CropParameterMap {
    /// Create an empty crop map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a component, replacing any earlier value.
    pub fn insert(&mut self, key: CropKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    /// Captured text for a component.
    pub fn get(&self, key: CropKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: CropKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Components in key order (width, height, x, y).
    pub fn iter(&self) -> impl Iterator<Item = (CropKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// A value in a [`ParameterMap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// Captured text.
    Text(String),
    /// The nested crop map (only under [`CROP`]).
    Crop(CropParameterMap),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Crop(_) => None,
        }
    }

    pub fn as_crop(&self) -> Option<&CropParameterMap> {
        match self {
            Self::Crop(c) => Some(c),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Crop(crop) => {
                f.write_str("{")?;
                for (i, (key, value)) in crop.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// String-keyed parameters produced by executing a parse.
///
/// Writes are last-write-wins; there is no merging of repeated keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: BTreeMap<String, ParamValue>,
}

impl ParameterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) -> Option<ParamValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Text value for `key`; `None` if absent or if the value is the crop map.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_text)
    }

    /// The crop map, if any crop component was captured.
    pub fn crop(&self) -> Option<&CropParameterMap> {
        self.get(CROP).and_then(ParamValue::as_crop)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ParameterMap {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ParameterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}
