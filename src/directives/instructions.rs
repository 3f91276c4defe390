//! Typed directive values: the checked representation of a parameter map.

use alloc::string::String;

/// How the image is fitted to the requested size.
///
/// Maps to the `fit` parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Cut the image to the requested box without scaling.
    Clip,
    /// Scale to the requested box, ignoring aspect ratio.
    Scale,
    /// Scale proportionally to fit within the box.
    Max,
    /// Scale proportionally to fill the box, cropping overflow.
    Crop,
}

impl FitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Scale => "scale",
            Self::Max => "max",
            Self::Crop => "crop",
        }
    }
}

/// Mirror axis.
///
/// Maps to the `reverse` parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Reverse {
    /// Mirror vertically (top to bottom).
    Flip,
    /// Mirror horizontally (left to right).
    Flop,
}

impl Reverse {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flip => "flip",
            Self::Flop => "flop",
        }
    }
}

/// Crop rectangle in source pixels.
///
/// Any component may be missing; a crop field only has to name one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CropRegion {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x: Option<u32>,
    pub y: Option<u32>,
}

impl CropRegion {
    /// All four components present.
    pub fn is_complete(&self) -> bool {
        self.width.is_some() && self.height.is_some() && self.x.is_some() && self.y.is_some()
    }

    /// `(x, y, width, height)` with missing offsets as 0, or `None` when a
    /// dimension is missing.
    pub fn rect(&self) -> Option<(u32, u32, u32, u32)> {
        Some((
            self.x.unwrap_or(0),
            self.y.unwrap_or(0),
            self.width?,
            self.height?,
        ))
    }
}

/// Typed directives.
///
/// Produced by [`Directives::from_params()`] or
/// [`crate::directives::parse()`]. Fields whose text did not convert are
/// left `None` and reported as warnings.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Directives {
    /// Output format name (`format`), lowercase.
    pub format: Option<String>,
    /// Progressive encoding (`progressive`).
    pub progressive: Option<bool>,
    /// Target width (`width`, `w`).
    pub width: Option<u32>,
    /// Target height (`height`, `h`).
    pub height: Option<u32>,
    /// Fit mode (`fit`).
    pub fit: Option<FitMode>,
    /// Scale factor (`scale`).
    pub scale: Option<f32>,
    /// Mirror axis (`reverse`).
    pub reverse: Option<Reverse>,
    /// Encoder quality, 0 to 100 (`quality`, `q`).
    pub quality: Option<u32>,
    /// Keep EXIF metadata (`exif`).
    pub exif: Option<bool>,
    /// Crop rectangle (`crop(...)`).
    pub crop: Option<CropRegion>,
}

impl Default for Directives {
    fn default() -> Self {
        Self::new()
    }
}

impl Directives {
    /// Create empty directives.
    pub fn new() -> Self {
        Self {
            format: None,
            progressive: None,
            width: None,
            height: None,
            fit: None,
            scale: None,
            reverse: None,
            quality: None,
            exif: None,
            crop: None,
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }
}
