//! Scale types for fitting image content into a drawee's bounds.

use core::fmt;

/// How the actual image is scaled into the bounds of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleType {
    /// Center the image without scaling.
    Center,
    /// Scale uniformly so both dimensions cover the bounds, then center.
    CenterCrop,
    /// Scale uniformly so both dimensions fit inside the bounds, then center.
    CenterInside,
    /// Fit inside the bounds keeping aspect ratio, centered.
    FitCenter,
    /// Fit inside the bounds keeping aspect ratio, aligned to the end.
    FitEnd,
    /// Fit inside the bounds keeping aspect ratio, aligned to the start.
    FitStart,
    /// Stretch independently on each axis to fill the bounds.
    FitXy,
    /// Draw with the view's image matrix.
    Matrix,
}

/// Property names accepted by [`ScaleType::from_name`].
const SCALE_TYPES: [(&str, ScaleType); 8] = [
    ("center", ScaleType::Center),
    ("center_crop", ScaleType::CenterCrop),
    ("center_inside", ScaleType::CenterInside),
    ("fit_center", ScaleType::FitCenter),
    ("fit_end", ScaleType::FitEnd),
    ("fit_start", ScaleType::FitStart),
    ("fit_xy", ScaleType::FitXy),
    ("matrix", ScaleType::Matrix),
];

impl ScaleType {
    /// Every scale type, in table order.
    pub const ALL: [Self; 8] = [
        Self::Center,
        Self::CenterCrop,
        Self::CenterInside,
        Self::FitCenter,
        Self::FitEnd,
        Self::FitStart,
        Self::FitXy,
        Self::Matrix,
    ];

    /// Looks up a scale type by its property name, e.g. `"center_crop"`.
    ///
    /// Names outside the table yield `None`: "no scale type configured".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        SCALE_TYPES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, scale_type)| *scale_type)
    }

    /// The property name of this scale type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SCALE_TYPES[self as usize].0
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
