//! Drawee hierarchies and the builder that assembles them.
//!
//! A [`Hierarchy`] describes how the layers of one drawee (placeholder, actual
//! image, background) are composed. It is immutable: every property change
//! builds a fresh hierarchy from the full current state and the platform view
//! replaces the old one wholesale.
//!
//! Backends translate a hierarchy into the native object through
//! [`Hierarchy::configure`], which issues the native configuration calls in a
//! fixed order.

use core::time::Duration;

use crate::{Drawable, ScaleType};

/// The attributes of one rebuild, derived from a drawee's current state.
///
/// `None` means "leave the platform default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyDescriptor {
    /// Drawable shown until the actual image is available.
    pub placeholder: Option<Drawable>,
    /// Scale type of the actual image.
    pub scale_type: Option<ScaleType>,
    /// Fade-in duration in milliseconds; only positive values are applied.
    pub fade_duration_ms: Option<i32>,
    /// Drawable painted behind every other layer.
    pub background: Option<Drawable>,
}

/// Receives the native configuration calls for one hierarchy.
///
/// Implemented by platform backends on top of their native hierarchy builder.
pub trait NativeHierarchyBuilder {
    /// Sets the placeholder drawable.
    fn set_placeholder_image(&mut self, drawable: &Drawable);
    /// Sets the scale type of the actual image.
    fn set_actual_image_scale_type(&mut self, scale_type: ScaleType);
    /// Sets the fade-in duration.
    fn set_fade_duration(&mut self, duration: Duration);
    /// Sets a single background layer.
    fn set_background(&mut self, drawable: &Drawable);
    /// Sets several background layers, bottom first.
    fn set_backgrounds(&mut self, drawables: &[Drawable]);
}

/// Accumulates hierarchy attributes and builds [`Hierarchy`] values.
///
/// Building has no side effects: two builds from the same builder yield two
/// independent, equal hierarchies.
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    placeholder: Option<Drawable>,
    scale_type: Option<ScaleType>,
    fade_duration: Option<Duration>,
    background: Option<Drawable>,
    backgrounds: Vec<Drawable>,
}

impl HierarchyBuilder {
    /// Creates a builder with every attribute at the platform default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder configured from `descriptor`.
    ///
    /// Attributes are applied in order: placeholder, scale type, fade
    /// duration, background. Absent attributes are skipped.
    #[must_use]
    pub fn from_descriptor(descriptor: &HierarchyDescriptor) -> Self {
        let mut builder = Self::new();
        if let Some(placeholder) = &descriptor.placeholder {
            builder = builder.placeholder_image(placeholder.clone());
        }
        if let Some(scale_type) = descriptor.scale_type {
            builder = builder.actual_image_scale_type(scale_type);
        }
        if let Some(fade) = descriptor.fade_duration_ms {
            builder = builder.fade_duration_ms(fade);
        }
        if let Some(background) = &descriptor.background {
            builder = builder.background(background.clone());
        }
        builder
    }

    /// Sets the placeholder drawable.
    #[must_use]
    pub fn placeholder_image(mut self, drawable: Drawable) -> Self {
        self.placeholder = Some(drawable);
        self
    }

    /// Sets the scale type of the actual image.
    #[must_use]
    pub fn actual_image_scale_type(mut self, scale_type: ScaleType) -> Self {
        self.scale_type = Some(scale_type);
        self
    }

    /// Sets the fade-in duration.
    #[must_use]
    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = Some(duration);
        self
    }

    /// Sets the fade-in duration in milliseconds.
    ///
    /// Zero and negative values leave the builder unchanged.
    #[must_use]
    pub fn fade_duration_ms(self, millis: i32) -> Self {
        match u64::try_from(millis) {
            Ok(millis) if millis > 0 => self.fade_duration(Duration::from_millis(millis)),
            _ => self,
        }
    }

    /// Sets the single background layer.
    #[must_use]
    pub fn background(mut self, drawable: Drawable) -> Self {
        self.background = Some(drawable);
        self
    }

    /// Sets additional background layers drawn above [`Self::background`].
    #[must_use]
    pub fn backgrounds(mut self, drawables: Vec<Drawable>) -> Self {
        self.backgrounds = drawables;
        self
    }

    /// Builds a new hierarchy from the configured attributes.
    #[must_use]
    pub fn build(&self) -> Hierarchy {
        let backgrounds = self
            .background
            .iter()
            .chain(self.backgrounds.iter())
            .cloned()
            .collect();

        Hierarchy {
            placeholder: self.placeholder.clone(),
            scale_type: self.scale_type,
            fade_duration: self.fade_duration,
            backgrounds,
        }
    }
}

/// An immutable drawee hierarchy, ready to install on a platform view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    placeholder: Option<Drawable>,
    scale_type: Option<ScaleType>,
    fade_duration: Option<Duration>,
    backgrounds: Vec<Drawable>,
}

impl Hierarchy {
    /// Builds a hierarchy straight from a descriptor.
    #[must_use]
    pub fn from_descriptor(descriptor: &HierarchyDescriptor) -> Self {
        HierarchyBuilder::from_descriptor(descriptor).build()
    }

    /// The placeholder drawable, if configured.
    #[must_use]
    pub const fn placeholder_image(&self) -> Option<&Drawable> {
        self.placeholder.as_ref()
    }

    /// The scale type of the actual image, if configured.
    #[must_use]
    pub const fn actual_image_scale_type(&self) -> Option<ScaleType> {
        self.scale_type
    }

    /// The fade-in duration, if configured.
    #[must_use]
    pub const fn fade_duration(&self) -> Option<Duration> {
        self.fade_duration
    }

    /// Background layers, bottom first.
    #[must_use]
    pub fn backgrounds(&self) -> &[Drawable] {
        &self.backgrounds
    }

    /// Returns true if every attribute is at the platform default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    /// Replays this hierarchy onto a native builder.
    ///
    /// Calls are made in order: placeholder, scale type, fade duration,
    /// background. Unset attributes produce no call.
    pub fn configure(&self, native: &mut impl NativeHierarchyBuilder) {
        if let Some(placeholder) = &self.placeholder {
            native.set_placeholder_image(placeholder);
        }
        if let Some(scale_type) = self.scale_type {
            native.set_actual_image_scale_type(scale_type);
        }
        if let Some(fade) = self.fade_duration {
            native.set_fade_duration(fade);
        }
        match self.backgrounds.as_slice() {
            [] => {}
            [single] => native.set_background(single),
            layers => native.set_backgrounds(layers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawableOrigin;

    #[derive(Debug, Default)]
    struct RecordingBuilder {
        calls: Vec<String>,
    }

    impl NativeHierarchyBuilder for RecordingBuilder {
        fn set_placeholder_image(&mut self, _drawable: &Drawable) {
            self.calls.push("placeholder".into());
        }
        fn set_actual_image_scale_type(&mut self, scale_type: ScaleType) {
            self.calls.push(format!("scale_type:{scale_type}"));
        }
        fn set_fade_duration(&mut self, duration: Duration) {
            self.calls.push(format!("fade:{}", duration.as_millis()));
        }
        fn set_background(&mut self, _drawable: &Drawable) {
            self.calls.push("background".into());
        }
        fn set_backgrounds(&mut self, drawables: &[Drawable]) {
            self.calls.push(format!("backgrounds:{}", drawables.len()));
        }
    }

    fn drawable(name: &str) -> Drawable {
        Drawable::new(DrawableOrigin::File(name.into()), name.to_string())
    }

    #[test]
    fn test_configure_order_is_fixed() {
        let hierarchy = HierarchyBuilder::new()
            .background(drawable("bg"))
            .fade_duration_ms(300)
            .actual_image_scale_type(ScaleType::FitCenter)
            .placeholder_image(drawable("ph"))
            .build();

        let mut native = RecordingBuilder::default();
        hierarchy.configure(&mut native);
        assert_eq!(
            native.calls,
            ["placeholder", "scale_type:fit_center", "fade:300", "background"]
        );
    }

    #[test]
    fn test_absent_attributes_make_no_calls() {
        let hierarchy = HierarchyBuilder::new().fade_duration_ms(120).build();
        let mut native = RecordingBuilder::default();
        hierarchy.configure(&mut native);
        assert_eq!(native.calls, ["fade:120"]);

        let mut native = RecordingBuilder::default();
        Hierarchy::default().configure(&mut native);
        assert!(native.calls.is_empty());
    }

    #[test]
    fn test_non_positive_fade_is_ignored() {
        assert_eq!(HierarchyBuilder::new().fade_duration_ms(0).build().fade_duration(), None);
        assert_eq!(HierarchyBuilder::new().fade_duration_ms(-5).build().fade_duration(), None);
    }

    #[test]
    fn test_build_is_idempotent() {
        let descriptor = HierarchyDescriptor {
            placeholder: Some(drawable("ph")),
            scale_type: Some(ScaleType::CenterCrop),
            fade_duration_ms: Some(250),
            background: None,
        };
        let builder = HierarchyBuilder::from_descriptor(&descriptor);
        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);
        assert_eq!(first, Hierarchy::from_descriptor(&descriptor));
    }

    #[test]
    fn test_multiple_backgrounds() {
        let hierarchy = HierarchyBuilder::new()
            .background(drawable("base"))
            .backgrounds(vec![drawable("overlay-1"), drawable("overlay-2")])
            .build();
        assert_eq!(hierarchy.backgrounds().len(), 3);

        let mut native = RecordingBuilder::default();
        hierarchy.configure(&mut native);
        assert_eq!(native.calls, ["backgrounds:3"]);
    }

    #[test]
    fn test_default_hierarchy() {
        assert!(HierarchyBuilder::new().build().is_default());
        assert!(!HierarchyBuilder::new().fade_duration_ms(1).build().is_default());
    }
}
