//! The drawee component: declarative image properties kept in sync with a
//! native view.
//!
//! Every hierarchy-affecting property change rebuilds the whole hierarchy
//! from the current [`DraweeState`] and installs it on the view in a single
//! call. Properties set while no view is attached are only stored; they are
//! applied together when [`DraweeComponent::on_view_created`] runs.

use core::fmt;
use std::rc::Rc;

use drawee_core::{
    Drawable, HierarchyBuilder, HierarchyDescriptor, HostResources, ImagePipeline, PlatformView,
    Result, ScaleType,
};

use crate::ResourceResolver;

/// The declarative property values of one drawee.
///
/// Every field is independently settable and nullable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraweeState {
    /// Source of the actual image.
    pub image_uri: Option<String>,
    /// Source of the placeholder shown until the image is ready.
    pub placeholder_uri: Option<String>,
    /// How the actual image is fitted into the view.
    pub scale_type: Option<ScaleType>,
    /// Fade-in duration in milliseconds.
    pub fade_duration_ms: Option<i32>,
    /// Source of the background layer.
    pub background_uri: Option<String>,
}

/// An image widget over a pipeline-backed platform view.
pub struct DraweeComponent<P: ImagePipeline, H> {
    state: DraweeState,
    view: Option<P::View>,
    placeholder_drawable: Option<Drawable>,
    background_drawable: Option<Drawable>,
    pipeline: Rc<P>,
    host: Rc<H>,
}

impl<P, H> DraweeComponent<P, H>
where
    P: ImagePipeline,
    H: HostResources,
{
    /// Creates a component with no properties set and no view attached.
    pub fn new(pipeline: Rc<P>, host: Rc<H>) -> Self {
        Self {
            state: DraweeState::default(),
            view: None,
            placeholder_drawable: None,
            background_drawable: None,
            pipeline,
            host,
        }
    }

    /// The current property values.
    pub const fn state(&self) -> &DraweeState {
        &self.state
    }

    /// The attached platform view, if any.
    pub const fn view(&self) -> Option<&P::View> {
        self.view.as_ref()
    }

    /// The attached platform view, mutably.
    pub fn view_mut(&mut self) -> Option<&mut P::View> {
        self.view.as_mut()
    }

    /// Returns true while a platform view is attached.
    pub const fn is_attached(&self) -> bool {
        self.view.is_some()
    }

    /// Sets the image source.
    ///
    /// With a view attached the current image is cleared first. Remote
    /// sources go to the image pipeline; bundled resources and local files
    /// are resolved and attached directly.
    ///
    /// # Errors
    ///
    /// Returns [`drawee_core::DraweeError::InvalidPath`] if a local source
    /// fails the path grammar.
    pub fn set_image_uri(&mut self, uri: Option<&str>) -> Result<()> {
        self.state.image_uri = non_empty(uri);
        self.apply_image()
    }

    /// Sets the placeholder source and rebuilds the hierarchy.
    ///
    /// # Errors
    ///
    /// Returns [`drawee_core::DraweeError::InvalidPath`] if a local source
    /// fails the path grammar.
    pub fn set_placeholder_uri(&mut self, uri: Option<&str>) -> Result<()> {
        self.state.placeholder_uri = non_empty(uri);
        self.placeholder_drawable = None;
        if self.resolve_placeholder()? {
            self.rebuild();
        }
        Ok(())
    }

    /// Sets the scale type by property name, e.g. `"center_crop"`.
    ///
    /// Names outside the scale type table are ignored: the state and the
    /// installed hierarchy stay as they were.
    pub fn set_scale_type(&mut self, name: Option<&str>) {
        match non_empty(name) {
            None => self.set_actual_image_scale_type(None),
            Some(name) => match ScaleType::from_name(&name) {
                Some(scale_type) => self.set_actual_image_scale_type(Some(scale_type)),
                None => tracing::debug!("ignoring unknown scale type {name:?}"),
            },
        }
    }

    /// Sets the scale type and rebuilds the hierarchy.
    pub fn set_actual_image_scale_type(&mut self, scale_type: Option<ScaleType>) {
        self.state.scale_type = scale_type;
        if scale_type.is_some() {
            self.rebuild();
        }
    }

    /// Sets the fade-in duration; positive values rebuild the hierarchy.
    pub fn set_fade_duration(&mut self, millis: Option<i32>) {
        self.state.fade_duration_ms = millis;
        if millis.is_some_and(|millis| millis > 0) {
            self.rebuild();
        }
    }

    /// Sets the background source and rebuilds the hierarchy.
    ///
    /// # Errors
    ///
    /// Returns [`drawee_core::DraweeError::InvalidPath`] if a local source
    /// fails the path grammar.
    pub fn set_background_uri(&mut self, uri: Option<&str>) -> Result<()> {
        self.state.background_uri = non_empty(uri);
        self.background_drawable = None;
        if self.resolve_background()? {
            self.rebuild();
        }
        Ok(())
    }

    /// Attaches a freshly created platform view and applies every property.
    ///
    /// The image is applied first; placeholder, scale type, fade duration and
    /// background are then installed as one hierarchy.
    ///
    /// # Errors
    ///
    /// Returns the first [`drawee_core::DraweeError::InvalidPath`] raised by
    /// the image, placeholder or background source. Every other property is
    /// still applied and the view stays attached.
    pub fn on_view_created(&mut self, view: P::View) -> Result<()> {
        tracing::debug!("drawee view created");
        self.view = Some(view);
        let image = self.apply_image();
        let placeholder = self.resolve_placeholder();
        let background = self.resolve_background();

        let dirty = self.state.placeholder_uri.is_some()
            || self.state.scale_type.is_some()
            || self.state.fade_duration_ms.is_some_and(|millis| millis > 0)
            || self.state.background_uri.is_some();
        if dirty {
            self.rebuild();
        }
        image.and(placeholder).and(background).map(|_| ())
    }

    /// Detaches the platform view and hands it back to the host.
    ///
    /// The view's image is cleared before release and cached drawables are
    /// dropped. Property values are kept for the next view.
    pub fn on_view_destroyed(&mut self) -> Option<P::View> {
        let mut view = self.view.take()?;
        view.attach_image(None);
        self.placeholder_drawable = None;
        self.background_drawable = None;
        tracing::debug!("drawee view destroyed");
        Some(view)
    }

    /// The hierarchy attributes derived from the current state.
    pub fn descriptor(&self) -> HierarchyDescriptor {
        HierarchyDescriptor {
            placeholder: self
                .state
                .placeholder_uri
                .as_ref()
                .and(self.placeholder_drawable.clone()),
            scale_type: self.state.scale_type,
            fade_duration_ms: self.state.fade_duration_ms.filter(|millis| *millis > 0),
            background: self
                .state
                .background_uri
                .as_ref()
                .and(self.background_drawable.clone()),
        }
    }

    fn apply_image(&mut self) -> Result<()> {
        let Some(view) = self.view.as_mut() else {
            return Ok(());
        };
        view.attach_image(None);

        let Some(uri) = self.state.image_uri.as_deref() else {
            return Ok(());
        };

        if !self.host.is_file_or_resource_path(uri) {
            tracing::trace!(uri, "loading remote image");
            self.pipeline.load(view, uri);
            return Ok(());
        }

        if !self.host.has_resources() {
            tracing::debug!("resources unavailable, skipping image {uri:?}");
            return Ok(());
        }

        match ResourceResolver::new(&*self.host).drawable(uri)? {
            Some(drawable) => view.attach_image(Some(drawable)),
            None => tracing::debug!("image {uri:?} did not resolve to a drawable"),
        }
        Ok(())
    }

    /// Refreshes the cached placeholder; returns true if a rebuild is due.
    fn resolve_placeholder(&mut self) -> Result<bool> {
        if self.view.is_none() {
            return Ok(false);
        }
        let Some(uri) = self.state.placeholder_uri.as_deref() else {
            return Ok(false);
        };
        self.placeholder_drawable = ResourceResolver::new(&*self.host).drawable(uri)?;
        Ok(true)
    }

    /// Refreshes the cached background; returns true if a rebuild is due.
    fn resolve_background(&mut self) -> Result<bool> {
        if self.view.is_none() {
            return Ok(false);
        }
        let Some(uri) = self.state.background_uri.as_deref() else {
            return Ok(false);
        };
        self.background_drawable = ResourceResolver::new(&*self.host).drawable(uri)?;
        Ok(true)
    }

    fn rebuild(&mut self) {
        let descriptor = self.descriptor();
        let Some(view) = self.view.as_mut() else {
            return;
        };
        let hierarchy = HierarchyBuilder::from_descriptor(&descriptor).build();
        tracing::trace!(?hierarchy, "installing drawee hierarchy");
        view.install_hierarchy(hierarchy);
    }
}

impl<P: ImagePipeline, H> fmt::Debug for DraweeComponent<P, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraweeComponent")
            .field("state", &self.state)
            .field("attached", &self.view.is_some())
            .field("placeholder_drawable", &self.placeholder_drawable)
            .field("background_drawable", &self.background_drawable)
            .finish_non_exhaustive()
    }
}

/// Empty strings behave like an unset property.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_string)
}
