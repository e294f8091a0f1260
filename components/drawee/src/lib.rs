//! # Drawee component
//!
//! A declarative image widget that wraps a pipeline-backed platform view. The
//! component exposes five properties: image, placeholder, scale type, fade
//! duration and background. It keeps the native drawee hierarchy of its view
//! in sync with them.
//!
//! ```ignore
//! use std::rc::Rc;
//! use drawee_component::DraweeComponent;
//!
//! let mut drawee = DraweeComponent::new(Rc::new(pipeline), Rc::new(resources));
//! drawee.set_placeholder_uri(Some("res://placeholder"))?;
//! drawee.set_scale_type(Some("center_crop"));
//! drawee.set_image_uri(Some("https://example.com/photo.jpg"))?;
//!
//! // Host lifecycle: all properties are applied once the view exists.
//! drawee.on_view_created(view)?;
//! ```

mod component;
mod resolver;

pub use component::{DraweeComponent, DraweeState};
pub use resolver::{Resolution, ResourceResolver};
