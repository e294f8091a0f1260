//! # Drawee core
//!
//! Shared building blocks of the drawee image widget: [`Drawable`] handles,
//! the closed [`ScaleType`] table, immutable [`Hierarchy`] values with their
//! [`HierarchyBuilder`], and the traits a platform backend implements.

mod drawable;
mod error;
pub mod hierarchy;
pub mod native;
mod scale;

pub use drawable::{Drawable, DrawableOrigin};
pub use error::{DraweeError, Result};
pub use hierarchy::{Hierarchy, HierarchyBuilder, HierarchyDescriptor, NativeHierarchyBuilder};
pub use native::{HostResources, ImagePipeline, PlatformContext, PlatformView};
pub use scale::ScaleType;

pub use drawee_path as path;
