#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod logging;
pub mod pipeline;

#[doc(inline)]
pub use drawee_component::{DraweeComponent, DraweeState, Resolution, ResourceResolver};
#[doc(inline)]
pub use drawee_core::{
    Drawable, DrawableOrigin, DraweeError, Hierarchy, HierarchyBuilder, HierarchyDescriptor,
    HostResources, ImagePipeline, NativeHierarchyBuilder, PlatformContext, PlatformView, Result,
    ScaleType,
};
pub use drawee_path as path;
pub use pipeline::{initialize, is_initialized, shutdown};

pub mod prelude {
    //! Commonly used types for hosts embedding a drawee.
    //!
    //! ```rust
    //! use drawee::prelude::*;
    //!
    //! assert_eq!(ScaleType::from_name("fit_xy"), Some(ScaleType::FitXy));
    //! ```
    pub use crate::config::DraweeConfig;
    pub use crate::{
        Drawable, DraweeComponent, DraweeError, Hierarchy, HierarchyBuilder, HostResources,
        ImagePipeline, PlatformContext, PlatformView, ScaleType,
    };
    pub use drawee_path::{ImageSource, PathGrammar, ResourceUri};
}
