//! zebra renders a striped, rounded-rectangle background into a premultiplied RGBA8 raster.
//!
//! The stripes can be vertical, horizontal, or angled bands, optionally mirrored, drawn in a solid
//! color or a two-stop gradient over a solid or gradient background, and clipped to a rectangle
//! with independently rounded corners. Derived layers are cached per content size, so repeated
//! renders at one size only redo the final clip.
//!
//! - Describe the style with a [`ZebraConfig`] (built in code or loaded from JSON)
//! - Negotiate a size with [`measure`]
//! - Create a [`StripeRenderer`] and call [`StripeRenderer::render`] for each content box
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod render;

pub use crate::foundation::core::{BezPath, ContentBox, Point, Rect, Rgba8, Rgba8Premul};
pub use crate::foundation::error::{ZebraError, ZebraResult};

pub use crate::config::model::{CornerRadii, Orientation, Paint, ZebraConfig};
pub use crate::layout::measure::{
    DEFAULT_LONG_SIDE, DEFAULT_SHORT_SIDE, Edges, Measured, SizeConstraint, default_content,
    measure,
};
pub use crate::render::cache::{CacheStats, LayerCache, LayerKind, SlotStats};
pub use crate::render::composite::{
    PremulRgba8, alpha_retain, alpha_retain_into, mask_raster, over, over_in_place,
};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::layers::{background, composite_content, stripe_color_fill, stripe_mask};
pub use crate::render::paint::{fill_paint, paint_raster};
pub use crate::render::paths::{StripeMode, StripePolygon, stripe_polygons, stripe_polygons_for_mode};
pub use crate::render::pipeline::{StripeRenderer, compose_final};
pub use crate::render::raster::Raster;
pub use crate::render::shape::{shape_mask, shape_path};
