//! Raster production: stripe outlines, layer builders, compositing, and the cached pipeline.

pub(crate) mod cache;
pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod layers;
pub(crate) mod paint;
pub(crate) mod paths;
pub(crate) mod pipeline;
pub(crate) mod raster;
pub(crate) mod shape;
