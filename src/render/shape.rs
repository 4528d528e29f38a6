//! Rounded-rectangle silhouette mask.

use kurbo::{RoundedRect, RoundedRectRadii, Shape};

use crate::config::model::CornerRadii;
use crate::foundation::core::{BezPath, ContentBox, Rgba8};
use crate::foundation::error::ZebraResult;
use crate::render::raster::Raster;

const SHAPE_TOLERANCE: f64 = 0.1;

/// Outline of the silhouette covering `size`.
///
/// Radii that do not fit are scaled down by the geometry; negative radii are treated as square.
pub fn shape_path(size: ContentBox, radii: CornerRadii) -> BezPath {
    let clamp = |r: f64| if r.is_finite() { r.max(0.0) } else { 0.0 };
    let rr = RoundedRect::from_rect(
        size.to_rect(),
        RoundedRectRadii::new(
            clamp(radii.top_left),
            clamp(radii.top_right),
            clamp(radii.bottom_right),
            clamp(radii.bottom_left),
        ),
    );
    rr.path_elements(SHAPE_TOLERANCE).collect()
}

/// Opaque white silhouette on transparent, sized to `size`.
pub fn shape_mask(size: ContentBox, radii: CornerRadii) -> ZebraResult<Raster> {
    let mut r = Raster::new(size)?;
    if radii.is_square() {
        r.fill(Rgba8::WHITE.premultiply());
    } else {
        let path = shape_path(size, radii);
        r.fill_paths([&path], Rgba8::WHITE);
    }
    Ok(r)
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
