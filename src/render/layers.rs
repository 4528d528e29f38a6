//! Per-layer raster builders: background, stripe mask, stripe color fill, and their composite.

use crate::config::model::{Orientation, ZebraConfig};
use crate::foundation::core::{ContentBox, Rgba8};
use crate::foundation::error::{ZebraError, ZebraResult};
use crate::render::composite::{mask_raster, over_in_place};
use crate::render::paint::paint_raster;
use crate::render::paths::stripe_polygons;
use crate::render::raster::Raster;

/// The full box covered by the background paint. Never mirrored.
pub fn background(cfg: &ZebraConfig, size: ContentBox) -> ZebraResult<Raster> {
    paint_raster(size, &cfg.bg_paint())
}

/// Stripe polygons filled opaque white on transparent.
///
/// With `mirror` set the raster is reflected about the midline on the orientation axis: top to
/// bottom for `Horizontal`, left to right for `Vertical`.
pub fn stripe_mask(cfg: &ZebraConfig, size: ContentBox) -> ZebraResult<Raster> {
    let mut r = Raster::new(size)?;
    let paths: Vec<_> = stripe_polygons(cfg, size)
        .iter()
        .map(|s| s.to_path())
        .collect();
    if !paths.is_empty() {
        r.fill_paths(&paths, Rgba8::WHITE);
    }
    if cfg.mirror {
        match cfg.orientation {
            Orientation::Horizontal => r.flip_vertical(),
            Orientation::Vertical => r.flip_horizontal(),
        }
    }
    Ok(r)
}

/// The full box covered by the stripe paint.
pub fn stripe_color_fill(cfg: &ZebraConfig, size: ContentBox) -> ZebraResult<Raster> {
    paint_raster(size, &cfg.line_paint())
}

/// Stripe fill kept only where the mask has coverage, drawn source-over onto the background.
pub fn composite_content(bg: Raster, mask: &Raster, fill: &Raster) -> ZebraResult<Raster> {
    if bg.size() != mask.size() {
        return Err(ZebraError::render(format!(
            "background {} does not match stripe layers {}",
            bg.size(),
            mask.size()
        )));
    }
    let stripes = mask_raster(fill, mask)?;
    let mut out = bg;
    over_in_place(out.data_mut(), stripes.data())?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
