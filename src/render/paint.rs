use crate::config::model::{Orientation, Paint};
use crate::foundation::core::{ContentBox, Rgba8};
use crate::foundation::error::ZebraResult;
use crate::foundation::math::lerp_u8;
use crate::render::raster::Raster;

/// Allocate a raster covered entirely by `paint`.
pub fn paint_raster(size: ContentBox, paint: &Paint) -> ZebraResult<Raster> {
    let mut r = Raster::new(size)?;
    fill_paint(&mut r, paint);
    Ok(r)
}

/// Cover every pixel of `raster` with `paint`, replacing its contents.
///
/// Gradients span the full raster edge to edge and are sampled at pixel centres, interpolating
/// straight channels and premultiplying afterwards.
pub fn fill_paint(raster: &mut Raster, paint: &Paint) {
    match *paint {
        Paint::Solid(c) => raster.fill(c.premultiply()),
        Paint::LinearGradient { start, end, axis } => {
            let size = raster.size();
            let (w, h) = (size.width as usize, size.height as usize);
            let steps = match axis {
                Orientation::Horizontal => w,
                Orientation::Vertical => h,
            };
            let ramp: Vec<[u8; 4]> = (0..steps)
                .map(|i| gradient_at(start, end, i, steps).premultiply().to_array())
                .collect();
            for (y, row) in raster.data_mut().chunks_exact_mut(w * 4).enumerate() {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let i = match axis {
                        Orientation::Horizontal => x,
                        Orientation::Vertical => y,
                    };
                    px.copy_from_slice(&ramp[i]);
                }
            }
        }
    }
}

fn gradient_at(start: Rgba8, end: Rgba8, i: usize, steps: usize) -> Rgba8 {
    let t = (i as f32 + 0.5) / steps.max(1) as f32;
    Rgba8::new(
        lerp_u8(start.r, end.r, t),
        lerp_u8(start.g, end.g, t),
        lerp_u8(start.b, end.b, t),
        lerp_u8(start.a, end.a, t),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
