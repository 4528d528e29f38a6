//! Premultiplied RGBA8 compositing primitives.
//!
//! Two rules are used by the pipeline: source-over, and alpha-retain masking (Porter-Duff
//! "source in"), where a layer survives only where a mask has coverage and the mask's own color
//! is discarded.

use crate::foundation::error::{ZebraError, ZebraResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::raster::Raster;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255u16 - u16::from(sa);
            let mut out = [0u8; 4];
            for i in 0..4 {
                out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
            }
            out
        }
    }
}

/// Alpha-retain: keep `src` scaled by the mask's alpha coverage.
pub fn alpha_retain(src: PremulRgba8, mask: PremulRgba8) -> PremulRgba8 {
    let w = u16::from(mask[3]);
    [
        mul_div255_u8(u16::from(src[0]), w),
        mul_div255_u8(u16::from(src[1]), w),
        mul_div255_u8(u16::from(src[2]), w),
        mul_div255_u8(u16::from(src[3]), w),
    ]
}

/// Source-over `src` onto `dst`, both equal-length premultiplied RGBA8 buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> ZebraResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ZebraError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Write `src` alpha-retained by `mask` into `dst`.
pub fn alpha_retain_into(dst: &mut [u8], src: &[u8], mask: &[u8]) -> ZebraResult<()> {
    if dst.len() != src.len() || dst.len() != mask.len() || !dst.len().is_multiple_of(4) {
        return Err(ZebraError::render(
            "alpha_retain_into expects equal-length rgba8 buffers",
        ));
    }
    for ((d, s), m) in dst
        .chunks_exact_mut(4)
        .zip(src.chunks_exact(4))
        .zip(mask.chunks_exact(4))
    {
        let out = alpha_retain([s[0], s[1], s[2], s[3]], [m[0], m[1], m[2], m[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// New raster holding `src` alpha-retained by `mask`. Both must share one content box.
pub fn mask_raster(src: &Raster, mask: &Raster) -> ZebraResult<Raster> {
    if src.size() != mask.size() {
        return Err(ZebraError::render(format!(
            "mask size {} does not match layer size {}",
            mask.size(),
            src.size()
        )));
    }
    let mut out = Raster::new(src.size())?;
    alpha_retain_into(out.data_mut(), src.data(), mask.data())?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
