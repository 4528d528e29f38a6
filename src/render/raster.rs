use crate::foundation::core::{BezPath, ContentBox, Rgba8, Rgba8Premul};
use crate::foundation::error::{ZebraError, ZebraResult};
use crate::render::frame::FrameRGBA;

/// Premultiplied RGBA8 raster tagged with the content box it was built for.
///
/// Backed by a `vello_cpu` pixmap so vector fills can be rasterized straight into it.
pub struct Raster {
    size: ContentBox,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster").field("size", &self.size).finish()
    }
}

impl Raster {
    /// Allocate a fully transparent raster.
    pub fn new(size: ContentBox) -> ZebraResult<Self> {
        if size.is_empty() {
            return Err(ZebraError::render(format!(
                "cannot allocate an empty {size} raster"
            )));
        }
        let w: u16 = size
            .width
            .try_into()
            .map_err(|_| ZebraError::render("raster width exceeds u16"))?;
        let h: u16 = size
            .height
            .try_into()
            .map_err(|_| ZebraError::render("raster height exceeds u16"))?;
        Ok(Self {
            size,
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Allocate a raster with every pixel set to `color`.
    pub fn filled(size: ContentBox, color: Rgba8Premul) -> ZebraResult<Self> {
        let mut r = Self::new(size)?;
        r.fill(color);
        Ok(r)
    }

    /// The content box this raster was built for.
    pub fn size(&self) -> ContentBox {
        self.size
    }

    /// Raw premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = ((y as usize) * (self.size.width as usize) + (x as usize)) * 4;
        let d = self.data();
        Some([d[idx], d[idx + 1], d[idx + 2], d[idx + 3]])
    }

    /// Set every pixel to `color`.
    pub(crate) fn fill(&mut self, color: Rgba8Premul) {
        let px = color.to_array();
        for dst in self.data_mut().chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    /// Rasterize `paths` (non-zero fill, anti-aliased) in a solid color over a cleared raster.
    pub(crate) fn fill_paths<'a>(
        &mut self,
        paths: impl IntoIterator<Item = &'a BezPath>,
        color: Rgba8,
    ) {
        let mut ctx = vello_cpu::RenderContext::new(self.pixmap.width(), self.pixmap.height());
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        for path in paths {
            ctx.fill_path(&bezpath_to_cpu(path));
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
    }

    /// Reflect top-to-bottom about the horizontal midline.
    pub(crate) fn flip_vertical(&mut self) {
        let stride = (self.size.width as usize) * 4;
        let rows = self.size.height as usize;
        let data = self.data_mut();
        for y in 0..rows / 2 {
            let (top, bottom) = data.split_at_mut((rows - 1 - y) * stride);
            top[y * stride..(y + 1) * stride].swap_with_slice(&mut bottom[..stride]);
        }
    }

    /// Reflect left-to-right about the vertical midline.
    pub(crate) fn flip_horizontal(&mut self) {
        let stride = (self.size.width as usize) * 4;
        for row in self.data_mut().chunks_exact_mut(stride) {
            let mut px: Vec<[u8; 4]> = row
                .chunks_exact(4)
                .map(|c| [c[0], c[1], c[2], c[3]])
                .collect();
            px.reverse();
            for (dst, src) in row.chunks_exact_mut(4).zip(px) {
                dst.copy_from_slice(&src);
            }
        }
    }

    /// Copy into an owned premultiplied frame.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.data().to_vec(),
            premultiplied: true,
        }
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
