use crate::foundation::error::{ZebraError, ZebraResult};
use crate::render::composite::over;

/// An owned RGBA8 image handed to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A fully transparent premultiplied frame.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
            premultiplied: true,
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let d = &self.data;
        Some([d[idx], d[idx + 1], d[idx + 2], d[idx + 3]])
    }

    /// Straight-alpha copy of the pixel data, as expected by PNG encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Source-over this frame onto `dst` with its top-left corner at `(x, y)`, clipping to `dst`.
    pub fn blit_onto(&self, dst: &mut FrameRGBA, x: u32, y: u32) -> ZebraResult<()> {
        if !self.premultiplied || !dst.premultiplied {
            return Err(ZebraError::render("blit_onto expects premultiplied frames"));
        }
        let cols = self.width.min(dst.width.saturating_sub(x));
        let rows = self.height.min(dst.height.saturating_sub(y));
        for row in 0..rows {
            for col in 0..cols {
                let si = ((row as usize) * (self.width as usize) + (col as usize)) * 4;
                let di = (((y + row) as usize) * (dst.width as usize) + ((x + col) as usize)) * 4;
                let s = [
                    self.data[si],
                    self.data[si + 1],
                    self.data[si + 2],
                    self.data[si + 3],
                ];
                let d = [dst.data[di], dst.data[di + 1], dst.data[di + 2], dst.data[di + 3]];
                dst.data[di..di + 4].copy_from_slice(&over(d, s));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
