//! Stripe outline generation.
//!
//! Every stripe is a closed four-point polygon. Band `k` starts at `interval + k * offset` along
//! its axis, where `offset = line_width + interval`; generation stops once the next band's leading
//! edge reaches the box boundary.

use crate::config::model::{Orientation, ZebraConfig};
use crate::foundation::core::{BezPath, ContentBox, Point, Rect};

/// Stripe shape family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StripeMode {
    /// Full-height rectangles repeating along x.
    VerticalBands,
    /// Full-width rectangles repeating along y.
    HorizontalBands,
    /// Parallelograms sheared by the box height, repeating along x.
    AngledBands,
}

impl StripeMode {
    /// The angled pattern takes priority; otherwise orientation decides.
    pub fn select(orientation: Orientation, angle: bool) -> Self {
        match (angle, orientation) {
            (true, _) => Self::AngledBands,
            (false, Orientation::Vertical) => Self::VerticalBands,
            (false, Orientation::Horizontal) => Self::HorizontalBands,
        }
    }
}

/// One stripe outline in content-box coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripePolygon {
    /// Zero-based band index.
    pub index: u32,
    /// Band start along the repeat axis (x for angled bands, measured at y = 0).
    pub start: f64,
    /// Corners in drawing order; the outline closes back to the first corner.
    pub corners: [Point; 4],
}

impl StripePolygon {
    /// Closed path through the corners.
    pub fn to_path(&self) -> BezPath {
        let mut p = BezPath::new();
        p.move_to(self.corners[0]);
        for &c in &self.corners[1..] {
            p.line_to(c);
        }
        p.close_path();
        p
    }

    /// Axis-aligned bounds of the outline.
    pub fn bounds(&self) -> Rect {
        let mut r = Rect::from_points(self.corners[0], self.corners[1]);
        for &c in &self.corners[2..] {
            r = r.union_pt(c);
        }
        r
    }
}

/// Generate stripe polygons for `cfg` inside `size`.
///
/// A non-positive (or NaN) period yields no stripes, as does a period so small that the band count
/// would dwarf the box.
pub fn stripe_polygons(cfg: &ZebraConfig, size: ContentBox) -> Vec<StripePolygon> {
    stripe_polygons_for_mode(cfg.stripe_mode(), cfg.interval, cfg.line_width, size)
}

/// Generate stripe polygons for an explicit mode and stripe metrics.
pub fn stripe_polygons_for_mode(
    mode: StripeMode,
    interval: f64,
    line_width: f64,
    size: ContentBox,
) -> Vec<StripePolygon> {
    let offset = line_width + interval;
    if offset.is_nan() || offset <= 0.0 {
        return Vec::new();
    }

    let w = f64::from(size.width);
    let h = f64::from(size.height);

    // Leading coordinate tested against the bound, and the bound itself.
    let (first, bound) = match mode {
        StripeMode::VerticalBands => (interval, w),
        StripeMode::HorizontalBands => (interval, h),
        StripeMode::AngledBands => (interval - h, w),
    };

    let Some(count) = band_count(first, bound, offset, w + h) else {
        tracing::debug!(?mode, offset, %size, "stripe period too small for box, drawing none");
        return Vec::new();
    };

    let mut out = Vec::with_capacity(count as usize);
    for k in 0..count {
        let pos = first + f64::from(k) * offset;
        if pos.is_nan() || pos >= bound {
            break;
        }
        let start = interval + f64::from(k) * offset;
        let end = start + line_width;
        let corners = match mode {
            StripeMode::VerticalBands => [
                Point::new(start, 0.0),
                Point::new(start, h),
                Point::new(end, h),
                Point::new(end, 0.0),
            ],
            StripeMode::HorizontalBands => [
                Point::new(0.0, start),
                Point::new(w, start),
                Point::new(w, end),
                Point::new(0.0, end),
            ],
            StripeMode::AngledBands => [
                Point::new(start, 0.0),
                Point::new(start - h, h),
                Point::new(end - h, h),
                Point::new(end, 0.0),
            ],
        };
        out.push(StripePolygon {
            index: k,
            start,
            corners,
        });
    }

    tracing::trace!(?mode, stripes = out.len(), %size, "generated stripe polygons");
    out
}

/// Upper bound on the bands whose leading coordinate `first + k * offset` stays below `bound`,
/// with one band of slack for rounding. `None` when the period is so small that the count exceeds
/// twice `extent` (box width plus height).
fn band_count(first: f64, bound: f64, offset: f64, extent: f64) -> Option<u32> {
    let span = bound - first;
    if span.is_nan() || span <= 0.0 {
        return Some(0);
    }
    let count = (span / offset).ceil();
    if !count.is_finite() || count > 2.0 * extent + 2.0 {
        return None;
    }
    Some(count as u32 + 1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/paths.rs"]
mod tests;
