use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ZebraError, ZebraResult};
use crate::render::paths::StripeMode;

/// Axis the stripe pattern is laid out along.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Bands run left to right; gradients vary along x.
    #[default]
    Horizontal,
    /// Bands run top to bottom; gradients vary along y.
    Vertical,
}

/// Per-corner radii for the output silhouette, in pixels.
///
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CornerRadii {
    /// Top-left radius.
    pub top_left: f64,
    /// Top-right radius.
    pub top_right: f64,
    /// Bottom-right radius.
    pub bottom_right: f64,
    /// Bottom-left radius.
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Build radii in CSS order.
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Uniform radius on all four corners.
    pub const fn all(r: f64) -> Self {
        Self::new(r, r, r, r)
    }

    /// `true` when every corner is square.
    pub fn is_square(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

/// Resolved fill for one layer: a solid color or a two-stop linear gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    /// Uniform color.
    Solid(Rgba8),
    /// Linear gradient from `start` to `end` spanning the raster along `axis`.
    LinearGradient {
        /// Color at the leading edge.
        start: Rgba8,
        /// Color at the trailing edge.
        end: Rgba8,
        /// Horizontal varies along x, Vertical along y.
        axis: Orientation,
    },
}

impl Paint {
    /// Pick the gradient when both stops are set (present and not `#00000000`), else the solid
    /// color.
    pub fn resolve(
        solid: Rgba8,
        start: Option<Rgba8>,
        end: Option<Rgba8>,
        axis: Orientation,
    ) -> Self {
        match (start, end) {
            (Some(start), Some(end)) if !start.is_zero() && !end.is_zero() => {
                Self::LinearGradient { start, end, axis }
            }
            _ => Self::Solid(solid),
        }
    }
}

/// Fully resolved styling for one striped background.
///
/// Field defaults mirror the stock widget styling: 10px stripes every 20px, slate-blue lines on a
/// navy background, angled pattern, square corners.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZebraConfig {
    /// Layout axis; also selects the gradient and mirror axes.
    pub orientation: Orientation,
    /// Gap before each stripe, in pixels.
    pub interval: f64,
    /// Stripe thickness, in pixels.
    pub line_width: f64,
    /// Solid stripe color.
    pub line_color: Rgba8,
    /// Stripe gradient start stop.
    pub line_color_start: Option<Rgba8>,
    /// Stripe gradient end stop.
    pub line_color_end: Option<Rgba8>,
    /// Solid background color.
    pub bg_color: Rgba8,
    /// Background gradient start stop.
    pub bg_color_start: Option<Rgba8>,
    /// Background gradient end stop.
    pub bg_color_end: Option<Rgba8>,
    /// Reflect the stripes about the content midline.
    pub mirror: bool,
    /// Draw sheared diagonal stripes regardless of orientation.
    pub angle: bool,
    /// Uniform corner radius; overrides the per-corner values when nonzero.
    pub radius: f64,
    /// Top-left corner radius.
    pub radius_top_left: f64,
    /// Top-right corner radius.
    pub radius_top_right: f64,
    /// Bottom-left corner radius.
    pub radius_bottom_left: f64,
    /// Bottom-right corner radius.
    pub radius_bottom_right: f64,
}

impl Default for ZebraConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            interval: 10.0,
            line_width: 10.0,
            line_color: Rgba8::opaque(0x46, 0x54, 0x77),
            line_color_start: None,
            line_color_end: None,
            bg_color: Rgba8::opaque(0x2F, 0x3F, 0x65),
            bg_color_start: None,
            bg_color_end: None,
            mirror: false,
            angle: true,
            radius: 0.0,
            radius_top_left: 0.0,
            radius_top_right: 0.0,
            radius_bottom_left: 0.0,
            radius_bottom_right: 0.0,
        }
    }
}

impl ZebraConfig {
    /// Parse a configuration from JSON text and validate it.
    pub fn from_json_str(s: &str) -> ZebraResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ZebraError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader(r: impl Read) -> ZebraResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ZebraError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration JSON file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> ZebraResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open config JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ZebraResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ZebraError::serde(e.to_string()))
    }

    /// Reject distances and radii that are negative or not finite, and sub-pixel stripe periods.
    /// A zero period (no stripes) is allowed.
    ///
    /// The renderer itself tolerates such values; this check is for ingested configuration.
    pub fn validate(&self) -> ZebraResult<()> {
        let fields = [
            ("interval", self.interval),
            ("line_width", self.line_width),
            ("radius", self.radius),
            ("radius_top_left", self.radius_top_left),
            ("radius_top_right", self.radius_top_right),
            ("radius_bottom_left", self.radius_bottom_left),
            ("radius_bottom_right", self.radius_bottom_right),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(ZebraError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        let offset = self.offset();
        if offset > 0.0 && offset < 1.0 {
            return Err(ZebraError::validation(format!(
                "interval + line_width must be 0 or at least 1px (got {offset})"
            )));
        }
        Ok(())
    }

    /// Stripe repeat period, `line_width + interval`.
    pub fn offset(&self) -> f64 {
        self.line_width + self.interval
    }

    /// Stripe shape for path generation; `angle` takes priority over orientation.
    pub fn stripe_mode(&self) -> StripeMode {
        StripeMode::select(self.orientation, self.angle)
    }

    /// Stripe paint along the orientation axis.
    pub fn line_paint(&self) -> Paint {
        Paint::resolve(
            self.line_color,
            self.line_color_start,
            self.line_color_end,
            self.orientation,
        )
    }

    /// Background paint along the orientation axis.
    pub fn bg_paint(&self) -> Paint {
        Paint::resolve(
            self.bg_color,
            self.bg_color_start,
            self.bg_color_end,
            self.orientation,
        )
    }

    /// Corner radii used for the silhouette. A nonzero uniform radius always wins.
    pub fn effective_radii(&self) -> CornerRadii {
        if self.radius != 0.0 {
            CornerRadii::all(self.radius)
        } else {
            CornerRadii::new(
                self.radius_top_left,
                self.radius_top_right,
                self.radius_bottom_right,
                self.radius_bottom_left,
            )
        }
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set stripe gap and thickness.
    pub fn with_stripes(mut self, interval: f64, line_width: f64) -> Self {
        self.interval = interval;
        self.line_width = line_width;
        self
    }

    /// Set the solid stripe color and clear any stripe gradient.
    pub fn with_line_color(mut self, color: Rgba8) -> Self {
        self.line_color = color;
        self.line_color_start = None;
        self.line_color_end = None;
        self
    }

    /// Set the stripe gradient stops.
    pub fn with_line_gradient(mut self, start: Rgba8, end: Rgba8) -> Self {
        self.line_color_start = Some(start);
        self.line_color_end = Some(end);
        self
    }

    /// Set the solid background color and clear any background gradient.
    pub fn with_bg_color(mut self, color: Rgba8) -> Self {
        self.bg_color = color;
        self.bg_color_start = None;
        self.bg_color_end = None;
        self
    }

    /// Set the background gradient stops.
    pub fn with_bg_gradient(mut self, start: Rgba8, end: Rgba8) -> Self {
        self.bg_color_start = Some(start);
        self.bg_color_end = Some(end);
        self
    }

    /// Enable or disable mirroring.
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Enable or disable the angled pattern.
    pub fn with_angle(mut self, angle: bool) -> Self {
        self.angle = angle;
        self
    }

    /// Set the uniform corner radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set individual corner radii (used only while the uniform radius is zero).
    pub fn with_corner_radii(mut self, radii: CornerRadii) -> Self {
        self.radius_top_left = radii.top_left;
        self.radius_top_right = radii.top_right;
        self.radius_bottom_right = radii.bottom_right;
        self.radius_bottom_left = radii.bottom_left;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
