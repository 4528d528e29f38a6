//! Size negotiation with the host layout system.

use crate::config::model::Orientation;
use crate::foundation::core::ContentBox;

/// Intrinsic content size along the long axis.
pub const DEFAULT_LONG_SIDE: u32 = 160;
/// Intrinsic content size along the short axis.
pub const DEFAULT_SHORT_SIDE: u32 = 60;

/// Constraint offered by the host for one axis of the outer size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeConstraint {
    /// Any size; the intrinsic default is used.
    #[default]
    Unconstrained,
    /// Content may not exceed `n` pixels.
    AtMost(u32),
    /// The outer size is exactly `n` pixels, padding included.
    Exactly(u32),
}

/// Padding around the content box, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Left padding.
    #[serde(default)]
    pub left: u32,
    /// Right padding.
    #[serde(default)]
    pub right: u32,
    /// Top padding.
    #[serde(default)]
    pub top: u32,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: u32,
}

impl Edges {
    /// Same padding on every side.
    pub const fn all(p: u32) -> Self {
        Self {
            left: p,
            right: p,
            top: p,
            bottom: p,
        }
    }

    /// `left + right`.
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Outcome of [`measure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measured {
    /// Outer width, padding included.
    pub outer_width: u32,
    /// Outer height, padding included.
    pub outer_height: u32,
    /// Drawable interior handed to the renderer.
    pub content: ContentBox,
    /// Padding the content sits inside.
    pub padding: Edges,
}

impl Measured {
    /// Top-left corner of the content box inside the outer area.
    pub fn content_origin(&self) -> (u32, u32) {
        (self.padding.left, self.padding.top)
    }
}

/// Intrinsic content size for `orientation`: wide for `Horizontal`, tall for `Vertical`.
pub fn default_content(orientation: Orientation) -> ContentBox {
    match orientation {
        Orientation::Horizontal => ContentBox::new(DEFAULT_LONG_SIDE, DEFAULT_SHORT_SIDE),
        Orientation::Vertical => ContentBox::new(DEFAULT_SHORT_SIDE, DEFAULT_LONG_SIDE),
    }
}

/// Resolve the outer and content sizes for the given per-axis constraints.
pub fn measure(
    orientation: Orientation,
    width: SizeConstraint,
    height: SizeConstraint,
    padding: Edges,
) -> Measured {
    let default = default_content(orientation);
    let content_w = resolve_axis(width, default.width, padding.horizontal());
    let content_h = resolve_axis(height, default.height, padding.vertical());
    Measured {
        outer_width: content_w.saturating_add(padding.horizontal()),
        outer_height: content_h.saturating_add(padding.vertical()),
        content: ContentBox::new(content_w, content_h),
        padding,
    }
}

fn resolve_axis(c: SizeConstraint, default: u32, pad: u32) -> u32 {
    match c {
        SizeConstraint::Unconstrained => default,
        SizeConstraint::AtMost(n) => default.min(n),
        SizeConstraint::Exactly(n) => n.saturating_sub(pad),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
