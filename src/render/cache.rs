//! Size-tagged storage for the derived rasters of one renderer.
//!
//! Each [`LayerKind`] owns at most one raster, tagged with the content box it was built for. A
//! lookup with a different box releases the old raster before the replacement is built, so a slot
//! never holds more than one buffer.

use std::fmt;

use crate::foundation::core::ContentBox;
use crate::foundation::error::{ZebraError, ZebraResult};
use crate::render::raster::Raster;

/// The derived rasters kept between renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Opaque white stripe polygons on transparent (mirrored when configured).
    StripeMask,
    /// The full box covered by the stripe paint.
    StripeColorFill,
    /// Background with the masked stripes drawn over it.
    ContentComposite,
    /// Rounded-rectangle silhouette.
    ShapeMask,
}

impl LayerKind {
    /// Every kind, in slot order.
    pub const ALL: [LayerKind; 4] = [
        LayerKind::StripeMask,
        LayerKind::StripeColorFill,
        LayerKind::ContentComposite,
        LayerKind::ShapeMask,
    ];

    fn slot(self) -> usize {
        match self {
            LayerKind::StripeMask => 0,
            LayerKind::StripeColorFill => 1,
            LayerKind::ContentComposite => 2,
            LayerKind::ShapeMask => 3,
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayerKind::StripeMask => "stripe_mask",
            LayerKind::StripeColorFill => "stripe_color_fill",
            LayerKind::ContentComposite => "content_composite",
            LayerKind::ShapeMask => "shape_mask",
        };
        f.write_str(s)
    }
}

/// Build and release counters for one layer kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotStats {
    /// Rasters built.
    pub builds: u64,
    /// Rasters released by a rebuild or invalidation.
    pub releases: u64,
}

/// Counters for every layer kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    slots: [SlotStats; 4],
}

impl CacheStats {
    /// Counters for `kind`.
    pub fn get(&self, kind: LayerKind) -> SlotStats {
        self.slots[kind.slot()]
    }

    /// Total builds across all kinds.
    pub fn total_builds(&self) -> u64 {
        self.slots.iter().map(|s| s.builds).sum()
    }

    /// Total releases across all kinds.
    pub fn total_releases(&self) -> u64 {
        self.slots.iter().map(|s| s.releases).sum()
    }
}

/// Owner of the derived rasters.
#[derive(Debug, Default)]
pub struct LayerCache {
    slots: [Option<Raster>; 4],
    stats: CacheStats,
}

impl LayerCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached raster for `kind` if it was built for exactly `size`.
    pub fn get(&self, kind: LayerKind, size: ContentBox) -> Option<&Raster> {
        self.slots[kind.slot()]
            .as_ref()
            .filter(|r| r.size() == size)
    }

    /// Content box the cached raster for `kind` was built for, if any.
    pub fn tag(&self, kind: LayerKind) -> Option<ContentBox> {
        self.slots[kind.slot()].as_ref().map(Raster::size)
    }

    /// Return the raster for `kind` at `size`, building it with `build` on a miss.
    ///
    /// On a miss the stale raster is released first. A failed build leaves the slot empty.
    pub fn get_or_build<F>(
        &mut self,
        kind: LayerKind,
        size: ContentBox,
        build: F,
    ) -> ZebraResult<&Raster>
    where
        F: FnOnce(ContentBox) -> ZebraResult<Raster>,
    {
        if self.tag(kind) != Some(size) {
            self.release(kind);
            let raster = build(size)?;
            self.store(kind, size, raster)?;
        }
        self.slots[kind.slot()]
            .as_ref()
            .ok_or_else(|| ZebraError::render(format!("{kind} slot empty after build")))
    }

    /// Store an externally built raster for `kind`, releasing whatever the slot held.
    pub fn install(&mut self, kind: LayerKind, raster: Raster) {
        self.release(kind);
        let size = raster.size();
        tracing::debug!(%kind, %size, bytes = size.byte_len(), "built layer");
        let i = kind.slot();
        self.stats.slots[i].builds += 1;
        self.slots[i] = Some(raster);
    }

    /// Release every raster. The next lookup of each kind rebuilds it.
    pub fn invalidate_all(&mut self) {
        for kind in LayerKind::ALL {
            self.release(kind);
        }
    }

    /// Release the raster held for `kind`, if any.
    pub fn release(&mut self, kind: LayerKind) {
        let i = kind.slot();
        if let Some(old) = self.slots[i].take() {
            let size = old.size();
            drop(old);
            self.stats.slots[i].releases += 1;
            tracing::debug!(%kind, %size, bytes = size.byte_len(), "released layer");
        }
    }

    /// Snapshot of the build and release counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Bytes currently held across all slots.
    pub fn resident_bytes(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .map(|r| r.size().byte_len())
            .sum()
    }

    fn store(&mut self, kind: LayerKind, size: ContentBox, raster: Raster) -> ZebraResult<()> {
        if raster.size() != size {
            return Err(ZebraError::render(format!(
                "{kind} builder returned a {} raster for a {size} request",
                raster.size()
            )));
        }
        self.install(kind, raster);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cache.rs"]
mod tests;
