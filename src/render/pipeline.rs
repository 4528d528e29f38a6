use crate::config::model::ZebraConfig;
use crate::foundation::core::ContentBox;
use crate::foundation::error::{ZebraError, ZebraResult};
use crate::render::cache::{LayerCache, LayerKind};
use crate::render::composite::mask_raster;
use crate::render::frame::FrameRGBA;
use crate::render::layers::{background, composite_content, stripe_color_fill, stripe_mask};
use crate::render::raster::Raster;
use crate::render::shape::shape_mask;

/// Clip `content` to `shape`: content survives only where the shape has coverage.
pub fn compose_final(content: &Raster, shape: &Raster) -> ZebraResult<Raster> {
    mask_raster(content, shape)
}

/// Renders the striped rounded-rectangle background for one display target.
///
/// Owns the configuration and the [`LayerCache`] of derived rasters. Rendering takes `&mut self`;
/// share across threads by moving the renderer, not by aliasing it.
///
/// Pipeline per [`render`](Self::render):
/// 1. stripe mask and stripe color fill (cached per content box)
/// 2. background plus masked stripes (cached)
/// 3. rounded-rectangle shape mask (cached)
/// 4. content clipped to the shape, returned as a fresh [`FrameRGBA`]
#[derive(Debug, Default)]
pub struct StripeRenderer {
    config: ZebraConfig,
    cache: LayerCache,
}

impl StripeRenderer {
    /// Renderer with an empty cache.
    pub fn new(config: ZebraConfig) -> Self {
        Self {
            config,
            cache: LayerCache::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ZebraConfig {
        &self.config
    }

    /// Replace the configuration. Cached layers are dropped when it actually changes.
    pub fn set_config(&mut self, config: ZebraConfig) {
        if config != self.config {
            self.config = config;
            self.cache.invalidate_all();
        }
    }

    /// Host signal that layout changed; every cached layer is rebuilt on the next render.
    pub fn request_layout(&mut self) {
        tracing::debug!("layout requested, invalidating layers");
        self.cache.invalidate_all();
    }

    /// The layer cache, for inspection.
    pub fn cache(&self) -> &LayerCache {
        &self.cache
    }

    /// Render into a content box of `size`.
    ///
    /// Returns `Ok(None)` without touching the cache when either dimension is zero. The frame is
    /// premultiplied RGBA8 with its origin at the content box origin.
    #[tracing::instrument(skip(self))]
    pub fn render(&mut self, size: ContentBox) -> ZebraResult<Option<FrameRGBA>> {
        if size.is_empty() {
            tracing::trace!("empty content box, nothing to draw");
            return Ok(None);
        }

        let cfg = &self.config;
        let cache = &mut self.cache;

        cache.get_or_build(LayerKind::StripeMask, size, |s| stripe_mask(cfg, s))?;
        cache.get_or_build(LayerKind::StripeColorFill, size, |s| {
            stripe_color_fill(cfg, s)
        })?;

        if cache.get(LayerKind::ContentComposite, size).is_none() {
            cache.release(LayerKind::ContentComposite);
            let content = {
                let mask = cached(cache, LayerKind::StripeMask, size)?;
                let fill = cached(cache, LayerKind::StripeColorFill, size)?;
                composite_content(background(cfg, size)?, mask, fill)?
            };
            cache.install(LayerKind::ContentComposite, content);
        }

        let radii = cfg.effective_radii();
        cache.get_or_build(LayerKind::ShapeMask, size, |s| shape_mask(s, radii))?;

        let content = cached(cache, LayerKind::ContentComposite, size)?;
        let shape = cached(cache, LayerKind::ShapeMask, size)?;
        Ok(Some(compose_final(content, shape)?.to_frame()))
    }
}

fn cached(cache: &LayerCache, kind: LayerKind, size: ContentBox) -> ZebraResult<&Raster> {
    cache
        .get(kind, size)
        .ok_or_else(|| ZebraError::render(format!("{kind} layer missing for {size}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
