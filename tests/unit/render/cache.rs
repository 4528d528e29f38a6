use super::*;
use crate::foundation::core::Rgba8;

fn solid(size: ContentBox) -> ZebraResult<Raster> {
    Raster::filled(size, Rgba8::WHITE.premultiply())
}

#[test]
fn second_lookup_at_same_size_is_a_hit() {
    let mut cache = LayerCache::new();
    let size = ContentBox::new(10, 4);
    let mut calls = 0;
    for _ in 0..3 {
        let r = cache
            .get_or_build(LayerKind::StripeMask, size, |s| {
                calls += 1;
                solid(s)
            })
            .unwrap();
        assert_eq!(r.size(), size);
    }
    assert_eq!(calls, 1);
    let st = cache.stats().get(LayerKind::StripeMask);
    assert_eq!((st.builds, st.releases), (1, 0));
}

#[test]
fn resize_releases_then_rebuilds_with_new_tag() {
    let mut cache = LayerCache::new();
    let a = ContentBox::new(10, 4);
    let b = ContentBox::new(12, 6);
    cache.get_or_build(LayerKind::ShapeMask, a, solid).unwrap();
    let r = cache.get_or_build(LayerKind::ShapeMask, b, solid).unwrap();
    assert_eq!(r.size(), b);
    assert_eq!(cache.tag(LayerKind::ShapeMask), Some(b));
    assert!(cache.get(LayerKind::ShapeMask, a).is_none());

    let st = cache.stats().get(LayerKind::ShapeMask);
    assert_eq!((st.builds, st.releases), (2, 1));
    assert_eq!(cache.resident_bytes(), b.byte_len());
}

#[test]
fn kinds_are_independent() {
    let mut cache = LayerCache::new();
    let size = ContentBox::new(3, 3);
    cache.get_or_build(LayerKind::StripeMask, size, solid).unwrap();
    assert!(cache.get(LayerKind::StripeMask, size).is_some());
    assert!(cache.get(LayerKind::StripeColorFill, size).is_none());
    assert_eq!(cache.tag(LayerKind::ContentComposite), None);
}

#[test]
fn invalidate_all_clears_every_slot() {
    let mut cache = LayerCache::new();
    let size = ContentBox::new(5, 5);
    for kind in LayerKind::ALL {
        cache.get_or_build(kind, size, solid).unwrap();
    }
    assert_eq!(cache.stats().total_builds(), 4);
    cache.invalidate_all();
    for kind in LayerKind::ALL {
        assert_eq!(cache.tag(kind), None);
    }
    assert_eq!(cache.stats().total_releases(), 4);
    assert_eq!(cache.resident_bytes(), 0);

    // Invalidating an empty cache releases nothing.
    cache.invalidate_all();
    assert_eq!(cache.stats().total_releases(), 4);
}

#[test]
fn failed_build_leaves_slot_empty() {
    let mut cache = LayerCache::new();
    let size = ContentBox::new(5, 5);
    cache.get_or_build(LayerKind::StripeMask, size, solid).unwrap();
    let err = cache.get_or_build(LayerKind::StripeMask, ContentBox::new(6, 6), |_| {
        Err(ZebraError::render("boom"))
    });
    assert!(err.is_err());
    assert_eq!(cache.tag(LayerKind::StripeMask), None);
}

#[test]
fn builder_returning_wrong_size_is_rejected() {
    let mut cache = LayerCache::new();
    let res = cache.get_or_build(LayerKind::StripeMask, ContentBox::new(4, 4), |_| {
        solid(ContentBox::new(2, 2))
    });
    assert!(res.is_err());
    assert_eq!(cache.tag(LayerKind::StripeMask), None);
}

#[test]
fn install_replaces_and_counts() {
    let mut cache = LayerCache::new();
    cache.install(LayerKind::ContentComposite, solid(ContentBox::new(2, 2)).unwrap());
    cache.install(LayerKind::ContentComposite, solid(ContentBox::new(3, 2)).unwrap());
    let st = cache.stats().get(LayerKind::ContentComposite);
    assert_eq!((st.builds, st.releases), (2, 1));
    assert!(cache.get(LayerKind::ContentComposite, ContentBox::new(3, 2)).is_some());
}
