use super::*;
use crate::render::composite::over;

const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);
const NAVY: Rgba8 = Rgba8::opaque(0, 0, 128);

fn vertical_cfg() -> ZebraConfig {
    ZebraConfig::default()
        .with_orientation(Orientation::Vertical)
        .with_angle(false)
        .with_stripes(10.0, 10.0)
        .with_line_color(BLUE)
        .with_bg_color(NAVY)
}

#[test]
fn stripe_mask_covers_band_columns() {
    let size = ContentBox::new(100, 50);
    let m = stripe_mask(&vertical_cfg(), size).unwrap();
    for x in 0..100 {
        let inside = (x / 10) % 2 == 1;
        let a = m.pixel(x, 25).unwrap()[3];
        assert_eq!(a, if inside { 255 } else { 0 }, "x = {x}");
    }
}

#[test]
fn mirror_flips_mask_on_orientation_axis() {
    let size = ContentBox::new(30, 40);
    let base = ZebraConfig::default()
        .with_orientation(Orientation::Horizontal)
        .with_angle(false)
        .with_stripes(3.0, 5.0);
    let plain = stripe_mask(&base, size).unwrap();
    let mirrored = stripe_mask(&base.clone().with_mirror(true), size).unwrap();
    for y in 0..40 {
        assert_eq!(mirrored.pixel(0, y), plain.pixel(0, 39 - y), "row {y}");
    }

    let vbase = base.with_orientation(Orientation::Vertical);
    let plain = stripe_mask(&vbase, size).unwrap();
    let mirrored = stripe_mask(&vbase.clone().with_mirror(true), size).unwrap();
    for x in 0..30 {
        assert_eq!(mirrored.pixel(x, 7), plain.pixel(29 - x, 7), "column {x}");
    }
}

#[test]
fn empty_stripe_set_gives_clear_mask() {
    let cfg = vertical_cfg().with_stripes(0.0, 0.0);
    let m = stripe_mask(&cfg, ContentBox::new(8, 8)).unwrap();
    assert!(m.data().iter().all(|&b| b == 0));
}

#[test]
fn background_uses_gradient_only_with_both_stops() {
    let size = ContentBox::new(4, 2);
    let red = Rgba8::opaque(255, 0, 0);
    let mut cfg = vertical_cfg();
    cfg.bg_color_start = Some(red);
    let bg = background(&cfg, size).unwrap();
    assert!(bg.data().chunks_exact(4).all(|px| px == [0, 0, 128, 255]));

    cfg.bg_color_end = Some(BLUE);
    let bg = background(&cfg, size).unwrap();
    assert_eq!(bg.pixel(0, 0), Some([191, 0, 64, 255]));
    assert_eq!(bg.pixel(0, 1), Some([64, 0, 191, 255]));
}

#[test]
fn composite_paints_stripes_over_background() {
    let cfg = vertical_cfg();
    let size = ContentBox::new(100, 50);
    let out = composite_content(
        background(&cfg, size).unwrap(),
        &stripe_mask(&cfg, size).unwrap(),
        &stripe_color_fill(&cfg, size).unwrap(),
    )
    .unwrap();
    assert_eq!(out.pixel(5, 0), Some([0, 0, 128, 255]));
    assert_eq!(out.pixel(15, 49), Some([0, 0, 255, 255]));
    assert_eq!(out.pixel(99, 10), Some([0, 0, 255, 255]));
}

#[test]
fn translucent_stripes_blend_with_background() {
    let cfg = vertical_cfg().with_line_color(Rgba8::new(255, 255, 255, 128));
    let size = ContentBox::new(20, 2);
    let out = composite_content(
        background(&cfg, size).unwrap(),
        &stripe_mask(&cfg, size).unwrap(),
        &stripe_color_fill(&cfg, size).unwrap(),
    )
    .unwrap();
    let expected = over(
        NAVY.premultiply().to_array(),
        Rgba8::new(255, 255, 255, 128).premultiply().to_array(),
    );
    assert_eq!(out.pixel(12, 0), Some(expected));
}

#[test]
fn composite_rejects_mismatched_layers() {
    let cfg = vertical_cfg();
    let res = composite_content(
        background(&cfg, ContentBox::new(4, 4)).unwrap(),
        &stripe_mask(&cfg, ContentBox::new(5, 4)).unwrap(),
        &stripe_color_fill(&cfg, ContentBox::new(5, 4)).unwrap(),
    );
    assert!(res.is_err());
}
