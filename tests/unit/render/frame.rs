use super::*;

#[test]
fn straight_conversion_undoes_premultiplication() {
    let f = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    let s = f.to_straight_rgba8();
    assert_eq!(&s[0..4], &[128, 64, 0, 128]);
    assert_eq!(&s[4..8], &[10, 20, 30, 255]);
}

#[test]
fn blit_places_pixels_at_origin_and_clips() {
    let src = FrameRGBA {
        width: 2,
        height: 2,
        data: [1u8, 2, 3, 255].repeat(4),
        premultiplied: true,
    };
    let mut dst = FrameRGBA::transparent(3, 3);
    src.blit_onto(&mut dst, 2, 1).unwrap();
    assert_eq!(dst.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(dst.pixel(2, 1), Some([1, 2, 3, 255]));
    assert_eq!(dst.pixel(2, 2), Some([1, 2, 3, 255]));
    assert_eq!(dst.pixel(2, 0), Some([0, 0, 0, 0]));
}

#[test]
fn blit_rejects_straight_alpha_frames() {
    let src = FrameRGBA {
        premultiplied: false,
        ..FrameRGBA::transparent(1, 1)
    };
    let mut dst = FrameRGBA::transparent(1, 1);
    assert!(src.blit_onto(&mut dst, 0, 0).is_err());
}
