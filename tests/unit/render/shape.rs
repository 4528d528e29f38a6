use super::*;

#[test]
fn square_corners_cover_the_whole_box() {
    let m = shape_mask(ContentBox::new(9, 5), CornerRadii::default()).unwrap();
    assert!(m.data().chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn rounded_corners_clear_the_corner_pixels() {
    let m = shape_mask(ContentBox::new(40, 30), CornerRadii::all(10.0)).unwrap();
    for (x, y) in [(0, 0), (39, 0), (0, 29), (39, 29)] {
        assert_eq!(m.pixel(x, y).unwrap()[3], 0, "corner ({x},{y})");
    }
    assert_eq!(m.pixel(20, 15), Some([255, 255, 255, 255]));
    assert_eq!(m.pixel(20, 0), Some([255, 255, 255, 255]));
    assert_eq!(m.pixel(0, 15), Some([255, 255, 255, 255]));
}

#[test]
fn per_corner_radii_only_round_their_corner() {
    let m = shape_mask(ContentBox::new(40, 30), CornerRadii::new(0.0, 12.0, 0.0, 0.0)).unwrap();
    assert_eq!(m.pixel(0, 0).unwrap()[3], 255);
    assert_eq!(m.pixel(39, 0).unwrap()[3], 0);
    assert_eq!(m.pixel(0, 29).unwrap()[3], 255);
    assert_eq!(m.pixel(39, 29).unwrap()[3], 255);
}

#[test]
fn oversized_radii_still_produce_a_closed_shape() {
    let size = ContentBox::new(20, 10);
    let path = shape_path(size, CornerRadii::all(500.0));
    let b = path.bounding_box();
    assert!(b.x0 >= -1e-9 && b.y0 >= -1e-9);
    assert!(b.x1 <= 20.0 + 1e-9 && b.y1 <= 10.0 + 1e-9);

    let m = shape_mask(size, CornerRadii::all(500.0)).unwrap();
    assert_eq!(m.pixel(10, 5).unwrap()[3], 255);
    assert_eq!(m.pixel(0, 0).unwrap()[3], 0);
}

#[test]
fn negative_radii_are_square() {
    let m = shape_mask(ContentBox::new(8, 8), CornerRadii::all(-4.0)).unwrap();
    assert_eq!(m.pixel(0, 0).unwrap()[3], 255);
}
