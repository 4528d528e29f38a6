use super::*;

#[test]
fn unconstrained_uses_orientation_default() {
    let m = measure(
        Orientation::Horizontal,
        SizeConstraint::Unconstrained,
        SizeConstraint::Unconstrained,
        Edges::default(),
    );
    assert_eq!(m.content, ContentBox::new(160, 60));
    assert_eq!((m.outer_width, m.outer_height), (160, 60));

    let m = measure(
        Orientation::Vertical,
        SizeConstraint::Unconstrained,
        SizeConstraint::Unconstrained,
        Edges::all(4),
    );
    assert_eq!(m.content, ContentBox::new(60, 160));
    assert_eq!((m.outer_width, m.outer_height), (68, 168));
    assert_eq!(m.content_origin(), (4, 4));
}

#[test]
fn exact_size_subtracts_padding() {
    let pad = Edges {
        left: 3,
        right: 5,
        top: 1,
        bottom: 2,
    };
    let m = measure(
        Orientation::Horizontal,
        SizeConstraint::Exactly(100),
        SizeConstraint::Exactly(40),
        pad,
    );
    assert_eq!(m.content, ContentBox::new(92, 37));
    assert_eq!((m.outer_width, m.outer_height), (100, 40));
    assert_eq!(m.content_origin(), (3, 1));
}

#[test]
fn exact_size_smaller_than_padding_clamps_to_empty() {
    let m = measure(
        Orientation::Horizontal,
        SizeConstraint::Exactly(6),
        SizeConstraint::Exactly(50),
        Edges::all(4),
    );
    assert_eq!(m.content.width, 0);
    assert!(m.content.is_empty());
    assert_eq!(m.outer_width, 8);
}

#[test]
fn at_most_caps_the_default() {
    let m = measure(
        Orientation::Horizontal,
        SizeConstraint::AtMost(100),
        SizeConstraint::AtMost(500),
        Edges::default(),
    );
    assert_eq!(m.content, ContentBox::new(100, 60));
}

#[test]
fn edges_sum_per_axis() {
    let e = Edges {
        left: 1,
        right: 2,
        top: 3,
        bottom: 4,
    };
    assert_eq!((e.horizontal(), e.vertical()), (3, 7));
}
