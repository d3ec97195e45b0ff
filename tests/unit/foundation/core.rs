use super::*;

#[test]
fn hex_colors_split_into_channels() {
    assert_eq!(Rgb8::from_hex(0x4CAF50), Rgb8::new(76, 175, 80));
    assert_eq!(Rgb8::from_hex(0xFFFFFF), Rgb8::WHITE);
    assert_eq!(Rgb8::new(1, 2, 3).to_array(), [1, 2, 3]);
}

#[test]
fn pixel_box_corners_are_inclusive() {
    let b = PixelBox::new(180, 180, 332, 200);
    assert_eq!(b.width(), 153);
    assert_eq!(b.height(), 21);
    assert!(b.contains(180, 180));
    assert!(b.contains(332, 200));
    assert!(!b.contains(333, 200));
    assert!(!b.contains(180, 201));

    let r = b.to_rect();
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (180.0, 180.0, 333.0, 201.0));
}

#[test]
fn inverted_box_is_empty() {
    let b = PixelBox::new(10, 10, 9, 20);
    assert!(b.is_empty());
    assert_eq!(b.width(), 0);
    assert_eq!(b.height(), 0);
}

#[test]
fn offset_moves_both_rows() {
    let b = PixelBox::new(0, 5, 4, 9).offset_y(50);
    assert_eq!(b, PixelBox::new(0, 55, 4, 59));
}

#[test]
fn fits_within_uses_last_covered_pixel() {
    assert!(PixelBox::new(0, 0, 511, 511).fits_within(512, 512));
    assert!(!PixelBox::new(0, 0, 512, 10).fits_within(512, 512));
}

#[test]
fn icon_sizes_name_their_files() {
    assert_eq!(IconSize::Base.file_name(), "icon-512.png");
    assert_eq!(IconSize::Touch.file_name(), "icon-192.png");
    assert_eq!(IconSize::ALL, [IconSize::Base, IconSize::Touch]);
    assert!((IconSize::Touch.scale_from_base() - 0.375).abs() < 1e-12);
}
