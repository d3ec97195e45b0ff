use super::*;

#[test]
fn note_layout_is_valid() {
    IconLayout::NOTE.validate().unwrap();
}

#[test]
fn shapes_come_out_back_to_front() {
    let shapes: Vec<Shape> = IconLayout::NOTE.shapes().collect();
    assert_eq!(shapes.len(), 6);

    assert_eq!(
        shapes[0],
        Shape::RoundedRect {
            bbox: PixelBox::new(50, 50, 462, 462),
            radius: 60,
            color: Rgb8::WHITE,
        }
    );
    assert_eq!(
        shapes[1],
        Shape::RoundedRect {
            bbox: PixelBox::new(150, 120, 362, 400),
            radius: 10,
            color: IconLayout::BRAND_GREEN,
        }
    );
    for shape in &shapes[2..] {
        assert!(matches!(shape, Shape::Rect { .. }));
        assert_eq!(shape.color(), Rgb8::WHITE);
    }
}

#[test]
fn text_bars_step_down_by_pitch() {
    let tops: Vec<u32> = IconLayout::NOTE.lines.bars().map(|b| b.y0).collect();
    assert_eq!(tops, vec![180, 230, 280, 330]);

    for bar in IconLayout::NOTE.lines.bars() {
        assert_eq!((bar.x0, bar.x1), (180, 332));
        assert_eq!(bar.y1 - bar.y0, 20);
    }
}

#[test]
fn text_bars_sit_inside_the_document() {
    let doc = IconLayout::NOTE.document;
    for bar in IconLayout::NOTE.lines.bars() {
        assert!(doc.contains(bar.x0, bar.y0));
        assert!(doc.contains(bar.x1, bar.y1));
    }
}

#[test]
fn validate_rejects_shapes_off_canvas() {
    let mut layout = IconLayout::NOTE;
    layout.card = PixelBox::new(50, 50, 600, 462);
    let err = layout.validate().unwrap_err();
    assert!(matches!(err, IconError::Geometry(_)));
}

#[test]
fn validate_rejects_oversized_radius() {
    let mut layout = IconLayout::NOTE;
    layout.document_radius = 200;
    let err = layout.validate().unwrap_err();
    assert!(err.to_string().contains("corner radius 200"));
}

#[test]
fn validate_rejects_empty_boxes() {
    let mut layout = IconLayout::NOTE;
    layout.lines.first = PixelBox::new(332, 180, 180, 200);
    assert!(layout.validate().is_err());
}
