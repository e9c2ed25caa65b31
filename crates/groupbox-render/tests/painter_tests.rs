//! Tests for recording paint commands and path geometry.

use groupbox_render::{
    ApproximateTextMeasure, Color, CornerRadii, Font, PaintCommand, Painter, Path, Point, Rect,
    RecordingPainter, Stroke, TextMeasure, DEFAULT_TOLERANCE,
};

#[test]
fn test_recording_preserves_order() {
    let mut painter = RecordingPainter::new();
    let font = Font::default();

    painter.fill_rect(Rect::new(0.0, 0.0, 50.0, 20.0), Color::WHITE);
    painter.draw_line(Point::new(2.0, 18.0), Point::new(46.0, 18.0), &Stroke::default());
    painter.draw_text(Point::new(4.0, 14.0), "Title", &font, Color::BLACK);
    painter.stroke_path(
        &Path::rounded_rect(Rect::new(1.0, 1.0, 10.0, 10.0), CornerRadii::uniform(2.0)),
        &Stroke::new(Color::GRAY, 2.0),
    );

    assert_eq!(painter.commands.len(), 4);
    assert_eq!(painter.fill_rect_count(), 1);
    assert_eq!(painter.lines(), vec![(Point::new(2.0, 18.0), Point::new(46.0, 18.0))]);
    assert_eq!(painter.texts(), vec![(Point::new(4.0, 14.0), "Title")]);
    assert!(matches!(
        painter.commands[3],
        PaintCommand::StrokePath { stroke, .. } if stroke.width == 2.0
    ));

    painter.clear();
    assert!(painter.commands.is_empty());
}

#[test]
fn test_rounded_rect_bounds() {
    let rect = Rect::new(10.0, 20.0, 30.0, 16.0);
    let path = Path::rounded_rect(rect, CornerRadii::uniform(4.0));
    let bounds = path.bounds().unwrap();

    assert!((bounds.left() - rect.left()).abs() < 1e-3);
    assert!((bounds.top() - rect.top()).abs() < 1e-3);
    assert!((bounds.right() - rect.right()).abs() < 1e-3);
    assert!((bounds.bottom() - rect.bottom()).abs() < 1e-3);
}

#[test]
fn test_curve_flattening_respects_tolerance() {
    let mut path = Path::new();
    path.move_to(Point::new(0.0, 0.0))
        .quad_to(Point::new(50.0, 100.0), Point::new(100.0, 0.0));

    let coarse = path.flatten(5.0);
    let fine = path.flatten(DEFAULT_TOLERANCE);
    assert!(fine.len() > coarse.len());

    assert_eq!(fine.first(), Some(&Point::new(0.0, 0.0)));
    let last = fine.last().unwrap();
    assert!((last.x - 100.0).abs() < 1e-3 && last.y.abs() < 1e-3);
}

#[test]
fn test_empty_path_has_no_bounds() {
    assert!(Path::new().bounds().is_none());
    assert!(Path::new().flatten(DEFAULT_TOLERANCE).is_empty());
}

#[test]
fn test_bold_text_is_wider() {
    let measure = ApproximateTextMeasure::default();
    let regular = Font::new("Sans", 12.0);
    let bold = regular.clone().with_bold(true);

    assert!(measure.text_width(&bold, "Options") > measure.text_width(&regular, "Options"));
    assert_eq!(measure.metrics(&bold), measure.metrics(&regular));
}
