//! The collapse indicator glyph.
//!
//! The indicator is a rounded, N-pointed shape built from arcs: each of the
//! `sides` sectors contributes a short chord on a circle, bulged outward by a
//! quadratic curve, and consecutive chords are joined with straight lines.
//! With three sides it reads as a chevron whose point flips between the
//! expanded (90 degrees) and collapsed (-90 degrees) states.

use glam::Vec2;
use groupbox_render::{Path, Point, Rect};

/// Number of points on the collapse indicator.
pub const CHEVRON_SIDES: u32 = 3;

/// Start angle, in degrees, for the expanded indicator.
pub const EXPANDED_START_ANGLE: f32 = 90.0;

/// Start angle, in degrees, for the collapsed indicator.
pub const COLLAPSED_START_ANGLE: f32 = -90.0;

/// Half-width, in degrees, of the chord each sector contributes.
const CHORD_HALF_ANGLE: f32 = 360.0 / 40.0;

/// Build the arc shape centered on `center`.
///
/// Returns an empty path when `sides` is zero.
pub fn arc_shape(center: Point, radius: f32, start_angle: f32, sides: u32) -> Path {
    let mut path = Path::new();
    if sides == 0 {
        return path;
    }

    let c = center.to_vec2();
    let on_circle = |degrees: f32, r: f32| -> Vec2 {
        let a = degrees.to_radians();
        c + Vec2::new(a.cos(), a.sin()) * r
    };

    let sector = 360.0 / sides as f32;

    for i in 0..sides {
        let angle = start_angle + i as f32 * sector;

        let p1 = on_circle(angle - CHORD_HALF_ANGLE, radius);
        let p2 = on_circle(angle + CHORD_HALF_ANGLE, radius);

        if i == 0 {
            path.move_to(Point::from_vec2(p1));
        } else {
            path.line_to(Point::from_vec2(p1));
        }

        let mid = (p1 + p2) / 2.0;
        let bulge = 2.0 * p1.distance(mid) / sides as f32;
        let control = on_circle(angle, radius + bulge);

        path.quad_to(Point::from_vec2(control), Point::from_vec2(p2));
    }

    path.close();
    path
}

/// The collapse indicator filling `rect`, pointing according to `collapsed`.
pub fn chevron(rect: Rect, collapsed: bool) -> Path {
    let start = if collapsed {
        COLLAPSED_START_ANGLE
    } else {
        EXPANDED_START_ANGLE
    };
    arc_shape(rect.center(), rect.width() / 2.0, start, CHEVRON_SIDES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupbox_render::{PathCommand, DEFAULT_TOLERANCE};

    const EPS: f32 = 1e-3;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_command_structure() {
        let path = arc_shape(Point::new(0.0, 0.0), 10.0, 90.0, 3);
        let cmds = path.commands();

        // move, quad, (line, quad) x2, close
        assert_eq!(cmds.len(), 7);
        assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
        assert!(matches!(cmds[1], PathCommand::QuadTo { .. }));
        assert!(matches!(cmds[2], PathCommand::LineTo(_)));
        assert!(matches!(cmds[6], PathCommand::Close));
    }

    #[test]
    fn test_points_on_circle() {
        let center = Point::new(5.0, 5.0);
        let path = arc_shape(center, 10.0, 90.0, 3);

        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    assert!((p.distance(center) - 10.0).abs() < EPS);
                }
                PathCommand::QuadTo { control, end } => {
                    assert!((end.distance(center) - 10.0).abs() < EPS);
                    assert!(control.distance(center) > 10.0);
                }
                PathCommand::Close => {}
            }
        }
    }

    #[test]
    fn test_first_sector_straddles_start_angle() {
        let path = arc_shape(Point::ZERO, 10.0, 90.0, 3);
        let PathCommand::MoveTo(p1) = path.commands()[0] else {
            panic!("expected MoveTo");
        };
        let PathCommand::QuadTo { control, end } = path.commands()[1] else {
            panic!("expected QuadTo");
        };

        // Chord is symmetric about the +y axis, control point sits on it.
        assert!((p1.x + end.x).abs() < EPS);
        assert!((p1.y - end.y).abs() < EPS);
        assert!(control.x.abs() < EPS);
        assert!(control.y > 10.0);
    }

    #[test]
    fn test_expanded_and_collapsed_are_point_reflections() {
        let center = Point::new(20.0, 7.5);
        let expanded = arc_shape(center, 6.0, EXPANDED_START_ANGLE, CHEVRON_SIDES);
        let collapsed = arc_shape(center, 6.0, COLLAPSED_START_ANGLE, CHEVRON_SIDES);

        assert_eq!(expanded.commands().len(), collapsed.commands().len());
        for (a, b) in expanded.commands().iter().zip(collapsed.commands()) {
            let reflected = a.map_points(|p| p.reflect_through(center));
            match (reflected, *b) {
                (PathCommand::MoveTo(p), PathCommand::MoveTo(q))
                | (PathCommand::LineTo(p), PathCommand::LineTo(q)) => assert!(close(p, q)),
                (
                    PathCommand::QuadTo { control: c1, end: e1 },
                    PathCommand::QuadTo { control: c2, end: e2 },
                ) => {
                    assert!(close(c1, c2));
                    assert!(close(e1, e2));
                }
                (PathCommand::Close, PathCommand::Close) => {}
                (x, y) => panic!("mismatched commands {x:?} vs {y:?}"),
            }
        }

        // Sampled along the flattened outline the shapes agree too.
        let a = expanded.flatten(DEFAULT_TOLERANCE);
        let b = collapsed.flatten(DEFAULT_TOLERANCE);
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(&b) {
            assert!(close(p.reflect_through(center), *q));
        }
    }

    #[test]
    fn test_chevron_fits_rect() {
        let rect = Rect::new(100.0, 10.0, 12.0, 12.0);
        let bounds = chevron(rect, false).bounds().unwrap();
        let slack = rect.inflate(2.0);
        assert!(bounds.left() >= slack.left());
        assert!(bounds.right() <= slack.right());
        assert!(bounds.top() >= slack.top());
        assert!(bounds.bottom() <= slack.bottom());
    }

    #[test]
    fn test_zero_sides_is_empty() {
        assert!(arc_shape(Point::ZERO, 5.0, 90.0, 0).is_empty());
    }
}
