//! Vector paths.
//!
//! A [`Path`] is a list of drawing commands (move, line, quadratic curve,
//! close). Curves are flattened to polylines with lyon, which gives painters
//! without native curve support something to draw and gives tests points to
//! sample.

use lyon::math::point as lyon_point;
use lyon::path::builder::SvgPathBuilder;
use lyon::path::iterator::PathIterator;
use lyon::path::{Path as LyonPath, PathEvent};

use crate::types::{CornerRadii, Point, Rect};

/// Default flattening tolerance.
///
/// Smaller values produce more accurate curves but more points.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a quadratic bezier curve.
    QuadTo { control: Point, end: Point },
    /// Close the current subpath.
    Close,
}

impl PathCommand {
    /// Apply `f` to every point the command carries.
    pub fn map_points(self, mut f: impl FnMut(Point) -> Point) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(f(p)),
            Self::LineTo(p) => Self::LineTo(f(p)),
            Self::QuadTo { control, end } => Self::QuadTo {
                control: f(control),
                end: f(end),
            },
            Self::Close => Self::Close,
        }
    }
}

/// A 2D path for complex shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Create a rounded rectangle path.
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let mut path = Self::new();

        let tl = radii.top_left;
        let tr = radii.top_right;
        let br = radii.bottom_right;
        let bl = radii.bottom_left;

        path.move_to(Point::new(rect.left() + tl, rect.top()));
        path.line_to(Point::new(rect.right() - tr, rect.top()));
        if tr > 0.0 {
            path.quad_to(
                Point::new(rect.right(), rect.top()),
                Point::new(rect.right(), rect.top() + tr),
            );
        }

        path.line_to(Point::new(rect.right(), rect.bottom() - br));
        if br > 0.0 {
            path.quad_to(
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.right() - br, rect.bottom()),
            );
        }

        path.line_to(Point::new(rect.left() + bl, rect.bottom()));
        if bl > 0.0 {
            path.quad_to(
                Point::new(rect.left(), rect.bottom()),
                Point::new(rect.left(), rect.bottom() - bl),
            );
        }

        path.line_to(Point::new(rect.left(), rect.top() + tl));
        if tl > 0.0 {
            path.quad_to(
                Point::new(rect.left(), rect.top()),
                Point::new(rect.left() + tl, rect.top()),
            );
        }

        path.close();
        path
    }

    /// Convert to lyon's path representation.
    pub fn to_lyon(&self) -> LyonPath {
        let mut builder = LyonPath::svg_builder();

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    builder.move_to(lyon_point(p.x, p.y));
                }
                PathCommand::LineTo(p) => {
                    builder.line_to(lyon_point(p.x, p.y));
                }
                PathCommand::QuadTo { control, end } => {
                    builder.quadratic_bezier_to(
                        lyon_point(control.x, control.y),
                        lyon_point(end.x, end.y),
                    );
                }
                PathCommand::Close => {
                    builder.close();
                }
            }
        }

        builder.build()
    }

    /// Flatten the path into a polyline.
    ///
    /// Curves are approximated within `tolerance`. Points of all subpaths
    /// are returned in drawing order; a closed subpath does not repeat its
    /// first point.
    pub fn flatten(&self, tolerance: f32) -> Vec<Point> {
        let mut points = Vec::new();

        for event in self.to_lyon().iter().flattened(tolerance) {
            match event {
                PathEvent::Begin { at } => points.push(Point::new(at.x, at.y)),
                PathEvent::Line { to, .. } => points.push(Point::new(to.x, to.y)),
                PathEvent::End { .. } => {}
                PathEvent::Quadratic { to, .. } | PathEvent::Cubic { to, .. } => {
                    points.push(Point::new(to.x, to.y));
                }
            }
        }

        points
    }

    /// Bounding box of the flattened path, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let points = self.flatten(DEFAULT_TOLERANCE);
        let first = points.first()?;

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_commands() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(100.0, 0.0))
            .line_to(Point::new(100.0, 100.0))
            .close();

        assert!(!path.is_empty());
        assert_eq!(path.commands().len(), 4);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(path.commands()[3], PathCommand::Close));
    }

    #[test]
    fn test_flatten_polygon() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(10.0, 0.0))
            .line_to(Point::new(10.0, 10.0))
            .close();

        let points = path.flatten(DEFAULT_TOLERANCE);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert!(points.contains(&Point::new(10.0, 0.0)));
        assert!(points.contains(&Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_flatten_curve_adds_points() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .quad_to(Point::new(50.0, 100.0), Point::new(100.0, 0.0));

        let points = path.flatten(DEFAULT_TOLERANCE);
        assert!(points.len() > 3);
        assert_eq!(*points.last().unwrap(), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_bounds() {
        let path = Path::rounded_rect(Rect::new(10.0, 20.0, 30.0, 40.0), CornerRadii::uniform(4.0));
        let bounds = path.bounds().unwrap();
        assert!((bounds.left() - 10.0).abs() < 0.01);
        assert!((bounds.top() - 20.0).abs() < 0.01);
        assert!((bounds.right() - 40.0).abs() < 0.01);
        assert!((bounds.bottom() - 60.0).abs() < 0.01);

        assert!(Path::new().bounds().is_none());
    }

    #[test]
    fn test_map_points() {
        let cmd = PathCommand::QuadTo {
            control: Point::new(1.0, 2.0),
            end: Point::new(3.0, 4.0),
        };
        let moved = cmd.map_points(|p| Point::new(p.x + 1.0, p.y));
        assert_eq!(
            moved,
            PathCommand::QuadTo {
                control: Point::new(2.0, 2.0),
                end: Point::new(4.0, 4.0),
            }
        );
        assert_eq!(PathCommand::Close.map_points(|p| p), PathCommand::Close);
    }
}
