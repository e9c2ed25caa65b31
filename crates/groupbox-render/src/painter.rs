//! The paint surface interface.
//!
//! [`Painter`] is the small set of drawing operations the widget issues
//! during a paint pass. Hosts implement it on top of their renderer.
//! [`RecordingPainter`] keeps every command in a list instead of drawing,
//! which is what tests assert against.

use crate::font::Font;
use crate::path::Path;
use crate::types::{Color, Point, Rect};

/// Stroke style for lines and outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A surface the widget paints onto.
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a straight line.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw text with its baseline starting at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, font: &Font, color: Color);

    /// Fill a path.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke a path.
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
}

/// A recorded paint command.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        origin: Point,
        text: String,
        font: Font,
        color: Color,
    },
    FillPath {
        path: Path,
        color: Color,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
    },
}

/// A painter that records all commands for later inspection.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub commands: Vec<PaintCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded lines.
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// All recorded text draws as (origin, text).
    pub fn texts(&self) -> Vec<(Point, &str)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { origin, text, .. } => Some((*origin, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// All recorded path fills.
    pub fn filled_paths(&self) -> Vec<(&Path, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::FillPath { path, color } => Some((path, *color)),
                _ => None,
            })
            .collect()
    }

    /// Count of `FillRect` commands.
    pub fn fill_rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::FillRect { .. }))
            .count()
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(PaintCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, font: &Font, color: Color) {
        self.commands.push(PaintCommand::Text {
            origin,
            text: text.to_string(),
            font: font.clone(),
            color,
        });
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(PaintCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(PaintCommand::StrokePath {
            path: path.clone(),
            stroke: *stroke,
        });
    }
}
