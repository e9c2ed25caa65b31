//! Painting primitives for the group box widget.
//!
//! This crate provides the drawing vocabulary the widget speaks. It does not
//! own a graphics backend: hosts implement [`Painter`] on top of whatever
//! surface they render to, and [`TextMeasure`] on top of their font system.
//!
//! # Core Types
//!
//! - [`Point`], [`Size`], [`Rect`] - geometry
//! - [`Color`] - RGBA color
//! - [`Path`] - vector paths built from lines and curves
//! - [`Font`], [`FontMetrics`], [`TextMeasure`] - font description and measurement
//! - [`Painter`] - the paint surface interface
//! - [`RecordingPainter`] - a painter that records commands, for tests and debugging

pub mod font;
pub mod painter;
pub mod path;
mod types;

pub use font::{ApproximateTextMeasure, Font, FontMetrics, TextMeasure};
pub use painter::{PaintCommand, Painter, RecordingPainter, Stroke};
pub use path::{DEFAULT_TOLERANCE, Path, PathCommand};
pub use types::{Color, CornerRadii, Point, Rect, Size};
