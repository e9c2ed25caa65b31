//! Prelude module for the group box.
//!
//! ```
//! use groupbox::prelude::*;
//! ```

// ============================================================================
// Widget
// ============================================================================

pub use crate::group_box::GroupBox;
pub use crate::events::{ChangeEvent, Key, KeyEvent, MouseButton, MouseEvent, Widget, WidgetEvent};
pub use crate::alignment::Alignment;

// ============================================================================
// Collaborators
// ============================================================================

pub use crate::host::{ChildHost, ChildId, ChildList};
pub use crate::style::{FlatStyle, GroupBoxStyle, Palette};
pub use groupbox_render::{Painter, RecordingPainter, TextMeasure};

// ============================================================================
// Signals and geometry
// ============================================================================

pub use groupbox_core::Signal;
pub use groupbox_render::{Color, Font, Point, Rect, Size};
