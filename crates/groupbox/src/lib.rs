//! A collapsible, checkable group box widget.
//!
//! [`GroupBox`] draws a titled frame with optional top and bottom rule lines.
//! An optional checkbox in the title row enables or disables the children,
//! and an optional collapse indicator hides them and shrinks the group box
//! to its title row.
//!
//! The widget does not own a window, a renderer or a widget tree. The host
//! hands it collaborators instead: a [`ChildHost`] for the children, a
//! [`Painter`](render::Painter) to draw on, a [`TextMeasure`](render::TextMeasure)
//! for font metrics and a [`GroupBoxStyle`] for the checkbox glyph.
//!
//! # Example
//!
//! ```
//! use groupbox::prelude::*;
//!
//! let mut group = GroupBox::new("Proxy")
//!     .with_checkable(true)
//!     .with_size(Size::new(240.0, 120.0));
//! let host = group.add_child("host");
//!
//! let mut painter = RecordingPainter::new();
//! group.paint(&mut painter);
//!
//! group.set_checked(false);
//! assert!(!group.children().get(host).unwrap().enabled);
//! ```

pub mod alignment;
pub mod arc_shape;
pub mod config;
pub mod events;
pub mod geometry;
pub mod group_box;
pub mod host;
pub mod prelude;
pub mod style;

pub use groupbox_core::{ConnectionGuard, ConnectionId, Error, Result, Signal};

pub use alignment::{Alignment, AlignmentFlag, HorizontalAlign, VerticalAlign};
pub use arc_shape::{arc_shape, chevron};
pub use config::GroupBoxConfig;
pub use events::{
    ChangeEvent, Key, KeyEvent, MouseButton, MouseEvent, Widget, WidgetEvent,
};
pub use geometry::{GroupBoxGeometry, LayoutInput, Margins};
pub use group_box::{Affordance, GroupBox};
pub use host::{ChildHost, ChildId, ChildList, ChildState, ContentMargins};
pub use style::{CheckboxState, FlatStyle, GroupBoxStyle, Palette};

/// Geometry, painting and text measurement.
pub mod render {
    pub use groupbox_render::*;
}
