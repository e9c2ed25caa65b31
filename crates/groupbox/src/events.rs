//! Input and change events, and the handler interface.
//!
//! Hosts translate their native events into [`WidgetEvent`]s and feed them
//! to [`Widget::event`], which dispatches on the event kind. Painting is a
//! separate entry point because it borrows the host's paint surface.

use groupbox_render::{Font, Painter, Point, Size};

use crate::host::ChildId;
use crate::style::Palette;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// A pointer event in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub local_pos: Point,
}

impl MouseEvent {
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self { button, local_pos }
    }

    /// A left-button event at (x, y).
    pub fn left(x: f32, y: f32) -> Self {
        Self::new(MouseButton::Left, Point::new(x, y))
    }
}

/// Keys the group box distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    /// The dedicated "select" key found on some keypads and remotes.
    Select,
    Enter,
    Escape,
    Tab,
    /// Any other key, by host key code.
    Other(u32),
}

impl Key {
    /// Keys that activate the checkbox.
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Space | Key::Select)
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Auto-repeat event.
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            is_repeat: false,
        }
    }
}

/// Property changes reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// The widget was enabled or disabled.
    EnabledChange(bool),
    /// The base font changed.
    FontChange(Font),
    /// The palette changed.
    PaletteChange(Palette),
    /// A child was added to the widget.
    ChildAdded(ChildId),
    /// The widget gained keyboard focus.
    FocusIn,
    /// The widget lost keyboard focus.
    FocusOut,
}

/// Events delivered to a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    MousePress(MouseEvent),
    MouseMove(MouseEvent),
    MouseRelease(MouseEvent),
    KeyPress(KeyEvent),
    KeyRelease(KeyEvent),
    Resize(Size),
    Change(ChangeEvent),
}

/// Handler entry points a host drives.
///
/// Handlers return `true` when they consumed the event.
pub trait Widget {
    /// Paint the widget.
    fn paint(&mut self, painter: &mut dyn Painter);

    fn mouse_press_event(&mut self, event: &MouseEvent) -> bool;

    fn mouse_move_event(&mut self, event: &MouseEvent) -> bool;

    fn mouse_release_event(&mut self, event: &MouseEvent) -> bool;

    fn key_press_event(&mut self, event: &KeyEvent) -> bool;

    fn key_release_event(&mut self, event: &KeyEvent) -> bool;

    /// The host resized the widget.
    fn resize_event(&mut self, size: Size);

    /// The host changed a property of the widget.
    fn change_event(&mut self, event: &ChangeEvent);

    /// Smallest size the widget can be laid out at.
    fn minimum_size_hint(&self) -> Size;

    /// Preferred size.
    fn size_hint(&self) -> Size {
        self.minimum_size_hint()
    }

    /// Dispatch an event to its handler.
    fn event(&mut self, event: &WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => self.mouse_press_event(e),
            WidgetEvent::MouseMove(e) => self.mouse_move_event(e),
            WidgetEvent::MouseRelease(e) => self.mouse_release_event(e),
            WidgetEvent::KeyPress(e) => self.key_press_event(e),
            WidgetEvent::KeyRelease(e) => self.key_release_event(e),
            WidgetEvent::Resize(size) => {
                self.resize_event(*size);
                true
            }
            WidgetEvent::Change(change) => {
                self.change_event(change);
                true
            }
        }
    }
}
