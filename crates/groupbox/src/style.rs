//! Palette and style hooks.
//!
//! The checkbox glyph and the frame size derivation are style policy, not
//! group box logic, so the widget delegates both to a [`GroupBoxStyle`].
//! [`FlatStyle`] is the built-in implementation.

use groupbox_render::{Color, CornerRadii, Painter, Path, Point, Rect, Size, Stroke};

/// Colors the group box paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Widget background.
    pub background: Color,
    /// Title text while enabled.
    pub window_text: Color,
    /// Title text while disabled.
    pub disabled_window_text: Color,
    /// Rule lines.
    pub mid: Color,
    /// Collapse indicator while pressed.
    pub dark: Color,
    /// Collapse indicator at rest.
    pub text: Color,
    /// Checked checkbox fill.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(239, 239, 239),
            window_text: Color::from_rgb8(33, 33, 33),
            disabled_window_text: Color::from_rgb8(158, 158, 158),
            mid: Color::from_rgb8(200, 200, 200),
            dark: Color::from_rgb8(117, 117, 117),
            text: Color::from_rgb8(33, 33, 33),
            highlight: Color::from_rgb8(33, 150, 243),
        }
    }
}

/// Visual state of the checkbox glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckboxState {
    pub checked: bool,
    /// Sunken look while a press is in progress.
    pub pressed: bool,
    pub enabled: bool,
}

/// Style policy the group box delegates to.
pub trait GroupBoxStyle: Send + Sync {
    /// Draw the checkbox glyph into `rect`.
    fn draw_check_box(
        &self,
        painter: &mut dyn Painter,
        rect: Rect,
        state: CheckboxState,
        palette: &Palette,
    );

    /// Size of a titled frame whose title row needs `contents`.
    fn group_box_size_from_contents(&self, contents: Size) -> Size;
}

/// A flat style with a rounded checkbox and a check mark.
#[derive(Debug, Clone, Copy)]
pub struct FlatStyle {
    /// Space a titled frame adds around its contents on every side.
    pub frame_margin: f32,
    /// Corner radius of the checkbox.
    pub corner_radius: f32,
}

impl Default for FlatStyle {
    fn default() -> Self {
        Self {
            frame_margin: 4.0,
            corner_radius: 3.0,
        }
    }
}

impl GroupBoxStyle for FlatStyle {
    fn draw_check_box(
        &self,
        painter: &mut dyn Painter,
        rect: Rect,
        state: CheckboxState,
        palette: &Palette,
    ) {
        if rect.is_empty() {
            return;
        }

        let disabled = Color::from_rgb8(189, 189, 189);
        let fill = if !state.checked {
            None
        } else if !state.enabled {
            Some(disabled)
        } else if state.pressed {
            Some(Color::from_rgb8(25, 118, 210))
        } else {
            Some(palette.highlight)
        };

        let border = if !state.enabled {
            disabled
        } else if let Some(fill) = fill {
            fill
        } else if state.pressed {
            palette.dark
        } else {
            Color::from_rgb8(158, 158, 158)
        };

        let outline = Path::rounded_rect(rect, CornerRadii::uniform(self.corner_radius));
        if let Some(fill) = fill {
            painter.fill_path(&outline, fill);
        }
        painter.stroke_path(&outline, &Stroke::new(border, 1.5));

        if state.checked {
            let mark_color = if state.enabled {
                Color::WHITE
            } else {
                palette.disabled_window_text
            };

            let padding = rect.width() * 0.2;
            let inner = Rect::new(
                rect.left() + padding,
                rect.top() + padding,
                rect.width() - padding * 2.0,
                rect.height() - padding * 2.0,
            );

            let mut mark = Path::new();
            mark.move_to(Point::new(inner.left(), inner.top() + inner.height() * 0.5))
                .line_to(Point::new(
                    inner.left() + inner.width() * 0.35,
                    inner.top() + inner.height() * 0.75,
                ))
                .line_to(Point::new(inner.right(), inner.top() + inner.height() * 0.15));

            painter.stroke_path(&mark, &Stroke::new(mark_color, 2.0));
        }
    }

    fn group_box_size_from_contents(&self, contents: Size) -> Size {
        Size::new(
            contents.width + 2.0 * self.frame_margin,
            contents.height + 2.0 * self.frame_margin,
        )
    }
}
