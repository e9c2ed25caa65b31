//! GroupBox widget implementation.
//!
//! This module provides [`GroupBox`], a titled container with optional rule
//! lines, an optional checkbox that enables or disables its children and an
//! optional collapse indicator that hides them.
//!
//! # Example
//!
//! ```
//! use groupbox::{Alignment, GroupBox};
//!
//! let mut group = GroupBox::new("Advanced Options")
//!     .with_checkable(true)
//!     .with_collapsible(true)
//!     .with_title_alignment(Alignment::RIGHT | Alignment::TOP);
//!
//! let spacing = group.add_child("spacing");
//!
//! group.toggled.connect(|&checked| {
//!     println!("Group is now {}", if checked { "enabled" } else { "disabled" });
//! });
//!
//! group.set_checked(false);
//! assert!(!group.children().get(spacing).unwrap().enabled);
//! ```

use std::sync::Arc;

use groupbox_core::Signal;
use groupbox_core::logging::targets;
use groupbox_render::{
    ApproximateTextMeasure, Color, Font, FontMetrics, Painter, Point, Rect, Size, Stroke,
    TextMeasure,
};
use tracing::debug;

use crate::alignment::Alignment;
use crate::arc_shape::chevron;
use crate::events::{ChangeEvent, KeyEvent, MouseButton, MouseEvent, Widget};
use crate::geometry::{GroupBoxGeometry, LayoutInput, Margins, TITLE_INSET, title_row_size};
use crate::host::{ChildHost, ChildId, ChildList, ContentMargins};
use crate::style::{CheckboxState, FlatStyle, GroupBoxStyle, Palette};

/// The interactive parts of the title row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// The checkbox, together with the title text.
    Check,
    /// The collapse indicator.
    Collapse,
}

/// A titled container with an optional checkbox and collapse indicator.
///
/// # Checkbox
///
/// When checkable, a checkbox sits in front of the title. Clicking it (or the
/// title text), or pressing Space while the group box has focus, toggles the
/// checked state and enables or disables every direct child.
///
/// # Collapsing
///
/// When collapsible, a chevron sits at the right edge of the title row.
/// Clicking it hides or shows every direct child and shrinks the group box
/// to its title row.
///
/// Turning a capability off keeps the stored `checked`/`collapsed` value but
/// stops it from having an effect: children are re-enabled or re-shown.
///
/// # Signals
///
/// - `toggled(bool)`: the checked state changed
/// - `clicked(bool)`: the user toggled the checkbox, with the new state
/// - `collapse_changed(bool)`: the collapsed state changed
pub struct GroupBox<H: ChildHost = ChildList> {
    title: String,

    /// Base font the title font is derived from.
    font: Font,
    title_font: Font,
    title_bold: bool,
    title_scale: f32,
    title_alignment: Alignment,

    line_top: bool,
    line_bottom: bool,
    line_top_alignment: Alignment,
    line_bottom_alignment: Alignment,

    /// Rule line color; `None` uses the palette's mid tone.
    line_color: Option<Color>,

    margins: Margins,

    checkable: bool,
    checked: bool,
    collapsible: bool,
    collapsed: bool,

    check_pressed: bool,
    collapse_pressed: bool,
    /// The affordance the current pointer press began on.
    press_target: Option<Affordance>,

    enabled: bool,
    focused: bool,
    size: Size,
    palette: Palette,

    /// Layout from the last paint, resize or geometry-affecting setter.
    geometry: GroupBoxGeometry,
    needs_repaint: bool,

    children: H,
    measure: Arc<dyn TextMeasure>,
    style: Arc<dyn GroupBoxStyle>,

    /// Signal emitted when the checked state changes.
    pub toggled: Signal<bool>,

    /// Signal emitted when the user toggles the checkbox.
    pub clicked: Signal<bool>,

    /// Signal emitted when the collapsed state changes.
    pub collapse_changed: Signal<bool>,
}

impl GroupBox<ChildList> {
    /// Create a new group box that keeps its children in a [`ChildList`].
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_host(title, ChildList::new())
    }

    /// Add a child and apply the current enabled/visible state to it.
    pub fn add_child(&mut self, name: impl Into<String>) -> ChildId {
        let id = self.children.add(name);
        self.change_event(&ChangeEvent::ChildAdded(id));
        id
    }
}

impl<H: ChildHost> GroupBox<H> {
    /// Create a new group box over an existing child host.
    pub fn with_host(title: impl Into<String>, children: H) -> Self {
        let font = Font::default();
        let title_bold = true;
        let title_scale = 1.0;

        let mut group = Self {
            title: title.into(),
            title_font: derive_title_font(&font, title_bold, title_scale),
            font,
            title_bold,
            title_scale,
            title_alignment: Alignment::LEFT | Alignment::BOTTOM,
            line_top: true,
            line_bottom: false,
            line_top_alignment: Alignment::BOTTOM,
            line_bottom_alignment: Alignment::V_CENTER,
            line_color: None,
            margins: Margins::default(),
            checkable: false,
            checked: true,
            collapsible: false,
            collapsed: false,
            check_pressed: false,
            collapse_pressed: false,
            press_target: None,
            enabled: true,
            focused: false,
            size: Size::ZERO,
            palette: Palette::default(),
            geometry: GroupBoxGeometry::default(),
            needs_repaint: true,
            children,
            measure: Arc::new(ApproximateTextMeasure::default()),
            style: Arc::new(FlatStyle::default()),
            toggled: Signal::new(),
            clicked: Signal::new(),
            collapse_changed: Signal::new(),
        };
        group.update_geometry();
        group.calculate_frame();
        group
    }

    // =========================================================================
    // Title
    // =========================================================================

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.calculate_frame();
        self.update_geometry();
        self.update();
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Whether the title is drawn bold.
    pub fn is_title_bold(&self) -> bool {
        self.title_bold
    }

    pub fn set_title_bold(&mut self, bold: bool) {
        self.title_bold = bold;
        self.update_title_font();
    }

    pub fn with_title_bold(mut self, bold: bool) -> Self {
        self.set_title_bold(bold);
        self
    }

    /// Multiplier applied to the base font size for the title.
    pub fn title_scale(&self) -> f32 {
        self.title_scale
    }

    pub fn set_title_scale(&mut self, scale: f32) {
        self.title_scale = scale;
        self.update_title_font();
    }

    pub fn with_title_scale(mut self, scale: f32) -> Self {
        self.set_title_scale(scale);
        self
    }

    pub fn title_alignment(&self) -> Alignment {
        self.title_alignment
    }

    pub fn set_title_alignment(&mut self, alignment: Alignment) {
        self.title_alignment = alignment;
        self.update_geometry();
        self.update();
    }

    pub fn with_title_alignment(mut self, alignment: Alignment) -> Self {
        self.set_title_alignment(alignment);
        self
    }

    /// The font the title is drawn with.
    pub fn title_font(&self) -> &Font {
        &self.title_font
    }

    // =========================================================================
    // Rule lines
    // =========================================================================

    pub fn has_line_top(&self) -> bool {
        self.line_top
    }

    pub fn set_line_top(&mut self, line: bool) {
        self.line_top = line;
        self.update();
    }

    pub fn with_line_top(mut self, line: bool) -> Self {
        self.set_line_top(line);
        self
    }

    pub fn has_line_bottom(&self) -> bool {
        self.line_bottom
    }

    pub fn set_line_bottom(&mut self, line: bool) {
        self.line_bottom = line;
        self.update();
    }

    pub fn with_line_bottom(mut self, line: bool) -> Self {
        self.set_line_bottom(line);
        self
    }

    pub fn line_top_alignment(&self) -> Alignment {
        self.line_top_alignment
    }

    pub fn set_line_top_alignment(&mut self, alignment: Alignment) {
        self.line_top_alignment = alignment;
        self.update_geometry();
        self.update();
    }

    pub fn with_line_top_alignment(mut self, alignment: Alignment) -> Self {
        self.set_line_top_alignment(alignment);
        self
    }

    pub fn line_bottom_alignment(&self) -> Alignment {
        self.line_bottom_alignment
    }

    pub fn set_line_bottom_alignment(&mut self, alignment: Alignment) {
        self.line_bottom_alignment = alignment;
        self.update_geometry();
        self.update();
    }

    pub fn with_line_bottom_alignment(mut self, alignment: Alignment) -> Self {
        self.set_line_bottom_alignment(alignment);
        self
    }

    /// The color rule lines are drawn in.
    pub fn line_color(&self) -> Color {
        self.line_color.unwrap_or(self.palette.mid)
    }

    /// Override the rule line color, or `None` to follow the palette.
    pub fn set_line_color(&mut self, color: Option<Color>) {
        self.line_color = color;
        self.update();
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.set_line_color(Some(color));
        self
    }

    // =========================================================================
    // Margins
    // =========================================================================

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn margin_left(&self) -> i32 {
        self.margins.left
    }

    pub fn set_margin_left(&mut self, margin: i32) {
        self.margins.left = margin;
        self.margins_changed();
    }

    pub fn with_margin_left(mut self, margin: i32) -> Self {
        self.set_margin_left(margin);
        self
    }

    pub fn margin_right(&self) -> i32 {
        self.margins.right
    }

    pub fn set_margin_right(&mut self, margin: i32) {
        self.margins.right = margin;
        self.margins_changed();
    }

    pub fn with_margin_right(mut self, margin: i32) -> Self {
        self.set_margin_right(margin);
        self
    }

    pub fn margin_top(&self) -> i32 {
        self.margins.top
    }

    /// Set the space above the content. Negative derives it from the title font.
    pub fn set_margin_top(&mut self, margin: i32) {
        self.margins.top = margin;
        self.margins_changed();
    }

    pub fn with_margin_top(mut self, margin: i32) -> Self {
        self.set_margin_top(margin);
        self
    }

    pub fn margin_bottom(&self) -> i32 {
        self.margins.bottom
    }

    /// Set the space below the content. Negative uses the default of 4.
    pub fn set_margin_bottom(&mut self, margin: i32) {
        self.margins.bottom = margin;
        self.margins_changed();
    }

    pub fn with_margin_bottom(mut self, margin: i32) -> Self {
        self.set_margin_bottom(margin);
        self
    }

    /// Space reserved above the content area.
    pub fn space_top(&self) -> i32 {
        crate::geometry::space_top(self.margins.top, self.has_title(), &self.title_metrics())
    }

    /// Space reserved below the content area.
    pub fn space_bottom(&self) -> i32 {
        crate::geometry::space_bottom(self.margins.bottom)
    }

    fn margins_changed(&mut self) {
        self.calculate_frame();
        self.update_geometry();
        self.update();
    }

    // =========================================================================
    // Checkbox
    // =========================================================================

    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    /// Show or hide the checkbox.
    ///
    /// Turning it off re-enables the children without touching the stored
    /// checked state.
    pub fn set_checkable(&mut self, checkable: bool) {
        if self.checkable == checkable {
            return;
        }
        self.checkable = checkable;
        if !checkable {
            self.check_pressed = false;
            if self.press_target == Some(Affordance::Check) {
                self.press_target = None;
            }
        }
        self.update_enabled();
        self.update_geometry();
        self.update();
    }

    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.set_checkable(checkable);
        self
    }

    /// The stored checked state, whether or not the checkbox is shown.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    ///
    /// While checkable, children are re-enabled or disabled even when the
    /// value does not change; `toggled` fires only on a change.
    pub fn set_checked(&mut self, checked: bool) {
        let changed = self.checked != checked;
        self.checked = checked;

        if !self.checkable {
            return;
        }

        self.update_enabled();
        if changed {
            debug!(target: targets::STATE, checked, "checked state changed");
            self.toggled.emit(checked);
        }
        self.update();
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.set_checked(checked);
        self
    }

    /// Whether the checkbox is drawn sunken.
    pub fn is_check_pressed(&self) -> bool {
        self.check_pressed
    }

    // =========================================================================
    // Collapse
    // =========================================================================

    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    /// Show or hide the collapse indicator.
    ///
    /// Turning it off re-shows the children without touching the stored
    /// collapsed state.
    pub fn set_collapsible(&mut self, collapsible: bool) {
        if self.collapsible == collapsible {
            return;
        }
        self.collapsible = collapsible;
        if !collapsible {
            self.collapse_pressed = false;
            if self.press_target == Some(Affordance::Collapse) {
                self.press_target = None;
            }
        }
        self.update_collapsed();
        self.update();
    }

    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.set_collapsible(collapsible);
        self
    }

    /// The stored collapsed state, whether or not the indicator is shown.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Set the collapsed state.
    ///
    /// While collapsible, children are re-shown or hidden and the height is
    /// reset even when the value does not change; `collapse_changed` fires
    /// only on a change.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        let changed = self.collapsed != collapsed;
        self.collapsed = collapsed;

        if !self.collapsible {
            return;
        }

        self.update_collapsed();
        if changed {
            debug!(target: targets::STATE, collapsed, "collapsed state changed");
            self.collapse_changed.emit(collapsed);
        }
        self.update();
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.set_collapsed(collapsed);
        self
    }

    /// Collapsed and allowed to be.
    pub fn is_effectively_collapsed(&self) -> bool {
        self.collapsible && self.collapsed
    }

    /// Whether the collapse indicator is drawn pressed.
    pub fn is_collapse_pressed(&self) -> bool {
        self.collapse_pressed
    }

    // =========================================================================
    // Host state
    // =========================================================================

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the base font. The title font is derived from it.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.update_title_font();
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.set_font(font);
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.update();
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.set_palette(palette);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the widget. Disabled widgets ignore input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.change_event(&ChangeEvent::EnabledChange(enabled));
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the widget.
    pub fn set_size(&mut self, size: Size) {
        self.resize_event(size);
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.set_size(size);
        self
    }

    /// Replace the text measurement collaborator.
    pub fn set_text_measure(&mut self, measure: Arc<dyn TextMeasure>) {
        self.measure = measure;
        self.calculate_frame();
        self.update_geometry();
        self.update();
    }

    pub fn with_text_measure(mut self, measure: Arc<dyn TextMeasure>) -> Self {
        self.set_text_measure(measure);
        self
    }

    /// Replace the style collaborator.
    pub fn set_style(&mut self, style: Arc<dyn GroupBoxStyle>) {
        self.style = style;
        self.update();
    }

    pub fn with_style(mut self, style: Arc<dyn GroupBoxStyle>) -> Self {
        self.set_style(style);
        self
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn children(&self) -> &H {
        &self.children
    }

    /// Mutable access to the child host.
    ///
    /// Report added children through [`ChangeEvent::ChildAdded`] so they pick
    /// up the current state.
    pub fn children_mut(&mut self) -> &mut H {
        &mut self.children
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The layout from the most recent geometry pass.
    pub fn geometry(&self) -> &GroupBoxGeometry {
        &self.geometry
    }

    /// Area covered by the title text.
    pub fn title_rect(&self) -> Rect {
        self.geometry.title_rect
    }

    /// Pointer target of the checkbox, empty when not checkable.
    pub fn check_rect(&self) -> Rect {
        self.geometry.check_hit_rect()
    }

    /// Pointer target of the collapse indicator, empty when not collapsible.
    pub fn collapse_rect(&self) -> Rect {
        self.geometry.collapse_hit_rect()
    }

    /// Returns true once after anything requested a redraw.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    fn update(&mut self) {
        self.needs_repaint = true;
    }

    fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    fn title_metrics(&self) -> FontMetrics {
        self.measure.metrics(&self.title_font)
    }

    fn title_text_width(&self) -> i32 {
        if self.has_title() {
            self.measure.text_width(&self.title_font, &self.title)
        } else {
            0
        }
    }

    fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            width: self.size.width as i32,
            height: self.size.height as i32,
            metrics: self.title_metrics(),
            text_width: self.title_text_width(),
            has_title: self.has_title(),
            title_alignment: self.title_alignment,
            line_top_alignment: self.line_top_alignment,
            line_bottom_alignment: self.line_bottom_alignment,
            margins: self.margins,
            checkable: self.checkable,
            collapsible: self.collapsible,
        }
    }

    fn update_geometry(&mut self) {
        self.geometry = GroupBoxGeometry::compute(&self.layout_input());
    }

    fn update_title_font(&mut self) {
        self.title_font = derive_title_font(&self.font, self.title_bold, self.title_scale);
        self.calculate_frame();
        self.update_geometry();
        self.update();
    }

    /// Hand the content margins to the child layout.
    fn calculate_frame(&mut self) {
        let margins = ContentMargins::new(
            self.margins.left,
            self.space_top(),
            self.margins.right,
            self.space_bottom(),
        );
        self.children.set_content_margins(margins);
    }

    fn child_enabled_state(&self) -> bool {
        if self.checkable {
            self.checked
        } else {
            self.enabled
        }
    }

    /// Enable children iff checked, or mirror our own flag when not checkable.
    fn update_enabled(&mut self) {
        let enabled = self.child_enabled_state();
        let children = self.children.children();
        debug!(
            target: targets::CHILDREN,
            count = children.len(),
            enabled,
            "propagating enablement"
        );
        for child in children {
            self.children.set_child_enabled(child, enabled);
        }
    }

    /// Show or hide children and shrink or grow to the minimum height.
    fn update_collapsed(&mut self) {
        let visible = !self.is_effectively_collapsed();
        let children = self.children.children();
        debug!(
            target: targets::CHILDREN,
            count = children.len(),
            visible,
            "propagating visibility"
        );
        for child in children {
            self.children.set_child_visible(child, visible);
        }

        let height = self.minimum_size_hint().height;
        debug!(target: targets::STATE, height, "resizing to minimum height");
        self.size.height = height;
        self.update_geometry();
    }

    fn in_check_target(&self, pos: Point) -> bool {
        self.checkable
            && (self.geometry.check_hit_rect().contains(pos)
                || self.geometry.title_rect.contains(pos))
    }

    fn in_collapse_target(&self, pos: Point) -> bool {
        self.collapsible && self.geometry.collapse_hit_rect().contains(pos)
    }

    fn toggle_checked(&mut self) {
        self.set_checked(!self.checked);
        self.clicked.emit(self.checked);
    }

    fn toggle_collapsed(&mut self) {
        self.set_collapsed(!self.collapsed);
    }

    fn paint_line(&self, painter: &mut dyn Painter, y: i32) {
        let dx = TITLE_INSET as f32;
        let y = y as f32;
        painter.draw_line(
            Point::new(dx, y),
            Point::new(self.size.width - 2.0 * dx, y),
            &Stroke::new(self.line_color(), 1.0),
        );
    }
}

fn derive_title_font(font: &Font, bold: bool, scale: f32) -> Font {
    font.scaled(scale).with_bold(bold)
}

impl<H: ChildHost> Widget for GroupBox<H> {
    #[tracing::instrument(
        level = "trace",
        target = "groupbox::paint",
        skip_all,
        fields(width = self.size.width, height = self.size.height)
    )]
    fn paint(&mut self, painter: &mut dyn Painter) {
        self.update_geometry();
        self.needs_repaint = false;

        let g = self.geometry;
        let background = self.palette.background;

        painter.fill_rect(
            Rect::new(0.0, 0.0, self.size.width, self.size.height),
            background,
        );

        if self.line_top {
            self.paint_line(painter, g.line_top_y);
        }

        if self.has_title() {
            painter.fill_rect(g.title_rect, background);

            let color = if self.enabled {
                self.palette.window_text
            } else {
                self.palette.disabled_window_text
            };
            painter.draw_text(
                Point::from((g.text_x, g.text_y)),
                &self.title,
                &self.title_font,
                color,
            );
        }

        if self.line_bottom {
            self.paint_line(painter, g.line_bottom_y);
        }

        if self.checkable {
            painter.fill_rect(g.check_hit_rect(), background);
            self.style.draw_check_box(
                painter,
                g.check_rect,
                CheckboxState {
                    checked: self.checked,
                    pressed: self.check_pressed,
                    enabled: self.enabled,
                },
                &self.palette,
            );
        }

        if self.collapsible {
            painter.fill_rect(g.collapse_hit_rect(), background);

            let color = if self.collapse_pressed {
                self.palette.dark
            } else {
                self.palette.text
            };
            painter.fill_path(&chevron(g.collapse_rect, self.collapsed), color);
        }
    }

    fn mouse_press_event(&mut self, event: &MouseEvent) -> bool {
        if !self.enabled || event.button != MouseButton::Left {
            return false;
        }

        let pos = event.local_pos;
        let target = if self.in_check_target(pos) {
            self.check_pressed = true;
            Affordance::Check
        } else if self.in_collapse_target(pos) {
            // A keyboard press in progress is cancelled by the mouse.
            self.check_pressed = false;
            self.collapse_pressed = true;
            Affordance::Collapse
        } else {
            return false;
        };

        debug!(target: targets::INPUT, affordance = ?target, "press armed");
        self.press_target = Some(target);
        self.update();
        true
    }

    fn mouse_move_event(&mut self, event: &MouseEvent) -> bool {
        if !self.enabled {
            return false;
        }

        let pos = event.local_pos;
        match self.press_target {
            Some(Affordance::Check) => {
                let inside = self.in_check_target(pos);
                if inside != self.check_pressed {
                    self.check_pressed = inside;
                    self.update();
                }
                true
            }
            Some(Affordance::Collapse) => {
                let inside = self.in_collapse_target(pos);
                if inside != self.collapse_pressed {
                    self.collapse_pressed = inside;
                    self.update();
                }
                true
            }
            None => false,
        }
    }

    fn mouse_release_event(&mut self, event: &MouseEvent) -> bool {
        if !self.enabled || event.button != MouseButton::Left {
            return false;
        }

        let Some(target) = self.press_target.take() else {
            return false;
        };

        let pos = event.local_pos;
        match target {
            Affordance::Check => {
                self.check_pressed = false;
                if self.in_check_target(pos) {
                    self.toggle_checked();
                }
            }
            Affordance::Collapse => {
                self.collapse_pressed = false;
                if self.in_collapse_target(pos) {
                    self.toggle_collapsed();
                }
            }
        }

        self.update();
        true
    }

    fn key_press_event(&mut self, event: &KeyEvent) -> bool {
        if !self.enabled || !self.focused || !self.checkable || !event.key.is_activation() {
            return false;
        }

        // The mouse owns the press state until its button is released.
        if self.press_target.is_some() {
            return false;
        }

        // Auto-repeat never arms on its own.
        if event.is_repeat {
            return self.check_pressed;
        }

        if !self.check_pressed {
            self.check_pressed = true;
            self.update();
        }
        true
    }

    fn key_release_event(&mut self, event: &KeyEvent) -> bool {
        if !self.enabled || !self.focused || !self.checkable || !event.key.is_activation() {
            return false;
        }

        if !self.check_pressed || self.press_target.is_some() {
            return false;
        }

        self.check_pressed = false;
        self.toggle_checked();
        self.update();
        true
    }

    fn resize_event(&mut self, size: Size) {
        if self.size != size {
            debug!(target: targets::STATE, width = size.width, height = size.height, "resized");
        }
        self.size = size;
        self.update_geometry();
        self.update();
    }

    fn change_event(&mut self, event: &ChangeEvent) {
        match event {
            ChangeEvent::EnabledChange(enabled) => {
                self.enabled = *enabled;
                if !*enabled {
                    self.check_pressed = false;
                    self.collapse_pressed = false;
                    self.press_target = None;
                }
                self.update_enabled();
                self.update();
            }
            ChangeEvent::FontChange(font) => {
                self.set_font(font.clone());
            }
            ChangeEvent::PaletteChange(palette) => {
                self.set_palette(*palette);
            }
            ChangeEvent::ChildAdded(child) => {
                debug!(target: targets::CHILDREN, ?child, "child added");
                if self.checkable {
                    let enabled = self.child_enabled_state();
                    self.children.set_child_enabled(*child, enabled);
                }
                if self.is_effectively_collapsed() {
                    self.children.set_child_visible(*child, false);
                }
            }
            ChangeEvent::FocusIn => {
                self.focused = true;
            }
            ChangeEvent::FocusOut => {
                self.focused = false;
                if self.check_pressed && self.press_target.is_none() {
                    self.check_pressed = false;
                    self.update();
                }
            }
        }

        self.calculate_frame();
    }

    fn minimum_size_hint(&self) -> Size {
        let (width, height) = title_row_size(
            self.title_text_width(),
            &self.title_metrics(),
            self.checkable,
            self.collapsible,
        );

        let mut size = Size::from((width, height));
        if !self.is_effectively_collapsed() {
            size = self.style.group_box_size_from_contents(size);
        }

        match self.children.layout_minimum_size() {
            Some(layout) => size.expanded_to(layout),
            None => size,
        }
    }
}

impl Default for GroupBox<ChildList> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<H: ChildHost + std::fmt::Debug> std::fmt::Debug for GroupBox<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupBox")
            .field("title", &self.title)
            .field("checkable", &self.checkable)
            .field("checked", &self.checked)
            .field("collapsible", &self.collapsible)
            .field("collapsed", &self.collapsed)
            .field("enabled", &self.enabled)
            .field("size", &self.size)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

// Ensure GroupBox is Send + Sync
static_assertions::assert_impl_all!(GroupBox<ChildList>: Send, Sync);
