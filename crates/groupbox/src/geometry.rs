//! Layout arithmetic for the group box.
//!
//! Everything here is a pure function of the widget size, the title font
//! metrics and the alignment/capability flags. The widget recomputes a
//! [`GroupBoxGeometry`] on every paint pass and hit-tests against the cached
//! result until the next one.
//!
//! All values are whole pixels and use truncating integer division.

use groupbox_render::{FontMetrics, Rect};

use crate::alignment::{Alignment, HorizontalAlign, VerticalAlign};

/// Horizontal inset of the title and the rule lines.
pub const TITLE_INSET: i32 = 2;

/// Padding added around the checkbox and collapse glyphs for hit-testing.
pub const HIT_PADDING: f32 = 2.0;

/// Largest coordinate magnitude the layout works with. Inputs beyond it are
/// clamped so the arithmetic below cannot overflow.
pub const MAX_EXTENT: i32 = 1 << 24;

fn clamp_extent(value: i32) -> i32 {
    value.clamp(-MAX_EXTENT, MAX_EXTENT)
}

fn clamp_metrics(metrics: &FontMetrics) -> FontMetrics {
    FontMetrics::new(clamp_extent(metrics.ascent), clamp_extent(metrics.descent))
}

/// Margin overrides. Negative values mean "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    /// Sentinel for an unset margin.
    pub const UNSET: i32 = -1;
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: TITLE_INSET,
            right: TITLE_INSET,
            top: Self::UNSET,
            bottom: Self::UNSET,
        }
    }
}

/// Space reserved above the content area.
///
/// The explicit top margin when set, else the title line height plus 4, or 4
/// without a title.
pub fn space_top(margin_top: i32, has_title: bool, metrics: &FontMetrics) -> i32 {
    if margin_top >= 0 {
        margin_top
    } else if has_title {
        metrics.height.saturating_add(4)
    } else {
        4
    }
}

/// Space reserved below the content area.
pub fn space_bottom(margin_bottom: i32) -> i32 {
    if margin_bottom >= 0 { margin_bottom } else { 4 }
}

/// Width of the checkbox slot, zero when not checkable.
pub fn check_size(checkable: bool, metrics: &FontMetrics) -> i32 {
    if checkable { metrics.height.saturating_add(4) } else { 0 }
}

/// Width of the collapse icon slot, zero when not collapsible.
pub fn collapse_size(collapsible: bool, metrics: &FontMetrics) -> i32 {
    if collapsible { metrics.ascent } else { 0 }
}

/// Smallest size that fits the title row, before any frame decoration.
pub fn title_row_size(
    text_width: i32,
    metrics: &FontMetrics,
    checkable: bool,
    collapsible: bool,
) -> (i32, i32) {
    let mut width = text_width.saturating_add(4);
    if checkable {
        width = width.saturating_add(metrics.height.saturating_add(4));
    }
    if collapsible {
        width = width.saturating_add(metrics.height);
    }
    (width, metrics.height)
}

/// Everything the layout calculation reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub width: i32,
    pub height: i32,
    pub metrics: FontMetrics,
    /// Advance width of the title, zero for an empty title.
    pub text_width: i32,
    pub has_title: bool,
    pub title_alignment: Alignment,
    pub line_top_alignment: Alignment,
    pub line_bottom_alignment: Alignment,
    pub margins: Margins,
    pub checkable: bool,
    pub collapsible: bool,
}

/// Computed positions and rectangles for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupBoxGeometry {
    pub check_size: i32,
    pub collapse_size: i32,
    /// Which horizontal branch placed the title, if any.
    pub horizontal: Option<HorizontalAlign>,
    /// Title baseline origin.
    pub text_x: i32,
    pub text_y: i32,
    pub check_x: i32,
    pub check_y: i32,
    pub collapse_x: i32,
    pub collapse_y: i32,
    pub space_top: i32,
    pub space_bottom: i32,
    pub line_top_y: i32,
    pub line_bottom_y: i32,
    /// Area covered by the title text, empty without a title.
    pub title_rect: Rect,
    /// Checkbox glyph, empty when not checkable.
    pub check_rect: Rect,
    /// Collapse chevron glyph, empty when not collapsible.
    pub collapse_rect: Rect,
}

impl GroupBoxGeometry {
    /// Run the layout calculation.
    pub fn compute(input: &LayoutInput) -> Self {
        let m = &clamp_metrics(&input.metrics);
        let width = clamp_extent(input.width);
        let height = clamp_extent(input.height);
        let dx = TITLE_INSET;

        let check_size = check_size(input.checkable, m);
        let collapse_size = collapse_size(input.collapsible, m);
        let tw = if input.has_title {
            clamp_extent(input.text_width)
        } else {
            0
        };

        let space_top = space_top(clamp_extent(input.margins.top), input.has_title, m);
        let space_bottom = space_bottom(clamp_extent(input.margins.bottom));

        let horizontal = input.title_alignment.horizontal();
        let text_x = match horizontal {
            Some(HorizontalAlign::Right) => width - dx - tw - collapse_size,
            Some(HorizontalAlign::Center) => {
                (width - tw - check_size - collapse_size) / 2 + check_size
            }
            Some(HorizontalAlign::Left) => dx + check_size,
            None => 0,
        };

        let text_y = match input.title_alignment.vertical() {
            Some(VerticalAlign::Bottom) => space_top - m.descent - 2,
            Some(VerticalAlign::Top) => m.ascent + 2,
            Some(VerticalAlign::Center) => space_top / 2 + m.descent + 2,
            None => 0,
        };

        let check_x = text_x - check_size;
        let check_y = text_y - m.ascent / 2;
        let collapse_x = width - collapse_size;
        let collapse_y = text_y - m.ascent / 2;

        let line_top_y = match input.line_top_alignment.line_position() {
            VerticalAlign::Top => 2,
            VerticalAlign::Center => space_top / 2,
            VerticalAlign::Bottom => space_top - 2,
        };
        let line_bottom_y = match input.line_bottom_alignment.line_position() {
            VerticalAlign::Top => height - space_bottom + 2,
            VerticalAlign::Center => height - space_bottom / 2,
            VerticalAlign::Bottom => height - 2,
        };

        let title_rect = if input.has_title {
            let available = width - check_size - collapse_size - 4 * dx;
            let extent = (tw + dx).min(available).max(0);
            Rect::from_ints(text_x - dx, text_y - m.ascent + m.descent, extent, m.height)
        } else {
            Rect::ZERO
        };

        let check_rect = if input.checkable {
            let size = check_size - 4;
            Rect::from_ints(check_x + 2, check_y - size / 2, size, size)
        } else {
            Rect::ZERO
        };

        let collapse_rect = if input.collapsible {
            let size = collapse_size - 4;
            Rect::from_ints(collapse_x + 2, collapse_y - size / 2, size, size)
        } else {
            Rect::ZERO
        };

        Self {
            check_size,
            collapse_size,
            horizontal,
            text_x,
            text_y,
            check_x,
            check_y,
            collapse_x,
            collapse_y,
            space_top,
            space_bottom,
            line_top_y,
            line_bottom_y,
            title_rect,
            check_rect,
            collapse_rect,
        }
    }

    /// Pointer target for the checkbox: the glyph plus a padding band.
    pub fn check_hit_rect(&self) -> Rect {
        hit_rect(self.check_size, self.check_rect)
    }

    /// Pointer target for the collapse icon: the glyph plus a padding band.
    pub fn collapse_hit_rect(&self) -> Rect {
        hit_rect(self.collapse_size, self.collapse_rect)
    }
}

fn hit_rect(slot: i32, glyph: Rect) -> Rect {
    if slot == 0 {
        Rect::ZERO
    } else {
        glyph.inflate(HIT_PADDING)
    }
}
