//! Font description and text measurement.
//!
//! The widget only needs a handful of numbers from the font system: ascent,
//! descent, line height and the advance width of a string. Hosts provide
//! them through [`TextMeasure`]. [`ApproximateTextMeasure`] derives them
//! from the point size alone, which is enough for headless use and tests.

/// A font description.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    point_size: f32,
    bold: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            point_size: 10.0,
            bold: false,
        }
    }
}

impl Font {
    /// Create a font with the given family and point size.
    pub fn new(family: impl Into<String>, point_size: f32) -> Self {
        Self {
            family: family.into(),
            point_size,
            bold: false,
        }
    }

    /// The font family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The size in points.
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Whether the font is bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Set size using builder pattern.
    pub fn with_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Set boldness using builder pattern.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// A copy of this font with the point size multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            family: self.family.clone(),
            point_size: self.point_size * factor,
            bold: self.bold,
        }
    }
}

/// Integer metrics of a font, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: i32,
    /// Distance from the baseline to the bottom of the lowest glyphs.
    pub descent: i32,
    /// Line height (ascent + descent).
    pub height: i32,
}

impl FontMetrics {
    /// Create metrics from ascent and descent.
    pub const fn new(ascent: i32, descent: i32) -> Self {
        Self {
            ascent,
            descent,
            height: ascent.saturating_add(descent),
        }
    }
}

/// Source of font metrics and text widths.
pub trait TextMeasure: Send + Sync {
    /// Metrics for `font`.
    fn metrics(&self, font: &Font) -> FontMetrics;

    /// Horizontal advance of `text` rendered in `font`, in pixels.
    fn text_width(&self, font: &Font, text: &str) -> i32;
}

/// Metrics derived from the point size with fixed ratios.
///
/// Every character advances by the same width, so results are predictable
/// without a font database.
#[derive(Debug, Clone, Copy)]
pub struct ApproximateTextMeasure {
    /// Device pixels per point.
    pub pixels_per_point: f32,
}

impl Default for ApproximateTextMeasure {
    fn default() -> Self {
        Self {
            pixels_per_point: 96.0 / 72.0,
        }
    }
}

impl ApproximateTextMeasure {
    fn pixel_size(&self, font: &Font) -> f32 {
        (font.point_size() * self.pixels_per_point).max(0.0)
    }

    /// Advance width of a single character.
    pub fn char_width(&self, font: &Font) -> i32 {
        let factor = if font.is_bold() { 0.6 } else { 0.55 };
        (self.pixel_size(font) * factor).round() as i32
    }
}

impl TextMeasure for ApproximateTextMeasure {
    fn metrics(&self, font: &Font) -> FontMetrics {
        let px = self.pixel_size(font);
        FontMetrics::new((px * 0.8).ceil() as i32, (px * 0.2).ceil() as i32)
    }

    fn text_width(&self, font: &Font, text: &str) -> i32 {
        let count = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        self.char_width(font).saturating_mul(count)
    }
}
