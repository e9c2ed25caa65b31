//! TOML configuration for a group box.
//!
//! Every field is optional; [`GroupBox::apply_config`] only touches the
//! properties a configuration sets.
//!
//! ```toml
//! title = "Advanced"
//! title_scale = 1.25
//! title_alignment = ["right", "top"]
//! line_bottom = true
//! line_color = "#c8c8c8"
//! checkable = true
//! checked = false
//! ```

use std::path::Path;

use groupbox_core::logging::targets;
use groupbox_core::{Error, Result};
use groupbox_render::Color;
use serde::Deserialize;

use crate::alignment::{Alignment, AlignmentFlag};
use crate::group_box::GroupBox;
use crate::host::ChildHost;

/// Group box properties loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupBoxConfig {
    pub title: Option<String>,
    pub title_bold: Option<bool>,
    pub title_scale: Option<f32>,
    pub title_alignment: Option<Vec<AlignmentFlag>>,

    pub line_top: Option<bool>,
    pub line_bottom: Option<bool>,
    pub line_top_alignment: Option<Vec<AlignmentFlag>>,
    pub line_bottom_alignment: Option<Vec<AlignmentFlag>>,
    /// Hex color, `#rrggbb` or `#rrggbbaa`.
    pub line_color: Option<String>,

    pub margin_left: Option<i32>,
    pub margin_right: Option<i32>,
    pub margin_top: Option<i32>,
    pub margin_bottom: Option<i32>,

    pub checkable: Option<bool>,
    pub checked: Option<bool>,
    pub collapsible: Option<bool>,
    pub collapsed: Option<bool>,
}

impl GroupBoxConfig {
    /// Parse and validate a configuration.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| Error::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading group box config");
        Self::from_toml_str(&text)
    }

    /// Check values the widget cannot use.
    pub fn validate(&self) -> Result<()> {
        if let Some(scale) = self.title_scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(Error::invalid_value(
                    "title_scale",
                    format!("must be a positive number, got {scale}"),
                ));
            }
        }

        self.line_color()?;
        Ok(())
    }

    /// The parsed line color, if one is set.
    pub fn line_color(&self) -> Result<Option<Color>> {
        match &self.line_color {
            None => Ok(None),
            Some(hex) => Color::from_hex(hex)
                .map(Some)
                .ok_or_else(|| Error::invalid_value("line_color", format!("'{hex}' is not a hex color"))),
        }
    }
}

fn alignment(flags: &[AlignmentFlag]) -> Alignment {
    flags.iter().copied().collect()
}

impl<H: ChildHost> GroupBox<H> {
    /// Apply every property `config` sets, through the regular setters.
    ///
    /// Capabilities are applied before the states they gate so that a
    /// configuration enabling both takes full effect.
    pub fn apply_config(&mut self, config: &GroupBoxConfig) -> Result<()> {
        config.validate()?;

        if let Some(title) = &config.title {
            self.set_title(title.clone());
        }
        if let Some(bold) = config.title_bold {
            self.set_title_bold(bold);
        }
        if let Some(scale) = config.title_scale {
            self.set_title_scale(scale);
        }
        if let Some(flags) = &config.title_alignment {
            self.set_title_alignment(alignment(flags));
        }

        if let Some(line) = config.line_top {
            self.set_line_top(line);
        }
        if let Some(line) = config.line_bottom {
            self.set_line_bottom(line);
        }
        if let Some(flags) = &config.line_top_alignment {
            self.set_line_top_alignment(alignment(flags));
        }
        if let Some(flags) = &config.line_bottom_alignment {
            self.set_line_bottom_alignment(alignment(flags));
        }
        if let Some(color) = config.line_color()? {
            self.set_line_color(Some(color));
        }

        if let Some(margin) = config.margin_left {
            self.set_margin_left(margin);
        }
        if let Some(margin) = config.margin_right {
            self.set_margin_right(margin);
        }
        if let Some(margin) = config.margin_top {
            self.set_margin_top(margin);
        }
        if let Some(margin) = config.margin_bottom {
            self.set_margin_bottom(margin);
        }

        if let Some(checkable) = config.checkable {
            self.set_checkable(checkable);
        }
        if let Some(checked) = config.checked {
            self.set_checked(checked);
        }
        if let Some(collapsible) = config.collapsible {
            self.set_collapsible(collapsible);
        }
        if let Some(collapsed) = config.collapsed {
            self.set_collapsed(collapsed);
        }

        tracing::debug!(target: targets::CONFIG, title = self.title(), "applied group box config");
        Ok(())
    }
}
