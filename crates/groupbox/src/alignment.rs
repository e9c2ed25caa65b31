//! Alignment flags for the title and the rule lines.
//!
//! [`Alignment`] is a flag set, so callers can combine horizontal and
//! vertical flags (`Alignment::LEFT | Alignment::BOTTOM`). When several
//! flags of the same axis are set, a fixed precedence picks one of them.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::Deserialize;

/// A set of alignment flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment(u8);

impl Alignment {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Align to the left edge.
    pub const LEFT: Self = Self(1 << 0);
    /// Align to the right edge.
    pub const RIGHT: Self = Self(1 << 1);
    /// Center horizontally.
    pub const H_CENTER: Self = Self(1 << 2);
    /// Align to the top edge.
    pub const TOP: Self = Self(1 << 4);
    /// Align to the bottom edge.
    pub const BOTTOM: Self = Self(1 << 5);
    /// Center vertically.
    pub const V_CENTER: Self = Self(1 << 6);
    /// Center on both axes.
    pub const CENTER: Self = Self(Self::H_CENTER.0 | Self::V_CENTER.0);

    /// Raw flag bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every flag of `other` is set.
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns true if any flag of `other` is set.
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// The horizontal alignment that wins for this flag set.
    ///
    /// Priority: Right > HCenter > Left. `None` when no horizontal flag is set.
    pub fn horizontal(self) -> Option<HorizontalAlign> {
        if self.intersects(Self::RIGHT) {
            Some(HorizontalAlign::Right)
        } else if self.intersects(Self::H_CENTER) {
            Some(HorizontalAlign::Center)
        } else if self.intersects(Self::LEFT) {
            Some(HorizontalAlign::Left)
        } else {
            None
        }
    }

    /// The vertical alignment that wins for a title.
    ///
    /// Priority: Bottom > Top > VCenter. `None` when no vertical flag is set.
    pub fn vertical(self) -> Option<VerticalAlign> {
        if self.intersects(Self::BOTTOM) {
            Some(VerticalAlign::Bottom)
        } else if self.intersects(Self::TOP) {
            Some(VerticalAlign::Top)
        } else if self.intersects(Self::V_CENTER) {
            Some(VerticalAlign::Center)
        } else {
            None
        }
    }

    /// Where a rule line sits within its margin band.
    ///
    /// Priority: Top > VCenter, anything else is Bottom.
    pub fn line_position(self) -> VerticalAlign {
        if self.intersects(Self::TOP) {
            VerticalAlign::Top
        } else if self.intersects(Self::V_CENTER) {
            VerticalAlign::Center
        } else {
            VerticalAlign::Bottom
        }
    }
}

impl BitOr for Alignment {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Alignment {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitOrAssign for Alignment {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Resolved horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Resolved vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// A single alignment flag by name, as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentFlag {
    Left,
    Right,
    #[serde(alias = "hcenter")]
    HCenter,
    Top,
    Bottom,
    #[serde(alias = "vcenter")]
    VCenter,
    Center,
}

impl From<AlignmentFlag> for Alignment {
    fn from(flag: AlignmentFlag) -> Self {
        match flag {
            AlignmentFlag::Left => Alignment::LEFT,
            AlignmentFlag::Right => Alignment::RIGHT,
            AlignmentFlag::HCenter => Alignment::H_CENTER,
            AlignmentFlag::Top => Alignment::TOP,
            AlignmentFlag::Bottom => Alignment::BOTTOM,
            AlignmentFlag::VCenter => Alignment::V_CENTER,
            AlignmentFlag::Center => Alignment::CENTER,
        }
    }
}

impl FromIterator<AlignmentFlag> for Alignment {
    fn from_iter<I: IntoIterator<Item = AlignmentFlag>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Alignment::NONE, |acc, flag| acc | Alignment::from(flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_flags() {
        let a = Alignment::LEFT | Alignment::BOTTOM;
        assert!(a.contains(Alignment::LEFT));
        assert!(a.contains(Alignment::BOTTOM));
        assert!(!a.contains(Alignment::CENTER));
        assert_eq!(a & Alignment::LEFT, Alignment::LEFT);
    }

    #[test]
    fn test_horizontal_precedence() {
        assert_eq!(Alignment::LEFT.horizontal(), Some(HorizontalAlign::Left));
        assert_eq!(
            (Alignment::LEFT | Alignment::RIGHT).horizontal(),
            Some(HorizontalAlign::Right)
        );
        assert_eq!(
            (Alignment::LEFT | Alignment::H_CENTER).horizontal(),
            Some(HorizontalAlign::Center)
        );
        assert_eq!(Alignment::TOP.horizontal(), None);
    }

    #[test]
    fn test_vertical_precedence() {
        assert_eq!(
            (Alignment::TOP | Alignment::BOTTOM).vertical(),
            Some(VerticalAlign::Bottom)
        );
        assert_eq!(
            (Alignment::TOP | Alignment::V_CENTER).vertical(),
            Some(VerticalAlign::Top)
        );
        assert_eq!(Alignment::CENTER.vertical(), Some(VerticalAlign::Center));
        assert_eq!(Alignment::LEFT.vertical(), None);
    }

    #[test]
    fn test_line_position_defaults_to_bottom() {
        assert_eq!(Alignment::NONE.line_position(), VerticalAlign::Bottom);
        assert_eq!(Alignment::BOTTOM.line_position(), VerticalAlign::Bottom);
        assert_eq!(
            (Alignment::TOP | Alignment::BOTTOM).line_position(),
            VerticalAlign::Top
        );
        assert_eq!(Alignment::V_CENTER.line_position(), VerticalAlign::Center);
    }

    #[test]
    fn test_collect_flags() {
        let a: Alignment = [AlignmentFlag::Right, AlignmentFlag::VCenter]
            .into_iter()
            .collect();
        assert_eq!(a, Alignment::RIGHT | Alignment::V_CENTER);
    }
}
