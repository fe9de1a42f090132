//! Block size presets.

use serde::Serialize;
use std::fmt;

/// Named block size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Small,
    #[default]
    Medium,
    Large,
}

/// Block width, height and inter-block gap in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
    pub gap: u16,
}

/// Block width, height and gap in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDimensions {
    pub width: u16,
    pub height: u16,
    pub gap: u16,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [SizePreset::Small, SizePreset::Medium, SizePreset::Large];

    /// Resolve the `size` attribute. Matching is exact; anything else,
    /// including an absent attribute, yields `Medium`.
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("small") => SizePreset::Small,
            Some("large") => SizePreset::Large,
            _ => SizePreset::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            SizePreset::Small => Dimensions { width: 8, height: 20, gap: 2 },
            SizePreset::Medium => Dimensions { width: 12, height: 30, gap: 3 },
            SizePreset::Large => Dimensions { width: 16, height: 40, gap: 4 },
        }
    }

    /// Next preset in small → medium → large → small order.
    pub fn next(&self) -> Self {
        match self {
            SizePreset::Small => SizePreset::Medium,
            SizePreset::Medium => SizePreset::Large,
            SizePreset::Large => SizePreset::Small,
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Dimensions {
    /// Approximate the pixel preset in terminal cells (a cell is roughly
    /// 4px wide and 10px tall at these scales).
    pub fn cells(&self) -> CellDimensions {
        CellDimensions {
            width: (self.width / 4).max(1),
            height: (self.height / 10).max(1),
            gap: (self.gap / 2).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_presets() {
        assert_eq!(
            SizePreset::resolve(Some("small")).dimensions(),
            Dimensions { width: 8, height: 20, gap: 2 }
        );
        assert_eq!(
            SizePreset::resolve(Some("large")).dimensions(),
            Dimensions { width: 16, height: 40, gap: 4 }
        );
    }

    #[test]
    fn test_unrecognized_falls_back_to_medium() {
        let medium = SizePreset::Medium.dimensions();
        for value in [None, Some(""), Some("huge"), Some("LARGE"), Some(" small"), Some("Medium")] {
            assert_eq!(SizePreset::resolve(value).dimensions(), medium, "{value:?}");
        }
    }

    #[test]
    fn test_cycle() {
        let mut preset = SizePreset::Small;
        for expected in [SizePreset::Medium, SizePreset::Large, SizePreset::Small] {
            preset = preset.next();
            assert_eq!(preset, expected);
        }
    }

    #[test]
    fn test_cell_dimensions() {
        assert_eq!(
            SizePreset::Small.dimensions().cells(),
            CellDimensions { width: 2, height: 2, gap: 1 }
        );
        assert_eq!(
            SizePreset::Medium.dimensions().cells(),
            CellDimensions { width: 3, height: 3, gap: 1 }
        );
        assert_eq!(
            SizePreset::Large.dimensions().cells(),
            CellDimensions { width: 4, height: 4, gap: 2 }
        );
    }
}
