use crate::colour::Rgb;
use std::fmt;
use std::fmt::{Display, Formatter};

/// WHO UV index exposure category.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum UvCategory {
    /// No usable reading: missing, negative or NaN.
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

/// Colour tier the presentation layer uses for the UV indicator dot.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Severity {
    Disabled,
    Success,
    Warning,
    Error,
}

impl UvCategory {
    /// Categorises a UV index reading.
    ///
    /// Thresholds are half-open: `[0, 3)` Low, `[3, 6)` Moderate, `[6, 8)` High,
    /// `[8, 11)` Very High, `11` and above Extreme.
    ///
    /// ```rust
    /// use wxdash::UvCategory;
    ///
    /// assert_eq!(UvCategory::from_index(Some(2.9)), UvCategory::Low);
    /// assert_eq!(UvCategory::from_index(Some(3.0)), UvCategory::Moderate);
    /// assert_eq!(UvCategory::from_index(Some(11.0)), UvCategory::Extreme);
    /// assert_eq!(UvCategory::from_index(None), UvCategory::None);
    /// ```
    pub fn from_index(uv: Option<f64>) -> Self {
        match uv {
            None => UvCategory::None,
            Some(v) if v.is_nan() || v < 0.0 => UvCategory::None,
            Some(v) if v < 3.0 => UvCategory::Low,
            Some(v) if v < 6.0 => UvCategory::Moderate,
            Some(v) if v < 8.0 => UvCategory::High,
            Some(v) if v < 11.0 => UvCategory::VeryHigh,
            Some(_) => UvCategory::Extreme,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UvCategory::None => "--",
            UvCategory::Low => "Low",
            UvCategory::Moderate => "Moderate",
            UvCategory::High => "High",
            UvCategory::VeryHigh => "Very High",
            UvCategory::Extreme => "Extreme",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            UvCategory::None => Severity::Disabled,
            UvCategory::Low => Severity::Success,
            UvCategory::Moderate => Severity::Warning,
            UvCategory::High | UvCategory::VeryHigh | UvCategory::Extreme => Severity::Error,
        }
    }

    /// Band colour used by the statistics table, `None` for [`UvCategory::None`].
    pub fn band_colour(self) -> Option<Rgb> {
        match self {
            UvCategory::None => None,
            UvCategory::Low => Some(Rgb(0x3E, 0xA7, 0x2D)),
            UvCategory::Moderate => Some(Rgb(0xFF, 0xF3, 0x00)),
            UvCategory::High => Some(Rgb(0xF1, 0x8B, 0x00)),
            UvCategory::VeryHigh => Some(Rgb(0xE5, 0x32, 0x10)),
            UvCategory::Extreme => Some(Rgb(0xA4, 0x56, 0x93)),
        }
    }
}

impl Display for UvCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
