//! Heatmap colours for the monthly statistics table.
//!
//! Each [`ColourKind`] has its own scale. Continuous scales are built from
//! independent per-channel linear ramps over fixed value ranges (see
//! [`range_pos`]); UV uses the five discrete WHO band colours. The text colour
//! is picked from the input value, not from the resulting background.

use crate::types::uv_category::UvCategory;
use crate::WxError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

    /// Builds a colour from unclamped channel intensities, rounding each to
    /// the nearest integer and clamping it to 0-255.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Rgb(channel(r), channel(g), channel(b))
    }
}

/// `#RRGGBB`, uppercase hex.
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Background and foreground colour of one table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColourStyle {
    pub background: Rgb,
    pub text: Rgb,
}

impl ColourStyle {
    /// Style for a cell without a value.
    pub const NEUTRAL: ColourStyle = ColourStyle {
        background: Rgb::WHITE,
        text: Rgb::BLACK,
    };

    fn new(background: Rgb, white_text: bool) -> Self {
        Self {
            background,
            text: if white_text { Rgb::WHITE } else { Rgb::BLACK },
        }
    }
}

/// The metric a statistics cell shows, selecting its colour scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourKind {
    Temp,
    Uv,
    Rain,
    Green,
    Humidity,
    Sunshine,
    Days,
}

impl ColourKind {
    pub fn name(self) -> &'static str {
        match self {
            ColourKind::Temp => "temp",
            ColourKind::Uv => "uv",
            ColourKind::Rain => "rain",
            ColourKind::Green => "green",
            ColourKind::Humidity => "humidity",
            ColourKind::Sunshine => "sunshine",
            ColourKind::Days => "days",
        }
    }

    /// Colours for `value` on this kind's scale.
    pub fn colour(self, value: Option<f64>) -> ColourStyle {
        colour_for(self, value)
    }

    /// Renders the cell text: the value at the kind's precision followed by its unit.
    ///
    /// ```rust
    /// use wxdash::ColourKind;
    ///
    /// assert_eq!(ColourKind::Temp.format_value(Some(33.08)), "33.1 °C");
    /// assert_eq!(ColourKind::Days.format_value(Some(1.0)), "1 day");
    /// assert_eq!(ColourKind::Days.format_value(Some(11.0)), "11 days");
    /// assert_eq!(ColourKind::Rain.format_value(None), "--");
    /// ```
    pub fn format_value(self, value: Option<f64>) -> String {
        let Some(v) = value else {
            return "--".to_owned();
        };
        let (decimals, unit) = match self {
            ColourKind::Temp => (1, "°C"),
            ColourKind::Rain => (1, "mm"),
            ColourKind::Humidity => (1, "%"),
            ColourKind::Uv | ColourKind::Green | ColourKind::Sunshine => (1, ""),
            ColourKind::Days if v == 1.0 => (0, "day"),
            ColourKind::Days => (0, "days"),
        };
        let rounded = crate::normalise::round_half_away(decimals as u32, v);
        if unit.is_empty() {
            format!("{:.*}", decimals, rounded)
        } else {
            format!("{:.*} {}", decimals, rounded, unit)
        }
    }
}

impl Display for ColourKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColourKind {
    type Err = WxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temp" => Ok(ColourKind::Temp),
            "uv" => Ok(ColourKind::Uv),
            "rain" => Ok(ColourKind::Rain),
            "green" => Ok(ColourKind::Green),
            "humidity" => Ok(ColourKind::Humidity),
            "sunshine" => Ok(ColourKind::Sunshine),
            "days" => Ok(ColourKind::Days),
            other => Err(WxError::UnknownColourKind(other.to_owned())),
        }
    }
}

/// Position of `value` between `start` and `stop`, clamped to `[0, 1]`.
///
/// `start` may be greater than `stop` for a falling ramp: the result is then 0
/// at `start` and 1 at `stop`.
///
/// ```rust
/// use wxdash::range_pos;
///
/// assert_eq!(range_pos(5.0, 0.0, 10.0), 0.5);
/// assert_eq!(range_pos(-3.0, 0.0, 10.0), 0.0);
/// assert_eq!(range_pos(2.5, 10.0, 0.0), 0.75);
/// assert_eq!(range_pos(20.0, 10.0, 0.0), 0.0);
/// ```
pub fn range_pos(value: f64, start: f64, stop: f64) -> f64 {
    if start < stop {
        if value < start {
            0.0
        } else if value > stop {
            1.0
        } else {
            (value - start) / (stop - start)
        }
    } else if value < stop {
        1.0
    } else if value > start {
        0.0
    } else {
        (start - value) / (start - stop)
    }
}

/// Maps a value to its cell colours on the scale of `kind`.
///
/// A missing value gets [`ColourStyle::NEUTRAL`].
///
/// ```rust
/// use wxdash::{colour_for, ColourKind};
///
/// let style = colour_for(ColourKind::Uv, Some(5.0));
/// assert_eq!(style.background.to_string(), "#FFF300");
/// assert_eq!(style.text.to_string(), "#000000");
/// ```
pub fn colour_for(kind: ColourKind, value: Option<f64>) -> ColourStyle {
    let Some(v) = value else {
        return ColourStyle::NEUTRAL;
    };
    match kind {
        ColourKind::Temp => temperature(v),
        ColourKind::Uv => uv(v),
        ColourKind::Rain => precipitation(v),
        ColourKind::Green => green(v),
        ColourKind::Humidity => humidity(v),
        ColourKind::Sunshine => sunshine(v),
        ColourKind::Days => days(v),
    }
}

/// Name-based variant of [`colour_for`] for callers holding the kind as text.
///
/// # Errors
///
/// Returns [`WxError::UnknownColourKind`] when `kind` names no scale.
pub fn colour_for_name(kind: &str, value: Option<f64>) -> Result<ColourStyle, WxError> {
    Ok(colour_for(kind.parse()?, value))
}

// Blue below freezing through white around 4.5 °C to red above 40 °C, with
// the blue channel fading out again for extreme cold.
fn temperature(v: f64) -> ColourStyle {
    let red = if v < 4.5 {
        range_pos(v, -42.75, 4.5)
    } else {
        range_pos(v, 60.0, 41.5)
    };
    let green = if v <= 4.5 {
        range_pos(v, -42.75, 4.5)
    } else {
        range_pos(v, 41.5, 4.5)
    };
    let blue = if v < -42.78 {
        range_pos(v, -90.0, -42.78)
    } else {
        range_pos(v, 23.0, 4.5)
    };
    let background = Rgb::from_channels(red * 255.0, green * 255.0, blue * 255.0);
    ColourStyle::new(background, v < -23.3 || v >= 37.8)
}

fn uv(v: f64) -> ColourStyle {
    // Negative readings still get the lowest band here.
    let category = match UvCategory::from_index(Some(v)) {
        UvCategory::None => UvCategory::Low,
        category => category,
    };
    let background = category.band_colour().unwrap_or(Rgb::WHITE);
    let white_text = !matches!(category, UvCategory::Moderate | UvCategory::High);
    ColourStyle::new(background, white_text)
}

fn precipitation(v: f64) -> ColourStyle {
    let red_green = range_pos(v, 165.6, 0.0) * 255.0;
    let blue = range_pos(v, 300.0, 165.61) * 207.0 + 48.0;
    ColourStyle::new(Rgb::from_channels(red_green, red_green, blue), v > 90.0)
}

fn green(v: f64) -> ColourStyle {
    let outer = range_pos(v, 165.6, 0.0) * 255.0;
    let middle = range_pos(v, 300.0, 165.61) * 207.0 + 48.0;
    ColourStyle::new(Rgb::from_channels(outer, middle, outer), v >= 200.0)
}

fn humidity(v: f64) -> ColourStyle {
    let red_green = range_pos(v, 66.67, 0.0) * 255.0;
    let blue = range_pos(v, 133.33, 66.667) * 255.0;
    ColourStyle::new(Rgb::from_channels(red_green, red_green, blue), v >= 40.0)
}

fn sunshine(v: f64) -> ColourStyle {
    let red_green = if v < 90.0 {
        range_pos(v, 0.0, 90.0) * 170.0
    } else if v < 180.0 {
        range_pos(v, 90.0, 180.0) * 42.5 + 170.0
    } else {
        range_pos(v, 180.0, 360.0) * 42.5 + 212.5
    };
    let blue = if v < 90.0 {
        range_pos(v, 0.0, 90.0) * 170.0
    } else if v < 270.0 {
        range_pos(v, 150.0, 90.0) * 170.0
    } else {
        range_pos(v, 270.0, 720.0) * 255.0
    };
    ColourStyle::new(Rgb::from_channels(red_green, red_green, blue), v < 80.0)
}

fn days(v: f64) -> ColourStyle {
    let red_green = range_pos(v, 20.0, 0.0) * 255.0;
    let blue = range_pos(v, 40.0, 20.0) * 255.0;
    ColourStyle::new(Rgb::from_channels(red_green, red_green, blue), v >= 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(kind: ColourKind, value: f64) -> (String, String) {
        let style = colour_for(kind, Some(value));
        (style.background.to_string(), style.text.to_string())
    }

    #[test]
    fn test_missing_value_is_neutral() {
        for kind in [
            ColourKind::Temp,
            ColourKind::Uv,
            ColourKind::Rain,
            ColourKind::Green,
            ColourKind::Humidity,
            ColourKind::Sunshine,
            ColourKind::Days,
        ] {
            assert_eq!(colour_for(kind, None), ColourStyle::NEUTRAL, "kind {kind}");
        }
        assert_eq!(ColourStyle::NEUTRAL.background.to_string(), "#FFFFFF");
    }

    #[test]
    fn test_range_pos_clamps_both_directions() {
        assert_eq!(range_pos(11.0, 0.0, 10.0), 1.0);
        assert_eq!(range_pos(-1.0, 10.0, 0.0), 1.0);
        assert_eq!(range_pos(10.0, 10.0, 0.0), 0.0);
        assert_eq!(range_pos(0.0, 10.0, 0.0), 1.0);
    }

    #[test]
    fn test_temperature_scale() {
        assert_eq!(hex(ColourKind::Temp, 20.0), ("#FF9429".to_string(), "#000000".to_string()));
        assert_eq!(hex(ColourKind::Temp, 4.5), ("#FFFFFF".to_string(), "#000000".to_string()));
        assert_eq!(hex(ColourKind::Temp, -50.0), ("#0000D8".to_string(), "#FFFFFF".to_string()));
        assert_eq!(hex(ColourKind::Temp, 37.8).1, "#FFFFFF");
        assert_eq!(hex(ColourKind::Temp, -23.3).1, "#000000");
        assert_eq!(hex(ColourKind::Temp, -23.4).1, "#FFFFFF");
    }

    #[test]
    fn test_uv_bands() {
        assert_eq!(hex(ColourKind::Uv, 1.0), ("#3EA72D".to_string(), "#FFFFFF".to_string()));
        assert_eq!(hex(ColourKind::Uv, 3.0), ("#FFF300".to_string(), "#000000".to_string()));
        assert_eq!(hex(ColourKind::Uv, 7.9), ("#F18B00".to_string(), "#000000".to_string()));
        assert_eq!(hex(ColourKind::Uv, 8.0), ("#E53210".to_string(), "#FFFFFF".to_string()));
        assert_eq!(hex(ColourKind::Uv, 12.0), ("#A45693".to_string(), "#FFFFFF".to_string()));
        assert_eq!(hex(ColourKind::Uv, -1.0), ("#3EA72D".to_string(), "#FFFFFF".to_string()));
    }

    #[test]
    fn test_days_scale() {
        assert_eq!(hex(ColourKind::Days, 0.0), ("#FFFFFF".to_string(), "#000000".to_string()));
        assert_eq!(hex(ColourKind::Days, 20.0), ("#0000FF".to_string(), "#FFFFFF".to_string()));
        assert_eq!(hex(ColourKind::Days, 40.0), ("#000000".to_string(), "#FFFFFF".to_string()));
    }

    #[test]
    fn test_humidity_and_rain_scales() {
        assert_eq!(hex(ColourKind::Humidity, 40.0), ("#6666FF".to_string(), "#FFFFFF".to_string()));
        assert_eq!(hex(ColourKind::Rain, 0.0), ("#FFFFFF".to_string(), "#000000".to_string()));
        assert_eq!(hex(ColourKind::Rain, 300.0), ("#000030".to_string(), "#FFFFFF".to_string()));
        assert_eq!(hex(ColourKind::Green, 0.0), ("#FFFFFF".to_string(), "#000000".to_string()));
        assert_eq!(hex(ColourKind::Green, 300.0), ("#003000".to_string(), "#FFFFFF".to_string()));
    }

    #[test]
    fn test_sunshine_scale() {
        assert_eq!(hex(ColourKind::Sunshine, 0.0), ("#000000".to_string(), "#FFFFFF".to_string()));
        assert_eq!(hex(ColourKind::Sunshine, 90.0).1, "#000000");
        assert_eq!(hex(ColourKind::Sunshine, 720.0), ("#FFFFFF".to_string(), "#000000".to_string()));
    }

    #[test]
    fn test_channels_are_clamped() {
        assert_eq!(Rgb::from_channels(-10.0, 300.0, 127.5), Rgb(0, 255, 128));
        assert_eq!(Rgb::from_channels(f64::NAN, 0.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("temp".parse::<ColourKind>().unwrap(), ColourKind::Temp);
        assert_eq!("days".parse::<ColourKind>().unwrap(), ColourKind::Days);
        match "pressure".parse::<ColourKind>() {
            Err(WxError::UnknownColourKind(name)) => assert_eq!(name, "pressure"),
            other => panic!("Expected UnknownColourKind, got {:?}", other),
        }
        assert!(colour_for_name("wind", Some(1.0)).is_err());
        assert_eq!(
            colour_for_name("uv", Some(12.0)).unwrap(),
            colour_for(ColourKind::Uv, Some(12.0))
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!(ColourKind::Humidity.format_value(Some(93.1666)), "93.2 %");
        assert_eq!(ColourKind::Uv.format_value(Some(9.16666)), "9.2");
        assert_eq!(ColourKind::Days.format_value(Some(0.0)), "0 days");
    }
}
