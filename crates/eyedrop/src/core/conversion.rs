use serde::{Deserialize, Serialize};

use super::Space;
use crate::error::ConfigError;
use crate::Float;

/// The rounding policy for HSL coordinates.
///
/// Pickers disagree on whether HSL coordinates are floored or rounded to the
/// nearest integer. Flooring never reports more saturation or lightness than
/// there is and is the default. It tolerates a little floating point error,
/// so that an exact integer such as the 95% saturation of `#05c311` does not
/// come out as 94.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    #[default]
    Floor,
    Nearest,
}

/// The largest floating point error absorbed by [`Rounding::Floor`].
#[cfg(feature = "f64")]
const FLOOR_TOLERANCE: Float = 1e-9;
#[cfg(not(feature = "f64"))]
const FLOOR_TOLERANCE: Float = 1e-4;

impl Rounding {
    /// Apply this rounding policy to the given number.
    #[inline]
    pub fn apply(&self, value: Float) -> Float {
        match *self {
            Self::Floor => (value + FLOOR_TOLERANCE).floor(),
            Self::Nearest => value.round(),
        }
    }

    /// Get this rounding policy's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Floor => "floor",
            Self::Nearest => "nearest",
        }
    }
}

impl core::str::FromStr for Rounding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floor" => Ok(Self::Floor),
            "nearest" => Ok(Self::Nearest),
            _ => Err(ConfigError::UnknownRounding),
        }
    }
}

impl core::fmt::Display for Rounding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Round the number to the given number of decimals. The result never is
/// negative zero.
#[inline]
pub(crate) fn round_to(value: Float, decimals: i32) -> Float {
    let factor = (10.0 as Float).powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Wrap degrees into `0..360`.
#[inline]
fn wrap_degrees(degrees: Float) -> Float {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid may produce 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Determine the hue sextant in `0..6` from unit RGB coordinates, their
/// maximum, and the difference between maximum and minimum. The difference
/// must not be zero.
#[inline]
fn hue_sextant(r: Float, g: Float, b: Float, max: Float, delta: Float) -> Float {
    let h = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    if h < 0.0 {
        h + 6.0
    } else {
        h
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format 24-bit coordinates in `#rrggbb` notation.
pub(crate) fn rgb_to_hex(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Convert 24-bit RGB to HSL with hue in degrees as well as saturation and
/// lightness in percent.
///
/// Gray tones are achromatic and have hue and saturation zero. They are valid
/// colors all the same.
pub(crate) fn rgb_to_hsl(rgb: [u8; 3], rounding: Rounding) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb[0], rgb[1], rgb[2]);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, rounding.apply(lightness * 100.0)];
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let hue = hue_sextant(r, g, b, max, delta) * 60.0;

    [
        wrap_degrees(rounding.apply(hue)),
        rounding.apply(saturation * 100.0),
        rounding.apply(lightness * 100.0),
    ]
}

/// Convert 24-bit RGB to HSB/HSV with hue in degrees as well as saturation and
/// brightness in percent. All three coordinates are rounded to the nearest
/// integer.
pub(crate) fn rgb_to_hsb(rgb: [u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb[0], rgb[1], rgb[2]);
    let value = r.max(g).max(b);
    let delta = value - r.min(g).min(b);

    let hue = if delta == 0.0 {
        0.0
    } else {
        hue_sextant(r, g, b, value, delta)
    };
    let saturation = if value == 0.0 { 0.0 } else { delta / value };

    [
        wrap_degrees((60.0 * hue).round()),
        (saturation * 100.0).round(),
        (value * 100.0).round(),
    ]
}

/// Convert 24-bit RGB to CMYK with all four coordinates in percent.
///
/// Black is special-cased to `0, 0, 0, 100`, since the naive formula divides
/// by zero for it.
pub(crate) fn rgb_to_cmyk(rgb: [u8; 3]) -> [Float; 4] {
    if rgb == [0, 0, 0] {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let [r, g, b] = from_24bit(rgb[0], rgb[1], rgb[2]);
    let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);
    let k = c.min(m).min(y);

    let scale = |x: Float| ((x - k) / (1.0 - k) * 100.0).round();
    [scale(c), scale(m), scale(y), (k * 100.0).round()]
}

/// Round the coordinates produced by a [`ColorMath`](crate::ColorMath)
/// provider to display precision.
///
/// HWB arrives with whiteness and blackness in unit range and leaves as
/// integral percentages. CIELAB and CIELCh keep two decimals. Oklab and
/// Oklch keep four decimals, except for hue, which keeps two. A polar color
/// whose chroma rounds to zero is achromatic and has hue zero.
pub(crate) fn round_device_independent(space: Space, coordinates: [Float; 3]) -> [Float; 3] {
    let [c1, c2, c3] = coordinates;
    match space {
        Space::Hwb => [
            wrap_degrees(c1.round()),
            round_to(c2 * 100.0, 0),
            round_to(c3 * 100.0, 0),
        ],
        Space::Lab => [round_to(c1, 2), round_to(c2, 2), round_to(c3, 2)],
        Space::Lch => round_polar([c1, c2, c3], 2),
        Space::Oklab => [round_to(c1, 4), round_to(c2, 4), round_to(c3, 4)],
        Space::Oklch => round_polar([c1, c2, c3], 4),
        _ => coordinates,
    }
}

/// Round lightness and chroma to the given number of decimals and hue to
/// two decimals. Without chroma, hue is meaningless noise and becomes zero.
fn round_polar(coordinates: [Float; 3], decimals: i32) -> [Float; 3] {
    let [lightness, chroma, hue] = coordinates;
    let chroma = round_to(chroma, decimals);
    let hue = if chroma == 0.0 {
        0.0
    } else {
        wrap_degrees(round_to(hue, 2))
    };

    [round_to(lightness, decimals), chroma, hue]
}

// --------------------------------------------------------------------------------------------------------------------

/// Get the quantity that corresponds to 100% for every channel of the color
/// space. Hues have no such quantity and are marked with `None`. Neither does
/// hex, which always is formatted as is.
const fn percent_references(space: Space) -> [Option<Float>; 4] {
    use Space::*;

    match space {
        Hex => [None, None, None, None],
        Rgb => [Some(255.0), Some(255.0), Some(255.0), None],
        Hsl | Hwb | Hsb => [None, Some(100.0), Some(100.0), None],
        Cmyk => [Some(100.0), Some(100.0), Some(100.0), Some(100.0)],
        Lab => [Some(100.0), Some(125.0), Some(125.0), None],
        Lch => [Some(100.0), Some(150.0), None, None],
        Oklab => [Some(1.0), Some(0.4), Some(0.4), None],
        Oklch => [Some(1.0), Some(0.4), None, None],
    }
}

/// Express the channels of a color in the given space as percentages.
///
/// Hues are passed through unchanged. Magnitudes are scaled by their
/// reference quantity and rounded to two decimals.
pub(crate) fn to_percentages(space: Space, channels: &[Float; 4]) -> [Float; 4] {
    let references = percent_references(space);
    let mut result = *channels;
    for (value, reference) in result.iter_mut().zip(references) {
        if let Some(reference) = reference {
            *value = round_to(*value / reference * 100.0, 2);
        }
    }
    result
}

// ====================================================================================================================
